// === Storage keys ===
// Every collection is serialized whole under its own key; an absent key
// loads as the empty collection.
pub const USERS_KEY: &str = "users";
pub const POSTS_KEY: &str = "posts";
pub const FRIENDS_KEY: &str = "friends";
pub const NOTIFICATIONS_KEY: &str = "notifications";
pub const CONVERSATIONS_KEY: &str = "conversations";
pub const SETTINGS_KEY: &str = "settings";
pub const SESSION_KEY: &str = "session";

// === Input limits ===
pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 50;
pub const MIN_PASSWORD_LENGTH: usize = 3;
pub const MAX_POST_LENGTH: usize = 5000;
pub const MAX_BIO_LENGTH: usize = 500;

// === Profile defaults ===
pub const DEFAULT_BIO: &str = "Hello! I am new to Nexus.";

/// Built-in avatar (inline SVG) used until the user uploads a picture.
pub const DEFAULT_AVATAR: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iMjAwIiBoZWlnaHQ9IjIwMCIgdmlld0JveD0iMCAwIDIwMCAyMDAiIGZpbGw9Im5vbmUiIHhtbG5zPSJodHRwOi8vd3d3LnczLm9yZy8yMDAwL3N2ZyI+CjxyZWN0IHdpZHRoPSIyMDAiIGhlaWdodD0iMjAwIiBmaWxsPSIjNDQ3NmZmIi8+CjxjaXJjbGUgY3g9IjEwMCIgY3k9Ijg1IiByPSI0MCIgZmlsbD0id2hpdGUiLz4KPHBhdGggZD0iTTEwMCAxNDBDMTE2LjU2OSAxNDAgMTMwIDE1My40MzEgMTMwIDE3MEg3MEM3MCAxNTMuNDMxIDgzLjQzMSAxNDAgMTAwIDE0MFoiIGZpbGw9IndoaXRlIi8+Cjwvc3ZnPgo=";

// === Messaging ===
/// Replies the chat simulation picks from, uniformly at random.
pub const CANNED_REPLIES: &[&str] = &[
    "That sounds great!",
    "Haha, totally agree.",
    "Tell me more about that.",
    "Nice! I was just thinking the same thing.",
    "Sounds like a plan.",
    "Oh really? Interesting!",
    "Catch you later!",
];

/// Delay the host should wait before appending the simulated reply.
pub fn reply_delay_ms() -> u64 {
    std::env::var("NEXUS_REPLY_DELAY_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(1500)
}
