use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct User {
    pub username: String,
    pub password: String,
    pub email: String,
    pub bio: Option<String>,
    pub profile_pic: String,
    pub join_date: String,
    #[serde(default)]
    pub stats: UserStats,
}

/// Display counters shown on the profile card. Post/like/comment totals for
/// the profile view are always recomputed from the post collection instead.
#[derive(Serialize, Deserialize, Clone, Default, Debug)]
pub struct UserStats {
    pub posts: u32,
    pub followers: u32,
    pub following: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Post {
    pub id: String,
    pub author: String,
    pub text: String,
    pub image: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub text: String,
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct Friend {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub avatar: Option<String>,
    #[serde(default)]
    pub mutual_count: u32,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct Notification {
    pub id: String,
    pub kind: String,
    pub actor: String,
    pub text: String,
    pub created_at: String,
    #[serde(default)]
    pub read: bool,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct Conversation {
    pub id: String,
    pub peer: String,
    pub peer_avatar: Option<String>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub sent_at: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Me,
    Peer,
}

/// Flat settings record. The string fields are stored and applied as-is;
/// unknown values are trusted rather than validated against an allowed set.
#[derive(Serialize, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub private_account: bool,
    #[serde(default = "default_true")]
    pub notifications_enabled: bool,
    #[serde(default = "default_visibility")]
    pub post_visibility: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            private_account: false,
            notifications_enabled: true,
            post_visibility: default_visibility(),
            theme: default_theme(),
            language: default_language(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_visibility() -> String {
    "everyone".to_string()
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_language() -> String {
    "en".to_string()
}
