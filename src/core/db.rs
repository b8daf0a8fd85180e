use chrono::{Duration, Utc};

use crate::config::{
    CONVERSATIONS_KEY, DEFAULT_AVATAR, FRIENDS_KEY, NOTIFICATIONS_KEY, POSTS_KEY, SESSION_KEY,
    SETTINGS_KEY, USERS_KEY,
};
use crate::core::errors::Result;
use crate::core::helpers::new_id;
use crate::models::models::{
    Comment, Conversation, Friend, Message, Notification, Post, Sender, User, UserStats,
};
use crate::{App, Store};

fn iso_ago(ago: Duration) -> String {
    (Utc::now() - ago).to_rfc3339()
}

/// Install the demo users, posts, friends, notifications and conversations
/// into an empty store. Returns false without touching anything when user
/// data already exists.
pub fn seed_demo_data(app: &mut App) -> Result<bool> {
    if !app.store.users.is_empty() {
        return Ok(false); // Already initialized
    }

    let alice = User {
        username: "alice".to_string(),
        password: "alice".to_string(),
        email: "alice@example.com".to_string(),
        bio: Some("Hello, I'm Alice!".to_string()),
        profile_pic: DEFAULT_AVATAR.to_string(),
        join_date: iso_ago(Duration::days(40)),
        stats: UserStats { posts: 2, followers: 14, following: 9 },
    };
    let bob = User {
        username: "bob".to_string(),
        password: "bob".to_string(),
        email: "bob@example.com".to_string(),
        bio: Some("Bob's corner of the internet".to_string()),
        profile_pic: DEFAULT_AVATAR.to_string(),
        join_date: iso_ago(Duration::days(25)),
        stats: UserStats { posts: 1, followers: 8, following: 12 },
    };
    app.store.users = vec![alice, bob];
    app.save_users()?;

    // Newest first, matching feed order.
    app.store.posts = vec![
        Post {
            id: new_id(),
            author: "alice".to_string(),
            text: "Just finished an amazing project. Feeling productive today!".to_string(),
            image: None,
            created_at: iso_ago(Duration::hours(3)),
            likes: vec!["bob".to_string()],
            comments: vec![seed_comment("bob", "Congrats!", Duration::hours(2))],
        },
        Post {
            id: new_id(),
            author: "bob".to_string(),
            text: "Hey everyone! Just joined Nexus, looking forward to connecting with you all.".to_string(),
            image: None,
            created_at: iso_ago(Duration::days(2)),
            likes: vec!["alice".to_string()],
            comments: Vec::new(),
        },
        Post {
            id: new_id(),
            author: "alice".to_string(),
            text: "Welcome to my feed! Excited to share thoughts here.".to_string(),
            image: None,
            created_at: iso_ago(Duration::days(10)),
            likes: Vec::new(),
            comments: Vec::new(),
        },
    ];
    app.save_posts()?;

    app.store.friends = vec![
        Friend {
            id: new_id(),
            username: "bob".to_string(),
            display_name: "Bob Miller".to_string(),
            avatar: None,
            mutual_count: 3,
        },
        Friend {
            id: new_id(),
            username: "clara".to_string(),
            display_name: "Clara Jones".to_string(),
            avatar: None,
            mutual_count: 1,
        },
    ];
    app.save_friends()?;

    app.store.notifications = vec![
        Notification {
            id: new_id(),
            kind: "like".to_string(),
            actor: "bob".to_string(),
            text: "liked your post".to_string(),
            created_at: iso_ago(Duration::hours(1)),
            read: false,
        },
        Notification {
            id: new_id(),
            kind: "friend".to_string(),
            actor: "clara".to_string(),
            text: "accepted your friend request".to_string(),
            created_at: iso_ago(Duration::days(1)),
            read: true,
        },
    ];
    app.save_notifications()?;

    app.store.conversations = vec![
        Conversation {
            id: new_id(),
            peer: "Bob Miller".to_string(),
            peer_avatar: None,
            messages: vec![
                Message {
                    id: new_id(),
                    sender: Sender::Peer,
                    text: "Hey, did you see the new feed?".to_string(),
                    sent_at: iso_ago(Duration::hours(5)),
                },
                Message {
                    id: new_id(),
                    sender: Sender::Me,
                    text: "Yes! Looks great.".to_string(),
                    sent_at: iso_ago(Duration::hours(4)),
                },
            ],
        },
        Conversation {
            id: new_id(),
            peer: "Clara Jones".to_string(),
            peer_avatar: None,
            messages: Vec::new(),
        },
    ];
    app.save_conversations()?;

    Ok(true)
}

fn seed_comment(author: &str, text: &str, ago: Duration) -> Comment {
    Comment {
        id: new_id(),
        author: author.to_string(),
        text: text.to_string(),
        created_at: iso_ago(ago),
    }
}

/// Clear every persisted key and the in-memory mirror.
pub fn reset_data(app: &mut App) -> Result<()> {
    for key in [
        USERS_KEY,
        POSTS_KEY,
        FRIENDS_KEY,
        NOTIFICATIONS_KEY,
        CONVERSATIONS_KEY,
        SETTINGS_KEY,
        SESSION_KEY,
    ] {
        app.repo.delete(key)?;
    }

    app.store = Store::default();
    app.session = None;
    Ok(())
}
