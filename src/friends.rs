use crate::core::errors::{AppError, Result};
use crate::core::helpers::{new_id, sanitize_text};
use crate::models::models::Friend;
use crate::App;

pub fn friends(app: &App) -> &[Friend] {
    &app.store.friends
}

/// Add a friend edge. Idempotent by username: adding someone already in the
/// list returns the existing edge unchanged.
pub fn add_friend(
    app: &mut App,
    username: &str,
    display_name: &str,
    avatar: Option<String>,
) -> Result<Friend> {
    let username = sanitize_text(username);
    if username.is_empty() {
        return Err(AppError::InvalidInput("Username is required".to_string()));
    }

    if let Some(existing) = app.store.friends.iter().find(|f| f.username == username) {
        return Ok(existing.clone());
    }

    let friend = Friend {
        id: new_id(),
        username,
        display_name: sanitize_text(display_name),
        avatar,
        mutual_count: 0,
    };

    app.store.friends.push(friend.clone());
    app.save_friends()?;
    Ok(friend)
}

/// Remove the edge outright; there is no tombstone.
pub fn remove_friend(app: &mut App, friend_id: &str) -> Result<()> {
    let before = app.store.friends.len();
    app.store.friends.retain(|f| f.id != friend_id);
    if app.store.friends.len() == before {
        return Err(AppError::MissingEntity(format!("friend {}", friend_id)));
    }

    app.save_friends()?;
    Ok(())
}
