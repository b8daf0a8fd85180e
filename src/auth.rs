use tracing::info;

use crate::config::{DEFAULT_AVATAR, DEFAULT_BIO, MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH};
use crate::core::errors::{AppError, Result};
use crate::core::helpers::{now_iso, sanitize_text};
use crate::models::models::{User, UserStats};
use crate::App;

/// Create a new account. Registration never logs the new user in; the host
/// sends them back to the login view.
pub fn register(app: &mut App, username: &str, email: &str, password: &str) -> Result<User> {
    if username.is_empty() {
        return Err(AppError::InvalidInput("Username is required".to_string()));
    }
    if username.len() < MIN_USERNAME_LENGTH || username.len() > MAX_USERNAME_LENGTH {
        return Err(AppError::InvalidInput("Username must be 3-50 characters".to_string()));
    }
    if password.is_empty() {
        return Err(AppError::InvalidInput("Password is required".to_string()));
    }
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::InvalidInput("Password must be at least 3 characters".to_string()));
    }

    // Sanitize username at input time
    let username = sanitize_text(username);
    if app.store.users.iter().any(|u| u.username == username) {
        return Err(AppError::UsernameTaken(username));
    }

    let user = User {
        username,
        password: password.to_string(),
        email: sanitize_text(email),
        bio: Some(DEFAULT_BIO.to_string()),
        profile_pic: DEFAULT_AVATAR.to_string(),
        join_date: now_iso(),
        stats: UserStats::default(),
    };

    app.store.users.push(user.clone());
    app.save_users()?;

    info!(username = %user.username, "registered new user");
    Ok(user)
}

/// Exact username match plus plain equality on the password. On success the
/// session marker is recorded and persisted; it never expires.
pub fn login(app: &mut App, username: &str, password: &str) -> Result<User> {
    let user = app
        .store
        .users
        .iter()
        .find(|u| u.username == username && u.password == password)
        .cloned()
        .ok_or(AppError::InvalidCredentials)?;

    app.set_session(&user.username)?;
    info!(username = %user.username, "logged in");
    Ok(user)
}

pub fn logout(app: &mut App) -> Result<()> {
    app.clear_session()
}

/// Resolve the session marker against the user collection.
pub fn current_user(app: &App) -> Option<&User> {
    let username = app.session()?;
    app.store.users.iter().find(|u| u.username == username)
}
