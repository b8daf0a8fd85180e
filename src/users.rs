use serde::Serialize;

use crate::config::{DEFAULT_AVATAR, MAX_BIO_LENGTH};
use crate::core::errors::{AppError, Result};
use crate::core::helpers::sanitize_text;
use crate::models::models::{Post, User};
use crate::App;

/// Profile card data. The post/like/comment totals are recomputed from the
/// post collection on every call, never cached.
#[derive(Serialize, Clone, Debug)]
pub struct ProfileView {
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub profile_pic: String,
    pub join_date: String,
    pub post_count: usize,
    pub likes_received: usize,
    pub comments_received: usize,
    pub followers: u32,
    pub following: u32,
}

/// Optional profile edits; `None` fields are left untouched.
#[derive(Default)]
pub struct ProfileChanges {
    pub bio: Option<String>,
    pub email: Option<String>,
    pub profile_pic: Option<String>,
}

pub fn find_user<'a>(app: &'a App, username: &str) -> Option<&'a User> {
    app.store.users.iter().find(|u| u.username == username)
}

/// Avatar for any username. Posts reference their author by name only, so
/// the renderer falls back to the built-in default for unknown authors.
pub fn profile_pic_for<'a>(app: &'a App, username: &str) -> &'a str {
    find_user(app, username)
        .map(|u| u.profile_pic.as_str())
        .unwrap_or(DEFAULT_AVATAR)
}

pub fn get_profile(app: &App, username: &str) -> Result<ProfileView> {
    let user = find_user(app, username)
        .ok_or_else(|| AppError::MissingEntity(format!("user {}", username)))?;

    let user_posts: Vec<&Post> = app
        .store
        .posts
        .iter()
        .filter(|p| p.author == username)
        .collect();
    let likes_received = user_posts.iter().map(|p| p.likes.len()).sum();
    let comments_received = user_posts.iter().map(|p| p.comments.len()).sum();

    Ok(ProfileView {
        username: user.username.clone(),
        email: user.email.clone(),
        bio: user.bio.clone(),
        profile_pic: user.profile_pic.clone(),
        join_date: user.join_date.clone(),
        post_count: user_posts.len(),
        likes_received,
        comments_received,
        followers: user.stats.followers,
        following: user.stats.following,
    })
}

pub fn update_profile(app: &mut App, username: &str, changes: ProfileChanges) -> Result<User> {
    let user = app
        .store
        .users
        .iter_mut()
        .find(|u| u.username == username)
        .ok_or_else(|| AppError::MissingEntity(format!("user {}", username)))?;

    if let Some(bio) = changes.bio {
        if bio.len() > MAX_BIO_LENGTH {
            return Err(AppError::InvalidInput("Bio too long (max 500 chars)".to_string()));
        }
        // Sanitize bio at input time
        let clean = sanitize_text(&bio);
        user.bio = if clean.is_empty() { None } else { Some(clean) };
    }

    if let Some(email) = changes.email {
        user.email = sanitize_text(&email);
    }

    if let Some(pic) = changes.profile_pic {
        user.profile_pic = pic;
    }

    let snapshot = user.clone();
    app.save_users()?;
    Ok(snapshot)
}
