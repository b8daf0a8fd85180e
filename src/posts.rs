use tracing::debug;

use crate::config::MAX_POST_LENGTH;
use crate::core::errors::{AppError, Result};
use crate::core::helpers::{new_id, now_iso, sanitize_text};
use crate::models::models::{Comment, Post};
use crate::App;

/// Create a post and prepend it to the feed (newest first by insertion).
/// A post needs text or an image; both absent is an error.
pub fn create_post(app: &mut App, author: &str, text: &str, image: Option<String>) -> Result<Post> {
    let text = text.trim();
    if text.is_empty() && image.is_none() {
        return Err(AppError::EmptyPost);
    }
    if text.len() > MAX_POST_LENGTH {
        return Err(AppError::InvalidInput("Post too long".to_string()));
    }

    let post = Post {
        id: new_id(),
        author: author.to_string(),
        text: sanitize_text(text),
        image,
        created_at: now_iso(),
        likes: Vec::new(),
        comments: Vec::new(),
    };

    app.store.posts.insert(0, post.clone()); // prepend newest
    app.save_posts()?;

    debug!(post_id = %post.id, author, "created post");
    Ok(post)
}

/// Toggle `username` in the post's like set. Applying it twice restores the
/// original set.
pub fn toggle_like(app: &mut App, post_id: &str, username: &str) -> Result<Post> {
    let post = app
        .store
        .posts
        .iter_mut()
        .find(|p| p.id == post_id)
        .ok_or_else(|| AppError::MissingEntity(format!("post {}", post_id)))?;

    if let Some(idx) = post.likes.iter().position(|u| u == username) {
        post.likes.remove(idx);
    } else {
        post.likes.push(username.to_string());
    }

    let snapshot = post.clone();
    app.save_posts()?;
    Ok(snapshot)
}

/// Append a comment to a post. Comments are insertion-ordered and are never
/// reordered or deleted.
pub fn add_comment(app: &mut App, post_id: &str, author: &str, text: &str) -> Result<Comment> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::EmptyComment);
    }

    let post = app
        .store
        .posts
        .iter_mut()
        .find(|p| p.id == post_id)
        .ok_or_else(|| AppError::MissingEntity(format!("post {}", post_id)))?;

    let comment = Comment {
        id: new_id(),
        author: author.to_string(),
        text: sanitize_text(text),
        created_at: now_iso(),
    };

    post.comments.push(comment.clone());
    app.save_posts()?;

    debug!(post_id, author, "added comment");
    Ok(comment)
}

/// The whole feed, newest first.
pub fn feed(app: &App) -> &[Post] {
    &app.store.posts
}

pub fn posts_by<'a>(app: &'a App, username: &str) -> Vec<&'a Post> {
    app.store
        .posts
        .iter()
        .filter(|p| p.author == username)
        .collect()
}
