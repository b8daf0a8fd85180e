//! Stateless projections from store slices to markup fragments. The host
//! rendering surface swaps the affected region for the fragment and
//! reattaches its handlers; nothing here reads back from the DOM.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use html_escape::{encode_double_quoted_attribute, encode_text};
use regex::Regex;

use crate::models::models::{Comment, Conversation, Notification, Post, Sender};
use crate::users::{profile_pic_for, ProfileView};
use crate::App;

/// Bucket a timestamp into a relative label. Pure in (timestamp, now).
pub fn format_relative_time(timestamp: &str, now: DateTime<Utc>) -> String {
    let created = match DateTime::parse_from_rfc3339(timestamp) {
        Ok(t) => t.with_timezone(&Utc),
        Err(_) => return timestamp.to_string(),
    };

    let diff = now - created;
    let minutes = diff.num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }
    let hours = diff.num_hours();
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    let days = diff.num_days();
    if days < 7 {
        return format!("{}d ago", days);
    }
    created.format("%b %-d, %Y").to_string()
}

/// Per-post display state derived for one viewer.
pub struct PostView {
    pub like_count: usize,
    pub liked_by_viewer: bool,
    pub comment_count: usize,
    pub time_label: String,
}

impl PostView {
    pub fn project(post: &Post, viewer: &str, now: DateTime<Utc>) -> Self {
        PostView {
            like_count: post.likes.len(),
            liked_by_viewer: post.likes.iter().any(|u| u == viewer),
            comment_count: post.comments.len(),
            time_label: format_relative_time(&post.created_at, now),
        }
    }
}

fn url_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"https?://[^\s<]+").expect("Regex should compile"))
}

/// Convert HTTP/HTTPS URLs into clickable links with proper escaping. Post
/// text is already sanitized to plain text at input time.
fn linkify(text: &str) -> String {
    url_regex()
        .replace_all(text, |caps: &regex::Captures| {
            let url = &caps[0];
            let escaped_url = encode_double_quoted_attribute(url);
            format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                escaped_url, url
            )
        })
        .to_string()
}

pub fn render_post(app: &App, post: &Post, viewer: &str, now: DateTime<Utc>) -> String {
    let view = PostView::project(post, viewer, now);
    let avatar = encode_double_quoted_attribute(profile_pic_for(app, &post.author));
    let author = encode_text(&post.author);

    let body = if post.text.is_empty() {
        String::new()
    } else {
        format!("<p>{}</p>", linkify(&post.text))
    };
    let image = post
        .image
        .as_deref()
        .map(|src| {
            format!(
                r#"<img src="{}" class="post-image" alt="Post image">"#,
                encode_double_quoted_attribute(src)
            )
        })
        .unwrap_or_default();
    let liked_class = if view.liked_by_viewer { " liked" } else { "" };

    format!(
        r#"<div class="post" data-post-id="{id}">
    <div class="post-header" data-profile="{author_attr}">
        <img src="{avatar}" alt="{author_attr}" class="post-avatar">
        <div class="post-user-info">
            <div class="post-user">{author}</div>
            <div class="post-time">{time}</div>
        </div>
    </div>
    <div class="post-content">
        {body}{image}
    </div>
    <div class="post-actions">
        <button class="action-btn{liked_class}" data-action="like" data-post-id="{id}">&#x2764; <span>{likes}</span></button>
        <button class="action-btn" data-action="comment" data-post-id="{id}">&#x1f4ac; <span>{comments}</span></button>
    </div>
    <div class="comments-section">
{comment_list}        <div class="comment-input" data-post-id="{id}"></div>
    </div>
</div>"#,
        id = encode_double_quoted_attribute(&post.id),
        author_attr = encode_double_quoted_attribute(&post.author),
        avatar = avatar,
        author = author,
        time = view.time_label,
        body = body,
        image = image,
        liked_class = liked_class,
        likes = view.like_count,
        comments = view.comment_count,
        comment_list = render_comments(&post.comments, now),
    )
}

pub fn render_comments(comments: &[Comment], now: DateTime<Utc>) -> String {
    let mut out = String::new();
    for comment in comments {
        out.push_str(&format!(
            r#"        <div class="comment">
            <div class="comment-header">
                <span class="comment-user" data-profile="{author_attr}">{author}</span>
                <span class="comment-time">{time}</span>
            </div>
            <p>{text}</p>
        </div>
"#,
            author_attr = encode_double_quoted_attribute(&comment.author),
            author = encode_text(&comment.author),
            time = format_relative_time(&comment.created_at, now),
            text = comment.text,
        ));
    }
    out
}

pub fn render_profile(view: &ProfileView, posts: &[&Post], now: DateTime<Utc>) -> String {
    let bio = view.bio.as_deref().unwrap_or("No bio yet.");
    let mut post_list = String::new();
    if posts.is_empty() {
        post_list.push_str(r#"<p class="profile-empty">No posts yet.</p>"#);
    } else {
        for post in posts {
            post_list.push_str(&format!(
                r#"<div class="post" data-post-id="{id}">
    <div class="post-content"><p>{text}</p></div>
    <div class="post-actions">
        <span>&#x2764; {likes}</span>
        <span>&#x1f4ac; {comments}</span>
        <span class="post-time">{time}</span>
    </div>
</div>
"#,
                id = encode_double_quoted_attribute(&post.id),
                text = linkify(&post.text),
                likes = post.likes.len(),
                comments = post.comments.len(),
                time = format_relative_time(&post.created_at, now),
            ));
        }
    }

    format!(
        r#"<div class="profile-header">
    <img src="{avatar}" alt="{username_attr}" class="profile-picture-large">
    <h2 class="profile-username">{username}</h2>
    <p class="profile-email">{email}</p>
    <p class="profile-bio">{bio}</p>
    <div class="profile-stats">
        <div class="profile-stat"><span class="profile-stat-number">{posts}</span><span class="profile-stat-label">Posts</span></div>
        <div class="profile-stat"><span class="profile-stat-number">{likes}</span><span class="profile-stat-label">Likes</span></div>
        <div class="profile-stat"><span class="profile-stat-number">{comments}</span><span class="profile-stat-label">Comments</span></div>
    </div>
</div>
<div class="profile-posts">
{post_list}</div>"#,
        avatar = encode_double_quoted_attribute(&view.profile_pic),
        username_attr = encode_double_quoted_attribute(&view.username),
        username = encode_text(&view.username),
        email = encode_text(&view.email),
        bio = bio,
        posts = view.post_count,
        likes = view.likes_received,
        comments = view.comments_received,
        post_list = post_list,
    )
}

pub fn render_notifications(items: &[Notification], now: DateTime<Utc>) -> String {
    let mut out = String::new();
    for item in items {
        let read_class = if item.read { " read" } else { "" };
        out.push_str(&format!(
            r#"<div class="notification{read_class}" data-notification-id="{id}" data-kind="{kind}">
    <span class="notification-actor">{actor}</span>
    <span class="notification-text">{text}</span>
    <span class="notification-time">{time}</span>
</div>
"#,
            read_class = read_class,
            id = encode_double_quoted_attribute(&item.id),
            kind = encode_double_quoted_attribute(&item.kind),
            actor = encode_text(&item.actor),
            text = item.text,
            time = format_relative_time(&item.created_at, now),
        ));
    }
    out
}

pub fn render_conversation(convo: &Conversation, now: DateTime<Utc>) -> String {
    let mut out = format!(
        r#"<div class="conversation" data-conversation-id="{id}">
    <div class="conversation-peer">{peer}</div>
"#,
        id = encode_double_quoted_attribute(&convo.id),
        peer = encode_text(&convo.peer),
    );
    for message in &convo.messages {
        let side = match message.sender {
            Sender::Me => "sent",
            Sender::Peer => "received",
        };
        out.push_str(&format!(
            r#"    <div class="message {side}"><p>{text}</p><span class="message-time">{time}</span></div>
"#,
            side = side,
            text = message.text,
            time = format_relative_time(&message.sent_at, now),
        ));
    }
    out.push_str("</div>");
    out
}
