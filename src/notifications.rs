use crate::core::errors::{AppError, Result};
use crate::core::helpers::{new_id, now_iso, sanitize_text};
use crate::models::models::Notification;
use crate::App;

pub fn notifications(app: &App) -> &[Notification] {
    &app.store.notifications
}

pub fn unread_count(app: &App) -> usize {
    app.store.notifications.iter().filter(|n| !n.read).count()
}

/// Prepend a notification (newest first). `kind` is a display hint
/// ("like", "comment", "friend", "system") and is stored as-is.
pub fn push(app: &mut App, kind: &str, actor: &str, text: &str) -> Result<Notification> {
    let notification = Notification {
        id: new_id(),
        kind: kind.to_string(),
        actor: actor.to_string(),
        text: sanitize_text(text),
        created_at: now_iso(),
        read: false,
    };

    app.store.notifications.insert(0, notification.clone());
    app.save_notifications()?;
    Ok(notification)
}

pub fn mark_all_read(app: &mut App) -> Result<()> {
    for notification in &mut app.store.notifications {
        notification.read = true;
    }
    app.save_notifications()?;
    Ok(())
}

/// Dismissal removes the entry from the list entirely.
pub fn dismiss(app: &mut App, id: &str) -> Result<()> {
    let before = app.store.notifications.len();
    app.store.notifications.retain(|n| n.id != id);
    if app.store.notifications.len() == before {
        return Err(AppError::MissingEntity(format!("notification {}", id)));
    }

    app.save_notifications()?;
    Ok(())
}
