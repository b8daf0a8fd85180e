use nexus::core::db;
use nexus::users::ProfileChanges;
use nexus::{auth, friends, messages, notifications, posts, settings, users};
use nexus::{App, AppError, MemoryStore, Repository, Sender};

fn fresh_app() -> App {
    App::open_in_memory().expect("open in-memory app")
}

#[test]
fn test_register_and_login_flow() {
    let mut app = fresh_app();

    let user = auth::register(&mut app, "alice", "alice@example.com", "pw123").unwrap();
    assert_eq!(user.username, "alice");
    assert!(user.bio.is_some());

    // Registration does not log the new user in.
    assert!(app.session().is_none());
    assert!(auth::current_user(&app).is_none());

    let logged_in = auth::login(&mut app, "alice", "pw123").unwrap();
    assert_eq!(logged_in.username, "alice");
    assert_eq!(app.session(), Some("alice"));
    assert_eq!(auth::current_user(&app).unwrap().username, "alice");

    auth::logout(&mut app).unwrap();
    assert!(app.session().is_none());
}

#[test]
fn test_login_rejects_bad_credentials() {
    let mut app = fresh_app();
    auth::register(&mut app, "alice", "alice@example.com", "pw123").unwrap();

    let err = auth::login(&mut app, "alice", "wrong").unwrap_err();
    assert!(matches!(err, AppError::InvalidCredentials));

    let err = auth::login(&mut app, "nobody", "pw123").unwrap_err();
    assert!(matches!(err, AppError::InvalidCredentials));
    assert!(app.session().is_none());
}

#[test]
fn test_duplicate_username_rejected() {
    let mut app = fresh_app();
    auth::register(&mut app, "alice", "a@example.com", "pw123").unwrap();

    let err = auth::register(&mut app, "alice", "b@example.com", "other").unwrap_err();
    assert!(matches!(err, AppError::UsernameTaken(_)));
    assert_eq!(app.store.users.len(), 1);
}

#[test]
fn test_register_validates_input() {
    let mut app = fresh_app();

    let err = auth::register(&mut app, "", "a@example.com", "pw123").unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    let err = auth::register(&mut app, "ab", "a@example.com", "pw123").unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    let err = auth::register(&mut app, "alice", "a@example.com", "pw").unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert!(app.store.users.is_empty());
}

#[test]
fn test_create_post_and_feed_order() {
    let mut app = fresh_app();

    let first = posts::create_post(&mut app, "alice", "first", None).unwrap();
    let second = posts::create_post(&mut app, "alice", "second", None).unwrap();

    let feed = posts::feed(&app);
    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0].id, second.id); // newest first
    assert_eq!(feed[1].id, first.id);
}

#[test]
fn test_empty_post_rejected() {
    let mut app = fresh_app();

    let err = posts::create_post(&mut app, "alice", "   ", None).unwrap_err();
    assert!(matches!(err, AppError::EmptyPost));
    assert!(posts::feed(&app).is_empty());

    // An image alone is enough.
    let post = posts::create_post(&mut app, "alice", "", Some("data:image/png;base64,AAAA".to_string())).unwrap();
    assert!(post.text.is_empty());
    assert!(post.image.is_some());
}

#[test]
fn test_post_text_is_sanitized() {
    let mut app = fresh_app();

    let post = posts::create_post(&mut app, "alice", "<b>hi</b> there", None).unwrap();
    assert_eq!(post.text, "hi there");

    let post = posts::create_post(&mut app, "alice", "<script>alert(1)</script>safe", None).unwrap();
    assert_eq!(post.text, "safe");
}

#[test]
fn test_double_toggle_restores_like_set() {
    let mut app = fresh_app();
    let post = posts::create_post(&mut app, "alice", "hello", None).unwrap();

    let liked = posts::toggle_like(&mut app, &post.id, "bob").unwrap();
    assert_eq!(liked.likes, vec!["bob".to_string()]);

    let unliked = posts::toggle_like(&mut app, &post.id, "bob").unwrap();
    assert!(unliked.likes.is_empty());
}

#[test]
fn test_toggle_like_unknown_post_is_surfaced() {
    let mut app = fresh_app();
    let err = posts::toggle_like(&mut app, "nope", "bob").unwrap_err();
    assert!(matches!(err, AppError::MissingEntity(_)));
}

#[test]
fn test_comments_append_in_order() {
    let mut app = fresh_app();
    let post = posts::create_post(&mut app, "alice", "hello", None).unwrap();

    let err = posts::add_comment(&mut app, &post.id, "bob", "   ").unwrap_err();
    assert!(matches!(err, AppError::EmptyComment));
    assert!(app.store.posts[0].comments.is_empty());

    posts::add_comment(&mut app, &post.id, "bob", "hi").unwrap();
    posts::add_comment(&mut app, &post.id, "alice", "hello back").unwrap();

    let comments = &app.store.posts[0].comments;
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].text, "hi");
    assert_eq!(comments[1].text, "hello back");
}

#[test]
fn test_profile_aggregates_from_posts() {
    let mut app = fresh_app();
    auth::register(&mut app, "alice", "alice@example.com", "pw123").unwrap();

    let p1 = posts::create_post(&mut app, "alice", "one", None).unwrap();
    let p2 = posts::create_post(&mut app, "alice", "two", None).unwrap();
    posts::create_post(&mut app, "bob", "not alice's", None).unwrap();

    posts::toggle_like(&mut app, &p1.id, "bob").unwrap();
    posts::toggle_like(&mut app, &p2.id, "bob").unwrap();
    posts::toggle_like(&mut app, &p2.id, "clara").unwrap();
    posts::add_comment(&mut app, &p1.id, "bob", "nice").unwrap();

    let profile = users::get_profile(&app, "alice").unwrap();
    assert_eq!(profile.post_count, 2);
    assert_eq!(profile.likes_received, 3);
    assert_eq!(profile.comments_received, 1);

    let err = users::get_profile(&app, "nobody").unwrap_err();
    assert!(matches!(err, AppError::MissingEntity(_)));
}

#[test]
fn test_update_profile() {
    let mut app = fresh_app();
    auth::register(&mut app, "alice", "alice@example.com", "pw123").unwrap();

    let updated = users::update_profile(
        &mut app,
        "alice",
        ProfileChanges {
            bio: Some("Rust fan".to_string()),
            email: Some("new@example.com".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(updated.bio.as_deref(), Some("Rust fan"));
    assert_eq!(updated.email, "new@example.com");

    // A blank bio clears the field.
    let updated = users::update_profile(
        &mut app,
        "alice",
        ProfileChanges { bio: Some(String::new()), ..Default::default() },
    )
    .unwrap();
    assert!(updated.bio.is_none());

    let long_bio = "a".repeat(501);
    let err = users::update_profile(
        &mut app,
        "alice",
        ProfileChanges { bio: Some(long_bio), ..Default::default() },
    )
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn test_friend_add_is_idempotent() {
    let mut app = fresh_app();

    let first = friends::add_friend(&mut app, "bob", "Bob Miller", None).unwrap();
    let second = friends::add_friend(&mut app, "bob", "Bob Miller", None).unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(friends::friends(&app).len(), 1);

    friends::remove_friend(&mut app, &first.id).unwrap();
    assert!(friends::friends(&app).is_empty());

    let err = friends::remove_friend(&mut app, &first.id).unwrap_err();
    assert!(matches!(err, AppError::MissingEntity(_)));
}

#[test]
fn test_notifications_lifecycle() {
    let mut app = fresh_app();

    let n1 = notifications::push(&mut app, "like", "bob", "liked your post").unwrap();
    notifications::push(&mut app, "comment", "clara", "commented on your post").unwrap();
    assert_eq!(notifications::unread_count(&app), 2);

    notifications::mark_all_read(&mut app).unwrap();
    assert_eq!(notifications::unread_count(&app), 0);

    notifications::dismiss(&mut app, &n1.id).unwrap();
    assert_eq!(notifications::notifications(&app).len(), 1);

    let err = notifications::dismiss(&mut app, &n1.id).unwrap_err();
    assert!(matches!(err, AppError::MissingEntity(_)));
}

#[test]
fn test_messaging_round() {
    let mut app = fresh_app();
    db::seed_demo_data(&mut app).unwrap();

    let convo_id = messages::conversations(&app)[0].id.clone();
    let baseline = messages::conversation(&app, &convo_id).unwrap().messages.len();

    let err = messages::send_message(&mut app, &convo_id, "  ").unwrap_err();
    assert!(matches!(err, AppError::EmptyMessage));

    let sent = messages::send_message(&mut app, &convo_id, "hello there").unwrap();
    assert_eq!(sent.sender, Sender::Me);

    let reply = messages::auto_reply(&mut app, &convo_id).unwrap();
    assert_eq!(reply.sender, Sender::Peer);
    assert!(nexus::config::CANNED_REPLIES.contains(&reply.text.as_str()));

    let convo = messages::conversation(&app, &convo_id).unwrap();
    assert_eq!(convo.messages.len(), baseline + 2);

    let err = messages::send_message(&mut app, "nope", "hi").unwrap_err();
    assert!(matches!(err, AppError::MissingEntity(_)));
}

#[test]
fn test_settings_roundtrip_with_defaults() {
    let kv = MemoryStore::new();
    let mut app = App::open(Repository::new(Box::new(kv.clone()))).unwrap();

    let defaults = settings::load(&app);
    assert!(!defaults.private_account);
    assert!(defaults.notifications_enabled);
    assert_eq!(defaults.theme, "light");
    assert_eq!(defaults.language, "en");
    assert_eq!(defaults.post_visibility, "everyone");

    let mut updated = defaults.clone();
    updated.theme = "dark".to_string();
    updated.private_account = true;
    settings::save(&mut app, updated).unwrap();

    let reopened = App::open(Repository::new(Box::new(kv))).unwrap();
    let loaded = settings::load(&reopened);
    assert_eq!(loaded.theme, "dark");
    assert!(loaded.private_account);
    // Untouched fields keep their defaults.
    assert_eq!(loaded.language, "en");
}

#[test]
fn test_seed_runs_once() {
    let mut app = fresh_app();

    assert!(db::seed_demo_data(&mut app).unwrap());
    assert!(!db::seed_demo_data(&mut app).unwrap());

    assert!(!app.store.users.is_empty());
    assert!(!app.store.posts.is_empty());
    assert!(!app.store.friends.is_empty());
    assert!(!app.store.conversations.is_empty());

    db::reset_data(&mut app).unwrap();
    assert!(app.store.users.is_empty());
    assert!(app.store.posts.is_empty());
    assert!(app.session().is_none());
}

// The end-to-end scenario: register, login, post, like, then reload the
// store from persisted state and check everything survived.
#[test]
fn test_full_user_flow_survives_reload() {
    let kv = MemoryStore::new();
    let mut app = App::open(Repository::new(Box::new(kv.clone()))).unwrap();

    auth::register(&mut app, "alice", "alice@example.com", "pw123").unwrap();
    auth::login(&mut app, "alice", "pw123").unwrap();

    let post = posts::create_post(&mut app, "alice", "hello", None).unwrap();
    let feed = posts::feed(&app);
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].author, "alice");
    assert!(feed[0].likes.is_empty());

    let liked = posts::toggle_like(&mut app, &post.id, "alice").unwrap();
    assert_eq!(liked.likes.len(), 1);
    assert!(liked.likes.iter().any(|u| u == "alice"));

    // Reload from the shared store.
    let reopened = App::open(Repository::new(Box::new(kv))).unwrap();
    assert_eq!(reopened.session(), Some("alice"));
    let feed = posts::feed(&reopened);
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].id, post.id);
    assert_eq!(feed[0].likes, vec!["alice".to_string()]);
}

#[test]
fn test_file_store_durability() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut app = App::open_on_disk(dir.path()).unwrap();
        auth::register(&mut app, "alice", "alice@example.com", "pw123").unwrap();
        auth::login(&mut app, "alice", "pw123").unwrap();
        posts::create_post(&mut app, "alice", "written to disk", None).unwrap();
    }

    let app = App::open_on_disk(dir.path()).unwrap();
    assert_eq!(app.session(), Some("alice"));
    assert_eq!(app.store.users.len(), 1);
    assert_eq!(app.store.posts.len(), 1);
    assert_eq!(app.store.posts[0].text, "written to disk");

    // Logout removes the marker on disk too.
    let mut app = app;
    auth::logout(&mut app).unwrap();
    let reopened = App::open_on_disk(dir.path()).unwrap();
    assert!(reopened.session().is_none());
}
