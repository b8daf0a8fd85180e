use ammonia::Builder;
use uuid::Uuid;

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

pub fn sanitize_text(text: &str) -> String {
    // Sanitize to plain text only - no HTML allowed
    Builder::default()
        .tags(std::collections::HashSet::new())
        .clean(text)
        .to_string()
}
