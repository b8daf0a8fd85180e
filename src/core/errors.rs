use std::fmt;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    InvalidCredentials,
    UsernameTaken(String),
    EmptyPost,
    EmptyComment,
    EmptyMessage,
    InvalidInput(String),
    MissingEntity(String),
    Storage(anyhow::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidCredentials => write!(f, "Invalid username or password"),
            AppError::UsernameTaken(name) => write!(f, "Username already exists: {}", name),
            AppError::EmptyPost => write!(f, "Post cannot be empty"),
            AppError::EmptyComment => write!(f, "Comment cannot be empty"),
            AppError::EmptyMessage => write!(f, "Message cannot be empty"),
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AppError::MissingEntity(what) => write!(f, "Not found: {}", what),
            AppError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for AppError {}

// Storage failures bubble up from the repository as anyhow errors.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Storage(err)
    }
}
