use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Could not access theme storage: {message}")]
pub struct PersistenceError {
    pub message: String,
}

impl PersistenceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Invalid theme {0:?}, expected \"light\" or \"dark\"")]
    InvalidTheme(String),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("No post with slug {0:?}")]
    NotFound(String),
    #[error("Slug {0:?} is used by more than one post")]
    DuplicateSlug(String),
    #[error("Malformed content document: {0}")]
    Malformed(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Malformed site config: {0}")]
    Malformed(String),
}

pub type Result<T, E = ContentError> = core::result::Result<T, E>;
