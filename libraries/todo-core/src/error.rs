/// Core error types for the todo services
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for the todo services
#[derive(Error, Debug)]
pub enum CoreError {
    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
