use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Column {column}: expected {expected}")]
    RowShape { column: usize, expected: &'static str },

    #[error("Query template error: {0}")]
    Template(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input closed before a report was selected")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, AppError>;
