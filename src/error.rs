use std::fmt;

/// Unified error type for database, config and export operations.
#[derive(Debug)]
pub enum AppError {
    /// Database operation failed
    Database(rusqlite::Error),
    /// File I/O error
    Io(std::io::Error),
    /// CSV export failed
    Csv(csv::Error),
    /// Failed to read or write the settings file
    Config(serde_json::Error),
    /// Window system / GUI startup error
    Gui(eframe::Error),
    /// An update or lookup targeted an id that does not exist
    NotFound(i64),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Database(e) => write!(f, "Database error: {}", e),
            AppError::Io(e) => write!(f, "I/O error: {}", e),
            AppError::Csv(e) => write!(f, "CSV error: {}", e),
            AppError::Config(e) => write!(f, "Config error: {}", e),
            AppError::Gui(e) => write!(f, "GUI error: {}", e),
            AppError::NotFound(id) => write!(f, "No product with id {}", id),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Database(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Csv(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::Gui(e) => Some(e),
            AppError::NotFound(_) => None,
        }
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        AppError::Database(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Csv(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(err)
    }
}

impl From<eframe::Error> for AppError {
    fn from(err: eframe::Error) -> Self {
        AppError::Gui(err)
    }
}

/// Result alias for application operations
pub type AppResult<T> = Result<T, AppError>;
