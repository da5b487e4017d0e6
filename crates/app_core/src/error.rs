//! Application error types

use thiserror::Error;

/// Errors from the state storage edge.
///
/// Orchestrator actions never return these; a failed write is logged and a
/// failed load falls back to defaults.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("State serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("State storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Get a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            AppError::Serialize(_) => "Saved state is damaged and was reset".to_string(),
            AppError::Storage(msg) => format!("Could not save state: {}", msg),
            AppError::Io(e) => format!("Could not read saved state: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let err: AppError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(err.user_message(), "Saved state is damaged and was reset");

        let err = AppError::Storage("disk full".into());
        assert_eq!(err.user_message(), "Could not save state: disk full");
    }
}
