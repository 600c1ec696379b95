use std::error::Error as _;
use std::path::PathBuf;

use waitlist_core::error::CoreError;

use crate::config::ConfigError;

/// Every way a migration run can fail. Any of these aborts the run.
///
/// Messages describe only this layer; the underlying cause is reachable
/// through `source()` and rendered by [`MigrateError::chain`].
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    #[error("Invalid configuration")]
    Config(#[from] ConfigError),

    #[error("Failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed JSON in {}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Expected a JSON array in {}", .path.display())]
    NotAnArray { path: PathBuf },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to serialize record")]
    Serialize(#[from] serde_json::Error),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

impl MigrateError {
    /// This error followed by each of its causes, joined with `": "`.
    pub fn chain(&self) -> String {
        let mut out = self.to_string();
        let mut cause = self.source();
        while let Some(err) = cause {
            out.push_str(": ");
            out.push_str(&err.to_string());
            cause = err.source();
        }
        out
    }
}

pub type MigrateResult<T> = Result<T, MigrateError>;
