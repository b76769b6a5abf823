//! Error types shared by the library modules.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort an invocation of `get`.
#[derive(Debug, Error)]
pub enum Error {
    /// The OS could not tell us where the user's home directory is.
    #[error("Could not determine home directory")]
    NoHomeDir,

    /// The repositories parent directory could not be listed.
    #[error("Failed to read repositories folder {}", path.display())]
    ListRepositories {
        /// Directory that was scanned.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The config file exists but could not be read.
    #[error("Failed to read config from {}", path.display())]
    ConfigRead {
        /// Config file location.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for our schema.
    #[error("Failed to parse config at {}", path.display())]
    ConfigParse {
        /// Config file location.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// The config file or its directory could not be written.
    #[error("Failed to write config to {}", path.display())]
    ConfigWrite {
        /// Path that failed (file or parent directory).
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Serialising the in-memory config failed.
    #[error("Failed to serialize config")]
    ConfigSerialize(#[source] serde_json::Error),

    /// No repository name contains the requested fragment.
    #[error("Repository not found: {0}")]
    RepositoryNotFound(String),

    /// Interactive mode found nothing to choose from.
    #[error("No repositories found in {}", .0.display())]
    NoRepositories(PathBuf),

    /// The editor process could not be started.
    #[error("Failed to launch editor '{editor}'")]
    Spawn {
        /// Command that was attempted.
        editor: String,
        /// Underlying spawn failure.
        #[source]
        source: std::io::Error,
    },

    /// Reading an answer from the terminal failed.
    #[error("Failed to read answer")]
    Prompt(#[source] std::io::Error),

    /// The user closed the prompt (end of input).
    #[error("Prompt cancelled")]
    PromptCancelled,

    /// `config get`/`config set` was given a key we do not know.
    #[error("Unknown config key: {0}")]
    UnknownConfigKey(String),
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;
