//! LightFS
//!
//! A minimal in-memory file catalog driven by an interactive command line.
//! Entries live entirely in memory; a fixed pool of abstract blocks is counted
//! but never mapped onto real storage.

pub mod blocks;
pub mod command;
pub mod config;
pub mod interpreter;
pub mod registry;
pub mod session;

// Re-export core types for convenience
pub use crate::error::{FsError, Result};
pub use blocks::BlockAccounting;
pub use command::{parse_command, Command};
pub use config::FsConfig;
pub use interpreter::Catalog;
pub use registry::{Entry, EntryRegistry};
pub use session::Session;

/// Core error handling types for the catalog
pub mod error {
    use std::fmt;

    /// Result type for catalog operations
    pub type Result<T> = std::result::Result<T, FsError>;

    /// Direction an external path was being opened in
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum OpenMode {
        Reading,
        Writing,
    }

    impl fmt::Display for OpenMode {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                OpenMode::Reading => write!(f, "reading"),
                OpenMode::Writing => write!(f, "writing"),
            }
        }
    }

    /// Everything an operation can fail with
    #[derive(Debug, Clone, PartialEq)]
    pub enum FsError {
        // Block pool exhausted on create
        Full,

        // Name lookup miss
        NotFound(String),

        // External import/export target
        PathUnopenable { path: String, mode: OpenMode },

        // Unrecognized command verb
        UnknownCommand(String),

        // Startup artifact failures
        Io(String),
    }

    impl fmt::Display for FsError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                FsError::Full => write!(f, "Not enough space to create file."),
                FsError::NotFound(name) => write!(f, "File {} not found.", name),
                FsError::PathUnopenable { path, mode } => {
                    write!(f, "Cannot open file {} for {}.", path, mode)
                }
                FsError::UnknownCommand(verb) => write!(f, "Unknown command: {}", verb),
                FsError::Io(msg) => write!(f, "I/O error: {}", msg),
            }
        }
    }

    impl std::error::Error for FsError {}

    impl From<std::io::Error> for FsError {
        fn from(err: std::io::Error) -> Self {
            FsError::Io(err.to_string())
        }
    }
}
