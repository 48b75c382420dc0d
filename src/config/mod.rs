//! Catalog configuration
//!
//! Fixed layout constants and the `FsConfig` value that carries them into a
//! session.

use std::path::PathBuf;

pub const MIB: u64 = 1024 * 1024;

/// Placeholder backing file created at startup
pub const BACKING_FILE_NAME: &str = "light.fs";
pub const BACKING_FILE_SIZE: u64 = 256 * MIB;
pub const META_SIZE: u64 = 56 * MIB;
pub const DATA_SIZE: u64 = 200 * MIB;
pub const BLOCK_SIZE: u64 = MIB;

/// Longest name an entry keeps; longer names are truncated
pub const MAX_NAME_LEN: usize = 255;

/// Name given to every entry created by `import`
pub const IMPORTED_FILE_NAME: &str = "imported_file";

pub const EXIT_COMMAND: &str = "exit";
pub const PROMPT: &str = "> ";

/// Session configuration
#[derive(Debug, Clone, PartialEq)]
pub struct FsConfig {
    /// Where the placeholder artifact goes (`None` = don't create one)
    pub backing_path: Option<PathBuf>,
    pub backing_size: u64,
    pub data_size: u64,
    pub block_size: u64,
}

impl FsConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self {
            backing_path: Some(PathBuf::from(BACKING_FILE_NAME)),
            backing_size: BACKING_FILE_SIZE,
            data_size: DATA_SIZE,
            block_size: BLOCK_SIZE,
        }
    }

    /// Default layout with no placeholder artifact
    pub fn without_backing_file() -> Self {
        Self {
            backing_path: None,
            ..Self::new()
        }
    }

    /// Layout holding exactly `blocks` blocks, with no placeholder artifact
    pub fn with_capacity(blocks: u64) -> Self {
        Self {
            data_size: blocks * BLOCK_SIZE,
            ..Self::without_backing_file()
        }
    }

    /// Number of blocks in the data region
    pub fn capacity(&self) -> usize {
        if self.block_size == 0 {
            return 0;
        }
        (self.data_size / self.block_size) as usize
    }
}

impl Default for FsConfig {
    fn default() -> Self {
        Self::new()
    }
}
