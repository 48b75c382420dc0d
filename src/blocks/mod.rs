//! Block accounting
//!
//! Counts how many blocks of the fixed-size data region are in use. Nothing is
//! mapped onto real storage; this is a bounded counter.

use crate::config::FsConfig;
use log::debug;

/// Used/free counter over a fixed pool of blocks
#[derive(Debug, Clone, PartialEq)]
pub struct BlockAccounting {
    used: usize,
    capacity: usize,
    block_size: u64,
}

impl BlockAccounting {
    /// Create an empty pool sized by `config`
    pub fn new(config: &FsConfig) -> Self {
        Self {
            used: 0,
            capacity: config.capacity(),
            block_size: config.block_size,
        }
    }

    pub fn used(&self) -> usize {
        self.used
    }

    pub fn free(&self) -> usize {
        self.capacity - self.used
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Reserve one block. Returns false (and changes nothing) when the pool is full.
    pub fn try_reserve(&mut self) -> bool {
        if self.used >= self.capacity {
            debug!("block pool full ({}/{})", self.used, self.capacity);
            return false;
        }
        self.used += 1;
        true
    }

    /// Give one block back. Saturates at zero.
    pub fn release(&mut self) {
        self.used = self.used.saturating_sub(1);
    }

    /// Bytes covered by the used blocks
    pub fn used_bytes(&self) -> u64 {
        self.used as u64 * self.block_size
    }

    /// Bytes covered by the free blocks
    pub fn free_bytes(&self) -> u64 {
        self.free() as u64 * self.block_size
    }
}

impl Default for BlockAccounting {
    fn default() -> Self {
        Self::new(&FsConfig::default())
    }
}
