//! Entry registry
//!
//! Insertion-ordered collection of named entries. Names are not unique: every
//! lookup resolves to the first entry with a matching name, so later duplicates
//! are only reachable through `list`.

use crate::config::MAX_NAME_LEN;
use crate::error::{FsError, Result};

/// One logical file
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    name: String,
    content: String,
    size: usize,
    block_index: usize,
}

impl Entry {
    /// Create an empty entry bound to `block_index`
    pub fn new(name: &str, block_index: usize) -> Self {
        Self {
            name: truncate_name(name),
            content: String::new(),
            size: 0,
            block_index,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Byte length of the content
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn block_index(&self) -> usize {
        self.block_index
    }

    /// Replace the content; the size follows it
    pub fn set_content(&mut self, content: String) {
        self.size = content.len();
        self.content = content;
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = truncate_name(name);
    }
}

/// Keep at most `MAX_NAME_LEN` characters of a name
fn truncate_name(name: &str) -> String {
    name.chars().take(MAX_NAME_LEN).collect()
}

/// Ordered entry storage
#[derive(Debug, Clone, Default)]
pub struct EntryRegistry {
    entries: Vec<Entry>,
    // Next block slot to hand out; never goes back down
    next_block: usize,
}

impl EntryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_block: 0,
        }
    }

    /// Append a new empty entry and return its position
    pub fn insert(&mut self, name: &str) -> usize {
        let entry = Entry::new(name, self.next_block);
        self.next_block += 1;
        self.entries.push(entry);
        self.entries.len() - 1
    }

    /// Position of the first entry called `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }

    pub fn find(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.name == name)
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entry> {
        self.entries.get_mut(index)
    }

    /// Remove the first entry called `name`
    pub fn remove(&mut self, name: &str) -> Result<Entry> {
        let index = self
            .position(name)
            .ok_or_else(|| FsError::NotFound(name.to_string()))?;
        Ok(self.entries.remove(index))
    }

    /// Rename the first entry called `old_name`. Collisions with `new_name` are allowed.
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        let entry = self
            .find_mut(old_name)
            .ok_or_else(|| FsError::NotFound(old_name.to_string()))?;
        entry.set_name(new_name);
        Ok(())
    }

    /// Replace the content of the first entry called `name`
    pub fn write(&mut self, name: &str, content: &str) -> Result<()> {
        let entry = self
            .find_mut(name)
            .ok_or_else(|| FsError::NotFound(name.to_string()))?;
        entry.set_content(content.to_string());
        Ok(())
    }

    /// Content of the first entry called `name`
    pub fn read(&self, name: &str) -> Result<&str> {
        self.find(name)
            .map(Entry::content)
            .ok_or_else(|| FsError::NotFound(name.to_string()))
    }

    /// `(name, size)` pairs in insertion order
    pub fn list(&self) -> Vec<(&str, usize)> {
        self.entries
            .iter()
            .map(|entry| (entry.name(), entry.size()))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
