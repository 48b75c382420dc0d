//! Command interpreter
//!
//! `Catalog` owns the entry registry and the block pool for one session and
//! executes parsed commands against them, writing human-readable results.

use crate::blocks::BlockAccounting;
use crate::command::{parse_command, Command};
use crate::config::{FsConfig, IMPORTED_FILE_NAME, MIB};
use crate::error::{FsError, OpenMode, Result};
use crate::registry::EntryRegistry;
use log::{debug, info, warn};
use std::fs;
use std::io::{self, Write};

/// Space usage in whole MiB
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub used_mib: u64,
    pub free_mib: u64,
}

/// Session state: entries plus block accounting
#[derive(Debug, Clone)]
pub struct Catalog {
    registry: EntryRegistry,
    blocks: BlockAccounting,
}

impl Catalog {
    /// Create an empty catalog sized by `config`
    pub fn new(config: &FsConfig) -> Self {
        Self {
            registry: EntryRegistry::new(),
            blocks: BlockAccounting::new(config),
        }
    }

    pub fn registry(&self) -> &EntryRegistry {
        &self.registry
    }

    pub fn blocks(&self) -> &BlockAccounting {
        &self.blocks
    }

    /// Reserve a block and append an empty entry. Returns the entry's position.
    pub fn create(&mut self, name: &str) -> Result<usize> {
        if !self.blocks.try_reserve() {
            warn!("create {:?} refused: no free blocks", name);
            return Err(FsError::Full);
        }
        let index = self.registry.insert(name);
        debug!("created {:?} ({} blocks used)", name, self.blocks.used());
        Ok(index)
    }

    /// Remove the first entry called `name` and release its block
    pub fn delete(&mut self, name: &str) -> Result<()> {
        let entry = self.registry.remove(name)?;
        self.blocks.release();
        debug!("deleted {:?} from block {}", name, entry.block_index());
        Ok(())
    }

    pub fn write(&mut self, name: &str, content: &str) -> Result<()> {
        self.registry.write(name, content)
    }

    pub fn read(&self, name: &str) -> Result<&str> {
        self.registry.read(name)
    }

    pub fn rename(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        self.registry.rename(old_name, new_name)?;
        debug!("renamed {:?} to {:?}", old_name, new_name);
        Ok(())
    }

    pub fn list(&self) -> Vec<(&str, usize)> {
        self.registry.list()
    }

    pub fn stats(&self) -> Stats {
        Stats {
            used_mib: self.blocks.used_bytes() / MIB,
            free_mib: self.blocks.free_bytes() / MIB,
        }
    }

    /// Write an entry's content to an external path
    pub fn export(&self, name: &str, path: &str) -> Result<()> {
        let content = self.registry.read(name)?;
        let mut file = fs::File::create(path).map_err(|e| {
            warn!("export to {:?} failed: {}", path, e);
            FsError::PathUnopenable {
                path: path.to_string(),
                mode: OpenMode::Writing,
            }
        })?;
        file.write_all(content.as_bytes())?;
        info!("exported {:?} to {:?} ({} bytes)", name, path, content.len());
        Ok(())
    }

    /// Read an external path into a new entry named `imported_file`
    pub fn import(&mut self, path: &str) -> Result<usize> {
        let bytes = fs::read(path).map_err(|e| {
            warn!("import from {:?} failed: {}", path, e);
            FsError::PathUnopenable {
                path: path.to_string(),
                mode: OpenMode::Reading,
            }
        })?;
        let content = String::from_utf8_lossy(&bytes).into_owned();

        let index = self.create(IMPORTED_FILE_NAME)?;
        if let Some(entry) = self.registry.get_mut(index) {
            entry.set_content(content);
        }
        info!("imported {:?} ({} bytes)", path, bytes.len());
        Ok(index)
    }

    /// Parse and execute one line
    pub fn run_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<()> {
        let command = parse_command(line);
        self.execute(&command, out)
    }

    /// Execute a command, reporting the result or the failure to `out`.
    /// Only errors writing to `out` itself are returned.
    pub fn execute<W: Write>(&mut self, command: &Command, out: &mut W) -> io::Result<()> {
        match self.apply(command) {
            Ok(lines) => {
                for line in lines {
                    writeln!(out, "{}", line)?;
                }
                Ok(())
            }
            Err(e) => writeln!(out, "{}", e),
        }
    }

    /// Run a command and build the lines it reports
    fn apply(&mut self, command: &Command) -> Result<Vec<String>> {
        let lines = match command {
            Command::Create { name } => {
                self.create(name)?;
                vec![format!("File {} created.", name)]
            }
            Command::Delete { name } => {
                self.delete(name)?;
                vec![format!("File {} deleted.", name)]
            }
            Command::List => {
                let mut lines = vec!["File list:".to_string()];
                lines.extend(
                    self.list()
                        .into_iter()
                        .map(|(name, size)| format!("{} (size: {} bytes)", name, size)),
                );
                lines
            }
            Command::Write { name, content } => {
                self.write(name, content)?;
                vec![format!("Wrote content to file {}.", name)]
            }
            Command::Read { name } => {
                let content = self.read(name)?;
                vec![format!("Content of file {}: [{}]", name, content)]
            }
            Command::Rename { old_name, new_name } => {
                self.rename(old_name, new_name)?;
                vec![format!("File {} renamed to {}.", old_name, new_name)]
            }
            Command::Stats => {
                let stats = self.stats();
                vec![
                    format!("Used space: {} MB", stats.used_mib),
                    format!("Free space: {} MB", stats.free_mib),
                ]
            }
            Command::Export { name, path } => {
                self.export(name, path)?;
                vec![format!("File {} exported to {}.", name, path)]
            }
            Command::Import { path } => {
                self.import(path)?;
                vec![format!("File {} imported as {}.", path, IMPORTED_FILE_NAME)]
            }
            Command::Unknown { verb } => return Err(FsError::UnknownCommand(verb.clone())),
        };
        Ok(lines)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(&FsConfig::default())
    }
}
