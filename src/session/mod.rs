//! Interactive session loop
//!
//! Allocates the placeholder backing file, prints the banner, then feeds each
//! input line to the catalog until `exit` or end of input.

use crate::config::{FsConfig, EXIT_COMMAND, PROMPT};
use crate::error::Result;
use crate::interpreter::Catalog;
use log::{info, warn};
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Create (or truncate) the placeholder file and extend it to `size` bytes.
/// The file is sparse and is never opened again.
pub fn allocate_backing_file(path: &Path, size: u64) -> Result<()> {
    let file = File::create(path)?;
    file.set_len(size)?;
    info!("allocated backing file {} ({} bytes)", path.display(), size);
    Ok(())
}

/// Drop the line terminator, nothing else
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// One interactive session
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
}

impl Session {
    /// Start a session: allocate the backing file (if configured) and an empty catalog.
    /// A backing file that cannot be created is logged and otherwise ignored.
    pub fn new(config: &FsConfig) -> Self {
        if let Some(path) = &config.backing_path {
            if let Err(e) = allocate_backing_file(path, config.backing_size) {
                warn!("could not allocate backing file {}: {}", path.display(), e);
            }
        }
        Self {
            catalog: Catalog::new(config),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Print the welcome text
    pub fn print_banner<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Welcome to the LightFS file system!")?;
        writeln!(
            out,
            "Available commands: create <filename>, delete <filename>, list, \
             write <filename> <content>, read <filename>, stats, \
             rename <oldname> <newname>, export <filename> <path>, import <path>, exit"
        )
    }

    /// Read and execute lines until `exit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        self.print_banner(out)?;
        let mut line_buffer = Vec::new();

        loop {
            // Prompt
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            // Read line
            line_buffer.clear();
            if input.read_until(b'\n', &mut line_buffer)? == 0 {
                info!("end of input, leaving session");
                break;
            }

            // Lines are raw bytes; anything that isn't UTF-8 is replaced
            let decoded = String::from_utf8_lossy(&line_buffer);
            let line = strip_line_ending(&decoded);
            if line == EXIT_COMMAND {
                break;
            }

            self.catalog.run_line(line, out)?;
        }

        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&FsConfig::default())
    }
}
