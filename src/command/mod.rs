//! Command parser
//!
//! Turns one input line into a `Command`. The verb and fixed arguments are
//! whitespace-separated tokens; `write` takes the rest of the line verbatim
//! as content. Missing arguments come back as empty strings.

/// A parsed command line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Create { name: String },
    Delete { name: String },
    List,
    Write { name: String, content: String },
    Read { name: String },
    Rename { old_name: String, new_name: String },
    Stats,
    Export { name: String, path: String },
    Import { path: String },
    /// Unrecognized verb, including the empty verb of a blank line
    Unknown { verb: String },
}

/// Cursor over the unread part of a line
struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    /// Skip ASCII whitespace, then take everything up to the next ASCII whitespace.
    /// Yields "" once the line is used up.
    fn next_token(&mut self) -> &'a str {
        let trimmed = self.rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
        let end = trimmed
            .find(|c: char| c.is_ascii_whitespace())
            .unwrap_or(trimmed.len());
        let (token, rest) = trimmed.split_at(end);
        self.rest = rest;
        token
    }

    /// Whatever follows the last token, minus the single separator after it
    fn remainder(self) -> &'a str {
        let mut chars = self.rest.chars();
        chars.next();
        chars.as_str()
    }
}

/// Parse one line of input
pub fn parse_command(line: &str) -> Command {
    let mut tokens = Tokens::new(line);
    let verb = tokens.next_token();

    match verb {
        "create" => Command::Create {
            name: tokens.next_token().to_string(),
        },
        "delete" => Command::Delete {
            name: tokens.next_token().to_string(),
        },
        "list" => Command::List,
        "write" => {
            let name = tokens.next_token().to_string();
            Command::Write {
                name,
                content: tokens.remainder().to_string(),
            }
        }
        "read" => Command::Read {
            name: tokens.next_token().to_string(),
        },
        "rename" => {
            let old_name = tokens.next_token().to_string();
            let new_name = tokens.next_token().to_string();
            Command::Rename { old_name, new_name }
        }
        "stats" => Command::Stats,
        "export" => {
            let name = tokens.next_token().to_string();
            let path = tokens.next_token().to_string();
            Command::Export { name, path }
        }
        "import" => Command::Import {
            path: tokens.next_token().to_string(),
        },
        other => Command::Unknown {
            verb: other.to_string(),
        },
    }
}
