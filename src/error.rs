//! Error type shared by all stages of the table generator.

use super::Float;

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum TableError {
    /// Creating the output directory or writing the file failed.
    Io(io::Error),
    /// The configuration file could not be parsed.
    Config(serde_json::Error),
    /// The configuration parsed, but describes tables that can't be built.
    InvalidConfig(String),
    /// All samples are zero, so there is no peak to normalize against.
    SilentTables,
    /// A quantized sample doesn't fit into an unsigned byte.
    OutOfRange { table: usize, index: usize, value: Float },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Io(e) => write!(f, "I/O error: {}", e),
            TableError::Config(e) => write!(f, "Unable to parse config: {}", e),
            TableError::InvalidConfig(reason) => write!(f, "Invalid config: {}", reason),
            TableError::SilentTables => write!(f, "All tables are silent, can't normalize"),
            TableError::OutOfRange { table, index, value } => write!(
                f,
                "Sample {} of table {} quantizes to {}, outside of [0, 255]",
                index, table, value
            ),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::Io(e) => Some(e),
            TableError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for TableError {
    fn from(e: io::Error) -> Self {
        TableError::Io(e)
    }
}

impl From<serde_json::Error> for TableError {
    fn from(e: serde_json::Error) -> Self {
        TableError::Config(e)
    }
}
