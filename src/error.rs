use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Everything that stops a conversion. Each variant ends the process with
/// status 1 and its message on stderr.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Usage: {program} <input_markdown_file> <output_html_file>")]
    Usage { program: String },

    #[error("Missing {}", .0.display())]
    MissingInput(PathBuf),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Error reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error writing {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        1
    }
}
