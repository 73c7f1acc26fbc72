//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use std::path::PathBuf;

/// Where one analyzed text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file on disk
    File(PathBuf),
    /// Text given on the command line
    Inline(String),
    /// Standard input
    Stdin,
}

impl InputSource {
    /// Label used in reports
    pub fn label(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Inline(_) => "<text>".to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
        }
    }
}
