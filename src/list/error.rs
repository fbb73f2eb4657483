use std::{error::Error, fmt::Display, process};

use super::exit_code;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError {
    pub length: usize,
    pub index: isize,
}

impl IndexError {
    pub fn new(length: usize, index: isize) -> Self {
        Self { length, index }
    }
}

impl Display for IndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "IndexError: The array has {} elements, but you required the {} index",
            self.length, self.index
        )
    }
}

impl Error for IndexError {}

/// Reports the error on stderr and terminates the process.
///
/// The diagnostic used to be printed on stdout; it goes to stderr here so
/// that command output and errors stay on separate streams.
pub fn fatal(error: IndexError) -> ! {
    eprintln!("{}", error);
    process::exit(exit_code::INDEX_ERROR)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandError {
    pub line: usize,
    pub message: String,
}

impl CommandError {
    pub fn new(line: usize, message: &str) -> Self {
        Self {
            line,
            message: String::from(message),
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

impl Error for CommandError {}
