use crate::{BuildError, ScanError};
use std::fmt::{Display, Formatter};

impl ScanError {
    pub fn new(pointer: usize, message: String) -> Self {
        Self { pointer, message }
    }
}

impl Display for ScanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ScanError: {}", self.message)
    }
}

impl Display for BuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::EmptyInput => write!(f, "EmptyInput: the source is empty"),
            BuildError::InvalidRegex(message) => write!(f, "InvalidRegex: {}", message),
            BuildError::LexSpecMalformed(message) => {
                write!(f, "LexSpecMalformed: {}", message)
            }
            BuildError::ParseSpecMalformed(message) => {
                write!(f, "ParseSpecMalformed: {}", message)
            }
            BuildError::TokenMismatch(message) => write!(f, "TokenMismatch: {}", message),
            BuildError::Artifact(message) => write!(f, "Artifact: {}", message),
            BuildError::Io(message) => write!(f, "Io: {}", message),
        }
    }
}

impl std::error::Error for BuildError {}
impl std::error::Error for ScanError {}
