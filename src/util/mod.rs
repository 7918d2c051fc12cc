//! Shared utilities: the input code wrapper, line/column positions,
//! leveled log labels and accumulated diagnostics.

mod code;
mod diagnostics;
mod logger;
mod position;
use once_cell::unsync::OnceCell;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
/// The line and column information at a code point.
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// A wrapper for the input text to be processed, with lazy line information.
pub struct Code<'c> {
    pub source: &'c [u8],
    line_starts: OnceCell<Vec<usize>>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// A enum structure to assign multiple level debugging to the generator components.
pub enum Log<T> {
    None,
    Default(T),
    Success(T),
    Result(T),
    Verbose(T),
}

#[derive(Debug, Clone)]
/// A single recorded building-phase error and the consequence it carries.
pub struct Diagnostic {
    pub message: String,
    pub consequence: String,
}

#[derive(Debug, Default)]
/// An accumulating error list for a building phase.
///
/// Building components record their errors here and the driver surfaces the
/// collected list at the next phase boundary instead of aborting on the
/// first finding.
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}
