//! Pattern compilation and the scanning loop.
//!
//! A [Pattern] carries a named regular expression all the way to its
//! minimized DFA. A [Tokenizer] runs every registered pattern's machine in
//! parallel from the current offset and picks a winner under the
//! configured [MatchPolicy]; the emitted [Lexeme]s keep the codified
//! slice, the original text and the absolute offset.
//!
//! # Example
//! ```
//! use lang_lpg::lexeme::{MatchPolicy, Pattern, Tokenizer};
//! use lang_lpg::regex::Expression;
//! use lang_lpg::util::Code;
//! use std::rc::Rc;
//!
//! let word = Rc::new(Pattern::new("word", "['a'-'z']+").unwrap());
//! let number = Rc::new(Pattern::new("number", "['0'-'9']+").unwrap());
//! let tokenizer = Tokenizer::new(vec![word, number]);
//!
//! let code = Code::from("abc42");
//! let atoms = Expression::extra_soft_codify(code.source);
//! let symbols = tokenizer
//!     .tokenize(&code, atoms.atoms(), MatchPolicy::Longest)
//!     .unwrap();
//! assert_eq!(symbols.len(), 2);
//! assert_eq!(symbols[0].pattern.as_ref(), "word");
//! assert_eq!(symbols[1].original, "42");
//! assert_eq!(symbols[1].position, 3);
//! ```

mod pattern;
mod tokenizer;

#[cfg(test)]
mod __tests__;

use crate::ast::SyntaxTree;
use crate::automata::Dfa;
use crate::regex::Atom;
use crate::util::Log;
use once_cell::unsync::OnceCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How competing pattern matches at the same offset are ranked.
///
/// Ties go to the pattern registered first.
pub enum MatchPolicy {
    Longest,
    Shortest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A recognized lexeme: the pattern name, the codified slice, the original
/// text and the absolute offset of its start.
pub struct Lexeme {
    pub pattern: Rc<str>,
    pub content: Vec<Atom>,
    pub original: String,
    pub position: usize,
}

/// A named regular expression compiled down to its minimized DFA.
pub struct Pattern {
    name: Rc<str>,
    source: String,
    tree: SyntaxTree,
    direct: Dfa,
    dfa: Dfa,
}

/// A scanner over a table of patterns.
pub struct Tokenizer {
    patterns: Vec<Rc<Pattern>>,
    log: OnceCell<Log<&'static str>>,
}

/// Drop every lexeme produced by one of the named patterns.
pub fn discard(symbols: Vec<Lexeme>, patterns: &[&str]) -> Vec<Lexeme> {
    symbols
        .into_iter()
        .filter(|symbol| !patterns.contains(&symbol.pattern.as_ref()))
        .collect()
}
