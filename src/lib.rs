//! Language lexer and parser generator (lang_lpg) is a library to compile small scanner and
//! grammar specifications into executable recognizers.
//!
//! # Overview
//! Hand-writing a lexical analyzer for every little language quickly turns into maintaining
//! the same state machines over and over. This library takes the generator route instead:
//! a scanner is described in a compact specification language, compiled into a single
//! minimized DFA with the semantic-action text attached, and serialized so a runtime driver
//! can reload and apply it without recompiling the specification.
//! The parser side of the toolchain consumes a grammar specification and produces the
//! LR(0) canonical collection together with the FIRST sets of its non-terminals.
//!
//! # Design
//!
//! The lexer-generator path is a straight pipeline. The [regex] module codifies a pattern
//! into atoms, expands character classes and reorders the atoms into postfix form; the
//! [ast] module folds the postfix stream into a syntax tree; the [automata] module builds a
//! DFA directly from the tree with the nullable / firstpos / lastpos / followpos
//! construction and minimizes it by partition refinement. The [lexspec] module drives the
//! pipeline over a whole specification file: `let` clauses define named sub-expressions,
//! the `rule` clause combines them into one union machine whose accepting branches are
//! labeled with `#name` markers, and the result is an [Analyzer] artifact.
//!
//! The parser-generator path tokenizes a grammar specification with an analyzer built by
//! the same pipeline (the [parsespec] module carries the token rules of its own
//! specification language), sequences terminals and productions, and feeds the [grammar]
//! engine.
//!
//! # Example
//!
//! ```
//! use lang_lpg::lexspec::{compile, RenderOptions};
//! use lang_lpg::util::Code;
//!
//! let spec = "let digit = ['0'-'9']
//! rule num = digit+ { return INT }
//! ";
//!
//! let analyzer = compile(spec, &RenderOptions::default()).unwrap();
//!
//! let analysis = analyzer.analyze(&Code::from("42")).unwrap();
//! assert_eq!(analysis.symbols.len(), 1);
//! assert_eq!(analysis.symbols[0].pattern.as_ref(), "num");
//! assert_eq!(analysis.symbols[0].original, "42");
//! assert_eq!(analyzer.action("num"), Some(" return INT "));
//!
//! // the artifact round-trips through its binary serialization
//! let reloaded = lang_lpg::Analyzer::from_bytes(&analyzer.to_bytes().unwrap()).unwrap();
//! assert_eq!(reloaded.action("num"), Some(" return INT "));
//! ```
//!
//! Grammar analysis builds on a compiled lexer specification:
//!
//! ```
//! use lang_lpg::parsespec;
//!
//! let lex = "let plus = '+'
//! let id = ['a'-'z']+
//! rule tokens = plus { return PLUS } | id { return ID }
//! ";
//! let grammar = "%token PLUS ID
//! %%
//! e : e PLUS t | t ;
//! t : ID ;
//! ";
//!
//! let analysis = parsespec::generate(lex, grammar).unwrap();
//! assert_eq!(analysis.collection.len(), 6);
//! assert_eq!(
//!     analysis.first["e"].iter().collect::<Vec<_>>(),
//!     ["ID"]
//! );
//! ```

mod artifact;
mod error;

pub mod ast;
pub mod automata;
pub mod grammar;
pub mod lexeme;
pub mod lexspec;
pub mod parsespec;
pub mod regex;
pub mod util;

pub use artifact::{Analysis, Analyzer};

#[derive(Debug, Clone, PartialEq, Eq)]
/// An error returned when a scanner finds a position it cannot tokenize.
pub struct ScanError {
    pub pointer: usize,
    pub message: String,
}

#[derive(Debug)]
/// A fatal error from one of the building phases.
pub enum BuildError {
    /// The input source is empty.
    EmptyInput,
    /// A regular expression is malformed.
    InvalidRegex(String),
    /// The lexer specification violates its clause structure.
    LexSpecMalformed(String),
    /// The grammar specification violates its structure.
    ParseSpecMalformed(String),
    /// The grammar uses a terminal the lexer specification never defines.
    TokenMismatch(String),
    /// The analyzer artifact cannot be (de)serialized.
    Artifact(String),
    /// A file cannot be read or written.
    Io(String),
}
