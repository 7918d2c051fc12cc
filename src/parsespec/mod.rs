//! The parser-specification pipeline.
//!
//! A grammar specification declares its terminals before a `%%` separator
//! and lists productions after it:
//!
//! ```text
//! %token PLUS ID
//! IGNORE WSP
//! %%
//! e : e PLUS t | t ;
//! t : ID ;
//! ```
//!
//! The file is tokenized by an analyzer built from this crate's own
//! lexer-specification pipeline, sequenced into a [ParseSpec], checked
//! against the lexer's token names, and handed to the
//! [grammar](crate::grammar) engine for the LR(0) canonical collection
//! and FIRST sets.

mod sequencer;
mod tokens;

#[cfg(test)]
mod __tests__;

pub use sequencer::ParseSpec;

use crate::grammar::{Grammar, ItemSet, Relation};
use crate::lexeme::Lexeme;
use crate::lexspec::{compile, RenderOptions};
use crate::util::Code;
use crate::BuildError;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Everything the parser-generator path produces for one grammar.
pub struct GrammarAnalysis {
    pub spec: ParseSpec,
    pub grammar: Grammar,
    pub collection: Vec<ItemSet>,
    pub relations: Vec<Relation>,
    pub first: BTreeMap<String, BTreeSet<String>>,
    pub unused_terminals: Vec<String>,
}

/// Tokenize a grammar specification with the self-hosted token analyzer.
///
/// Unrecognized bytes are skipped by the analyzer's recoverable no-match
/// policy, so stray input does not abort tokenization.
pub fn tokenize(code: &Code) -> Result<Vec<Lexeme>, BuildError> {
    let analyzer = tokens::token_analyzer()?;
    let analysis = analyzer.analyze(code)?;
    Ok(analysis.symbols)
}

/// Run the full parser-generator path: compile the lexer specification,
/// tokenize and sequence the grammar specification, cross-check the two,
/// and build the LR(0) canonical collection plus FIRST sets.
pub fn generate(lex_source: &str, grammar_source: &str) -> Result<GrammarAnalysis, BuildError> {
    let analyzer = compile(lex_source, &RenderOptions::default())?;
    analyze_grammar(grammar_source, &analyzer.token_names())
}

/// Sequence and analyze a grammar specification against a known set of
/// lexer token names.
pub fn analyze_grammar(
    grammar_source: &str,
    lex_tokens: &[&str],
) -> Result<GrammarAnalysis, BuildError> {
    if grammar_source.is_empty() {
        return Err(BuildError::EmptyInput);
    }

    let code = Code::from(grammar_source);
    let symbols = tokenize(&code)?;
    let spec = ParseSpec::sequence(&symbols)?;

    if !spec.check_non_terminals() {
        return Err(BuildError::ParseSpecMalformed(format!(
            "non-terminals referenced but never defined: {}",
            spec.undefined_non_terminals().join(", ")
        )));
    }
    spec.validate_tokens(lex_tokens)?;
    let unused_terminals = spec.unused_terminals();

    let mut grammar = Grammar::new(spec.productions.clone())?;
    grammar.augment();
    let (collection, relations) = grammar.items(&spec.symbols());
    let first = grammar.first_sets();

    Ok(GrammarAnalysis {
        spec,
        grammar,
        collection,
        relations,
        first,
        unused_terminals,
    })
}

/// Read both specification files and [generate] the analysis.
pub fn generate_from_files(
    lex_path: impl AsRef<Path>,
    grammar_path: impl AsRef<Path>,
) -> Result<GrammarAnalysis, BuildError> {
    let read = |path: &Path| {
        std::fs::read_to_string(path)
            .map_err(|error| BuildError::Io(format!("{}: {}", path.display(), error)))
    };
    let lex_source = read(lex_path.as_ref())?;
    let grammar_source = read(grammar_path.as_ref())?;
    generate(&lex_source, &grammar_source)
}
