//! The lexer-specification pipeline.
//!
//! A specification file declares named sub-expressions with `let` clauses
//! and combines them in a `rule` clause, attaching a braced semantic
//! action to every alternative:
//!
//! ```text
//! (* a tiny scanner *)
//! let digit = ['0'-'9']
//! let id = ['a'-'z']+
//! rule tokens = id { return ID } | digit+ { return INT }
//! ```
//!
//! [compile] tokenizes the file, extracts the `let` bindings, composes
//! every rule alternative (splicing identifier references), builds one
//! union DFA whose accepting branches are labeled with `#name` markers,
//! minimizes it once and pairs it with the action table as an
//! [Analyzer](crate::Analyzer).

mod assemble;
mod patterns;
mod sequencer;

#[cfg(test)]
mod __tests__;

use crate::artifact::Analyzer;
use crate::automata::Dfa;
use crate::lexeme::{discard, MatchPolicy};
use crate::regex::Expression;
use crate::ast::SyntaxTree;
use crate::util::{Code, Diagnostics};
use crate::BuildError;
use sequencer::{ClauseSequencer, Step, StepKind};
use std::path::Path;

#[derive(Debug, Default, Clone, Copy)]
/// Which intermediate artifacts [compile] renders to the standard output.
pub struct RenderOptions {
    pub subtrees: bool,
    pub tree: bool,
    pub automata: bool,
}

/// Compile a lexer specification into an [Analyzer].
pub fn compile(source: &str, options: &RenderOptions) -> Result<Analyzer, BuildError> {
    if source.is_empty() {
        return Err(BuildError::EmptyInput);
    }

    let code = Code::from(source);
    let soft = Expression::soft_codify(code.source);
    let spec_patterns = patterns::SpecPatterns::new()?;

    let symbols = spec_patterns
        .file_tokenizer()
        .tokenize(&code, soft.atoms(), MatchPolicy::Longest)
        .map_err(|error| BuildError::LexSpecMalformed(error.message))?;
    if symbols.is_empty() {
        return Err(BuildError::EmptyInput);
    }
    let symbols = discard(symbols, &[patterns::COMMENT]);

    // let phase
    let values = spec_patterns.value_tokenizer();
    let mut let_phase = ClauseSequencer::new(vec![
        Step::new(patterns::ID, StepKind::Keyword("let")),
        Step::new(patterns::WS, StepKind::Expect),
        Step::new(patterns::ID, StepKind::Bind),
        Step::new(patterns::WS, StepKind::Expect),
        Step::new(patterns::EQ, StepKind::Expect),
        Step::new(patterns::WS, StepKind::Expect),
        Step::new(patterns::EXPR, StepKind::Compose),
    ]);
    let_phase.extract(&symbols, Some(&values));
    if let_phase.diagnostics.has_errors() {
        return Err(boundary("let", &let_phase.diagnostics));
    }

    if options.subtrees {
        for (name, value) in &let_phase.idents {
            let postfix = Expression::hard_codify(value.as_bytes())?.into_postfix()?;
            let tree = SyntaxTree::build(&postfix)?;
            println!("{}:", name);
            tree.print().map_err(|error| BuildError::Io(error.to_string()))?;
        }
    }

    // rule phase
    let mut rule_phase = ClauseSequencer::new(vec![
        Step::new(patterns::ID, StepKind::Keyword("rule")),
        Step::new(patterns::WS, StepKind::Expect),
        Step::new(patterns::ID, StepKind::Bind),
        Step::new(patterns::WS, StepKind::Expect),
        Step::new(patterns::EQ, StepKind::Expect),
        Step::new(patterns::EXPR, StepKind::Remainder),
    ]);
    rule_phase.extract(&symbols, None);
    if rule_phase.diagnostics.has_errors() {
        return Err(boundary("rule", &rule_phase.diagnostics));
    }
    if rule_phase.remainder.is_empty() {
        return Err(BuildError::LexSpecMalformed(
            "no rule clause found in the specification".to_string(),
        ));
    }
    let rule_name = rule_phase
        .idents
        .last()
        .map(|(name, _)| name.clone())
        .unwrap_or_default();
    let remainder = discard(rule_phase.remainder, &[patterns::WS]);
    if remainder.is_empty() {
        return Err(BuildError::LexSpecMalformed(
            "the rule clause has no definition".to_string(),
        ));
    }

    let (union_tree, actions) =
        assemble::assemble(&rule_name, &remainder, &values, &let_phase.idents)?;
    if options.tree {
        union_tree
            .print()
            .map_err(|error| BuildError::Io(error.to_string()))?;
    }

    let direct = Dfa::direct(union_tree.root.clone());
    let minimized = direct.minimize();
    if options.automata {
        println!("direct:\n{}", direct);
        println!("minimized:\n{}", minimized);
    }

    Ok(Analyzer::new(minimized, actions))
}

/// Read a specification file and [compile] it.
pub fn compile_file(
    path: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<Analyzer, BuildError> {
    let source = std::fs::read_to_string(path.as_ref())
        .map_err(|error| BuildError::Io(format!("{}: {}", path.as_ref().display(), error)))?;
    compile(&source, options)
}

pub(crate) fn boundary(scope: &str, diagnostics: &Diagnostics) -> BuildError {
    BuildError::LexSpecMalformed(format!("{} phase failed:\n{}", scope, diagnostics))
}
