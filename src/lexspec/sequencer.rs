use super::patterns;
use crate::lexeme::{Lexeme, MatchPolicy, Tokenizer};
use crate::util::{Code, Diagnostics};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The predicate a sequencer step applies to the current lexeme.
pub(crate) enum StepKind {
    /// The lexeme text equals the keyword.
    Keyword(&'static str),
    /// The lexeme was produced by the expected pattern.
    Expect,
    /// Like `Expect`, and the lexeme text becomes the current identifier.
    Bind,
    /// Like `Expect`, and the lexeme text is composed into the current
    /// identifier's value.
    Compose,
    /// Collect every remaining lexeme for later processing.
    Remainder,
}

pub(crate) struct Step {
    pub pattern: &'static str,
    pub kind: StepKind,
}

impl Step {
    pub fn new(pattern: &'static str, kind: StepKind) -> Step {
        Step { pattern, kind }
    }
}

/// The clause extraction machine of the specification sequencer.
///
/// The step sequence is matched repeatedly against the lexeme table. A
/// failure on the first step merely skips one lexeme; a failure in the
/// middle of the sequence records which predicate failed and where, and
/// stops the phase.
pub(crate) struct ClauseSequencer {
    steps: Vec<Step>,
    pub idents: Vec<(String, String)>,
    pub remainder: Vec<Lexeme>,
    pub diagnostics: Diagnostics,
    current: String,
}

impl ClauseSequencer {
    pub fn new(steps: Vec<Step>) -> ClauseSequencer {
        ClauseSequencer {
            steps,
            idents: Vec::new(),
            remainder: Vec::new(),
            diagnostics: Diagnostics::new(),
            current: String::new(),
        }
    }

    pub fn extract(&mut self, symbols: &[Lexeme], values: Option<&Tokenizer>) {
        let mut symbol_pointer = 0usize;
        let mut step_pointer = 0usize;

        while symbol_pointer < symbols.len() {
            if let StepKind::Remainder = self.steps[step_pointer].kind {
                self.remainder.extend_from_slice(&symbols[symbol_pointer..]);
                break;
            }

            let symbol = &symbols[symbol_pointer];
            let advanced = match self.steps[step_pointer].kind {
                StepKind::Keyword(keyword) => symbol.original == keyword,
                StepKind::Expect => self.expected(step_pointer, symbol),
                StepKind::Bind => {
                    if self.expected(step_pointer, symbol) {
                        self.current = symbol.original.clone();
                        self.upsert(symbol.original.clone(), String::new());
                        true
                    } else {
                        false
                    }
                }
                StepKind::Compose => {
                    self.expected(step_pointer, symbol) && self.compose(symbol, values)
                }
                StepKind::Remainder => unreachable!("handled above"),
            };

            if advanced {
                step_pointer += 1;
                symbol_pointer += 1;
                if step_pointer >= self.steps.len() {
                    step_pointer = 0;
                }
            } else if step_pointer > 0 {
                self.diagnostics.add(
                    format!(
                        "while verifying {} ({:?}) over \"{}\" at position {}",
                        self.steps[step_pointer].pattern,
                        self.steps[step_pointer].kind,
                        symbol.original,
                        symbol.position
                    ),
                    "clause definition is not correct",
                );
                break;
            } else {
                symbol_pointer += 1;
            }
        }
    }

    fn expected(&self, step_pointer: usize, symbol: &Lexeme) -> bool {
        symbol.pattern.as_ref() == self.steps[step_pointer].pattern
    }

    fn upsert(&mut self, name: String, value: String) {
        match self.idents.iter_mut().find(|(ident, _)| *ident == name) {
            Some((_, existing)) => *existing = value,
            None => self.idents.push((name, value)),
        }
    }

    /// Re-tokenize an expression and splice previously defined
    /// identifiers into it.
    fn compose(&mut self, symbol: &Lexeme, values: Option<&Tokenizer>) -> bool {
        let tokenizer = match values {
            Some(tokenizer) => tokenizer,
            None => return false,
        };
        match compose_value(symbol, tokenizer, &self.idents, &mut self.diagnostics) {
            Some(value) => {
                let current = self.current.clone();
                self.upsert(current, value);
                true
            }
            None => false,
        }
    }
}

/// Compose the value of one expression lexeme: scan it with the
/// sub-patterns under the shortest-match policy and substitute every
/// identifier reference by its previously composed value. An undefined
/// reference or an unscannable expression is recorded and aborts the
/// phase.
pub(crate) fn compose_value(
    symbol: &Lexeme,
    tokenizer: &Tokenizer,
    idents: &[(String, String)],
    diagnostics: &mut Diagnostics,
) -> Option<String> {
    let code = Code::from(symbol.original.as_str());
    let parts = match tokenizer.tokenize(&code, &symbol.content, MatchPolicy::Shortest) {
        Ok(parts) => parts,
        // nothing scannable at all: the expression holds no identifier
        // references and its text passes through literally
        Err(error) if error.pointer == 0 => return Some(symbol.original.clone()),
        Err(error) => {
            diagnostics.add(
                format!(
                    "expression \"{}\" at position {} is not scannable: {}",
                    symbol.original, symbol.position, error.message
                ),
                "cannot compose the expression value",
            );
            return None;
        }
    };

    let mut value = String::new();
    for part in parts {
        if part.pattern.as_ref() == patterns::ID {
            match idents.iter().find(|(name, _)| *name == part.original) {
                Some((_, defined)) => value.push_str(defined),
                None => {
                    diagnostics.add(
                        format!("previous definition of \"{}\" not found", part.original),
                        "cannot compose the expression value",
                    );
                    return None;
                }
            }
        } else {
            value.push_str(&part.original);
        }
    }
    Some(value)
}
