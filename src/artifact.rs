//! The persisted analyzer artifact.
//!
//! An [Analyzer] pairs the final combined DFA with the table of semantic
//! action text, keyed by token name. The action text is opaque to this
//! crate: the generator carries it verbatim for the host build to give it
//! meaning. The artifact serializes to a compact binary form so a runtime
//! driver can reload it and scan input without recompiling the
//! specification.

use crate::automata::Dfa;
use crate::lexeme::Lexeme;
use crate::regex::Expression;
use crate::util::{Code, Log};
use crate::{BuildError, ScanError};
use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::rc::Rc;

#[derive(Debug, Serialize, Deserialize)]
/// The lex engine artifact: a combined, minimized DFA whose accepting
/// branches carry `#name` markers, plus the action text per token name.
pub struct Analyzer {
    dfa: Dfa,
    actions: BTreeMap<String, String>,
    #[serde(skip)]
    log: OnceCell<Log<&'static str>>,
}

#[derive(Debug)]
/// The outcome of scanning one input: the recognized lexemes and the
/// recoverable no-match positions that were skipped.
pub struct Analysis {
    pub symbols: Vec<Lexeme>,
    pub issues: Vec<ScanError>,
}

impl Analyzer {
    pub fn new(dfa: Dfa, actions: BTreeMap<String, String>) -> Analyzer {
        Analyzer {
            dfa,
            actions,
            log: OnceCell::new(),
        }
    }

    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }

    pub fn actions(&self) -> &BTreeMap<String, String> {
        &self.actions
    }

    /// The action text attached to a token name.
    pub fn action(&self, token: &str) -> Option<&str> {
        self.actions.get(token).map(|action| action.as_str())
    }

    pub fn token_names(&self) -> Vec<&str> {
        self.actions.keys().map(|name| name.as_str()).collect()
    }

    /// Set a log label to debug the scan loop.
    pub fn set_log(&self, log: Log<&'static str>) -> Result<(), String> {
        self.log
            .set(log)
            .map_err(|err| format!("Log label {} is already assigned.", err))
    }

    /// Scan an input with the special-simulation mode.
    ///
    /// The input is extra-soft codified and matched repeatedly from the
    /// current offset. A position with no match is recorded and skipped by
    /// one byte; the scan continues, so the issues list is the recoverable
    /// error channel.
    pub fn analyze(&self, code: &Code) -> Result<Analysis, BuildError> {
        if code.source.is_empty() {
            return Err(BuildError::EmptyInput);
        }

        let coded = Expression::extra_soft_codify(code.source);
        let atoms = coded.atoms();
        let mut symbols: Vec<Lexeme> = Vec::new();
        let mut issues: Vec<ScanError> = Vec::new();
        let mut forward = 0usize;

        while forward < atoms.len() {
            let (matched, consumed) = self.dfa.special_simulate(&atoms[forward..]);
            match matched {
                Some(name) if consumed > 0 => {
                    self.log_match(code, name, forward, consumed);
                    symbols.push(Lexeme {
                        pattern: Rc::from(name),
                        content: atoms[forward..forward + consumed].to_vec(),
                        original: code.slice(forward, forward + consumed),
                        position: forward,
                    });
                    forward += consumed;
                }
                _ => {
                    self.log_skip(code, forward);
                    issues.push(ScanError::new(
                        forward,
                        format!("no match at {}", code.obtain_position(forward)),
                    ));
                    forward += 1;
                }
            }
        }

        Ok(Analysis { symbols, issues })
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, BuildError> {
        bincode::serialize(self).map_err(|error| BuildError::Artifact(error.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Analyzer, BuildError> {
        bincode::deserialize(bytes).map_err(|error| BuildError::Artifact(error.to_string()))
    }

    /// Serialize the artifact to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), BuildError> {
        let bytes = self.to_bytes()?;
        std::fs::write(path.as_ref(), bytes)
            .map_err(|error| BuildError::Io(format!("{}: {}", path.as_ref().display(), error)))
    }

    /// Reload an artifact from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Analyzer, BuildError> {
        let bytes = std::fs::read(path.as_ref())
            .map_err(|error| BuildError::Io(format!("{}: {}", path.as_ref().display(), error)))?;
        Analyzer::from_bytes(&bytes)
    }

    fn log_match(&self, _code: &Code, _name: &str, _forward: usize, _consumed: usize) {
        #[cfg(debug_assertions)]
        if let Some(label) = self.log.get() {
            if label.order() >= Log::Success(()).order() {
                println!(
                    "[{}; AnalyzerMatch]: {} length {} at {}",
                    label,
                    _name,
                    _consumed,
                    _code.obtain_position(_forward)
                );
            }
        }
    }

    fn log_skip(&self, _code: &Code, _forward: usize) {
        #[cfg(debug_assertions)]
        if let Some(label) = self.log.get() {
            if label.order() >= Log::Default(()).order() {
                println!(
                    "[{}; AnalyzerSkip]: no match at {}",
                    label,
                    _code.obtain_position(_forward)
                );
            }
        }
    }
}
