use super::{Lexeme, MatchPolicy, Pattern, Tokenizer};
use crate::regex::Atom;
use crate::util::{Code, Log};
use crate::ScanError;
use once_cell::unsync::OnceCell;
use std::rc::Rc;

impl Tokenizer {
    pub fn new(patterns: Vec<Rc<Pattern>>) -> Self {
        Self {
            patterns,
            log: OnceCell::new(),
        }
    }

    /// Set a log label to debug the scan loop.
    pub fn set_log(&self, log: Log<&'static str>) -> Result<(), String> {
        self.log
            .set(log)
            .map_err(|err| format!("Log label {} is already assigned.", err))
    }

    /// Scan a codified input into a lexeme table.
    ///
    /// Every pattern machine runs from the current offset and reports its
    /// consumed-prefix length; the policy picks the winner, ties going to
    /// the registration order. The atoms must map one to one onto the
    /// bytes of `code` (the soft and extra-soft codecs guarantee this).
    pub fn tokenize(
        &self,
        code: &Code,
        atoms: &[Atom],
        policy: MatchPolicy,
    ) -> Result<Vec<Lexeme>, ScanError> {
        let mut symbols: Vec<Lexeme> = Vec::new();
        let mut forward = 0usize;

        while forward < atoms.len() {
            let mut best: Option<(&Rc<Pattern>, usize)> = None;
            for pattern in &self.patterns {
                let (_, consumed) = pattern.dfa().simulate(&atoms[forward..]);
                let better = match (best.as_ref(), policy) {
                    (None, _) => consumed > 0,
                    (Some((_, length)), MatchPolicy::Longest) => consumed > *length,
                    (Some((_, length)), MatchPolicy::Shortest) => {
                        consumed < *length && consumed > 0
                    }
                };
                if better {
                    best = Some((pattern, consumed));
                }
            }

            match best {
                Some((pattern, length)) => {
                    self.log_match(code, pattern, forward, length);
                    symbols.push(Lexeme {
                        pattern: pattern.name().clone(),
                        content: atoms[forward..forward + length].to_vec(),
                        original: code.slice(forward, forward + length),
                        position: forward,
                    });
                    forward += length;
                }
                None => {
                    self.log_failure(code, forward);
                    return Err(ScanError::new(
                        forward,
                        format!(
                            "no pattern matched the input at {}",
                            code.obtain_position(forward)
                        ),
                    ));
                }
            }
        }

        Ok(symbols)
    }

    fn log_match(&self, _code: &Code, _pattern: &Pattern, _forward: usize, _length: usize) {
        #[cfg(debug_assertions)]
        if let Some(label) = self.log.get() {
            if label.order() >= Log::Success(()).order() {
                println!(
                    "[{}; LexemeSuccess]: pattern: {} length {} at {}",
                    label,
                    _pattern.name(),
                    _length,
                    _code.obtain_position(_forward)
                );
            }
        }
    }

    fn log_failure(&self, _code: &Code, _forward: usize) {
        #[cfg(debug_assertions)]
        if let Some(label) = self.log.get() {
            if label.order() >= Log::Default(()).order() {
                println!(
                    "[{}; LexemeError]: at {}",
                    label,
                    _code.obtain_position(_forward)
                );
            }
        }
    }
}
