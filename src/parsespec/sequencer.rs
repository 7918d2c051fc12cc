use super::tokens;
use crate::lexeme::Lexeme;
use crate::BuildError;
use std::collections::BTreeSet;

#[derive(Debug, Default)]
/// The sequenced content of a grammar specification: declared and ignored
/// tokens, the symbol classes in encounter order, and the productions.
pub struct ParseSpec {
    pub defined_tokens: BTreeSet<String>,
    pub ignored_tokens: BTreeSet<String>,
    pub terminals: Vec<String>,
    pub non_terminals: Vec<String>,
    pub productions: Vec<(String, Vec<String>)>,
    non_terminal_references: Vec<String>,
}

impl ParseSpec {
    /// Sequence a tokenized grammar specification.
    ///
    /// The token list splits at the first `%%` into definitions and
    /// productions; comments and layout are dropped from both halves.
    pub fn sequence(symbols: &[Lexeme]) -> Result<ParseSpec, BuildError> {
        let split = symbols
            .iter()
            .position(|symbol| symbol.pattern.as_ref() == tokens::SPT)
            .ok_or_else(|| {
                BuildError::ParseSpecMalformed(
                    "the specification has no %% separator".to_string(),
                )
            })?;

        let keep = |symbol: &&Lexeme| {
            symbol.pattern.as_ref() != tokens::CM && symbol.pattern.as_ref() != tokens::WSP
        };
        let definitions: Vec<&Lexeme> = symbols[..split].iter().filter(keep).collect();
        let productions: Vec<&Lexeme> = symbols[split + 1..].iter().filter(keep).collect();

        let mut spec = ParseSpec::default();
        spec.extract_definitions(&definitions);
        spec.extract_productions(&productions)?;
        Ok(spec)
    }

    // `%token` and `IGNORE` act as line-scoped flags: every uppercase
    // identifier until the end of the line joins the active set.
    fn extract_definitions(&mut self, definitions: &[&Lexeme]) {
        let mut have_declaration = false;
        let mut have_ignore = false;

        for symbol in definitions {
            match symbol.pattern.as_ref() {
                tokens::NL => {
                    have_declaration = false;
                    have_ignore = false;
                }
                tokens::SVD => have_declaration = true,
                tokens::MAYUS if have_declaration => {
                    self.defined_tokens.insert(symbol.original.clone());
                }
                tokens::MAYUS if symbol.original == "IGNORE" => have_ignore = true,
                tokens::MAYUS if have_ignore => {
                    self.ignored_tokens.insert(symbol.original.clone());
                }
                _ => {}
            }
        }
    }

    // (minus name) (stat ':') ((mayus|minus)* (rpt '|'))* (end ';')
    fn extract_productions(&mut self, symbols: &[&Lexeme]) -> Result<(), BuildError> {
        let mut name: Option<String> = None;
        let mut has_name = false;
        let mut current: Vec<String> = Vec::new();
        let mut alternatives: Vec<Vec<String>> = Vec::new();

        for symbol in symbols {
            match symbol.pattern.as_ref() {
                tokens::MINUS if !has_name => name = Some(symbol.original.clone()),
                tokens::STAT => has_name = true,
                tokens::MAYUS | tokens::MINUS if has_name => {
                    current.push(symbol.original.clone());
                    if symbol.pattern.as_ref() == tokens::MAYUS {
                        self.terminals.push(symbol.original.clone());
                    } else {
                        self.non_terminal_references.push(symbol.original.clone());
                    }
                }
                tokens::RPT if has_name => {
                    alternatives.push(std::mem::take(&mut current));
                }
                tokens::END if has_name => {
                    alternatives.push(std::mem::take(&mut current));
                    has_name = false;
                    let head = name.take().ok_or_else(|| {
                        BuildError::ParseSpecMalformed(
                            "a production ends without a name".to_string(),
                        )
                    })?;
                    self.non_terminals.push(head.clone());
                    for body in alternatives.drain(..) {
                        self.productions.push((head.clone(), body));
                    }
                }
                _ => {}
            }
        }

        dedup_in_order(&mut self.terminals);
        dedup_in_order(&mut self.non_terminals);
        Ok(())
    }

    /// Terminals and non-terminals in encounter order; the symbol range
    /// the canonical collection sweeps over.
    pub fn symbols(&self) -> Vec<String> {
        let mut symbols = self.terminals.clone();
        symbols.extend(self.non_terminals.iter().cloned());
        symbols
    }

    /// Declared tokens (outside the ignore list) that no production uses.
    /// Warning-level: the driver reports them and continues.
    pub fn unused_terminals(&self) -> Vec<String> {
        self.defined_tokens
            .iter()
            .filter(|token| {
                !self.ignored_tokens.contains(*token) && !self.terminals.contains(*token)
            })
            .cloned()
            .collect()
    }

    /// Whether every non-terminal referenced in a body is defined as a
    /// production head somewhere.
    pub fn check_non_terminals(&self) -> bool {
        self.non_terminal_references
            .iter()
            .all(|reference| self.non_terminals.contains(reference))
    }

    /// Undefined non-terminal references, for error reporting.
    pub fn undefined_non_terminals(&self) -> Vec<String> {
        let mut undefined: Vec<String> = self
            .non_terminal_references
            .iter()
            .filter(|reference| !self.non_terminals.contains(*reference))
            .cloned()
            .collect();
        dedup_in_order(&mut undefined);
        undefined
    }

    /// Check the specification's terminals against the token names a lex
    /// specification actually defines (compared uppercase).
    pub fn validate_tokens(&self, lex_tokens: &[&str]) -> Result<(), BuildError> {
        let upper: BTreeSet<String> = lex_tokens
            .iter()
            .map(|token| token.to_uppercase())
            .collect();

        for token in self
            .defined_tokens
            .iter()
            .filter(|token| !self.ignored_tokens.contains(*token))
            .chain(self.terminals.iter())
        {
            if !upper.contains(token) {
                return Err(BuildError::TokenMismatch(format!(
                    "terminal {} is never defined by the lexer specification",
                    token
                )));
            }
        }
        Ok(())
    }
}

fn dedup_in_order(values: &mut Vec<String>) {
    let mut seen = BTreeSet::new();
    values.retain(|value| seen.insert(value.clone()));
}
