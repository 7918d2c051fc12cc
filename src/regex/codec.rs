use super::{Atom, Expression, Op, UNIVERSE_MAX};
use crate::BuildError;

impl Expression {
    /// Codify a raw pattern source.
    ///
    /// `\` escapes the next byte (`\n`, `\t` and `\s` translate to their
    /// control values, anything else copies literally). Double quotes open
    /// a run in which every byte is a literal; single quotes hold exactly
    /// one literal byte. `_` expands to the byte universe
    /// `0 | 1 | ... | 255`. Bytes from the operator set copy through as
    /// operator atoms and every other byte becomes its literal atom.
    pub fn hard_codify(source: &[u8]) -> Result<Expression, BuildError> {
        let mut atoms = Vec::new();
        let mut escape = false;
        let mut in_single = false;
        let mut single_len = 0usize;
        let mut in_double = false;

        for &byte in source {
            if escape {
                let value = match byte {
                    b'n' => b'\n',
                    b't' => b'\t',
                    b's' => b' ',
                    other => other,
                };
                atoms.push(Atom::Byte(value));
                escape = false;
                if in_single {
                    single_len += 1;
                }
            } else if byte == b'\\' {
                escape = true;
            } else if byte == b'"' {
                in_double = !in_double;
            } else if in_double {
                atoms.push(Atom::Byte(byte));
            } else if byte == b'\'' {
                if in_single && single_len > 1 {
                    return Err(BuildError::InvalidRegex(
                        "more than one character inside single quotes".to_string(),
                    ));
                }
                in_single = !in_single;
                single_len = 0;
            } else if in_single {
                atoms.push(Atom::Byte(byte));
                single_len += 1;
            } else if byte == b'_' {
                for value in 0..=UNIVERSE_MAX {
                    atoms.push(Atom::Byte(value));
                    if value != UNIVERSE_MAX {
                        atoms.push(Atom::Op(Op::Alt));
                    }
                }
            } else if let Some(op) = Op::from_byte(byte) {
                atoms.push(Atom::Op(op));
            } else {
                atoms.push(Atom::Byte(byte));
            }
        }

        Ok(Expression { atoms })
    }

    /// Codify input that a prebuilt DFA will scan.
    ///
    /// Every byte maps to its literal atom, except a bare space which stays
    /// the space operator atom. A space sitting in a quoted-literal context
    /// (between two single-quote bytes) maps to its literal so that quoted
    /// spaces in a specification keep matching byte transitions.
    pub fn soft_codify(source: &[u8]) -> Expression {
        let mut atoms: Vec<Atom> = Vec::with_capacity(source.len());
        for (idx, &byte) in source.iter().enumerate() {
            if byte == b' ' {
                let quoted = atoms.last() == Some(&Atom::Byte(b'\''))
                    && source.get(idx + 1) == Some(&b'\'');
                if quoted {
                    atoms.push(Atom::Byte(byte));
                } else {
                    atoms.push(Atom::Op(Op::Space));
                }
            } else {
                atoms.push(Atom::Byte(byte));
            }
        }
        Expression { atoms }
    }

    /// Codify input unconditionally: every byte becomes its literal atom.
    pub fn extra_soft_codify(source: &[u8]) -> Expression {
        Expression {
            atoms: source.iter().map(|&byte| Atom::Byte(byte)).collect(),
        }
    }
}
