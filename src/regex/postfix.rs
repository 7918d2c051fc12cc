use super::{Atom, Op};
use crate::BuildError;

/// Insert a concatenation operator between adjacent atoms wherever the
/// grammar implies one.
pub(super) fn add_explicit_concatenation(atoms: Vec<Atom>) -> Vec<Atom> {
    let last = match atoms.last() {
        Some(&atom) => atom,
        None => return atoms,
    };
    let mut result = Vec::with_capacity(atoms.len() * 2);
    for window in atoms.windows(2) {
        let (left, right) = (window[0], window[1]);
        result.push(left);
        let left_blocks = matches!(left, Atom::Op(Op::LParen) | Atom::Op(Op::Alt));
        let right_blocks = matches!(
            right,
            Atom::Op(Op::RParen)
                | Atom::Op(Op::Alt)
                | Atom::Op(Op::Opt)
                | Atom::Op(Op::Plus)
                | Atom::Op(Op::Star)
        );
        if !left_blocks && !right_blocks {
            result.push(Atom::Op(Op::Concat));
        }
    }
    result.push(last);
    result
}

/// Dijkstra's shunting yard over the atom sequence. Literals rank above
/// every operator, so each one is flushed to the output as soon as the
/// next atom arrives.
pub(super) fn shunting_yard(atoms: Vec<Atom>) -> Result<Vec<Atom>, BuildError> {
    let mut postfix = Vec::with_capacity(atoms.len());
    let mut stack: Vec<Atom> = Vec::new();

    for atom in atoms {
        match atom {
            Atom::Op(Op::LParen) => stack.push(atom),
            Atom::Op(Op::RParen) => loop {
                match stack.pop() {
                    Some(Atom::Op(Op::LParen)) => break,
                    Some(top) => postfix.push(top),
                    None => {
                        return Err(BuildError::InvalidRegex(
                            "unbalanced closing parenthesis".to_string(),
                        ))
                    }
                }
            },
            _ => {
                while let Some(&top) = stack.last() {
                    if top.precedence() >= atom.precedence() {
                        postfix.push(top);
                        stack.pop();
                    } else {
                        break;
                    }
                }
                stack.push(atom);
            }
        }
    }

    while let Some(top) = stack.pop() {
        if top == Atom::Op(Op::LParen) {
            return Err(BuildError::InvalidRegex(
                "unbalanced opening parenthesis".to_string(),
            ));
        }
        postfix.push(top);
    }
    Ok(postfix)
}
