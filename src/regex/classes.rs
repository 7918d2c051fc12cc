use super::{Atom, Op, UNIVERSE_MAX};
use crate::BuildError;
use std::collections::BTreeSet;

/// Expand every `[...]` run into a parenthesized alternation group.
///
/// A leading `^` negates the body against the byte universe. A `-` between
/// two byte literals expands to the inclusive range. A `#` directly after
/// the closing bracket latches the group; the next bracket group is then
/// computed as `latched - group` instead of being emitted on its own.
pub(super) fn transform_groups(atoms: Vec<Atom>) -> Result<Vec<Atom>, BuildError> {
    let mut result = Vec::with_capacity(atoms.len());
    let mut idx = 0;
    let mut first_group: Option<BTreeSet<Atom>> = None;

    while idx < atoms.len() {
        if atoms[idx] != Atom::Op(Op::LBracket) {
            result.push(atoms[idx]);
            idx += 1;
            continue;
        }
        idx += 1;

        let negate = atoms.get(idx) == Some(&Atom::Op(Op::Neg));
        if negate {
            idx += 1;
        }

        let mut collected = Vec::new();
        loop {
            match atoms.get(idx) {
                Some(&Atom::Op(Op::RBracket)) => break,
                Some(&atom) => {
                    collected.push(atom);
                    idx += 1;
                }
                None => {
                    return Err(BuildError::InvalidRegex(
                        "character class is not terminated".to_string(),
                    ))
                }
            }
        }

        let mut group: BTreeSet<Atom> = BTreeSet::new();
        for local in 0..collected.len() {
            match collected[local] {
                Atom::Op(Op::Range) => {
                    let bounds = range_bounds(&collected, local)?;
                    for value in bounds.0..=bounds.1 {
                        group.insert(Atom::Byte(value));
                    }
                }
                // A `^` past the leading position carries no meaning.
                Atom::Op(Op::Neg) => {}
                atom => {
                    group.insert(atom);
                }
            }
        }

        if negate {
            let mut complement = BTreeSet::new();
            for value in 0..=UNIVERSE_MAX {
                let atom = Atom::Byte(value);
                if !group.contains(&atom) {
                    complement.insert(atom);
                }
            }
            group = complement;
        }

        if let Some(latched) = first_group.take() {
            group = latched.difference(&group).copied().collect();
        }

        idx += 1; // skip the closing bracket
        if atoms.get(idx) == Some(&Atom::Op(Op::Mark)) {
            first_group = Some(group);
            idx += 1;
            continue;
        }

        if group.is_empty() {
            return Err(BuildError::InvalidRegex(
                "character class is empty".to_string(),
            ));
        }

        result.push(Atom::Op(Op::LParen));
        for (n, atom) in group.iter().enumerate() {
            if n > 0 {
                result.push(Atom::Op(Op::Alt));
            }
            result.push(*atom);
        }
        result.push(Atom::Op(Op::RParen));
    }

    Ok(result)
}

fn range_bounds(collected: &[Atom], local: usize) -> Result<(u8, u8), BuildError> {
    let previous = local
        .checked_sub(1)
        .and_then(|i| collected.get(i))
        .copied();
    let next = collected.get(local + 1).copied();
    match (previous, next) {
        (Some(Atom::Byte(low)), Some(Atom::Byte(high))) => {
            if low > high {
                Err(BuildError::InvalidRegex(format!(
                    "character class range is reversed: {} - {}",
                    Atom::Byte(low),
                    Atom::Byte(high)
                )))
            } else {
                Ok((low, high))
            }
        }
        _ => Err(BuildError::InvalidRegex(
            "character class range needs a literal on both sides".to_string(),
        )),
    }
}
