//! The regex abstract syntax tree.
//!
//! The postfix atom stream from the [regex](crate::regex) front end is
//! folded against a stack into a binary [TreeNode] tree. After building,
//! only `*`, `|`, explicit concatenation, leaves and the empty-string
//! marker remain: `?` desugars into an alternation with epsilon and `+`
//! into a concatenation with a starred deep copy, so that the position
//! assignment of the automaton builder sees two distinct occurrences.

mod node;

#[cfg(test)]
mod __tests__;

use crate::regex::Atom;
use crate::BuildError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// A leaf or transition symbol of the automaton layer.
///
/// `End` is the synthetic terminator the automaton builder appends to
/// detect acceptance; `Marker` labels the accepting branch of a combined
/// pattern with its token name.
pub enum Sym {
    Epsilon,
    Atom(Atom),
    Marker(String),
    End,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A node of the regex syntax tree.
pub enum TreeNode {
    Leaf(Sym),
    Star(Box<TreeNode>),
    Or(Box<TreeNode>, Box<TreeNode>),
    Concat(Box<TreeNode>, Box<TreeNode>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A parsed regular expression: the tree root plus the sorted alphabet of
/// distinct leaf symbols.
pub struct SyntaxTree {
    pub root: TreeNode,
    pub alphabet: Vec<Sym>,
}

impl SyntaxTree {
    /// Fold a postfix atom sequence into a syntax tree.
    pub fn build(postfix: &[Atom]) -> Result<SyntaxTree, BuildError> {
        use crate::regex::Op;

        let mut stack: Vec<TreeNode> = Vec::new();
        let mut alphabet: BTreeSet<Sym> = BTreeSet::new();

        for &atom in postfix {
            match atom {
                Atom::Op(Op::Star) => {
                    let child = pop_operand(&mut stack, "*")?;
                    stack.push(TreeNode::Star(Box::new(child)));
                }
                Atom::Op(Op::Alt) => {
                    let right = pop_operand(&mut stack, "|")?;
                    let left = pop_operand(&mut stack, "|")?;
                    stack.push(TreeNode::Or(Box::new(left), Box::new(right)));
                }
                Atom::Op(Op::Concat) => {
                    let right = pop_operand(&mut stack, "concatenation")?;
                    let left = pop_operand(&mut stack, "concatenation")?;
                    stack.push(TreeNode::Concat(Box::new(left), Box::new(right)));
                }
                Atom::Op(Op::Opt) => {
                    let child = pop_operand(&mut stack, "?")?;
                    stack.push(TreeNode::Or(
                        Box::new(child),
                        Box::new(TreeNode::Leaf(Sym::Epsilon)),
                    ));
                }
                Atom::Op(Op::Plus) => {
                    let child = pop_operand(&mut stack, "+")?;
                    let copy = child.clone();
                    stack.push(TreeNode::Concat(
                        Box::new(copy),
                        Box::new(TreeNode::Star(Box::new(child))),
                    ));
                }
                atom => {
                    let sym = Sym::Atom(atom);
                    alphabet.insert(sym.clone());
                    stack.push(TreeNode::Leaf(sym));
                }
            }
        }

        let root = stack.pop().ok_or_else(|| {
            BuildError::InvalidRegex("expression produced no syntax tree".to_string())
        })?;
        if !stack.is_empty() {
            return Err(BuildError::InvalidRegex(
                "expression left unused operands".to_string(),
            ));
        }

        Ok(SyntaxTree {
            root,
            alphabet: alphabet.into_iter().collect(),
        })
    }
}

fn pop_operand(stack: &mut Vec<TreeNode>, operator: &str) -> Result<TreeNode, BuildError> {
    stack.pop().ok_or_else(|| {
        BuildError::InvalidRegex(format!("no operand to apply {} to", operator))
    })
}
