//! Deterministic finite automata.
//!
//! [Dfa::direct] builds a DFA straight from a regex syntax tree using the
//! nullable / firstpos / lastpos / followpos construction, without an
//! intermediate NFA. [Dfa::minimize] refines the state partition down to
//! the observationally distinct blocks. The simulators walk a codified
//! atom sequence and report how far the machine got, which is what the
//! tokenizer's match policy ranks on.

mod direct;
mod minimize;
mod simulate;

#[cfg(test)]
mod __tests__;

use crate::ast::Sym;
use crate::regex::Atom;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// A state of a finite automaton.
pub struct State {
    pub id: usize,
    pub initial: bool,
    pub accepting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A transition of a finite automaton.
pub struct Transition {
    pub tail: usize,
    pub symbol: Sym,
    pub head: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Delimiter bytes for the nested simulation mode.
pub struct Nesting {
    pub open: u8,
    pub close: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// The construction stage a [Dfa] is in. Nested-mode configuration only
/// applies to minimized machines.
pub enum DfaKind {
    Direct,
    Minimized { nesting: Option<Nesting> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A deterministic finite automaton over atom and marker symbols.
///
/// For any state and symbol there is at most one transition; the direct
/// construction guarantees this by grouping positions per symbol.
pub struct Dfa {
    pub states: Vec<State>,
    pub initial: usize,
    pub transitions: Vec<Transition>,
    pub alphabet: Vec<Sym>,
    kind: DfaKind,
}

impl Dfa {
    pub fn kind(&self) -> DfaKind {
        self.kind
    }

    /// Move the machine into nested simulation mode with the given
    /// delimiter bytes. Only meaningful on a minimized machine.
    pub fn with_nesting(mut self, open: u8, close: u8) -> Dfa {
        if let DfaKind::Minimized { nesting } = &mut self.kind {
            *nesting = Some(Nesting { open, close });
        }
        self
    }

    /// The unique successor of `from` over `symbol`, if any.
    pub fn transition(&self, from: usize, symbol: &Sym) -> Option<usize> {
        self.transitions
            .iter()
            .find(|t| t.tail == from && &t.symbol == symbol)
            .map(|t| t.head)
    }

    pub(crate) fn transition_on_atom(&self, from: usize, atom: Atom) -> Option<usize> {
        self.transition(from, &Sym::Atom(atom))
    }

    pub fn is_accepting(&self, id: usize) -> bool {
        self.states
            .iter()
            .any(|state| state.id == id && state.accepting)
    }

    /// The token name of a `#name` transition leaving `from`, if any.
    pub(crate) fn marker_from(&self, from: usize) -> Option<&str> {
        self.transitions.iter().find_map(|t| {
            if t.tail == from {
                match &t.symbol {
                    Sym::Marker(name) => Some(name.as_str()),
                    _ => None,
                }
            } else {
                None
            }
        })
    }
}

impl Display for Dfa {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "initial: {}", self.initial)?;
        for state in &self.states {
            writeln!(
                f,
                "state {}{}{}",
                state.id,
                if state.initial { " initial" } else { "" },
                if state.accepting { " accepting" } else { "" }
            )?;
        }
        for transition in &self.transitions {
            writeln!(
                f,
                "{} --{}--> {}",
                transition.tail, transition.symbol, transition.head
            )?;
        }
        Ok(())
    }
}
