use super::{Dfa, DfaKind};
use crate::regex::Atom;

impl Dfa {
    /// Walk the machine over a codified input.
    ///
    /// Returns the accept flag together with the number of atoms consumed:
    /// the index of the first atom with no matching transition, or the
    /// full input length on exhaustion. Minimized machines configured with
    /// delimiters dispatch to the nested walk.
    pub fn simulate(&self, input: &[Atom]) -> (bool, usize) {
        match self.kind() {
            DfaKind::Minimized {
                nesting: Some(nesting),
            } => self.nested_simulate(input, nesting.open, nesting.close),
            _ => self.plain_simulate(input),
        }
    }

    fn plain_simulate(&self, input: &[Atom]) -> (bool, usize) {
        let mut state = self.initial;
        for (index, &atom) in input.iter().enumerate() {
            match self.transition_on_atom(state, atom) {
                Some(head) => state = head,
                None => return (false, index),
            }
        }
        (self.is_accepting(state), input.len())
    }

    // Balanced-delimiter walk. Delimiters advance the machine only at
    // nesting depth zero; in between, the delimiter bytes merely maintain
    // the stack. A mismatched closer fails and a leftover stack forces
    // non-accept.
    fn nested_simulate(&self, input: &[Atom], open: u8, close: u8) -> (bool, usize) {
        let open_atom = Atom::Byte(open);
        let close_atom = Atom::Byte(close);
        let mut state = self.initial;
        let mut depth = 0usize;

        for (index, &atom) in input.iter().enumerate() {
            if atom == open_atom {
                depth += 1;
                if let Some(head) = self.transition_on_atom(state, atom) {
                    state = head;
                }
            } else if atom == close_atom {
                if depth == 0 {
                    return (false, index);
                }
                depth -= 1;
                if depth == 0 {
                    if let Some(head) = self.transition_on_atom(state, atom) {
                        state = head;
                    }
                }
            } else {
                match self.transition_on_atom(state, atom) {
                    Some(head) => state = head,
                    None => return (false, index),
                }
            }
        }
        (self.is_accepting(state) && depth == 0, input.len())
    }

    /// Walk a combined machine whose accepting branches are encoded by
    /// `#name` marker transitions.
    ///
    /// On the first missing transition, and likewise at input exhaustion,
    /// the current state is inspected for an outgoing marker; its token
    /// name and the consumed length are reported.
    pub fn special_simulate(&self, input: &[Atom]) -> (Option<&str>, usize) {
        let mut state = self.initial;
        for (index, &atom) in input.iter().enumerate() {
            match self.transition_on_atom(state, atom) {
                Some(head) => state = head,
                None => return (self.marker_from(state), index),
            }
        }
        (self.marker_from(state), input.len())
    }
}
