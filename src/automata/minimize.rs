use super::{Dfa, DfaKind, State, Transition};

impl Dfa {
    /// Minimize the machine by partition refinement over its alphabet.
    ///
    /// Blocks start as accepting / non-accepting and split on the block
    /// signature of their successors until the partition stabilizes. The
    /// first member of each block represents it; representative ids are
    /// kept, so state ids of the minimized machine are a subset of the
    /// original ids.
    pub fn minimize(&self) -> Dfa {
        let accepting: Vec<usize> = self
            .states
            .iter()
            .filter(|state| state.accepting)
            .map(|state| state.id)
            .collect();
        let rest: Vec<usize> = self
            .states
            .iter()
            .filter(|state| !state.accepting)
            .map(|state| state.id)
            .collect();

        let mut partition: Vec<Vec<usize>> = [accepting, rest]
            .into_iter()
            .filter(|block| !block.is_empty())
            .collect();

        loop {
            let refined = self.refine(&partition);
            if refined == partition {
                break;
            }
            partition = refined;
        }

        let representatives: Vec<usize> = partition.iter().map(|block| block[0]).collect();
        let block_of = |id: usize| partition.iter().position(|block| block.contains(&id));

        let initial = representatives[block_of(self.initial)
            .expect("initial state always belongs to a block")];

        let mut transitions = Vec::new();
        for (index, _) in partition.iter().enumerate() {
            let representative = representatives[index];
            for symbol in &self.alphabet {
                if let Some(head) = self.transition(representative, symbol) {
                    if let Some(target) = block_of(head) {
                        transitions.push(Transition {
                            tail: representative,
                            symbol: symbol.clone(),
                            head: representatives[target],
                        });
                    }
                }
            }
        }

        let states: Vec<State> = partition
            .iter()
            .enumerate()
            .map(|(index, block)| {
                let id = representatives[index];
                State {
                    id,
                    initial: id == initial,
                    accepting: block.iter().any(|member| self.is_accepting(*member)),
                }
            })
            .collect();

        Dfa {
            states,
            initial,
            transitions,
            alphabet: self.alphabet.clone(),
            kind: DfaKind::Minimized { nesting: None },
        }
    }

    // One refinement sweep: group each block's states by the tuple of
    // successor block indices over the sorted alphabet.
    fn refine(&self, partition: &[Vec<usize>]) -> Vec<Vec<usize>> {
        let mut refined: Vec<Vec<usize>> = Vec::new();
        for block in partition {
            let mut subgroups: Vec<(Vec<Option<usize>>, Vec<usize>)> = Vec::new();
            for &id in block {
                let signature: Vec<Option<usize>> = self
                    .alphabet
                    .iter()
                    .map(|symbol| {
                        self.transition(id, symbol)
                            .and_then(|head| partition.iter().position(|b| b.contains(&head)))
                    })
                    .collect();
                match subgroups.iter_mut().find(|(key, _)| *key == signature) {
                    Some((_, members)) => members.push(id),
                    None => subgroups.push((signature, vec![id])),
                }
            }
            refined.extend(subgroups.into_iter().map(|(_, members)| members));
        }
        refined
    }
}
