use super::{Grammar, EPSILON};
use std::collections::{BTreeMap, BTreeSet};

impl Grammar {
    /// FIRST sets of every non-terminal, computed to fixpoint.
    ///
    /// For each production the body is walked left to right: a terminal
    /// joins the set and stops the walk; a non-terminal contributes its
    /// own FIRST minus ε and stops unless it is nullable. A body walked
    /// through to the end contributes ε. The sets only grow and are
    /// bounded by the terminals, so the iteration terminates.
    pub fn first_sets(&self) -> BTreeMap<String, BTreeSet<String>> {
        let mut first: BTreeMap<String, BTreeSet<String>> = self
            .nonterminals()
            .iter()
            .map(|symbol| (symbol.clone(), BTreeSet::new()))
            .collect();

        loop {
            let mut changed = false;
            for (head, body) in self.productions() {
                let mut exhausted = true;
                for symbol in body {
                    if self.is_nonterminal(symbol) {
                        let contributed: Vec<String> = first[symbol]
                            .iter()
                            .filter(|terminal| terminal.as_str() != EPSILON)
                            .cloned()
                            .collect();
                        let nullable = first[symbol].contains(EPSILON);
                        let target = first.get_mut(head).expect("every head is a non-terminal");
                        for terminal in contributed {
                            changed |= target.insert(terminal);
                        }
                        if !nullable {
                            exhausted = false;
                            break;
                        }
                    } else {
                        let target = first.get_mut(head).expect("every head is a non-terminal");
                        changed |= target.insert(symbol.clone());
                        exhausted = false;
                        break;
                    }
                }
                if exhausted {
                    let target = first.get_mut(head).expect("every head is a non-terminal");
                    changed |= target.insert(EPSILON.to_string());
                }
            }
            if !changed {
                break;
            }
        }
        first
    }
}
