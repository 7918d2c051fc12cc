use super::{Grammar, Item, ItemSet, Relation};
use std::collections::{BTreeSet, HashMap};

impl Grammar {
    /// CLOSURE of a kernel item batch.
    ///
    /// The given items are kernel items; whenever an item's dot sits
    /// before a non-terminal `B`, every production `B -> γ` joins the set
    /// as a non-kernel item with the dot at the beginning, until a sweep
    /// adds nothing.
    pub fn closure(&self, kernel: &[Item]) -> ItemSet {
        let mut set = ItemSet::new();
        for &item in kernel {
            set.insert(item, true);
        }

        loop {
            let mut added: Vec<Item> = Vec::new();
            for (item, _) in set.iter() {
                let (_, body) = &self.productions()[item.production];
                if item.dot >= body.len() {
                    continue;
                }
                let next = &body[item.dot];
                if !self.is_nonterminal(next) {
                    continue;
                }
                for (index, (head, _)) in self.productions().iter().enumerate() {
                    if head == next {
                        let candidate = Item {
                            production: index,
                            dot: 0,
                        };
                        if !set.contains(&candidate) && !added.contains(&candidate) {
                            added.push(candidate);
                        }
                    }
                }
            }
            if added.is_empty() {
                break;
            }
            for item in added {
                set.insert(item, false);
            }
        }
        set
    }

    /// GOTO: advance every item whose dot sits before `symbol`, then close
    /// the advanced batch. Empty when no item applies.
    pub fn goto(&self, set: &ItemSet, symbol: &str) -> ItemSet {
        let mut advanced: Vec<Item> = Vec::new();
        for (item, _) in set.iter() {
            let (_, body) = &self.productions()[item.production];
            if item.dot < body.len() && body[item.dot] == symbol {
                advanced.push(Item {
                    production: item.production,
                    dot: item.dot + 1,
                });
            }
        }
        if advanced.is_empty() {
            ItemSet::new()
        } else {
            self.closure(&advanced)
        }
    }

    /// The canonical collection of LR(0) item sets and its transition
    /// relation.
    ///
    /// Starting from `CLOSURE({start item})`, every `(i, X)` pair is swept
    /// until a full sweep adds no new set. The relation records each
    /// `GOTO` edge once, plus an accept edge for every state containing
    /// the completed start item.
    pub fn items(&self, symbols: &[String]) -> (Vec<ItemSet>, Vec<Relation>) {
        let start_item = Item {
            production: 0,
            dot: 0,
        };
        let accept_item = Item {
            production: 0,
            dot: self.productions()[0].1.len(),
        };

        let mut collection = vec![self.closure(&[start_item])];
        let mut indices: HashMap<Vec<Item>, usize> = HashMap::new();
        indices.insert(collection[0].cores(), 0);
        let mut relations: BTreeSet<Relation> = BTreeSet::new();

        loop {
            let mut added = false;
            let mut current = 0;
            while current < collection.len() {
                for symbol in symbols {
                    let target = self.goto(&collection[current], symbol);
                    if target.is_empty() {
                        continue;
                    }
                    let accepts = target.contains(&accept_item);
                    let index = match indices.get(&target.cores()) {
                        Some(&index) => index,
                        None => {
                            let index = collection.len();
                            indices.insert(target.cores(), index);
                            collection.push(target);
                            added = true;
                            index
                        }
                    };
                    relations.insert(Relation::Goto {
                        from: current,
                        to: index,
                        symbol: symbol.clone(),
                    });
                    if accepts {
                        relations.insert(Relation::Accept { state: index });
                    }
                }
                current += 1;
            }
            if !added {
                break;
            }
        }

        (collection, relations.into_iter().collect())
    }
}
