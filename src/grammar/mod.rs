//! The LR(0) grammar engine.
//!
//! A [Grammar] is an ordered list of productions. After [augmentation]
//! (Grammar::augment) the engine computes CLOSURE and GOTO over item
//! sets, the canonical collection of LR(0) item sets with its transition
//! relation, and the FIRST sets of every non-terminal. FOLLOW sets and
//! parse-table construction are outside this crate's scope.
//!
//! # Example
//! ```
//! use lang_lpg::grammar::Grammar;
//!
//! let mut grammar = Grammar::new(vec![
//!     ("e".to_string(), vec!["e".to_string(), "PLUS".to_string(), "t".to_string()]),
//!     ("e".to_string(), vec!["t".to_string()]),
//!     ("t".to_string(), vec!["ID".to_string()]),
//! ])
//! .unwrap();
//! grammar.augment();
//!
//! let symbols = vec![
//!     "PLUS".to_string(),
//!     "ID".to_string(),
//!     "e".to_string(),
//!     "t".to_string(),
//! ];
//! let (collection, _relations) = grammar.items(&symbols);
//! assert_eq!(collection.len(), 6);
//! ```

mod first;
mod items;

#[cfg(test)]
mod __tests__;

use crate::BuildError;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};

/// The empty-string marker used in FIRST sets and for ε-productions.
pub const EPSILON: &str = "ε";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// An LR(0) item: a production index and a dot position `0..=body length`.
pub struct Item {
    pub production: usize,
    pub dot: usize,
}

#[derive(Debug, Clone, Default)]
/// An unordered collection of items, each tagged with its kernel flag.
///
/// Two item sets are equal when their items agree, kernel flags excluded:
/// the flag only records whether an item was present before closure
/// expansion (or has its dot past the beginning).
pub struct ItemSet {
    items: BTreeMap<Item, bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
/// An edge of the canonical collection: either `GOTO(C_from, symbol) =
/// C_to`, or the synthetic accept edge out of the state holding the
/// completed start item.
pub enum Relation {
    Goto {
        from: usize,
        to: usize,
        symbol: String,
    },
    Accept {
        state: usize,
    },
}

#[derive(Debug, Clone)]
/// An ordered context-free grammar with derived symbol classes.
pub struct Grammar {
    productions: Vec<(String, Vec<String>)>,
    start: String,
    nonterminals: BTreeSet<String>,
}

impl ItemSet {
    pub fn new() -> ItemSet {
        ItemSet {
            items: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, item: Item, kernel: bool) {
        self.items.insert(item, kernel);
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.items.contains_key(item)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Item, &bool)> {
        self.items.iter()
    }

    pub fn kernel_items(&self) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter_map(|(item, kernel)| if *kernel { Some(item) } else { None })
    }

    pub fn non_kernel_items(&self) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter_map(|(item, kernel)| if *kernel { None } else { Some(item) })
    }

    /// The items without their kernel flags; the identity used for
    /// collection de-duplication.
    pub fn cores(&self) -> Vec<Item> {
        self.items.keys().copied().collect()
    }
}

impl PartialEq for ItemSet {
    fn eq(&self, other: &Self) -> bool {
        self.items.keys().eq(other.items.keys())
    }
}
impl Eq for ItemSet {}

impl Grammar {
    /// Build a grammar from an ordered production list. The head of the
    /// first production is the start symbol.
    pub fn new(productions: Vec<(String, Vec<String>)>) -> Result<Grammar, BuildError> {
        let start = match productions.first() {
            Some((head, _)) => head.clone(),
            None => {
                return Err(BuildError::ParseSpecMalformed(
                    "the grammar has no productions".to_string(),
                ))
            }
        };
        let nonterminals = productions.iter().map(|(head, _)| head.clone()).collect();
        Ok(Grammar {
            productions,
            start,
            nonterminals,
        })
    }

    /// Insert the augmented start production `S' -> S` at index 0. The new
    /// start symbol takes primes until it is genuinely fresh.
    pub fn augment(&mut self) {
        let mut fresh = format!("{}'", self.start);
        while self.nonterminals.contains(&fresh) {
            fresh.push('\'');
        }
        self.productions
            .insert(0, (fresh.clone(), vec![self.start.clone()]));
        self.nonterminals.insert(fresh.clone());
        self.start = fresh;
    }

    pub fn productions(&self) -> &[(String, Vec<String>)] {
        &self.productions
    }

    pub fn start_symbol(&self) -> &str {
        &self.start
    }

    pub fn nonterminals(&self) -> &BTreeSet<String> {
        &self.nonterminals
    }

    pub fn is_nonterminal(&self, symbol: &str) -> bool {
        self.nonterminals.contains(symbol)
    }

    /// Render one item as `A → α • β`.
    pub fn render_item(&self, item: &Item) -> String {
        let (head, body) = &self.productions[item.production];
        let before = body[..item.dot].join(" ");
        let after = body[item.dot..].join(" ");
        format!("{} → {} • {}", head, before, after)
    }

    /// Render an item set with its kernel and non-kernel sections.
    pub fn render_set(&self, set: &ItemSet) -> String {
        let kernel: Vec<String> = set
            .kernel_items()
            .map(|item| format!("\t\t{}", self.render_item(item)))
            .collect();
        let non_kernel: Vec<String> = set
            .non_kernel_items()
            .map(|item| format!("\t\t{}", self.render_item(item)))
            .collect();
        format!(
            "\t  Kernel items:\n{}\n\t  Non-kernel items:\n{}",
            kernel.join("\n"),
            non_kernel.join("\n")
        )
    }

    /// Render the canonical collection and its transition relation.
    pub fn render_collection(&self, collection: &[ItemSet], relations: &[Relation]) -> String {
        let mut rendered = String::new();
        for (index, set) in collection.iter().enumerate() {
            rendered.push_str(&format!("I{}:\n{}\n", index, self.render_set(set)));
        }
        for relation in relations {
            match relation {
                Relation::Goto { from, to, symbol } => {
                    rendered.push_str(&format!("I{} --{}--> I{}\n", from, symbol, to))
                }
                Relation::Accept { state } => {
                    rendered.push_str(&format!("I{} --accept-->\n", state))
                }
            }
        }
        rendered
    }

    /// FIRST of a single symbol: the symbol itself for a terminal, the
    /// computed set for a non-terminal.
    pub fn first_of(
        &self,
        first_sets: &BTreeMap<String, BTreeSet<String>>,
        symbol: &str,
    ) -> BTreeSet<String> {
        if self.is_nonterminal(symbol) {
            first_sets.get(symbol).cloned().unwrap_or_default()
        } else {
            [symbol.to_string()].into_iter().collect()
        }
    }
}

impl Display for Grammar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, (head, body)) in self.productions.iter().enumerate() {
            writeln!(f, "\t[{}] {} -> {}", index, head, body.join(" "))?;
        }
        Ok(())
    }
}
