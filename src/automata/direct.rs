use super::{Dfa, DfaKind, State, Transition};
use crate::ast::{Sym, TreeNode};
use std::collections::{BTreeMap, BTreeSet};

// Arena node in post-order: children always precede their parent, so each
// annotation pass is a single forward sweep.
enum ArenaKind {
    Leaf(Sym),
    Star(usize),
    Or(usize, usize),
    Concat(usize, usize),
}

struct ArenaNode {
    kind: ArenaKind,
    position: Option<usize>,
    nullable: bool,
    firstpos: BTreeSet<usize>,
    lastpos: BTreeSet<usize>,
}

struct BuildState {
    value: BTreeSet<usize>,
    id: usize,
    marked: bool,
    accepting: bool,
}

impl Dfa {
    /// Build a DFA directly from a syntax tree root.
    ///
    /// The root is first extended with a terminator leaf, every literal
    /// leaf receives a post-order position id, and the followpos table
    /// drives a worklist construction of the state set.
    pub fn direct(root: TreeNode) -> Dfa {
        let augmented = TreeNode::Concat(Box::new(root), Box::new(TreeNode::Leaf(Sym::End)));

        let mut arena: Vec<ArenaNode> = Vec::new();
        let mut positions = 0usize;
        let mut symbols: BTreeMap<usize, Sym> = BTreeMap::new();
        let root_index = flatten(&augmented, &mut arena, &mut positions, &mut symbols);

        annotate_nullable(&mut arena);
        annotate_first_last(&mut arena);
        let followpos = collect_followpos(&arena);

        let mut states = vec![BuildState {
            value: arena[root_index].firstpos.clone(),
            id: 0,
            marked: false,
            accepting: false,
        }];
        let mut transitions: Vec<Transition> = Vec::new();

        while let Some(current) = states.iter().position(|state| !state.marked) {
            states[current].marked = true;

            let mut grouped: BTreeMap<Sym, Vec<usize>> = BTreeMap::new();
            for &position in &states[current].value {
                grouped
                    .entry(symbols[&position].clone())
                    .or_default()
                    .push(position);
            }

            let current_id = states[current].id;
            for (symbol, group) in grouped {
                if symbol == Sym::End {
                    states[current].accepting = true;
                    continue;
                }
                let mut union: BTreeSet<usize> = BTreeSet::new();
                for position in group {
                    if let Some(follow) = followpos.get(&position) {
                        union.extend(follow.iter().copied());
                    }
                }
                let head = match states.iter().position(|state| state.value == union) {
                    Some(existing) => states[existing].id,
                    None => {
                        let id = states.len();
                        states.push(BuildState {
                            value: union,
                            id,
                            marked: false,
                            accepting: false,
                        });
                        id
                    }
                };
                transitions.push(Transition {
                    tail: current_id,
                    symbol,
                    head,
                });
            }
        }

        let alphabet: BTreeSet<Sym> = symbols
            .values()
            .filter(|sym| **sym != Sym::End)
            .cloned()
            .collect();

        Dfa {
            states: states
                .into_iter()
                .map(|state| State {
                    id: state.id,
                    initial: state.id == 0,
                    accepting: state.accepting,
                })
                .collect(),
            initial: 0,
            transitions,
            alphabet: alphabet.into_iter().collect(),
            kind: DfaKind::Direct,
        }
    }
}

fn flatten(
    node: &TreeNode,
    arena: &mut Vec<ArenaNode>,
    positions: &mut usize,
    symbols: &mut BTreeMap<usize, Sym>,
) -> usize {
    let (kind, position) = match node {
        TreeNode::Leaf(sym) => {
            let position = if *sym == Sym::Epsilon {
                None
            } else {
                *positions += 1;
                symbols.insert(*positions, sym.clone());
                Some(*positions)
            };
            (ArenaKind::Leaf(sym.clone()), position)
        }
        TreeNode::Star(child) => {
            let child = flatten(child, arena, positions, symbols);
            (ArenaKind::Star(child), None)
        }
        TreeNode::Or(left, right) => {
            let left = flatten(left, arena, positions, symbols);
            let right = flatten(right, arena, positions, symbols);
            (ArenaKind::Or(left, right), None)
        }
        TreeNode::Concat(left, right) => {
            let left = flatten(left, arena, positions, symbols);
            let right = flatten(right, arena, positions, symbols);
            (ArenaKind::Concat(left, right), None)
        }
    };
    arena.push(ArenaNode {
        kind,
        position,
        nullable: false,
        firstpos: BTreeSet::new(),
        lastpos: BTreeSet::new(),
    });
    arena.len() - 1
}

fn annotate_nullable(arena: &mut [ArenaNode]) {
    for index in 0..arena.len() {
        let nullable = match &arena[index].kind {
            ArenaKind::Leaf(Sym::Epsilon) => true,
            ArenaKind::Leaf(_) => false,
            ArenaKind::Star(_) => true,
            ArenaKind::Or(left, right) => arena[*left].nullable || arena[*right].nullable,
            ArenaKind::Concat(left, right) => arena[*left].nullable && arena[*right].nullable,
        };
        arena[index].nullable = nullable;
    }
}

fn annotate_first_last(arena: &mut [ArenaNode]) {
    for index in 0..arena.len() {
        let (firstpos, lastpos) = match &arena[index].kind {
            ArenaKind::Leaf(_) => match arena[index].position {
                Some(position) => {
                    let single: BTreeSet<usize> = [position].into_iter().collect();
                    (single.clone(), single)
                }
                None => (BTreeSet::new(), BTreeSet::new()),
            },
            ArenaKind::Star(child) => (
                arena[*child].firstpos.clone(),
                arena[*child].lastpos.clone(),
            ),
            ArenaKind::Or(left, right) => (
                union_of(&arena[*left].firstpos, &arena[*right].firstpos),
                union_of(&arena[*left].lastpos, &arena[*right].lastpos),
            ),
            ArenaKind::Concat(left, right) => {
                let firstpos = if arena[*left].nullable {
                    union_of(&arena[*left].firstpos, &arena[*right].firstpos)
                } else {
                    arena[*left].firstpos.clone()
                };
                let lastpos = if arena[*right].nullable {
                    union_of(&arena[*left].lastpos, &arena[*right].lastpos)
                } else {
                    arena[*right].lastpos.clone()
                };
                (firstpos, lastpos)
            }
        };
        arena[index].firstpos = firstpos;
        arena[index].lastpos = lastpos;
    }
}

fn union_of(left: &BTreeSet<usize>, right: &BTreeSet<usize>) -> BTreeSet<usize> {
    left.union(right).copied().collect()
}

fn collect_followpos(arena: &[ArenaNode]) -> BTreeMap<usize, BTreeSet<usize>> {
    let mut followpos: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();
    for node in arena {
        match &node.kind {
            ArenaKind::Concat(left, right) => {
                for &position in &arena[*left].lastpos {
                    followpos
                        .entry(position)
                        .or_default()
                        .extend(arena[*right].firstpos.iter().copied());
                }
            }
            ArenaKind::Star(_) => {
                for &position in &node.lastpos {
                    followpos
                        .entry(position)
                        .or_default()
                        .extend(node.firstpos.iter().copied());
                }
            }
            _ => {}
        }
    }
    followpos
}
