use crate::grammar::{Grammar, Item, Relation, EPSILON};

fn production(head: &str, body: &[&str]) -> (String, Vec<String>) {
    (
        head.to_string(),
        body.iter().map(|symbol| symbol.to_string()).collect(),
    )
}

fn expression_grammar() -> (Grammar, Vec<String>) {
    let mut grammar = Grammar::new(vec![
        production("E", &["E", "PLUS", "T"]),
        production("E", &["T"]),
        production("T", &["ID"]),
    ])
    .unwrap();
    grammar.augment();
    let symbols = ["PLUS", "ID", "E", "T"]
        .iter()
        .map(|symbol| symbol.to_string())
        .collect();
    (grammar, symbols)
}

#[test]
fn augmentation_prepends_a_fresh_start_production() {
    let (grammar, _) = expression_grammar();
    assert_eq!(grammar.start_symbol(), "E'");
    assert_eq!(grammar.productions()[0].0, "E'");
    assert_eq!(grammar.productions()[0].1, vec!["E".to_string()]);

    // a colliding prime keeps extending
    let mut colliding = Grammar::new(vec![
        production("e", &["t"]),
        production("e'", &["x"]),
        production("t", &["ID"]),
    ])
    .unwrap();
    colliding.augment();
    assert_eq!(colliding.start_symbol(), "e''");
}

#[test]
fn closure_expands_nonterminals_behind_the_dot() {
    let (grammar, _) = expression_grammar();
    let closed = grammar.closure(&[Item {
        production: 0,
        dot: 0,
    }]);
    // E' -> .E plus every production of E and T
    assert_eq!(closed.len(), 4);
    assert_eq!(closed.kernel_items().count(), 1);
    assert_eq!(closed.non_kernel_items().count(), 3);
}

#[test]
fn closure_is_idempotent() {
    let (grammar, _) = expression_grammar();
    let closed = grammar.closure(&[Item {
        production: 0,
        dot: 0,
    }]);
    let reclosed = grammar.closure(&closed.cores());
    assert_eq!(closed, reclosed);
}

#[test]
fn goto_commutes_with_closure() {
    let (grammar, _) = expression_grammar();
    let initial = grammar.closure(&[Item {
        production: 0,
        dot: 0,
    }]);
    let moved = grammar.goto(&initial, "E");
    // advancing the applicable items by hand and closing gives the same set
    let advanced: Vec<Item> = initial
        .iter()
        .filter_map(|(item, _)| {
            let (_, body) = &grammar.productions()[item.production];
            if item.dot < body.len() && body[item.dot] == "E" {
                Some(Item {
                    production: item.production,
                    dot: item.dot + 1,
                })
            } else {
                None
            }
        })
        .collect();
    assert_eq!(moved, grammar.closure(&advanced));
}

#[test]
fn canonical_collection_of_the_expression_grammar() {
    let (grammar, symbols) = expression_grammar();
    let (collection, relations) = grammar.items(&symbols);
    assert_eq!(collection.len(), 6);

    // the state reached from I0 over E carries the accept edge
    let over_e = relations
        .iter()
        .find_map(|relation| match relation {
            Relation::Goto { from: 0, to, symbol } if symbol == "E" => Some(*to),
            _ => None,
        })
        .expect("GOTO(I0, E) exists");
    assert!(relations.contains(&Relation::Accept { state: over_e }));

    // no duplicate edges
    let mut deduped = relations.clone();
    deduped.dedup();
    assert_eq!(deduped.len(), relations.len());
}

#[test]
fn kernel_flags_follow_the_dot_convention() {
    let (grammar, symbols) = expression_grammar();
    let (collection, _) = grammar.items(&symbols);
    for set in &collection {
        for (item, kernel) in set.iter() {
            let is_start = item.production == 0 && item.dot == 0;
            if item.dot > 0 || is_start {
                assert!(*kernel, "item {:?} should be kernel", item);
            } else {
                assert!(!*kernel, "item {:?} should be non-kernel", item);
            }
        }
    }
}

#[test]
fn first_sets_of_a_nullable_grammar() {
    let grammar = {
        let mut grammar = Grammar::new(vec![
            production("S", &["A", "B"]),
            production("A", &["a"]),
            production("A", &[]),
            production("B", &["b"]),
        ])
        .unwrap();
        grammar.augment();
        grammar
    };
    let first = grammar.first_sets();

    let a: Vec<&str> = first["A"].iter().map(|s| s.as_str()).collect();
    let b: Vec<&str> = first["B"].iter().map(|s| s.as_str()).collect();
    let s: Vec<&str> = first["S"].iter().map(|s| s.as_str()).collect();
    assert_eq!(a, vec!["a", EPSILON]);
    assert_eq!(b, vec!["b"]);
    assert_eq!(s, vec!["a", "b"]);
}

#[test]
fn first_covers_every_production_body() {
    // FIRST(A) must contain FIRST(alpha) for every production A -> alpha
    let (grammar, _) = expression_grammar();
    let first = grammar.first_sets();
    for (head, body) in grammar.productions() {
        if let Some(symbol) = body.first() {
            let of_symbol = grammar.first_of(&first, symbol);
            for terminal in of_symbol {
                if terminal != EPSILON {
                    assert!(
                        first[head].contains(&terminal),
                        "FIRST({}) misses {}",
                        head,
                        terminal
                    );
                }
            }
        }
    }
}
