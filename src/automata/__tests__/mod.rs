use crate::ast::SyntaxTree;
use crate::automata::Dfa;
use crate::regex::Expression;

fn direct(pattern: &str) -> Dfa {
    let postfix = Expression::hard_codify(pattern.as_bytes())
        .unwrap()
        .into_postfix()
        .unwrap();
    let tree = SyntaxTree::build(&postfix).unwrap();
    Dfa::direct(tree.root)
}

fn minimized(pattern: &str) -> Dfa {
    direct(pattern).minimize()
}

fn atoms(input: &str) -> Vec<crate::regex::Atom> {
    Expression::extra_soft_codify(input.as_bytes()).into_atoms()
}

#[test]
fn alternation_of_two_bytes() {
    let dfa = minimized("a|b");
    assert_eq!(dfa.states.len(), 2);

    let (accepted, consumed) = dfa.simulate(&atoms("a"));
    assert!(accepted);
    assert_eq!(consumed, 1);

    let (accepted, consumed) = dfa.simulate(&atoms("b"));
    assert!(accepted);
    assert_eq!(consumed, 1);

    // no transition out of the accepting state
    let (accepted, consumed) = dfa.simulate(&atoms("ab"));
    assert!(!accepted);
    assert_eq!(consumed, 1);
}

#[test]
fn textbook_pattern_minimizes_to_four_states() {
    let dfa = minimized("(a|b)*abb");
    assert_eq!(dfa.states.len(), 4);

    let (accepted, _) = dfa.simulate(&atoms("babbabb"));
    assert!(accepted);
    let (accepted, _) = dfa.simulate(&atoms("abb"));
    assert!(accepted);
    let (accepted, _) = dfa.simulate(&atoms("ab"));
    assert!(!accepted);
}

#[test]
fn class_with_stray_caret_matches_like_plain_alternation() {
    let dfa = minimized("[a-c^]");
    let (accepted, _) = dfa.simulate(&atoms("b"));
    assert!(accepted);
}

#[test]
fn negated_class_rejects_its_members() {
    let dfa = minimized("[^a-c]");
    let (accepted, consumed) = dfa.simulate(&atoms("b"));
    assert!(!accepted);
    assert_eq!(consumed, 0);
    let (accepted, _) = dfa.simulate(&atoms("d"));
    assert!(accepted);
}

#[test]
fn minimization_preserves_acceptance() {
    let patterns = ["(a|b)*abb", "a(b|c)*d", "x?y+z", "[0-9]+", "ab?c"];
    let inputs = [
        "", "a", "ab", "abb", "aabb", "babbabb", "ad", "abcd", "abccbd", "yz", "xyz", "xyyz",
        "z", "0", "42", "999", "ac", "abc", "d",
    ];
    for pattern in patterns {
        let direct = direct(pattern);
        let minimized = direct.minimize();
        assert!(minimized.states.len() <= direct.states.len());
        for input in inputs {
            let coded = atoms(input);
            assert_eq!(
                direct.simulate(&coded).0,
                minimized.simulate(&coded).0,
                "pattern {} diverged on {:?}",
                pattern,
                input
            );
        }
    }
}

#[test]
fn acceptance_agrees_with_the_regex_crate() {
    // pattern pairs valid in both syntaxes
    let cases = [
        ("(a|b)*abb", "^((a|b)*abb)$"),
        ("a(b|c)*d", "^(a(b|c)*d)$"),
        ("x?y+z", "^(x?y+z)$"),
        ("[0-9]+", "^([0-9]+)$"),
    ];
    let inputs = [
        "", "a", "b", "abb", "babb", "ababb", "ad", "abcbcd", "abd", "yz", "xyz", "xz",
        "yyz", "0", "17", "x1",
    ];
    for (ours, theirs) in cases {
        let dfa = minimized(ours);
        let oracle = regex::Regex::new(theirs).unwrap();
        for input in inputs {
            let (accepted, _) = dfa.simulate(&atoms(input));
            assert_eq!(
                accepted,
                oracle.is_match(input),
                "pattern {} diverged on {:?}",
                ours,
                input
            );
        }
    }
}

#[test]
fn nested_simulation_balances_braces() {
    let postfix = Expression::hard_codify(br"\{(( |[^'{''}'])*)\}")
        .unwrap()
        .into_postfix()
        .unwrap();
    let tree = SyntaxTree::build(&postfix).unwrap();
    let dfa = Dfa::direct(tree.root).minimize().with_nesting(b'{', b'}');

    let (accepted, consumed) = dfa.simulate(&atoms("{ab{c}d}"));
    assert!(accepted);
    assert_eq!(consumed, 8);

    let (accepted, _) = dfa.simulate(&atoms("{ab}"));
    assert!(accepted);

    // closer with no opener fails immediately
    let (accepted, consumed) = dfa.simulate(&atoms("}{"));
    assert!(!accepted);
    assert_eq!(consumed, 0);

    // leftover opener forces non-accept
    let (accepted, _) = dfa.simulate(&atoms("{a{b}"));
    assert!(!accepted);
}

#[test]
fn direct_construction_orders_state_ids_by_discovery() {
    let dfa = direct("ab");
    assert_eq!(dfa.initial, 0);
    let ids: Vec<usize> = dfa.states.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
    assert_eq!(dfa.transition(0, &crate::ast::Sym::Atom(crate::regex::Atom::Byte(b'a'))), Some(1));
    assert_eq!(dfa.transition(1, &crate::ast::Sym::Atom(crate::regex::Atom::Byte(b'b'))), Some(2));
}
