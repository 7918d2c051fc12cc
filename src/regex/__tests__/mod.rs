use crate::regex::{Atom, Expression, Op};
use crate::BuildError;

fn postfix(pattern: &str) -> Vec<Atom> {
    Expression::hard_codify(pattern.as_bytes())
        .unwrap()
        .into_postfix()
        .unwrap()
}

#[test]
fn escapes_translate_to_control_bytes() {
    let expression = Expression::hard_codify(br"\n\t\s\a").unwrap();
    assert_eq!(
        expression.atoms(),
        [
            Atom::Byte(b'\n'),
            Atom::Byte(b'\t'),
            Atom::Byte(b' '),
            Atom::Byte(b'a'),
        ]
    );
}

#[test]
fn double_quotes_hold_literal_runs() {
    let expression = Expression::hard_codify(br#""(a)""#).unwrap();
    assert_eq!(
        expression.atoms(),
        [Atom::Byte(b'('), Atom::Byte(b'a'), Atom::Byte(b')')]
    );
}

#[test]
fn single_quote_holds_exactly_one_byte() {
    let expression = Expression::hard_codify(br"'+'").unwrap();
    assert_eq!(expression.atoms(), [Atom::Byte(b'+')]);

    match Expression::hard_codify(br"'ab'") {
        Err(BuildError::InvalidRegex(_)) => {}
        other => panic!("expected an invalid regex error, got {:?}", other),
    }
}

#[test]
fn universe_shorthand_expands_to_every_byte() {
    let expression = Expression::hard_codify(b"_").unwrap();
    // 256 literals separated by 255 alternation operators.
    assert_eq!(expression.atoms().len(), 511);
    assert_eq!(expression.atoms()[0], Atom::Byte(0));
    assert_eq!(expression.atoms()[1], Atom::Op(Op::Alt));
    assert_eq!(expression.atoms()[510], Atom::Byte(255));
}

#[test]
fn soft_codify_keeps_bare_spaces_and_codifies_quoted_ones() {
    let soft = Expression::soft_codify(b"a 'b' ' '");
    assert_eq!(soft.atoms()[1], Atom::Op(Op::Space));
    // the space between the two trailing quotes is a literal
    assert_eq!(soft.atoms()[7], Atom::Byte(b' '));
}

#[test]
fn extra_soft_codify_maps_every_byte() {
    let atoms = Expression::extra_soft_codify(b"a b").into_atoms();
    assert_eq!(
        atoms,
        vec![Atom::Byte(b'a'), Atom::Byte(b' '), Atom::Byte(b'b')]
    );
}

#[test]
fn class_with_range_expands_to_alternation_group() {
    assert_eq!(postfix("[a-c]"), postfix("(a|b|c)"));
}

#[test]
fn trailing_caret_in_class_body_is_discarded() {
    assert_eq!(postfix("[a-c^]"), postfix("(a|b|c)"));
}

#[test]
fn negated_class_excludes_its_members() {
    let expression = Expression::hard_codify(b"[^a-c]").unwrap();
    let expanded = expression.into_postfix().unwrap();
    assert!(!expanded.contains(&Atom::Byte(b'b')));
    assert!(expanded.contains(&Atom::Byte(b'd')));
    // 253 literals survive the complement
    let literals = expanded
        .iter()
        .filter(|atom| matches!(atom, Atom::Byte(_)))
        .count();
    assert_eq!(literals, 253);
}

#[test]
fn latched_group_difference() {
    assert_eq!(postfix("[a-f]#[b-d]"), postfix("(a|e|f)"));
}

#[test]
fn reversed_range_is_rejected() {
    let result = Expression::hard_codify(b"[z-a]").unwrap().into_postfix();
    match result {
        Err(BuildError::InvalidRegex(message)) => {
            assert!(message.contains("reversed"), "message: {}", message)
        }
        other => panic!("expected an invalid regex error, got {:?}", other),
    }
}

#[test]
fn unbalanced_parentheses_are_rejected() {
    assert!(Expression::hard_codify(b"(ab").unwrap().into_postfix().is_err());
    assert!(Expression::hard_codify(b"ab)").unwrap().into_postfix().is_err());
}

#[test]
fn explicit_concatenation_between_adjacent_literals() {
    assert_eq!(
        postfix("ab"),
        vec![Atom::Byte(b'a'), Atom::Byte(b'b'), Atom::Op(Op::Concat)]
    );
}
