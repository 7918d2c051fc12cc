use crate::lexeme::{discard, MatchPolicy, Pattern, Tokenizer};
use crate::regex::Expression;
use crate::util::Code;
use std::rc::Rc;

fn tokenizer(patterns: &[(&str, &str)]) -> Tokenizer {
    Tokenizer::new(
        patterns
            .iter()
            .map(|(name, pattern)| Rc::new(Pattern::new(name, pattern).unwrap()))
            .collect(),
    )
}

fn names(tokenizer: &Tokenizer, input: &str, policy: MatchPolicy) -> Vec<String> {
    let code = Code::from(input);
    let atoms = Expression::extra_soft_codify(code.source);
    tokenizer
        .tokenize(&code, atoms.atoms(), policy)
        .unwrap()
        .into_iter()
        .map(|lexeme| lexeme.pattern.as_ref().to_string())
        .collect()
}

#[test]
fn longest_match_prefers_the_widest_pattern() {
    let tokenizer = tokenizer(&[("one", "a"), ("word", "['a'-'z']+")]);
    assert_eq!(names(&tokenizer, "aaa", MatchPolicy::Longest), vec!["word"]);
}

#[test]
fn shortest_match_prefers_the_narrowest_pattern() {
    let tokenizer = tokenizer(&[("one", "a"), ("word", "['a'-'z']+")]);
    assert_eq!(
        names(&tokenizer, "aaa", MatchPolicy::Shortest),
        vec!["one", "one", "one"]
    );
}

#[test]
fn ties_go_to_the_pattern_registered_first() {
    let tokenizer = tokenizer(&[("first", "['a'-'z']"), ("second", "['a'-'z']")]);
    assert_eq!(names(&tokenizer, "x", MatchPolicy::Longest), vec!["first"]);
}

#[test]
fn match_length_is_the_consumed_prefix() {
    // the machine for `abc` walks two atoms into `abx` before failing, so
    // the emitted lexeme covers `ab` and the scan stops at `x`
    let tokenizer = tokenizer(&[("abc", "abc")]);
    let code = Code::from("abx");
    let atoms = Expression::extra_soft_codify(code.source);
    let error = tokenizer
        .tokenize(&code, atoms.atoms(), MatchPolicy::Longest)
        .unwrap_err();
    assert_eq!(error.pointer, 2);
}

#[test]
fn no_match_reports_the_failing_offset() {
    let tokenizer = tokenizer(&[("word", "['a'-'z']+")]);
    let code = Code::from("ab9");
    let atoms = Expression::extra_soft_codify(code.source);
    let error = tokenizer
        .tokenize(&code, atoms.atoms(), MatchPolicy::Longest)
        .unwrap_err();
    assert_eq!(error.pointer, 2);
}

#[test]
fn lexemes_carry_slices_and_offsets() {
    let tokenizer = tokenizer(&[("word", "['a'-'z']+"), ("number", "['0'-'9']+")]);
    let code = Code::from("ab12cd");
    let atoms = Expression::extra_soft_codify(code.source);
    let symbols = tokenizer
        .tokenize(&code, atoms.atoms(), MatchPolicy::Longest)
        .unwrap();
    assert_eq!(symbols[1].original, "12");
    assert_eq!(symbols[1].position, 2);
    assert_eq!(symbols[2].original, "cd");
    assert_eq!(symbols[2].position, 4);

    let kept = discard(symbols, &["number"]);
    assert_eq!(kept.len(), 2);
    assert!(kept.iter().all(|lexeme| lexeme.pattern.as_ref() == "word"));
}
