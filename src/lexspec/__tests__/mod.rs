use crate::lexspec::{compile, RenderOptions};
use crate::regex::Expression;
use crate::util::Code;
use crate::BuildError;

fn options() -> RenderOptions {
    RenderOptions::default()
}

#[test]
fn single_branch_rule_takes_the_rule_name() {
    let spec = "let digit = ['0'-'9']\nrule num = digit+ { return INT }\n";
    let analyzer = compile(spec, &options()).unwrap();

    // the action text keeps its surrounding whitespace, braces stripped
    assert_eq!(analyzer.action("num"), Some(" return INT "));

    let coded = Expression::extra_soft_codify(b"42");
    let (matched, consumed) = analyzer.dfa().special_simulate(coded.atoms());
    assert_eq!(matched, Some("num"));
    assert_eq!(consumed, 2);
}

#[test]
fn multi_branch_rule_keeps_identifier_names() {
    let spec = "let ws = [' ''\\t''\\n']+\nlet id = ['a'-'z']+\nlet num = ['0'-'9']+\nrule tokens = ws { skip } | id { return ID } | num { return NUM }\n";
    let analyzer = compile(spec, &options()).unwrap();

    let names: Vec<&str> = analyzer.token_names();
    assert_eq!(names, vec!["id", "num", "ws"]);

    let analysis = analyzer.analyze(&Code::from("ab 12")).unwrap();
    let matched: Vec<(&str, &str)> = analysis
        .symbols
        .iter()
        .map(|lexeme| (lexeme.pattern.as_ref(), lexeme.original.as_str()))
        .collect();
    assert_eq!(matched, vec![("id", "ab"), ("ws", " "), ("num", "12")]);
    assert!(analysis.issues.is_empty());
}

#[test]
fn identifier_references_splice_recursively() {
    let spec = "let digit = ['0'-'9']\nlet num = digit(digit)*\nrule tokens = num { return NUM }\n";
    let analyzer = compile(spec, &options()).unwrap();

    let analysis = analyzer.analyze(&Code::from("007")).unwrap();
    assert_eq!(analysis.symbols.len(), 1);
    assert_eq!(analysis.symbols[0].original, "007");
}

#[test]
fn quoted_literal_branch_takes_a_conventional_name() {
    let spec = "let id = ['a'-'z']+\nrule tokens = id { return ID } | '+' { return PLUS }\n";
    let analyzer = compile(spec, &options()).unwrap();
    assert_eq!(analyzer.token_names(), vec!["PLUS", "id"]);

    let analysis = analyzer.analyze(&Code::from("a+b")).unwrap();
    let matched: Vec<&str> = analysis
        .symbols
        .iter()
        .map(|lexeme| lexeme.pattern.as_ref())
        .collect();
    assert_eq!(matched, vec!["id", "PLUS", "id"]);
}

#[test]
fn comments_are_discarded() {
    let spec = "(* scanner *)\nlet id = ['a'-'z']+\nrule tokens = id { return ID }\n";
    let analyzer = compile(spec, &options()).unwrap();
    assert_eq!(analyzer.token_names(), vec!["id"]);
}

#[test]
fn empty_input_is_rejected() {
    match compile("", &options()) {
        Err(BuildError::EmptyInput) => {}
        other => panic!("expected EmptyInput, got {:?}", other.err()),
    }
}

#[test]
fn missing_rule_clause_is_fatal() {
    let spec = "let id = ['a'-'z']+\n";
    match compile(spec, &options()) {
        Err(BuildError::LexSpecMalformed(message)) => {
            assert!(message.contains("rule"), "message: {}", message)
        }
        other => panic!("expected a malformed spec error, got {:?}", other.err()),
    }
}

#[test]
fn undefined_identifier_in_a_rule_is_fatal() {
    let spec = "let id = ['a'-'z']+\nrule tokens = word { return WORD }\n";
    match compile(spec, &options()) {
        Err(BuildError::LexSpecMalformed(message)) => {
            assert!(message.contains("word"), "message: {}", message)
        }
        other => panic!("expected a malformed spec error, got {:?}", other.err()),
    }
}

#[test]
fn branch_without_action_is_fatal() {
    let spec = "let id = ['a'-'z']+\nlet num = ['0'-'9']+\nrule tokens = id { return ID } | num\n";
    match compile(spec, &options()) {
        Err(BuildError::LexSpecMalformed(_)) => {}
        other => panic!("expected a malformed spec error, got {:?}", other.err()),
    }
}

#[test]
fn malformed_let_clause_reports_the_failing_step() {
    // the `=` is missing, so the sequencer fails mid-clause
    let spec = "let id ['a'-'z']+\nrule tokens = id { return ID }\n";
    match compile(spec, &options()) {
        Err(BuildError::LexSpecMalformed(message)) => {
            assert!(message.contains("let phase"), "message: {}", message)
        }
        other => panic!("expected a malformed spec error, got {:?}", other.err()),
    }
}
