use crate::grammar::Relation;
use crate::parsespec::{analyze_grammar, tokenize, ParseSpec};
use crate::util::Code;
use crate::BuildError;

const GRAMMAR: &str = "/* arithmetic */
%token PLUS ID
IGNORE WSP
%%
e : e PLUS t | t ;
t : ID ;
";

const LEX_TOKENS: [&str; 3] = ["plus", "id", "wsp"];

#[test]
fn tokenization_tags_every_symbol() {
    let symbols = tokenize(&Code::from(GRAMMAR)).unwrap();
    let tags: Vec<(&str, &str)> = symbols
        .iter()
        .map(|symbol| (symbol.pattern.as_ref(), symbol.original.as_str()))
        .collect();

    assert!(tags.contains(&(("spt"), ("%%"))));
    assert!(tags.contains(&(("svd"), ("%token"))));
    assert!(tags.contains(&(("mayus"), ("PLUS"))));
    assert!(tags.contains(&(("minus"), ("e"))));
    assert!(tags.contains(&(("stat"), (":"))));
    assert!(tags.contains(&(("rpt"), ("|"))));
    assert!(tags.contains(&(("end"), (";"))));
    assert!(tags.contains(&(("cm"), ("/* arithmetic */"))));
}

#[test]
fn sequencing_extracts_definitions_and_productions() {
    let symbols = tokenize(&Code::from(GRAMMAR)).unwrap();
    let spec = ParseSpec::sequence(&symbols).unwrap();

    assert!(spec.defined_tokens.contains("PLUS"));
    assert!(spec.defined_tokens.contains("ID"));
    assert!(spec.ignored_tokens.contains("WSP"));
    assert_eq!(spec.terminals, vec!["PLUS".to_string(), "ID".to_string()]);
    assert_eq!(spec.non_terminals, vec!["e".to_string(), "t".to_string()]);
    assert_eq!(
        spec.productions,
        vec![
            (
                "e".to_string(),
                vec!["e".to_string(), "PLUS".to_string(), "t".to_string()]
            ),
            ("e".to_string(), vec!["t".to_string()]),
            ("t".to_string(), vec!["ID".to_string()]),
        ]
    );
    assert!(spec.check_non_terminals());
    assert!(spec.unused_terminals().is_empty());
}

#[test]
fn missing_separator_is_rejected() {
    let symbols = tokenize(&Code::from("%token A\na : A ;\n")).unwrap();
    match ParseSpec::sequence(&symbols) {
        Err(BuildError::ParseSpecMalformed(message)) => {
            assert!(message.contains("%%"), "message: {}", message)
        }
        other => panic!("expected a malformed spec error, got {:?}", other.err()),
    }
}

#[test]
fn empty_alternative_becomes_an_epsilon_production() {
    let symbols = tokenize(&Code::from("%%\na : B | ;\n")).unwrap();
    let spec = ParseSpec::sequence(&symbols).unwrap();
    assert_eq!(
        spec.productions,
        vec![
            ("a".to_string(), vec!["B".to_string()]),
            ("a".to_string(), vec![]),
        ]
    );
}

#[test]
fn undefined_non_terminal_is_fatal() {
    let grammar = "%token ID\n%%\ne : t ;\n";
    match analyze_grammar(grammar, &["id"]) {
        Err(BuildError::ParseSpecMalformed(message)) => {
            assert!(message.contains('t'), "message: {}", message)
        }
        other => panic!("expected a malformed spec error, got {:?}", other.err()),
    }
}

#[test]
fn terminal_missing_from_the_lexer_is_a_token_mismatch() {
    match analyze_grammar(GRAMMAR, &["id", "wsp"]) {
        Err(BuildError::TokenMismatch(message)) => {
            assert!(message.contains("PLUS"), "message: {}", message)
        }
        other => panic!("expected a token mismatch, got {:?}", other.err()),
    }
}

#[test]
fn unused_declared_terminal_is_reported_not_fatal() {
    let grammar = "%token PLUS ID DUMMY\nIGNORE WSP\n%%\ne : e PLUS t | t ;\nt : ID ;\n";
    let analysis = analyze_grammar(grammar, &["plus", "id", "wsp", "dummy"]).unwrap();
    assert_eq!(analysis.unused_terminals, vec!["DUMMY".to_string()]);
}

#[test]
fn full_analysis_matches_the_expression_grammar_shape() {
    let analysis = analyze_grammar(GRAMMAR, &LEX_TOKENS).unwrap();

    assert_eq!(analysis.grammar.start_symbol(), "e'");
    assert_eq!(analysis.collection.len(), 6);

    let over_e = analysis
        .relations
        .iter()
        .find_map(|relation| match relation {
            Relation::Goto { from: 0, to, symbol } if symbol == "e" => Some(*to),
            _ => None,
        })
        .expect("GOTO(I0, e) exists");
    assert!(analysis
        .relations
        .contains(&Relation::Accept { state: over_e }));

    let first_e: Vec<&str> = analysis.first["e"].iter().map(|s| s.as_str()).collect();
    assert_eq!(first_e, vec!["ID"]);
}
