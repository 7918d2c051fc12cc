use super::patterns;
use crate::ast::{Sym, SyntaxTree, TreeNode};
use crate::lexeme::{Lexeme, Tokenizer};
use crate::regex::Expression;
use crate::util::Diagnostics;
use crate::BuildError;
use std::collections::{BTreeMap, BTreeSet};

// Quoted single-byte literals that appear directly in a rule get a stable
// conventional token name.
const NAMING_SPECIAL_CASES: [(&str, &str); 5] = [
    ("'+'", "PLUS"),
    ("'*'", "TIMES"),
    ("'('", "LPAREN"),
    ("')'", "RPAREN"),
    ("'-'", "MINUS"),
];

struct Branch {
    expressions: Vec<Lexeme>,
    action: Option<String>,
}

/// Assemble the rule remainder into one union syntax tree plus the action
/// table.
///
/// The remainder is split at top-level `|` lexemes into branches. Each
/// branch's expression text is composed exactly like a let value (with
/// identifier splicing), compiled to a syntax tree, and extended with a
/// `#name` marker leaf so the combined machine can report which branch
/// accepted. Branch names: a lone identifier keeps its own name, a lone
/// quoted literal uses the conventional table, a single-branch rule falls
/// back to the rule's name, and everything else receives a generated
/// `TOKEN<letters>` name.
pub(crate) fn assemble(
    rule_name: &str,
    remainder: &[Lexeme],
    values: &Tokenizer,
    idents: &[(String, String)],
) -> Result<(SyntaxTree, BTreeMap<String, String>), BuildError> {
    let mut diagnostics = Diagnostics::new();

    let mut branches: Vec<Branch> = vec![Branch {
        expressions: Vec::new(),
        action: None,
    }];
    let mut expression_count = 0usize;
    let mut action_count = 0usize;

    for symbol in remainder {
        match symbol.pattern.as_ref() {
            patterns::RETURN => {
                action_count += 1;
                let branch = branches.last_mut().expect("at least one branch is open");
                if branch.action.is_some() || branch.expressions.is_empty() {
                    return Err(BuildError::LexSpecMalformed(format!(
                        "return block at position {} has no preceding pattern",
                        symbol.position
                    )));
                }
                let body = &symbol.original[1..symbol.original.len() - 1];
                branch.action = Some(body.to_string());
            }
            patterns::EXPR if symbol.original == "|" => {
                branches.push(Branch {
                    expressions: Vec::new(),
                    action: None,
                });
            }
            patterns::ID | patterns::EXPR => {
                // a pattern following a completed branch opens the next
                // alternative even without an explicit separator
                if branches.last().map_or(false, |b| b.action.is_some()) {
                    branches.push(Branch {
                        expressions: Vec::new(),
                        action: None,
                    });
                }
                let branch = branches.last_mut().expect("at least one branch is open");
                if branch.expressions.is_empty() {
                    expression_count += 1;
                }
                branch.expressions.push(symbol.clone());
            }
            _ => {}
        }
    }

    if expression_count != action_count {
        return Err(BuildError::LexSpecMalformed(format!(
            "the number of rule patterns ({}) and return blocks ({}) does not match",
            expression_count, action_count
        )));
    }

    let mut roots: Vec<TreeNode> = Vec::new();
    let mut alphabet: BTreeSet<Sym> = BTreeSet::new();
    let mut actions: BTreeMap<String, String> = BTreeMap::new();
    let single_branch = branches.len() == 1;
    let mut generated = 1usize;

    for branch in branches {
        let action = match branch.action {
            Some(action) => action,
            None => {
                return Err(BuildError::LexSpecMalformed(
                    "a rule branch is missing its return block".to_string(),
                ))
            }
        };

        let mut text = String::new();
        for expression in &branch.expressions {
            match super::sequencer::compose_value(expression, values, idents, &mut diagnostics) {
                Some(part) => text.push_str(&part),
                None => return Err(super::boundary("rule", &diagnostics)),
            }
        }

        let name = branch_name(rule_name, &branch.expressions, single_branch, &mut generated);

        let postfix = Expression::hard_codify(text.as_bytes())?.into_postfix()?;
        let tree = SyntaxTree::build(&postfix)?;

        alphabet.extend(tree.alphabet.iter().cloned());
        alphabet.insert(Sym::Marker(name.clone()));

        roots.push(TreeNode::Concat(
            Box::new(tree.root),
            Box::new(TreeNode::Leaf(Sym::Marker(name.clone()))),
        ));

        actions.insert(name, action);
    }

    let root = roots
        .into_iter()
        .reduce(|left, right| TreeNode::Or(Box::new(left), Box::new(right)))
        .ok_or_else(|| {
            BuildError::LexSpecMalformed("the rule clause produced no branches".to_string())
        })?;

    Ok((
        SyntaxTree {
            root,
            alphabet: alphabet.into_iter().collect(),
        },
        actions,
    ))
}

fn branch_name(
    rule_name: &str,
    expressions: &[Lexeme],
    single_branch: bool,
    generated: &mut usize,
) -> String {
    if let [only] = expressions {
        if only.pattern.as_ref() == patterns::ID {
            return only.original.clone();
        }
        if let Some((_, name)) = NAMING_SPECIAL_CASES
            .iter()
            .find(|(literal, _)| *literal == only.original)
        {
            return (*name).to_string();
        }
    }
    if single_branch {
        return rule_name.to_string();
    }
    let name = format!("TOKEN{}", number_to_letter(*generated));
    *generated += 1;
    name
}

// 1 -> a, 26 -> z, 27 -> aa and so on.
fn number_to_letter(number: usize) -> String {
    if number <= 26 {
        ((96 + number) as u8 as char).to_string()
    } else {
        let mut prefix = number_to_letter((number - 1) / 26);
        prefix.push_str(&number_to_letter((number - 1) % 26 + 1));
        prefix
    }
}
