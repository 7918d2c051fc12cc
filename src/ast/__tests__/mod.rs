use crate::ast::{Sym, SyntaxTree, TreeNode};
use crate::regex::{Atom, Expression, Op};

fn tree(pattern: &str) -> SyntaxTree {
    let postfix = Expression::hard_codify(pattern.as_bytes())
        .unwrap()
        .into_postfix()
        .unwrap();
    SyntaxTree::build(&postfix).unwrap()
}

fn leaf(byte: u8) -> TreeNode {
    TreeNode::Leaf(Sym::Atom(Atom::Byte(byte)))
}

#[test]
fn zero_or_one_desugars_to_epsilon_alternative() {
    let tree = tree("a?");
    assert_eq!(
        tree.root,
        TreeNode::Or(
            Box::new(leaf(b'a')),
            Box::new(TreeNode::Leaf(Sym::Epsilon))
        )
    );
}

#[test]
fn one_or_more_desugars_to_copy_and_star() {
    let tree = tree("a+");
    assert_eq!(
        tree.root,
        TreeNode::Concat(
            Box::new(leaf(b'a')),
            Box::new(TreeNode::Star(Box::new(leaf(b'a'))))
        )
    );
}

#[test]
fn desugared_tree_contains_no_optional_operators() {
    // after building, only *, |, concatenation and leaves remain
    fn check(node: &TreeNode) {
        match node {
            TreeNode::Leaf(_) => {}
            TreeNode::Star(c) => check(c),
            TreeNode::Or(l, r) | TreeNode::Concat(l, r) => {
                check(l);
                check(r);
            }
        }
    }
    check(&tree("(a|b)?c+[d-f]*").root);
}

#[test]
fn alphabet_is_sorted_and_distinct() {
    let tree = tree("ba|ab");
    assert_eq!(
        tree.alphabet,
        vec![Sym::Atom(Atom::Byte(b'a')), Sym::Atom(Atom::Byte(b'b'))]
    );
}

#[test]
fn operator_without_operand_is_rejected() {
    assert!(SyntaxTree::build(&[Atom::Op(Op::Star)]).is_err());
    assert!(SyntaxTree::build(&[Atom::Byte(b'a'), Atom::Op(Op::Alt)]).is_err());
}

#[test]
fn dangling_operands_are_rejected() {
    // `ab` without a concatenation operator leaves two operands
    assert!(SyntaxTree::build(&[Atom::Byte(b'a'), Atom::Byte(b'b')]).is_err());
}
