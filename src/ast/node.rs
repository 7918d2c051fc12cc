use super::{Sym, SyntaxTree, TreeNode};
use ptree::TreeItem;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

impl Display for Sym {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Sym::Epsilon => write!(f, "ϵ"),
            Sym::Atom(atom) => write!(f, "{}", atom),
            Sym::Marker(name) => write!(f, "#{}", name),
            Sym::End => write!(f, "$"),
        }
    }
}

impl TreeNode {
    fn label(&self) -> String {
        match self {
            TreeNode::Leaf(sym) => format!("{}", sym),
            TreeNode::Star(_) => "*".to_string(),
            TreeNode::Or(_, _) => "|".to_string(),
            TreeNode::Concat(_, _) => "•".to_string(),
        }
    }
}

impl TreeItem for TreeNode {
    type Child = Self;

    fn write_self<W: std::io::Write>(&self, f: &mut W, _: &ptree::Style) -> std::io::Result<()> {
        write!(f, "{}", self.label())
    }

    fn children(&self) -> Cow<[Self::Child]> {
        match self {
            TreeNode::Leaf(_) => Cow::Owned(Vec::new()),
            TreeNode::Star(child) => Cow::Owned(vec![(**child).clone()]),
            TreeNode::Or(left, right) | TreeNode::Concat(left, right) => {
                Cow::Owned(vec![(**left).clone(), (**right).clone()])
            }
        }
    }
}

impl SyntaxTree {
    /// Print the tree to the standard output.
    pub fn print(&self) -> Result<(), std::io::Error> {
        ptree::print_tree(&self.root)
    }
}

impl Display for SyntaxTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let alphabet: Vec<String> = self.alphabet.iter().map(|s| format!("{}", s)).collect();
        write!(f, "alphabet: [{}]", alphabet.join(", "))
    }
}
