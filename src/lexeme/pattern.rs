use super::Pattern;
use crate::ast::SyntaxTree;
use crate::automata::Dfa;
use crate::regex::Expression;
use crate::BuildError;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

impl Pattern {
    /// Compile a named pattern: codify, expand, build the syntax tree and
    /// run the direct construction plus minimization.
    pub fn new(name: &str, pattern: &str) -> Result<Pattern, BuildError> {
        let postfix = Expression::hard_codify(pattern.as_bytes())?.into_postfix()?;
        let tree = SyntaxTree::build(&postfix)?;
        let direct = Dfa::direct(tree.root.clone());
        let dfa = direct.minimize();
        Ok(Pattern {
            name: Rc::from(name),
            source: pattern.to_string(),
            tree,
            direct,
            dfa,
        })
    }

    /// Compile a pattern whose matches balance a delimiter pair, such as a
    /// braced action body.
    pub fn nested(name: &str, pattern: &str, open: u8, close: u8) -> Result<Pattern, BuildError> {
        let mut built = Pattern::new(name, pattern)?;
        built.dfa = built.dfa.with_nesting(open, close);
        Ok(built)
    }

    pub fn name(&self) -> &Rc<str> {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    /// The direct (unminimized) machine, kept for rendering.
    pub fn direct(&self) -> &Dfa {
        &self.direct
    }

    /// The minimized machine the tokenizer simulates.
    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.name, self.source)
    }
}
