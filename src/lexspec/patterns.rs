use crate::lexeme::{Pattern, Tokenizer};
use crate::BuildError;
use std::rc::Rc;

// Pattern names referenced by the sequencer steps.
pub(crate) const COMMENT: &str = "COMMENT";
pub(crate) const WS: &str = "WS";
pub(crate) const ID: &str = "ID";
pub(crate) const EQ: &str = "EQ";
pub(crate) const EXPR: &str = "EXPR";
pub(crate) const RETURN: &str = "RETURN";
pub(crate) const OPERATOR: &str = "OPERATOR";
pub(crate) const GROUP: &str = "GROUP";
pub(crate) const CHAR: &str = "CHAR";

/// The built-in patterns of the lexer-specification language.
///
/// The outer table splits a specification file into comments, whitespace,
/// identifiers, `=`, expressions and braced action bodies. The sub table
/// re-tokenizes expression text during value composition. Bare spaces in a
/// specification survive the soft codec as space atoms, which is what the
/// whitespace pattern matches on; expression text therefore ends at the
/// first unquoted space.
pub(crate) struct SpecPatterns {
    pub comment: Rc<Pattern>,
    pub ws: Rc<Pattern>,
    pub id: Rc<Pattern>,
    pub eq: Rc<Pattern>,
    pub expr: Rc<Pattern>,
    pub ret: Rc<Pattern>,
    pub operator: Rc<Pattern>,
    pub group: Rc<Pattern>,
    pub chr: Rc<Pattern>,
}

impl SpecPatterns {
    pub fn new() -> Result<SpecPatterns, BuildError> {
        Ok(SpecPatterns {
            comment: Rc::new(Pattern::new(
                COMMENT,
                r"\(\*(['A'-'Z''a'-'z''0'-'9']|\t| |,|\.|\-|(á|é|í|ó|ú))*\*\)",
            )?),
            ws: Rc::new(Pattern::new(WS, r"( |['\t''\n'])+")?),
            id: Rc::new(Pattern::new(ID, r"['a'-'z']+")?),
            eq: Rc::new(Pattern::new(EQ, r"=")?),
            expr: Rc::new(Pattern::new(
                EXPR,
                r#"(['A'-'Z''a'-'z''0'-'9'' ']|\'|\"|\\|\-|\||\(|\)|\[|\]|\+|\*|\?|\_|\#|\^|.|,|:|=|;|<|%|$|/|á|é|í|ó|ú)+"#,
            )?),
            ret: Rc::new(Pattern::nested(
                RETURN,
                r"\{(( |[^'{''}'])*)\}",
                b'{',
                b'}',
            )?),
            operator: Rc::new(Pattern::new(OPERATOR, r"(\(|\)|\+|\*|\||.|\?|\_|\#)")?),
            group: Rc::new(Pattern::new(
                GROUP,
                r#"\[(\^)?(['A'-'Z''a'-'z''0'-'9'' ']|\'|\"|\\|\/|\*|\-|\+)+\]"#,
            )?),
            chr: Rc::new(Pattern::new(
                CHAR,
                r"\'['A'-'Z''a'-'z''0'-'9'' ''.''%'':'';''|''/''*']\'",
            )?),
        })
    }

    /// The scanner for whole specification files, in tie-break order.
    pub fn file_tokenizer(&self) -> Tokenizer {
        Tokenizer::new(vec![
            self.comment.clone(),
            self.ws.clone(),
            self.id.clone(),
            self.eq.clone(),
            self.expr.clone(),
            self.ret.clone(),
        ])
    }

    /// The scanner for expression text during value composition.
    pub fn value_tokenizer(&self) -> Tokenizer {
        Tokenizer::new(vec![
            self.id.clone(),
            self.operator.clone(),
            self.group.clone(),
            self.chr.clone(),
        ])
    }
}
