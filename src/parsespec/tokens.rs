use crate::artifact::Analyzer;
use crate::lexspec::{compile, RenderOptions};
use crate::BuildError;

// Token tags of the grammar-specification language.
pub(crate) const WSP: &str = "wsp";
pub(crate) const NL: &str = "nl";
pub(crate) const SPT: &str = "spt";
pub(crate) const SVD: &str = "svd";
pub(crate) const MAYUS: &str = "mayus";
pub(crate) const MINUS: &str = "minus";
pub(crate) const STAT: &str = "stat";
pub(crate) const RPT: &str = "rpt";
pub(crate) const END: &str = "end";
pub(crate) const CM: &str = "cm";

// The grammar-specification token language, written in this crate's own
// lexer-specification language and compiled through the same pipeline as
// any user scanner.
const TOKEN_RULES: &str = "(* token rules of the grammar specification language *)
let wsp = [' ''\\t']+
let nl = ['\\n']
let spt = '%''%'
let svd = '%''t''o''k''e''n'
let mayus = ['A'-'Z']+
let minus = ['a'-'z']+
let stat = ':'
let rpt = '|'
let end = ';'
let cm = '/''*'([^'*'])*'*''/'
rule tokens = wsp { layout } | nl { line break } | spt { section split } | svd { token declaration } | mayus { terminal } | minus { nonterminal } | stat { production start } | rpt { alternative } | end { production end } | cm { comment }
";

/// Build the analyzer that tokenizes grammar-specification files.
pub(crate) fn token_analyzer() -> Result<Analyzer, BuildError> {
    compile(TOKEN_RULES, &RenderOptions::default())
}
