//! Line classifier for the `.mc` language.
//!
//! Every trimmed line is matched against an ordered rule table and the first
//! full match wins. The rules overlap (`say hi` without quotes is still a
//! valid generic command), so the order below is part of the grammar.
//
//  Grammar (informal, one statement per line):
//
//      function  ::= 'function' IDENT '(' .* '=>' IDENT ')'
//      var       ::= 'var' IDENT '=' .*
//      say       ::= 'say' '"' .* '"'
//      execute   ::= 'execute' '(' '=>{' .* '}' ',' '{' .* '}' ')'
//      command   ::= WORD .*
//      end       ::= 'end'
//
//      IDENT, WORD ::= [A-Za-z0-9_]+
//
//  Only ASCII whitespace separates tokens.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::ast::Statement;
use crate::parser::trim_line;

struct Rule {
    pattern: Regex,
    build: fn(&Captures) -> Statement,
}

impl Rule {
    fn new(pattern: &str, build: fn(&Captures) -> Statement) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("classifier pattern is valid"),
            build,
        }
    }
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // params and return type are required but discarded
        Rule::new(
            r"^function(?-u:\s)+([A-Za-z0-9_]+)(?-u:\s)*\(.*=>(?-u:\s)*[A-Za-z0-9_]+\)$",
            |c| Statement::FunctionStart {
                name: group(c, 1),
            },
        ),
        Rule::new(r"^var(?-u:\s)+([A-Za-z0-9_]+)(?-u:\s)*=(?-u:\s)*(.*)$", |c| {
            Statement::VarDecl {
                name: group(c, 1),
                value: group(c, 2),
            }
        }),
        Rule::new(r#"^say(?-u:\s)+"(.*)"(?-u:\s)*$"#, |c| Statement::Say {
            message: group(c, 1),
        }),
        Rule::new(r"^execute(?-u:\s)*\(=>\{(.*)\},(?-u:\s)*\{(.*)\}\)$", |c| {
            Statement::Execute {
                conditions: trim_line(&group(c, 1)).to_string(),
                action: trim_line(&group(c, 2)).to_string(),
            }
        }),
        // catch-all, must stay behind every keyword rule
        Rule::new(r"^([A-Za-z0-9_]+)(?-u:\s)+(.*)$", |c| Statement::Command {
            name: group(c, 1),
            args: group(c, 2),
        }),
        Rule::new(r"^end$", |_| Statement::End),
    ]
});

fn group(caps: &Captures, idx: usize) -> String {
    caps.get(idx).map_or("", |m| m.as_str()).to_string()
}

/// Classify one already-trimmed line. Total: anything unrecognised is
/// `Statement::Unmatched`.
pub fn classify(line: &str) -> Statement {
    RULES
        .iter()
        .find_map(|rule| rule.pattern.captures(line).map(|c| (rule.build)(&c)))
        .unwrap_or(Statement::Unmatched)
}
