//! Statement kinds for one classified source line, and their lowering to
//! target command text.

use super::conditions::rewrite_conditions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `function name(<params> => <type>)` – opens a block.
    FunctionStart { name: String },

    /// `var name = <expr>` – the value is kept but never rendered.
    VarDecl { name: String, value: String },

    /// `say "<message>"`
    Say { message: String },

    /// `execute (=>{<conditions>}, {<action>})`
    Execute { conditions: String, action: String },

    /// `<word> <rest>` – passed through verbatim.
    Command { name: String, args: String },

    /// `end` – closes the open block.
    End,

    /// Blank or unrecognised; dropped.
    Unmatched,
}

impl Statement {
    pub const VARIANT_NAMES: &'static [&'static str] = &[
        "FunctionStart",
        "VarDecl",
        "Say",
        "Execute",
        "Command",
        "End",
        "Unmatched",
    ];

    pub fn kind(&self) -> &'static str {
        let idx = match self {
            Statement::FunctionStart { .. } => 0,
            Statement::VarDecl { .. } => 1,
            Statement::Say { .. } => 2,
            Statement::Execute { .. } => 3,
            Statement::Command { .. } => 4,
            Statement::End => 5,
            Statement::Unmatched => 6,
        };
        Self::VARIANT_NAMES[idx]
    }
}

/// Lowering of a body statement into one line of a `.mcfunction` file.
pub trait ToCommand {
    /// `None` for statements that control scope or carry nothing to emit.
    fn to_command(&self) -> Option<String>;
}

impl ToCommand for Statement {
    fn to_command(&self) -> Option<String> {
        match self {
            Statement::VarDecl { name, .. } => {
                Some(format!("scoreboard objectives add {name} dummy"))
            }
            Statement::Say { message } => Some(format!("say {message}")),
            Statement::Execute { conditions, action } => Some(format!(
                "execute {} run {action}",
                rewrite_conditions(conditions)
            )),
            Statement::Command { name, args } => Some(format!("{name} {args}")),
            Statement::FunctionStart { .. } | Statement::End | Statement::Unmatched => None,
        }
    }
}
