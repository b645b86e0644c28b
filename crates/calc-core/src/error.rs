//! Error types and diagnostics for the calculator front ends
//!
//! Arithmetic itself never fails; these errors come from reading commands
//! and from the I/O around them. Each variant carries a `miette` code and a
//! hint for the user.

use miette::Diagnostic;
use thiserror::Error;

// Re-export commonly used types
pub use miette::Result;

/// Alias for Result type with calculator errors
pub type CalcResult<T> = std::result::Result<T, CalcError>;

#[derive(Error, Diagnostic, Debug)]
pub enum CalcError {
    /// First word of a line is neither an operation nor a known command
    #[error("unknown command `{name}`")]
    #[diagnostic(
        code(calc_E0001),
        help("Try `help` for the list of commands")
    )]
    UnknownCommand { name: String },

    /// Operation name not in the built-in set
    #[error("unknown operation `{name}`")]
    #[diagnostic(
        code(calc_E0002),
        help("Known operations: add (+), sub (-), mul (*), div (/)")
    )]
    UnknownOp { name: String },

    /// Operand that does not parse as a number
    #[error("invalid number `{text}`")]
    #[diagnostic(
        code(calc_E0003),
        help("Operands are decimal numbers such as 4, -2.5 or 1e3")
    )]
    InvalidNumber {
        text: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Wrong number of arguments for a command
    #[error("`{command}` expects {expected} argument(s), got {found}")]
    #[diagnostic(code(calc_E0004), help("Usage: {usage}"))]
    WrongArity {
        command: String,
        expected: usize,
        found: usize,
        usage: String,
    },

    /// IO errors (writing output, etc.)
    #[error(transparent)]
    #[diagnostic(code(calc_E0005))]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(code(calc_E0006))]
    Json(#[from] serde_json::Error),

    /// Line editor failures in the REPL
    #[error(transparent)]
    #[diagnostic(code(calc_E0007))]
    Readline(#[from] rustyline::error::ReadlineError),
}

impl CalcError {
    pub fn invalid_number(text: &str, source: std::num::ParseFloatError) -> Self {
        CalcError::InvalidNumber {
            text: text.to_string(),
            source,
        }
    }
}
