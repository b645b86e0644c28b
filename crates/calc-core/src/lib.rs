//! A calculator that keeps an append-only history of every result.
//!
//! [`Calculator`] is the core; [`command`] and [`repl`] put a small line
//! oriented interface in front of it.

pub mod calculator;
pub mod command;
pub mod config;
pub mod demo;
pub mod error;
pub mod op;
pub mod repl;

#[cfg(test)]
mod tests;

pub use calculator::Calculator;
pub use command::{Command, Reply, Session};
pub use config::ReplConfig;
pub use error::{CalcError, CalcResult};
pub use op::BinOp;

/// Runs a single operation on a fresh calculator and returns the report line.
pub fn eval_once(op: &str, a: &str, b: &str) -> CalcResult<String> {
    let op = BinOp::parse(op)?;
    let (a, b) = command::parse_operands(op, &[a, b])?;
    let mut calc = Calculator::new();
    let result = op.eval(&mut calc, a, b);
    Ok(command::op_line(op, a, b, result))
}
