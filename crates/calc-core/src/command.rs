//! One-line commands understood by the REPL and the `eval` subcommand.
//!
//! A line is a handful of whitespace separated words. The first word picks
//! the command; an operation name or symbol means "run it on the next two
//! numbers".

use crate::calculator::{format_value, Calculator};
use crate::error::{CalcError, CalcResult};
use crate::op::BinOp;
use log::trace;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Op { op: BinOp, a: f64, b: f64 },
    History { json: bool },
    Last,
    Help,
    Quit,
}

pub const HELP: &str = "\
<op> <a> <b>     run an operation: add (+), sub (-), mul (*), div (/)
history [--json] show every result so far
last             show the most recent result
help             show this help
quit             leave";

fn parse_number(text: &str) -> CalcResult<f64> {
    text.parse::<f64>()
        .map_err(|e| CalcError::invalid_number(text, e))
}

fn arity(command: &str, expected: usize, found: usize, usage: &str) -> CalcError {
    CalcError::WrongArity {
        command: command.to_string(),
        expected,
        found,
        usage: usage.to_string(),
    }
}

/// Parses the two operands of `op`.
pub fn parse_operands(op: BinOp, args: &[&str]) -> CalcResult<(f64, f64)> {
    match args {
        [a, b] => Ok((parse_number(a)?, parse_number(b)?)),
        _ => Err(arity(op.as_ref(), 2, args.len(), &format!("{} <a> <b>", op))),
    }
}

/// Report line for one operation, e.g. `5 + 3 = 8`.
pub fn op_line(op: BinOp, a: f64, b: f64, result: f64) -> String {
    format!(
        "{} {} {} = {}",
        format_value(a),
        op.symbol(),
        format_value(b),
        format_value(result)
    )
}

impl Command {
    /// Parses one line. Empty lines yield `Ok(None)`.
    pub fn parse(line: &str) -> CalcResult<Option<Command>> {
        let words = line.split_whitespace().collect::<Vec<&str>>();
        let Some((&name, args)) = words.split_first() else {
            return Ok(None);
        };
        trace!("command `{}` with args {:?}", name, args);

        let cmd = match name {
            "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            "last" => {
                if !args.is_empty() {
                    return Err(arity(name, 0, args.len(), "last"));
                }
                Command::Last
            }
            "history" => match args {
                [] => Command::History { json: false },
                ["--json"] => Command::History { json: true },
                [other] => {
                    return Err(CalcError::UnknownCommand {
                        name: format!("history {}", other),
                    })
                }
                _ => return Err(arity(name, 1, args.len(), "history [--json]")),
            },
            _ => {
                let op = BinOp::parse(name).map_err(|_| CalcError::UnknownCommand {
                    name: name.to_string(),
                })?;
                Command::parse_op(op, args)?
            }
        };
        Ok(Some(cmd))
    }

    /// Builds an operation command from its operand words.
    pub fn parse_op(op: BinOp, args: &[&str]) -> CalcResult<Command> {
        let (a, b) = parse_operands(op, args)?;
        Ok(Command::Op { op, a, b })
    }
}

/// Outcome of executing a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Output(String),
    Exit,
}

/// A calculator plus the command interpreter in front of it.
#[derive(Debug, Default)]
pub struct Session {
    calc: Calculator,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    /// Parses and executes one line.
    pub fn run_line(&mut self, line: &str) -> CalcResult<Option<Reply>> {
        match Command::parse(line)? {
            Some(cmd) => self.execute(cmd).map(Some),
            None => Ok(None),
        }
    }

    pub fn execute(&mut self, cmd: Command) -> CalcResult<Reply> {
        let text = match cmd {
            Command::Op { op, a, b } => {
                let result = op.eval(&mut self.calc, a, b);
                op_line(op, a, b, result)
            }
            Command::History { json: false } => {
                let mut buf = Vec::new();
                self.calc.write_history(&mut buf)?;
                String::from_utf8_lossy(&buf).trim_end().to_string()
            }
            Command::History { json: true } => serde_json::to_string(self.calc.history())?,
            Command::Last => match self.calc.last() {
                Some(value) => format_value(value),
                None => "history is empty".to_string(),
            },
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Reply::Exit),
        };
        Ok(Reply::Output(text))
    }
}
