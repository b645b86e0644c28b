use crate::calculator::Calculator;
use crate::error::{CalcError, CalcResult};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Built-in binary operations reachable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum BinOp {
    #[strum(to_string = "add", serialize = "+", serialize = "plus")]
    Add,
    #[strum(to_string = "sub", serialize = "-", serialize = "subtract", serialize = "minus")]
    Sub,
    #[strum(to_string = "mul", serialize = "*", serialize = "x", serialize = "multiply")]
    Mul,
    #[strum(to_string = "div", serialize = "/", serialize = "divide")]
    Div,
}

impl BinOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }

    pub fn parse(name: &str) -> CalcResult<Self> {
        BinOp::from_str(name).map_err(|_| CalcError::UnknownOp {
            name: name.to_string(),
        })
    }

    /// Runs the operation on `calc`, which records the result.
    ///
    /// `add` and `mul` go through the calculator's own methods, the rest
    /// through `Calculator::apply`.
    pub fn eval(&self, calc: &mut Calculator, a: f64, b: f64) -> f64 {
        match self {
            BinOp::Add => calc.add(a, b),
            BinOp::Mul => calc.multiply(a, b),
            BinOp::Sub => calc.apply(a, b, |a, b| a - b),
            BinOp::Div => calc.apply(a, b, |a, b| a / b),
        }
    }
}
