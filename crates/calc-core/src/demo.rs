use crate::calculator::{format_value, Calculator};
use std::io::{self, Write};

/// Runs the sample session: two built-in operations, one caller supplied
/// subtraction, then the history listing.
pub fn run<W: Write>(out: &mut W) -> io::Result<Calculator> {
    let mut calc = Calculator::new();

    writeln!(out, "5 + 3 = {}", format_value(calc.add(5.0, 3.0)))?;
    writeln!(out, "4 * 7 = {}", format_value(calc.multiply(4.0, 7.0)))?;

    let subtract = |a: f64, b: f64| a - b;
    writeln!(
        out,
        "10 - 4 = {}",
        format_value(calc.apply(10.0, 4.0, subtract))
    )?;

    calc.write_history(out)?;
    Ok(calc)
}
