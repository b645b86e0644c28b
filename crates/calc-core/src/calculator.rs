//! The calculator and its result history.
//!
//! Every operation returns its result and appends it to the history, so the
//! history always holds one entry per call, in call order.

use log::debug;
use serde::Serialize;
use std::io::{self, Write};

/// Header line printed before the history listing.
pub const HISTORY_HEADER: &str = "Calculation history:";

/// Significant digits used when printing values.
pub const PRECISION: usize = 6;

/// Formats a value the way C's `%g` does with six significant digits:
/// fixed notation for exponents in `-4..6`, scientific otherwise, trailing
/// zeros dropped.
///
/// ```rust
/// use calc_core::calculator::format_value;
///
/// assert_eq!(format_value(0.1 + 0.2), "0.3");
/// assert_eq!(format_value(1e20), "1e+20");
/// assert_eq!(format_value(28.0), "28");
/// ```
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }
    if value == 0.0 {
        return String::from(if value.is_sign_negative() { "-0" } else { "0" });
    }

    // exponent after rounding to PRECISION digits
    let sci = format!("{:.*e}", PRECISION - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= PRECISION as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exp.unsigned_abs()
        )
    } else {
        let decimals = (PRECISION as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

/// A calculator that records every result it produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Calculator {
    history: Vec<f64>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `a + b` and records it.
    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        self.record(a + b)
    }

    /// Returns `a * b` and records it.
    pub fn multiply(&mut self, a: f64, b: f64) -> f64 {
        self.record(a * b)
    }

    /// Applies a caller supplied binary operation and records its result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calc_core::Calculator;
    ///
    /// let mut calc = Calculator::new();
    /// let diff = calc.apply(10.0, 4.0, |a, b| a - b);
    /// assert_eq!(diff, 6.0);
    /// assert_eq!(calc.history(), &[6.0]);
    /// ```
    pub fn apply<F>(&mut self, a: f64, b: f64, operation: F) -> f64
    where
        F: FnOnce(f64, f64) -> f64,
    {
        self.record(operation(a, b))
    }

    fn record(&mut self, result: f64) -> f64 {
        debug!("history[{}] = {}", self.history.len(), result);
        self.history.push(result);
        result
    }

    pub fn history(&self) -> &[f64] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Most recent result, if any.
    pub fn last(&self) -> Option<f64> {
        self.history.last().copied()
    }

    /// Writes the header followed by one `  [i] value` line per entry.
    pub fn write_history<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", HISTORY_HEADER)?;
        for (i, value) in self.history.iter().enumerate() {
            writeln!(out, "  [{}] {}", i, format_value(*value))?;
        }
        Ok(())
    }

    /// Prints the history listing to stdout.
    pub fn print_history(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_history(&mut lock)?;
        lock.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(calc: &Calculator) -> String {
        let mut buf = Vec::new();
        calc.write_history(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_add() {
        let mut calc = Calculator::new();
        assert_eq!(calc.add(5.0, 3.0), 8.0);
        assert_eq!(calc.add(-1.5, 0.25), -1.25);
        assert_eq!(calc.history(), &[8.0, -1.25]);
    }

    #[test]
    fn test_multiply() {
        let mut calc = Calculator::new();
        assert_eq!(calc.multiply(4.0, 7.0), 28.0);
        assert_eq!(calc.len(), 1);
        assert_eq!(calc.last(), Some(28.0));
    }

    #[test]
    fn test_apply_closure_and_fn() {
        fn max(a: f64, b: f64) -> f64 {
            a.max(b)
        }

        let mut calc = Calculator::new();
        assert_eq!(calc.apply(10.0, 4.0, |a, b| a - b), 6.0);
        assert_eq!(calc.apply(2.0, 9.0, max), 9.0);

        let offset = 100.0;
        assert_eq!(calc.apply(1.0, 2.0, move |a, b| a + b + offset), 103.0);
        assert_eq!(calc.history(), &[6.0, 9.0, 103.0]);
    }

    #[test]
    fn test_history_keeps_call_order() {
        let mut calc = Calculator::new();
        calc.multiply(3.0, 3.0);
        calc.add(1.0, 0.0);
        calc.add(2.0, 2.0);
        // not sorted
        assert_eq!(calc.history(), &[9.0, 1.0, 4.0]);
    }

    #[test]
    fn test_overflow_is_not_an_error() {
        let mut calc = Calculator::new();
        let inf = calc.multiply(f64::MAX, 2.0);
        assert!(inf.is_infinite());
        let nan = calc.add(f64::INFINITY, f64::NEG_INFINITY);
        assert!(nan.is_nan());
        assert_eq!(calc.len(), 2);
        assert_eq!(listing(&calc), "Calculation history:\n  [0] inf\n  [1] nan\n");
    }

    #[test]
    fn test_serialize() {
        let mut calc = Calculator::new();
        calc.add(5.0, 3.0);
        calc.apply(1.0, 2.0, f64::min);
        let json = serde_json::to_string(&calc).unwrap();
        assert_eq!(json, r#"{"history":[8.0,1.0]}"#);
    }

    #[test]
    fn test_empty_listing() {
        let calc = Calculator::new();
        assert!(calc.is_empty());
        assert_eq!(calc.last(), None);
        assert_eq!(listing(&calc), "Calculation history:\n");
    }

    #[test]
    fn test_print_history_to_stdout() {
        let mut calc = Calculator::new();
        calc.add(1.0, 1.0);
        assert!(calc.print_history().is_ok());
        assert_eq!(calc.len(), 1);
    }

    #[test]
    fn test_listing_format() {
        let mut calc = Calculator::new();
        calc.add(0.1, 0.2);
        calc.multiply(2.5, 2.0);
        assert_eq!(
            listing(&calc),
            "Calculation history:\n  [0] 0.3\n  [1] 5\n"
        );
    }

    #[test]
    fn test_listing_large_and_small() {
        let mut calc = Calculator::new();
        calc.multiply(1e10, 1e10);
        calc.apply(1.0, 3.0, |a, b| a / b);
        calc.multiply(123456.0, 10.0);
        calc.multiply(0.00001, 1.0);
        calc.add(-1.25, 0.0);
        assert_eq!(
            listing(&calc),
            "Calculation history:\n  [0] 1e+20\n  [1] 0.333333\n  [2] 1.23456e+06\n  [3] 1e-05\n  [4] -1.25\n"
        );
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(8.0), "8");
        assert_eq!(format_value(0.1 + 0.2), "0.3");
        assert_eq!(format_value(1e20), "1e+20");
        assert_eq!(format_value(f64::NAN), "nan");
        assert_eq!(format_value(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-0.0), "-0");
        assert_eq!(format_value(0.0001), "0.0001");
        assert_eq!(format_value(123456.0), "123456");
        assert_eq!(format_value(999999.5), "1e+06");
        assert_eq!(format_value(2.5e-300), "2.5e-300");
        assert_eq!(format_value(-3.14159265), "-3.14159");
    }
}
