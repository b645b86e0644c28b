use crate::demo;
use pretty_assertions::assert_eq;

#[test]
fn test_demo_output() {
    let mut out = Vec::new();
    let calc = demo::run(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let expected = "\
5 + 3 = 8
4 * 7 = 28
10 - 4 = 6
Calculation history:
  [0] 8
  [1] 28
  [2] 6
";
    assert_eq!(text, expected);
    assert_eq!(calc.history(), &[8.0, 28.0, 6.0]);
}

#[test]
fn test_demo_history_lines_only() {
    let mut out = Vec::new();
    demo::run(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let entries: Vec<&str> = text
        .lines()
        .skip_while(|l| *l != "Calculation history:")
        .skip(1)
        .map(str::trim)
        .collect();
    assert_eq!(entries, vec!["[0] 8", "[1] 28", "[2] 6"]);
}
