use crate::command::{Reply, Session};
use crate::config::ReplConfig;
use crate::error::CalcResult;
use log::info;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};

#[derive(Debug, PartialEq)]
enum CmdResult {
    Exit,
    Continue,
}

/// Runs one line, writing replies to `out` and diagnostics to `err`.
/// Command errors never stop the loop.
fn try_command<O: Write, E: Write>(
    line: &str,
    session: &mut Session,
    out: &mut O,
    err: &mut E,
) -> io::Result<CmdResult> {
    match session.run_line(line) {
        Ok(Some(Reply::Output(text))) => {
            writeln!(out, "{}", text)?;
            Ok(CmdResult::Continue)
        }
        Ok(Some(Reply::Exit)) => Ok(CmdResult::Exit),
        Ok(None) => Ok(CmdResult::Continue),
        Err(error) => {
            writeln!(err, "{:?}", miette::Report::new(error))?;
            Ok(CmdResult::Continue)
        }
    }
}

/// Reads commands until `quit`, Ctrl-C or Ctrl-D. Returns the session so
/// callers can inspect what was computed.
pub fn main_loop(config: &ReplConfig) -> CalcResult<Session> {
    let mut rl = DefaultEditor::new()?;
    let mut session = Session::new();
    if config.banner {
        println!("calc: type `help` for commands, `quit` to leave");
    }
    loop {
        let readline = rl.readline(&config.prompt);
        match readline {
            Ok(line) => {
                if !line.trim().is_empty() {
                    rl.add_history_entry(line.as_str())?;
                }
                let result = try_command(
                    &line,
                    &mut session,
                    &mut io::stdout().lock(),
                    &mut io::stderr().lock(),
                )?;
                match result {
                    CmdResult::Exit => break,
                    CmdResult::Continue => continue,
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    info!(
        "repl finished with {} result(s)",
        session.calculator().len()
    );
    Ok(session)
}
