use crate::formatter::Formatter;
use anyhow::{Context, Result};
use merchant::Engine;
use std::io::{self, BufRead, IsTerminal, Write};

const FACTS_COMMAND: &str = ":facts";
const QUIT_COMMAND: &str = ":quit";

pub fn run_repl(engine: &mut Engine) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let formatter = Formatter::default();
    let mut out = io::stdout().lock();

    if interactive {
        writeln!(
            out,
            "Galactic merchant {}. Type {} to leave.",
            env!("CARGO_PKG_VERSION"),
            QUIT_COMMAND
        )?;
    }

    let mut line = String::new();
    loop {
        if interactive {
            write!(out, "> ")?;
            out.flush()?;
        }

        line.clear();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            break;
        }

        let input = line.trim_end_matches(['\r', '\n']);
        match input.trim() {
            "" => continue,
            QUIT_COMMAND => break,
            FACTS_COMMAND => {
                write!(out, "{}", formatter.format_facts(&engine.facts(), false)?)?;
                continue;
            }
            _ => {}
        }

        // A line the engine rejects changes nothing, so the session goes on.
        match engine.submit(input) {
            Ok(answer) if answer.is_empty() => {}
            Ok(answer) => writeln!(out, "{}", answer)?,
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(())
}
