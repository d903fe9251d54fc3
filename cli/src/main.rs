mod formatter;
mod repl;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use formatter::Formatter;
use merchant::Engine;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "merchant")]
#[command(about = "A merchant's guide to the galaxy.")]
#[command(
    long_about = "Learns what alien words mean in Roman numerals and what metals sell for, then answers questions about both.\nFeed it a file of facts and questions, or talk to it interactively."
)]
#[command(version)]
struct Cli {
    /// Log engine decisions to stderr (same as RUST_LOG=merchant=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer every line of a file (or stdin) and print the answers
    ///
    /// Each line is either a fact ("glob is I", "glob glob Silver is 34 Credits")
    /// or a question ("how much is glob glob ?", "how many Credits is glob Silver ?").
    /// Facts print nothing; blank lines are skipped.
    Run {
        /// Input file, one statement per line. Reads stdin when omitted.
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
        /// Print the learned facts after the last answer
        #[arg(short = 'f', long)]
        facts: bool,
        /// Print the learned facts as JSON (implies --facts)
        #[arg(long)]
        json: bool,
    },
    /// Start an interactive session
    ///
    /// Type facts and questions one per line. `:facts` shows what has been
    /// learned so far, `:quit` (or end of input) leaves.
    Repl,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Run { file, facts, json } => {
            run_command(file.as_deref(), *facts || *json, *json)
        }
        Commands::Repl => repl_command(),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("merchant=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("merchant=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_command(file: Option<&Path>, show_facts: bool, json: bool) -> Result<()> {
    let reader: Box<dyn BufRead> = match file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut engine = Engine::new();
    let answered = answer_lines(&mut engine, reader, &mut io::stdout().lock())?;
    info!(lines = answered, "finished input");

    if show_facts {
        let formatter = Formatter::default();
        print!("{}", formatter.format_facts(&engine.facts(), json)?);
    }

    Ok(())
}

/// Submit every non-blank line, writing non-empty answers to `out`.
///
/// Stops at the first line the engine cannot answer.
fn answer_lines(engine: &mut Engine, reader: impl BufRead, out: &mut impl Write) -> Result<usize> {
    let mut answered = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let answer = engine
            .submit(&line)
            .with_context(|| format!("line {}: {}", index + 1, line))?;
        if !answer.is_empty() {
            writeln!(out, "{}", answer)?;
        }
        answered += 1;
    }
    Ok(answered)
}

fn repl_command() -> Result<()> {
    let mut engine = Engine::new();
    repl::run_repl(&mut engine)
}
