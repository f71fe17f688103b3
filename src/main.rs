use std::{fs, process::ExitCode};

use clap::Parser;
use log::{LevelFilter, info, warn};
use rustyline::{DefaultEditor, error::ReadlineError};
use simple_logger::SimpleLogger;
use spi::{Session, interpreter::lexer::tokenize};

/// Typing this line on its own ends the session.
const EXIT_COMMAND: &str = "exit";

/// spi evaluates integer arithmetic and Pascal-style `BEGIN ... END.`
/// assignment programs, one line at a time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells spi to treat `contents` as a file and evaluate each of its lines.
    #[arg(short, long)]
    file: bool,

    /// Prints every variable and its value when the session ends.
    #[arg(short, long)]
    dump_scope: bool,

    /// Prints the token stream of each line instead of evaluating it.
    #[arg(short, long)]
    tokens: bool,

    /// Prompt shown before each interactive line.
    #[arg(long, env = "SPI_PROMPT", default_value = "spi> ")]
    prompt: String,

    /// Maximum level of log messages written to stderr.
    #[arg(long, env = "SPI_LOG", default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    /// A line to evaluate, or a path with `--file`. Starts an interactive
    /// session when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = SimpleLogger::new().with_level(args.log_level).init() {
        eprintln!("Failed to initialise logging: {e}");
    }

    let mut session = Session::new();

    let succeeded = match &args.contents {
        Some(path) if args.file => {
            let Ok(script) = fs::read_to_string(path) else {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            };
            run_script(&mut session, &script, &args)
        },
        Some(line) => handle_line(&mut session, line, &args),
        None => match run_repl(&mut session, &args) {
            Ok(()) => true,
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                false
            },
        },
    };

    if args.dump_scope {
        for (name, value) in session.inspect_scope() {
            println!("{name} = {value}");
        }
    }

    info!("session finished");
    if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Reads lines interactively until `exit`, end of input or an interrupt.
///
/// A failing line is reported and the session carries on.
fn run_repl(session: &mut Session, args: &Args) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline(&args.prompt) {
            Ok(line) => {
                if line == EXIT_COMMAND {
                    break;
                }
                if line.trim().is_empty() {
                    continue;
                }
                editor.add_history_entry(line.as_str())?;
                handle_line(session, &line, args);
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// Evaluates every non-blank line of `script`, stopping at `exit`.
///
/// Returns whether every line succeeded.
fn run_script(session: &mut Session, script: &str, args: &Args) -> bool {
    let mut succeeded = true;
    for line in script.lines() {
        if line == EXIT_COMMAND {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        succeeded &= handle_line(session, line, args);
    }
    succeeded
}

/// Evaluates or tokenizes one line and prints the outcome.
fn handle_line(session: &mut Session, line: &str, args: &Args) -> bool {
    if args.tokens {
        return match tokenize(line, session.reserved_words()) {
            Ok(tokens) => {
                for token in tokens {
                    println!("{token}");
                }
                true
            },
            Err(e) => {
                eprintln!("{e}");
                false
            },
        };
    }

    match session.evaluate_line(line) {
        Ok(Some(value)) => {
            println!("{value}");
            true
        },
        Ok(None) => true,
        Err(e) => {
            warn!("rejected line {line:?}");
            eprintln!("{e}");
            false
        },
    }
}
