use std::{
    fs::read_to_string,
    io::{self, BufRead},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser as ClapParser;
use frontend::{errors::errors::Error, format_error, parse, tokenize};

/// Lexes and parses source files, printing the syntax tree of each.
///
/// With no files, every line read from stdin is processed as its own input.
#[derive(ClapParser, Debug)]
#[command(name = "frontend", version, long_about = None)]
struct Cli {
    /// Source files to process
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Print the token stream instead of the syntax tree
    #[arg(long)]
    tokens: bool,

    /// Indent the bracketed syntax tree
    #[arg(long)]
    pretty: bool,
}

/// Installs the global subscriber. Diagnostics go to stderr, filtered by
/// `RUST_LOG` (default `warn`).
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let mut failed = false;

    if cli.files.is_empty() {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => failed |= !run_source(&cli, "<stdin>", &line),
                Err(error) => {
                    eprintln!("Failed to read stdin: {}", error);
                    return ExitCode::FAILURE;
                }
            }
        }
    } else {
        for path in &cli.files {
            let file_name = path.to_string_lossy();
            match read_to_string(path) {
                Ok(source) => failed |= !run_source(&cli, &file_name, &source),
                Err(error) => {
                    eprintln!("Failed to read {}: {}", file_name, error);
                    failed = true;
                }
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Processes one input, printing its tokens or statements. Returns whether it
/// lexed and parsed cleanly.
fn run_source(cli: &Cli, file_name: &str, source: &str) -> bool {
    match process(cli, file_name, source) {
        Ok(output) => {
            for line in output {
                println!("{}", line);
            }
            true
        }
        Err(error) => {
            print!("{}", format_error(&error, source));
            false
        }
    }
}

fn process(cli: &Cli, file_name: &str, source: &str) -> Result<Vec<String>, Error> {
    let tokens = tokenize(source, file_name)?;

    if cli.tokens {
        return Ok(tokens.iter().map(|token| token.debug()).collect());
    }

    let statements = parse(&tokens)?;

    Ok(statements
        .iter()
        .map(|stmt| {
            if cli.pretty {
                pretty_print(&stmt.to_string())
            } else {
                stmt.to_string()
            }
        })
        .collect())
}

/// Breaks the bracketed rendering (`If[a, Block[...], Empty[]]`) over
/// indented lines.
fn pretty_print(string: &str) -> String {
    let mut result = String::new();
    let mut indent: usize = 0;
    let mut ignore_next_space = false;

    for c in string.chars() {
        match c {
            '[' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
            }
            ']' => {
                indent = indent.saturating_sub(1);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                result.push(c);
            }
            ',' => {
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            ' ' if ignore_next_space => {
                ignore_next_space = false;
            }
            _ => result.push(c),
        }
    }

    result
}
