//! `rdjson` CLI: parse, tokenize and smoke-test JSON files from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Parse JSON from stdin and print the tree as pretty JSON
//! echo '{"a":1,"b":[true,false,null]}' | rdjson parse
//!
//! # Parse from file to file with a tighter nesting limit
//! rdjson parse -i data.json -o out.json --max-depth 32
//!
//! # Dump the token stream with row:col positions
//! rdjson tokens -i data.json
//!
//! # Smoke-test a directory of fixtures (the shell expands the globs)
//! rdjson check test/pass*.json
//! rdjson check --expect-fail test/fail*.json
//! ```

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser, Subcommand};
use rdjson_core::{ParseOptions, DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "rdjson", version, about = "Recursive-descent JSON parser CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse JSON and print the value tree as pretty JSON
    Parse {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Deepest allowed container nesting
        #[arg(
            long,
            default_value_t = DEFAULT_MAX_DEPTH,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_SUPPORTED_DEPTH as u64),
        )]
        max_depth: usize,
    },
    /// Print the token stream, one `row:col<TAB>token` per line
    Tokens {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Parse every given file and report which ones succeed
    Check {
        /// Files to parse
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Every file is expected to be rejected
        #[arg(long)]
        expect_fail: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Parse {
            input,
            output,
            max_depth,
        } => {
            let text = read_input(input.as_deref())?;
            let options = ParseOptions::default().with_max_depth(max_depth);
            let value = rdjson_core::parse_with_options(&text, &options)
                .context("Failed to parse JSON")?;
            let json = match value {
                Some(value) => serde_json::Value::from(value),
                None => {
                    eprintln!("note: input is empty");
                    serde_json::Value::Null
                }
            };
            let pretty = serde_json::to_string_pretty(&json)?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Tokens { input } => {
            let text = read_input(input.as_deref())?;
            let tokens = rdjson_core::tokenize(&text).context("Failed to tokenize JSON")?;
            for token in tokens {
                println!("{}\t{}", token.pos, token.kind);
            }
        }
        Commands::Check { files, expect_fail } => {
            let mismatches = check_files(&files, expect_fail);
            println!(
                "{} file(s) checked, {} as expected, {} unexpected",
                files.len(),
                files.len() - mismatches,
                mismatches
            );
            if mismatches > 0 {
                process::exit(1);
            }
        }
    }

    Ok(())
}

/// Parse each file and print one status line per file. Returns how many
/// files did not behave as expected.
fn check_files(files: &[PathBuf], expect_fail: bool) -> usize {
    let mut mismatches = 0;
    for path in files {
        let outcome = rdjson_core::load_from_file(path);
        info!(path = %path.display(), ok = outcome.is_ok(), "checked file");
        match (outcome, expect_fail) {
            (Ok(_), false) => println!("ok    {}", path.display()),
            (Err(e), true) => println!("ok    {} ({})", path.display(), e),
            (Ok(_), true) => {
                mismatches += 1;
                println!("FAIL  {} (parsed, expected an error)", path.display());
            }
            (Err(e), false) => {
                mismatches += 1;
                println!("FAIL  {} ({})", path.display(), e);
            }
        }
    }
    mismatches
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

/// Write `json` followed by a newline; `to_string_pretty` leaves it off.
fn write_output(path: Option<&Path>, json: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, format!("{json}\n"))
            .with_context(|| format!("Failed to write file: {}", path.display())),
        None => writeln!(io::stdout().lock(), "{json}").context("Failed to write to stdout"),
    }
}
