//! `jlite` CLI: parse, check, and reformat JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Reformat to compact canonical text (stdin → stdout)
//! echo '{ "name": "Alice", "age": 30 }' | jlite format
//!
//! # File to file, pretty-printed through serde_json
//! jlite format -i data.json -o out.json --pretty
//!
//! # Validate input, with a tighter nesting limit
//! jlite check -i data.json --max-depth 16
//!
//! # Count nodes per type
//! jlite stats -i data.json
//! ```
//!
//! Set `RUST_LOG=debug` to see parser diagnostics on stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use json_lite::{Limits, Value};
use log::debug;
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "jlite", version, about = "json-lite CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse input and write it back in compact canonical form
    Format {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print through serde_json instead of the canonical form
        #[arg(long)]
        pretty: bool,
        /// Maximum nesting depth of arrays and objects
        #[arg(long, default_value_t = json_lite::limits::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
    /// Parse input and report whether it is valid
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Maximum nesting depth of arrays and objects
        #[arg(long, default_value_t = json_lite::limits::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
    /// Show node counts per type and the maximum nesting depth
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Format {
            input,
            output,
            pretty,
            max_depth,
        } => {
            let text = read_input(input.as_deref())?;
            let value = parse_input(&text, max_depth)?;
            let rendered = if pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                json_lite::serialize(&value)
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Check { input, max_depth } => {
            let text = read_input(input.as_deref())?;
            let value = parse_input(&text, max_depth)?;
            println!("ok: {}", value.type_name());
        }
        Commands::Stats { input } => {
            let text = read_input(input.as_deref())?;
            let value = parse_input(&text, json_lite::limits::DEFAULT_MAX_DEPTH)?;
            let mut stats = Stats::default();
            stats.visit(&value, 0);
            println!("objects:   {}", stats.objects);
            println!("arrays:    {}", stats.arrays);
            println!("strings:   {}", stats.strings);
            println!("ints:      {}", stats.ints);
            println!("floats:    {}", stats.floats);
            println!("bools:     {}", stats.bools);
            println!("nulls:     {}", stats.nulls);
            println!("max depth: {}", stats.max_depth);
        }
    }

    Ok(())
}

fn parse_input(text: &str, max_depth: usize) -> Result<Value> {
    debug!("parsing {} bytes, max depth {max_depth}", text.len());
    json_lite::parse_with_limits(text, Limits::with_max_depth(max_depth))
        .context("Failed to parse JSON input")
}

/// Per-type node counts for `jlite stats`.
#[derive(Default)]
struct Stats {
    objects: usize,
    arrays: usize,
    strings: usize,
    ints: usize,
    floats: usize,
    bools: usize,
    nulls: usize,
    max_depth: usize,
}

impl Stats {
    fn visit(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.nulls += 1,
            Value::Bool(_) => self.bools += 1,
            Value::Int(_) => self.ints += 1,
            Value::Float(_) => self.floats += 1,
            Value::String(_) => self.strings += 1,
            Value::Array(items) => {
                self.arrays += 1;
                self.max_depth = self.max_depth.max(depth + 1);
                for item in items {
                    self.visit(item, depth + 1);
                }
            }
            Value::Object(map) => {
                self.objects += 1;
                self.max_depth = self.max_depth.max(depth + 1);
                for item in map.values() {
                    self.visit(item, depth + 1);
                }
            }
        }
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
