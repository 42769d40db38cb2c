//! Resolve object paths against a JSON document
//!
//! Usage:
//!   objectpath --input person.json Address.City 'phoneNumbers[0].number'
//!   cat person.json | objectpath --or-null name nickname

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use objectpath::{get_value_or_null, PathResolver, ResolveOptions};
use serde_json::Value as JsonValue;

mod logging;

#[derive(Parser, Debug)]
#[clap(name = "objectpath")]
#[clap(about = "Resolve dotted/bracketed paths against a JSON document")]
struct Args {
    /// Paths to resolve, e.g. `address.city` or `phoneNumbers[1].number`
    #[clap(required = true)]
    paths: Vec<String>,

    /// JSON file to read (defaults to stdin)
    #[clap(short, long)]
    input: Option<PathBuf>,

    /// Match keys exactly instead of ignoring case
    #[clap(long)]
    case_sensitive: bool,

    /// Print `null` for paths that fail to resolve instead of exiting with an error
    #[clap(long)]
    or_null: bool,

    /// Print each result on a single line
    #[clap(long)]
    compact: bool,

    /// Increase log verbosity (-v, -vv)
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let document = read_document(args.input.as_ref())?;
    tracing::debug!(paths = args.paths.len(), "document loaded");

    let resolver = PathResolver::default().with_options(ResolveOptions {
        ignore_case: !args.case_sensitive,
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for path in &args.paths {
        let rendered = resolve(&resolver, &document, path, args.or_null)?;
        let line = if args.compact {
            serde_json::to_string(&rendered)?
        } else {
            serde_json::to_string_pretty(&rendered)?
        };
        writeln!(out, "{}", line)?;
    }

    Ok(())
}

fn read_document(input: Option<&PathBuf>) -> Result<JsonValue> {
    match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to parse JSON from {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            serde_json::from_str(&buffer).context("Failed to parse JSON from stdin")
        }
    }
}

/// Resolve one path and render the result as JSON.
fn resolve(
    resolver: &PathResolver,
    document: &JsonValue,
    path: &str,
    or_null: bool,
) -> Result<JsonValue> {
    let ignore_case = resolver.options().ignore_case;
    if or_null {
        return Ok(get_value_or_null(document, path, ignore_case).to_json());
    }
    let value = resolver
        .resolve(document, path)
        .with_context(|| format!("Failed to resolve `{}`", path))?;
    Ok(value.to_json())
}
