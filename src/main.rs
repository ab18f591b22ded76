//! `toml-fmt`: formats TOML files with alignment and optional indentation.
//!
//! Reads a file (or stdin), parses it, and renders the canonical form to
//! stdout — or, with `-w`, back to the source file via an atomic
//! temp-file-and-rename replace.

use anyhow::{bail, Context, Result};
use clap::Parser;
use pretty_toml::{FormatOptions, Formatter, Table, Value};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "toml-fmt",
    version,
    long_version = long_version(),
    about = "Formats TOML files with alignment and optional indentation."
)]
struct Cli {
    /// Write result back to the source file instead of stdout.
    #[arg(short, long)]
    write: bool,

    /// Indent output using two spaces.
    #[arg(short, long)]
    indent: bool,

    /// Input TOML file (optional, reads from stdin if omitted).
    filename: Option<PathBuf>,
}

/// Builds the verbose version string: crate version plus whatever build
/// metadata the release pipeline injected via environment variables.
fn long_version() -> String {
    let mut info = String::from(env!("CARGO_PKG_VERSION"));
    if let Some(commit) = option_env!("TOML_FMT_COMMIT") {
        info.push_str("\nCommit: ");
        info.push_str(commit);
    }
    if let Some(date) = option_env!("TOML_FMT_BUILD_DATE") {
        info.push_str("\nBuilt at: ");
        info.push_str(date);
    }
    info.push_str("\nOS: ");
    info.push_str(std::env::consts::OS);
    info.push_str("\nArch: ");
    info.push_str(std::env::consts::ARCH);
    info
}

/// Reads the input source selected by the arguments.
///
/// Returns the content together with a human-readable source name for error
/// messages. Requesting write-back while reading stdin is an error: there is
/// no file to write back to.
fn read_input(filename: Option<&Path>, write_back: bool) -> Result<(String, String)> {
    match filename {
        None => {
            if write_back {
                bail!("cannot use -w flag when reading from stdin");
            }
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("reading from stdin")?;
            Ok((input, "stdin".to_string()))
        }
        Some(path) => {
            let source = format!("file '{}'", path.display());
            let input = fs::read_to_string(path).with_context(|| format!("reading {source}"))?;
            Ok((input, source))
        }
    }
}

/// Writes the formatted content to stdout, or atomically back to the source
/// file: the content goes to a temporary file in the same directory, which
/// then replaces the original by rename. The temporary file is cleaned up if
/// the replace never happens.
fn write_output(write_back: bool, filename: Option<&Path>, output: &str) -> Result<()> {
    if !write_back {
        io::stdout()
            .write_all(output.as_bytes())
            .context("writing to stdout")?;
        return Ok(());
    }

    let path = filename.context("internal error: -w set but no input filename")?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temporary file in '{}'", dir.display()))?;
    temp.write_all(output.as_bytes())
        .with_context(|| format!("writing to temporary file '{}'", temp.path().display()))?;
    temp.persist(path)
        .with_context(|| format!("replacing '{}'", path.display()))?;
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let options = if cli.indent {
        FormatOptions::indented()
    } else {
        FormatOptions::new()
    };

    let (input, source) = read_input(cli.filename.as_deref(), cli.write)?;

    let parsed: toml::Table =
        toml::from_str(&input).with_context(|| format!("parsing TOML from {source}"))?;
    let document: Table = parsed
        .into_iter()
        .map(|(key, value)| (key, Value::from(value)))
        .collect();

    let mut formatter = Formatter::new(&options);
    formatter
        .format_document(&document)
        .context("formatting TOML data")?;

    write_output(cli.write, cli.filename.as_deref(), &formatter.into_inner())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
