//! Command-line tools built on `ass-tag-parser`.
//!
//! The binary is a thin layer over [`run`]; keeping the logic here lets it
//! be driven with any reader and writer.

pub mod args;
pub mod fonts;

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
};

use anyhow::{Context, Result};
use ass_tag_parser::{compose, parse, to_plaintext};
use log::{debug, info, warn};

pub use args::{Args, Command, Input};
use fonts::{FontCollector, FontFace};

/// Run a command against its configured input, writing to stdout
///
/// # Errors
///
/// Fails if the input cannot be read, a line does not parse (except for
/// `normalize`, which passes such lines through), or output cannot be
/// written.
pub fn run(args: &Args) -> Result<()> {
    let input = &args.command.input().file;
    let reader: Box<dyn BufRead> = match input {
        Some(path) => {
            info!("Reading {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => {
            info!("Reading stdin");
            Box::new(io::stdin().lock())
        }
    };

    let stdout = io::stdout();
    let mut writer = io::BufWriter::new(stdout.lock());
    run_with(&args.command, reader, &mut writer)?;
    writer.flush().context("failed to flush output")
}

/// Run `command` over every line of `reader`
///
/// # Errors
///
/// See [`run`].
pub fn run_with<R: BufRead, W: Write>(command: &Command, reader: R, writer: &mut W) -> Result<()> {
    let mut collector = match command {
        Command::Fonts {
            font, bold, italic, ..
        } => Some(FontCollector::new(FontFace::new(font.as_str(), *bold, *italic))),
        _ => None,
    };

    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.with_context(|| format!("failed to read line {number}"))?;
        debug!("line {number}: {line}");

        match command {
            Command::Parse { json, .. } => {
                let items = parse(&line).with_context(|| format!("line {number}"))?;
                if *json {
                    serde_json::to_writer(&mut *writer, &items)?;
                    writeln!(writer)?;
                } else {
                    writeln!(writer, "{items:?}")?;
                }
            }
            Command::Normalize { .. } => match parse(&line) {
                Ok(items) => writeln!(writer, "{}", compose(&items))?,
                Err(error) => {
                    warn!("line {number}: {error}; left unchanged");
                    writeln!(writer, "{line}")?;
                }
            },
            Command::Plain { .. } => {
                let text = to_plaintext(&line).with_context(|| format!("line {number}"))?;
                writeln!(writer, "{text}")?;
            }
            Command::Fonts { .. } => {
                let items = parse(&line).with_context(|| format!("line {number}"))?;
                if let Some(collector) = collector.as_mut() {
                    collector.add_line(&items);
                }
            }
        }
    }

    if let Some(collector) = collector {
        info!("Collected {} font faces", collector.faces().len());
        serde_json::to_writer_pretty(&mut *writer, collector.faces())?;
        writeln!(writer)?;
    }
    Ok(())
}
