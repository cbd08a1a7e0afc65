//! Rendering of the ranked contributors.
//!
//! - `tabular`: fixed-width columns for terminals
//! - `csv`: header plus one record per contributor
//! - `json`: pretty-printed array of `{name, lines, commits, files}`
//! - `json-lines`: one compact object per line

use clap::ValueEnum;
use std::io::Write;

use crate::error::{FameError, Result};
use crate::models::RankedEntry;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Tabular,
    Csv,
    Json,
    JsonLines,
}

const HEADER: [&str; 4] = ["Name", "Lines", "Commits", "Files"];

pub fn render<W: Write>(entries: &[RankedEntry], format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Tabular => render_tabular(entries, out),
        OutputFormat::Csv => render_csv(entries, out),
        OutputFormat::Json => render_json(entries, out),
        OutputFormat::JsonLines => render_json_lines(entries, out),
    }
    .and_then(|_| out.flush().map_err(write_error))
}

fn write_error(err: std::io::Error) -> FameError {
    FameError::Serialization(format!("write failed: {}", err))
}

fn render_tabular<W: Write>(entries: &[RankedEntry], out: &mut W) -> Result<()> {
    writeln!(out, "{:<23}{:<5} {:<8}{}", HEADER[0], HEADER[1], HEADER[2], HEADER[3])
        .map_err(write_error)?;
    for e in entries {
        writeln!(out, "{:<23}{:<5} {:<8}{}", e.name, e.lines, e.commits, e.files)
            .map_err(write_error)?;
    }
    Ok(())
}

/// Quote a field containing a comma, quote or line break; double inner quotes.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn render_csv<W: Write>(entries: &[RankedEntry], out: &mut W) -> Result<()> {
    writeln!(out, "{}", HEADER.join(",")).map_err(write_error)?;
    for e in entries {
        writeln!(
            out,
            "{},{},{},{}",
            escape_field(&e.name),
            e.lines,
            e.commits,
            e.files
        )
        .map_err(write_error)?;
    }
    Ok(())
}

fn render_json<W: Write>(entries: &[RankedEntry], out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, entries)?;
    writeln!(out).map_err(write_error)
}

fn render_json_lines<W: Write>(entries: &[RankedEntry], out: &mut W) -> Result<()> {
    for e in entries {
        serde_json::to_writer(&mut *out, e)?;
        writeln!(out).map_err(write_error)?;
    }
    Ok(())
}
