//! Daily snapshot rendering.

use std::io::{self, Write};

use serde::Serialize;

use gilded_rose_inventory::Item;

use crate::config::OutputFormat;

/// The inventory as it stood at the start of `day`.
#[derive(Debug, Serialize)]
pub struct DaySnapshot<'a> {
    pub day: u32,
    pub items: &'a [Item],
}

pub fn write_snapshot<W: Write>(
    out: &mut W,
    format: OutputFormat,
    snapshot: &DaySnapshot<'_>,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, snapshot),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, snapshot)?;
            writeln!(out)
        }
    }
}

fn write_text<W: Write>(out: &mut W, snapshot: &DaySnapshot<'_>) -> io::Result<()> {
    writeln!(out, "-------- day {} --------", snapshot.day)?;
    writeln!(out, "name, sellIn, quality")?;
    for item in snapshot.items {
        writeln!(out, "{item}")?;
    }
    writeln!(out)
}
