// src/csv.rs
use std::io::{self, Write};

use crate::render::Card;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)?;
    Ok(())
}

/// Whole export as one string: optional header line, then one row per card.
pub fn to_export_string(
    headers: &[&str],
    cards: &[Card],
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();
    // Writing into a Vec<u8> cannot fail.
    if include_headers {
        let _ = write_row(&mut buf, headers, sep);
    }
    for card in cards {
        let _ = write_row(&mut buf, &card.to_row(), sep);
    }
    String::from_utf8(buf).unwrap_or_default()
}
