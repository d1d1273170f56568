use std::fmt::Display;
use std::io::{self, Write};

use colored::Colorize;

/// Writes each item on its own line, the output format of the `rsampling`
/// binary.
pub fn write_plain<W: Write, T: Display>(w: &mut W, items: &[T]) -> io::Result<()> {
    for item in items {
        writeln!(w, "{}", item)?;
    }
    Ok(())
}

/// Writes one row per buffer slot with its index, marking the slot most
/// recently written.
///
/// The marked row is additionally rendered bold green; colors honor the
/// `colored` crate's global override, so piped output degrades to plain
/// text with only the `*` marker.
pub fn write_annotated<W: Write, T: Display>(
    w: &mut W,
    items: &[T],
    last_written: Option<usize>,
) -> io::Result<()> {
    for (index, item) in items.iter().enumerate() {
        let row = format!("{:>4}  {}", index, item);
        if last_written == Some(index) {
            writeln!(w, "* {}", row.green().bold())?;
        } else {
            writeln!(w, "  {}", row)?;
        }
    }
    Ok(())
}
