use std::io::{self, Write};

use crate::ranking::DisplayEntry;

/// Plain text: a header line per group, then name, address lines and
/// link for each place, blocks separated by blank lines.
pub fn write_text<W: Write>(out: &mut W, entries: &[DisplayEntry<'_>]) -> io::Result<()> {
    for entry in entries {
        if entry.new_group {
            writeln!(out, "{}", entry.title)?;
            writeln!(out)?;
        }

        let place = entry.place;
        writeln!(out, "{}", place.name)?;
        for line in &place.address {
            writeln!(out, "{}", line)?;
        }
        writeln!(out, "{}", place.url)?;
        writeln!(out)?;
    }
    Ok(())
}
