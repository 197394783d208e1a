//! Output of the grouped display order.

mod kml;
mod text;

use std::io::{self, Write};

use clap::ValueEnum;

use crate::ranking::DisplayEntry;

pub use kml::write_kml;
pub use text::write_text;

/// Output format for the ordered places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Plain text, one block per place under group headers
    #[default]
    Text,
    /// KML document with one folder per group
    Kml,
}

/// Render entries in the chosen format. `name` is only used by KML.
pub fn render<W: Write>(
    out: &mut W,
    format: Format,
    entries: &[DisplayEntry<'_>],
    name: Option<&str>,
) -> io::Result<()> {
    match format {
        Format::Text => write_text(out, entries),
        Format::Kml => write_kml(out, entries, name),
    }
}
