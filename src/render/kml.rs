use std::borrow::Cow;
use std::io::{self, Write};

use crate::ranking::DisplayEntry;

const DEFAULT_DOCUMENT_NAME: &str = "Saved Places";

/// KML document with one folder per display group, in display order.
pub fn write_kml<W: Write>(
    out: &mut W,
    entries: &[DisplayEntry<'_>],
    name: Option<&str>,
) -> io::Result<()> {
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(out, r#"<kml xmlns="http://www.opengis.net/kml/2.2">"#)?;
    writeln!(out, "<Document>")?;
    writeln!(
        out,
        "  <name>{}</name>",
        escape(name.unwrap_or(DEFAULT_DOCUMENT_NAME))
    )?;

    let mut in_folder = false;
    for entry in entries {
        if entry.new_group {
            if in_folder {
                writeln!(out, "  </Folder>")?;
            }
            writeln!(out, "  <Folder>")?;
            writeln!(out, "    <name>{}</name>", escape(&entry.title))?;
            in_folder = true;
        }
        write_placemark(out, entry)?;
    }
    if in_folder {
        writeln!(out, "  </Folder>")?;
    }

    writeln!(out, "</Document>")?;
    writeln!(out, "</kml>")?;
    Ok(())
}

fn write_placemark<W: Write>(out: &mut W, entry: &DisplayEntry<'_>) -> io::Result<()> {
    let place = entry.place;
    let mut description: Vec<&str> = place.address.iter().map(String::as_str).collect();
    if !place.url.is_empty() {
        description.push(&place.url);
    }

    writeln!(out, "    <Placemark>")?;
    writeln!(out, "      <name>{}</name>", escape(&place.name))?;
    if !description.is_empty() {
        writeln!(
            out,
            "      <description>{}</description>",
            escape(&description.join("\n"))
        )?;
    }
    if let Some(ts) = place.timestamp {
        writeln!(
            out,
            "      <TimeStamp><when>{}</when></TimeStamp>",
            ts.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
        )?;
    }
    writeln!(
        out,
        "      <Point><coordinates>{},{}</coordinates></Point>",
        place.lon, place.lat
    )?;
    writeln!(out, "    </Placemark>")?;
    Ok(())
}

fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClassifiedPlace;
    use crate::ranking::group_for_display;
    use chrono::{TimeZone, Utc};

    fn place(name: &str, borough: &str, group: &str) -> ClassifiedPlace {
        ClassifiedPlace {
            name: name.to_string(),
            address: vec!["Calle X".to_string(), "CDMX".to_string()],
            url: "https://maps.google.com/?cid=1&hl=es".to_string(),
            timestamp: None,
            lon: -99.5,
            lat: 19.25,
            code: String::new(),
            rank: 1,
            group_label: group.to_string(),
            borough_label: borough.to_string(),
        }
    }

    fn render(places: &[ClassifiedPlace], name: Option<&str>) -> String {
        let entries = group_for_display(places);
        let mut out = Vec::new();
        write_kml(&mut out, &entries, name).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("Roma Norte"), "Roma Norte");
        assert_eq!(escape("A & B <c>"), "A &amp; B &lt;c&gt;");
        assert_eq!(escape(r#"Tom's "bar""#), "Tom&apos;s &quot;bar&quot;");
    }

    #[test]
    fn test_folders_follow_groups() {
        let kml = render(
            &[
                place("One", "Cuauhtémoc", "Centro"),
                place("Two", "Cuauhtémoc", "Centro"),
                place("Three", "Tlalpan", ""),
            ],
            Some("CDMX trip"),
        );

        assert!(kml.contains("  <name>CDMX trip</name>"));
        assert_eq!(kml.matches("<Folder>").count(), 2);
        assert_eq!(kml.matches("</Folder>").count(), 2);
        assert_eq!(kml.matches("<Placemark>").count(), 3);
        assert!(kml.contains("<name>Cuauhtémoc - Centro</name>"));
        assert!(kml.contains("<coordinates>-99.5,19.25</coordinates>"));
        assert!(kml.contains("cid=1&amp;hl=es"));
        assert!(kml.trim_end().ends_with("</kml>"));

        let centro = kml.find("Cuauhtémoc - Centro").unwrap();
        let tlalpan = kml.find("<name>Tlalpan</name>").unwrap();
        let three = kml.find("<name>Three</name>").unwrap();
        assert!(centro < tlalpan && tlalpan < three);
    }

    #[test]
    fn test_default_name_and_timestamp() {
        let mut stamped = place("One", "Tlalpan", "");
        stamped.timestamp = Some(Utc.with_ymd_and_hms(2019, 3, 9, 18, 19, 9).unwrap());
        let kml = render(&[stamped], None);

        assert!(kml.contains("<name>Saved Places</name>"));
        assert!(kml.contains("<when>2019-03-09T18:19:09Z</when>"));
    }

    #[test]
    fn test_empty_document() {
        let kml = render(&[], None);
        assert!(!kml.contains("<Folder>"));
        assert!(kml.contains("<Document>"));
    }
}
