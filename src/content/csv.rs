//! Parser for pasted verse CSV: one header line, then
//! `reference,text,topic` rows. Verse text may itself contain commas, so
//! everything between the first and last field is rejoined.

use crate::models::{LibraryItem, Topic};

/// Parses raw CSV text into verse items. Lines with fewer than three
/// fields are discarded; quote characters are stripped from the text.
pub fn parse_verses(input: &str) -> Vec<LibraryItem> {
    input
        .lines()
        .skip(1)
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<LibraryItem> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() < 3 {
        return None;
    }

    let reference = parts[0];
    let topic = parts[parts.len() - 1];
    let text = parts[1..parts.len() - 1].join(",").replace('"', "");

    Some(LibraryItem::verse(reference, text, Topic::parse_name(topic)))
}
