use crate::models::CardRecord;

/// Formats one record as a Moxfield import line: `<quantity> <name>\n`.
///
/// The name is written as-is, no quoting even when it contains commas.
pub fn format_deck_line(card: &CardRecord) -> String {
    format!("{card}\n")
}

/// Formats all records in input order. No header, no trailing metadata.
pub fn format_deck_list(cards: &[CardRecord]) -> String {
    let mut output = String::new();
    for card in cards {
        output.push_str(&format_deck_line(card));
    }
    output
}

#[cfg(test)]
#[path = "formatters_tests.rs"]
mod tests;
