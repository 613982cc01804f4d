use std::fmt;

/// Header of the column holding the card count
pub const QUANTITY_COLUMN: &str = "Quantity";

/// Header of the column holding the card name
pub const NAME_COLUMN: &str = "Name";

/// One inventory line: how many copies of which card.
///
/// The quantity stays textual since it is only ever copied into the output.
/// A record never carries an empty quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRecord {
    quantity: String,
    name: String,
}

impl CardRecord {
    /// Builds a record, returning `None` for the export's trailer row
    /// (empty quantity).
    pub fn new(quantity: impl Into<String>, name: impl Into<String>) -> Option<Self> {
        let quantity = quantity.into();
        if quantity.is_empty() {
            return None;
        }
        Some(Self {
            quantity,
            name: name.into(),
        })
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for CardRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_quantity_is_rejected() {
        assert_eq!(CardRecord::new("", "Lightning Bolt"), None);
        assert_eq!(CardRecord::new("", ""), None);
    }

    #[test]
    fn test_quantity_is_kept_verbatim() {
        let card = CardRecord::new(" 2", "Lightning Bolt").unwrap();
        assert_eq!(card.quantity(), " 2");
        assert_eq!(card.name(), "Lightning Bolt");
    }

    #[test]
    fn test_display() {
        let card = CardRecord::new("3", "Jötun Grunt").unwrap();
        assert_eq!(card.to_string(), "3 Jötun Grunt");
    }
}
