//! Moxfield Export - MTG scanner CSV to deck list converter
//!
//! Reads the CSV inventory produced by a card scanner (Dragon Shield style
//! export) and writes a plain-text deck list in Moxfield's import format,
//! one `<quantity> <name>` line per card.

pub mod error;
pub mod export;
pub mod formatters;
pub mod io;
pub mod models;

pub use error::{ExportError, Result};
pub use export::{convert, write_deck_list};
pub use formatters::{format_deck_line, format_deck_list};
pub use io::{detect_delimiter, parse_inventory, read_inventory, InventoryColumns};
pub use models::{CardRecord, NAME_COLUMN, QUANTITY_COLUMN};
