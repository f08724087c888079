//! Loading items from `^`-delimited text.
//!
//! The first line is a header. Every following record has exactly three
//! fields: `description^cost^value`. A record with a different field count
//! aborts the load; a record that is not UTF-8, whose numbers do not parse,
//! or whose item fails validation, is skipped. Blank lines are ignored.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ByteRecord, ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use crate::error::{KnapForgeError, Result};
use crate::item::{Item, ItemSequence};

/// Field delimiter of the item database.
pub const FIELD_DELIMITER: u8 = b'^';

/// Number of fields per record.
pub const FIELD_COUNT: usize = 3;

/// A producer of item sequences.
///
/// Optimizers never load data themselves; callers obtain a sequence from a
/// source and pass it in.
pub trait ItemSource {
    /// Produces the items of this source.
    fn load(&self) -> Result<ItemSequence>;
}

impl ItemSource for ItemSequence {
    fn load(&self) -> Result<ItemSequence> {
        Ok(self.clone())
    }
}

/// Item source backed by a delimited file on disk.
#[derive(Debug, Clone)]
pub struct DelimitedItemSource {
    path: PathBuf,
}

impl DelimitedItemSource {
    /// Creates a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ItemSource for DelimitedItemSource {
    fn load(&self) -> Result<ItemSequence> {
        load_items(&self.path)
    }
}

/// Loads all valid items from the delimited file at `path`.
pub fn load_items(path: impl AsRef<Path>) -> Result<ItemSequence> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let items = parse_items(file)?;
    debug!(
        event = "load_end",
        path = %path.display(),
        item_count = items.len()
    );
    Ok(items)
}

/// Parses items from any reader producing delimited text.
///
/// # Example
///
/// ```
/// use knapforge_core::parse_items;
///
/// let data = "description^cost^value\nhelmet^10^60\nbroken^abc^1\nshield^20^100\n";
/// let items = parse_items(data.as_bytes()).unwrap();
///
/// assert_eq!(items.len(), 2);
/// assert_eq!(items[1].description(), "shield");
/// ```
pub fn parse_items<R: Read>(reader: R) -> Result<ItemSequence> {
    let mut reader = ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut items = ItemSequence::new();
    let mut record = ByteRecord::new();
    while reader.read_byte_record(&mut record)? {
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() != FIELD_COUNT {
            return Err(KnapForgeError::FieldCount {
                line,
                expected: FIELD_COUNT,
                found: record.len(),
            });
        }

        match decode_record(&record).and_then(|record| parse_record(&record)) {
            Ok(item) => items.push(item),
            Err(err) => warn!(event = "record_skipped", line, reason = %err),
        }
    }
    Ok(items)
}

fn decode_record(record: &ByteRecord) -> Result<StringRecord> {
    StringRecord::from_byte_record(record.clone())
        .map_err(|err| KnapForgeError::InvalidItem(format!("record is not UTF-8: {}", err)))
}

fn parse_record(record: &StringRecord) -> Result<Item> {
    let description = &record[0];
    let cost = parse_number(&record[1], "cost")?;
    let value = parse_number(&record[2], "value")?;
    Item::try_new(description, cost, value)
}

fn parse_number(field: &str, name: &str) -> Result<f64> {
    field.trim().parse::<f64>().map_err(|_| {
        KnapForgeError::InvalidItem(format!("{} '{}' is not a number", name, field))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "description^cost_gold^defense_points\n";

    #[test]
    fn test_header_is_skipped() {
        let items = parse_items(HEADER.as_bytes()).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_parses_records_in_order() {
        let data = format!("{HEADER}cap^2.5^7\nboots^3^0\n");
        let items = parse_items(data.as_bytes()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].description(), "cap");
        assert_eq!(items[0].cost(), 2.5);
        assert_eq!(items[0].value(), 7.0);
        assert_eq!(items[1].value(), 0.0);
    }

    #[test]
    fn test_wrong_field_count_fails_with_line() {
        let data = format!("{HEADER}cap^2.5^7\nbad^1\n");
        match parse_items(data.as_bytes()) {
            Err(KnapForgeError::FieldCount {
                line,
                expected,
                found,
            }) => {
                assert_eq!(line, 3);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected field count error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_records_are_skipped() {
        let data = format!("{HEADER}^1^1\nfree^0^5\nneg^1^-2\nnan^x^2\nok^4^8\n");
        let items = parse_items(data.as_bytes()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description(), "ok");
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let data = format!("{HEADER}cap^2.5^7\n\nboots^3^1\n\n");
        let items = parse_items(data.as_bytes()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].description(), "boots");
    }

    #[test]
    fn test_non_utf8_record_is_skipped() {
        let mut data = HEADER.as_bytes().to_vec();
        data.extend_from_slice(b"bad\xff cloak^1^2\nring^1^2\n");
        let items = parse_items(data.as_slice()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description(), "ring");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{HEADER}ring^1^2\namulet^3^4\n").unwrap();

        let source = DelimitedItemSource::new(file.path());
        let items = source.load().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items.total_value(), 6.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_items("/nonexistent/knapforge/items.csv");
        assert!(matches!(result, Err(KnapForgeError::Io(_))));
    }

    #[test]
    fn test_sequence_is_its_own_source() {
        let items: ItemSequence = vec![Item::new("a", 1.0, 1.0)].into();
        assert_eq!(items.load().unwrap(), items);
    }
}
