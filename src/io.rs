use std::path::Path;

use crate::error::{MatchError, Result};
use crate::models::{CollectionEntry, CollectionRow};

/// Which collection statuses to keep when loading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusFilter {
    pub wishlist: bool,
    pub want_to_play: bool,
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self {
            wishlist: true,
            want_to_play: true,
        }
    }
}

/// Read a BGG collection CSV export, keeping the rows selected by `filter`.
///
/// Rows that fail to deserialize or whose id is not an integer are skipped
/// with a warning. A header row without the required columns is an error.
pub fn read_collection<P: AsRef<Path>>(
    path: P,
    filter: StatusFilter,
) -> Result<Vec<CollectionEntry>> {
    let path = path.as_ref();
    log::info!("Loading BGG collection from {}", path.display());

    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = rdr.headers()?.clone();
    for required in ["objectid", "objectname"] {
        if !headers.iter().any(|h| h == required) {
            return Err(MatchError::MissingColumn(required.to_string()));
        }
    }

    let mut entries = Vec::new();
    let mut wishlist_count = 0usize;
    let mut want_to_play_count = 0usize;

    for (index, result) in rdr.deserialize().enumerate() {
        // +2: line numbers are 1-based and the header is line 1
        let line = index + 2;
        let row: CollectionRow = match result {
            Ok(row) => row,
            Err(e) => {
                log::warn!("Skipping line {line}: {e}");
                continue;
            }
        };

        let bgg_id = match row.parsed_id() {
            Some(id) => id,
            None => {
                log::warn!(
                    "Skipping line {line}: objectid {:?} is not an integer",
                    row.objectid
                );
                continue;
            }
        };

        if filter.wishlist && row.is_wishlist() {
            wishlist_count += 1;
            entries.push(CollectionEntry {
                bgg_id,
                name: row.objectname.clone(),
                wishlist: true,
                want_to_play: row.is_want_to_play(),
                wishlist_priority: row.priority(),
            });
        } else if filter.want_to_play && row.is_want_to_play() {
            want_to_play_count += 1;
            entries.push(CollectionEntry {
                bgg_id,
                name: row.objectname.clone(),
                wishlist: false,
                want_to_play: true,
                // not a wishlist item, any leftover priority value is stale
                wishlist_priority: None,
            });
        }
    }

    log::info!(
        "Found {} wishlist and {} want-to-play games ({} total)",
        wishlist_count,
        want_to_play_count,
        entries.len()
    );

    Ok(entries)
}
