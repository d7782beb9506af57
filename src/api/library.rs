use std::thread;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{MatchError, Result};
use crate::models::CatalogEntry;

/// Gen Con Games Library id on tabletop.events
pub const LIBRARY_ID: &str = "04AF9CCA-4007-11E7-B936-583CAF0F8503";

/// Number of catalog entries requested per page by default
pub const DEFAULT_PAGE_SIZE: usize = 100;

const BASE_URL: &str = "https://tabletop.events";

/// Throttle between page requests
const PAGE_DELAY: Duration = Duration::from_millis(100);

/// One library game as returned by the API.
///
/// The backend serves `bgg_id` and `is_checked_out` as strings or numbers
/// depending on the record, so both fields are kept as raw JSON values and
/// interpreted through the helper methods.
#[derive(Debug, Deserialize, Clone)]
pub struct LibraryGame {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bgg_id: Option<Value>,
    #[serde(default)]
    pub catalog_number: Option<String>,
    #[serde(default)]
    pub is_checked_out: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct LibraryResponse {
    result: LibraryResult,
}

#[derive(Debug, Deserialize)]
struct LibraryResult {
    #[serde(default)]
    items: Vec<LibraryGame>,
    #[serde(default)]
    paging: Option<Paging>,
}

#[derive(Debug, Deserialize)]
struct Paging {
    #[serde(default)]
    total_pages: Option<u64>,
}

impl LibraryGame {
    /// BGG id as an integer, if present and parseable
    pub fn bgg_id_u64(&self) -> Option<u64> {
        match self.bgg_id.as_ref()? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Returns true if this copy is currently loaned out
    pub fn checked_out(&self) -> bool {
        match self.is_checked_out.as_ref() {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_i64().unwrap_or(0) != 0,
            Some(Value::String(s)) => s == "1" || s.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    /// Convert to a catalog entry; None when the game carries no usable BGG id
    fn to_catalog_entry(&self) -> Option<CatalogEntry> {
        let bgg_id = self.bgg_id_u64()?;
        Some(CatalogEntry {
            bgg_id,
            name: self
                .name
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            catalog_number: self
                .catalog_number
                .clone()
                .filter(|c| !c.trim().is_empty()),
            checked_out: self.checked_out(),
        })
    }
}

/// Fetch the full Gen Con Games Library catalog from tabletop.events
pub fn fetch_library(page_size: usize) -> Result<Vec<CatalogEntry>> {
    fetch_library_from(BASE_URL, page_size)
}

/// Fetches the catalog from the given base URL (for testing with mock servers).
///
/// Pages are requested sequentially; the fetch stops once the reported
/// `total_pages` is reached or a page comes back short. Games without a BGG
/// id are dropped, they cannot be matched against a collection export.
pub fn fetch_library_from(base_url: &str, page_size: usize) -> Result<Vec<CatalogEntry>> {
    let url = format!("{}/api/library/{}/librarygames", base_url, LIBRARY_ID);
    let client = reqwest::blocking::Client::new();

    log::info!("Fetching the games library catalog...");

    let mut entries: Vec<CatalogEntry> = Vec::new();
    let mut page: u64 = 1;

    loop {
        let response = client
            .get(&url)
            .query(&[
                ("_page_number", page.to_string()),
                ("_items_per_page", page_size.to_string()),
                ("_include_relationships", "1".to_string()),
            ])
            .header("User-Agent", "library_match/1.0")
            .send()?;

        if !response.status().is_success() {
            return Err(MatchError::HttpStatus(response.status()));
        }

        let body: LibraryResponse = serde_json::from_str(&response.text()?)?;
        let item_count = body.result.items.len();

        entries.extend(
            body.result
                .items
                .iter()
                .filter_map(LibraryGame::to_catalog_entry),
        );

        let total_pages = body
            .result
            .paging
            .and_then(|p| p.total_pages)
            .unwrap_or(1);

        log::info!(
            "Page {}/{} ({} games with BGG ids so far)",
            page,
            total_pages,
            entries.len()
        );

        if page >= total_pages || item_count < page_size {
            break;
        }

        page += 1;
        thread::sleep(PAGE_DELAY);
    }

    log::info!("Found {} games with BGG ids in the library", entries.len());

    Ok(entries)
}

#[cfg(test)]
#[path = "library_tests.rs"]
mod tests;
