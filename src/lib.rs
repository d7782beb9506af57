pub mod api;
pub mod error;
pub mod io;
pub mod matching;
pub mod models;
pub mod report;

// Re-export commonly used items
pub use api::{fetch_library, DEFAULT_PAGE_SIZE, LIBRARY_ID};
pub use error::{MatchError, Result};
pub use io::{read_collection, StatusFilter};
pub use matching::find_matching_games;
pub use models::{CatalogEntry, CollectionEntry, MatchResult};
pub use report::{format_matches, format_matches_by_priority, write_report};
