use serde::Deserialize;

/// One row of a BGG collection CSV export.
///
/// BGG encodes its status flags as "0"/"1" strings; fields are kept as
/// exported and interpreted through the helper methods. Columns the tool
/// does not read (ratings, play counts, ...) are ignored by the reader.
#[derive(Debug, Deserialize, Clone)]
pub struct CollectionRow {
    #[serde(default)]
    pub objectname: String,
    #[serde(default)]
    pub objectid: String,
    #[serde(default)]
    pub wishlist: String,
    #[serde(default)]
    pub wanttoplay: String,
    #[serde(default)]
    pub wishlistpriority: String,
}

impl CollectionRow {
    /// Returns true if this row is flagged as a wishlist item
    pub fn is_wishlist(&self) -> bool {
        self.wishlist == "1" || self.wishlist.eq_ignore_ascii_case("true")
    }

    /// Returns true if this row is flagged as want-to-play
    pub fn is_want_to_play(&self) -> bool {
        self.wanttoplay == "1" || self.wanttoplay.eq_ignore_ascii_case("true")
    }

    /// Wishlist priority 1-5 (1 is highest), if set on the row
    pub fn priority(&self) -> Option<u8> {
        self.wishlistpriority.trim().parse().ok()
    }

    /// BGG id as an integer, if the column holds one
    pub fn parsed_id(&self) -> Option<u64> {
        self.objectid.trim().parse().ok()
    }
}

/// A game from the user's collection, after filtering to wishlist /
/// want-to-play rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionEntry {
    pub bgg_id: u64,
    pub name: String,
    pub wishlist: bool,
    pub want_to_play: bool,
    /// 1-5 where 1 is the highest priority; None for want-to-play-only rows
    pub wishlist_priority: Option<u8>,
}

/// A game in the lending library catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub bgg_id: u64,
    pub name: String,
    pub catalog_number: Option<String>,
    pub checked_out: bool,
}

/// A game present in both the collection and the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub name: String,
    pub catalog_number: Option<String>,
    pub checked_out: bool,
    pub wishlist_priority: Option<u8>,
    pub want_to_play: bool,
}
