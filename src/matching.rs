use std::collections::{HashMap, HashSet};

use crate::models::{CatalogEntry, CollectionEntry, MatchResult};

/// Find games that appear in both the library catalog and the user's
/// collection, joined on BGG id.
///
/// Checked-out games are dropped unless `show_checked_out` is set. When the
/// catalog lists the same BGG id more than once, the last entry wins; a BGG
/// id is reported at most once even if the collection export repeats it.
pub fn find_matching_games(
    catalog: &[CatalogEntry],
    collection: &[CollectionEntry],
    show_checked_out: bool,
) -> Vec<MatchResult> {
    let by_id: HashMap<u64, &CatalogEntry> =
        catalog.iter().map(|game| (game.bgg_id, game)).collect();

    let mut seen: HashSet<u64> = HashSet::new();
    let mut matches = Vec::new();

    for wanted in collection {
        if !seen.insert(wanted.bgg_id) {
            continue;
        }
        if let Some(game) = by_id.get(&wanted.bgg_id) {
            if game.checked_out && !show_checked_out {
                continue;
            }
            matches.push(MatchResult {
                name: game.name.clone(),
                catalog_number: game.catalog_number.clone(),
                checked_out: game.checked_out,
                wishlist_priority: wanted.wishlist_priority,
                want_to_play: wanted.want_to_play,
            });
        }
    }

    matches
}
