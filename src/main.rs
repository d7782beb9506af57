//! Library Match - BGG collection vs. Gen Con Games Library
//!
//! Loads a BGG collection CSV export, fetches the Gen Con Games Library
//! catalog from tabletop.events and reports the games found in both.

use clap::Parser;
use library_match::{
    fetch_library, find_matching_games, format_matches, format_matches_by_priority,
    read_collection, write_report, StatusFilter, DEFAULT_PAGE_SIZE,
};
use std::path::PathBuf;

/// Find games in both your BGG collection export and the Gen Con Games Library
#[derive(Parser, Debug)]
#[command(name = "library_match")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to your BGG collection CSV export
    #[arg(long, default_value = "bgg_games.csv")]
    csv: PathBuf,

    /// Only include wishlist games, not 'want to play'
    #[arg(long, conflicts_with = "want_to_play_only")]
    wishlist_only: bool,

    /// Only include 'want to play' games, not wishlist
    #[arg(long)]
    want_to_play_only: bool,

    /// Include games that are currently checked out
    #[arg(long)]
    show_checked_out: bool,

    /// Sort by wishlist priority instead of by name
    #[arg(long)]
    by_priority: bool,

    /// Number of catalog entries requested per API page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if !args.csv.exists() {
        log::error!("CSV file not found: {}", args.csv.display());
        eprintln!("To export your BGG collection:");
        eprintln!("1. Go to https://boardgamegeek.com/collection/user/YOUR_USERNAME");
        eprintln!("2. Click the download icon (arrow pointing down)");
        eprintln!("3. Save as bgg_games.csv next to this tool");
        std::process::exit(1);
    }

    let filter = StatusFilter {
        wishlist: !args.want_to_play_only,
        want_to_play: !args.wishlist_only,
    };

    let collection = match read_collection(&args.csv, filter) {
        Ok(collection) => collection,
        Err(e) => {
            log::error!("Failed to load collection: {}", e);
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if collection.is_empty() {
        log::warn!(
            "No wishlist or want-to-play games in {}; check the file format",
            args.csv.display()
        );
    }

    let catalog = match fetch_library(args.page_size) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Failed to fetch the games library: {}", e);
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let matches = find_matching_games(&catalog, &collection, args.show_checked_out);

    log::info!("Found {} matching games", matches.len());
    if args.show_checked_out {
        let checked_out = matches.iter().filter(|m| m.checked_out).count();
        if checked_out > 0 {
            log::info!("{} of them are currently checked out", checked_out);
        }
    } else {
        log::info!("Pass --show-checked-out to include games that are checked out");
    }

    let text = if args.by_priority {
        format_matches_by_priority(&matches)
    } else {
        format_matches(&matches)
    };

    if let Err(e) = write_report(&text, args.output.as_deref()) {
        log::error!("Failed to write results: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
