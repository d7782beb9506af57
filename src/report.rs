use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::MatchResult;

fn format_line(game: &MatchResult) -> String {
    let catalog = game
        .catalog_number
        .as_ref()
        .map(|c| format!(" ({})", c))
        .unwrap_or_default();
    let status = if game.checked_out { " [CHECKED OUT]" } else { "" };
    format!("{}{}{}", game.name, catalog, status)
}

/// Format matches one per line, sorted case-insensitively by name.
pub fn format_matches(matches: &[MatchResult]) -> String {
    let mut sorted: Vec<&MatchResult> = matches.iter().collect();
    sorted.sort_by_key(|game| game.name.to_lowercase());

    let mut output = String::new();
    for game in sorted {
        output.push_str(&format_line(game));
        output.push('\n');
    }
    output
}

/// Format matches ordered by wishlist tier (1 is highest, want-to-play-only
/// games last), then case-insensitively by name, with a priority label in
/// front of each line.
pub fn format_matches_by_priority(matches: &[MatchResult]) -> String {
    let mut sorted: Vec<&MatchResult> = matches.iter().collect();
    sorted.sort_by_key(|game| (game.wishlist_priority.unwrap_or(99), game.name.to_lowercase()));

    let mut output = String::new();
    for game in sorted {
        if let Some(priority) = game.wishlist_priority {
            output.push_str(&format!("[Wishlist {}] ", priority));
        } else if game.want_to_play {
            output.push_str("[Want to Play] ");
        }
        output.push_str(&format_line(game));
        output.push('\n');
    }
    output
}

/// Write the report to the given file, or to stdout when no path is set.
pub fn write_report(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text)?;
            log::info!("Results written to {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(name: &str, catalog_number: Option<&str>, checked_out: bool) -> MatchResult {
        MatchResult {
            name: name.to_string(),
            catalog_number: catalog_number.map(str::to_string),
            checked_out,
            wishlist_priority: None,
            want_to_play: false,
        }
    }

    #[test]
    fn lines_carry_name_and_catalog_number() {
        let out = format_matches(&[game("Catan", Some("G-123"), false)]);
        assert_eq!(out, "Catan (G-123)\n");
    }

    #[test]
    fn missing_catalog_number_is_omitted() {
        let out = format_matches(&[game("Catan", None, false)]);
        assert_eq!(out, "Catan\n");
    }

    #[test]
    fn checked_out_games_are_marked() {
        let out = format_matches(&[game("Catan", Some("G-123"), true)]);
        assert_eq!(out, "Catan (G-123) [CHECKED OUT]\n");
    }

    #[test]
    fn output_is_sorted_case_insensitively() {
        let matches = vec![
            game("pandemic", Some("G-2"), false),
            game("Azul", Some("G-3"), false),
            game("Brass: Birmingham", Some("G-1"), false),
        ];

        let out = format_matches(&matches);
        let names: Vec<&str> = out.lines().collect();
        assert_eq!(
            names,
            vec![
                "Azul (G-3)",
                "Brass: Birmingham (G-1)",
                "pandemic (G-2)",
            ]
        );
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut matches = vec![
            game("Root", Some("G-9"), false),
            game("azul", None, true),
            game("Azul", Some("G-3"), false),
        ];

        let once = format_matches(&matches);
        // pre-sorting the input must not change the rendered order
        matches.sort_by_key(|g| g.name.to_lowercase());
        let twice = format_matches(&matches);

        assert_eq!(once, twice);
    }

    #[test]
    fn priority_ordering_puts_wishlist_tiers_first() {
        let mut want_to_play = game("Azul", Some("G-3"), false);
        want_to_play.want_to_play = true;

        let mut low = game("Root", Some("G-9"), false);
        low.wishlist_priority = Some(5);

        let mut high = game("Wingspan", Some("G-7"), false);
        high.wishlist_priority = Some(1);

        let out = format_matches_by_priority(&[want_to_play, low, high]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "[Wishlist 1] Wingspan (G-7)",
                "[Wishlist 5] Root (G-9)",
                "[Want to Play] Azul (G-3)",
            ]
        );
    }

    #[test]
    fn empty_matches_render_empty_output() {
        assert_eq!(format_matches(&[]), "");
        assert_eq!(format_matches_by_priority(&[]), "");
    }

    #[test]
    fn write_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");

        write_report("Catan (G-123)\n", Some(&path)).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Catan (G-123)\n");
    }

    #[test]
    fn write_report_to_unwritable_path_fails() {
        let result = write_report("x\n", Some(Path::new("/nonexistent/dir/results.txt")));
        assert!(result.is_err());
    }
}
