use colored::Colorize;

use super::{render_movie_card, Palette};
use crate::models::{BookmarkSet, Theme};

/// Renders the bookmark list, or its empty state
pub fn render_saved_movies(bookmarks: &BookmarkSet, theme: Theme) -> String {
    let palette = Palette::for_theme(theme);

    if bookmarks.is_empty() {
        return format!(
            "{}\n{}",
            "No saved movies yet".color(palette.text).bold(),
            "Bookmark movies you're interested in to see them here".color(palette.muted)
        );
    }

    let mut sections = vec![format!(
        "{}",
        format!("Saved Movies ({})", bookmarks.len())
            .color(palette.accent)
            .bold()
    )];
    sections.extend(
        bookmarks
            .iter()
            .enumerate()
            .map(|(i, movie)| render_movie_card(movie, i, true, theme)),
    );
    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::movie;
    use crate::ui::plain;

    #[test]
    fn test_empty_state() {
        plain();
        let text = render_saved_movies(&BookmarkSet::new(), Theme::Light);
        assert!(text.starts_with("No saved movies yet"));
    }

    #[test]
    fn test_lists_in_insertion_order() {
        plain();
        let mut bookmarks = BookmarkSet::new();
        bookmarks.toggle(&movie("Inception"));
        bookmarks.toggle(&movie("Arrival"));

        let text = render_saved_movies(&bookmarks, Theme::Dark);
        assert!(text.starts_with("Saved Movies (2)"));
        let inception = text.find(" 1. Inception").unwrap();
        let arrival = text.find(" 2. Arrival").unwrap();
        assert!(inception < arrival);
    }
}
