use colored::Colorize;

use super::Palette;
use crate::models::{Movie, Theme};

/// Renders one movie as a numbered card
///
/// `index` is zero-based; the card shows it one-based so it matches the
/// numbers accepted by the bookmark commands.
pub fn render_movie_card(movie: &Movie, index: usize, saved: bool, theme: Theme) -> String {
    let palette = Palette::for_theme(theme);
    let marker = if saved {
        format!("{}", "[saved]".color(palette.accent))
    } else {
        format!("{}", "[ ]".color(palette.muted))
    };

    let mut lines = vec![format!(
        "{:>2}. {} ({})  {} {}  {}",
        index + 1,
        movie.title.color(palette.text).bold(),
        movie.year,
        "★".yellow(),
        movie.rating,
        marker
    )];

    if !movie.genre.is_empty() {
        let genres: Vec<String> = movie
            .genre
            .iter()
            .map(|g| format!("{}", g.color(palette.tag)))
            .collect();
        lines.push(format!("    {}", genres.join(" · ")));
    }

    lines.push(format!("    Director: {}", movie.director));

    if !movie.cast.is_empty() {
        lines.push(format!("    Cast: {}", movie.cast.join(", ")));
    }

    lines.push(format!("    {}", movie.synopsis.color(palette.muted)));

    for platform in &movie.platforms {
        lines.push(format!(
            "    Watch on {}: {}",
            platform.name.color(palette.accent),
            platform.url.underline()
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::movie;
    use crate::ui::plain;

    #[test]
    fn test_card_contents() {
        plain();
        let card = render_movie_card(&movie("Inception"), 0, false, Theme::Light);
        let lines: Vec<&str> = card.lines().collect();

        assert_eq!(lines[0], " 1. Inception (2010)  ★ 8.8  [ ]");
        assert_eq!(lines[1], "    Sci-Fi · Thriller");
        assert_eq!(lines[2], "    Director: Christopher Nolan");
        assert_eq!(lines[3], "    Cast: Leonardo DiCaprio, Joseph Gordon-Levitt");
        assert_eq!(lines[5], "    Watch on Netflix: https://www.netflix.com");
    }

    #[test]
    fn test_saved_marker() {
        plain();
        let card = render_movie_card(&movie("Heat"), 4, true, Theme::Dark);
        assert!(card.starts_with(" 5. Heat (2010)"));
        assert!(card.lines().next().unwrap().ends_with("[saved]"));
    }

    #[test]
    fn test_empty_lists_are_skipped() {
        plain();
        let mut m = movie("Solaris");
        m.genre.clear();
        m.cast.clear();
        m.platforms.clear();
        let card = render_movie_card(&m, 0, false, Theme::Light);
        assert_eq!(card.lines().count(), 3);
    }
}
