/// Terminal rendering of the application state
///
/// Everything here is a pure function of state handed in by the caller. The
/// only local state is the search bar's loading guard and the setup wizard's
/// current step.
pub mod card;
pub mod saved;
pub mod search;
pub mod setup;
pub mod theme;

pub use card::render_movie_card;
pub use saved::render_saved_movies;
pub use search::SearchBar;
pub use setup::{SetupStep, SetupWizard};
pub use theme::Palette;

use chrono::Local;
use colored::Colorize;

use crate::models::{Notification, NotificationLevel, Theme};

/// App header with the bookmark counter
pub fn render_header(theme: Theme, saved_count: usize) -> String {
    let palette = Palette::for_theme(theme);
    let mut header = format!("{}", "MovieGenius".color(palette.accent).bold());
    if saved_count > 0 {
        header.push_str(&format!(
            "  {}",
            format!("[{} saved]", saved_count).color(palette.muted)
        ));
    }
    header
}

/// One notification line, stamped with the local time it was raised
pub fn render_notification(notification: &Notification) -> String {
    let time = notification
        .raised_at
        .with_timezone(&Local)
        .format("%H:%M:%S")
        .to_string();
    let body = match notification.level {
        NotificationLevel::Success => format!("{} {}", "✓".green(), notification.message),
        NotificationLevel::Error => format!("{} {}", "✗".red(), notification.message.red()),
    };
    format!("{} {}", time.dimmed(), body)
}

pub fn render_empty_state(theme: Theme) -> String {
    let palette = Palette::for_theme(theme);
    format!(
        "{}",
        "Enter your preferences to get personalized movie recommendations".color(palette.muted)
    )
}

pub fn render_loading(theme: Theme) -> String {
    let palette = Palette::for_theme(theme);
    format!("{}", "Finding movies for you...".color(palette.accent).italic())
}

#[cfg(test)]
pub(crate) fn plain() {
    colored::control::set_override(false);
}
