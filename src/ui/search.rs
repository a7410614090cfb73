/// Free-text search input
#[derive(Debug, Default)]
pub struct SearchBar;

impl SearchBar {
    pub const PLACEHOLDER: &'static str =
        "Enter your movie preferences (e.g., sci-fi with time travel, directed by Christopher Nolan)";

    pub fn new() -> Self {
        Self
    }

    /// The query to search for, if the input may be submitted
    ///
    /// Submission is disabled while a search is running, and blank input is
    /// never submitted. The query is passed on untrimmed.
    pub fn submit(&self, input: &str, loading: bool) -> Option<String> {
        if loading || input.trim().is_empty() {
            None
        } else {
            Some(input.to_string())
        }
    }

    pub fn prompt(&self, loading: bool) -> &'static str {
        if loading {
            "(searching...) "
        } else {
            "search> "
        }
    }
}
