use serde::{Deserialize, Serialize};

use super::Movie;

/// Outcome of toggling a movie's bookmark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkToggle {
    Added,
    Removed,
}

/// The user's saved movies, keyed by title and kept in insertion order
///
/// Serializes as a plain JSON array of movies, which is also the persisted form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct BookmarkSet {
    movies: Vec<Movie>,
}

impl BookmarkSet {
    /// Creates an empty bookmark set
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves the movie if its title is absent, removes it otherwise
    pub fn toggle(&mut self, movie: &Movie) -> BookmarkToggle {
        if self.contains(&movie.title) {
            self.movies.retain(|m| m.title != movie.title);
            BookmarkToggle::Removed
        } else {
            self.movies.push(movie.clone());
            BookmarkToggle::Added
        }
    }

    pub fn contains(&self, title: &str) -> bool {
        self.movies.iter().any(|m| m.title == title)
    }

    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter()
    }

    /// Titles in insertion order
    pub fn titles(&self) -> Vec<&str> {
        self.movies.iter().map(|m| m.title.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::movie;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut set = BookmarkSet::new();
        let inception = movie("Inception");

        assert_eq!(set.toggle(&inception), BookmarkToggle::Added);
        assert!(set.contains("Inception"));

        assert_eq!(set.toggle(&inception), BookmarkToggle::Removed);
        assert!(!set.contains("Inception"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_double_toggle_keeps_other_members() {
        let mut set = BookmarkSet::new();
        set.toggle(&movie("Arrival"));
        let before = set.clone();

        set.toggle(&movie("Inception"));
        set.toggle(&movie("Inception"));

        assert_eq!(set, before);
    }

    #[test]
    fn test_matching_is_by_title_only() {
        let mut set = BookmarkSet::new();
        set.toggle(&movie("Dune"));

        let mut remake = movie("Dune");
        remake.year = 2021;
        remake.director = "Denis Villeneuve".to_string();

        assert_eq!(set.toggle(&remake), BookmarkToggle::Removed);
        assert!(set.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut set = BookmarkSet::new();
        set.toggle(&movie("Inception"));
        set.toggle(&movie("Arrival"));
        set.toggle(&movie("Heat"));
        set.toggle(&movie("Arrival"));
        set.toggle(&movie("Arrival"));

        assert_eq!(set.titles(), vec!["Inception", "Heat", "Arrival"]);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut set = BookmarkSet::new();
        set.toggle(&movie("Inception"));

        let value = serde_json::to_value(&set).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["title"], "Inception");
    }
}
