use serde::{Deserialize, Deserializer, Serialize};

pub mod bookmarks;
pub mod notification;
pub mod preferences;

pub use bookmarks::{BookmarkSet, BookmarkToggle};
pub use notification::{Notification, NotificationLevel};
pub use preferences::Theme;

use crate::error::{AppError, AppResult};

/// A single recommended movie as returned by the model
///
/// The title is the identity of a movie: bookmarks match on it, so two films
/// sharing a title (remakes, reboots) are treated as the same entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub title: String,
    #[serde(deserialize_with = "int_or_string")]
    pub year: i32,
    pub genre: Vec<String>,
    /// Free-form rating text, usually an IMDb score such as "8.8"
    #[serde(deserialize_with = "string_or_number")]
    pub rating: String,
    pub director: String,
    pub cast: Vec<String>,
    pub synopsis: String,
    pub platforms: Vec<Platform>,
}

/// A streaming platform a movie can be watched on
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Platform {
    pub name: String,
    pub url: String,
}

impl Movie {
    /// Checks the fields the UI relies on
    ///
    /// A movie needs a title to be bookmarked, and every platform link needs
    /// both a label and a target.
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::MalformedResponse(
                "recommendation is missing a title".to_string(),
            ));
        }

        for platform in &self.platforms {
            if platform.name.trim().is_empty() || platform.url.trim().is_empty() {
                return Err(AppError::MalformedResponse(format!(
                    "platform entry for \"{}\" is missing a name or url",
                    self.title
                )));
            }
        }

        Ok(())
    }
}

/// Accepts `"8.8"` as well as `8.8` and keeps the text form
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Rating {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Rating::deserialize(deserializer)? {
        Rating::Text(text) => text,
        Rating::Number(number) => number.to_string(),
    })
}

/// Accepts `1995` as well as `"1995"`
fn int_or_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Number(i32),
        Text(String),
    }

    match Year::deserialize(deserializer)? {
        Year::Number(year) => Ok(year),
        Year::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid year \"{}\"", text))),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_deserialization() {
        let json = r#"{
            "title": "Arrival",
            "year": 2016,
            "genre": ["Drama", "Sci-Fi"],
            "rating": "7.9",
            "director": "Denis Villeneuve",
            "cast": ["Amy Adams", "Jeremy Renner"],
            "synopsis": "A linguist works with the military to communicate with alien lifeforms.",
            "platforms": [{ "name": "Prime Video", "url": "https://www.primevideo.com" }]
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.title, "Arrival");
        assert_eq!(movie.year, 2016);
        assert_eq!(movie.rating, "7.9");
        assert_eq!(movie.platforms[0].name, "Prime Video");
    }

    #[test]
    fn test_numeric_rating_kept_as_text() {
        let json = r#"{
            "title": "Inception", "year": 2010, "genre": [], "rating": 8.8,
            "director": "Christopher Nolan", "cast": [], "synopsis": "", "platforms": []
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.rating, "8.8");
    }

    #[test]
    fn test_quoted_year_is_accepted() {
        let json = r#"{
            "title": "Heat", "year": "1995", "genre": [], "rating": "8.3",
            "director": "Michael Mann", "cast": [], "synopsis": "", "platforms": []
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.year, 1995);
    }

    #[test]
    fn test_non_numeric_year_is_rejected() {
        let json = r#"{
            "title": "Heat", "year": "mid-nineties", "genre": [], "rating": "8.3",
            "director": "Michael Mann", "cast": [], "synopsis": "", "platforms": []
        }"#;

        assert!(serde_json::from_str::<Movie>(json).is_err());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{ "title": "Inception", "year": 2010 }"#;
        assert!(serde_json::from_str::<Movie>(json).is_err());
    }

    #[test]
    fn test_validate_accepts_complete_movie() {
        assert!(fixtures::movie("Inception").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let movie = fixtures::movie("   ");
        assert!(matches!(
            movie.validate(),
            Err(AppError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_validate_rejects_platform_without_url() {
        let mut movie = fixtures::movie("Inception");
        movie.platforms.push(Platform {
            name: "Hulu".to_string(),
            url: String::new(),
        });
        assert!(matches!(
            movie.validate(),
            Err(AppError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(fixtures::movie("Inception")).unwrap();
        for field in [
            "title", "year", "genre", "rating", "director", "cast", "synopsis", "platforms",
        ] {
            assert!(value.get(field).is_some(), "missing {}", field);
        }
        assert_eq!(value["platforms"][0]["url"], "https://www.netflix.com");
    }
}
