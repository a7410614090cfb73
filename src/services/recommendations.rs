use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::Movie,
    services::{prompt::build_recommendation_prompt, providers::CompletionProvider},
};

/// Turns free-text preferences into a list of movies via the configured model
#[derive(Clone)]
pub struct RecommendationClient {
    provider: Arc<dyn CompletionProvider>,
    count: usize,
}

impl RecommendationClient {
    pub fn new(provider: Arc<dyn CompletionProvider>, count: usize) -> Self {
        Self { provider, count }
    }

    /// Asks the model for recommendations and parses its answer
    ///
    /// One request per call. Nothing is cached and a malformed answer is not
    /// retried.
    pub async fn get_recommendations(
        &self,
        preferences: &str,
        api_key: &str,
    ) -> AppResult<Vec<Movie>> {
        if preferences.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Preferences cannot be empty".to_string(),
            ));
        }

        if api_key.trim().is_empty() {
            return Err(AppError::MissingCredential);
        }

        let prompt = build_recommendation_prompt(preferences, self.count);
        let text = self.provider.generate(api_key, &prompt).await?;
        let movies = parse_recommendations(&text)?;

        if movies.len() != self.count {
            tracing::warn!(
                requested = self.count,
                received = movies.len(),
                provider = self.provider.name(),
                "Model returned a different number of movies than requested"
            );
        }

        tracing::info!(
            query_len = preferences.len(),
            results = movies.len(),
            provider = self.provider.name(),
            "Recommendations received"
        );

        Ok(movies)
    }
}

/// Parses model output into movies, all or nothing
///
/// The text must be exactly a JSON array of movie objects. Surrounding prose,
/// code fences, a wrong shape, an empty array or any invalid movie reject the
/// whole response.
pub fn parse_recommendations(text: &str) -> AppResult<Vec<Movie>> {
    let movies: Vec<Movie> = serde_json::from_str(text.trim()).map_err(|e| {
        tracing::error!(error = %e, "Model output is not a JSON array of movies");
        AppError::MalformedResponse(format!("Failed to parse recommendations: {}", e))
    })?;

    if movies.is_empty() {
        return Err(AppError::MalformedResponse(
            "Model returned no recommendations".to_string(),
        ));
    }

    for movie in &movies {
        movie.validate()?;
    }

    Ok(movies)
}
