use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from `MOVIEGENIUS_*` environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the local preference store
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Generative Language API base URL
    #[serde(default = "default_gemini_api_url")]
    pub gemini_api_url: String,

    /// Model used for recommendations
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    /// Number of movies requested per search
    #[serde(default = "default_recommendation_count")]
    pub recommendation_count: usize,
}

fn default_gemini_api_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_recommendation_count() -> usize {
    8
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            gemini_api_url: default_gemini_api_url(),
            gemini_model: default_gemini_model(),
            recommendation_count: default_recommendation_count(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::prefixed("MOVIEGENIUS_")
            .from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Resolve the data directory, falling back to the platform data dir
    pub fn resolve_data_dir(&self) -> anyhow::Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }

        dirs::data_dir()
            .map(|dir| dir.join("moviegenius"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine a data directory; set MOVIEGENIUS_DATA_DIR"))
    }
}
