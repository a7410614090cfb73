pub mod prompt;
pub mod providers;
pub mod recommendations;

pub use providers::CompletionProvider;
pub use recommendations::{parse_recommendations, RecommendationClient};
