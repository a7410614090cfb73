/// Builds the instruction sent to the model for one search
///
/// The user's text is embedded verbatim; everything else is fixed so the same
/// input always produces the same prompt.
pub fn build_recommendation_prompt(preferences: &str, count: usize) -> String {
    format!(
        r#"Act as a movie recommendation expert. Based on these preferences: "{preferences}",
recommend {count} movies. For each movie, provide the following details in JSON format:
{{
  title: string,
  year: number,
  genre: string[],
  rating: string (IMDb rating),
  director: string,
  cast: string[] (list of 4-5 main actors),
  synopsis: string (a compelling 2-3 sentence description),
  platforms: [{{ name: string, url: string }}] (list of streaming platforms with their homepage URLs, e.g., Netflix, Prime Video, Disney+)
}}
Return only the JSON array with the movies, no additional text. Ensure all URLs are valid streaming service homepages."#
    )
}
