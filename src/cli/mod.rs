use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod repl;

pub use repl::{Repl, ReplCommand};

use crate::{app::AppShell, models::Notification, store::KeyValueStore, ui};

/// MovieGenius - movie recommendations from your own words
#[derive(Parser, Debug)]
#[command(name = "moviegenius")]
#[command(about = "Personalized movie recommendations powered by Gemini", long_about = None)]
pub struct Cli {
    /// Directory for saved settings and bookmarks (overrides MOVIEGENIUS_DATA_DIR)
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive session (default)
    Interactive,

    /// Get recommendations for a description of what you want to watch
    Recommend {
        /// Free-text preferences, e.g. "slow-burn sci-fi about memory"
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// List saved movies
    Saved,

    /// Manage the Gemini API key
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },

    /// Switch between light and dark theme
    Theme,
}

#[derive(Subcommand, Debug)]
pub enum KeyAction {
    /// Store a new API key
    Set { key: String },
    /// Remove the stored API key
    Clear,
}

/// Runs one command against the shell
pub async fn dispatch<S: KeyValueStore>(
    mut shell: AppShell<S>,
    command: Option<Commands>,
) -> anyhow::Result<()> {
    let command = command.unwrap_or(Commands::Interactive);
    if let Commands::Interactive = command {
        return Repl::new(shell).run().await;
    }

    for notification in execute(&mut shell, command).await {
        eprintln!("{}", ui::render_notification(&notification));
    }

    Ok(())
}

/// Runs a one-shot command, printing its output and returning what the
/// shell raised along the way
pub async fn execute<S: KeyValueStore>(
    shell: &mut AppShell<S>,
    command: Commands,
) -> Vec<Notification> {
    match command {
        // Owns the shell for the whole session, see `dispatch`
        Commands::Interactive => {}
        Commands::Recommend { query } => {
            let query = query.join(" ");
            shell.search(&query).await;
            let theme = shell.theme();
            for (i, movie) in shell.results().iter().enumerate() {
                let saved = shell.is_bookmarked(&movie.title);
                println!("{}\n", ui::render_movie_card(movie, i, saved, theme));
            }
        }
        Commands::Saved => {
            println!("{}", ui::render_saved_movies(shell.bookmarks(), shell.theme()));
        }
        Commands::Key { action: KeyAction::Set { key } } => {
            shell.set_credential(&key);
            if shell.has_credential() {
                println!("API key saved");
            } else {
                println!("API key cannot be empty");
            }
        }
        Commands::Key { action: KeyAction::Clear } => {
            shell.clear_credential();
            println!("API key removed");
        }
        Commands::Theme => {
            let theme = shell.toggle_theme();
            println!("Switched to {} theme", theme);
        }
    }

    shell.take_notifications()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::movie;
    use crate::models::Theme;
    use crate::services::{providers::MockCompletionProvider, RecommendationClient};
    use crate::store::MemoryStore;
    use std::sync::Arc;

    fn shell(provider: MockCompletionProvider) -> AppShell<MemoryStore> {
        AppShell::load(
            MemoryStore::new(),
            RecommendationClient::new(Arc::new(provider), 2),
        )
    }

    #[test]
    fn test_no_subcommand_is_interactive() {
        let cli = Cli::try_parse_from(["moviegenius"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_recommend_collects_words() {
        let cli = Cli::try_parse_from(["moviegenius", "recommend", "space", "westerns"]).unwrap();
        match cli.command {
            Some(Commands::Recommend { query }) => assert_eq!(query.join(" "), "space westerns"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_recommend_requires_query() {
        assert!(Cli::try_parse_from(["moviegenius", "recommend"]).is_err());
    }

    #[test]
    fn test_key_set_and_data_dir() {
        let cli =
            Cli::try_parse_from(["moviegenius", "--data-dir", "/tmp/mg", "key", "set", "AIza"])
                .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/mg")));
        assert!(matches!(
            cli.command,
            Some(Commands::Key { action: KeyAction::Set { ref key } }) if key == "AIza"
        ));
    }

    #[tokio::test]
    async fn test_recommend_without_key_raises_one_error() {
        let mut provider = MockCompletionProvider::new();
        provider.expect_generate().never();
        let mut shell = shell(provider);

        let command = Commands::Recommend {
            query: vec!["space".to_string(), "westerns".to_string()],
        };
        let notifications = execute(&mut shell, command).await;

        assert_eq!(notifications.len(), 1);
        assert!(notifications[0].is_error());
        assert_eq!(notifications[0].message, "Please set up your API key first");
    }

    #[tokio::test]
    async fn test_recommend_joins_words_into_one_query() {
        let mut provider = MockCompletionProvider::new();
        let json = serde_json::to_string(&vec![movie("Outland"), movie("Serenity")]).unwrap();
        provider
            .expect_generate()
            .withf(|_, prompt| prompt.contains(r#""space westerns""#))
            .times(1)
            .returning(move |_, _| Ok(json.clone()));
        provider.expect_name().return_const("mock");
        let mut shell = shell(provider);
        shell.set_credential("AIza-key");

        let command = Commands::Recommend {
            query: vec!["space".to_string(), "westerns".to_string()],
        };
        assert!(execute(&mut shell, command).await.is_empty());
        assert_eq!(shell.results().len(), 2);
    }

    #[tokio::test]
    async fn test_key_and_theme_commands() {
        let mut shell = shell(MockCompletionProvider::new());

        let set = Commands::Key {
            action: KeyAction::Set { key: "  ".to_string() },
        };
        execute(&mut shell, set).await;
        assert!(!shell.has_credential());

        let set = Commands::Key {
            action: KeyAction::Set { key: "AIza-key".to_string() },
        };
        execute(&mut shell, set).await;
        assert!(shell.has_credential());

        let clear = Commands::Key { action: KeyAction::Clear };
        execute(&mut shell, clear).await;
        assert!(!shell.has_credential());

        execute(&mut shell, Commands::Theme).await;
        assert_eq!(shell.theme(), Theme::Dark);
    }
}
