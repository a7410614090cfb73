use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    app::{AppShell, View},
    store::KeyValueStore,
    ui::{self, SearchBar, SetupStep, SetupWizard},
};

const HELP: &str = "\
Type your movie preferences to get recommendations.
  :save N     bookmark or un-bookmark result N
  :unsave N   remove saved movie N
  :saved      show or hide saved movies
  :theme      switch between light and dark
  :key        change the API key
  :help       show this help
  :quit       exit";

/// One line of user input, interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Search(String),
    ToggleResult(usize),
    ToggleSaved(usize),
    ShowSaved,
    Theme,
    ChangeKey,
    Help,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parses a line; anything not starting with `:` is a search
    ///
    /// Bookmark numbers are one-based on input and zero-based in the result.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(command) = trimmed.strip_prefix(':') else {
            return ReplCommand::Search(line.to_string());
        };

        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let index = parts
            .next()
            .and_then(|n| n.parse::<usize>().ok())
            .and_then(|n| n.checked_sub(1));

        match (name, index) {
            ("save", Some(i)) => ReplCommand::ToggleResult(i),
            ("unsave", Some(i)) => ReplCommand::ToggleSaved(i),
            ("saved", _) => ReplCommand::ShowSaved,
            ("theme", _) => ReplCommand::Theme,
            ("key", _) => ReplCommand::ChangeKey,
            ("help", _) | ("h", _) => ReplCommand::Help,
            ("quit", _) | ("q", _) | ("exit", _) => ReplCommand::Quit,
            _ => ReplCommand::Unknown(trimmed.to_string()),
        }
    }
}

/// Interactive session over stdin/stdout
pub struct Repl<S> {
    shell: AppShell<S>,
    wizard: SetupWizard,
    search_bar: SearchBar,
}

impl<S: KeyValueStore> Repl<S> {
    pub fn new(shell: AppShell<S>) -> Self {
        Self {
            shell,
            wizard: SetupWizard::new(),
            search_bar: SearchBar::new(),
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        self.draw();
        loop {
            self.print_prompt()?;
            let Some(line) = lines.next_line().await? else {
                break;
            };

            let keep_going = if self.shell.view() == View::Setup {
                self.handle_setup(&line)
            } else {
                self.handle_command(ReplCommand::parse(&line)).await
            };

            self.flush_notifications();
            if !keep_going {
                break;
            }
        }

        Ok(())
    }

    fn handle_setup(&mut self, line: &str) -> bool {
        match line.trim() {
            ":quit" | ":q" | ":exit" => return false,
            ":theme" => {
                self.shell.toggle_theme();
                self.draw();
                return true;
            }
            _ => {}
        }

        if self.wizard.step() == SetupStep::EnterKey {
            if let Some(key) = self.wizard.submit(line) {
                self.shell.set_credential(&key);
                self.wizard = SetupWizard::new();
            }
        } else {
            self.wizard.advance();
        }

        self.draw();
        true
    }

    async fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Search(query) => {
                let Some(query) = self.search_bar.submit(&query, self.shell.is_loading()) else {
                    return true;
                };
                println!("{}", ui::render_loading(self.shell.theme()));
                self.shell.search(&query).await;
                self.draw();
            }
            ReplCommand::ToggleResult(index) => {
                match self.shell.results().get(index).cloned() {
                    Some(movie) => {
                        self.shell.toggle_bookmark(&movie);
                    }
                    None => println!("No result number {}", index + 1),
                }
            }
            ReplCommand::ToggleSaved(index) => {
                match self.shell.bookmarks().get(index).cloned() {
                    Some(movie) => {
                        self.shell.toggle_bookmark(&movie);
                        if self.shell.is_showing_saved() {
                            self.draw();
                        }
                    }
                    None => println!("No saved movie number {}", index + 1),
                }
            }
            ReplCommand::ShowSaved => {
                self.shell.toggle_saved_view();
                self.draw();
            }
            ReplCommand::Theme => {
                let theme = self.shell.toggle_theme();
                println!("Switched to {} theme", theme);
                self.draw();
            }
            ReplCommand::ChangeKey => {
                self.shell.clear_credential();
                self.wizard = SetupWizard::new();
                self.draw();
            }
            ReplCommand::Help => println!("{}", HELP),
            ReplCommand::Quit => return false,
            ReplCommand::Unknown(input) => {
                println!("Unknown command {} (try :help)", input);
            }
        }
        true
    }

    fn draw(&self) {
        let theme = self.shell.theme();
        println!();
        println!("{}", ui::render_header(theme, self.shell.bookmarks().len()));
        println!();

        match self.shell.view() {
            View::Setup => println!("{}", self.wizard.render(theme)),
            View::Saved => println!("{}", ui::render_saved_movies(self.shell.bookmarks(), theme)),
            View::Loading => println!("{}", ui::render_loading(theme)),
            View::Empty => {
                println!("{}", ui::render_empty_state(theme));
                println!("{}", SearchBar::PLACEHOLDER);
            }
            View::Results => {
                for (i, movie) in self.shell.results().iter().enumerate() {
                    let saved = self.shell.is_bookmarked(&movie.title);
                    println!("{}\n", ui::render_movie_card(movie, i, saved, theme));
                }
            }
        }
    }

    fn print_prompt(&self) -> std::io::Result<()> {
        let prompt = if self.shell.view() == View::Setup {
            self.wizard.prompt()
        } else {
            self.search_bar.prompt(self.shell.is_loading())
        };
        print!("{}", prompt);
        std::io::stdout().flush()
    }

    fn flush_notifications(&mut self) {
        for notification in self.shell.take_notifications() {
            println!("{}", ui::render_notification(&notification));
        }
    }
}
