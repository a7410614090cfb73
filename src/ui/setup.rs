use colored::Colorize;

use super::Palette;
use crate::models::Theme;

pub const API_KEY_URL: &str = "https://makersuite.google.com/app/apikey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupStep {
    #[default]
    Welcome,
    Instructions,
    EnterKey,
}

impl SetupStep {
    pub fn number(self) -> usize {
        match self {
            SetupStep::Welcome => 1,
            SetupStep::Instructions => 2,
            SetupStep::EnterKey => 3,
        }
    }

    fn next(self) -> Self {
        match self {
            SetupStep::Welcome => SetupStep::Instructions,
            SetupStep::Instructions | SetupStep::EnterKey => SetupStep::EnterKey,
        }
    }
}

/// Three-step API key onboarding
#[derive(Debug, Default)]
pub struct SetupWizard {
    step: SetupStep,
}

impl SetupWizard {
    pub const STEPS: usize = 3;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> SetupStep {
        self.step
    }

    /// Moves to the next step; the last step stays put
    pub fn advance(&mut self) {
        self.step = self.step.next();
    }

    /// Returns the trimmed key once the user is on the entry step
    pub fn submit(&self, input: &str) -> Option<String> {
        if self.step != SetupStep::EnterKey {
            return None;
        }
        let key = input.trim();
        (!key.is_empty()).then(|| key.to_string())
    }

    pub fn render(&self, theme: Theme) -> String {
        let palette = Palette::for_theme(theme);

        let progress: Vec<String> = (1..=Self::STEPS)
            .map(|n| {
                let label = format!("({})", n);
                if n <= self.step.number() {
                    format!("{}", label.color(palette.accent).bold())
                } else {
                    format!("{}", label.color(palette.muted))
                }
            })
            .collect();

        let body = match self.step {
            SetupStep::Welcome => vec![
                format!("{}", "Welcome to MovieGenius!".color(palette.text).bold()),
                "Get personalized movie recommendations powered by AI".to_string(),
                String::new(),
                "To get started, you'll need:".to_string(),
                "  - A Google AI (Gemini) API key".to_string(),
                "  - 2 minutes of your time".to_string(),
                String::new(),
                format!("{}", "Press Enter to get started".color(palette.muted)),
            ],
            SetupStep::Instructions => vec![
                format!("{}", "Get Your API Key".color(palette.text).bold()),
                "Follow these simple steps to get your Gemini API key".to_string(),
                String::new(),
                format!("  1. Visit {}", API_KEY_URL.underline()),
                "  2. Create or select a project".to_string(),
                "  3. Copy your API key".to_string(),
                String::new(),
                format!("{}", "Press Enter when you have your API key".color(palette.muted)),
            ],
            SetupStep::EnterKey => vec![
                format!("{}", "Enter Your API Key".color(palette.text).bold()),
                "Paste your Gemini API key below to start using MovieGenius".to_string(),
            ],
        };

        format!("{}\n\n{}", progress.join(" ── "), body.join("\n"))
    }

    pub fn prompt(&self) -> &'static str {
        match self.step {
            SetupStep::EnterKey => "API key> ",
            _ => "> ",
        }
    }
}
