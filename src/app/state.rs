use tracing::Instrument;

use super::request_id::{search_span, RequestId};
use crate::{
    models::{BookmarkSet, BookmarkToggle, Movie, Notification, Theme},
    services::RecommendationClient,
    store::{KeyValueStore, PreferenceStore},
};

/// What the interface should currently show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// No API key yet, the setup wizard takes over
    Setup,
    /// The bookmark list
    Saved,
    /// A search is in flight
    Loading,
    /// Cards for the latest search
    Results,
    /// Nothing searched yet
    Empty,
}

/// Application state for one session
///
/// Theme, API key and bookmarks are loaded once and written back on every
/// change. Search results only live in memory.
pub struct AppShell<S> {
    prefs: PreferenceStore<S>,
    client: RecommendationClient,
    theme: Theme,
    api_key: Option<String>,
    bookmarks: BookmarkSet,
    results: Vec<Movie>,
    showing_saved: bool,
    loading: bool,
    notifications: Vec<Notification>,
}

impl<S: KeyValueStore> AppShell<S> {
    /// Creates the shell, reading persisted preferences from `store`
    pub fn load(store: S, client: RecommendationClient) -> Self {
        let mut prefs = PreferenceStore::new(store);
        let theme = prefs.load_theme();
        let api_key = prefs.load_api_key();
        let bookmarks = prefs.load_bookmarks();

        tracing::debug!(
            theme = %theme,
            has_api_key = api_key.is_some(),
            bookmarks = bookmarks.len(),
            "Session preferences loaded"
        );

        Self {
            prefs,
            client,
            theme,
            api_key,
            bookmarks,
            results: Vec::new(),
            showing_saved: false,
            loading: false,
            notifications: Vec::new(),
        }
    }

    pub fn view(&self) -> View {
        if self.api_key.is_none() {
            View::Setup
        } else if self.showing_saved {
            View::Saved
        } else if self.loading {
            View::Loading
        } else if self.results.is_empty() {
            View::Empty
        } else {
            View::Results
        }
    }

    /// Stores a new API key; blank input is ignored
    pub fn set_credential(&mut self, api_key: &str) {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return;
        }

        self.prefs.save_api_key(api_key);
        self.api_key = Some(api_key.to_string());
        tracing::info!("API key configured");
    }

    /// Forgets the API key and returns to setup
    ///
    /// Results and bookmarks stay in memory and reappear once a new key is set.
    pub fn clear_credential(&mut self) {
        self.prefs.clear_api_key();
        self.api_key = None;
        tracing::info!("API key cleared");
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        self.prefs.save_theme(self.theme);
        self.theme
    }

    pub fn toggle_saved_view(&mut self) {
        self.showing_saved = !self.showing_saved;
    }

    /// Runs one recommendation search
    ///
    /// Without an API key the request is refused before any network call. A
    /// submitted search always leaves the saved view. Any failure leaves the
    /// previous results in place and raises one generic error notification.
    pub async fn search(&mut self, query: &str) {
        let Some(api_key) = self.api_key.clone() else {
            tracing::warn!("Search attempted without an API key");
            self.notify(Notification::missing_credential());
            return;
        };

        if self.loading {
            tracing::debug!("Search ignored while another request is in flight");
            return;
        }

        if query.trim().is_empty() {
            return;
        }

        let request_id = RequestId::new();
        self.showing_saved = false;
        self.loading = true;

        let result = self
            .client
            .get_recommendations(query, &api_key)
            .instrument(search_span(request_id))
            .await;

        self.loading = false;

        match result {
            Ok(movies) => {
                tracing::info!(
                    request_id = %request_id,
                    results = movies.len(),
                    "Search completed"
                );
                self.results = movies;
            }
            Err(e) => {
                tracing::error!(
                    request_id = %request_id,
                    error = %e,
                    recommendation_failure = e.is_recommendation_failure(),
                    "Failed to get recommendations"
                );
                self.notify(Notification::search_failed());
            }
        }
    }

    /// Saves or removes a movie by title and persists the bookmark list
    pub fn toggle_bookmark(&mut self, movie: &Movie) -> BookmarkToggle {
        let outcome = self.bookmarks.toggle(movie);
        self.prefs.save_bookmarks(&self.bookmarks);

        let notification = match outcome {
            BookmarkToggle::Added => Notification::bookmark_added(&movie.title),
            BookmarkToggle::Removed => Notification::bookmark_removed(&movie.title),
        };
        self.notify(notification);

        tracing::debug!(title = %movie.title, outcome = ?outcome, "Bookmark toggled");
        outcome
    }

    pub fn is_bookmarked(&self, title: &str) -> bool {
        self.bookmarks.contains(title)
    }

    pub fn results(&self) -> &[Movie] {
        &self.results
    }

    pub fn bookmarks(&self) -> &BookmarkSet {
        &self.bookmarks
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_showing_saved(&self) -> bool {
        self.showing_saved
    }

    /// Drains pending notifications in the order they were raised
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}
