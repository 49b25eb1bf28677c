//! GitHub profile viewer state.
//!
//! Searches are fenced by a generation counter: [`ProfileViewer::begin`] hands
//! out a [`Ticket`], and [`ProfileViewer::finish`] drops any completion whose
//! ticket is older than the latest search. A failed search keeps the last
//! successful view and records the error next to it.

use crate::clients::github::{GithubClient, UserProfile, UserRepo};
use crate::error::{BoardzError, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub username: String,
    pub profile: UserProfile,
    pub repos: Vec<UserRepo>,
}

impl ProfileView {
    pub fn location(&self) -> &str {
        self.profile.location.as_deref().unwrap_or("N/A")
    }

    pub fn bio(&self) -> &str {
        self.profile.bio.as_deref().unwrap_or("")
    }

    pub fn repo_url(&self, repo: &UserRepo) -> String {
        format!("https://github.com/{}/{}", self.username, repo.name)
    }
}

pub fn repo_description(repo: &UserRepo) -> &str {
    match repo.description.as_deref() {
        Some(d) if !d.is_empty() => d,
        _ => "No description",
    }
}

/// Fetches profile and repositories together. Both must succeed; the profile
/// error wins when both fail.
pub async fn fetch_view(client: &GithubClient, username: &str) -> Result<ProfileView> {
    let username = username.trim();
    if username.is_empty() {
        return Err(BoardzError::Api("Username cannot be empty".to_string()));
    }
    let (profile, repos) = client.fetch_user_data(username).await;
    Ok(ProfileView {
        username: username.to_string(),
        profile: profile?,
        repos: repos?,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct ProfileViewer {
    view: Option<ProfileView>,
    error: Option<String>,
    loading: bool,
    generation: u64,
}

impl ProfileViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a search and invalidates any search still in flight.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        Ticket(self.generation)
    }

    /// Applies a completed search. Returns false if the ticket is stale.
    pub fn finish(&mut self, ticket: Ticket, result: Result<ProfileView>) -> bool {
        if ticket.0 != self.generation {
            log::debug!(
                "Dropping stale profile result {} (latest {})",
                ticket.0,
                self.generation
            );
            return false;
        }
        self.loading = false;
        match result {
            Ok(view) => {
                self.view = Some(view);
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        true
    }

    pub async fn search(&mut self, client: &GithubClient, username: &str) {
        let ticket = self.begin();
        let result = fetch_view(client, username).await;
        self.finish(ticket, result);
    }

    pub fn view(&self) -> Option<&ProfileView> {
        self.view.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
