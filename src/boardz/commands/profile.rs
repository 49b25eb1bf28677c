use crate::clients::github::GithubClient;
use crate::commands::{CmdMessage, CmdResult};
use crate::profile::ProfileViewer;

/// Looks up a user. Lookup failures become an inline error message.
pub async fn run(client: &GithubClient, username: &str) -> CmdResult {
    let mut viewer = ProfileViewer::new();
    viewer.search(client, username).await;

    let mut result = CmdResult::default();
    if let Some(err) = viewer.error() {
        result.add_message(CmdMessage::error(err));
    }
    if let Some(view) = viewer.view() {
        result = result.with_profile(view.clone());
    }
    result
}
