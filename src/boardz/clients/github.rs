use super::{build_http_client, parse_base};
use crate::error::{BoardzError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRepo {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
}

pub struct GithubClient {
    base_url: String,
    client: reqwest::Client,
}

impl GithubClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        Ok(Self::with_client(base_url, build_http_client(timeout_secs)?))
    }

    pub fn with_client(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// `{base}/users/{username}[/{tail}]`, with the username escaped as one
    /// path segment.
    pub fn user_url(&self, username: &str, tail: Option<&str>) -> Result<reqwest::Url> {
        let mut url = parse_base(&self.base_url)?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| BoardzError::Api(format!("Invalid API base: {}", self.base_url)))?;
            segments.pop_if_empty().push("users").push(username);
            if let Some(tail) = tail {
                segments.push(tail);
            }
        }
        Ok(url)
    }

    pub async fn fetch_profile(&self, username: &str) -> Result<UserProfile> {
        let url = self.user_url(username, None)?;
        log::debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            log::info!("Profile lookup for '{}' returned {}", username, resp.status());
            return Err(BoardzError::NotFound("User not found".to_string()));
        }
        Ok(resp.json::<UserProfile>().await?)
    }

    pub async fn fetch_repos(&self, username: &str) -> Result<Vec<UserRepo>> {
        let url = self.user_url(username, Some("repos"))?;
        log::debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            log::info!("Repo lookup for '{}' returned {}", username, resp.status());
            return Err(BoardzError::NotFound("Repositories not found".to_string()));
        }
        Ok(resp.json::<Vec<UserRepo>>().await?)
    }

    /// Runs both reads concurrently. Each result fails independently.
    pub async fn fetch_user_data(
        &self,
        username: &str,
    ) -> (Result<UserProfile>, Result<Vec<UserRepo>>) {
        tokio::join!(self.fetch_profile(username), self.fetch_repos(username))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::test_server::{direct_client, serve};

    const PROFILE: &str = r#"{
        "login": "octocat",
        "id": 583231,
        "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
        "html_url": "https://github.com/octocat",
        "bio": null,
        "followers": 9000,
        "following": 9,
        "location": "San Francisco",
        "public_repos": 8
    }"#;

    const REPOS: &str = r#"[
        {"id": 1296269, "name": "Hello-World", "description": "My first repository on GitHub!",
         "stargazers_count": 2500, "forks_count": 2400, "language": null},
        {"id": 132935648, "name": "boysenberry-repo-1", "description": null,
         "stargazers_count": 300, "forks_count": 40}
    ]"#;

    #[test]
    fn parses_profile_payload() {
        let profile: UserProfile = serde_json::from_str(PROFILE).unwrap();
        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.bio, None);
        assert_eq!(profile.followers, 9000);
        assert_eq!(profile.location.as_deref(), Some("San Francisco"));
    }

    #[test]
    fn parses_repo_payload() {
        let repos: Vec<UserRepo> = serde_json::from_str(REPOS).unwrap();
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].stargazers_count, 2500);
        assert_eq!(repos[1].description, None);
    }

    #[test]
    fn builds_escaped_urls() {
        let client = GithubClient::with_client("https://api.github.com/", direct_client());
        assert_eq!(
            client.user_url("octocat", None).unwrap().as_str(),
            "https://api.github.com/users/octocat"
        );
        assert_eq!(
            client.user_url("octocat", Some("repos")).unwrap().as_str(),
            "https://api.github.com/users/octocat/repos"
        );
        assert_eq!(
            client.user_url("a/b", None).unwrap().as_str(),
            "https://api.github.com/users/a%2Fb"
        );
    }

    #[tokio::test]
    async fn fetches_both_reads() {
        let base = serve(vec![
            ("/users/octocat", 200, PROFILE.to_string()),
            ("/users/octocat/repos", 200, REPOS.to_string()),
        ])
        .await;
        let client = GithubClient::with_client(&base, direct_client());

        let (profile, repos) = client.fetch_user_data("octocat").await;
        assert_eq!(profile.unwrap().login, "octocat");
        assert_eq!(repos.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn reads_fail_independently() {
        let base = serve(vec![("/users/ghost", 200, PROFILE.to_string())]).await;
        let client = GithubClient::with_client(&base, direct_client());

        let (profile, repos) = client.fetch_user_data("ghost").await;
        assert!(profile.is_ok());
        let err = repos.unwrap_err();
        assert!(matches!(err, BoardzError::NotFound(_)));
        assert_eq!(err.to_string(), "Repositories not found");
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let base = serve(vec![]).await;
        let client = GithubClient::with_client(&base, direct_client());
        let err = client.fetch_profile("nobody").await.unwrap_err();
        assert_eq!(err.to_string(), "User not found");
    }
}
