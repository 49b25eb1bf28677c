use super::{build_http_client, parse_base};
use crate::error::{BoardzError, Result};
use serde::Deserialize;

/// One multiple-choice record as the trivia service sends it. Text fields
/// still carry HTML entities.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawQuestion {
    pub question: String,
    pub correct_answer: String,
    #[serde(default)]
    pub incorrect_answers: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TriviaResponse {
    #[serde(default)]
    response_code: u32,
    #[serde(default)]
    results: Vec<RawQuestion>,
}

pub struct TriviaClient {
    endpoint: String,
    client: reqwest::Client,
}

impl TriviaClient {
    pub fn new(endpoint: &str, timeout_secs: u64) -> Result<Self> {
        Ok(Self::with_client(endpoint, build_http_client(timeout_secs)?))
    }

    pub fn with_client(endpoint: &str, client: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client,
        }
    }

    pub fn questions_url(&self, amount: u32) -> Result<reqwest::Url> {
        let mut url = parse_base(&self.endpoint)?;
        url.query_pairs_mut()
            .append_pair("amount", &amount.to_string())
            .append_pair("type", "multiple");
        Ok(url)
    }

    pub async fn fetch_questions(&self, amount: u32) -> Result<Vec<RawQuestion>> {
        let url = self.questions_url(amount)?;
        log::debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(BoardzError::Api(format!(
                "Trivia service returned {}",
                resp.status()
            )));
        }
        let body: TriviaResponse = resp.json().await?;
        if body.response_code != 0 {
            log::warn!("Trivia service response code {}", body.response_code);
        }
        Ok(body.results)
    }
}
