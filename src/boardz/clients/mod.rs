//! Typed HTTP clients for the remote data sources.
//!
//! Both clients are thin: they build URLs, send one GET, map non-success
//! statuses to [`BoardzError`] and deserialize the JSON body. Widget state lives
//! in [`crate::profile`] and [`crate::quiz`].

use crate::error::{BoardzError, Result};
use std::time::Duration;

pub mod github;
pub mod trivia;

const USER_AGENT: &str = concat!("boardz/", env!("CARGO_PKG_VERSION"));

/// Shared client setup: a user agent (GitHub rejects requests without one) and
/// a per-request timeout.
pub fn build_http_client(timeout_secs: u64) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(BoardzError::Http)
}

fn parse_base(base_url: &str) -> Result<reqwest::Url> {
    reqwest::Url::parse(base_url.trim_end_matches('/'))
        .map_err(|e| BoardzError::Api(format!("Invalid URL '{}': {}", base_url, e)))
}

#[cfg(test)]
pub(crate) mod test_server {
    //! A one-file HTTP responder for client tests. Routes match on the request
    //! path (query string ignored); unknown paths get a 404.

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    pub type Route = (&'static str, u16, String);

    pub async fn serve(routes: Vec<Route>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let routes = routes.clone();
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 1024];
                    loop {
                        let n = socket.read(&mut chunk).await.unwrap_or(0);
                        if n == 0 {
                            break;
                        }
                        buf.extend_from_slice(&chunk[..n]);
                        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }

                    let request = String::from_utf8_lossy(&buf);
                    let target = request.split_whitespace().nth(1).unwrap_or("/");
                    let path = target.split('?').next().unwrap_or("/");
                    let (status, body) = routes
                        .iter()
                        .find(|(p, _, _)| *p == path)
                        .map(|(_, s, b)| (*s, b.clone()))
                        .unwrap_or((404, r#"{"message":"Not Found"}"#.to_string()));
                    let reason = if status == 200 { "OK" } else { "Not Found" };

                    let response = format!(
                        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        reason,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        format!("http://{}", addr)
    }

    /// A client that never goes through an environment proxy.
    pub fn direct_client() -> reqwest::Client {
        reqwest::Client::builder().no_proxy().build().unwrap()
    }
}
