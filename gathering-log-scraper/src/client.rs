use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::ScrapeError;

/// Thin JSON-over-HTTP client shared by the upstream API clients.
///
/// Requests are not paced here; the enrichment pipeline decides when the
/// next request may go out.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, ScrapeError> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }

    /// GET `url` with `query` and decode the JSON body.
    ///
    /// HTTP 404 maps to [`ScrapeError::NotFound`], 429 to
    /// [`ScrapeError::RateLimit`], any other non-success status to
    /// [`ScrapeError::ServerError`].
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ScrapeError> {
        log::debug!("GET {}", url);

        let resp = self.http.get(url).query(query).send().await?;
        let status = resp.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScrapeError::NotFound);
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ScrapeError::RateLimit);
        }

        let text = resp.text().await?;
        if !status.is_success() {
            return Err(ScrapeError::ServerError {
                status: status.as_u16(),
                message: truncate(&text, 200).to_string(),
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            ScrapeError::Api(format!(
                "Failed to parse response from {url}: {e}. Response: {}",
                truncate(&text, 200)
            ))
        })
    }
}

/// Cut `s` to at most `max` bytes on a char boundary.
fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Join a base URL and a path without doubling or dropping the slash.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("abc", 10), "abc");
        assert_eq!(truncate("abcdef", 3), "abc");
        // "銅" is three bytes
        assert_eq!(truncate("銅鉱", 4), "銅");
    }

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(join_url("https://a.org/", "/item/5"), "https://a.org/item/5");
        assert_eq!(join_url("https://a.org", "item/5"), "https://a.org/item/5");
    }
}
