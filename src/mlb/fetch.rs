use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Why an upstream call produced nothing. Only ever logged; accessors
/// degrade to empty values instead of returning it.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream rate limited the request (429)")]
    RateLimited,

    #[error("upstream returned status {0}")]
    Status(StatusCode),

    #[error("upstream returned a plaintext rate-limit message")]
    RateLimitedBody,

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Linear backoff: retry `n` waits `base_delay * n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    pub fn delay_for(&self, retry: u32) -> Duration {
        self.base_delay * retry
    }
}

static RATE_LIMIT_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)too many requests|rate[\s-]?limit").expect("rate limit pattern is valid")
});

/// GET `url`, retrying 429s, other non-2xx statuses and transport failures
/// up to `policy.max_retries` times. `None` once retries are exhausted.
pub async fn fetch_with_retry(client: &Client, url: &str, policy: &RetryPolicy) -> Option<Response> {
    let mut retry = 0;

    loop {
        let failure = match client.get(url).send().await {
            Ok(resp) if resp.status().is_success() => return Some(resp),
            Ok(resp) if resp.status() == StatusCode::TOO_MANY_REQUESTS => FetchError::RateLimited,
            Ok(resp) => FetchError::Status(resp.status()),
            Err(err) => FetchError::Http(err),
        };

        if retry >= policy.max_retries {
            tracing::error!(url, attempts = retry + 1, "Giving up on upstream request: {}", failure);
            return None;
        }

        retry += 1;
        let delay = policy.delay_for(retry);
        tracing::warn!(
            url,
            retry,
            delay_ms = delay.as_millis() as u64,
            "Upstream request failed, retrying: {}",
            failure
        );
        tokio::time::sleep(delay).await;
    }
}

/// True when a body is an overload message rather than a JSON document.
pub fn is_rate_limit_text(body: &str) -> bool {
    let trimmed = body.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return false;
    }
    RATE_LIMIT_TEXT.is_match(trimmed)
}

pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    if is_rate_limit_text(body) {
        return Err(FetchError::RateLimitedBody);
    }
    Ok(serde_json::from_str(body)?)
}

/// Read and decode a response that may be missing or may not be JSON.
pub async fn safe_json<T: DeserializeOwned>(response: Option<Response>) -> Option<T> {
    let response = response?;
    let url = response.url().to_string();

    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!(url, "Failed to read upstream body: {}", err);
            return None;
        }
    };

    match decode_body(&body) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(url, "Discarding upstream body: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fast_policy(max_retries: u32) -> RetryPolicy {
        RetryPolicy {
            max_retries,
            base_delay: Duration::from_millis(1),
        }
    }

    #[test]
    fn delay_grows_linearly() {
        let policy = RetryPolicy {
            max_retries: 3,
            base_delay: Duration::from_millis(500),
        };
        assert_eq!(policy.delay_for(1), Duration::from_millis(500));
        assert_eq!(policy.delay_for(2), Duration::from_millis(1000));
        assert_eq!(policy.delay_for(3), Duration::from_millis(1500));
    }

    #[test]
    fn plaintext_rate_limit_is_rejected() {
        assert!(decode_body::<Value>("Too Many Requests").is_err());
        assert!(decode_body::<Value>("Rate limit exceeded, slow down").is_err());
        assert!(matches!(
            decode_body::<Value>("too many requests"),
            Err(FetchError::RateLimitedBody)
        ));
    }

    #[test]
    fn valid_json_is_parsed() {
        let value: Value = decode_body(r#"{"teams": [{"id": 147}]}"#).unwrap();
        assert_eq!(value["teams"][0]["id"], 147);
    }

    #[test]
    fn json_mentioning_rate_limit_still_parses() {
        let value: Value = decode_body(r#"{"message": "rate limit info"}"#).unwrap();
        assert_eq!(value["message"], "rate limit info");
    }

    #[test]
    fn malformed_json_is_none() {
        assert!(decode_body::<Value>(r#"{"teams": ["#).ok().is_none());
        assert!(decode_body::<Value>("<html>Bad Gateway</html>").ok().is_none());
    }

    #[tokio::test]
    async fn retries_429_until_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/teams"))
            .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
            .up_to_n_times(2)
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"teams": []}"#))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new();
        let url = format!("{}/teams", server.uri());
        let resp = fetch_with_retry(&client, &url, &fast_policy(3)).await;

        let value: Option<Value> = safe_json(resp).await;
        assert_eq!(value.unwrap()["teams"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn persistent_429_returns_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .expect(4)
            .mount(&server)
            .await;

        let client = Client::new();
        let url = format!("{}/standings", server.uri());
        let resp = fetch_with_retry(&client, &url, &fast_policy(3)).await;

        assert!(resp.is_none());
        assert!(safe_json::<Value>(resp).await.is_none());
    }

    #[tokio::test]
    async fn server_errors_are_retried_too() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[1, 2, 3]"))
            .mount(&server)
            .await;

        let client = Client::new();
        let resp = fetch_with_retry(&client, &server.uri(), &fast_policy(1)).await;
        let value: Vec<u32> = safe_json(resp).await.unwrap();
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn rate_limit_body_on_200_decodes_to_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Too Many Requests"))
            .mount(&server)
            .await;

        let client = Client::new();
        let resp = fetch_with_retry(&client, &server.uri(), &fast_policy(0)).await;
        assert!(resp.is_some());
        assert!(safe_json::<Value>(resp).await.is_none());
    }
}
