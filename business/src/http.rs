//! Thin HTTP client used by the loader.
//!
//! Requests are sent with `reqwest` and the response is drained into a plain
//! [`Response`] (status, lowercased headers, body bytes) so callers can make
//! decisions without holding on to the connection.

use std::collections::HashMap;

/// A fully-read HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    /// Response headers (lowercased keys)
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl Response {
    /// Returns true if the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(|s| s.as_str())
    }

    /// Attempt to deserialize the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Errors raised before a complete response is available.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

pub type HttpResult<T> = Result<T, HttpError>;

/// A GET request under construction.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    url: String,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send the request and read the whole body.
    pub async fn send(self) -> HttpResult<Response> {
        let client = reqwest::Client::new();
        let mut request = client.get(&self.url);

        for (name, value) in &self.headers {
            request = request.header(name, value);
        }

        let response = request.send().await.map_err(|source| HttpError::Transport {
            url: self.url.clone(),
            source,
        })?;

        // Extract status and headers before consuming the response
        let status = response.status().as_u16();
        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(name.as_str().to_lowercase(), v.to_owned());
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| HttpError::Body {
                url: self.url.clone(),
                source,
            })?
            .to_vec();

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

/// Entry point for building requests.
///
/// ```ignore
/// use roster_business::http::Client;
///
/// let response = Client::get("http://localhost:3000/users")
///     .header("accept", "application/json")
///     .send()
///     .await?;
/// ```
pub struct Client;

impl Client {
    pub fn get(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(url)
    }
}
