//! Request-time loading of the user list.
//!
//! The loader never fails: every outcome is folded into a [`LoadResult`].
//! - non-2xx response: that status, no users
//! - transport, body or JSON failure: [`FAILURE_STATUS`], no users
//! - otherwise: 200 and the parsed list

use std::future::Future;

use log::{debug, warn};

use crate::http::Client;
use crate::user::UserRecord;

/// Endpoint the page reads from when nothing else is configured.
pub const DEFAULT_USERS_URL: &str = "http://localhost:3000/users";

/// Status reported when no HTTP status is available.
pub const FAILURE_STATUS: u16 = 500;

/// Outcome of one load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    pub status_code: u16,
    pub users: Vec<UserRecord>,
}

impl LoadResult {
    pub fn loaded(users: Vec<UserRecord>) -> Self {
        Self {
            status_code: 200,
            users,
        }
    }

    pub fn failed(status_code: u16) -> Self {
        Self {
            status_code,
            users: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status_code == 200
    }
}

/// Where the page gets its users from.
pub trait UserSource: Clone + Send + Sync + 'static {
    fn load(&self) -> impl Future<Output = LoadResult> + Send;
}

/// [`UserSource`] backed by a GET against a fixed URL.
#[derive(Debug, Clone)]
pub struct HttpUserSource {
    url: String,
}

impl HttpUserSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpUserSource {
    fn default() -> Self {
        Self::new(DEFAULT_USERS_URL)
    }
}

impl UserSource for HttpUserSource {
    async fn load(&self) -> LoadResult {
        load_users(&self.url).await
    }
}

/// GET `url` and fold the outcome into a [`LoadResult`].
pub async fn load_users(url: &str) -> LoadResult {
    let response = match Client::get(url)
        .header("accept", "application/json")
        .send()
        .await
    {
        Ok(response) => response,
        Err(err) => {
            warn!("Loading users failed: {err}");
            return LoadResult::failed(FAILURE_STATUS);
        }
    };

    if !response.is_success() {
        warn!("Users endpoint {url} returned status {}", response.status);
        return LoadResult::failed(response.status);
    }

    match response.json::<Vec<UserRecord>>() {
        Ok(users) => {
            debug!("Loaded {} users from {url}", users.len());
            LoadResult::loaded(users)
        }
        Err(err) => {
            warn!("Users endpoint {url} returned an unreadable body: {err}");
            LoadResult::failed(FAILURE_STATUS)
        }
    }
}
