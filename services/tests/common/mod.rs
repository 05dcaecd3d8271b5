//! Shared test utilities for integration tests.
//!
//! - `StaticUserSource`: a `UserSource` that returns a fixed `LoadResult`
//! - helpers to build users and the test app

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use roster_business::{LoadResult, UserRecord, UserSource};
use roster_services::{config::Config, routes};

/// In-memory user source that counts how often it was asked to load.
#[allow(dead_code)]
#[derive(Clone)]
pub struct StaticUserSource {
    result: LoadResult,
    loads: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl StaticUserSource {
    pub fn with_users(count: i64) -> Self {
        Self::new(LoadResult::loaded(sample_users(count)))
    }

    pub fn failing(status_code: u16) -> Self {
        Self::new(LoadResult::failed(status_code))
    }

    fn new(result: LoadResult) -> Self {
        Self {
            result,
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl UserSource for StaticUserSource {
    async fn load(&self) -> LoadResult {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// Users with ids `0..count`, so a row's id equals its index in the list.
pub fn sample_users(count: i64) -> Vec<UserRecord> {
    (0..count)
        .map(|id| UserRecord {
            id,
            firstname: format!("Имя{id}"),
            lastname: format!("Фамилия{id}"),
            email: format!("user{id}@example.com"),
            phone: format!("+7-900-{id:04}"),
            updated_at: "2023-05-01T10:00:00Z".to_owned(),
        })
        .collect()
}

/// Create the test app router with default test configuration.
#[allow(dead_code)]
pub async fn create_test_app(source: StaticUserSource) -> axum::Router {
    routes(source, Config::new_for_test()).await
}

/// Number of body rows in a rendered users page.
#[allow(dead_code)]
pub fn body_rows(html: &str) -> usize {
    html.split("<tbody>")
        .nth(1)
        .and_then(|rest| rest.split("</tbody>").next())
        .map(|body| body.matches("<tr>").count())
        .unwrap_or(0)
}

/// Ids shown in the id column of a rendered users page.
#[allow(dead_code)]
pub fn visible_ids(html: &str) -> Vec<i64> {
    html.split("<tr><td>")
        .skip(1)
        .filter_map(|rest| rest.split("</td>").next())
        .filter_map(|id| id.parse().ok())
        .collect()
}
