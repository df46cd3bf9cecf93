//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::db::ConnectionOptions;
use crate::domain::search::MemberSearchCondition;

fn default_page_size() -> usize {
    20
}

#[derive(Clone, Debug, Deserialize)]
/// Settings consumed by the `member-query` runner.
pub struct AppConfig {
    pub database_url: String,
    #[serde(default)]
    pub store: ConnectionOptions,
    /// Populate an empty database with the sample teams and members.
    #[serde(default)]
    pub seed_sample_data: bool,
    /// Zero-based page to print.
    #[serde(default)]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub search: MemberSearchCondition,
}

/// `APP_`-prefixed environment variables, with `__` separating nested keys
/// (`APP_STORE__MAX_POOL_SIZE`, `APP_SEARCH__TEAM_NAME`).
#[cfg(feature = "cli")]
pub fn environment_overrides() -> config::Environment {
    config::Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
}
