//! Subcommand implementations.

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod resource;

use anyhow::{Context, Result};

use agrosmart_core::{Config, SessionStore};

/// Farm to operate on: `--farm`, then the configured default, then the first
/// farm in the access token.
pub fn resolve_farm(explicit: Option<i64>, config: &Config, session: &SessionStore) -> Result<i64> {
    explicit
        .or(config.default_farm_id)
        .or_else(|| session.farm_id())
        .context("No farm selected. Pass --farm <ID> or run 'agrosmart login' first.")
}
