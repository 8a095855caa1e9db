//! Core library for the AgroSmart farm management client.
//!
//! Provides the REST [`ApiClient`] with bearer authentication and the
//! refresh-and-retry protocol, the persisted [`SessionStore`], typed models
//! for every farm resource, and configuration loading.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod validation;

pub use api::{ApiClient, ApiError, CrudApi, RefreshPolicy, Resource};
pub use auth::{AuthState, SessionStore};
pub use config::Config;
