//! REST API client module for the AgroSmart backend.
//!
//! This module provides the `ApiClient` for authenticating and for the
//! farm-scoped CRUD endpoints under `/api/farm/{farmId}/...`.
//!
//! The API uses JWT bearer token authentication. Expired access tokens are
//! renewed through `/api/auth/refresh` transparently, once per request.

pub mod auth;
pub mod client;
pub mod crud;
pub mod dashboard;
pub mod error;

pub use client::{ApiClient, RefreshPolicy, Result};
pub use crud::{CrudApi, ListShape, Paginated, Resource, Simple};
pub use dashboard::FarmSummary;
pub use error::{ApiError, ServerMessage};
