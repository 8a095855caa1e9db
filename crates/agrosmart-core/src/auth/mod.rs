//! Authentication module for managing persisted sessions.
//!
//! This module provides:
//! - `SessionStore`: access/refresh tokens and identity, with an
//!   authentication-state signal for the routing layer
//! - `KeyValueStore` backends: in-memory, JSON file, and OS keychain
//! - `decode_claims`: best-effort decoding of the access token payload

pub mod claims;
pub mod credentials;
pub mod session;
pub mod store;

pub use claims::{decode_claims, TokenClaims};
pub use credentials::KeyringStore;
pub use session::{AuthState, SessionStore, AUTH_REFRESH_TOKEN_KEY, AUTH_TOKEN_KEY, AUTH_USER_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};
