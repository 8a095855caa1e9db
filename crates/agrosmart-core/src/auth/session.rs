use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::watch;
use tracing::{debug, info};

use super::claims::decode_claims;
use super::store::{KeyValueStore, MemoryStore};
use crate::models::{AuthResponse, UserProfile};

pub const AUTH_TOKEN_KEY: &str = "agrosmart_token";
pub const AUTH_REFRESH_TOKEN_KEY: &str = "agrosmart_refresh_token";
pub const AUTH_USER_KEY: &str = "agrosmart_user";

/// Every key written by [`SessionStore::save`].
const CREDENTIAL_KEYS: [&str; 3] = [AUTH_TOKEN_KEY, AUTH_REFRESH_TOKEN_KEY, AUTH_USER_KEY];

/// Whether a session is present, as observed by the routing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Authenticated,
    SignedOut,
}

/// Persisted credentials for the current user.
///
/// Cheap to clone; clones share the backend and the state signal. The store
/// does no locking of its own, so concurrent writes are last-write-wins.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn KeyValueStore>,
    state: Arc<watch::Sender<AuthState>>,
}

impl SessionStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        let initial = if backend.get(AUTH_TOKEN_KEY).is_some() {
            AuthState::Authenticated
        } else {
            AuthState::SignedOut
        };
        let (state, _) = watch::channel(initial);
        Self {
            backend: Arc::new(backend),
            state: Arc::new(state),
        }
    }

    /// An ephemeral store, mostly for tests.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Persist a login, registration or refresh response, replacing whatever
    /// was stored before.
    pub fn save(&self, auth: &AuthResponse) -> Result<()> {
        for key in CREDENTIAL_KEYS {
            self.backend.remove(key)?;
        }

        self.backend
            .set(AUTH_TOKEN_KEY, &auth.token)
            .context("Failed to save access token")?;
        if let Some(ref refresh_token) = auth.refresh_token {
            self.backend
                .set(AUTH_REFRESH_TOKEN_KEY, refresh_token)
                .context("Failed to save refresh token")?;
        }
        if let Some(ref user) = auth.user {
            let json = serde_json::to_string(user)?;
            self.backend
                .set(AUTH_USER_KEY, &json)
                .context("Failed to save user profile")?;
        }

        debug!(
            has_refresh_token = auth.refresh_token.is_some(),
            has_user = auth.user.is_some(),
            "Session saved"
        );
        self.state.send_replace(AuthState::Authenticated);
        Ok(())
    }

    /// Replace the access token after a refresh. The refresh token is only
    /// replaced when the server rotated it.
    pub fn update_tokens(&self, token: &str, rotated_refresh_token: Option<&str>) -> Result<()> {
        self.backend
            .set(AUTH_TOKEN_KEY, token)
            .context("Failed to save access token")?;
        if let Some(refresh_token) = rotated_refresh_token {
            self.backend
                .set(AUTH_REFRESH_TOKEN_KEY, refresh_token)
                .context("Failed to save refresh token")?;
        }
        self.state.send_replace(AuthState::Authenticated);
        Ok(())
    }

    pub fn token(&self) -> Option<String> {
        self.backend.get(AUTH_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.backend.get(AUTH_REFRESH_TOKEN_KEY)
    }

    /// Stored identity, if the server sent one at login.
    pub fn user(&self) -> Option<UserProfile> {
        let json = self.backend.get(AUTH_USER_KEY)?;
        match serde_json::from_str(&json) {
            Ok(user) => Some(user),
            Err(e) => {
                debug!(error = %e, "Ignoring unparsable stored user");
                None
            }
        }
    }

    /// Remove every credential key. Safe to call when already signed out.
    pub fn clear(&self) -> Result<()> {
        for key in CREDENTIAL_KEYS {
            self.backend.remove(key)?;
        }
        if self.state.send_replace(AuthState::SignedOut) == AuthState::Authenticated {
            info!("Session cleared");
        }
        Ok(())
    }

    /// True iff an access token key is present. Expiry is not checked.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// First farm listed in the access token payload.
    pub fn farm_id(&self) -> Option<i64> {
        let token = self.token()?;
        decode_claims(&token)?.first_farm_id()
    }

    /// Watch for sign-in and sign-out. The value flips to
    /// [`AuthState::SignedOut`] whenever the session is cleared.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> AuthState {
        *self.state.borrow()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.state())
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}
