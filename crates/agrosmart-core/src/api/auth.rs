//! Authentication endpoints.
//!
//! None of these go through the interceptor pipeline: they never carry a
//! bearer header and a 401 here never triggers a refresh.

use tracing::{info, instrument, warn};

use super::client::{ApiClient, Result};
use super::ApiError;
use crate::models::{AuthResponse, LoginRequest, RefreshRequest, RegisterRequest};

const LOGIN_PATH: &str = "/api/auth/login";
const REGISTER_PATH: &str = "/api/auth/register";
const REFRESH_PATH: &str = "/api/auth/refresh";

impl ApiClient {
    /// Authenticate and persist the resulting session.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        request.validate()?;
        info!("Logging in");

        let auth: AuthResponse = self
            .send_unauthenticated(LOGIN_PATH, request)
            .await
            .inspect_err(|e| warn!(error = %e, "Login failed"))?;

        self.persist(&auth)?;
        Ok(auth)
    }

    /// Create an account with its farm and persist the resulting session.
    #[instrument(skip(self, request), fields(email = %request.email, farm = %request.farm.name))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        request.validate()?;
        info!("Registering account");

        let auth: AuthResponse = self
            .send_unauthenticated(REGISTER_PATH, request)
            .await
            .inspect_err(|e| warn!(error = %e, code = ?e.code(), "Registration failed"))?;

        self.persist(&auth)?;
        Ok(auth)
    }

    /// Exchange a refresh token for a new access token. Does not touch the
    /// session store; the caller decides what to persist.
    pub async fn refresh_session(&self, refresh_token: &str) -> Result<AuthResponse> {
        let body = RefreshRequest {
            refresh_token: refresh_token.to_string(),
        };
        self.send_unauthenticated(REFRESH_PATH, &body).await
    }

    /// Forget the current session. Purely local.
    pub fn logout(&self) -> Result<()> {
        info!("Logging out");
        self.session()
            .clear()
            .map_err(|e| ApiError::Storage(format!("{:#}", e)))
    }

    fn persist(&self, auth: &AuthResponse) -> Result<()> {
        self.session()
            .save(auth)
            .map_err(|e| ApiError::Storage(format!("{:#}", e)))
    }
}
