//! API client for communicating with the AgroSmart REST API.
//!
//! Every farm request goes through [`ApiClient::execute`], which attaches the
//! bearer token from the session and, on a 401/403, refreshes the session
//! once and retries the request once.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::ApiError;
use crate::auth::SessionStore;
use crate::config::Config;

pub type Result<T> = std::result::Result<T, ApiError>;

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Header that tells the tunnel in front of the API to skip its
/// browser-warning interstitial.
const TUNNEL_WARNING_HEADER: &str = "ngrok-skip-browser-warning";

/// How the client reacts to an authentication failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefreshPolicy {
    /// Refresh the session once and retry the request once.
    #[default]
    Refresh,
    /// Clear the session on any 401 without retrying.
    ClearOnUnauthorized,
}

/// A request relative to the API base address.
#[derive(Debug, Clone)]
pub(crate) struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
    /// Set once the request has been re-sent after a refresh.
    pub retried: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            retried: false,
        }
    }

    pub fn query(mut self, query: Vec<(&'static str, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::Validation(format!("Cannot encode request body: {}", e)))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// API client for AgroSmart.
/// Clone is cheap - all clones share one connection pool, session and
/// refresh lock.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: Client,
    base_url: String,
    session: SessionStore,
    policy: RefreshPolicy,
    /// Serializes refresh attempts so concurrent 401s share one refresh call.
    refresh_lock: Mutex<()>,
}

impl ApiClient {
    /// Create a client with the default timeout and refresh policy.
    pub fn new(base_url: &str, session: SessionStore) -> Result<Self> {
        Self::with_options(
            base_url,
            session,
            RefreshPolicy::default(),
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        )
    }

    pub fn from_config(config: &Config, session: SessionStore) -> Result<Self> {
        Self::with_options(
            &config.api_base_url,
            session,
            config.refresh_policy,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn with_options(
        base_url: &str,
        session: SessionStore,
        policy: RefreshPolicy,
        timeout: Duration,
    ) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            TUNNEL_WARNING_HEADER,
            header::HeaderValue::from_static("true"),
        );

        let http = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url: base_url.trim_end_matches('/').to_string(),
                session,
                policy,
                refresh_lock: Mutex::new(()),
            }),
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub fn policy(&self) -> RefreshPolicy {
        self.inner.policy
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }

    /// Send one request as-is. `token` is attached as a bearer credential
    /// when present and non-empty.
    async fn dispatch(&self, request: &ApiRequest, token: Option<&str>) -> Result<Response> {
        let url = self.url(&request.path);
        debug!(method = %request.method, url = %url, retried = request.retried, "Sending request");

        let mut builder = self.inner.http.request(request.method.clone(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            builder = builder.bearer_auth(token);
        }

        Ok(builder.send().await?)
    }

    /// Check if response is successful, returning an error with body if not.
    pub(crate) async fn check_response(response: Response) -> Result<Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    /// Read and parse a JSON response body.
    pub(crate) async fn decode<T: DeserializeOwned>(response: Response, path: &str) -> Result<T> {
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse JSON response from {}: {}", path, e))
        })
    }

    /// Send a request outside the interceptor pipeline: no bearer header and
    /// no refresh handling. Used by the auth endpoints.
    pub(crate) async fn send_unauthenticated<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::new(Method::POST, path).json(body)?;
        let response = self.dispatch(&request, None).await?;
        let response = Self::check_response(response).await?;
        Self::decode(response, path).await
    }

    /// Send an authenticated request, running the refresh-and-retry protocol
    /// on authentication failures.
    pub(crate) async fn execute(&self, mut request: ApiRequest) -> Result<Response> {
        loop {
            let token = self.inner.session.token();
            let response = self.dispatch(&request, token.as_deref()).await?;

            let status = response.status();
            if status.is_success() {
                return Ok(response);
            }

            let body = response.text().await.unwrap_or_default();
            let error = ApiError::from_status(status, &body);

            if !error.is_auth_failure() || request.retried {
                return Err(error);
            }

            if self.inner.policy == RefreshPolicy::ClearOnUnauthorized {
                if status.as_u16() == 401 {
                    self.terminate_session("Unauthorized response");
                }
                return Err(error);
            }

            request.retried = true;
            self.recover(token.as_deref(), error).await?;
        }
    }

    /// Bring the session back after `failed_token` was rejected.
    ///
    /// Returns `Ok` when the request should be retried with the current token.
    async fn recover(&self, failed_token: Option<&str>, original: ApiError) -> Result<()> {
        let _guard = self.inner.refresh_lock.lock().await;
        let session = &self.inner.session;

        // Another request may have settled the session while we waited.
        let current = session.token();
        if current.as_deref() != failed_token {
            return match current {
                Some(_) => {
                    debug!("Token changed while waiting, retrying without refresh");
                    Ok(())
                }
                None => Err(original),
            };
        }

        let Some(refresh_token) = session.refresh_token() else {
            self.terminate_session("No refresh token available");
            return Err(original);
        };

        match self.refresh_session(&refresh_token).await {
            Ok(refreshed) => {
                session
                    .update_tokens(&refreshed.token, refreshed.refresh_token.as_deref())
                    .map_err(|e| ApiError::Storage(format!("{:#}", e)))?;
                info!(
                    rotated = refreshed.refresh_token.is_some(),
                    "Session refreshed"
                );
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Session refresh failed");
                self.terminate_session("Refresh failed");
                Err(ApiError::SessionExpired(Box::new(e)))
            }
        }
    }

    /// Clear the session after an unrecoverable auth failure. The session
    /// store signals sign-out to its subscribers.
    fn terminate_session(&self, reason: &str) {
        warn!(reason = reason, "Terminating session");
        if let Err(e) = self.inner.session.clear() {
            warn!(error = %e, "Failed to clear session");
        }
    }

    // ===== JSON helpers =====

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(&'static str, String)>,
    ) -> Result<T> {
        let request = ApiRequest::new(Method::GET, path).query(query);
        let response = self.execute(request).await?;
        Self::decode(response, path).await
    }

    pub(crate) async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::new(method, path).json(body)?;
        let response = self.execute(request).await?;
        Self::decode(response, path).await
    }

    pub(crate) async fn delete_path(&self, path: &str) -> Result<()> {
        self.execute(ApiRequest::new(Method::DELETE, path)).await?;
        Ok(())
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .field("policy", &self.inner.policy)
            .field("session", &self.inner.session)
            .finish()
    }
}
