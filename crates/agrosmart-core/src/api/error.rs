use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Cannot reach server: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Unauthorized - token may be expired")]
    Unauthorized(ServerMessage),

    #[error("Access denied: {0}")]
    AccessDenied(ServerMessage),

    #[error("Session expired: {0}")]
    SessionExpired(Box<ApiError>),

    #[error("Resource not found: {0}")]
    NotFound(ServerMessage),

    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: ServerMessage },

    #[error("Rate limited - please wait before retrying")]
    RateLimited,

    #[error("Server error ({0}): {1}")]
    ServerError(u16, ServerMessage),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Session storage failed: {0}")]
    Storage(String),
}

/// Error payload as sent by the server, with the raw body as fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerMessage {
    pub code: Option<String>,
    pub message: Option<String>,
    pub body: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl ServerMessage {
    fn parse(body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorBody>(body).ok();
        let (code, message) = match parsed {
            Some(b) => (b.code, b.message.or(b.error)),
            None => (None, None),
        };
        Self {
            code,
            message,
            body: ApiError::truncate_body(body),
        }
    }
}

impl std::fmt::Display for ServerMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.code, &self.message) {
            (Some(code), Some(message)) => write!(f, "{} ({})", message, code),
            (None, Some(message)) => write!(f, "{}", message),
            (Some(code), None) => write!(f, "{}", code),
            (None, None) if self.body.is_empty() => write!(f, "no details"),
            (None, None) => write!(f, "{}", self.body),
        }
    }
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let mut end = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
        }
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let message = ServerMessage::parse(body);
        match status.as_u16() {
            401 => ApiError::Unauthorized(message),
            403 => ApiError::AccessDenied(message),
            404 => ApiError::NotFound(message),
            429 => ApiError::RateLimited,
            500..=599 => ApiError::ServerError(status.as_u16(), message),
            400..=499 => ApiError::Rejected {
                status: status.as_u16(),
                message,
            },
            _ => ApiError::InvalidResponse(format!("Status {}: {}", status, message.body)),
        }
    }

    /// True for the statuses that start the refresh protocol.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_) | ApiError::AccessDenied(_))
    }

    /// HTTP status behind this error, when there was a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(401),
            ApiError::AccessDenied(_) => Some(403),
            ApiError::NotFound(_) => Some(404),
            ApiError::RateLimited => Some(429),
            ApiError::Rejected { status, .. } => Some(*status),
            ApiError::ServerError(status, _) => Some(*status),
            ApiError::SessionExpired(inner) => inner.status(),
            _ => None,
        }
    }

    /// Server-supplied error code such as `USER_ALREADY_EXISTS`.
    pub fn code(&self) -> Option<&str> {
        self.server_message().and_then(|m| m.code.as_deref())
    }

    pub fn server_message(&self) -> Option<&ServerMessage> {
        match self {
            ApiError::Unauthorized(m)
            | ApiError::AccessDenied(m)
            | ApiError::NotFound(m)
            | ApiError::ServerError(_, m)
            | ApiError::Rejected { message: m, .. } => Some(m),
            ApiError::SessionExpired(inner) => inner.server_message(),
            _ => None,
        }
    }

    /// The caller should send the user back to login.
    pub fn requires_login(&self) -> bool {
        matches!(self, ApiError::SessionExpired(_)) || self.is_auth_failure()
    }
}
