use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use tracing::debug;

use crate::models::FarmClaim;

/// Claims read from the access token payload.
///
/// The signature is never checked here; the server does that. These values
/// only drive client-side defaults such as the current farm.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TokenClaims {
    pub sub: Option<String>,
    pub email: Option<String>,
    pub exp: Option<i64>,
    pub farms: Vec<FarmClaim>,
}

impl TokenClaims {
    pub fn first_farm_id(&self) -> Option<i64> {
        self.farms.first().map(|f| f.id)
    }
}

/// Decode the payload segment of a JWT. Returns `None` on any malformed input.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_)) => payload,
        _ => {
            debug!("Access token is not a three-segment JWT");
            return None;
        }
    };

    // Some issuers keep the padding; the URL-safe engine rejects it.
    let bytes = match URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(error = %e, "Failed to base64-decode token payload");
            return None;
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(claims) => Some(claims),
        Err(e) => {
            debug!(error = %e, "Failed to parse token payload");
            None
        }
    }
}

#[cfg(test)]
pub(crate) fn encode_test_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{}.{}.signature", header, body)
}
