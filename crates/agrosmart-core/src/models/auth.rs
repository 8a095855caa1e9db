//! Authentication request and response payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validation::{self, Result};

/// Minimum password length accepted by the login and registration forms.
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validation::email(&self.email)?;
        validation::min_len("Password", &self.password, MIN_PASSWORD_LEN)
    }
}

// Hide password in Debug output
impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub dni: String,
    pub name: String,
    pub last_name: String,
    pub farm: FarmRequest,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<()> {
        validation::email(&self.email)?;
        validation::min_len("Password", &self.password, MIN_PASSWORD_LEN)?;
        validation::min_len("DNI", &self.dni, 3)?;
        validation::min_len("Name", &self.name, 2)?;
        validation::min_len("Last name", &self.last_name, 2)?;
        validation::min_len("Farm name", &self.farm.name, 2)?;
        validation::min_len("Farm location", &self.farm.location, 2)
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("dni", &self.dni)
            .field("name", &self.name)
            .field("last_name", &self.last_name)
            .field("farm", &self.farm)
            .finish()
    }
}

/// Farm created together with the account at registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FarmRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Response to login, registration and refresh.
///
/// Refresh-capable deployments send `refreshToken`; older ones send the
/// decoded `user` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

impl AuthResponse {
    pub fn new(token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            refresh_token: Some(refresh_token.into()),
            user: None,
        }
    }
}

/// Identity of the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub id: Option<i64>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub dni: Option<String>,
    pub farms: Vec<FarmClaim>,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        let parts: Vec<&str> = [self.name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        parts.join(" ")
    }
}

/// Farm reference as carried in tokens and user profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmClaim {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
}
