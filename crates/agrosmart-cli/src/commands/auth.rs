//! Login, registration and session status.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;

use agrosmart_core::auth::decode_claims;
use agrosmart_core::models::{FarmRequest, LoginRequest, RegisterRequest, UserProfile};
use agrosmart_core::{ApiClient, Config};

use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Password (prompted when omitted)
    #[arg(long, env = "AGROSMART_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub email: String,

    /// National identity document number
    #[arg(long)]
    pub dni: String,

    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub last_name: String,

    /// Name of the farm created with the account
    #[arg(long)]
    pub farm_name: String,

    #[arg(long, default_value = "")]
    pub farm_description: String,

    #[arg(long)]
    pub farm_location: String,

    /// Password (prompted twice when omitted)
    #[arg(long, env = "AGROSMART_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

fn prompt_password() -> Result<String> {
    let password = rpassword::prompt_password("Password: ")?;
    Ok(password)
}

fn prompt_new_password() -> Result<String> {
    let password = prompt_password()?;
    let confirm = rpassword::prompt_password("Confirm password: ")?;
    if password != confirm {
        bail!("Passwords do not match");
    }
    Ok(password)
}

fn print_user(user: &UserProfile) {
    let name = user.full_name();
    if !name.is_empty() {
        output::field("Name", &name);
    }
    if let Some(ref email) = user.email {
        output::field("Email", email);
    }
    for farm in &user.farms {
        let label = farm.name.as_deref().unwrap_or("(unnamed)");
        output::field("Farm", &format!("{} ({})", label, farm.id));
    }
}

pub async fn login(client: &ApiClient, args: LoginArgs) -> Result<()> {
    let password = match args.password {
        Some(p) => p,
        None => prompt_password()?,
    };

    output::hint("Logging in...");
    let auth = client
        .login(&LoginRequest::new(args.email.trim(), password))
        .await
        .context("Failed to login")?;

    output::success("Logged in successfully");
    if let Some(ref user) = auth.user {
        print_user(user);
    }
    if let Some(farm_id) = client.session().farm_id() {
        output::field("Farm", &farm_id.to_string());
    }
    Ok(())
}

pub async fn register(client: &ApiClient, args: RegisterArgs) -> Result<()> {
    let password = match args.password {
        Some(p) => p,
        None => prompt_new_password()?,
    };

    let request = RegisterRequest {
        email: args.email.trim().to_string(),
        password,
        dni: args.dni,
        name: args.name,
        last_name: args.last_name,
        farm: FarmRequest {
            name: args.farm_name,
            description: args.farm_description,
            location: args.farm_location,
        },
    };

    output::hint("Creating account...");
    let auth = client
        .register(&request)
        .await
        .context("Failed to register")?;

    output::success("Account created and signed in");
    if let Some(ref user) = auth.user {
        print_user(user);
    }
    Ok(())
}

pub fn logout(client: &ApiClient) -> Result<()> {
    client.logout().context("Failed to clear session")?;
    output::success("Logged out");
    Ok(())
}

pub fn status(client: &ApiClient, config: &Config) -> Result<()> {
    let session = client.session();

    output::field("API", client.base_url());
    output::field("Storage", &format!("{:?}", config.storage).to_lowercase());

    let Some(token) = session.token() else {
        output::field("Session", "signed out");
        return Ok(());
    };
    output::field("Session", "signed in");
    output::field(
        "Refresh token",
        if session.refresh_token().is_some() { "present" } else { "absent" },
    );

    if let Some(claims) = decode_claims(&token) {
        if let Some(ref subject) = claims.email.or(claims.sub) {
            output::field("Subject", subject);
        }
        if let Some(expires) = claims.exp.and_then(|exp| DateTime::<Utc>::from_timestamp(exp, 0)) {
            let state = if expires <= Utc::now() { " (expired)" } else { "" };
            output::field("Token expires", &format!("{}{}", expires.to_rfc3339(), state));
        }
    }
    if let Some(farm_id) = session.farm_id() {
        output::field("Farm", &farm_id.to_string());
    }
    if let Some(user) = session.user() {
        print_user(&user);
    }
    Ok(())
}
