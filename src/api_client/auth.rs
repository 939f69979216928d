use serde::{Deserialize, Serialize};

use super::{post_public_json, ApiError};
use crate::session;

#[derive(Debug, Serialize)]
struct EmailLeadRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct EmailLeadResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Register a waitlist email. Unauthenticated.
pub async fn create_email_lead(email: &str) -> Result<EmailLeadResponse, ApiError> {
    log::trace!("Submitting waitlist email");
    post_public_json("/auth/create-email-lead/", &EmailLeadRequest { email }).await
}

#[derive(Debug, Serialize)]
struct CredentialsRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Exchange credentials for tokens and persist them.
pub async fn login(email: &str, password: &str) -> Result<(), ApiError> {
    let tokens: TokenResponse =
        post_public_json("/auth/login/", &CredentialsRequest { email, password }).await?;
    session::store_tokens(&tokens.access, tokens.refresh.as_deref());
    log::info!("Login succeeded");
    Ok(())
}

/// Create an account; the API logs the user straight in.
pub async fn signup(email: &str, password: &str) -> Result<(), ApiError> {
    let tokens: TokenResponse =
        post_public_json("/auth/signup/", &CredentialsRequest { email, password }).await?;
    session::store_tokens(&tokens.access, tokens.refresh.as_deref());
    log::info!("Signup succeeded");
    Ok(())
}
