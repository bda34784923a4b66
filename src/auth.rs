//! Placeholder admin sign-in.
//!
//! The credential check runs entirely in the browser and the token it hands
//! out is a constant. Nothing here protects the blog API.

use thiserror::Error;

use crate::models::User;

pub const MOCK_TOKEN: &str = "mock-token";

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Sign in to manage blogs")]
    NotSignedIn,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

pub fn sign_in(credentials: &Credentials) -> Result<User, AuthError> {
    if credentials.username.trim().is_empty() {
        return Err(AuthError::MissingField("Username"));
    }
    if credentials.password.is_empty() {
        return Err(AuthError::MissingField("Password"));
    }
    if credentials.username != ADMIN_USERNAME || credentials.password != ADMIN_PASSWORD {
        log::warn!("Rejected sign-in for {}", credentials.username);
        return Err(AuthError::InvalidCredentials);
    }
    log::info!("Signed in as {}", credentials.username);
    Ok(User {
        username: credentials.username.clone(),
        email: None,
        token: Some(MOCK_TOKEN.to_string()),
    })
}

/// The stored token, if the admin has signed in on this browser.
pub fn require_token(stored: &str) -> Result<&str, AuthError> {
    if stored.is_empty() {
        Err(AuthError::NotSignedIn)
    } else {
        Ok(stored)
    }
}
