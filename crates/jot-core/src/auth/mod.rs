//! Auth API client.
//!
//! Account creation, email confirmation, and sign-in against the notes
//! service. The client persists the issued bearer token through a
//! [`SessionPersistence`] implementation supplied by the embedding app.

use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::config::ClientConfig;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Auth API error: {0}")]
    Api(String),
    #[error("Authentication failed: the server did not return a token")]
    MissingToken,
    #[error("Secure storage error: {0}")]
    SecureStorage(String),
}

pub type AuthResult<T> = Result<T, AuthError>;

/// Durable storage for the bearer token issued at sign-in.
///
/// Implementations store exactly one token under a fixed key; `load` after
/// `clear` returns `None`.
pub trait SessionPersistence: Clone + Send + Sync + 'static {
    fn load_token(&self) -> AuthResult<Option<String>>;
    fn save_token(&self, token: &str) -> AuthResult<()>;
    fn clear_token(&self) -> AuthResult<()>;
}

#[derive(Clone)]
pub struct AuthClient<S: SessionPersistence> {
    base_url: String,
    client: Client,
    store: S,
}

impl<S: SessionPersistence> AuthClient<S> {
    pub fn new(config: &ClientConfig, store: S) -> AuthResult<Self> {
        Ok(Self {
            base_url: config.api_base_url.clone(),
            client: Client::builder().build()?,
            store,
        })
    }

    /// Read the persisted token, if any.
    ///
    /// A present token is treated as an authenticated session without a
    /// validation round-trip; staleness surfaces when a later call is
    /// rejected.
    pub fn restore_session(&self) -> AuthResult<Option<String>> {
        self.store.load_token()
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> AuthResult<()> {
        validate_credentials(email, password)?;

        let payload = serde_json::json!({
            "email": email,
            "password": password,
        });
        let response = self
            .client
            .post(format!("{}/signup", self.base_url))
            .json(&payload)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    pub async fn confirm_sign_up(&self, email: &str, confirmation_code: &str) -> AuthResult<()> {
        if email.trim().is_empty() {
            return Err(AuthError::Api("Email is required".to_string()));
        }
        if confirmation_code.trim().is_empty() {
            return Err(AuthError::Api("Confirmation code is required".to_string()));
        }

        let payload = serde_json::json!({
            "email": email,
            "confirmationCode": confirmation_code,
        });
        let response = self
            .client
            .post(format!("{}/confirm-signup", self.base_url))
            .json(&payload)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// Sign in and persist the issued token.
    ///
    /// A 2xx response without a token is a contract violation, reported as
    /// [`AuthError::MissingToken`] rather than an HTTP error.
    pub async fn sign_in(&self, email: &str, password: &str) -> AuthResult<String> {
        validate_credentials(email, password)?;

        let payload = serde_json::json!({
            "email": email,
            "password": password,
        });
        let response = self
            .client
            .post(format!("{}/signin", self.base_url))
            .json(&payload)
            .send()
            .await?;
        let response = check_status(response).await?;

        let token = response.json::<SignInResponse>().await?.into_token()?;
        self.store.save_token(&token)?;
        Ok(token)
    }

    /// Clear the persisted session.
    ///
    /// The API issues bearer tokens without a revocation endpoint, so signing
    /// out is a purely local operation.
    pub fn sign_out(&self) -> AuthResult<()> {
        self.store.clear_token()
    }
}

async fn check_status(response: Response) -> AuthResult<Response> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(AuthError::Api(parse_api_error(status, &body)));
    }
    Ok(response)
}

fn validate_credentials(email: &str, password: &str) -> AuthResult<()> {
    if email.trim().is_empty() {
        return Err(AuthError::Api("Email is required".to_string()));
    }
    if password.trim().is_empty() {
        return Err(AuthError::Api("Password is required".to_string()));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct SignInResponse {
    #[serde(rename = "IdToken")]
    id_token: Option<String>,
}

impl SignInResponse {
    fn into_token(self) -> AuthResult<String> {
        self.id_token
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    message: Option<String>,
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ApiErrorResponse>(body) {
        if let Some(message) = payload.message {
            return format!("{} ({})", message.trim(), status.as_u16());
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", trimmed, status.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_response_yields_token() {
        let response: SignInResponse = serde_json::from_str(r#"{"IdToken": "tok1"}"#).unwrap();
        assert_eq!(response.into_token().unwrap(), "tok1");
    }

    #[test]
    fn sign_in_response_without_token_is_a_contract_violation() {
        let response: SignInResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            response.into_token(),
            Err(AuthError::MissingToken)
        ));

        let response: SignInResponse = serde_json::from_str(r#"{"IdToken": "  "}"#).unwrap();
        assert!(matches!(
            response.into_token(),
            Err(AuthError::MissingToken)
        ));
    }

    #[test]
    fn parse_api_error_prefers_server_message() {
        let rendered = parse_api_error(
            StatusCode::CONFLICT,
            r#"{"message": "An account with this email already exists"}"#,
        );
        assert_eq!(rendered, "An account with this email already exists (409)");
    }

    #[test]
    fn parse_api_error_falls_back_without_parsable_body() {
        assert_eq!(
            parse_api_error(StatusCode::INTERNAL_SERVER_ERROR, ""),
            "HTTP 500"
        );
        assert_eq!(
            parse_api_error(StatusCode::BAD_GATEWAY, "<html>upstream</html>"),
            "<html>upstream</html> (502)"
        );
    }

    #[test]
    fn validate_credentials_rejects_blank_input() {
        assert!(validate_credentials("", "secret").is_err());
        assert!(validate_credentials("a@b.com", "  ").is_err());
        assert!(validate_credentials("a@b.com", "secret").is_ok());
    }
}
