//! Auth service wiring the core client to the desktop session store.

use jot_core::auth::{AuthClient, AuthResult};
use jot_core::ClientConfig;

use super::session_store::KeyringSessionStore;

#[derive(Clone)]
pub struct AuthService {
    inner: AuthClient<KeyringSessionStore>,
}

impl AuthService {
    pub fn new(config: &ClientConfig) -> AuthResult<Self> {
        Ok(Self {
            inner: AuthClient::new(config, KeyringSessionStore::default())?,
        })
    }

    pub fn restore_session(&self) -> AuthResult<Option<String>> {
        self.inner.restore_session()
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> AuthResult<()> {
        self.inner.sign_up(email, password).await
    }

    pub async fn confirm_sign_up(&self, email: &str, confirmation_code: &str) -> AuthResult<()> {
        self.inner.confirm_sign_up(email, confirmation_code).await
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> AuthResult<String> {
        self.inner.sign_in(email, password).await
    }

    pub fn sign_out(&self) -> AuthResult<()> {
        self.inner.sign_out()
    }
}
