//! Desktop session persistence using the OS keyring.

use jot_core::auth::{AuthError, AuthResult, SessionPersistence};
use keyring::Entry;

const KEYRING_SERVICE_NAME: &str = "jot";
const KEYRING_TOKEN_USERNAME: &str = "api_token";

/// Desktop session store backed by the OS keyring (`keyring` crate).
///
/// Holds the single bearer token issued at sign-in under a fixed entry.
#[derive(Debug, Clone)]
pub struct KeyringSessionStore {
    service_name: String,
    username: String,
}

impl Default for KeyringSessionStore {
    fn default() -> Self {
        Self {
            service_name: KEYRING_SERVICE_NAME.to_string(),
            username: KEYRING_TOKEN_USERNAME.to_string(),
        }
    }
}

impl KeyringSessionStore {
    fn entry(&self) -> AuthResult<Entry> {
        Entry::new(&self.service_name, &self.username)
            .map_err(|error| AuthError::SecureStorage(error.to_string()))
    }
}

impl SessionPersistence for KeyringSessionStore {
    fn load_token(&self) -> AuthResult<Option<String>> {
        let entry = self.entry()?;
        match entry.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(error) => Err(AuthError::SecureStorage(error.to_string())),
        }
    }

    fn save_token(&self, token: &str) -> AuthResult<()> {
        self.entry()?
            .set_password(token)
            .map_err(|error| AuthError::SecureStorage(error.to_string()))
    }

    fn clear_token(&self) -> AuthResult<()> {
        let entry = self.entry()?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(error) => Err(AuthError::SecureStorage(error.to_string())),
        }
    }
}
