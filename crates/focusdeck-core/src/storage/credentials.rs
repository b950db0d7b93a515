//! Signed-in session credentials.
//!
//! Identity lives in its own blob slot, separate from the app state;
//! the opaque provider token goes into the OS keyring so it never lands
//! in the snapshot JSON.

use serde::{Deserialize, Serialize};

use super::blob::{BlobStore, SLOT_AUTH_SESSION};
use crate::error::{AuthError, Result};

const KEYRING_SERVICE: &str = "focusdeck";
const TOKEN_KEY: &str = "provider_token";

/// The authenticated user identity gating protected routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub user_id: String,
    pub display_name: String,
    pub email: Option<String>,
    /// Identity provider name, e.g. "google".
    pub provider: String,
}

/// Persist the identity blob and the provider token.
pub fn save_session(blob: &BlobStore, session: &AuthSession, token: &str) -> Result<()> {
    let json = serde_json::to_string(session)?;
    blob.set(SLOT_AUTH_SESSION, &json)?;
    set_token(token)?;
    Ok(())
}

/// Load the signed-in identity, if any.
pub fn load_session(blob: &BlobStore) -> Result<Option<AuthSession>> {
    match blob.get(SLOT_AUTH_SESSION)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Sign out: drop both the identity blob and the stored token.
pub fn clear_session(blob: &BlobStore) -> Result<()> {
    blob.delete(SLOT_AUTH_SESSION)?;
    let entry = keyring::Entry::new(KEYRING_SERVICE, TOKEN_KEY).map_err(AuthError::from)?;
    match entry.delete_credential() {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => Err(AuthError::from(e).into()),
    }
}

/// Read the provider token from the OS keyring.
pub fn token() -> Result<String> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, TOKEN_KEY).map_err(AuthError::from)?;
    match entry.get_password() {
        Ok(pw) => Ok(pw),
        Err(keyring::Error::NoEntry) => Err(AuthError::MissingToken {
            provider: "any".to_string(),
        }
        .into()),
        Err(e) => Err(AuthError::from(e).into()),
    }
}

fn set_token(token: &str) -> Result<()> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, TOKEN_KEY).map_err(AuthError::from)?;
    entry.set_password(token).map_err(AuthError::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_blob_roundtrip() {
        let blob = BlobStore::open_memory().unwrap();
        assert!(load_session(&blob).unwrap().is_none());

        let session = AuthSession {
            user_id: "u-1".to_string(),
            display_name: "Dana".to_string(),
            email: Some("dana@example.com".to_string()),
            provider: "google".to_string(),
        };
        // Exercise only the blob half here; the keyring half depends on
        // the host OS credential service.
        let json = serde_json::to_string(&session).unwrap();
        blob.set(SLOT_AUTH_SESSION, &json).unwrap();

        let loaded = load_session(&blob).unwrap().unwrap();
        assert_eq!(loaded.user_id, "u-1");
        assert_eq!(loaded.provider, "google");

        blob.delete(SLOT_AUTH_SESSION).unwrap();
        assert!(load_session(&blob).unwrap().is_none());
    }
}
