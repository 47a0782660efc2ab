//! Authentication credentials for the storage service.
//!
//! Credentials are a plain value: access key, secret key, and an optional
//! session token for temporary credentials. The environment lookup reads
//! the service-specific `S3_ACCESS_KEY` / `S3_SECRET_KEY` variables.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result, TRACING_TARGET_CREDENTIALS};

/// Environment variable holding the access key.
pub const ENV_ACCESS_KEY: &str = "S3_ACCESS_KEY";
/// Environment variable holding the secret key.
pub const ENV_SECRET_KEY: &str = "S3_SECRET_KEY";

/// Authentication credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Access key for authentication.
    pub access_key: String,

    /// Secret key for authentication.
    /// Never serialized; use [`Credentials::access_key_masked`] for logs.
    #[serde(skip_serializing)]
    pub secret_key: String,

    /// Optional session token for temporary credentials.
    pub session_token: Option<String>,
}

impl Credentials {
    /// Creates credentials from an access key and secret key.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            session_token: None,
        }
    }

    /// Creates temporary credentials carrying a session token.
    pub fn with_session_token(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        session_token: impl Into<String>,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            session_token: Some(session_token.into()),
        }
    }

    /// Reads credentials from the `S3_ACCESS_KEY` / `S3_SECRET_KEY`
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Fails with a configuration error naming the first missing
    /// variable.
    pub fn from_env() -> Result<Self> {
        let credentials = Self::from_lookup(|name| std::env::var(name).ok())?;
        debug!(
            target: TRACING_TARGET_CREDENTIALS,
            access_key = %credentials.access_key_masked(),
            "Loaded credentials from environment"
        );
        Ok(credentials)
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let access_key = get(ENV_ACCESS_KEY).ok_or_else(|| {
            Error::Config(format!("Missing environment variable `{ENV_ACCESS_KEY}`"))
        })?;
        let secret_key = get(ENV_SECRET_KEY).ok_or_else(|| {
            Error::Config(format!("Missing environment variable `{ENV_SECRET_KEY}`"))
        })?;
        Ok(Self::new(access_key, secret_key))
    }

    /// Returns the access key.
    #[inline]
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Returns the secret key.
    #[inline]
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Returns the session token if available.
    #[inline]
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    /// Returns a masked version of the access key for logging.
    ///
    /// This shows only the first 4 characters followed by asterisks.
    pub fn access_key_masked(&self) -> String {
        if self.access_key.len() <= 4 {
            "*".repeat(self.access_key.len())
        } else {
            format!("{}***", &self.access_key[..4])
        }
    }
}
