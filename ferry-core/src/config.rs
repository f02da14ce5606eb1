//! Store configuration and environment-sourced credentials.
//!
//! Credentials are read once at job start and passed down explicitly; no
//! component reads the environment after construction.

use crate::error::ConfigError;

/// Environment variable holding the access key id.
pub const ACCESS_KEY_VAR: &str = "AWS_ACCESS_KEY_ID";
/// Environment variable holding the secret access key.
pub const SECRET_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";

/// Static access key pair for the object store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl AwsCredentials {
    /// Build credentials from explicit values.
    ///
    /// A missing value is a [`ConfigError::MissingVar`] naming the variable
    /// the caller should have set. Tests use this form; [`from_env`] is the
    /// thin process-environment wrapper.
    ///
    /// [`from_env`]: AwsCredentials::from_env
    pub fn from_vars(
        access_key_id: Option<String>,
        secret_access_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let access_key_id = access_key_id.ok_or(ConfigError::MissingVar {
            name: ACCESS_KEY_VAR,
        })?;
        let secret_access_key = secret_access_key.ok_or(ConfigError::MissingVar {
            name: SECRET_KEY_VAR,
        })?;
        Ok(Self {
            access_key_id,
            secret_access_key,
        })
    }

    /// Read `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY` from the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var(ACCESS_KEY_VAR).ok(),
            std::env::var(SECRET_KEY_VAR).ok(),
        )
    }
}

/// Everything needed to open a bucket client.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub bucket: String,
    pub region: String,
    /// Custom endpoint for S3-compatible stores; `None` for AWS proper.
    pub endpoint: Option<String>,
    pub credentials: AwsCredentials,
}
