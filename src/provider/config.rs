//! src/provider/config.rs
//! Provider selection — serde or environment variables

use crate::builders::SaltedHashBuilder;
use crate::consts::{DEFAULT_HASH_SIZE, DEFAULT_PBKDF2_ITERATIONS, DEFAULT_RANDOM_SALT_LEN};
use crate::error::PasscryptError;
use crate::provider::{AesEncryptionProvider, EncryptionProvider, NoOpEncryptionProvider};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::{info, warn};

/// Environment variable names read by [`ProviderConfig::from_env`].
pub const ENV_PROVIDER: &str = "PASSCRYPT_PROVIDER";
pub const ENV_ITERATIONS: &str = "PASSCRYPT_PBKDF2_ITERATIONS";
pub const ENV_RANDOM_SALT_LEN: &str = "PASSCRYPT_RANDOM_SALT_LEN";
pub const ENV_HASH_SIZE: &str = "PASSCRYPT_HASH_SIZE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Aes,
    Noop,
}

impl FromStr for ProviderKind {
    type Err = PasscryptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aes" => Ok(ProviderKind::Aes),
            "noop" | "none" | "disabled" => Ok(ProviderKind::Noop),
            other => Err(PasscryptError::Configuration(format!(
                "unknown provider kind: {other}"
            ))),
        }
    }
}

/// Which provider to construct and how the hasher is parameterised.
///
/// Missing fields take their defaults, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub iterations: u32,
    pub random_salt_len: usize,
    pub hash_size: usize,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::Aes,
            iterations: DEFAULT_PBKDF2_ITERATIONS,
            random_salt_len: DEFAULT_RANDOM_SALT_LEN,
            hash_size: DEFAULT_HASH_SIZE,
        }
    }
}

impl ProviderConfig {
    /// Read the `PASSCRYPT_*` environment variables; unset ones keep their defaults.
    pub fn from_env() -> Result<Self, PasscryptError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a caller-supplied lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PasscryptError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(kind) = lookup(ENV_PROVIDER) {
            config.kind = kind.parse()?;
        }
        if let Some(iterations) = lookup(ENV_ITERATIONS) {
            config.iterations = parse_number(ENV_ITERATIONS, &iterations)?;
        }
        if let Some(len) = lookup(ENV_RANDOM_SALT_LEN) {
            config.random_salt_len = parse_number(ENV_RANDOM_SALT_LEN, &len)?;
        }
        if let Some(size) = lookup(ENV_HASH_SIZE) {
            config.hash_size = parse_number(ENV_HASH_SIZE, &size)?;
        }

        Ok(config)
    }

    /// Validated hasher configuration.
    pub fn hash_params(&self) -> Result<SaltedHashBuilder, PasscryptError> {
        SaltedHashBuilder::try_from_parts(self.random_salt_len, self.iterations, self.hash_size)
    }

    /// Construct the configured provider.
    ///
    /// # Errors
    ///
    /// [`PasscryptError::Configuration`] if the hasher parameters are out of range.
    /// Checked for both kinds.
    pub fn build(&self) -> Result<Box<dyn EncryptionProvider>, PasscryptError> {
        let hash_params = self.hash_params()?;

        match self.kind {
            ProviderKind::Aes => {
                info!(
                    iterations = hash_params.iterations(),
                    hash_size = hash_params.hash_size(),
                    random_salt_len = hash_params.random_salt_len(),
                    "using AES encryption provider"
                );
                Ok(Box::new(AesEncryptionProvider::new(hash_params)))
            }
            ProviderKind::Noop => {
                warn!("using no-op encryption provider: values are stored in plain text");
                Ok(Box::new(NoOpEncryptionProvider))
            }
        }
    }
}

fn parse_number<T: FromStr>(name: &str, value: &str) -> Result<T, PasscryptError> {
    value
        .trim()
        .parse()
        .map_err(|_| PasscryptError::Configuration(format!("{name} is not a valid number: {value}")))
}
