//! Connection settings for the row source, read from the environment.

use std::{ffi::OsString, fmt};

use crate::filter::REDACTION;

pub const USERNAME_VAR: &str = "PERSONAL_DATA_DB_USERNAME";
pub const PASSWORD_VAR: &str = "PERSONAL_DATA_DB_PASSWORD";
pub const HOST_VAR: &str = "PERSONAL_DATA_DB_HOST";
pub const DATABASE_VAR: &str = "PERSONAL_DATA_DB_NAME";

const DEFAULT_USERNAME: &str = "root";
const DEFAULT_HOST: &str = "localhost";

/// Database connection settings.
///
/// The values are opaque to this crate; they are handed to a
/// [`Connect`](super::Connect) implementation. `Debug` masks the password.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub username: String,
    pub password: String,
    pub host: String,
    pub database: Option<String>,
}

impl DbConfig {
    /// Reads the `PERSONAL_DATA_DB_*` variables.
    ///
    /// Unset variables fall back to `root`, an empty password, `localhost` and
    /// no database. Variables that are set but empty are kept as empty strings.
    /// Values that are not valid UTF-8 are converted lossily, not ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key).map(|value| env_value(key, value)))
    }

    /// Same as [`DbConfig::from_env`] with a custom variable lookup.
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        Self {
            username: lookup(USERNAME_VAR).unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
            password: lookup(PASSWORD_VAR).unwrap_or_default(),
            host: lookup(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            database: lookup(DATABASE_VAR),
        }
    }
}

fn env_value(key: &str, value: OsString) -> String {
    value.into_string().unwrap_or_else(|raw| {
        tracing::warn!(variable = key, "environment value is not valid UTF-8");
        raw.to_string_lossy().into_owned()
    })
}

impl Default for DbConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("username", &self.username)
            .field("password", &REDACTION)
            .field("host", &self.host)
            .field("database", &self.database)
            .finish()
    }
}
