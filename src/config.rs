// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Configuration layout.
//!
//! Specify where the resolver should look for the user and system
//! installations. The layout can be built directly, taken from the standard
//! flatpak locations, or deserialized from a small TOML file. File I/O is
//! left to the caller to figure out.
//!
//! # General Layout
//!
//! ```toml
//! user_dir = "$XDG_DATA_HOME/flatpak"
//! system_dir = "/var/lib/flatpak"
//! ```
//!
//! Both fields are optional. Missing fields take the standard locations, and
//! both fields go through shell expansion. Relative paths are made absolute
//! against the current working directory.

use crate::path::{
    absolute, default_system_installation_dir, default_user_installation_dir, repo_config_path,
    NoWayHome,
};

use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Error as FmtError, Formatter, Result as FmtResult},
    path::{Path, PathBuf},
    str::FromStr,
};

/// Locations of the user and system installations.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct StoreLayout {
    /// Installation directory of the user scope.
    pub user_dir: PathBuf,

    /// Installation directory of the system scope.
    pub system_dir: PathBuf,
}

impl StoreLayout {
    /// Construct new layout from explicit installation directories.
    pub fn new(user_dir: impl Into<PathBuf>, system_dir: impl Into<PathBuf>) -> Self {
        Self {
            user_dir: user_dir.into(),
            system_dir: system_dir.into(),
        }
    }

    /// Construct layout from the standard flatpak locations.
    ///
    /// # Errors
    ///
    /// - Return [`ConfigError::NoWayHome`] if user data directory cannot be
    ///   determined.
    pub fn try_default() -> Result<Self> {
        Ok(Self::new(
            default_user_installation_dir()?,
            default_system_installation_dir(),
        ))
    }

    /// Path to repo configuration file of user installation.
    pub fn user_config(&self) -> PathBuf {
        repo_config_path(&self.user_dir)
    }

    /// Path to repo configuration file of system installation.
    pub fn system_config(&self) -> PathBuf {
        repo_config_path(&self.system_dir)
    }
}

impl FromStr for StoreLayout {
    type Err = ConfigError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let raw: RawStoreLayout = toml::de::from_str(data).map_err(ConfigError::Deserialize)?;

        // INVARIANT: Only fall back to standard locations for missing fields.
        let user_dir = match raw.user_dir {
            Some(path) => expand(&path)?,
            None => default_user_installation_dir()?,
        };
        let system_dir = match raw.system_dir {
            Some(path) => expand(&path)?,
            None => default_system_installation_dir(),
        };

        Ok(Self {
            user_dir,
            system_dir,
        })
    }
}

impl Display for StoreLayout {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.write_str(
            toml::ser::to_string_pretty(self)
                .map_err(ConfigError::Serialize)?
                .as_str(),
        )
    }
}

#[derive(Default, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawStoreLayout {
    user_dir: Option<String>,
    system_dir: Option<String>,
}

fn expand(path: &str) -> Result<PathBuf> {
    Ok(absolute(
        shellexpand::full(path)
            .map_err(ConfigError::ShellExpansion)?
            .into_owned(),
    ))
}

/// Read layout file at target path.
///
/// # Errors
///
/// - Return [`ConfigError::Read`] if layout file cannot be read.
/// - Return any parsing error from [`StoreLayout::from_str`].
pub fn read_layout(path: impl AsRef<Path>) -> Result<StoreLayout> {
    std::fs::read_to_string(path.as_ref())
        .map_err(|err| ConfigError::Read {
            source: err,
            path: path.as_ref().to_path_buf(),
        })?
        .parse()
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error(transparent)]
    Deserialize(#[from] toml::de::Error),

    /// Failed to serialize configuration.
    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),

    /// Failed to perform shell expansion on configuration.
    #[error(transparent)]
    ShellExpansion(#[from] shellexpand::LookupError<std::env::VarError>),

    /// Failed to determine standard user installation.
    #[error(transparent)]
    NoWayHome(#[from] NoWayHome),

    /// Failed to read layout file.
    #[error("failed to read layout file at {:?}", path.display())]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
}

impl From<ConfigError> for FmtError {
    fn from(_: ConfigError) -> Self {
        FmtError
    }
}

/// Friendly result alias :3
type Result<T, E = ConfigError> = std::result::Result<T, E>;
