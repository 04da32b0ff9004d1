// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Path resolution utilities.
//!
//! Determine where flatpak keeps its installations, and where each
//! installation keeps the configuration file that lists its remotes.
//!
//! # Installations
//!
//! Flatpak knows two standard installations. The __user__ installation lives
//! in `$XDG_DATA_HOME/flatpak` and is private to the invoking user. The
//! __system__ installation lives in `/var/lib/flatpak` and is shared by every
//! user on the machine. Flatpak lets both locations be overridden through
//! the `FLATPAK_USER_DIR` and `FLATPAK_SYSTEM_DIR` environment variables, so
//! we honor them too. Relative overrides are made absolute against the
//! current working directory.

use std::{
    env,
    path::{Path, PathBuf},
};

/// Default location of the system installation.
pub const SYSTEM_INSTALLATION_DIR: &str = "/var/lib/flatpak";

/// Determine absolute path to the user installation directory.
///
/// Uses `$FLATPAK_USER_DIR` when set, or `$XDG_DATA_HOME/flatpak` otherwise.
/// Does not check if the path returned actually exists.
///
/// # Errors
///
/// - Return [`NoWayHome`] if user data directory cannot be determined.
///
/// # See Also
///
/// - [XDG Base Directory](https://wiki.archlinux.org/title/XDG_Base_Directory)
pub fn default_user_installation_dir() -> Result<PathBuf> {
    if let Some(path) = env_path("FLATPAK_USER_DIR") {
        return Ok(path);
    }

    dirs::data_dir()
        .map(|path| path.join("flatpak"))
        .ok_or(NoWayHome)
}

/// Determine absolute path to the system installation directory.
///
/// Uses `$FLATPAK_SYSTEM_DIR` when set, or [`SYSTEM_INSTALLATION_DIR`]
/// otherwise. Does not check if the path returned actually exists.
pub fn default_system_installation_dir() -> PathBuf {
    env_path("FLATPAK_SYSTEM_DIR").unwrap_or_else(|| PathBuf::from(SYSTEM_INSTALLATION_DIR))
}

/// Path to repo configuration file of target installation directory.
pub fn repo_config_path(installation_dir: impl AsRef<Path>) -> PathBuf {
    installation_dir.as_ref().join("repo").join("config")
}

/// Make path absolute against current working directory without touching
/// the file system.
///
/// Paths that cannot be made absolute are returned as given.
pub fn absolute(path: impl Into<PathBuf>) -> PathBuf {
    let path = path.into();
    std::path::absolute(&path).unwrap_or(path)
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(absolute)
}

/// No way to determine user's data directory.
///
/// # See Also
///
/// - [`dirs::data_dir`](https://docs.rs/dirs/latest/dirs/fn.data_dir.html)
#[derive(Clone, Debug, thiserror::Error)]
#[error("cannot determine absolute path to user's data directory")]
pub struct NoWayHome;

/// Friendly result alias :3
pub type Result<T, E = NoWayHome> = std::result::Result<T, E>;
