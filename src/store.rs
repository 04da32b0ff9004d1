// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Remote configuration store access.
//!
//! Flatpak groups the configuration of its remotes into one file per
//! installation called the __configuration store__. The user installation
//! has its own store that is private to the invoking user, while the system
//! installation has a store shared by all users on the machine.
//!
//! # Store Layout
//!
//! A store is the repo configuration file found at `$installation/repo/config`.
//! Each remote in the store is given its own group named `remote "NAME"`.
//! The store is owned and written by flatpak itself. We only ever read it.
//!
//! # Missing Stores
//!
//! Fresh machines commonly lack a user installation entirely. Thus, a store
//! whose file does not exist simply contains no remotes. Any other failure
//! to read the store is reported to the caller.

use crate::{
    keyfile::KeyFile,
    path::repo_config_path,
    remote::{MalformedReason, RemoteError, Result, Scope},
};

use std::{
    fs::read,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::{debug, instrument};

/// Configuration store of a single installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    scope: Scope,
    path: PathBuf,
}

impl ConfigStore {
    /// Construct store for target installation directory.
    pub fn new(scope: Scope, installation_dir: impl AsRef<Path>) -> Self {
        Self {
            scope,
            path: repo_config_path(installation_dir),
        }
    }

    /// Scope of store.
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Path to configuration file of store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and parse store.
    ///
    /// Returns `None` if the configuration file does not exist.
    ///
    /// # Errors
    ///
    /// - Return [`RemoteError::Io`] if configuration file exists but cannot
    ///   be read.
    /// - Return [`RemoteError::MalformedConfig`] if configuration file is not
    ///   valid UTF-8, or not a valid key file.
    #[instrument(skip(self), fields(scope = %self.scope), level = "debug")]
    pub fn load(&self) -> Result<Option<KeyFile>> {
        debug!("read configuration store at {:?}", self.path.display());
        let bytes = match read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no configuration store at {:?}", self.path.display());
                return Ok(None);
            }
            Err(err) => {
                return Err(RemoteError::Io {
                    path: self.path.clone(),
                    source: err,
                })
            }
        };

        // INVARIANT: Key files are always UTF-8 encoded.
        let content = String::from_utf8(bytes).map_err(|err| RemoteError::MalformedConfig {
            path: self.path.clone(),
            reason: MalformedReason::Encoding(err),
        })?;

        let keyfile = content
            .parse::<KeyFile>()
            .map_err(|err| RemoteError::MalformedConfig {
                path: self.path.clone(),
                reason: MalformedReason::Syntax(err),
            })?;

        Ok(Some(keyfile))
    }
}
