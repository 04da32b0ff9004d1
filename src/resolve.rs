// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Remote resolution.
//!
//! Locate a remote by name across the user and system configuration stores,
//! and take a snapshot of its settings.
//!
//! # Precedence
//!
//! The user store always wins. The system store is only consulted when the
//! user store has no group for the requested remote, or does not exist at
//! all. Errors other than a missing store file stop resolution immediately.

use crate::{
    config::{ConfigError, StoreLayout},
    remote::{Remote, RemoteError, Result, Scope},
    store::ConfigStore,
};

use tracing::{debug, info, instrument};

/// Resolve remotes from user and system configuration stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    user: ConfigStore,
    system: ConfigStore,
}

impl Resolver {
    /// Construct new resolver for target store layout.
    pub fn new(layout: &StoreLayout) -> Self {
        Self {
            user: ConfigStore::new(Scope::User, &layout.user_dir),
            system: ConfigStore::new(Scope::System, &layout.system_dir),
        }
    }

    /// Construct resolver for the standard flatpak locations.
    ///
    /// # Errors
    ///
    /// - Return [`ConfigError::NoWayHome`] if user data directory cannot be
    ///   determined.
    pub fn try_default() -> Result<Self, ConfigError> {
        Ok(Self::new(&StoreLayout::try_default()?))
    }

    /// Resolve remote by exact name.
    ///
    /// Searches the user store first, then the system store.
    ///
    /// # Errors
    ///
    /// - Return [`RemoteError::EmptyName`] if name is empty.
    /// - Return [`RemoteError::NotFound`] if no store configures the remote.
    /// - Return [`RemoteError::Io`] if a store exists but cannot be read.
    /// - Return [`RemoteError::MalformedConfig`] if a store cannot be parsed,
    ///   or the remote's group lacks a `url` key.
    #[instrument(skip(self, name), fields(name = %name.as_ref()), level = "debug")]
    pub fn resolve(&self, name: impl AsRef<str>) -> Result<Remote> {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(RemoteError::EmptyName);
        }

        for store in [&self.user, &self.system] {
            let Some(keyfile) = store.load()? else {
                continue;
            };

            if let Some(group) = keyfile.remote(name) {
                info!("found remote {name:?} in {} store", store.scope());
                return Remote::from_group(name, store.scope(), store.path(), group);
            }

            debug!("remote {name:?} not in {} store", store.scope());
        }

        Err(RemoteError::NotFound { name: name.into() })
    }

    /// List every remote of the user store, followed by every remote of the
    /// system store.
    ///
    /// Missing stores contribute no remotes.
    ///
    /// # Errors
    ///
    /// - Return [`RemoteError::Io`] if a store exists but cannot be read.
    /// - Return [`RemoteError::MalformedConfig`] if a store cannot be parsed,
    ///   or any remote's group lacks a `url` key.
    #[instrument(skip(self), level = "debug")]
    pub fn list(&self) -> Result<Vec<Remote>> {
        let mut remotes = Vec::new();
        for store in [&self.user, &self.system] {
            let Some(keyfile) = store.load()? else {
                continue;
            };

            for (name, group) in keyfile.remotes() {
                remotes.push(Remote::from_group(name, store.scope(), store.path(), group)?);
            }
        }

        Ok(remotes)
    }
}
