// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Read-only object model over flatpak remote configuration.
//!
//! Flatpak configures each of its remotes in the repo configuration file of
//! either the user installation or the system installation. This crate
//! locates a remote by name across both installations, and exposes its
//! settings as a typed [`Remote`] snapshot.
//!
//! # Usage
//!
//! ```no_run
//! use flatpak_remote::Resolver;
//!
//! let remote = Resolver::try_default()?.resolve("flathub")?;
//! println!("{} ({}): {}", remote.title(), remote.scope(), remote.about());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # See Also
//!
//! - [flatpak-remote(5)](https://docs.flatpak.org/en/latest/flatpak-command-reference.html#flatpak-remote)

pub mod config;
pub mod keyfile;
pub mod path;
pub mod remote;
pub mod resolve;
pub mod store;

pub use config::StoreLayout;
pub use remote::{Property, Remote, RemoteDraft, RemoteEdit, RemoteError, Scope};
pub use resolve::Resolver;
