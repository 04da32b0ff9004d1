// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Key file parsing.
//!
//! Flatpak keeps the configuration of its remotes inside the OSTree repo
//! configuration file at `$installation/repo/config`. That file is a GLib
//! __key file__, i.e., an INI-style document made up of named groups that
//! contain flat `key=value` entries:
//!
//! ```text
//! [core]
//! repo_version=1
//! mode=bare-user-only
//!
//! [remote "flathub"]
//! url=https://dl.flathub.org/repo/
//! xa.title=Flathub
//! ```
//!
//! # Remote Groups
//!
//! Each remote owns exactly one group whose header has the shape
//! `remote "NAME"`. Only headers of that exact shape name a remote. Thus,
//! the group `remote "foobar"` is never mistaken for the remote "foo".
//!
//! # Escapes
//!
//! Values are kept raw while parsing, and escape sequences are only decoded
//! when a value is fetched. A bad escape in one key therefore never spoils
//! the rest of the document.
//!
//! # See Also
//!
//! - [GLib Key-value file parser](https://docs.gtk.org/glib/struct.KeyFile.html)

use std::str::FromStr;

/// Parsed key file document.
///
/// # Invariant
///
/// - Group names are unique. Repeated headers reopen the earlier group.
/// - Keys are unique within a group. Later duplicates replace the value.
/// - Values are stored undecoded.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeyFile {
    groups: Vec<Group>,
}

impl KeyFile {
    /// Iterate through all groups in the order they first appear.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    /// Find group by its full header name.
    pub fn group(&self, name: impl AsRef<str>) -> Option<&Group> {
        self.groups.iter().find(|group| group.name == name.as_ref())
    }

    /// Iterate through all remote groups along with the remote name they
    /// belong to.
    pub fn remotes(&self) -> impl Iterator<Item = (&str, &Group)> {
        self.groups
            .iter()
            .filter_map(|group| remote_name(&group.name).map(|name| (name, group)))
    }

    /// Find the group of target remote by exact name.
    pub fn remote(&self, name: impl AsRef<str>) -> Option<&Group> {
        self.remotes()
            .find(|(remote, _)| *remote == name.as_ref())
            .map(|(_, group)| group)
    }

    fn group_mut_or_insert(&mut self, name: &str) -> usize {
        match self.groups.iter().position(|group| group.name == name) {
            Some(index) => index,
            None => {
                self.groups.push(Group::new(name));
                self.groups.len() - 1
            }
        }
    }
}

impl FromStr for KeyFile {
    type Err = KeyFileError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let mut keyfile = KeyFile::default();
        let mut current: Option<usize> = None;

        for (index, raw) in data.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            if let Some(header) = trimmed.strip_prefix('[') {
                let name = header
                    .strip_suffix(']')
                    .ok_or(KeyFileError::UnterminatedGroup { line })?;
                if name.is_empty() {
                    return Err(KeyFileError::EmptyGroup { line });
                }

                current = Some(keyfile.group_mut_or_insert(name));
                continue;
            }

            let (key, value) = trimmed
                .split_once('=')
                .ok_or(KeyFileError::InvalidLine { line })?;
            let key = key.trim_end();
            if key.is_empty() {
                return Err(KeyFileError::EmptyKey { line });
            }

            let group = current.ok_or(KeyFileError::EntryOutsideGroup { line })?;
            keyfile.groups[group].insert(key, value.trim_start(), line);
        }

        Ok(keyfile)
    }
}

/// Named group of key/value entries.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Group {
    name: String,
    entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    key: String,
    raw: String,
    line: usize,
}

impl Group {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    fn insert(&mut self, key: &str, raw: &str, line: usize) {
        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => {
                entry.raw = raw.to_owned();
                entry.line = line;
            }
            None => self.entries.push(Entry {
                key: key.to_owned(),
                raw: raw.to_owned(),
                line,
            }),
        }
    }

    /// Full header name of group.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get decoded value of target key.
    ///
    /// Returns `Ok(None)` if key is not set.
    ///
    /// # Errors
    ///
    /// - Return [`KeyFileError::InvalidEscape`] if value contains an escape
    ///   sequence that key files do not define.
    pub fn get(&self, key: impl AsRef<str>) -> Result<Option<String>> {
        self.entries
            .iter()
            .find(|entry| entry.key == key.as_ref())
            .map(|entry| unescape(&entry.raw, entry.line))
            .transpose()
    }

    /// Iterate through keys in the order they first appear.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }
}

/// Extract remote name from group header of the form `remote "NAME"`.
pub fn remote_name(header: &str) -> Option<&str> {
    header
        .strip_prefix("remote \"")
        .and_then(|rest| rest.strip_suffix('"'))
        .filter(|name| !name.is_empty())
}

fn unescape(value: &str, line: usize) -> Result<String> {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('s') => out.push(' '),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                return Err(KeyFileError::InvalidEscape {
                    line,
                    escape: format!("\\{other}"),
                })
            }
            None => {
                return Err(KeyFileError::InvalidEscape {
                    line,
                    escape: "\\".into(),
                })
            }
        }
    }

    Ok(out)
}

/// Key file parsing error types.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum KeyFileError {
    /// Entry appears before any group header.
    #[error("line {line}: key/value entry outside of any group")]
    EntryOutsideGroup { line: usize },

    /// Group header is missing its closing bracket.
    #[error("line {line}: unterminated group header")]
    UnterminatedGroup { line: usize },

    /// Group header has no name.
    #[error("line {line}: empty group header")]
    EmptyGroup { line: usize },

    /// Entry has no key before the '=' sign.
    #[error("line {line}: entry has empty key")]
    EmptyKey { line: usize },

    /// Line is not a comment, group header, or key/value entry.
    #[error("line {line}: expected group header or key=value entry")]
    InvalidLine { line: usize },

    /// Value contains an escape sequence that key files do not define.
    #[error("line {line}: invalid escape sequence {escape:?}")]
    InvalidEscape { line: usize, escape: String },
}

/// Friendly result alias :3
pub type Result<T, E = KeyFileError> = std::result::Result<T, E>;
