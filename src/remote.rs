// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Remote domain representation.
//!
//! A __remote__ is a named source of installable applications that flatpak
//! pulls from. Every remote is configured in exactly one group of the repo
//! configuration file of either the user or system installation.
//!
//! # Snapshots
//!
//! A [`Remote`] is a read-only snapshot of that group, taken once at
//! resolution time. Reading a remote never touches the backing file again.
//!
//! # Drafts
//!
//! Changing a remote happens in two phases. First, the caller obtains a
//! [`RemoteDraft`] through [`Remote::draft`] and edits it in memory. Second,
//! the caller takes the listing of [`RemoteEdit`] entries from
//! [`RemoteDraft::changes`] and hands them to whatever tool owns the
//! configuration file, e.g., `flatpak remote-modify`. This crate never writes
//! to the configuration file itself.
//!
//! # Enabled State
//!
//! Flatpak tracks whether a remote is _disabled_ through the `xa.disable`
//! key, while we expose whether it is _enabled_. A missing key means enabled.

use crate::keyfile::{Group, KeyFileError};

use serde::Serialize;
use std::{
    fmt::{Display, Error as FmtError, Formatter, Result as FmtResult},
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::{debug, warn};

/// Configuration store that a remote was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Store private to invoking user.
    User,

    /// Store shared by all users on the machine.
    System,
}

impl Display for Scope {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::User => fmt.write_str("user"),
            Self::System => fmt.write_str("system"),
        }
    }
}

/// Snapshot of a configured remote.
///
/// # Invariant
///
/// - Name is never empty.
/// - Name and scope never change after construction.
/// - Configuration path pointed at a file containing a group for this exact
///   remote name at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Remote {
    name: String,
    scope: Scope,
    config_path: PathBuf,
    url: String,
    enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    homepage: Option<String>,
}

impl Remote {
    /// Construct remote from its configuration group.
    ///
    /// # Errors
    ///
    /// - Return [`RemoteError::EmptyName`] if name is empty.
    /// - Return [`RemoteError::MalformedConfig`] if group has no `url` key,
    ///   or a value read for the remote holds an invalid escape sequence.
    pub fn from_group(
        name: impl Into<String>,
        scope: Scope,
        config_path: impl Into<PathBuf>,
        group: &Group,
    ) -> Result<Self> {
        let name = name.into();
        let config_path = config_path.into();
        if name.is_empty() {
            return Err(RemoteError::EmptyName);
        }

        let read = |property: Property| -> Result<Option<String>> {
            let Some(key) = property.key() else {
                return Ok(None);
            };

            let value = group.get(key).map_err(|err| RemoteError::MalformedConfig {
                path: config_path.clone(),
                reason: MalformedReason::Syntax(err),
            })?;
            if value.is_none() {
                debug!("{name}: no {key} set");
            }
            Ok(value)
        };

        let url = read(Property::Url)?.ok_or_else(|| RemoteError::MalformedConfig {
            path: config_path.clone(),
            reason: MalformedReason::MissingUrl { name: name.clone() },
        })?;
        let title = read(Property::Title)?;
        let comment = read(Property::Comment)?;
        let description = read(Property::Description)?;
        let icon = read(Property::Icon)?;
        let homepage = read(Property::Homepage)?;
        let enabled = match read(Property::Enabled)? {
            Some(value) => enabled_from_disable(&name, &value),
            None => true,
        };

        Ok(Self {
            name,
            scope,
            config_path,
            url,
            enabled,
            title,
            comment,
            description,
            icon,
            homepage,
        })
    }

    /// Internal name of remote.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configuration store remote was found in.
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Absolute path to configuration file that contained the remote.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Human-readable title of remote.
    ///
    /// Falls back to the remote name if `xa.title` is missing or empty.
    pub fn title(&self) -> &str {
        non_empty(self.title.as_deref()).unwrap_or(&self.name)
    }

    /// URL that remote downloads applications from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Short summary of remote.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Long-form description of remote suitable for display in a UI.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// URL of icon for remote, usually an SVG.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// URL of homepage for remote.
    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref()
    }

    /// Whether remote is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Best available blurb about remote.
    ///
    /// Prefers the comment, then the description, then the name. Empty
    /// values are skipped.
    pub fn about(&self) -> &str {
        non_empty(self.comment.as_deref())
            .or_else(|| non_empty(self.description.as_deref()))
            .unwrap_or(&self.name)
    }

    /// Begin in-memory draft of changes to remote.
    pub fn draft(&self) -> RemoteDraft {
        RemoteDraft {
            original: self.clone(),
            current: self.clone(),
        }
    }
}

impl Display for Remote {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.write_str(
            toml::ser::to_string_pretty(self)
                .map_err(|_| FmtError)?
                .as_str(),
        )
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn enabled_from_disable(name: &str, value: &str) -> bool {
    match value.to_lowercase().as_str() {
        "false" | "no" | "0" => true,
        "true" | "yes" | "1" => false,
        other => {
            warn!("{name}: unrecognized xa.disable value {other:?}, treating remote as disabled");
            false
        }
    }
}

fn parse_bool(property: Property, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(RemoteError::InvalidValue {
            property: property.to_string(),
            value: value.into(),
        }),
    }
}

/// Named property of a remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Name,
    Scope,
    Title,
    Url,
    Comment,
    Description,
    Icon,
    Homepage,
    Enabled,
}

impl Property {
    /// Configuration key that backs property on disk.
    ///
    /// Name and scope come from the group header and store location, so they
    /// have no key of their own.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Self::Name | Self::Scope => None,
            Self::Title => Some("xa.title"),
            Self::Url => Some("url"),
            Self::Comment => Some("xa.comment"),
            Self::Description => Some("xa.description"),
            Self::Icon => Some("xa.icon"),
            Self::Homepage => Some("xa.homepage"),
            Self::Enabled => Some("xa.disable"),
        }
    }

    /// Property cannot be changed after construction.
    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::Name | Self::Scope)
    }
}

impl Display for Property {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Name => "name",
            Self::Scope => "scope",
            Self::Title => "title",
            Self::Url => "url",
            Self::Comment => "comment",
            Self::Description => "description",
            Self::Icon => "icon",
            Self::Homepage => "homepage",
            Self::Enabled => "enabled",
        };
        fmt.write_str(name)
    }
}

impl FromStr for Property {
    type Err = RemoteError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        match data {
            "name" => Ok(Self::Name),
            "scope" | "option" => Ok(Self::Scope),
            "title" => Ok(Self::Title),
            "url" => Ok(Self::Url),
            "comment" => Ok(Self::Comment),
            "description" => Ok(Self::Description),
            "icon" => Ok(Self::Icon),
            "homepage" => Ok(Self::Homepage),
            "enabled" => Ok(Self::Enabled),
            other => Err(RemoteError::UnknownProperty(other.into())),
        }
    }
}

/// In-memory draft of changes to a remote.
///
/// Nothing done to a draft reaches the configuration file. Use
/// [`RemoteDraft::changes`] to learn what an external writer has to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDraft {
    original: Remote,
    current: Remote,
}

impl RemoteDraft {
    /// Set human-readable title.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.current.title = Some(title.into());
        self
    }

    /// Set download URL.
    ///
    /// # Errors
    ///
    /// - Return [`RemoteError::InvalidValue`] if URL is empty.
    pub fn set_url(&mut self, url: impl Into<String>) -> Result<&mut Self> {
        let url = url.into();
        if url.is_empty() {
            return Err(RemoteError::InvalidValue {
                property: Property::Url.to_string(),
                value: url,
            });
        }

        self.current.url = url;
        Ok(self)
    }

    /// Set or clear short summary.
    pub fn set_comment(&mut self, comment: Option<String>) -> &mut Self {
        self.current.comment = comment;
        self
    }

    /// Set or clear long-form description.
    pub fn set_description(&mut self, description: Option<String>) -> &mut Self {
        self.current.description = description;
        self
    }

    /// Set or clear icon URL.
    pub fn set_icon(&mut self, icon: Option<String>) -> &mut Self {
        self.current.icon = icon;
        self
    }

    /// Set or clear homepage URL.
    pub fn set_homepage(&mut self, homepage: Option<String>) -> &mut Self {
        self.current.homepage = homepage;
        self
    }

    /// Enable or disable remote.
    pub fn set_enabled(&mut self, enabled: bool) -> &mut Self {
        self.current.enabled = enabled;
        self
    }

    /// Set property by name from its textual value.
    ///
    /// Boolean properties accept `true`, `yes`, `1`, `false`, `no`, or `0`
    /// in any case. An empty value clears optional text properties.
    ///
    /// # Errors
    ///
    /// - Return [`RemoteError::UnknownProperty`] if property does not exist.
    /// - Return [`RemoteError::ReadOnly`] if property is name or scope.
    /// - Return [`RemoteError::InvalidValue`] if value cannot be used for
    ///   property.
    pub fn set(&mut self, property: impl AsRef<str>, value: impl Into<String>) -> Result<()> {
        let property: Property = property.as_ref().parse()?;
        let value = value.into();
        let optional = Some(value.clone()).filter(|value| !value.is_empty());
        match property {
            Property::Name | Property::Scope => {
                return Err(RemoteError::ReadOnly {
                    property: property.to_string(),
                });
            }
            Property::Title => {
                self.current.title = optional;
            }
            Property::Url => {
                self.set_url(value)?;
            }
            Property::Comment => {
                self.set_comment(optional);
            }
            Property::Description => {
                self.set_description(optional);
            }
            Property::Icon => {
                self.set_icon(optional);
            }
            Property::Homepage => {
                self.set_homepage(optional);
            }
            Property::Enabled => {
                let enabled = parse_bool(property, &value)?;
                self.set_enabled(enabled);
            }
        }

        Ok(())
    }

    /// Current state of the draft.
    pub fn remote(&self) -> &Remote {
        &self.current
    }

    /// List configuration edits needed to persist the draft.
    ///
    /// Edits are ordered by property, and only cover properties that differ
    /// from the snapshot the draft was taken from.
    pub fn changes(&self) -> Vec<RemoteEdit> {
        let (old, new) = (&self.original, &self.current);
        let mut edits = Vec::new();

        let mut text = |property: Property, old: &Option<String>, new: &Option<String>| {
            if old != new {
                edits.extend(RemoteEdit::new(property, new.clone()));
            }
        };
        text(Property::Title, &old.title, &new.title);
        text(Property::Url, &Some(old.url.clone()), &Some(new.url.clone()));
        text(Property::Comment, &old.comment, &new.comment);
        text(Property::Description, &old.description, &new.description);
        text(Property::Icon, &old.icon, &new.icon);
        text(Property::Homepage, &old.homepage, &new.homepage);

        if old.enabled != new.enabled {
            let value = (!new.enabled).then(|| "true".to_owned());
            edits.extend(RemoteEdit::new(Property::Enabled, value));
        }

        edits
    }

    /// Finish draft, yielding the updated in-memory remote.
    pub fn finish(self) -> Remote {
        self.current
    }
}

/// Single edit to a remote's configuration group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEdit {
    /// Property being changed.
    pub property: Property,

    /// Configuration key to edit.
    pub key: &'static str,

    /// New value of key, or `None` to remove the key.
    pub value: Option<String>,
}

impl RemoteEdit {
    /// Construct edit of target property.
    ///
    /// Returns `None` for read-only properties, since they have no
    /// configuration key to edit.
    pub fn new(property: Property, value: Option<String>) -> Option<Self> {
        property.key().map(|key| Self {
            property,
            key,
            value,
        })
    }
}

impl Display for RemoteEdit {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        match &self.value {
            Some(value) => write!(fmt, "{}={}", self.key, value),
            None => write!(fmt, "unset {}", self.key),
        }
    }
}

/// Why a configuration file could not be used.
#[derive(Debug, thiserror::Error)]
pub enum MalformedReason {
    /// Remote group has no `url` key.
    #[error("remote {name:?} has no url")]
    MissingUrl { name: String },

    /// Configuration file is not a valid key file.
    #[error(transparent)]
    Syntax(#[from] KeyFileError),

    /// Configuration file is not valid UTF-8.
    #[error("configuration is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// All possible error types for remote resolution and drafting.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// Remote is not configured in any store.
    #[error("remote {name:?} does not exist")]
    NotFound { name: String },

    /// Remote name cannot be empty.
    #[error("remote name cannot be empty")]
    EmptyName,

    /// Property cannot be changed after construction.
    #[error("cannot set {property}: property is read-only")]
    ReadOnly { property: String },

    /// Property does not exist.
    #[error("unknown remote property {0:?}")]
    UnknownProperty(String),

    /// Value cannot be used for property.
    #[error("invalid value {value:?} for {property}")]
    InvalidValue { property: String, value: String },

    /// Configuration file does not have expected layout.
    #[error("malformed configuration at {:?}", path.display())]
    MalformedConfig {
        path: PathBuf,
        #[source]
        reason: MalformedReason,
    },

    /// Configuration file cannot be read.
    #[error("failed to read configuration at {:?}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Friendly result alias :3
pub type Result<T, E = RemoteError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyfile::KeyFile;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use simple_test_case::test_case;

    fn edit(property: Property, key: &'static str, value: Option<&str>) -> RemoteEdit {
        RemoteEdit {
            property,
            key,
            value: value.map(str::to_owned),
        }
    }

    fn remote(section: &str) -> Result<Remote> {
        let keyfile: KeyFile = format!("[remote \"flathub\"]\n{section}").parse().unwrap();
        let group = keyfile.remote("flathub").unwrap();
        Remote::from_group("flathub", Scope::User, "/tmp/repo/config", group)
    }

    #[test]
    fn derive_all_fields() -> Result<()> {
        let result = remote(indoc! {r#"
            url=https://dl.flathub.org/repo/
            xa.title=Flathub
            xa.comment=Central repository of Flatpak applications
            xa.description=Central repository of Flatpak applications, with a full catalog
            xa.icon=https://dl.flathub.org/repo/logo.svg
            xa.homepage=https://flathub.org/
        "#})?;

        assert_eq!(result.name(), "flathub");
        assert_eq!(result.scope(), Scope::User);
        assert_eq!(result.config_path(), Path::new("/tmp/repo/config"));
        assert_eq!(result.title(), "Flathub");
        assert_eq!(result.url(), "https://dl.flathub.org/repo/");
        assert_eq!(result.comment(), Some("Central repository of Flatpak applications"));
        assert_eq!(
            result.description(),
            Some("Central repository of Flatpak applications, with a full catalog")
        );
        assert_eq!(result.icon(), Some("https://dl.flathub.org/repo/logo.svg"));
        assert_eq!(result.homepage(), Some("https://flathub.org/"));
        assert!(result.enabled());

        Ok(())
    }

    #[test]
    fn missing_optional_fields_are_absent() -> Result<()> {
        let result = remote("url=https://dl.flathub.org/repo/\n")?;

        assert_eq!(result.title(), "flathub");
        assert_eq!(result.comment(), None);
        assert_eq!(result.description(), None);
        assert_eq!(result.icon(), None);
        assert_eq!(result.homepage(), None);
        assert_eq!(result.about(), "flathub");
        assert!(result.enabled());

        Ok(())
    }

    #[test]
    fn empty_title_falls_back_to_name() -> Result<()> {
        let result = remote("url=https://x.org/\nxa.title=\n")?;
        assert_eq!(result.title(), "flathub");
        Ok(())
    }

    #[test]
    fn missing_url_is_malformed() {
        let result = remote("xa.title=Flathub\n");
        assert!(matches!(
            result,
            Err(RemoteError::MalformedConfig {
                reason: MalformedReason::MissingUrl { .. },
                ..
            })
        ));
    }

    #[test]
    fn invalid_escape_in_read_value_is_malformed() {
        let result = remote("url=https://x.org/\nxa.comment=C:\\flatpak\n");
        assert!(matches!(
            result,
            Err(RemoteError::MalformedConfig {
                reason: MalformedReason::Syntax(KeyFileError::InvalidEscape { .. }),
                ..
            })
        ));
    }

    #[test]
    fn invalid_escape_in_unread_key_is_ignored() -> Result<()> {
        let result = remote("url=https://x.org/\nxa.filter=C:\\flatpak\n")?;
        assert_eq!(result.url(), "https://x.org/");
        Ok(())
    }

    #[test]
    fn read_only_properties_have_no_edit() {
        assert_eq!(Property::Name.key(), None);
        assert_eq!(Property::Scope.key(), None);
        assert_eq!(RemoteEdit::new(Property::Name, Some("x".into())), None);
        assert_eq!(
            RemoteEdit::new(Property::Icon, None),
            Some(edit(Property::Icon, "xa.icon", None))
        );
    }

    #[test]
    fn empty_name_is_rejected() {
        let keyfile: KeyFile = "[remote \"x\"]\nurl=https://x.org/\n".parse().unwrap();
        let group = keyfile.remote("x").unwrap();
        let result = Remote::from_group("", Scope::System, "/tmp/repo/config", group);
        assert!(matches!(result, Err(RemoteError::EmptyName)));
    }

    #[test_case("xa.comment=Fast mirror\nxa.description=Full app catalog\n", "Fast mirror"; "comment first")]
    #[test_case("xa.description=Full app catalog\n", "Full app catalog"; "description second")]
    #[test_case("xa.comment=\nxa.description=Full app catalog\n", "Full app catalog"; "empty comment skipped")]
    #[test_case("xa.comment=\nxa.description=\n", "flathub"; "empty both skipped")]
    #[test_case("", "flathub"; "name last")]
    #[test]
    fn about_preference(section: &str, expect: &str) {
        let result = remote(&format!("url=https://x.org/\n{section}")).unwrap();
        self::assert_eq!(result.about(), expect);
    }

    #[test_case("", true; "absent key")]
    #[test_case("xa.disable=true\n", false; "true value")]
    #[test_case("xa.disable=TRUE\n", false; "uppercase true")]
    #[test_case("xa.disable=yes\n", false; "yes")]
    #[test_case("xa.disable=1\n", false; "one")]
    #[test_case("xa.disable=false\n", true; "false value")]
    #[test_case("xa.disable=No\n", true; "mixed case no")]
    #[test_case("xa.disable=0\n", true; "zero")]
    #[test_case("xa.disable=maybe\n", false; "unrecognized")]
    #[test]
    fn enabled_inverts_disable(section: &str, expect: bool) {
        let result = remote(&format!("url=https://x.org/\n{section}")).unwrap();
        self::assert_eq!(result.enabled(), expect);
    }

    #[test]
    fn display_as_toml() -> Result<()> {
        let result = remote("url=https://dl.flathub.org/repo/\nxa.title=Flathub\nxa.disable=true\n")?
            .to_string();

        let expect = indoc! {r#"
            name = "flathub"
            scope = "user"
            config_path = "/tmp/repo/config"
            url = "https://dl.flathub.org/repo/"
            enabled = false
            title = "Flathub"
        "#};
        assert_eq!(result, expect);

        Ok(())
    }

    #[test]
    fn draft_changes_are_in_memory_only() -> Result<()> {
        let original = remote("url=https://dl.flathub.org/repo/\nxa.comment=Old\n")?;
        let mut draft = original.draft();

        draft
            .set_title("Flathub Beta")
            .set_comment(None)
            .set_homepage(Some("https://flathub.org/".into()))
            .set_enabled(false);
        draft.set_url("https://dl.flathub.org/beta-repo/")?;

        let result = draft.changes();
        let expect = vec![
            edit(Property::Title, "xa.title", Some("Flathub Beta")),
            edit(Property::Url, "url", Some("https://dl.flathub.org/beta-repo/")),
            edit(Property::Comment, "xa.comment", None),
            edit(Property::Homepage, "xa.homepage", Some("https://flathub.org/")),
            edit(Property::Enabled, "xa.disable", Some("true")),
        ];
        assert_eq!(result, expect);
        assert_eq!(
            result.iter().map(ToString::to_string).collect::<Vec<_>>(),
            vec![
                "xa.title=Flathub Beta",
                "url=https://dl.flathub.org/beta-repo/",
                "unset xa.comment",
                "xa.homepage=https://flathub.org/",
                "xa.disable=true",
            ]
        );

        let updated = draft.finish();
        assert_eq!(updated.title(), "Flathub Beta");
        assert_eq!(updated.about(), "flathub");
        assert!(!updated.enabled());
        assert_eq!(updated.name(), original.name());
        assert_eq!(original.title(), "flathub");
        assert_eq!(original.comment(), Some("Old"));

        Ok(())
    }

    #[test]
    fn draft_without_changes_has_no_edits() -> Result<()> {
        let original = remote("url=https://x.org/\nxa.disable=false\n")?;
        let mut draft = original.draft();
        draft.set_enabled(true);
        draft.set("url", "https://x.org/")?;
        assert!(draft.changes().is_empty());
        Ok(())
    }

    #[test]
    fn draft_set_by_name() -> Result<()> {
        let original = remote("url=https://x.org/\nxa.icon=https://x.org/icon.svg\n")?;
        let mut draft = original.draft();

        draft.set("title", "X Repo")?;
        draft.set("icon", "")?;
        draft.set("enabled", "No")?;
        draft.set("description", "Everything about X")?;

        let result = draft.remote();
        assert_eq!(result.title(), "X Repo");
        assert_eq!(result.icon(), None);
        assert!(!result.enabled());
        assert_eq!(result.about(), "Everything about X");

        Ok(())
    }

    #[test_case("name"; "name")]
    #[test_case("scope"; "scope")]
    #[test_case("option"; "option alias")]
    #[test]
    fn draft_rejects_read_only(property: &str) {
        let original = remote("url=https://x.org/\n").unwrap();
        let mut draft = original.draft();

        let result = draft.set(property, "other");
        assert!(matches!(result, Err(RemoteError::ReadOnly { .. })));
        self::assert_eq!(draft.remote(), &original);
        assert!(draft.changes().is_empty());
    }

    #[test]
    fn draft_rejects_invalid_values() {
        let original = remote("url=https://x.org/\n").unwrap();
        let mut draft = original.draft();

        assert!(matches!(
            draft.set("enabled", "sometimes"),
            Err(RemoteError::InvalidValue { .. })
        ));
        assert!(matches!(draft.set("url", ""), Err(RemoteError::InvalidValue { .. })));
        assert!(matches!(
            draft.set("colour", "blue"),
            Err(RemoteError::UnknownProperty(..))
        ));
        assert_eq!(draft.remote(), &original);
    }
}
