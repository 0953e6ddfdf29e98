//! Module identity newtypes.
//!
//! Neither the module name nor the version is validated: the name is taken
//! verbatim from the manifest header and the version is an opaque label
//! supplied by the caller (the empty string included).

use std::fmt;

/// The canonical module name read from a manifest header.
///
/// # Examples
///
/// ```
/// use pacmod::module_id::{ModuleName, Version};
///
/// let name = ModuleName::from("example.com/foo");
/// let version = Version::from("v1.2.0");
/// assert_eq!(name.archive_prefix(&version), "example.com/foo@v1.2.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleName(String);

impl ModuleName {
    /// Return the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the directory every archive entry is rooted under,
    /// `<name>@<version>`.
    #[must_use]
    pub fn archive_prefix(&self, version: &Version) -> String {
        format!("{}@{}", self.0, version.as_str())
    }
}

impl From<&str> for ModuleName {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ModuleName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A caller-supplied version label such as `v1.2.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    /// Return the version as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the info record written for this version.
    #[must_use]
    pub fn info_file_name(&self) -> String {
        format!("{}.info", self.0)
    }
}

impl From<&str> for Version {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Version {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
