//! Validated resource names shared by projects and palettes

use serde::Deserialize;

use super::validation::{require, ValidationError};

/// Non-empty name for a project or palette.
///
/// No length or character rules: any non-empty string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Validate a possibly missing name from a request body.
    ///
    /// # Example
    /// ```
    /// use palettes_server::models::Name;
    ///
    /// assert!(Name::new(Some("project a".into())).is_ok());
    /// assert!(Name::new(Some(String::new())).is_err());
    /// assert!(Name::new(None).is_err());
    /// ```
    pub fn new(raw: Option<String>) -> Result<Self, ValidationError> {
        require(raw, "name", None).map(Self)
    }

    /// Wrap a compile-time name that is known to be non-empty.
    pub(crate) fn trusted(name: &'static str) -> Self {
        debug_assert!(!name.is_empty());
        Self(name.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// PATCH body for renaming a project or palette
#[derive(Debug, Default, Deserialize)]
pub struct RenameRequest {
    #[serde(default)]
    pub name: Option<String>,
}

impl RenameRequest {
    pub fn validate(self) -> Result<Name, ValidationError> {
        Name::new(self.name)
    }
}
