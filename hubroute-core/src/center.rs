//! Identifiers for warehouses and the delivery hub.

use std::borrow::Borrow;
use std::fmt;

/// Identifier of a warehouse or of the hub.
///
/// Identifiers are plain strings taken from the network configuration. They
/// order lexically, which keeps route enumeration reproducible.
///
/// # Examples
/// ```
/// use hubroute_core::CenterId;
///
/// let id = CenterId::from("C1");
/// assert_eq!(id.as_str(), "C1");
/// assert_eq!(id.to_string(), "C1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CenterId(String);

impl CenterId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return `true` when the identifier is empty or only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for CenterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CenterId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for CenterId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for CenterId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CenterId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
