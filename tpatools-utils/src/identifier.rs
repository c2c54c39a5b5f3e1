//! Namespaced resource identifiers (`minecraft:overworld`).

use std::{
    borrow::Cow,
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A `namespace:path` resource location. Used here to name worlds.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    /// The namespace, `minecraft` for vanilla content.
    pub namespace: Cow<'static, str>,
    /// The path inside the namespace.
    pub path: Cow<'static, str>,
}

/// Error returned when an identifier string is malformed.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum IdentifierError {
    /// Empty namespace or path.
    #[error("Identifier `{0}` has an empty component")]
    Empty(String),
    /// A character outside `[a-z0-9_.-/]`.
    #[error("Identifier `{0}` contains an invalid character")]
    InvalidCharacter(String),
}

impl Identifier {
    /// The vanilla namespace.
    pub const VANILLA_NAMESPACE: &'static str = "minecraft";

    /// The overworld dimension.
    pub const OVERWORLD: Self = Self::vanilla_static("overworld");
    /// The nether dimension.
    pub const THE_NETHER: Self = Self::vanilla_static("the_nether");
    /// The end dimension.
    pub const THE_END: Self = Self::vanilla_static("the_end");

    /// Creates a vanilla identifier from a static path.
    #[must_use]
    pub const fn vanilla_static(path: &'static str) -> Self {
        Self {
            namespace: Cow::Borrowed(Self::VANILLA_NAMESPACE),
            path: Cow::Borrowed(path),
        }
    }

    /// Creates an identifier from owned parts.
    #[must_use]
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            namespace: Cow::Owned(namespace.into()),
            path: Cow::Owned(path.into()),
        }
    }

    fn valid_char(c: char, allow_slash: bool) -> bool {
        c.is_ascii_lowercase()
            || c.is_ascii_digit()
            || matches!(c, '_' | '-' | '.')
            || (allow_slash && c == '/')
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    /// Parses `namespace:path`; a bare `path` gets the vanilla namespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, path) = s.split_once(':').unwrap_or((Self::VANILLA_NAMESPACE, s));
        if namespace.is_empty() || path.is_empty() {
            return Err(IdentifierError::Empty(s.to_string()));
        }
        if !namespace.chars().all(|c| Self::valid_char(c, false))
            || !path.chars().all(|c| Self::valid_char(c, true))
        {
            return Err(IdentifierError::InvalidCharacter(s.to_string()));
        }
        Ok(Self::new(namespace, path))
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
