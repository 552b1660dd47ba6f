use std::{fmt, str::FromStr};

use crate::{errors::OembedError, field::Field};

/// The closed set of oEmbed resource types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Photo,
    Video,
    Link,
    Rich,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Photo,
        ResourceKind::Video,
        ResourceKind::Link,
        ResourceKind::Rich,
    ];

    /// Parse a resource type name. Matching is exact.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "photo" => Some(Self::Photo),
            "video" => Some(Self::Video),
            "link" => Some(Self::Link),
            "rich" => Some(Self::Rich),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Photo => "photo",
            ResourceKind::Video => "video",
            ResourceKind::Link => "link",
            ResourceKind::Rich => "rich",
        }
    }

    /// Fields that must be present for this kind, in the order they are checked.
    pub fn required_fields(self) -> &'static [Field] {
        match self {
            ResourceKind::Photo => &[Field::Url, Field::Width, Field::Height],
            ResourceKind::Video | ResourceKind::Rich => &[Field::Html, Field::Width, Field::Height],
            ResourceKind::Link => &[],
        }
    }

    /// Whether `field` may appear in output for this kind.
    ///
    /// Type-specific fields set on the wrong kind are silently dropped.
    pub fn emits(self, field: Field) -> bool {
        match field {
            Field::Url => self == ResourceKind::Photo,
            Field::Width | Field::Height => self != ResourceKind::Link,
            Field::Html => matches!(self, ResourceKind::Video | ResourceKind::Rich),
            _ => true,
        }
    }
}

impl FromStr for ResourceKind {
    type Err = OembedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| OembedError::InvalidKind(s.to_string()))
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
