use std::{env, fmt, str::FromStr};

use crate::errors::OembedError;

/// Environment variable consulted by [`ResponseFormat::from_env`].
pub const RESPONSE_FORMAT_ENV: &str = "OEMBED_RESPONSE_FORMAT";

/// Wire format of a rendered oEmbed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseFormat {
    Json,
    Xml,
}

impl ResponseFormat {
    /// Parse a response format name. Matching is exact.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "json" => Some(Self::Json),
            "xml" => Some(Self::Xml),
            _ => None,
        }
    }

    /// Reads the default format from `OEMBED_RESPONSE_FORMAT`, falling back to JSON.
    pub fn from_env() -> Self {
        env::var(RESPONSE_FORMAT_ENV)
            .ok()
            .and_then(|value| Self::parse(value.trim()))
            .unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
            ResponseFormat::Xml => "xml",
        }
    }

    /// MIME type the calling layer should send with a body in this format.
    pub fn content_type(self) -> &'static str {
        match self {
            ResponseFormat::Json => "application/json",
            ResponseFormat::Xml => "text/xml",
        }
    }
}

impl Default for ResponseFormat {
    fn default() -> Self {
        ResponseFormat::Json
    }
}

impl FromStr for ResponseFormat {
    type Err = OembedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| OembedError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
