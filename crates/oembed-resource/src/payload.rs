use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{errors::OembedError, format::ResponseFormat, json, xml};

/// A single output value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(u64),
}

impl FieldValue<'_> {
    /// Empty strings and zero count as absent, for validation and output alike.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::Number(number) => *number == 0,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Number(number) => write!(f, "{number}"),
        }
    }
}

impl Serialize for FieldValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(text) => serializer.serialize_str(text),
            FieldValue::Number(number) => serializer.serialize_u64(*number),
        }
    }
}

/// How a serializer must treat an entry's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Entity-escaped text content.
    #[default]
    Escaped,
    /// Passed through verbatim; XML wraps it in a CDATA section.
    Raw,
}

/// One key of the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
    pub key: &'static str,
    pub value: FieldValue<'a>,
    pub encoding: Encoding,
}

/// Validated, ordered set of output keys borrowed from a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload<'a> {
    entries: Vec<Entry<'a>>,
}

impl<'a> Payload<'a> {
    pub(crate) fn push(&mut self, key: &'static str, value: FieldValue<'a>, encoding: Encoding) {
        self.entries.push(Entry {
            key,
            value,
            encoding,
        });
    }

    pub fn entries(&self) -> &[Entry<'a>] {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.key)
    }

    pub fn get(&self, key: &str) -> Option<FieldValue<'a>> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value)
    }

    /// Serialize into the requested wire format.
    pub fn encode(&self, format: ResponseFormat) -> Result<String, OembedError> {
        match format {
            ResponseFormat::Json => json::to_string(self),
            ResponseFormat::Xml => xml::to_string(self),
        }
    }
}

impl Serialize for Payload<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(entry.key, &entry.value)?;
        }
        map.end()
    }
}
