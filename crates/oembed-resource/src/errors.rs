use thiserror::Error;

use crate::{field::Field, kind::ResourceKind};

/// Errors raised while building or rendering an oEmbed resource.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OembedError {
    /// The resource type is not one of photo, video, link or rich.
    #[error("Invalid resource type")]
    InvalidKind(String),

    /// The response format is not one of json or xml.
    #[error("Invalid response format")]
    InvalidFormat(String),

    /// A required field, or part of the thumbnail group, is absent.
    #[error("{}", missing_field_message(.field, .kind))]
    MissingField { field: Field, kind: ResourceKind },

    /// The serializer rejected the payload.
    #[error("failed to encode response: {0}")]
    Encode(String),
}

impl OembedError {
    /// The field a [`OembedError::MissingField`] refers to.
    pub fn missing_field(&self) -> Option<Field> {
        match self {
            OembedError::MissingField { field, .. } => Some(*field),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for OembedError {
    fn from(value: serde_json::Error) -> Self {
        OembedError::Encode(value.to_string())
    }
}

fn missing_field_message(field: &Field, kind: &ResourceKind) -> String {
    if field.is_thumbnail() {
        format!("{} is required", field.label())
    } else {
        format!("{} parameter required for {kind} resource", field.label())
    }
}
