use serde::{Deserialize, Serialize};

use crate::{errors::OembedError, resource::OembedResource};

/// Flat field document a calling layer can deserialize from its data source.
///
/// `type` is kept as a plain string so an unknown value surfaces as
/// [`OembedError::InvalidKind`] rather than a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceFields {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_age: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

impl ResourceFields {
    /// Build a resource, calling a setter for every field present in the document.
    pub fn into_resource(self) -> Result<OembedResource, OembedError> {
        let mut resource = OembedResource::from_type(&self.kind)?;
        if let Some(value) = self.title {
            resource.set_title(value);
        }
        if let Some(value) = self.author_name {
            resource.set_author_name(value);
        }
        if let Some(value) = self.author_url {
            resource.set_author_url(value);
        }
        if let Some(value) = self.provider_name {
            resource.set_provider_name(value);
        }
        if let Some(value) = self.provider_url {
            resource.set_provider_url(value);
        }
        if let Some(value) = self.cache_age {
            resource.set_cache_age(value);
        }
        if let Some(value) = self.thumbnail_url {
            resource.set_thumbnail_url(value);
        }
        if let Some(value) = self.thumbnail_width {
            resource.set_thumbnail_width(value);
        }
        if let Some(value) = self.thumbnail_height {
            resource.set_thumbnail_height(value);
        }
        if let Some(value) = self.url {
            resource.set_url(value);
        }
        if let Some(value) = self.width {
            resource.set_width(value);
        }
        if let Some(value) = self.height {
            resource.set_height(value);
        }
        if let Some(value) = self.html {
            resource.set_html(value);
        }
        Ok(resource)
    }
}

impl TryFrom<ResourceFields> for OembedResource {
    type Error = OembedError;

    fn try_from(fields: ResourceFields) -> Result<Self, Self::Error> {
        fields.into_resource()
    }
}
