use crate::{
    errors::OembedError,
    field::{Field, THUMBNAIL_GROUP},
    format::ResponseFormat,
    kind::ResourceKind,
    payload::{Encoding, FieldValue, Payload},
};

/// oEmbed protocol version emitted with every response.
pub const OEMBED_VERSION: &str = "1.0";

/// A single oEmbed response under construction.
///
/// Setters store values verbatim and never fail; all checking happens in
/// [`OembedResource::validate`], which every render runs again from the current
/// field values. Empty strings and zero count as absent there, while the getters
/// still report exactly what was stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OembedResource {
    kind: ResourceKind,
    title: Option<String>,
    author_name: Option<String>,
    author_url: Option<String>,
    provider_name: Option<String>,
    provider_url: Option<String>,
    cache_age: Option<u64>,
    thumbnail_url: Option<String>,
    thumbnail_width: Option<u32>,
    thumbnail_height: Option<u32>,
    url: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    html: Option<String>,
}

impl OembedResource {
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            title: None,
            author_name: None,
            author_url: None,
            provider_name: None,
            provider_url: None,
            cache_age: None,
            thumbnail_url: None,
            thumbnail_width: None,
            thumbnail_height: None,
            url: None,
            width: None,
            height: None,
            html: None,
        }
    }

    /// Create a resource from its type name, rejecting anything outside
    /// photo, video, link and rich.
    pub fn from_type(kind: &str) -> Result<Self, OembedError> {
        Ok(Self::new(kind.parse()?))
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn version(&self) -> &'static str {
        OEMBED_VERSION
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_author_name(&mut self, author_name: impl Into<String>) -> &mut Self {
        self.author_name = Some(author_name.into());
        self
    }

    pub fn author_name(&self) -> Option<&str> {
        self.author_name.as_deref()
    }

    pub fn set_author_url(&mut self, author_url: impl Into<String>) -> &mut Self {
        self.author_url = Some(author_url.into());
        self
    }

    pub fn author_url(&self) -> Option<&str> {
        self.author_url.as_deref()
    }

    pub fn set_provider_name(&mut self, provider_name: impl Into<String>) -> &mut Self {
        self.provider_name = Some(provider_name.into());
        self
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.provider_name.as_deref()
    }

    pub fn set_provider_url(&mut self, provider_url: impl Into<String>) -> &mut Self {
        self.provider_url = Some(provider_url.into());
        self
    }

    pub fn provider_url(&self) -> Option<&str> {
        self.provider_url.as_deref()
    }

    /// Suggested cache lifetime in seconds.
    pub fn set_cache_age(&mut self, cache_age: u64) -> &mut Self {
        self.cache_age = Some(cache_age);
        self
    }

    pub fn cache_age(&self) -> Option<u64> {
        self.cache_age
    }

    pub fn set_thumbnail_url(&mut self, thumbnail_url: impl Into<String>) -> &mut Self {
        self.thumbnail_url = Some(thumbnail_url.into());
        self
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail_url.as_deref()
    }

    pub fn set_thumbnail_width(&mut self, thumbnail_width: u32) -> &mut Self {
        self.thumbnail_width = Some(thumbnail_width);
        self
    }

    pub fn thumbnail_width(&self) -> Option<u32> {
        self.thumbnail_width
    }

    pub fn set_thumbnail_height(&mut self, thumbnail_height: u32) -> &mut Self {
        self.thumbnail_height = Some(thumbnail_height);
        self
    }

    pub fn thumbnail_height(&self) -> Option<u32> {
        self.thumbnail_height
    }

    /// Source URL of the image. Only emitted for photos.
    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn set_width(&mut self, width: u32) -> &mut Self {
        self.width = Some(width);
        self
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn set_height(&mut self, height: u32) -> &mut Self {
        self.height = Some(height);
        self
    }

    pub fn height(&self) -> Option<u32> {
        self.height
    }

    /// Embed markup. Only emitted for video and rich resources, unescaped.
    pub fn set_html(&mut self, html: impl Into<String>) -> &mut Self {
        self.html = Some(html.into());
        self
    }

    pub fn html(&self) -> Option<&str> {
        self.html.as_deref()
    }

    /// The stored value of `field`, empty or not.
    pub fn get(&self, field: Field) -> Option<FieldValue<'_>> {
        match field {
            Field::Title => text(&self.title),
            Field::AuthorName => text(&self.author_name),
            Field::AuthorUrl => text(&self.author_url),
            Field::ProviderName => text(&self.provider_name),
            Field::ProviderUrl => text(&self.provider_url),
            Field::CacheAge => self.cache_age.map(FieldValue::Number),
            Field::ThumbnailUrl => text(&self.thumbnail_url),
            Field::ThumbnailWidth => number(self.thumbnail_width),
            Field::ThumbnailHeight => number(self.thumbnail_height),
            Field::Url => text(&self.url),
            Field::Width => number(self.width),
            Field::Height => number(self.height),
            Field::Html => text(&self.html),
        }
    }

    /// The value of `field` if it is set to something non-empty.
    fn present(&self, field: Field) -> Option<FieldValue<'_>> {
        self.get(field).filter(|value| !value.is_empty())
    }

    fn missing(&self, field: Field) -> OembedError {
        OembedError::MissingField {
            field,
            kind: self.kind,
        }
    }

    /// Check the kind's required fields, then the thumbnail group. The first
    /// absent field in check order is reported.
    pub fn validate(&self) -> Result<(), OembedError> {
        if let Some(field) = self
            .kind
            .required_fields()
            .iter()
            .find(|field| self.present(**field).is_none())
        {
            return Err(self.missing(*field));
        }

        if !THUMBNAIL_GROUP
            .iter()
            .any(|field| self.present(*field).is_some())
        {
            return Ok(());
        }
        match THUMBNAIL_GROUP
            .iter()
            .find(|field| self.present(**field).is_none())
        {
            Some(field) => Err(self.missing(*field)),
            None => Ok(()),
        }
    }

    /// Validate and collect the output keys in wire order.
    pub fn payload(&self) -> Result<Payload<'_>, OembedError> {
        self.validate()?;

        let mut payload = Payload::default();
        payload.push(
            "type",
            FieldValue::Text(self.kind.as_str()),
            Encoding::Escaped,
        );
        payload.push(
            "version",
            FieldValue::Text(OEMBED_VERSION),
            Encoding::Escaped,
        );
        for field in Field::ALL {
            if !self.kind.emits(field) {
                continue;
            }
            if let Some(value) = self.present(field) {
                payload.push(field.key(), value, field.encoding());
            }
        }
        Ok(payload)
    }

    /// Validate and serialize into `format`.
    pub fn render(&self, format: ResponseFormat) -> Result<String, OembedError> {
        self.payload()?.encode(format)
    }

    /// Like [`OembedResource::render`], taking the format by name. An unknown
    /// format is reported before any field is checked.
    pub fn render_str(&self, format: &str) -> Result<String, OembedError> {
        let format: ResponseFormat = format.parse()?;
        self.render(format)
    }

    /// `Cache-Control` value for the calling layer, when a cache age is set.
    pub fn cache_control(&self) -> Option<String> {
        self.present(Field::CacheAge)
            .map(|age| format!("max-age={age}"))
    }
}

fn text(value: &Option<String>) -> Option<FieldValue<'_>> {
    value.as_deref().map(FieldValue::Text)
}

fn number(value: Option<u32>) -> Option<FieldValue<'static>> {
    value.map(|n| FieldValue::Number(u64::from(n)))
}
