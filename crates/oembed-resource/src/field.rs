use std::fmt;

use crate::payload::Encoding;

/// A settable oEmbed response field.
///
/// `type` and `version` are not listed: the first is fixed at construction and
/// the second is a protocol constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Title,
    AuthorName,
    AuthorUrl,
    ProviderName,
    ProviderUrl,
    CacheAge,
    ThumbnailUrl,
    ThumbnailWidth,
    ThumbnailHeight,
    Url,
    Width,
    Height,
    Html,
}

/// Fields that must be set together or not at all, in check order.
pub const THUMBNAIL_GROUP: [Field; 3] = [
    Field::ThumbnailUrl,
    Field::ThumbnailWidth,
    Field::ThumbnailHeight,
];

impl Field {
    /// Every field in wire order.
    pub const ALL: [Field; 13] = [
        Field::Title,
        Field::AuthorName,
        Field::AuthorUrl,
        Field::ProviderName,
        Field::ProviderUrl,
        Field::CacheAge,
        Field::ThumbnailUrl,
        Field::ThumbnailWidth,
        Field::ThumbnailHeight,
        Field::Url,
        Field::Width,
        Field::Height,
        Field::Html,
    ];

    /// Key used in both JSON and XML output.
    pub fn key(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::AuthorName => "author_name",
            Field::AuthorUrl => "author_url",
            Field::ProviderName => "provider_name",
            Field::ProviderUrl => "provider_url",
            Field::CacheAge => "cache_age",
            Field::ThumbnailUrl => "thumbnail_url",
            Field::ThumbnailWidth => "thumbnail_width",
            Field::ThumbnailHeight => "thumbnail_height",
            Field::Url => "url",
            Field::Width => "width",
            Field::Height => "height",
            Field::Html => "html",
        }
    }

    /// Human-readable name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::AuthorName => "Author name",
            Field::AuthorUrl => "Author URL",
            Field::ProviderName => "Provider name",
            Field::ProviderUrl => "Provider URL",
            Field::CacheAge => "Cache age",
            Field::ThumbnailUrl => "Thumbnail URL",
            Field::ThumbnailWidth => "Thumbnail Width",
            Field::ThumbnailHeight => "Thumbnail Height",
            Field::Url => "URL",
            Field::Width => "Width",
            Field::Height => "Height",
            Field::Html => "HTML",
        }
    }

    /// Serialization policy: `html` is emitted verbatim, everything else escaped.
    pub fn encoding(self) -> Encoding {
        match self {
            Field::Html => Encoding::Raw,
            _ => Encoding::Escaped,
        }
    }

    pub fn is_thumbnail(self) -> bool {
        THUMBNAIL_GROUP.contains(&self)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
