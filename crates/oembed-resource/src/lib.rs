//! Typed oEmbed response builder.
//!
//! An [`OembedResource`] collects the fields of a single oEmbed response, checks
//! them against the rules for its [`ResourceKind`] and renders them as JSON or XML.
//! Nothing here performs I/O; the calling layer owns the HTTP side.

pub mod document;
pub mod errors;
pub mod field;
pub mod format;
pub mod json;
pub mod kind;
pub mod payload;
pub mod resource;
pub mod xml;

pub use document::ResourceFields;
pub use errors::OembedError;
pub use field::Field;
pub use format::ResponseFormat;
pub use kind::ResourceKind;
pub use payload::{Encoding, Entry, FieldValue, Payload};
pub use resource::{OEMBED_VERSION, OembedResource};
