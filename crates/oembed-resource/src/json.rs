//! Compact JSON encoding with escaped slashes and ASCII-only output.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

use crate::errors::OembedError;

/// Compact formatter that writes `/` as `\/` and non-ASCII characters as
/// lowercase `\uXXXX` UTF-16 escapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct EscapedSlashFormatter;

impl Formatter for EscapedSlashFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch != '/' && ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;
            if ch == '/' {
                writer.write_all(b"\\/")?;
            } else {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Serialize `value` with [`EscapedSlashFormatter`].
pub fn to_string<T>(value: &T) -> Result<String, OembedError>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, EscapedSlashFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|err| OembedError::Encode(err.to_string()))
}
