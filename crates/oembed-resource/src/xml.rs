//! XML encoding of a [`Payload`] under a single `<oembed>` root.

use crate::{
    errors::OembedError,
    payload::{Encoding, Entry, Payload},
};

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
pub const ROOT_ELEMENT: &str = "oembed";

const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";
const CARRIAGE_RETURN_REF: &str = "&#xD;";

/// Render `payload` as a standalone XML document terminated by a newline.
///
/// Fails with [`OembedError::Encode`] when a value holds a character XML 1.0
/// cannot carry, such as a C0 control other than tab, newline or carriage return.
pub fn to_string(payload: &Payload<'_>) -> Result<String, OembedError> {
    let mut out = String::new();
    out.push_str(XML_DECLARATION);
    out.push('\n');
    out.push_str(&format!("<{ROOT_ELEMENT}>"));
    for entry in payload.entries() {
        write_element(&mut out, entry)?;
    }
    out.push_str(&format!("</{ROOT_ELEMENT}>\n"));
    Ok(out)
}

/// Whether `ch` matches the XML 1.0 `Char` production.
pub fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..
    )
}

fn write_element(out: &mut String, entry: &Entry<'_>) -> Result<(), OembedError> {
    let text = entry.value.to_string();
    if let Some(ch) = text.chars().find(|ch| !is_xml_char(*ch)) {
        return Err(OembedError::Encode(format!(
            "{} contains U+{:04X}, which XML cannot represent",
            entry.key, ch as u32
        )));
    }

    out.push('<');
    out.push_str(entry.key);
    out.push('>');
    match entry.encoding {
        Encoding::Escaped => {
            let escaped = htmlescape::encode_minimal(&text);
            out.push_str(&escaped.replace('\r', CARRIAGE_RETURN_REF));
        }
        Encoding::Raw => write_cdata(out, &text),
    }
    out.push_str("</");
    out.push_str(entry.key);
    out.push('>');
    Ok(())
}

// `]]>` cannot live inside one section and a raw CR would be read back as LF,
// so both are written between sections.
fn write_cdata(out: &mut String, text: &str) {
    let section = text
        .replace(CDATA_CLOSE, "]]]]><![CDATA[>")
        .replace('\r', &format!("{CDATA_CLOSE}{CARRIAGE_RETURN_REF}{CDATA_OPEN}"));
    out.push_str(CDATA_OPEN);
    out.push_str(&section);
    out.push_str(CDATA_CLOSE);
}
