//! Render a [`ReplacementSet`] as an Apple property list.
//!
//! The layout matches what macOS exports from the Text Replacements pane:
//! a top-level array of dicts, each holding a `phrase` and a `shortcut`.
//! [`write_plist`] terminates the document with a newline.

use crate::replacements::{Replacement, ReplacementSet};
use anyhow::Result;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

pub const PLIST_HEADER: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
    "<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" ",
    "\"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n",
);

/// Render the complete document, header included.
pub fn render_plist(set: &ReplacementSet) -> Result<String> {
    let mut buf = Vec::with_capacity(128 + set.len() * 160);
    buf.extend_from_slice(PLIST_HEADER.as_bytes());

    let mut writer = Writer::new_with_indent(buf, b' ', 2);

    let mut plist = BytesStart::new("plist");
    plist.push_attribute(("version", "1.0"));
    writer.write_event(Event::Start(plist))?;

    if set.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new("array")))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new("array")))?;
        for replacement in set {
            write_dict(&mut writer, replacement)?;
        }
        writer.write_event(Event::End(BytesEnd::new("array")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("plist")))?;

    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_dict<W: Write>(writer: &mut Writer<W>, replacement: &Replacement) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("dict")))?;
    // A well-formed run of character references goes out as-is so the plist
    // reader decodes it into the emoji; anything else is escaped as plain text.
    let phrase = if is_char_ref_run(&replacement.phrase) {
        BytesText::from_escaped(replacement.phrase.as_str())
    } else {
        tracing::warn!(shortcut = %replacement.shortcut, "phrase is not a codepoint sequence");
        BytesText::new(&replacement.phrase)
    };
    write_pair(writer, "phrase", phrase)?;
    write_pair(writer, "shortcut", BytesText::new(&replacement.shortcut))?;
    writer.write_event(Event::End(BytesEnd::new("dict")))?;
    Ok(())
}

/// True when `phrase` is one or more `&#xHEX;` references to legal XML characters.
fn is_char_ref_run(phrase: &str) -> bool {
    if !phrase.ends_with(';') {
        return false;
    }

    phrase.split_terminator(';').all(|token| {
        let Some(hex) = token.strip_prefix("&#x") else {
            return false;
        };
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return false;
        }
        u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .is_some_and(is_xml_char)
    })
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}')
        || c >= '\u{10000}'
}

fn write_pair<W: Write>(writer: &mut Writer<W>, key: &str, value: BytesText<'_>) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("key")))?;
    writer.write_event(Event::Text(BytesText::new(key)))?;
    writer.write_event(Event::End(BytesEnd::new("key")))?;

    writer.write_event(Event::Start(BytesStart::new("string")))?;
    writer.write_event(Event::Text(value))?;
    writer.write_event(Event::End(BytesEnd::new("string")))?;
    Ok(())
}

/// Write the document to `out`.
///
/// A rendering failure is reported on `out` as `ERROR: ...` in place of the
/// document; only I/O errors on `out` itself are returned.
pub fn write_plist<W: Write>(set: &ReplacementSet, out: &mut W) -> std::io::Result<()> {
    emit(render_plist(set), out)
}

fn emit<W: Write>(rendered: Result<String>, out: &mut W) -> std::io::Result<()> {
    match rendered {
        Ok(document) => writeln!(out, "{}", document)?,
        Err(err) => {
            tracing::warn!("plist serialization failed: {:#}", err);
            writeln!(out, "ERROR: {:#}", err)?;
        }
    }
    out.flush()
}
