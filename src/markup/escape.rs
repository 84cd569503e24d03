//! Markup Escaping
//!
//! Encoding and decoding of the characters that are structurally
//! significant in HTML/XML text and attribute values.

use std::borrow::Cow;

use super::Markup;

/// Entities recognised when decoding. The first five are the forms `escape`
/// produces; the rest are common spellings emitted by other templating stacks.
const ENTITIES: &[(&str, char)] = &[
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&#34;", '"'),
    ("&#39;", '\''),
    ("&quot;", '"'),
    ("&apos;", '\''),
    ("&#x27;", '\''),
];

/// Escape text for safe inclusion in markup
///
/// `&`, `<`, `>`, `"` and `'` are replaced by entities; every other
/// character is copied through unchanged.
pub fn escape(text: &str) -> Markup {
    Markup::from_trusted(escape_str(text).into_owned())
}

/// Escape text, borrowing the input when nothing needs replacing
pub fn escape_str(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(is_special) else {
        return Cow::Borrowed(text);
    };

    let mut escaped = String::with_capacity(text.len() + 8);
    escaped.push_str(&text[..first]);

    for ch in text[first..].chars() {
        match entity_for(ch) {
            Some(entity) => escaped.push_str(entity),
            None => escaped.push(ch),
        }
    }

    Cow::Owned(escaped)
}

/// Decode the entities produced by [`escape`]
///
/// Unknown or malformed entities are left as-is, so decoding never fails.
pub fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('&') {
        decoded.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        match ENTITIES.iter().find(|(entity, _)| tail.starts_with(entity)) {
            Some((entity, ch)) => {
                decoded.push(*ch);
                rest = &tail[entity.len()..];
            }
            None => {
                decoded.push('&');
                rest = &tail[1..];
            }
        }
    }

    decoded.push_str(rest);
    Cow::Owned(decoded)
}

fn is_special(ch: char) -> bool {
    entity_for(ch).is_some()
}

fn entity_for(ch: char) -> Option<&'static str> {
    match ch {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&#34;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}
