//! Tag stripping for reference pages.
//!
//! Turns an HTML page into the plain text the member patterns run against.
//! Table rows survive as tab-separated columns so enum values can be
//! matched as `name\tvalue\tdescription`.

use quick_xml::escape::resolve_html5_entity;
use std::borrow::Cow;

/// Tag text seen between two adjacent table cells (`</td><td>`).
const CELL_BOUNDARY: &str = "/tdtd";

/// Remove all markup and decode character entities.
///
/// There is no nesting awareness: everything from `<` to the next `>` is
/// dropped. Consecutive tags are accumulated, and when the accumulated
/// text marks a cell boundary a tab is emitted before the next character.
pub fn strip_tags(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut tag = String::new();
    let mut inside = false;

    for c in source.chars() {
        match c {
            '<' => inside = true,
            '>' => inside = false,
            _ if inside => tag.push(c),
            _ => {
                if tag.contains(CELL_BOUNDARY) {
                    out.push('\t');
                }
                tag.clear();
                out.push(c);
            }
        }
    }

    decode_entities(&out).into_owned()
}

/// Decode named (HTML5) and numeric character references.
///
/// Unknown or malformed references are left as written.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let candidate = &rest[amp + 1..];
        match candidate.find(';').and_then(|semi| {
            let name = &candidate[..semi];
            resolve_reference(name).map(|decoded| (decoded, semi))
        }) {
            Some((decoded, semi)) => {
                out.push_str(&decoded);
                rest = &candidate[semi + 1..];
            }
            None => {
                out.push('&');
                rest = candidate;
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

fn resolve_reference(name: &str) -> Option<Cow<'static, str>> {
    if name.is_empty() || name.len() > 32 {
        return None;
    }
    if let Some(number) = name.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse::<u32>().ok()?,
        };
        return char::from_u32(code).map(|c| Cow::Owned(c.to_string()));
    }
    resolve_html5_entity(name).map(Cow::Borrowed)
}
