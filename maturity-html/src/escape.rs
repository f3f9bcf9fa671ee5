//! HTML text escaping and safe JSON embedding.
//!
//! Every string that reaches a page comes from authored YAML, so all of it
//! is escaped before it is written into markup, attribute values included.

use serde::Serialize;

/// Escape text for use in HTML element content or a quoted attribute.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with character references.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serialize a value as JSON that is safe inside a `<script>` element.
///
/// `<`, `>` and `&` only ever occur inside JSON string literals, where they
/// are rewritten as `\u` escapes, so the output can never close the script
/// element or open a comment. U+2028 and U+2029 are escaped as well.
///
/// # Errors
///
/// Returns `serde_json::Error` if the value cannot be serialized.
pub fn embed_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(value)?;
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"R&D"</b> isn't"#),
            "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt; isn&#39;t"
        );
    }

    #[test]
    fn test_escape_html_passthrough() {
        assert_eq!(escape_html("Level 1: Foundational ✨"), "Level 1: Foundational ✨");
    }

    #[test]
    fn test_embed_json_cannot_close_script() {
        let embedded = embed_json(&json!({"name": "</script><!-- x"})).unwrap();
        assert!(!embedded.contains("</"));
        assert!(!embedded.contains("<!--"));
        let back: serde_json::Value = serde_json::from_str(&embedded).unwrap();
        assert_eq!(back["name"], "</script><!-- x");
    }

    #[test]
    fn test_embed_json_line_separators() {
        let embedded = embed_json(&json!(["a\u{2028}b\u{2029}"])).unwrap();
        assert_eq!(embedded, r#"["a\u2028b\u2029"]"#);
    }
}
