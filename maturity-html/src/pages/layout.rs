//! Shared document shell: head, site header and footer, data block and
//! client script wrapper.

use crate::escape::escape_html;

/// Element id of the embedded JSON data block.
pub const DATA_ELEMENT_ID: &str = "page-data";

/// Site name shown in headers and footers.
pub const SITE_NAME: &str = "Product Management Maturity Model";

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Document-level settings for one page.
#[derive(Debug, Clone, Copy)]
pub struct Shell<'a> {
    /// `<title>` text.
    pub title: &'a str,
    /// Classes on `<body>`.
    pub body_class: &'a str,
    /// Extra CSS placed in a `<style>` element.
    pub style: Option<&'a str>,
}

/// Assemble a complete HTML document.
///
/// `data_json` must already be script-safe (see
/// [`embed_json`](crate::escape::embed_json)). `script` runs inside an
/// immediately-invoked function with the parsed data bound to `data`, so
/// nothing it declares leaks into the page's global scope.
#[must_use]
pub fn document(shell: &Shell<'_>, body: &str, data_json: &str, script: &str) -> String {
    let mut sections = Vec::new();

    sections.push("<!DOCTYPE html>".to_string());
    sections.push("<html lang=\"en\">".to_string());
    sections.push("<head>".to_string());
    sections.push("    <meta charset=\"UTF-8\">".to_string());
    sections.push(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">".to_string(),
    );
    sections.push(format!("    <title>{}</title>", escape_html(shell.title)));
    sections.push(format!("    <script src=\"{TAILWIND_CDN}\"></script>"));
    if let Some(style) = shell.style {
        sections.push("    <style>".to_string());
        sections.push(style.trim_end().to_string());
        sections.push("    </style>".to_string());
    }
    sections.push("</head>".to_string());
    sections.push(format!("<body class=\"{}\">", escape_html(shell.body_class)));
    sections.push(body.trim_end().to_string());
    sections.push(format!(
        "    <script type=\"application/json\" id=\"{DATA_ELEMENT_ID}\">{data_json}</script>"
    ));
    sections.push("    <script>".to_string());
    sections.push("    (function () {".to_string());
    sections.push("        'use strict';".to_string());
    sections.push(format!(
        "        const data = JSON.parse(document.getElementById('{DATA_ELEMENT_ID}').textContent);"
    ));
    sections.push(script.trim_end().to_string());
    sections.push("    })();".to_string());
    sections.push("    </script>".to_string());
    sections.push("</body>".to_string());
    sections.push("</html>".to_string());
    sections.push(String::new());

    sections.join("\n")
}

/// Site header with a title and optional subtitle.
#[must_use]
pub fn site_header(title: &str, subtitle: Option<&str>) -> String {
    let subtitle = subtitle.map_or_else(String::new, |s| {
        format!(
            "\n                <p class=\"text-lg text-gray-600 mt-2\">{}</p>",
            escape_html(s)
        )
    });
    format!(
        r#"        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-6 py-6">
                <h1 class="text-4xl font-bold text-gray-900">{}</h1>{subtitle}
            </div>
        </header>"#,
        escape_html(title)
    )
}

/// Site footer with the back-to-home link.
#[must_use]
pub fn site_footer() -> String {
    format!(
        r#"        <footer class="bg-white border-t border-gray-200 mt-12">
            <div class="max-w-7xl mx-auto px-6 py-6 text-center text-gray-600 text-sm">
                <p>{SITE_NAME} | Built for B2B/Enterprise Product Teams</p>
                <p class="mt-2"><a href="index.html" class="text-purple-600 hover:text-purple-800">← Back to Home</a></p>
            </div>
        </footer>"#
    )
}

/// Blue call-out box with a bold lead-in. `html` is inserted unescaped.
#[must_use]
pub fn callout(lead: &str, html: &str) -> String {
    format!(
        r#"<div class="bg-blue-50 border-l-4 border-blue-400 p-4 rounded">
                    <p class="text-sm text-gray-700">
                        <strong>{}</strong> {html}
                    </p>
                </div>"#,
        escape_html(lead)
    )
}

/// Class attribute value, escaped, with optional extra classes.
#[must_use]
pub fn classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.trim().is_empty() => escape_html(&format!("{base} {extra}")),
        _ => escape_html(base),
    }
}
