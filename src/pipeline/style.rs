//! Style injection: give opening tags literal inline `style` attributes.
//!
//! Rich-text paste targets (mail clients, word processors) drop `<style>`
//! elements but keep `style="…"` attributes, so the inline rewrite is the
//! real deliverable and [`STYLE_BLOCK`] is only a fallback.
//!
//! ## Limitation
//!
//! The rewrite is textual: every literal `<p>`, `<em>`, … substring is
//! replaced, including one that appears in note text. No HTML is parsed.
//! Opening tags that already carry attributes are never matched, so a
//! second pass is a no-op.

use tracing::debug;

/// Bare opening tag → styled opening tag, applied in this order.
pub const TAG_STYLES: [(&str, &str); 9] = [
    ("<body>", r#"<body style="font-family: Arial;color: #000;">"#),
    ("<p>", r#"<p style="font-size: 11px;margin: 0;padding: 0;">"#),
    ("<h2>", r#"<h2 style="font-size: 16px;font-weight: normal;">"#),
    ("<h3>", r#"<h3 style="font-size: 14px;font-weight: normal;">"#),
    (
        "<h4>",
        r#"<h4 style="font-size: 12px;font-weight: normal;color #rgb(102, 102, 102);">"#,
    ),
    ("<em>", r#"<em style="font-style: italic;">"#),
    ("<strong>", r#"<strong style="font-weight: bold;">"#),
    ("<ul>", r#"<ul style="list-style-type: '-';margin-left: 10px;">"#),
    ("<li>", r#"<li style="font-size: 11px;margin: 0;padding: 0;">"#),
];

/// Stylesheet prepended by [`prepend_style_block`].
pub const STYLE_BLOCK: &str = r#"<style type="text/css">
body {
	font-family: Arial;
	color: #000;
}
p {
	font-size: 11px;
	margin: 0;
	padding: 0;
}
h2 {
	font-size: 16px;
	font-weight: normal;
}
em {
	font-style: italic;
}
strong {
	font-weight: bold;
}
ul {
	list-style-type: "-";
	margin-left: 10px;
}
</style>
"#;

/// Rewrite every bare opening tag from [`TAG_STYLES`]. Closing tags and
/// unlisted tags (`<ol>`, `<h1>`, `<span>`, `<div>`) are left alone.
pub fn inject_inline_styles(html: &str) -> String {
    TAG_STYLES
        .iter()
        .fold(html.to_string(), |s, (bare, styled)| {
            let hits = s.matches(bare).count();
            if hits == 0 {
                return s;
            }
            debug!("Styled {} x {}", hits, bare);
            s.replace(bare, styled)
        })
}

/// Put [`STYLE_BLOCK`] in front of `html` unless it is already there.
pub fn prepend_style_block(html: &str) -> String {
    if html.starts_with(STYLE_BLOCK) {
        return html.to_string();
    }
    format!("{STYLE_BLOCK}{html}")
}
