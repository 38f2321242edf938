//! Markdown preview rendering
//!
//! The renderer escapes raw HTML by default, so the artifact is treated as
//! untrusted formatted text and cannot smuggle script into the preview.

/// Render markdown to HTML for the preview pane.
pub fn to_html(text: &str) -> String {
    ::markdown::to_html(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_basic_structure() {
        let html = to_html("# Hello\n\n- one\n- two");
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn escapes_embedded_script() {
        let html = to_html("before\n\n<script>alert(1)</script>\n\nafter");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
