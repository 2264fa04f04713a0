//! # Markup
//!
//! The `Render` trait every section implements, plus HTML escaping.
//!
//! Sections write into a caller-owned `String` so a whole page can be built
//! in one buffer.

/// A section that can write itself as HTML.
pub trait Render {
    /// Appends this section's markup to `out`.
    fn render(&self, out: &mut String);

    /// Renders into a fresh string.
    fn to_html(&self) -> String {
        let mut out = String::new();
        self.render(&mut out);
        out
    }
}

/// Appends `text` to `out`, escaping characters significant in HTML text and
/// attribute values.
pub fn push_escaped(out: &mut String, text: &str) {
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
}

/// Escapes `text` into a new string.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

/// Appends ` name="value"` with the value escaped.
pub(crate) fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    push_escaped(out, value);
    out.push('"');
}

/// A page built from sections in order.
#[derive(Default)]
pub struct Page<'a> {
    sections: Vec<&'a dyn Render>,
}

impl<'a> Page<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a section.
    pub fn section(mut self, section: &'a dyn Render) -> Self {
        self.sections.push(section);
        self
    }
}

impl Render for Page<'_> {
    fn render(&self, out: &mut String) {
        out.push_str("<main class=\"home\">");
        for section in &self.sections {
            section.render(out);
        }
        out.push_str("</main>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Heading(&'static str);

    impl Render for Heading {
        fn render(&self, out: &mut String) {
            out.push_str("<h2>");
            push_escaped(out, self.0);
            out.push_str("</h2>");
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn test_push_attr() {
        let mut out = String::new();
        push_attr(&mut out, "alt", "\"quoted\"");
        assert_eq!(out, " alt=\"&quot;quoted&quot;\"");
    }

    #[test]
    fn test_page_renders_sections_in_order() {
        let first = Heading("One");
        let second = Heading("Two <b>");
        let html = Page::new().section(&first).section(&second).to_html();
        assert_eq!(
            html,
            "<main class=\"home\"><h2>One</h2><h2>Two &lt;b&gt;</h2></main>"
        );
    }
}
