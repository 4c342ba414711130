//! Wrap tags: the markup pair placed around each annotated term.
//!
//! A pass only ever counts the markers of its own wrap kind, so links and
//! notes can nest inside each other while neither nests inside itself.

use compact_str::{CompactString, format_compact};

// =============================================================================
// WrapKind
// =============================================================================

/// Compile-time description of a wrap tag.
pub trait WrapKind {
    /// Kind name used in logs and fingerprints.
    const NAME: &'static str;
    /// Element name, e.g. `a`.
    const TAG: &'static str;
    /// Attribute carrying the payload, e.g. `href`.
    const ATTR: &'static str;

    /// Build the runtime tag for this kind.
    fn wrap_tag() -> WrapTag {
        WrapTag::new(Self::TAG, Self::ATTR)
    }
}

/// Hyperlinks: `<a href="PAYLOAD">term</a>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkKind;

impl WrapKind for LinkKind {
    const NAME: &'static str = "link";
    const TAG: &'static str = "a";
    const ATTR: &'static str = "href";
}

/// Tooltip notes: `<abbr title="PAYLOAD">term</abbr>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoteKind;

impl WrapKind for NoteKind {
    const NAME: &'static str = "note";
    const TAG: &'static str = "abbr";
    const ATTR: &'static str = "title";
}

// =============================================================================
// WrapTag
// =============================================================================

/// Runtime wrap tag with its markers precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapTag {
    tag: CompactString,
    attr: CompactString,
    open_marker: CompactString,
    close_tag: CompactString,
}

impl WrapTag {
    /// Create a wrap tag from an element name and payload attribute.
    pub fn new(tag: &str, attr: &str) -> Self {
        Self {
            open_marker: format_compact!("<{tag} {attr}="),
            close_tag: format_compact!("</{tag}>"),
            tag: tag.into(),
            attr: attr.into(),
        }
    }

    /// `<a href="...">` / `</a>`.
    pub fn link() -> Self {
        LinkKind::wrap_tag()
    }

    /// `<abbr title="...">` / `</abbr>`.
    pub fn note() -> Self {
        NoteKind::wrap_tag()
    }

    /// Element name, e.g. `a`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute carrying the payload, e.g. `href`.
    pub fn attr(&self) -> &str {
        &self.attr
    }

    /// Prefix every open tag of this kind starts with, e.g. `<a href=`.
    pub fn open_marker(&self) -> &str {
        &self.open_marker
    }

    /// Closing tag, e.g. `</a>`.
    pub fn close_tag(&self) -> &str {
        &self.close_tag
    }

    /// Render the opening tag for a payload.
    pub fn open_tag(&self, payload: &str, escape: bool) -> String {
        let mut out = String::with_capacity(self.open_marker.len() + payload.len() + 3);
        out.push_str(&self.open_marker);
        out.push('"');
        if escape {
            out.push_str(&escape_attr(payload));
        } else {
            out.push_str(payload);
        }
        out.push_str("\">");
        out
    }

    /// Render `open + term + close`.
    pub fn wrap(&self, term: &str, payload: &str, escape: bool) -> String {
        let mut out = self.open_tag(payload, escape);
        out.push_str(term);
        out.push_str(&self.close_tag);
        out
    }
}

/// Escape attribute value special characters.
fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_markers() {
        let tag = WrapTag::link();
        assert_eq!(tag.open_marker(), "<a href=");
        assert_eq!(tag.close_tag(), "</a>");
        assert_eq!(tag.open_tag("x.com", false), "<a href=\"x.com\">");
    }

    #[test]
    fn test_note_markers() {
        let tag = WrapTag::note();
        assert_eq!(tag.tag(), "abbr");
        assert_eq!(tag.attr(), "title");
        assert_eq!(
            tag.wrap("SMT", "Satisfiability Modulo Theories", false),
            "<abbr title=\"Satisfiability Modulo Theories\">SMT</abbr>"
        );
    }

    #[test]
    fn test_escape_payload() {
        let tag = WrapTag::link();
        assert_eq!(
            tag.open_tag("https://x.org/?a=1&b=\"2\"", true),
            "<a href=\"https://x.org/?a=1&amp;b=&quot;2&quot;\">"
        );
        assert_eq!(tag.open_tag("a&b", false), "<a href=\"a&b\">");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("<b>"), "&lt;b&gt;");
        assert_eq!(escape_attr("plain"), "plain");
    }
}
