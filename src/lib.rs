//! auto-annotate - wrap known terms in rendered HTML
//!
//! Given a page of already-rendered markup and a map of terms, every
//! occurrence of every term is wrapped as a hyperlink (`<a href>`) or a
//! tooltip note (`<abbr title>`). Longer terms are wrapped first, and an
//! occurrence already inside a wrap of the same kind is left alone.
//!
//! ## Modules
//! - `annotator`: the find-and-wrap engine and pass statistics
//! - `terms`: term maps and JSON loading
//! - `wrap`: link and note wrap tags
//! - `transform`: passes and the page pipeline
//! - `cache`: fingerprint-keyed cache of annotated pages
//!
//! ## Usage
//!
//! ```
//! use auto_annotate::{annotate_links, TermMap};
//!
//! let links: TermMap = [("World", "x.com")].into_iter().collect();
//! assert_eq!(annotate_links("Hello World", &links), "Hello <a href=\"x.com\">World</a>");
//! ```

// =============================================================================
// Core modules
// =============================================================================

/// Find-and-wrap engine
pub mod annotator;

/// Term maps
pub mod terms;

/// Wrap tags
pub mod wrap;

/// Annotation options
pub mod options;

/// Passes and the page pipeline
pub mod transform;

/// Link pass followed by note pass
pub mod page;

/// Batch annotation of independent pages
pub mod batch;

/// Cache of annotated pages
pub mod cache;

/// Stable fingerprints
pub mod hash;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

pub use annotator::{PassStats, annotate_with, run_pass};
pub use batch::annotate_batch;
pub use cache::{AnnotationCache, page_fingerprint};
pub use error::{AnnotateError, AnnotateResult};
pub use hash::{Fingerprint, StableHasher};
pub use options::AnnotateOptions;
pub use page::{PageStats, annotate_page, annotate_page_with_stats};
pub use terms::{SiteTerms, Term, TermMap};
pub use transform::{IdentityTransform, LinkPass, NotePass, Pass, Pipeline, Transform};
pub use wrap::{LinkKind, NoteKind, WrapKind, WrapTag};

/// Annotate `document` with `terms` as `K` wraps, using default options.
pub fn annotate<K: WrapKind>(document: &str, terms: &TermMap) -> String {
    annotate_with(document, terms, &K::wrap_tag(), &AnnotateOptions::default())
}

/// Wrap every term as `<a href="PAYLOAD">term</a>`.
pub fn annotate_links(document: &str, links: &TermMap) -> String {
    annotate::<LinkKind>(document, links)
}

/// Wrap every term as `<abbr title="PAYLOAD">term</abbr>`.
pub fn annotate_notes(document: &str, notes: &TermMap) -> String {
    annotate::<NoteKind>(document, notes)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    static_assertions::assert_impl_all!(TermMap: Send, Sync);
    static_assertions::assert_impl_all!(SiteTerms: Send, Sync);

    #[test]
    fn test_annotate_links() {
        let links: TermMap = [("Turing", "a"), ("Turing Award", "b")].into_iter().collect();
        assert_eq!(
            annotate_links("Turing Award winner", &links),
            "<a href=\"b\">Turing Award</a> winner"
        );
    }

    #[test]
    fn test_annotate_notes() {
        let notes: TermMap = [("AI", "Artificial Intelligence")].into_iter().collect();
        assert_eq!(
            annotate_notes("AI and AI again", &notes),
            "<abbr title=\"Artificial Intelligence\">AI</abbr> and \
             <abbr title=\"Artificial Intelligence\">AI</abbr> again"
        );
    }

    #[test]
    fn test_notes_then_links_nest_too() {
        let links: TermMap = [("SMT", "https://smtlib.org")].into_iter().collect();
        let notes: TermMap = [("SMT", "Satisfiability Modulo Theories")].into_iter().collect();
        let out = annotate_links(&annotate_notes("SMT", &notes), &links);
        assert_eq!(
            out,
            "<abbr title=\"Satisfiability Modulo Theories\"><a href=\"https://smtlib.org\">SMT</a></abbr>"
        );
    }

    #[test]
    fn test_no_match_is_identity() {
        let links: TermMap = [("Gödel", "g")].into_iter().collect();
        let doc = "<p>Hello <b>World</b></p>\n";
        assert_eq!(annotate_links(doc, &links), doc);
        assert_eq!(annotate_notes(doc, &TermMap::new()), doc);
    }
}
