//! The find-and-wrap engine.
//!
//! Markup is treated as flat text. Whether an occurrence is already inside a
//! wrap is decided by counting open and close markers of the current wrap
//! kind in the text before it, not by parsing.
//!
//! For each term, longest first:
//!
//! 1. find the next occurrence at or after the cursor
//! 2. if the prefix has as many open markers as close markers, wrap it and
//!    move the cursor past the inserted close tag
//! 3. otherwise leave it and move the cursor past the occurrence
//!
//! The document is rewritten in place, so later terms see the wraps earlier
//! terms inserted.

use compact_str::CompactString;
use tracing::{debug, trace};

use crate::options::AnnotateOptions;
use crate::terms::{Term, TermMap};
use crate::wrap::WrapTag;

// =============================================================================
// PassStats
// =============================================================================

/// What one pass did to a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Occurrences that were wrapped.
    pub wrapped: usize,
    /// Occurrences left alone because a same-kind wrap was still open.
    pub nested: usize,
    /// Occurrences left alone because they sat inside a tag.
    pub inside_markup: usize,
    /// Terms whose text never occurred.
    pub missing: Vec<CompactString>,
}

impl PassStats {
    /// Total occurrences visited.
    pub fn occurrences(&self) -> usize {
        self.wrapped + self.nested + self.inside_markup
    }

    /// Occurrences that were found but not wrapped.
    pub fn skipped(&self) -> usize {
        self.nested + self.inside_markup
    }
}

// =============================================================================
// Placement
// =============================================================================

/// Where an occurrence sits relative to existing markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// Outside any same-kind wrap: wrap it.
    Free,
    /// Inside an unclosed same-kind wrap.
    Nested,
    /// Between `<` and `>` of some tag.
    InsideMarkup,
}

fn classify(document: &str, pos: usize, tag: &WrapTag, options: &AnnotateOptions) -> Placement {
    if options.skip_inside_markup && inside_markup(document, pos) {
        return Placement::InsideMarkup;
    }
    let prefix = &document[..pos];
    let opened = prefix.matches(tag.open_marker()).count();
    let closed = prefix.matches(tag.close_tag()).count();
    if opened == closed {
        Placement::Free
    } else {
        Placement::Nested
    }
}

/// True if the last tag opened before `pos` has no `>` yet.
///
/// Only a `<` followed by an ASCII letter, `/` or `!` opens a tag; a bare
/// `<` in visible text does not.
fn inside_markup(document: &str, pos: usize) -> bool {
    let bytes = document.as_bytes();
    let tag_start = (0..pos).rev().find(|&i| {
        bytes[i] == b'<'
            && bytes
                .get(i + 1)
                .is_some_and(|&next| next.is_ascii_alphabetic() || next == b'/' || next == b'!')
    });
    match tag_start {
        Some(lt) => !bytes[lt..pos].contains(&b'>'),
        None => false,
    }
}

// =============================================================================
// Passes
// =============================================================================

/// Annotate `document` with every term of `terms`, using `tag` as the wrap.
///
/// Never fails: an empty map or a term that never occurs leaves the text as
/// it was.
pub fn annotate_with(
    document: &str,
    terms: &TermMap,
    tag: &WrapTag,
    options: &AnnotateOptions,
) -> String {
    run_pass(document.to_owned(), terms, tag, options).0
}

/// Run one full pass over an owned document and report what happened.
pub fn run_pass(
    mut document: String,
    terms: &TermMap,
    tag: &WrapTag,
    options: &AnnotateOptions,
) -> (String, PassStats) {
    let mut stats = PassStats::default();

    for term in terms.processing_order() {
        if !wrap_term(&mut document, term, tag, options, &mut stats) {
            stats.missing.push(term.key().into());
        }
    }

    debug!(
        tag = tag.tag(),
        terms = terms.len(),
        wrapped = stats.wrapped,
        nested = stats.nested,
        inside_markup = stats.inside_markup,
        missing = stats.missing.len(),
        "Annotation pass finished"
    );
    (document, stats)
}

/// Wrap every free occurrence of one term. Returns whether the term occurred.
fn wrap_term(
    document: &mut String,
    term: &Term,
    tag: &WrapTag,
    options: &AnnotateOptions,
    stats: &mut PassStats,
) -> bool {
    let key = term.key();
    if key.is_empty() {
        return false;
    }

    let mut cursor = 0;
    let mut found = false;

    while let Some(offset) = document[cursor..].find(key) {
        let pos = cursor + offset;
        found = true;

        let placement = classify(document.as_str(), pos, tag, options);
        trace!(term = key, pos, ?placement, "Occurrence");

        match placement {
            Placement::Free => {
                let wrapped = tag.wrap(key, term.payload(), options.escape_payloads);
                document.replace_range(pos..pos + key.len(), &wrapped);
                cursor = pos + wrapped.len();
                stats.wrapped += 1;
            }
            Placement::Nested => {
                cursor = pos + key.len();
                stats.nested += 1;
            }
            Placement::InsideMarkup => {
                cursor = pos + key.len();
                stats.inside_markup += 1;
            }
        }
    }

    found
}

// =============================================================================
// Tests
// =============================================================================
