//! Whole-page annotation: the link pass, then the note pass.

use crate::annotator::PassStats;
use crate::options::AnnotateOptions;
use crate::terms::{SiteTerms, TermMap};
use crate::transform::{LinkPass, NotePass, Pipeline};

/// Statistics for both passes over one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageStats {
    /// Link pass.
    pub links: PassStats,
    /// Note pass, run on the link pass output.
    pub notes: PassStats,
}

impl PageStats {
    /// Total wrapped occurrences across both passes.
    pub fn wrapped(&self) -> usize {
        self.links.wrapped + self.notes.wrapped
    }
}

/// Annotate a page body with links, then notes.
///
/// The note pass sees the link pass's output, so a term in both maps ends up
/// as `<a ...><abbr ...>term</abbr></a>`.
pub fn annotate_page(
    body: &str,
    links: &TermMap,
    notes: &TermMap,
    options: &AnnotateOptions,
) -> String {
    Pipeline::new(body)
        .pipe_if(!links.is_empty(), LinkPass::with_options(links, *options))
        .pipe_if(!notes.is_empty(), NotePass::with_options(notes, *options))
        .into_inner()
}

/// Like [`annotate_page`], also returning what each pass did.
pub fn annotate_page_with_stats(
    body: &str,
    links: &TermMap,
    notes: &TermMap,
    options: &AnnotateOptions,
) -> (String, PageStats) {
    let (linked, link_stats) = LinkPass::with_options(links, *options).run(body.to_owned());
    let (noted, note_stats) = NotePass::with_options(notes, *options).run(linked);
    (
        noted,
        PageStats {
            links: link_stats,
            notes: note_stats,
        },
    )
}

impl SiteTerms {
    /// Annotate a page body with this site's links and notes.
    pub fn annotate(&self, body: &str, options: &AnnotateOptions) -> String {
        annotate_page(body, &self.links, &self.notes, options)
    }

    /// Annotate a page body and report what each pass did.
    pub fn annotate_with_stats(&self, body: &str, options: &AnnotateOptions) -> (String, PageStats) {
        annotate_page_with_stats(body, &self.links, &self.notes, options)
    }
}
