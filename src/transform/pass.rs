//! One annotation pass: a term map applied with one wrap kind.

use std::marker::PhantomData;

use crate::annotator::{PassStats, run_pass};
use crate::options::AnnotateOptions;
use crate::terms::TermMap;
use crate::wrap::{LinkKind, NoteKind, WrapKind};

use super::Transform;

/// Applies every term of a map as a `K` wrap.
#[derive(Debug)]
pub struct Pass<'a, K: WrapKind> {
    terms: &'a TermMap,
    options: AnnotateOptions,
    _kind: PhantomData<K>,
}

/// `<a href>` pass.
pub type LinkPass<'a> = Pass<'a, LinkKind>;

/// `<abbr title>` pass.
pub type NotePass<'a> = Pass<'a, NoteKind>;

impl<K: WrapKind> Clone for Pass<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: WrapKind> Copy for Pass<'_, K> {}

impl<'a, K: WrapKind> Pass<'a, K> {
    /// Create a pass with default options.
    pub fn new(terms: &'a TermMap) -> Self {
        Self::with_options(terms, AnnotateOptions::default())
    }

    /// Create a pass with explicit options.
    pub fn with_options(terms: &'a TermMap, options: AnnotateOptions) -> Self {
        Self {
            terms,
            options,
            _kind: PhantomData,
        }
    }

    /// The term map this pass applies.
    pub fn terms(&self) -> &'a TermMap {
        self.terms
    }

    /// Options this pass runs with.
    pub fn options(&self) -> &AnnotateOptions {
        &self.options
    }

    /// Run the pass and keep its statistics.
    pub fn run(self, doc: String) -> (String, PassStats) {
        run_pass(doc, self.terms, &K::wrap_tag(), &self.options)
    }
}

impl<K: WrapKind> Transform for Pass<'_, K> {
    fn transform(self, doc: String) -> String {
        if self.terms.is_empty() {
            return doc;
        }
        tracing::trace!(kind = K::NAME, terms = self.terms.len(), "Running pass");
        self.run(doc).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_pass() {
        let terms: TermMap = [("World", "x.com")].into_iter().collect();
        let out = LinkPass::new(&terms).transform("Hello World".to_string());
        assert_eq!(out, "Hello <a href=\"x.com\">World</a>");
    }

    #[test]
    fn test_note_pass_stats() {
        let terms: TermMap = [("SMT", "Satisfiability Modulo Theories"), ("SAT", "s")]
            .into_iter()
            .collect();
        let (out, stats) = NotePass::new(&terms).run("SMT solvers".to_string());
        assert_eq!(
            out,
            "<abbr title=\"Satisfiability Modulo Theories\">SMT</abbr> solvers"
        );
        assert_eq!(stats.wrapped, 1);
        assert_eq!(stats.missing, ["SAT"]);
    }

    #[test]
    fn test_pass_is_copy() {
        let terms = TermMap::new();
        let pass = LinkPass::new(&terms);
        let again = pass;
        assert!(pass.terms().is_empty());
        assert!(again.options().skip_inside_markup);
    }
}
