//! Page processing pipeline.

use super::{IdentityTransform, Transform};

// =============================================================================
// Pipeline
// =============================================================================

/// Synchronous pipeline for page processing.
///
/// Wraps the page markup and provides a fluent API for passes.
///
/// # Example
///
/// ```
/// use auto_annotate::{LinkPass, NotePass, Pipeline, TermMap};
///
/// let links: TermMap = [("UCLID5", "https://github.com/uclid-org/uclid")].into_iter().collect();
/// let notes: TermMap = [("SMT", "Satisfiability Modulo Theories")].into_iter().collect();
///
/// let page = Pipeline::new("UCLID5 uses SMT")
///     .pipe(LinkPass::new(&links))
///     .pipe(NotePass::new(&notes))
///     .into_inner();
///
/// assert_eq!(
///     page,
///     "<a href=\"https://github.com/uclid-org/uclid\">UCLID5</a> uses \
///      <abbr title=\"Satisfiability Modulo Theories\">SMT</abbr>"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    doc: String,
}

impl Pipeline {
    /// Create a new pipeline from page markup.
    #[inline]
    pub fn new(doc: impl Into<String>) -> Self {
        Self { doc: doc.into() }
    }

    /// Apply a transform to the page.
    #[inline]
    pub fn pipe<T: Transform>(self, transform: T) -> Self {
        Self {
            doc: transform.transform(self.doc),
        }
    }

    /// Only applies the transform if `condition` is true.
    #[inline]
    pub fn pipe_if<T: Transform>(self, condition: bool, transform: T) -> Self {
        if condition {
            self.pipe(transform)
        } else {
            self.pipe(IdentityTransform)
        }
    }

    /// Inspect the page without consuming the pipeline.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&str),
    {
        f(&self.doc);
        self
    }

    /// Tap into the pipeline to extract data while continuing the chain.
    #[inline]
    pub fn tap<F, R>(self, f: F) -> (Self, R)
    where
        F: FnOnce(&str) -> R,
    {
        let result = f(&self.doc);
        (self, result)
    }

    /// Consume the pipeline and return the page.
    #[inline]
    pub fn into_inner(self) -> String {
        self.doc
    }
}

impl From<String> for Pipeline {
    #[inline]
    fn from(doc: String) -> Self {
        Self::new(doc)
    }
}

impl From<Pipeline> for String {
    #[inline]
    fn from(pipeline: Pipeline) -> Self {
        pipeline.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terms::TermMap;
    use crate::transform::{LinkPass, NotePass};

    #[test]
    fn test_pipe_if_skips() {
        let links: TermMap = [("AI", "x.com")].into_iter().collect();
        let page = Pipeline::new("AI")
            .pipe_if(false, LinkPass::new(&links))
            .into_inner();
        assert_eq!(page, "AI");
    }

    #[test]
    fn test_links_then_notes() {
        let links: TermMap = [("NASA", "https://nasa.gov")].into_iter().collect();
        let notes: TermMap = [("NASA", "space agency")].into_iter().collect();

        let (pipeline, linked) = Pipeline::new("NASA")
            .pipe(LinkPass::new(&links))
            .tap(|doc| doc.to_string());
        assert_eq!(linked, "<a href=\"https://nasa.gov\">NASA</a>");

        let mut seen = 0;
        let page: String = pipeline
            .pipe(NotePass::new(&notes))
            .inspect(|doc| seen = doc.len())
            .into();
        assert_eq!(
            page,
            "<a href=\"https://nasa.gov\"><abbr title=\"space agency\">NASA</abbr></a>"
        );
        assert_eq!(seen, page.len());
    }
}
