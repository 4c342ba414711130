//! Core transform trait.

/// Transform a page of markup into a new page of markup.
pub trait Transform: Sized {
    /// Transform the document.
    fn transform(self, doc: String) -> String;
}

// =============================================================================
// IdentityTransform
// =============================================================================

/// Identity transform that returns the document unchanged.
///
/// Lets one branch of a conditional skip a pass, e.g. when a site has no
/// note map.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTransform;

impl Transform for IdentityTransform {
    #[inline]
    fn transform(self, doc: String) -> String {
        doc
    }
}
