//! Annotation cache for watch-mode rebuilds.
//!
//! Pages are keyed by a fingerprint of everything that affects the output:
//! the body, both term maps and the options.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::hash::{Fingerprint, StableHasher};
use crate::options::AnnotateOptions;
use crate::page::annotate_page;
use crate::terms::{SiteTerms, TermMap};
use crate::wrap::{LinkKind, NoteKind, WrapKind};

/// Fingerprint of one page annotation request.
pub fn page_fingerprint(
    body: &str,
    links: &TermMap,
    notes: &TermMap,
    options: &AnnotateOptions,
) -> Fingerprint {
    let hasher = StableHasher::new().update_str(body);
    let hasher = links.hash_into(hasher.update_str(LinkKind::NAME));
    let hasher = notes.hash_into(hasher.update_str(NoteKind::NAME));
    options.hash_into(hasher).finish()
}

/// Non-thread-safe annotation cache.
pub type PageCache = FxHashMap<Fingerprint, Arc<str>>;

/// Thread-safe shared annotation cache.
///
/// Uses `parking_lot::RwLock`; clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct AnnotationCache {
    inner: Arc<RwLock<PageCache>>,
}

impl AnnotationCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached annotation of `body`, computing it on a miss.
    pub fn get_or_annotate(
        &self,
        body: &str,
        terms: &SiteTerms,
        options: &AnnotateOptions,
    ) -> Arc<str> {
        let key = page_fingerprint(body, &terms.links, &terms.notes, options);
        if let Some(hit) = self.get(key) {
            tracing::trace!(%key, "Annotation cache hit");
            return hit;
        }

        let annotated: Arc<str> = Arc::from(annotate_page(body, &terms.links, &terms.notes, options));
        self.inner.write().insert(key, Arc::clone(&annotated));
        tracing::debug!(%key, "Annotation cached");
        annotated
    }

    /// Get a cached page by fingerprint.
    pub fn get(&self, key: Fingerprint) -> Option<Arc<str>> {
        self.inner.read().get(&key).cloned()
    }

    /// Check if the cache contains a fingerprint.
    pub fn contains(&self, key: Fingerprint) -> bool {
        self.inner.read().contains_key(&key)
    }

    /// Get the number of cached pages.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all cached pages.
    pub fn clear(&self) {
        self.inner.write().clear();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    static_assertions::assert_impl_all!(AnnotationCache: Send, Sync, Clone);

    fn terms() -> SiteTerms {
        SiteTerms::new(
            [("AI", "x.com")].into_iter().collect(),
            [("ML", "machine learning")].into_iter().collect(),
        )
    }

    #[test]
    fn test_get_or_annotate_caches() {
        let cache = AnnotationCache::new();
        let options = AnnotateOptions::default();
        let terms = terms();

        let first = cache.get_or_annotate("AI and ML", &terms, &options);
        assert_eq!(
            &*first,
            "<a href=\"x.com\">AI</a> and <abbr title=\"machine learning\">ML</abbr>"
        );
        assert_eq!(cache.len(), 1);

        let second = cache.get_or_annotate("AI and ML", &terms, &options);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_fingerprint_covers_inputs() {
        let terms = terms();
        let options = AnnotateOptions::default();
        let base = page_fingerprint("AI", &terms.links, &terms.notes, &options);

        assert_eq!(base, page_fingerprint("AI", &terms.links, &terms.notes, &options));
        assert_ne!(base, page_fingerprint("AI!", &terms.links, &terms.notes, &options));
        // same map as links vs. as notes
        assert_ne!(base, page_fingerprint("AI", &terms.notes, &terms.links, &options));
        assert_ne!(
            base,
            page_fingerprint("AI", &terms.links, &terms.notes, &AnnotateOptions::TEXTUAL)
        );
    }

    #[test]
    fn test_shared_between_clones() {
        let cache = AnnotationCache::new();
        let other = cache.clone();
        let terms = terms();
        let options = AnnotateOptions::default();

        cache.get_or_annotate("ML", &terms, &options);
        let key = page_fingerprint("ML", &terms.links, &terms.notes, &options);
        assert!(other.contains(key));
    }
}
