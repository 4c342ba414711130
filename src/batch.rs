//! Annotating several independent pages.
//!
//! Each page is still annotated term by term on one thread; with the
//! `parallel` feature, different pages run on the rayon pool.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::options::AnnotateOptions;
use crate::terms::SiteTerms;

/// Annotate every page with the same term maps. Output order matches input.
pub fn annotate_batch<S>(pages: &[S], terms: &SiteTerms, options: &AnnotateOptions) -> Vec<String>
where
    S: AsRef<str> + Sync,
{
    tracing::debug!(pages = pages.len(), "Annotating batch");

    #[cfg(feature = "parallel")]
    {
        pages
            .par_iter()
            .map(|page| terms.annotate(page.as_ref(), options))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        pages
            .iter()
            .map(|page| terms.annotate(page.as_ref(), options))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_preserves_order() {
        let terms = SiteTerms::new(
            [("index", "./index.html")].into_iter().collect(),
            Default::default(),
        );
        let pages = ["news index", "pubs", "back to index"];
        let out = annotate_batch(&pages, &terms, &AnnotateOptions::default());
        assert_eq!(
            out,
            [
                "news <a href=\"./index.html\">index</a>",
                "pubs",
                "back to <a href=\"./index.html\">index</a>",
            ]
        );
    }

    #[test]
    fn test_batch_matches_single_page() {
        let terms = SiteTerms::new(
            [("Turing Award", "b"), ("Turing", "a")].into_iter().collect(),
            [("Award", "prize")].into_iter().collect(),
        );
        let options = AnnotateOptions::default();
        let pages: Vec<String> = (0..8).map(|i| format!("Turing Award {i}")).collect();
        let out = annotate_batch(&pages, &terms, &options);
        for (page, annotated) in pages.iter().zip(&out) {
            assert_eq!(annotated, &terms.annotate(page, &options));
        }
    }
}
