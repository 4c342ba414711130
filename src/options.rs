//! Annotation options.

use serde::{Deserialize, Serialize};

use crate::hash::StableHasher;

/// Configuration shared by the link and note passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotateOptions {
    /// Skip occurrences that sit inside a tag, such as text inside an
    /// `href` value written by an earlier pass.
    ///
    /// With this off, matching is purely textual and a notes pass can wrap
    /// text inside a link's attribute.
    pub skip_inside_markup: bool,
    /// Escape `& " < >` in payloads before writing the attribute.
    ///
    /// Off by default: payloads are written verbatim.
    pub escape_payloads: bool,
}

impl AnnotateOptions {
    /// Plain textual matching with verbatim payloads.
    pub const TEXTUAL: Self = Self {
        skip_inside_markup: false,
        escape_payloads: false,
    };

    /// Create the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether occurrences inside a tag are skipped.
    pub fn with_skip_inside_markup(mut self, skip: bool) -> Self {
        self.skip_inside_markup = skip;
        self
    }

    /// Set whether payloads are escaped.
    pub fn with_escape_payloads(mut self, escape: bool) -> Self {
        self.escape_payloads = escape;
        self
    }

    pub(crate) fn hash_into(&self, hasher: StableHasher) -> StableHasher {
        hasher
            .update_bool(self.skip_inside_markup)
            .update_bool(self.escape_payloads)
    }
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        Self {
            skip_inside_markup: true,
            escape_payloads: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = AnnotateOptions::default();
        assert!(options.skip_inside_markup);
        assert!(!options.escape_payloads);
    }

    #[test]
    fn test_deserialize_partial() {
        let options: AnnotateOptions = serde_json::from_str(r#"{"escape_payloads": true}"#).unwrap();
        assert!(options.skip_inside_markup);
        assert!(options.escape_payloads);

        let options: AnnotateOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, AnnotateOptions::default());
    }

    #[test]
    fn test_builders() {
        let options = AnnotateOptions::new()
            .with_skip_inside_markup(false)
            .with_escape_payloads(true);
        assert!(!options.skip_inside_markup);
        assert!(options.escape_payloads);
        assert_ne!(options, AnnotateOptions::TEXTUAL);
    }
}
