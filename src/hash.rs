//! Deterministic fingerprints for annotation inputs
//!
//! Uses blake3 so the same page and term maps hash identically across
//! process restarts, e.g. between watch-mode rebuilds.

use std::fmt;

// =============================================================================
// StableHasher - Builder Pattern
// =============================================================================

/// A deterministic hasher using blake3
///
/// Strings are length-prefixed, so `("ab", "c")` and `("a", "bc")` differ.
pub struct StableHasher {
    inner: blake3::Hasher,
}

impl StableHasher {
    /// Create a new StableHasher
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: blake3::Hasher::new(),
        }
    }

    /// Update with raw bytes
    #[inline]
    pub fn update(mut self, data: &[u8]) -> Self {
        self.inner.update(data);
        self
    }

    /// Update with a length-prefixed string
    #[inline]
    pub fn update_str(self, s: &str) -> Self {
        self.update_usize(s.len()).update(s.as_bytes())
    }

    /// Update with a usize value (little-endian u64)
    #[inline]
    pub fn update_usize(self, v: usize) -> Self {
        self.update(&(v as u64).to_le_bytes())
    }

    /// Update with a bool as one byte
    #[inline]
    pub fn update_bool(self, v: bool) -> Self {
        self.update(&[v as u8])
    }

    /// Finish with the first 8 bytes of blake3 output as a fingerprint
    #[inline]
    pub fn finish(self) -> Fingerprint {
        let hash = self.inner.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[..8]);
        Fingerprint(u64::from_le_bytes(bytes))
    }
}

impl Default for StableHasher {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Fingerprint
// =============================================================================

/// Stable 64-bit identity of an annotation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(u64);

impl Fingerprint {
    /// Wrap a raw 64-bit value.
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let a = StableHasher::new().update_str("page").update_bool(true).finish();
        let b = StableHasher::new().update_str("page").update_bool(true).finish();
        assert_eq!(a, b);
    }

    #[test]
    fn test_length_prefix_separates_fields() {
        let a = StableHasher::new().update_str("ab").update_str("c").finish();
        let b = StableHasher::new().update_str("a").update_str("bc").finish();
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_is_fixed_width_hex() {
        assert_eq!(Fingerprint::from_raw(255).to_string(), "00000000000000ff");
    }
}
