//! Term maps: literal text keys mapped to annotation payloads.
//!
//! A `TermMap` keeps insertion order. That order only matters as the
//! tie-break between keys of equal length, see [`TermMap::processing_order`].

use std::fmt;
use std::path::Path;

use compact_str::CompactString;
use rustc_hash::FxHashMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use smallvec::SmallVec;

use crate::error::{AnnotateError, AnnotateResult};
use crate::hash::StableHasher;

/// File name of the link map inside a site data directory.
pub const LINKS_FILE: &str = "auto_links.json";

/// File name of the note map inside a site data directory.
pub const NOTES_FILE: &str = "auto_notes.json";

// =============================================================================
// Term
// =============================================================================

/// A single term and its payload (URL or tooltip text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    key: CompactString,
    payload: String,
}

impl Term {
    /// The literal text to find.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// URL or tooltip text written into the wrap attribute.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Length in characters, used for longest-first ordering.
    pub fn char_len(&self) -> usize {
        self.key.chars().count()
    }
}

// =============================================================================
// TermMap
// =============================================================================

/// Insertion-ordered map of unique, non-empty term keys to payloads.
#[derive(Debug, Clone, Default)]
pub struct TermMap {
    terms: Vec<Term>,
    index: FxHashMap<CompactString, usize>,
}

impl TermMap {
    /// Create an empty term map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update a term.
    ///
    /// An existing key keeps its position and gets the new payload, which is
    /// returned as the old one.
    pub fn insert(
        &mut self,
        key: impl Into<CompactString>,
        payload: impl Into<String>,
    ) -> AnnotateResult<Option<String>> {
        let key = key.into();
        if key.is_empty() {
            return Err(AnnotateError::EmptyKey);
        }
        let payload = payload.into();
        match self.index.get(&key).copied() {
            Some(pos) => Ok(Some(std::mem::replace(&mut self.terms[pos].payload, payload))),
            None => {
                self.push(key, payload);
                Ok(None)
            }
        }
    }

    /// Insert a term, rejecting empty and duplicate keys.
    pub fn try_insert(
        &mut self,
        key: impl Into<CompactString>,
        payload: impl Into<String>,
    ) -> AnnotateResult<()> {
        let key = key.into();
        if key.is_empty() {
            return Err(AnnotateError::EmptyKey);
        }
        if self.index.contains_key(&key) {
            return Err(AnnotateError::DuplicateKey(key.into()));
        }
        self.push(key, payload.into());
        Ok(())
    }

    fn push(&mut self, key: CompactString, payload: String) {
        self.index.insert(key.clone(), self.terms.len());
        self.terms.push(Term { key, payload });
    }

    /// Look up a payload by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&pos| self.terms[pos].payload())
    }

    /// Check if a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the map has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate terms in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter()
    }

    /// Terms in the order a pass applies them: longest key first.
    ///
    /// Equal lengths keep insertion order, so a longer term is always wrapped
    /// before any shorter term that could be a substring of it.
    pub fn processing_order(&self) -> SmallVec<[&Term; 16]> {
        let mut order: SmallVec<[&Term; 16]> = self.terms.iter().collect();
        // stable sort
        order.sort_by(|a, b| b.char_len().cmp(&a.char_len()));
        order
    }

    /// Parse a JSON object of `"term": "payload"` pairs.
    ///
    /// Keys keep the order they first appear in the text; a repeated key
    /// takes its last payload.
    pub fn from_json_str(json: &str) -> AnnotateResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON term map file.
    pub fn from_json_file(path: impl AsRef<Path>) -> AnnotateResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| AnnotateError::io(path, e))?;
        let map: Self = serde_json::from_str(&text).map_err(|e| AnnotateError::json(path, e))?;
        tracing::info!(path = %path.display(), terms = map.len(), "Loaded term map");
        Ok(map)
    }

    /// Like [`TermMap::from_json_file`], but a missing file is an empty map.
    pub fn load_optional(path: impl AsRef<Path>) -> AnnotateResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No term map, using empty map");
            return Ok(Self::new());
        }
        Self::from_json_file(path)
    }

    /// Feed every term, in insertion order, into a hasher.
    pub(crate) fn hash_into(&self, hasher: StableHasher) -> StableHasher {
        self.terms.iter().fold(hasher.update_usize(self.len()), |h, t| {
            h.update_str(t.key()).update_str(t.payload())
        })
    }
}

/// Collect pairs into a map. Empty keys are dropped and later duplicates
/// replace earlier payloads.
impl<K, V> FromIterator<(K, V)> for TermMap
where
    K: Into<CompactString>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, payload) in iter {
            // only fails on empty keys
            let _ = map.insert(key, payload);
        }
        map
    }
}

impl PartialEq for TermMap {
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms
    }
}

impl Eq for TermMap {}

impl<'a> IntoIterator for &'a TermMap {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

// =============================================================================
// Deserialize
// =============================================================================

struct TermMapVisitor;

impl<'de> Visitor<'de> for TermMapVisitor {
    type Value = TermMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of term strings to payload strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<TermMap, A::Error> {
        let mut map = TermMap::new();
        while let Some((key, payload)) = access.next_entry::<String, String>()? {
            // a repeated key keeps its first position and takes the last payload
            map.insert(key, payload).map_err(de::Error::custom)?;
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for TermMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TermMapVisitor)
    }
}

// =============================================================================
// SiteTerms
// =============================================================================

/// Both term maps a site uses: links first, then notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct SiteTerms {
    /// Term → URL, applied as `<a href>`.
    pub links: TermMap,
    /// Term → description, applied as `<abbr title>`.
    pub notes: TermMap,
}

impl SiteTerms {
    /// Bundle a link map and a note map.
    pub fn new(links: TermMap, notes: TermMap) -> Self {
        Self { links, notes }
    }

    /// Load `auto_links.json` and `auto_notes.json` from a data directory.
    ///
    /// Either file may be absent.
    pub fn load(data_dir: impl AsRef<Path>) -> AnnotateResult<Self> {
        let dir = data_dir.as_ref();
        Ok(Self {
            links: TermMap::load_optional(dir.join(LINKS_FILE))?,
            notes: TermMap::load_optional(dir.join(NOTES_FILE))?,
        })
    }

    /// Check if both maps are empty.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty() && self.notes.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
