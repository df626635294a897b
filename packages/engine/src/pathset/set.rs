//! Canonical Path Tree
//!
//! [`PathSet`] is the normalized form every selection spec collapses into:
//! a recursive map from field name to the subtree selected beneath it. An
//! empty subtree marks a complete path.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Shared empty tree returned for absent children, so scoping into a path
/// that selects nothing allocates nothing.
static EMPTY: PathSet = PathSet::new();

/// A set of field paths in canonical nested form.
///
/// Each key is a single path segment; its value is the `PathSet` of
/// segments selected beneath it. A field mapped to an empty set is a
/// *terminal* path: the selection stops there and covers the whole
/// subtree. Keys iterate in sorted order.
///
/// # Examples
///
/// ```rust
/// use sylect_engine::PathSet;
///
/// let mut set = PathSet::new();
/// set.insert_dotted("user.email");
/// set.insert_dotted("user.name");
/// set.insert_dotted("id");
///
/// assert!(set.contains("user"));
/// assert!(set.terminates_at("id"));
/// assert!(!set.terminates_at("user"));
/// assert_eq!(set.leaf_paths(), vec!["id", "user.email", "user.name"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathSet {
    entries: BTreeMap<String, PathSet>,
}

impl PathSet {
    /// Create an empty path set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// True when no paths are present.
    ///
    /// An empty set carries scope-dependent meaning: as a select tree it
    /// imposes no restriction, as an exclude tree it removes nothing.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of top-level segments in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when `name` appears as a top-level segment.
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// True when `name` is present with an empty subtree, i.e. the set
    /// contains a path that ends exactly at `name`.
    #[inline]
    #[must_use]
    pub fn terminates_at(&self, name: &str) -> bool {
        self.entries.get(name).is_some_and(PathSet::is_empty)
    }

    /// Subtree recorded under `name`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PathSet> {
        self.entries.get(name)
    }

    /// Subtree recorded under `name`, or the shared empty set when the
    /// segment is absent. This is the lookup used when deriving a nested
    /// scope: missing segments scope to "nothing selected beneath".
    #[inline]
    #[must_use]
    pub fn child(&self, name: &str) -> &PathSet {
        self.entries.get(name).unwrap_or(&EMPTY)
    }

    /// Insert a path given as individual segments, creating intermediate
    /// nodes as needed. Inserting a prefix of an existing path leaves the
    /// existing subtree intact.
    pub fn insert_path<I>(&mut self, segments: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut node = self;
        for segment in segments {
            node = node.entries.entry(segment.into()).or_default();
        }
    }

    /// Insert a dot-delimited path such as `"user.address.city"`.
    ///
    /// Splitting is purely syntactic: segments are not trimmed, and a
    /// stray empty segment (from input like `"a..b"`) is inserted as an
    /// empty-string key, which no real field name matches.
    #[inline]
    pub fn insert_dotted(&mut self, path: &str) {
        self.insert_path(path.split('.'));
    }

    /// Iterate top-level segments and their subtrees in sorted order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PathSet)> {
        self.entries.iter().map(|(name, child)| (name.as_str(), child))
    }

    /// Flatten the tree back into sorted dot-delimited paths, one per
    /// terminal node. Re-inserting them reproduces the set exactly.
    #[must_use]
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_leaves("", &mut paths);
        paths
    }

    fn collect_leaves(&self, prefix: &str, paths: &mut Vec<String>) {
        for (name, child) in &self.entries {
            let path = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{prefix}.{name}")
            };
            if child.is_empty() {
                paths.push(path);
            } else {
                child.collect_leaves(&path, paths);
            }
        }
    }
}

/// Renders the set as its comma-joined leaf paths, the same shape accepted
/// by string specs and query parameters.
impl fmt::Display for PathSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.leaf_paths().join(","))
    }
}

/// Collects dot-delimited paths into a merged set.
impl<S: AsRef<str>> FromIterator<S> for PathSet {
    fn from_iter<I: IntoIterator<Item = S>>(paths: I) -> Self {
        let mut set = PathSet::new();
        for path in paths {
            set.insert_dotted(path.as_ref());
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_path_merges_shared_prefixes() {
        let mut set = PathSet::new();
        set.insert_dotted("a.b.c");
        set.insert_dotted("a.b.d");
        set.insert_dotted("e");
        set.insert_dotted("f.g");

        assert_eq!(set.len(), 3);
        let b = set.child("a").child("b");
        assert!(b.terminates_at("c"));
        assert!(b.terminates_at("d"));
        assert!(set.terminates_at("e"));
        assert!(set.child("f").terminates_at("g"));
    }

    #[test]
    fn inserting_prefix_keeps_existing_subtree() {
        let mut set = PathSet::new();
        set.insert_dotted("a.b");
        set.insert_dotted("a");

        assert!(!set.terminates_at("a"));
        assert!(set.child("a").terminates_at("b"));
    }

    #[test]
    fn child_of_missing_segment_is_empty() {
        let set = PathSet::new();
        assert!(set.child("anything").is_empty());
        assert!(set.get("anything").is_none());
    }

    #[test]
    fn terminates_at_requires_empty_subtree() {
        let set: PathSet = ["a.b"].into_iter().collect();
        assert!(set.contains("a"));
        assert!(!set.terminates_at("a"));
        assert!(set.child("a").terminates_at("b"));
    }

    #[test]
    fn leaf_paths_round_trip() {
        let set: PathSet = ["a.b.c", "a.b.d", "e", "f.g"].into_iter().collect();
        let paths = set.leaf_paths();
        assert_eq!(paths, vec!["a.b.c", "a.b.d", "e", "f.g"]);

        let rebuilt: PathSet = paths.iter().collect();
        assert_eq!(rebuilt, set);
    }

    #[test]
    fn display_matches_leaf_paths() {
        let set: PathSet = ["f.g", "e"].into_iter().collect();
        assert_eq!(set.to_string(), "e,f.g");
        assert_eq!(PathSet::new().to_string(), "");
    }

    #[test]
    fn serde_round_trip_preserves_nesting() {
        let set: PathSet = ["user.address.city", "user.name", "id"].into_iter().collect();
        let encoded = serde_json::to_string(&set).expect("serialize path set");
        assert_eq!(encoded, r#"{"id":{},"user":{"address":{"city":{}},"name":{}}}"#);

        let decoded: PathSet = serde_json::from_str(&encoded).expect("deserialize path set");
        assert_eq!(decoded, set);
    }

    #[test]
    fn empty_segments_are_preserved_verbatim() {
        let mut set = PathSet::new();
        set.insert_dotted("a..b");
        assert!(set.child("a").contains(""));
        assert!(set.child("a").child("").terminates_at("b"));
    }
}
