//! Selection Spec Normalization
//!
//! Callers describe which paths to select or exclude in whatever shape is
//! closest to hand: a comma-delimited string, a list of dotted paths, or a
//! tree that is already canonical. [`PathSpec`] tags the accepted shapes
//! explicitly and [`PathSpec::normalize`] collapses them all into one
//! [`PathSet`].

use super::set::PathSet;

/// A selection spec in one of the accepted input shapes.
///
/// Every shape normalizes to the same canonical [`PathSet`]; a spec that is
/// already a tree passes through untouched, which makes normalization
/// idempotent.
///
/// # Examples
///
/// ```rust
/// use sylect_engine::{PathSet, PathSpec};
///
/// let from_text = PathSpec::from("a.b.c,a.b.d,e,f.g").normalize();
/// let from_paths = PathSpec::from(["a.b.c", "a.b.d", "e", "f.g"]).normalize();
/// assert_eq!(from_text, from_paths);
///
/// // Normalizing an already-canonical tree is the identity.
/// assert_eq!(PathSpec::from(from_text.clone()).normalize(), from_text);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSpec {
    /// Comma-delimited dotted paths, e.g. `"id,user.name"`
    Text(String),
    /// One dotted path per element
    Paths(Vec<String>),
    /// Already-normalized tree, passed through unchanged
    Tree(PathSet),
}

impl PathSpec {
    /// True when the spec normalizes to an empty set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            PathSpec::Text(text) => text.is_empty(),
            PathSpec::Paths(paths) => paths.is_empty(),
            PathSpec::Tree(set) => set.is_empty(),
        }
    }

    /// Collapse the spec into its canonical [`PathSet`].
    ///
    /// Strings split on `','` into paths and each path splits on `'.'`
    /// into segments; paths sharing a prefix merge into one subtree.
    /// Segments are matched verbatim; surrounding whitespace is neither
    /// trimmed nor rejected, it simply names a field that will not exist.
    /// An empty string or empty list yields the empty set.
    #[must_use]
    pub fn normalize(self) -> PathSet {
        match self {
            PathSpec::Tree(set) => set,
            PathSpec::Text(text) => {
                if text.is_empty() {
                    return PathSet::new();
                }
                text.split(',').collect()
            }
            PathSpec::Paths(paths) => paths.iter().collect(),
        }
    }
}

/// The empty spec: normalizes to no paths at all.
impl Default for PathSpec {
    fn default() -> Self {
        PathSpec::Paths(Vec::new())
    }
}

impl From<&str> for PathSpec {
    fn from(text: &str) -> Self {
        PathSpec::Text(text.to_string())
    }
}

impl From<String> for PathSpec {
    fn from(text: String) -> Self {
        PathSpec::Text(text)
    }
}

impl From<Vec<String>> for PathSpec {
    fn from(paths: Vec<String>) -> Self {
        PathSpec::Paths(paths)
    }
}

impl From<Vec<&str>> for PathSpec {
    fn from(paths: Vec<&str>) -> Self {
        PathSpec::Paths(paths.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for PathSpec {
    fn from(paths: &[&str]) -> Self {
        PathSpec::Paths(paths.iter().map(|path| (*path).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PathSpec {
    fn from(paths: [&str; N]) -> Self {
        PathSpec::Paths(paths.iter().map(|path| (*path).to_string()).collect())
    }
}

impl From<PathSet> for PathSpec {
    fn from(set: PathSet) -> Self {
        PathSpec::Tree(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_spec_passes_through_unchanged() {
        let set: PathSet = ["a.b", "c"].into_iter().collect();
        assert_eq!(PathSpec::from(set.clone()).normalize(), set);
    }

    #[test]
    fn normalization_is_idempotent() {
        let first = PathSpec::from("x.y,z").normalize();
        let second = PathSpec::from(first.clone()).normalize();
        assert_eq!(second, first);
    }

    #[test]
    fn text_splits_on_commas() {
        let set = PathSpec::from("aaa,bbb").normalize();
        assert!(set.terminates_at("aaa"));
        assert!(set.terminates_at("bbb"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn dotted_text_nests() {
        let set = PathSpec::from("aaa.bbb").normalize();
        assert!(!set.terminates_at("aaa"));
        assert!(set.child("aaa").terminates_at("bbb"));
    }

    #[test]
    fn shared_prefixes_merge_into_one_subtree() {
        let set = PathSpec::from("a.b.c,a.b.d,e,f.g").normalize();
        assert_eq!(set.leaf_paths(), vec!["a.b.c", "a.b.d", "e", "f.g"]);
    }

    #[test]
    fn path_list_matches_equivalent_text() {
        let from_list = PathSpec::from(vec!["a.b.c", "a.b.d", "e", "f.g"]).normalize();
        let from_text = PathSpec::from("a.b.c,a.b.d,e,f.g").normalize();
        assert_eq!(from_list, from_text);
    }

    #[test]
    fn empty_shapes_normalize_to_empty_set() {
        assert!(PathSpec::from("").normalize().is_empty());
        assert!(PathSpec::from(Vec::<String>::new()).normalize().is_empty());
        assert!(PathSpec::default().normalize().is_empty());
        assert!(PathSpec::default().is_empty());
    }

    #[test]
    fn stray_commas_insert_inert_empty_segment() {
        let set = PathSpec::from("a,,b").normalize();
        assert!(set.terminates_at("a"));
        assert!(set.terminates_at("b"));
        assert!(set.terminates_at(""));
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let set = PathSpec::from("a, b").normalize();
        assert!(set.terminates_at("a"));
        assert!(set.terminates_at(" b"));
        assert!(!set.contains("b"));
    }
}
