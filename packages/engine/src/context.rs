//! Selection Context
//!
//! A projection runs under exactly two normalized path trees: the paths
//! to keep and the paths to drop. [`SelectionContext`] owns that pair;
//! [`SelectionScope`] is the borrowed view the projector re-derives at
//! each nesting level.

use crate::pathset::{PathSet, PathSpec};
use crate::query::QueryParams;

/// Parameter name carrying the select spec in query strings.
pub const SELECT_PARAM: &str = "select";
/// Parameter name carrying the exclude spec in query strings.
pub const EXCLUDE_PARAM: &str = "exclude";

/// The normalized select/exclude pair governing one projection.
///
/// Both trees are canonical [`PathSet`]s regardless of the spec shape they
/// were built from. An empty select tree means "no restriction"; an empty
/// exclude tree means "drop nothing".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionContext {
    select: PathSet,
    exclude: PathSet,
}

impl SelectionContext {
    /// Normalize a select and an exclude spec into a context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sylect_engine::SelectionContext;
    ///
    /// let context = SelectionContext::new("user.name,user.email", "meta");
    /// assert!(context.select().contains("user"));
    /// assert!(context.exclude().terminates_at("meta"));
    /// ```
    pub fn new(select: impl Into<PathSpec>, exclude: impl Into<PathSpec>) -> Self {
        Self {
            select: select.into().normalize(),
            exclude: exclude.into().normalize(),
        }
    }

    /// Context with no selection and no exclusion: every field projects.
    #[must_use]
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Read the `select` and `exclude` parameters out of request query
    /// parameters. Absent parameters behave as empty specs.
    #[must_use]
    pub fn from_query(params: &QueryParams) -> Self {
        Self::new(
            params.get_or(SELECT_PARAM, ""),
            params.get_or(EXCLUDE_PARAM, ""),
        )
    }

    /// Normalized tree of paths to keep.
    #[inline]
    #[must_use]
    pub fn select(&self) -> &PathSet {
        &self.select
    }

    /// Normalized tree of paths to drop.
    #[inline]
    #[must_use]
    pub fn exclude(&self) -> &PathSet {
        &self.exclude
    }

    /// True when the context restricts nothing.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.select.is_empty() && self.exclude.is_empty()
    }

    /// Borrow the context as a root projection scope.
    #[inline]
    #[must_use]
    pub fn scope(&self) -> SelectionScope<'_> {
        SelectionScope {
            select: &self.select,
            exclude: &self.exclude,
        }
    }

    /// Render the context back into a query string, the inverse of
    /// [`SelectionContext::from_query`] up to path ordering. Empty trees
    /// contribute no parameter; an unrestricted context renders as `""`.
    #[must_use]
    pub fn as_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        if !self.select.is_empty() {
            serializer.append_pair(SELECT_PARAM, &self.select.to_string());
        }
        if !self.exclude.is_empty() {
            serializer.append_pair(EXCLUDE_PARAM, &self.exclude.to_string());
        }
        serializer.finish()
    }
}

/// Borrowed select/exclude view over one nesting level.
///
/// Scopes are cheap to copy and derive: descending into a nested field
/// takes each tree's subtree under that field, with missing subtrees
/// reading as empty.
#[derive(Debug, Clone, Copy)]
pub struct SelectionScope<'a> {
    select: &'a PathSet,
    exclude: &'a PathSet,
}

impl<'a> SelectionScope<'a> {
    /// Scope over explicit trees. Most callers go through
    /// [`SelectionContext::scope`] instead.
    #[inline]
    #[must_use]
    pub fn new(select: &'a PathSet, exclude: &'a PathSet) -> Self {
        Self { select, exclude }
    }

    /// Select tree at this level.
    #[inline]
    #[must_use]
    pub fn select(&self) -> &'a PathSet {
        self.select
    }

    /// Exclude tree at this level.
    #[inline]
    #[must_use]
    pub fn exclude(&self) -> &'a PathSet {
        self.exclude
    }

    /// True when the select tree admits `name` at this level: either no
    /// selection is in force or the field is named in it.
    #[inline]
    #[must_use]
    pub fn selects(&self, name: &str) -> bool {
        self.select.is_empty() || self.select.contains(name)
    }

    /// True when the exclude tree removes `name` entirely, i.e. names it
    /// with nothing beneath. A non-empty subtree does not exclude the
    /// field itself; it filters inside it via [`SelectionScope::child`].
    #[inline]
    #[must_use]
    pub fn excludes(&self, name: &str) -> bool {
        self.exclude.terminates_at(name)
    }

    /// Derive the scope governing the nested field `name`.
    #[inline]
    #[must_use]
    pub fn child(self, name: &str) -> SelectionScope<'a> {
        SelectionScope {
            select: self.select.child(name),
            exclude: self.exclude.child(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_both_specs() {
        let context = SelectionContext::new(vec!["a.b", "c"], "d.e,f");
        assert_eq!(context.select().leaf_paths(), vec!["a.b", "c"]);
        assert_eq!(context.exclude().leaf_paths(), vec!["d.e", "f"]);
    }

    #[test]
    fn unrestricted_context_has_empty_trees() {
        let context = SelectionContext::unrestricted();
        assert!(context.is_unrestricted());
        assert!(context.select().is_empty());
        assert!(context.exclude().is_empty());
    }

    #[test]
    fn from_query_reads_select_and_exclude() {
        let params = QueryParams::parse("select=a,b&exclude=c,d.e,d.f.g");
        let context = SelectionContext::from_query(&params);
        assert_eq!(context.select().leaf_paths(), vec!["a", "b"]);
        assert_eq!(context.exclude().leaf_paths(), vec!["c", "d.e", "d.f.g"]);
    }

    #[test]
    fn from_query_treats_missing_params_as_empty() {
        let context = SelectionContext::from_query(&QueryParams::parse("page=2"));
        assert!(context.is_unrestricted());
    }

    #[test]
    fn empty_select_admits_everything() {
        let context = SelectionContext::new("", "b");
        let scope = context.scope();
        assert!(scope.selects("a"));
        assert!(scope.selects("b"));
        assert!(scope.excludes("b"));
        assert!(!scope.excludes("a"));
    }

    #[test]
    fn non_empty_select_admits_only_named_fields() {
        let context = SelectionContext::new("a,b", "");
        let scope = context.scope();
        assert!(scope.selects("a"));
        assert!(!scope.selects("c"));
    }

    #[test]
    fn exclude_with_subtree_does_not_remove_the_field() {
        let context = SelectionContext::new("", "child.first");
        let scope = context.scope();
        assert!(!scope.excludes("child"));
        assert!(scope.child("child").excludes("first"));
    }

    #[test]
    fn child_scope_narrows_both_trees() {
        let context = SelectionContext::new("child.first", "child.second");
        let scope = context.scope().child("child");
        assert!(scope.selects("first"));
        assert!(!scope.selects("second"));
        assert!(scope.excludes("second"));

        let unscoped = context.scope().child("other");
        assert!(unscoped.selects("anything"));
        assert!(!unscoped.excludes("anything"));
    }

    #[test]
    fn query_string_round_trip() {
        let context = SelectionContext::new("user.name,id", "meta.internal");
        let query = context.as_query_string();
        assert_eq!(query, "select=id%2Cuser.name&exclude=meta.internal");

        let reparsed = SelectionContext::from_query(&QueryParams::parse(&query));
        assert_eq!(reparsed, context);
    }

    #[test]
    fn unrestricted_context_renders_empty_query() {
        assert_eq!(SelectionContext::unrestricted().as_query_string(), "");
    }
}
