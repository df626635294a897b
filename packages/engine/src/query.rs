//! Query Parameter Access
//!
//! Request query strings carry selection specs as ordinary parameters.
//! [`QueryParams`] holds decoded key/value pairs in arrival order and
//! resolves lookups the way form data resolves them: the last occurrence
//! of a repeated key wins.

use serde::Serialize;
use url::Url;

use crate::error::{ProjectError, ProjectResult};

/// Decoded query parameters in arrival order.
///
/// Parsing is lenient by construction: malformed percent escapes decode
/// as their literal bytes and bare keys decode with an empty value, so
/// building a `QueryParams` from request input never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Build from pre-decoded key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Parse a raw query string such as `"select=a,b&exclude=c.d"`.
    ///
    /// A single leading `'?'` is ignored so full `url.query()` output and
    /// copy-pasted fragments both work.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self {
            pairs: url::form_urlencoded::parse(query.as_bytes())
                .map(|(key, value)| (key.into_owned(), value.into_owned()))
                .collect(),
        }
    }

    /// Extract the query portion of a URL.
    #[must_use]
    pub fn from_url(url: &Url) -> Self {
        Self {
            pairs: url
                .query_pairs()
                .map(|(key, value)| (key.into_owned(), value.into_owned()))
                .collect(),
        }
    }

    /// Encode a `Serialize` value as a query string and parse the result.
    ///
    /// This accepts the same shapes `serde_urlencoded` accepts: structs
    /// with scalar fields, maps, and pair sequences.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::Query`] when the value cannot be encoded as
    /// `application/x-www-form-urlencoded` data, e.g. for nested
    /// structures.
    pub fn from_serialize<T: Serialize>(params: &T) -> ProjectResult<Self> {
        let query = serde_urlencoded::to_string(params)
            .map_err(|error| ProjectError::query(error.to_string()))?;
        Ok(Self::parse(&query))
    }

    /// Value for `key`, taking the last occurrence when repeated.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Value for `key`, or `default` when the key is absent.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Every value recorded for `key`, in arrival order.
    #[must_use]
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    /// True when `key` appears at least once.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(name, _)| name == key)
    }

    /// True when no parameters are present.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of key/value pairs, counting repeats.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Iterate pairs in arrival order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}
