//! Selection layer: which mapping keys are sensitive.
//!
//! A [`SensitiveKeys`] value is an owned set of key names. It carries no
//! policy and no replacement value; it only answers "is this key sensitive?".
//! The same set applies at every depth of a document - there is no per-level
//! configuration.

use std::collections::HashSet;

/// A set of mapping keys whose values must be replaced wherever they occur.
///
/// Matching is exact and case-sensitive, and applies to mapping keys only,
/// never to values. An empty set is legal; redacting with it yields a deep
/// copy of the input.
///
/// Use the constructor methods [`SensitiveKeys::new`] and
/// [`SensitiveKeys::single`], or collect from an iterator of key names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SensitiveKeys {
    keys: HashSet<String>,
}

impl SensitiveKeys {
    /// Constructs an empty key set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a set containing a single key.
    #[must_use]
    pub fn single<K>(key: K) -> Self
    where
        K: Into<String>,
    {
        Self::new().with(key)
    }

    /// Adds a key to the set.
    #[must_use]
    pub fn with<K>(mut self, key: K) -> Self
    where
        K: Into<String>,
    {
        self.keys.insert(key.into());
        self
    }

    /// Returns `true` if `key` is in the set.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Returns `true` if the set holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the number of keys in the set.
    pub fn len(&self) -> usize {
        self.keys.len()
    }
}

impl<K> FromIterator<K> for SensitiveKeys
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<K> Extend<K> for SensitiveKeys
where
    K: Into<String>,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.keys.extend(iter.into_iter().map(Into::into));
    }
}
