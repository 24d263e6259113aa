//! Immutable key/value attribute bags attached to map geometry.

use std::collections::BTreeMap;

/// An immutable mapping from attribute key to value.
///
/// Built once from source tags; every derived view (projection) is a new
/// instance. No mutating accessors exist.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Attributes {
    entries: BTreeMap<String, String>,
}

impl Attributes {
    /// Creates an empty attribute bag.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether `key` is present.
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|v| v.as_str())
    }

    /// Returns the value for `key`, or `default` when absent.
    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Returns the value for `key` parsed as an integer, or `default` when
    /// absent or unparseable.
    pub fn int_or(&self, key: &str, default: i32) -> i32 {
        self.get(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Returns a new bag keeping only the entries whose key appears in `keys`.
    pub fn project(&self, keys: &[&str]) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(k, _)| keys.contains(&k.as_str()))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A geometry value paired with its attributes.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Attributed<T> {
    pub value: T,
    pub attrs: Attributes,
}

impl<T> Attributed<T> {
    pub fn new(value: T, attrs: Attributes) -> Self {
        Self { value, attrs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Attributes {
        [("highway", "primary"), ("name", "High Street"), ("layer", "2")]
            .into_iter()
            .collect()
    }

    #[test]
    fn lookup_and_defaults() {
        let attrs = sample();
        assert!(attrs.has("highway"));
        assert!(!attrs.has("railway"));
        assert_eq!(attrs.get("name"), Some("High Street"));
        assert_eq!(attrs.str_or("surface", "asphalt"), "asphalt");
        assert_eq!(attrs.int_or("layer", 0), 2);
        assert_eq!(attrs.int_or("lanes", 1), 1);
    }

    #[test]
    fn int_or_falls_back_on_garbage() {
        let attrs: Attributes = [("layer", "two")].into_iter().collect();
        assert_eq!(attrs.int_or("layer", 0), 0);
    }

    #[test]
    fn projection_keeps_only_listed_keys() {
        let attrs = sample();
        let projected = attrs.project(&["highway", "surface"]);
        assert_eq!(projected.len(), 1);
        assert_eq!(projected.get("highway"), Some("primary"));
        // The source bag is untouched.
        assert_eq!(attrs.len(), 3);
    }

    #[test]
    fn projection_can_be_empty() {
        assert!(sample().project(&["building"]).is_empty());
    }
}
