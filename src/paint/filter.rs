//! Attribute predicates used to select which geometry a painter touches.

use crate::attributes::Attributes;

/// A predicate over the attributes of a piece of geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter(Kind);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Kind {
    Tagged(String),
    TaggedAny(String, Vec<String>),
    OnLayer(i32),
}

impl Filter {
    /// Matches geometry carrying `key`, whatever its value.
    pub fn tagged(key: &str) -> Self {
        Self(Kind::Tagged(key.to_string()))
    }

    /// Matches geometry whose value for `key` is one of `values`.
    pub fn tagged_any(key: &str, values: &[&str]) -> Self {
        Self(Kind::TaggedAny(
            key.to_string(),
            values.iter().map(|v| v.to_string()).collect(),
        ))
    }

    /// Matches geometry on z-layer `n`; the `layer` attribute defaults to 0.
    pub fn on_layer(n: i32) -> Self {
        Self(Kind::OnLayer(n))
    }

    pub fn matches(&self, attrs: &Attributes) -> bool {
        match &self.0 {
            Kind::Tagged(key) => attrs.has(key),
            Kind::TaggedAny(key, values) => attrs
                .get(key)
                .is_some_and(|v| values.iter().any(|want| want == v)),
            Kind::OnLayer(n) => attrs.int_or("layer", 0) == *n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn road() -> Attributes {
        [("highway", "primary"), ("layer", "1")].into_iter().collect()
    }

    #[test]
    fn tagged_checks_presence_only() {
        assert!(Filter::tagged("highway").matches(&road()));
        assert!(!Filter::tagged("railway").matches(&road()));
    }

    #[test]
    fn tagged_any_checks_values() {
        assert!(Filter::tagged_any("highway", &["primary", "secondary"]).matches(&road()));
        assert!(!Filter::tagged_any("highway", &["residential"]).matches(&road()));
        assert!(!Filter::tagged_any("railway", &["rail"]).matches(&road()));
    }

    #[test]
    fn on_layer_defaults_to_zero() {
        assert!(Filter::on_layer(1).matches(&road()));
        assert!(!Filter::on_layer(0).matches(&road()));
        let flat: Attributes = [("highway", "path")].into_iter().collect();
        assert!(Filter::on_layer(0).matches(&flat));
    }
}
