//! Ordered catalog of class labels.

use crate::core::constants::{PLACEHOLDER_CLASS_PREFIX, UNKNOWN_CLASS_NAME};
use serde::Serialize;
use std::sync::Arc;

/// Index-addressable list of class labels, fixed at startup.
///
/// Index `i` names output `i` of the model. The catalog may be shorter than
/// the model output; indexes past its end decode to `"Unknown"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassCatalog {
    labels: Arc<[String]>,
}

/// A single catalog entry, as reported by the `/classes` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry<'a> {
    pub class_id: usize,
    pub class_name: &'a str,
}

impl ClassCatalog {
    /// Creates a catalog from ordered labels.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a catalog of `Class_<i>` labels for `i in 0..num_classes`.
    pub fn placeholder(num_classes: usize) -> Self {
        Self::new((0..num_classes).map(|i| format!("{PLACEHOLDER_CLASS_PREFIX}{i}")))
    }

    /// Label at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Label at `index`, or `"Unknown"` when the index is out of range.
    pub fn label_or_unknown(&self, index: usize) -> &str {
        self.get(index).unwrap_or(UNKNOWN_CLASS_NAME)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates over the entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = CatalogEntry<'_>> {
        self.labels
            .iter()
            .enumerate()
            .map(|(class_id, name)| CatalogEntry {
                class_id,
                class_name: name.as_str(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_catalog_lookup() {
        let catalog = ClassCatalog::new(["Asterionella", "Cyclotella", "Fragilaria"]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(1), Some("Cyclotella"));
        assert_eq!(catalog.get(3), None);
        assert_eq!(catalog.label_or_unknown(2), "Fragilaria");
        assert_eq!(catalog.label_or_unknown(17), "Unknown");
    }

    #[test]
    fn test_placeholder_catalog() {
        let catalog = ClassCatalog::placeholder(30);
        assert_eq!(catalog.len(), 30);
        assert_eq!(catalog.get(0), Some("Class_0"));
        assert_eq!(catalog.get(29), Some("Class_29"));
        assert!(ClassCatalog::placeholder(0).is_empty());
    }

    #[test]
    fn test_iter_preserves_order() {
        let catalog = ClassCatalog::new(vec!["Navicula".to_string(), "Nitzschia".to_string()]);
        let entries: Vec<_> = catalog.iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].class_id, 0);
        assert_eq!(entries[1].class_name, "Nitzschia");
    }

    #[test]
    fn test_clone_shares_labels() {
        let catalog = ClassCatalog::placeholder(4);
        let cloned = catalog.clone();
        assert_eq!(catalog, cloned);
    }
}
