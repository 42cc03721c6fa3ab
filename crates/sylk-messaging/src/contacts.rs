//! Read-only contact lookup for sender display names.

use std::collections::HashMap;

/// Cache of known contacts, keyed by URI.
///
/// The message view only reads from it; population happens wherever
/// the address book lives.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactCache {
    names: HashMap<String, String>,
}

impl ContactCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a display name for a URI.
    pub fn insert(&mut self, uri: impl Into<String>, display_name: impl Into<String>) {
        self.names.insert(uri.into(), display_name.into());
    }

    pub fn has(&self, uri: &str) -> bool {
        self.names.contains_key(uri)
    }

    pub fn get(&self, uri: &str) -> Option<&str> {
        self.names.get(uri).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let mut cache = ContactCache::new();
        cache.insert("alice@example.com", "Alice");

        assert!(cache.has("alice@example.com"));
        assert_eq!(cache.get("alice@example.com"), Some("Alice"));
        assert!(!cache.has("bob@example.com"));
        assert_eq!(cache.get("bob@example.com"), None);
    }
}
