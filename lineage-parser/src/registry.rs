//! Person registry
//!
//! Maps normalized names to entry ids and ids back to display names. One registry is built per
//! parse run and handed by reference to the resolver; nothing here is global.
//!
//! Lookup order
//!
//!     1. exact normalized key
//!     2. substring containment, either direction, against every key in registration order
//!     3. the query with middle initials removed, exact
//!
//! Step 2 is deliberately loose and can match unrelated people whose names contain one another
//! ("Ann Lee" inside "Joann Leeds"). When several keys qualify, the first registered wins. That
//! makes results deterministic for a given input, not correct; the looseness is inherited from
//! the register format's conventions and is kept as-is.
//!
//! Re-registering a key points it at the new id but keeps its original iteration position.

use crate::names::{normalize_name, strip_middle_initials};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct PersonRegistry {
    /// (normalized key, id) in first-registration order.
    keys: Vec<(String, String)>,
    key_index: HashMap<String, usize>,
    names: HashMap<String, String>,
}

impl PersonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` under `id`.
    ///
    /// Names that normalize to nothing (e.g. a bare "Sr.") are remembered for `name_of` but get
    /// no key, since an empty key would be contained in every query.
    pub fn register(&mut self, id: &str, name: &str) {
        let key = normalize_name(name);
        if !key.is_empty() {
            if let Some(stripped) = strip_middle_initials(&key) {
                self.insert_key(stripped, id);
            }
            self.insert_key(key, id);
        }
        self.names.insert(id.to_string(), name.trim().to_string());
    }

    fn insert_key(&mut self, key: String, id: &str) {
        match self.key_index.get(&key) {
            Some(&idx) => {
                let slot = &mut self.keys[idx].1;
                if slot.as_str() != id {
                    debug!(key = %key, previous = %slot, id, "registry key reassigned");
                    *slot = id.to_string();
                }
            }
            None => {
                self.key_index.insert(key.clone(), self.keys.len());
                self.keys.push((key, id.to_string()));
            }
        }
    }

    /// Find the entry id for a mentioned name.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        let key = normalize_name(name);
        if key.is_empty() {
            return None;
        }
        if let Some(&idx) = self.key_index.get(&key) {
            return Some(self.keys[idx].1.as_str());
        }
        if let Some((_, id)) = self
            .keys
            .iter()
            .find(|(registered, _)| registered.contains(&key) || key.contains(registered.as_str()))
        {
            return Some(id.as_str());
        }
        strip_middle_initials(&key)
            .and_then(|stripped| self.key_index.get(&stripped))
            .map(|&idx| self.keys[idx].1.as_str())
    }

    /// Canonical display name registered for `id`.
    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.names.contains_key(id)
    }

    /// Number of registered ids.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Normalized keys with their ids, in lookup order.
    pub fn keys(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keys.iter().map(|(key, id)| (key.as_str(), id.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(entries: &[(&str, &str)]) -> PersonRegistry {
        let mut registry = PersonRegistry::new();
        for (id, name) in entries {
            registry.register(id, name);
        }
        registry
    }

    #[test]
    fn test_exact_lookup() {
        let registry = registry(&[("100", "John Doe"), ("200", "Mary Roe")]);
        assert_eq!(registry.lookup("Mary Roe"), Some("200"));
        assert_eq!(registry.lookup("mary  ROE."), Some("200"));
    }

    #[test]
    fn test_lookup_ignores_titles() {
        let registry = registry(&[("100", "Rev. John Doe")]);
        assert_eq!(registry.lookup("John Doe Jr."), Some("100"));
    }

    #[test]
    fn test_substring_lookup_both_directions() {
        let registry = registry(&[("100", "John Henry Doe")]);
        assert_eq!(registry.lookup("Henry Doe"), Some("100"));
        assert_eq!(registry.lookup("John Henry Doe of Kent"), Some("100"));
    }

    #[test]
    fn test_middle_initial_registered_twice() {
        let registry = registry(&[("100", "John Q. Public")]);
        assert_eq!(registry.lookup("John Public"), Some("100"));
        assert_eq!(registry.lookup("John Q Public"), Some("100"));
    }

    #[test]
    fn test_query_initial_stripped_last() {
        let registry = registry(&[("100", "John Public")]);
        assert_eq!(registry.lookup("John X. Public"), Some("100"));
    }

    #[test]
    fn test_ambiguous_substring_first_registered_wins() {
        let registry = registry(&[("1", "Ann Lee"), ("2", "Joann Leeds")]);
        for _ in 0..3 {
            assert_eq!(registry.lookup("Ann Lee"), Some("1"));
            assert_eq!(registry.lookup("nn Le"), Some("1"));
        }
    }

    #[test]
    fn test_last_registration_for_key_wins() {
        let registry = registry(&[("1", "John Doe"), ("2", "John Doe")]);
        assert_eq!(registry.lookup("John Doe"), Some("2"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_missing_and_empty_queries() {
        let registry = registry(&[("1", "John Doe"), ("2", "Sr.")]);
        assert_eq!(registry.lookup("Peter Pan"), None);
        assert_eq!(registry.lookup(""), None);
        assert_eq!(registry.lookup("Jr."), None);
        assert_eq!(registry.name_of("2"), Some("Sr."));
    }
}
