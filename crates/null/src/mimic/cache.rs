//! Per-instance memo of resolved associations

use std::collections::HashMap;
use std::sync::Mutex;

use super::Member;

/// Association results resolved on one stand-in record.
///
/// Lives on the record, never on its class, so two records of the same
/// stand-in class never observe each other's results.
#[derive(Debug, Default)]
pub struct AssociationCache {
    entries: Mutex<HashMap<String, Member>>,
}

impl AssociationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Member> {
        self.lock().get(name).cloned()
    }

    /// Store a result unless one was stored first, returning the kept value
    pub fn get_or_insert(&self, name: &str, member: Member) -> Member {
        self.lock()
            .entry(name.to_string())
            .or_insert(member)
            .clone()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Member>> {
        // A poisoned memo still holds valid entries.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relationships::EmptyRelation;
    use serde_json::Value;

    #[test]
    fn test_first_insert_wins() {
        let cache = AssociationCache::new();
        let posts = Member::Relation(EmptyRelation::none("Post", "posts"));

        let kept = cache.get_or_insert("posts", posts.clone());
        assert_eq!(kept, posts);

        let again = cache.get_or_insert("posts", Member::Value(Value::Null));
        assert_eq!(again, posts);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_caches_are_independent() {
        let first = AssociationCache::new();
        let second = AssociationCache::new();

        first.get_or_insert("posts", Member::Relation(EmptyRelation::none("Post", "posts")));

        assert!(first.contains("posts"));
        assert!(!second.contains("posts"));
        assert!(second.is_empty());
    }
}
