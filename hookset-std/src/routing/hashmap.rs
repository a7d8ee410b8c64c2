//! HashMap-based router implementation.

use hookset_core::{RouteResult, Router, RouterBuildError, RouterBuilder};
use std::{borrow::Borrow, collections::HashMap, fmt::Debug, hash::Hash};

/// A router backed by `HashMap`.
///
/// Lookups accept any borrowed form of the key, so a `HashMapRouter<String, V>`
/// routes `&str`.
#[derive(Debug, Clone)]
pub struct HashMapRouter<K, V> {
    map: HashMap<K, V>,
}

impl<K, V> HashMapRouter<K, V> {
    /// Get the number of routes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the router is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over all routes, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.map.iter()
    }
}

impl<K, V, Q> Router<Q, V> for HashMapRouter<K, V>
where
    K: Borrow<Q> + Hash + Eq + Send + Sync + 'static,
    Q: Hash + Eq + ?Sized,
    V: Send + Sync + 'static,
{
    fn route(&self, key: &Q) -> RouteResult<'_, V> {
        match self.map.get(key) {
            Some(v) => RouteResult::Matched(v),
            None => RouteResult::NotFound,
        }
    }
}

/// Builder for `HashMapRouter`.
#[derive(Debug)]
pub struct HashMapRouterBuilder<K, V> {
    map: HashMap<K, V>,
    allow_duplicates: bool,
}

impl<K, V> HashMapRouterBuilder<K, V> {
    /// Allow duplicate keys (later insertions override earlier ones).
    pub fn allow_duplicates(mut self) -> Self {
        self.allow_duplicates = true;
        self
    }
}

impl<K, V> Default for HashMapRouterBuilder<K, V> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            allow_duplicates: false,
        }
    }
}

impl<K, V> RouterBuilder<K, V> for HashMapRouterBuilder<K, V>
where
    K: Hash + Eq + Send + Debug,
    V: Send,
{
    type Router = HashMapRouter<K, V>;

    fn insert(&mut self, key: K, value: V) -> Result<(), RouterBuildError> {
        if !self.allow_duplicates && self.map.contains_key(&key) {
            return Err(RouterBuildError::DuplicateKey(format!("{:?}", key)));
        }
        self.map.insert(key, value);
        Ok(())
    }

    fn build(self) -> Result<Self::Router, RouterBuildError> {
        Ok(HashMapRouter { map: self.map })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_routing() {
        let mut builder: HashMapRouterBuilder<String, i32> = HashMapRouterBuilder::default();
        builder.insert("hello".to_string(), 1).unwrap();
        builder.insert("world".to_string(), 2).unwrap();

        let router = builder.build().unwrap();

        assert_eq!(router.route("hello").matched(), Some(&1));
        assert_eq!(router.route("world").matched(), Some(&2));
        assert_eq!(router.route("missing"), RouteResult::NotFound);
        assert_eq!(router.len(), 2);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut builder: HashMapRouterBuilder<String, i32> = HashMapRouterBuilder::default();
        builder.insert("key".to_string(), 1).unwrap();

        let result = builder.insert("key".to_string(), 2);
        assert_eq!(
            result,
            Err(RouterBuildError::DuplicateKey("\"key\"".to_string()))
        );
    }

    #[test]
    fn test_allow_duplicates_overrides() {
        let mut builder: HashMapRouterBuilder<String, i32> =
            HashMapRouterBuilder::default().allow_duplicates();
        builder.insert("key".to_string(), 1).unwrap();
        builder.insert("key".to_string(), 2).unwrap();

        let router = builder.build().unwrap();
        assert_eq!(router.route("key").matched(), Some(&2));
    }
}
