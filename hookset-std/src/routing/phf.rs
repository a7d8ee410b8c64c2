//! PHF-based router implementation.
//!
//! Provides compile-time perfect hash map routing.
//! This router is immutable and must be constructed with a static map reference.

use hookset_core::{RouteResult, Router};

/// A router based on `phf::Map`.
///
/// Wraps a static reference to a PHF map.
#[derive(Debug, Clone, Copy)]
pub struct PhfRouter<V: 'static> {
    map: &'static ::phf::Map<&'static str, V>,
}

impl<V: Send + Sync + 'static> PhfRouter<V> {
    /// Create a new router from a static PHF map.
    pub const fn new(map: &'static ::phf::Map<&'static str, V>) -> Self {
        Self { map }
    }

    /// Iterate over every key and value.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static V)> {
        self.map.entries().map(|(key, value)| (*key, value))
    }

    /// Get the number of routes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the router is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<V: Send + Sync + 'static> Router<str, V> for PhfRouter<V> {
    fn route(&self, key: &str) -> RouteResult<'_, V> {
        match self.map.get(key) {
            Some(v) => RouteResult::Matched(v),
            None => RouteResult::NotFound,
        }
    }
}

// Note: RouterBuilder is not implemented for PhfRouter because PHF maps
// are constructed at compile time, not runtime.
