//! Routing abstraction layer.
//!
//! This module provides a trait-based routing abstraction that allows
//! different routing backends (HashMap, phf, matchit) to be swapped
//! without changing the code that renders routes.

use crate::error::RouterBuildError;

/// Result of a routing lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteResult<'a, V> {
    /// Route matched, contains the value.
    Matched(&'a V),
    /// No matching route found.
    NotFound,
}

impl<'a, V> RouteResult<'a, V> {
    /// Returns true if the route was matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, RouteResult::Matched(_))
    }

    /// Returns the matched value, if any.
    pub fn matched(self) -> Option<&'a V> {
        match self {
            RouteResult::Matched(v) => Some(v),
            RouteResult::NotFound => None,
        }
    }
}

/// A router that maps keys to values.
pub trait Router<K: ?Sized, V>: Send + Sync + 'static {
    /// Look up a value by key.
    fn route(&self, key: &K) -> RouteResult<'_, V>;

    /// Check if a key exists in the router.
    fn contains(&self, key: &K) -> bool {
        self.route(key).is_matched()
    }
}

/// Builder for constructing routers.
///
/// This trait allows different router implementations to be built
/// using a common interface.
pub trait RouterBuilder<K, V>: Default + Send {
    /// The router type this builder produces.
    type Router;

    /// Insert a key-value pair into the router.
    ///
    /// Returns an error if the key already exists.
    fn insert(&mut self, key: K, value: V) -> Result<(), RouterBuildError>;

    /// Build the router, consuming the builder.
    fn build(self) -> Result<Self::Router, RouterBuildError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_result_helpers() {
        let val = 42;
        let matched = RouteResult::Matched(&val);
        let not_found: RouteResult<i32> = RouteResult::NotFound;

        assert!(matched.is_matched());
        assert!(!not_found.is_matched());

        assert_eq!(matched.matched(), Some(&42));
        assert_eq!(not_found.matched(), None);
    }
}
