//! Matchit-based router implementation.
//!
//! Matches URL paths against patterns with parameters (e.g. `/admin/help/{name}`).

use ::matchit::{InsertError, Router as InnerRouter};
use hookset_core::{RouteResult, Router, RouterBuildError, RouterBuilder};

/// A router from URL path patterns to values.
pub struct PathRouter<V> {
    router: InnerRouter<V>,
}

/// A successful path match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatch<'a, V> {
    /// The value stored for the matched pattern.
    pub value: &'a V,
    /// Captured parameters, in pattern order.
    pub params: Vec<(String, String)>,
}

impl<V> PathMatch<'_, V> {
    /// A captured parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl<V> PathRouter<V> {
    /// Match a path, capturing its parameters.
    pub fn resolve(&self, path: &str) -> Option<PathMatch<'_, V>> {
        let matched = self.router.at(path).ok()?;
        let params = matched
            .params
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Some(PathMatch {
            value: matched.value,
            params,
        })
    }
}

impl<V: Send + Sync + 'static> Router<str, V> for PathRouter<V> {
    fn route(&self, key: &str) -> RouteResult<'_, V> {
        match self.router.at(key) {
            Ok(matched) => RouteResult::Matched(matched.value),
            Err(_) => RouteResult::NotFound,
        }
    }
}

/// Builder for PathRouter.
pub struct PathRouterBuilder<V> {
    router: InnerRouter<V>,
}

impl<V> Default for PathRouterBuilder<V> {
    fn default() -> Self {
        Self {
            router: InnerRouter::new(),
        }
    }
}

impl<V: Send> RouterBuilder<String, V> for PathRouterBuilder<V> {
    type Router = PathRouter<V>;

    fn insert(&mut self, key: String, value: V) -> Result<(), RouterBuildError> {
        self.router
            .insert(key.clone(), value)
            .map_err(|err| match err {
                InsertError::Conflict { with } => {
                    RouterBuildError::DuplicateKey(format!("{} (conflicts with {})", key, with))
                }
                other => RouterBuildError::InvalidPattern {
                    pattern: key,
                    reason: other.to_string(),
                },
            })
    }

    fn build(self) -> Result<Self::Router, RouterBuildError> {
        Ok(PathRouter {
            router: self.router,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> PathRouter<i32> {
        let mut builder = PathRouterBuilder::default();
        builder.insert("/class-hooks".to_string(), 1).unwrap();
        builder.insert("/admin/help/{name}".to_string(), 2).unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn test_static_path() {
        let router = router();
        assert_eq!(router.route("/class-hooks"), RouteResult::Matched(&1));
        assert_eq!(router.route("/files/image.png"), RouteResult::NotFound);
    }

    #[test]
    fn test_param_capture() {
        let router = router();
        let matched = router.resolve("/admin/help/class_hooks").unwrap();
        assert_eq!(*matched.value, 2);
        assert_eq!(matched.param("name"), Some("class_hooks"));
        assert_eq!(matched.param("other"), None);
    }

    #[test]
    fn test_conflicting_path_rejected() {
        let mut builder = PathRouterBuilder::default();
        builder.insert("/class-hooks".to_string(), 1).unwrap();
        let err = builder.insert("/class-hooks".to_string(), 2).unwrap_err();
        assert!(matches!(err, RouterBuildError::DuplicateKey(_)));
    }
}
