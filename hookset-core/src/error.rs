//! Error types for hookset.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`HooksetError`] - Top-level error type for all hookset operations
//! - [`RegistryError`] - Boot-time registration errors
//! - [`RenderError`] - Per-request rendering errors
//! - [`RouterBuildError`] - Errors while building a router

use thiserror::Error;

/// Top-level error type for all hookset operations.
#[derive(Error, Debug)]
pub enum HooksetError {
    /// A registration was rejected while booting.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// A page could not be rendered.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// A router could not be built.
    #[error("router error: {0}")]
    Router(#[from] RouterBuildError),
}

/// Errors raised while registering hooks, templates or modules.
///
/// All of these indicate a programming mistake and should abort boot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The same handler identity was registered twice for one hook.
    #[error("handler `{handler}` is already registered for hook `{hook}`")]
    DuplicateHandler {
        /// The hook name.
        hook: &'static str,
        /// The handler identity.
        handler: String,
    },

    /// A hook name was bound to two different hook point types.
    #[error("hook `{hook}` is already bound to a different hook point type")]
    HookTypeMismatch {
        /// The hook name.
        hook: &'static str,
    },

    /// Two theme providers declared the same template.
    #[error("template `{template}` is declared by both `{first}` and `{second}`")]
    DuplicateTemplate {
        /// The template name.
        template: String,
        /// The handler that declared it first.
        first: String,
        /// The handler that declared it again.
        second: String,
    },

    /// A module with this name is already installed.
    #[error("module `{0}` is already installed")]
    DuplicateModule(&'static str),
}

/// Errors raised while rendering a route.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// No route is registered under this id.
    #[error("unknown route: {0}")]
    UnknownRoute(String),

    /// No theme provider declared this template.
    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    /// The descriptor carries a variable the template does not declare.
    #[error("template `{template}` does not declare variable `{variable}`")]
    UndeclaredVariable {
        /// The template name.
        template: String,
        /// The offending variable.
        variable: String,
    },
}

/// Error type for router building operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterBuildError {
    /// A duplicate key was inserted.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// A path pattern was rejected by the router backend.
    #[error("Invalid pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// Why the backend rejected it.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_build_error_display() {
        let err1 = RouterBuildError::DuplicateKey("key".to_string());
        let err2 = RouterBuildError::InvalidPattern {
            pattern: "/{".to_string(),
            reason: "unclosed".to_string(),
        };

        assert_eq!(format!("{}", err1), "Duplicate key: key");
        assert_eq!(format!("{}", err2), "Invalid pattern `/{`: unclosed");
    }

    #[test]
    fn test_registry_error_converts_to_top_level() {
        let err: HooksetError = RegistryError::DuplicateModule("class_hooks").into();
        assert_eq!(
            err.to_string(),
            "registry error: module `class_hooks` is already installed"
        );
    }
}
