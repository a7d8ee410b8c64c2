//! # hookset - Hook Registration and Themed Routes
//!
//! `hookset` lets modules plug handlers into named lifecycle points of a
//! content framework, and renders routes to themed output descriptors.
//!
//! Registration happens once, at boot, into a registry that is frozen
//! afterwards. Dispatch is synchronous and runs handlers in the order they
//! were registered.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hookset::{Site, modules::{ClassHooks, LegacyHooks}};
//!
//! let site = Site::builder()
//!     .module(ClassHooks)
//!     .module(LegacyHooks)
//!     .build()?;
//!
//! let page = site.handle("/class-hooks")?;
//! assert_eq!(page.descriptor().template(), "class_template");
//! ```
//!
//! ## Two Ways to Implement Hooks
//!
//! Class-based: methods on a struct, annotated inside a [`hooks`] block.
//!
//! ```rust,ignore
//! #[hooks]
//! impl HelpHook {
//!     #[hook(Help)]
//!     fn help(&self, request: &mut HelpRequest) -> String { ... }
//! }
//! ```
//!
//! Procedural: a free function named `{module}_{hook}`, registered with
//! [`ModuleHooks::implement_fn`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Lets `#[hooks]` expansions inside this crate refer to `::hookset`.
extern crate self as hookset;

mod module;
pub mod modules;
mod site;

pub use hookset_core::{
    // Hooks
    Attachments,
    AttachmentsContext,
    FnHook,
    HandlerId,
    Help,
    HelpRequest,
    Hook,
    HookOutput,
    HookPoint,
    // Error types
    HooksetError,
    PageAttachments,
    RegistryError,
    // Rendering
    RenderDescriptor,
    RenderError,
    Route,
    // Routing
    RouteResult,
    Router,
    RouterBuildError,
    RouterBuilder,
    TemplateSchema,
    Theme,
    Value,
    hook_fn,
};

pub use hookset_std::{
    dispatch::Dispatcher,
    registry::{HookRegistry, ModuleHooks, RegisterHooks, Registration, RegistryBuilder},
    renderer::RouteRenderer,
    theme::{ThemeEntry, ThemeRegistry},
};

pub use hookset_macros::hooks;

pub use module::Module;
pub use site::{HELP_PATH, HELP_ROUTE, HELP_TEMPLATE, Page, Site, SiteBuilder, SiteError};

/// Router backends.
pub mod routing {
    pub use hookset_std::routing::{
        HashMapRouter, HashMapRouterBuilder, PathMatch, PathRouter, PathRouterBuilder, PhfRouter,
    };
}

/// Testing utilities.
pub mod testing {
    pub use hookset_std::testing::{OrderProbe, ProbeHook, RecordingHook};
}

/// Prelude module - common imports for hookset.
///
/// # Usage
///
/// ```rust,ignore
/// use hookset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        AttachmentsContext, Help, HelpRequest, Hook, HookPoint, Module, ModuleHooks,
        PageAttachments, RegistryError, RenderDescriptor, Site, TemplateSchema, Theme, hook_fn,
        hooks,
    };
}
