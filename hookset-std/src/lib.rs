//! # hookset-std
//!
//! Standard implementations for the hookset framework.
//!
//! This crate provides:
//! - **Registration**: [`RegistryBuilder`], [`HookRegistry`], [`ModuleHooks`]
//! - **Dispatch**: [`Dispatcher`] with value-returning, mutation and
//!   aggregating modes
//! - **Theming**: [`ThemeRegistry`] built from the `theme` hook
//! - **Rendering**: [`RouteRenderer`] over any route table
//! - **Routing**: HashMap, phf and matchit backends
//!
//! [`RegistryBuilder`]: registry::RegistryBuilder
//! [`HookRegistry`]: registry::HookRegistry
//! [`ModuleHooks`]: registry::ModuleHooks
//! [`Dispatcher`]: dispatch::Dispatcher
//! [`ThemeRegistry`]: theme::ThemeRegistry
//! [`RouteRenderer`]: renderer::RouteRenderer

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use hookset_core;

// Modules
pub mod dispatch;
pub mod registry;
pub mod renderer;
pub mod routing;
pub mod testing;
pub mod theme;
