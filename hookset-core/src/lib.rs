//! # hookset-core
//!
//! Core traits and types for the hookset hook registration framework.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! modules that only implement hooks and do not need the registry,
//! dispatcher or routers from `hookset-std`.
//!
//! # Building Blocks
//!
//! - [`HookPoint`] - a named lifecycle point with a typed context and output
//! - [`Hook`] - one handler for one point
//! - [`Router`] - key-to-value lookup used to resolve routes
//! - [`RenderDescriptor`] / [`TemplateSchema`] - what routes produce and
//!   what `theme` hooks declare
//!
//! # Lifecycle Points
//!
//! The framework dispatches three points: [`Theme`], [`Help`] and
//! [`PageAttachments`].
//!
//! # Error Types
//!
//! - [`HooksetError`] - Top-level error type
//! - [`RegistryError`] - Boot-time registration errors
//! - [`RenderError`] - Per-request rendering errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod hook;
mod point;
mod render;
mod router;

// Re-exports
pub use error::{HooksetError, RegistryError, RenderError, RouterBuildError};
pub use hook::{FnHook, HandlerId, Hook, HookOutput, HookPoint, hook_fn};
pub use point::{Attachments, AttachmentsContext, Help, HelpRequest, PageAttachments, Theme};
pub use render::{RenderDescriptor, Route, TemplateSchema, Value};
pub use router::{RouteResult, Router, RouterBuilder};
