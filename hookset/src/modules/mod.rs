//! The demonstration modules.
//!
//! Both modules render a page through a themed template. They differ only
//! in how they implement their hooks.

pub mod class_hooks;
pub mod legacy_hooks;

pub use class_hooks::ClassHooks;
pub use legacy_hooks::LegacyHooks;
