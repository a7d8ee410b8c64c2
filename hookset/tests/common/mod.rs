#![allow(dead_code)]

use hookset::{
    HookRegistry, RegistryBuilder, Site,
    modules::{ClassHooks, LegacyHooks},
};

// ============================================================================
// Fixtures
// ============================================================================

/// A site with both demonstration modules installed.
pub fn demo_site() -> Site {
    Site::builder()
        .module(ClassHooks)
        .module(LegacyHooks)
        .build()
        .expect("demo site boots")
}

/// A registry with both demonstration modules registered.
pub fn demo_registry() -> HookRegistry {
    use hookset::Module;

    let mut builder = RegistryBuilder::new();
    for module in [&ClassHooks as &dyn Module, &LegacyHooks] {
        module
            .register(&mut builder.module(module.name()))
            .expect("module registers");
    }
    builder.build()
}

pub const CLASS_MESSAGE: &str =
    "This is rendered using the class-based way of implementing theme hooks!";
pub const LEGACY_MESSAGE: &str =
    "This is rendered using the legacy way of implementing theme hooks!";
