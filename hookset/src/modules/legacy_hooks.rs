//! Demonstrates the legacy, procedural way of implementing hooks.
//!
//! Hooks are free functions named `{module}_{hook}` and registered with
//! [`ModuleHooks::implement_fn`], which derives the same identity.

use crate::{Module, ModuleHooks, RegistryError, Route, TemplateSchema, Theme, routing::PhfRouter};

/// The module name.
pub const NAME: &str = "legacy_hooks";

/// The route of the demonstration page.
pub const PAGE_ROUTE: &str = "legacy_hooks.page";

static ROUTES: phf::Map<&'static str, Route> = phf::phf_map! {
    "legacy_hooks.page" => Route {
        path: "/legacy-hooks",
        template: "legacy_template",
        variables: &[(
            "message",
            "This is rendered using the legacy way of implementing theme hooks!",
        )],
    },
};

/// The `legacy_hooks` module.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyHooks;

impl Module for LegacyHooks {
    fn name(&self) -> &'static str {
        NAME
    }

    fn register(&self, hooks: &mut ModuleHooks<'_>) -> Result<(), RegistryError> {
        hooks.implement_fn::<Theme, _>(legacy_hooks_theme)?;
        Ok(())
    }

    fn routes(&self) -> PhfRouter<Route> {
        PhfRouter::new(&ROUTES)
    }
}

/// Implements `theme`: declares `legacy_template`.
pub fn legacy_hooks_theme(_ctx: &mut ()) -> Vec<TemplateSchema> {
    vec![TemplateSchema::new("legacy_template").variable("message", "")]
}
