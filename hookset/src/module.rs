//! Modules: named bundles of hook implementations and routes.

use hookset_core::{RegistryError, Route};
use hookset_std::{registry::ModuleHooks, renderer::RouteRenderer, routing::PhfRouter};

/// A module installed into a [`Site`](crate::Site).
///
/// # Example
///
/// ```rust,ignore
/// static ROUTES: phf::Map<&'static str, Route> = phf::phf_map! {
///     "blog.page" => Route { path: "/blog", template: "blog", variables: &[] },
/// };
///
/// struct Blog;
///
/// impl Module for Blog {
///     fn name(&self) -> &'static str {
///         "blog"
///     }
///
///     fn register(&self, hooks: &mut ModuleHooks<'_>) -> Result<(), RegistryError> {
///         hooks.implement_fn::<Theme, _>(blog_theme)?;
///         Ok(())
///     }
///
///     fn routes(&self) -> PhfRouter<Route> {
///         PhfRouter::new(&ROUTES)
///     }
/// }
/// ```
pub trait Module: Send + Sync + 'static {
    /// The machine name of the module, e.g. `class_hooks`.
    fn name(&self) -> &'static str;

    /// Register the module's hook implementations.
    fn register(&self, hooks: &mut ModuleHooks<'_>) -> Result<(), RegistryError>;

    /// The module's static route table, keyed by route id.
    fn routes(&self) -> PhfRouter<Route>;

    /// A renderer over this module's routes alone.
    fn renderer(&self) -> RouteRenderer<PhfRouter<Route>> {
        RouteRenderer::new(self.routes())
    }
}
