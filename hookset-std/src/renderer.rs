//! Route rendering.

use hookset_core::{RenderDescriptor, RenderError, Route, Router};

/// Resolves route ids to render descriptors.
///
/// Generic over the routing backend: a [`PhfRouter`] for a module's static
/// route table, a [`HashMapRouter`] for the table a site assembles at boot.
///
/// [`PhfRouter`]: crate::routing::PhfRouter
/// [`HashMapRouter`]: crate::routing::HashMapRouter
#[derive(Debug, Clone)]
pub struct RouteRenderer<R> {
    router: R,
}

impl<R> RouteRenderer<R>
where
    R: Router<str, Route>,
{
    /// Create a renderer over a route table.
    pub fn new(router: R) -> Self {
        Self { router }
    }

    /// Render a route.
    pub fn render(&self, route_id: &str) -> Result<RenderDescriptor, RenderError> {
        let route = self
            .router
            .route(route_id)
            .matched()
            .ok_or_else(|| RenderError::UnknownRoute(route_id.to_string()))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(route = route_id, template = route.template, "rendered route");

        Ok(route.descriptor())
    }

    /// Whether a route id is known.
    pub fn contains(&self, route_id: &str) -> bool {
        self.router.contains(route_id)
    }

    /// The underlying router.
    pub fn router(&self) -> &R {
        &self.router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::PhfRouter;
    use hookset_core::Value;

    static ROUTES: phf::Map<&'static str, Route> = phf::phf_map! {
        "greeting.page" => Route {
            path: "/greeting",
            template: "greeting_template",
            variables: &[("message", "Hello!")],
        },
    };

    #[test]
    fn test_render_known_route() {
        let renderer = RouteRenderer::new(PhfRouter::new(&ROUTES));
        let descriptor = renderer.render("greeting.page").unwrap();

        assert_eq!(descriptor.template(), "greeting_template");
        assert_eq!(descriptor.get("message"), Some(&Value::from("Hello!")));
    }

    #[test]
    fn test_render_unknown_route() {
        let renderer = RouteRenderer::new(PhfRouter::new(&ROUTES));
        assert_eq!(
            renderer.render("missing.page"),
            Err(RenderError::UnknownRoute("missing.page".into()))
        );
        assert!(!renderer.contains("missing.page"));
    }
}
