//! A site: installed modules booted into a frozen registry, answering
//! page requests.
//!
//! Booting happens once, in [`SiteBuilder::build`]:
//!
//! 1. every module registers its hooks, in installation order;
//! 2. the registry is frozen;
//! 3. `theme` is dispatched to build the [`ThemeRegistry`];
//! 4. module routes are merged into one route table and one path table.
//!
//! After that the site is immutable and can be shared across threads.

use crate::{
    Attachments, AttachmentsContext, Dispatcher, HandlerId, Help, HelpRequest, HookRegistry,
    HooksetError, Module, PageAttachments, RegistryBuilder, RegistryError, RenderDescriptor,
    RenderError, Route, RouteRenderer, RouterBuilder, TemplateSchema, ThemeRegistry,
    routing::{HashMapRouter, HashMapRouterBuilder, PathRouter, PathRouterBuilder},
};
use thiserror::Error;

/// Route id of the built-in module help page.
pub const HELP_ROUTE: &str = "help.page";

/// Path of the built-in module help page.
pub const HELP_PATH: &str = "/admin/help/{name}";

/// Template of the built-in module help page.
pub const HELP_TEMPLATE: &str = "help_page";

/// Errors returned while answering a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    /// Nothing is served at this path.
    #[error("page not found: {0}")]
    NotFound(String),

    /// The route could not be rendered.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// A rendered page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    route_name: String,
    descriptor: RenderDescriptor,
    attachments: Attachments,
}

impl Page {
    /// The route that produced the page.
    pub fn route_name(&self) -> &str {
        &self.route_name
    }

    /// The resolved render descriptor, defaults filled in.
    pub fn descriptor(&self) -> &RenderDescriptor {
        &self.descriptor
    }

    /// The libraries attached to the page.
    pub fn attachments(&self) -> &Attachments {
        &self.attachments
    }
}

/// Builder for a [`Site`].
#[derive(Default)]
pub struct SiteBuilder {
    modules: Vec<Box<dyn Module>>,
}

impl SiteBuilder {
    /// Install a module. Modules register in installation order.
    pub fn module(mut self, module: impl Module) -> Self {
        self.modules.push(Box::new(module));
        self
    }

    /// Boot the site.
    pub fn build(self) -> Result<Site, HooksetError> {
        let mut names: Vec<&'static str> = Vec::with_capacity(self.modules.len());
        let mut hooks = RegistryBuilder::new();
        let mut routes: HashMapRouterBuilder<String, Route> = HashMapRouterBuilder::default();
        let mut paths: PathRouterBuilder<String> = PathRouterBuilder::default();
        paths.insert(HELP_PATH.to_string(), HELP_ROUTE.to_string())?;

        for module in &self.modules {
            let name = module.name();
            if names.contains(&name) {
                return Err(RegistryError::DuplicateModule(name).into());
            }
            names.push(name);

            module.register(&mut hooks.module(name))?;

            for (id, route) in module.routes().entries() {
                routes.insert(id.to_string(), *route)?;
                paths.insert(route.path.to_string(), id.to_string())?;
            }
        }

        let registry = hooks.build();
        let mut theme = ThemeRegistry::build(&Dispatcher::new(&registry))?;
        theme.declare(
            HandlerId::new("system_theme"),
            TemplateSchema::new(HELP_TEMPLATE)
                .variable("module", "")
                .variable("help", ""),
        )?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            modules = names.len(),
            hooks = registry.len(),
            templates = theme.len(),
            "site booted"
        );

        Ok(Site {
            modules: names,
            registry,
            theme,
            renderer: RouteRenderer::new(routes.build()?),
            paths: paths.build()?,
        })
    }
}

/// A booted site.
pub struct Site {
    modules: Vec<&'static str>,
    registry: HookRegistry,
    theme: ThemeRegistry,
    renderer: RouteRenderer<HashMapRouter<String, Route>>,
    paths: PathRouter<String>,
}

impl Site {
    /// Start building a site.
    pub fn builder() -> SiteBuilder {
        SiteBuilder::default()
    }

    /// Installed module names, in installation order.
    pub fn modules(&self) -> &[&'static str] {
        &self.modules
    }

    /// Whether a module is installed.
    pub fn is_installed(&self, module: &str) -> bool {
        self.modules.contains(&module)
    }

    /// The frozen hook registry.
    pub fn registry(&self) -> &HookRegistry {
        &self.registry
    }

    /// The theme registry.
    pub fn theme(&self) -> &ThemeRegistry {
        &self.theme
    }

    /// A dispatcher over the site's registry.
    pub fn dispatcher(&self) -> Dispatcher<'_> {
        Dispatcher::new(&self.registry)
    }

    /// Render a route and resolve it against its template.
    pub fn render(&self, route_id: &str) -> Result<RenderDescriptor, RenderError> {
        let descriptor = self.renderer.render(route_id)?;
        self.theme.resolve(descriptor)
    }

    /// Help text for a route; empty when no module has any.
    pub fn help(&self, route_name: &str) -> String {
        self.dispatcher()
            .first::<Help>(&mut HelpRequest::new(route_name))
    }

    /// The libraries attached to a route's page.
    pub fn attachments(&self, route_name: &str) -> Attachments {
        let mut ctx = AttachmentsContext::new(route_name);
        self.dispatcher().alter::<PageAttachments>(&mut ctx);
        ctx.attachments
    }

    /// Answer a request for a path.
    pub fn handle(&self, path: &str) -> Result<Page, SiteError> {
        let matched = self
            .paths
            .resolve(path)
            .ok_or_else(|| SiteError::NotFound(path.to_string()))?;

        let (route_name, descriptor) = if matched.value == HELP_ROUTE {
            let module = matched.param("name").unwrap_or_default();
            if !self.is_installed(module) {
                return Err(SiteError::NotFound(path.to_string()));
            }
            let route_name = format!("{HELP_ROUTE}.{module}");
            let help = self.help(&route_name);
            let descriptor = RenderDescriptor::new(HELP_TEMPLATE)
                .with("module", module)
                .with("help", help);
            (route_name, self.theme.resolve(descriptor)?)
        } else {
            (matched.value.clone(), self.render(matched.value)?)
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(path, route = %route_name, template = descriptor.template(), "handled request");

        let attachments = self.attachments(&route_name);
        Ok(Page {
            route_name,
            descriptor,
            attachments,
        })
    }
}

impl std::fmt::Debug for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Site")
            .field("modules", &self.modules)
            .field("registry", &self.registry)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}
