//! Demonstrates the class-based way of implementing hooks.
//!
//! Hooks are methods on plain structs, marked with `#[hook(...)]` inside a
//! `#[hooks]` impl block. One struct may implement several hooks.

use crate::{
    AttachmentsContext, Help, HelpRequest, Module, ModuleHooks, PageAttachments, RegistryError,
    Route, TemplateSchema, Theme, hooks, routing::PhfRouter,
};

/// The module name.
pub const NAME: &str = "class_hooks";

/// The route of the demonstration page.
pub const PAGE_ROUTE: &str = "class_hooks.page";

/// The route of this module's help page.
pub const HELP_ROUTE: &str = "help.page.class_hooks";

/// The library attached to the demonstration page.
pub const CUSTOM_STYLES: &str = "class_hooks/custom_styles";

/// The help text shown on [`HELP_ROUTE`].
pub const HELP_TEXT: &str = "<p>This module demonstrates the class-based way of implementing hooks with dependency injection.</p>";

static ROUTES: phf::Map<&'static str, Route> = phf::phf_map! {
    "class_hooks.page" => Route {
        path: "/class-hooks",
        template: "class_template",
        variables: &[(
            "message",
            "This is rendered using the class-based way of implementing theme hooks!",
        )],
    },
};

/// The `class_hooks` module.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassHooks;

impl Module for ClassHooks {
    fn name(&self) -> &'static str {
        NAME
    }

    fn register(&self, hooks: &mut ModuleHooks<'_>) -> Result<(), RegistryError> {
        hooks.implement_all(ThemeHook)?.implement_all(HelpHook)?;
        Ok(())
    }

    fn routes(&self) -> PhfRouter<Route> {
        PhfRouter::new(&ROUTES)
    }
}

/// Declares the module's template and styles its page.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeHook;

#[hooks]
impl ThemeHook {
    /// Declares `class_template`.
    #[hook(Theme)]
    pub fn theme(&self, _ctx: &mut ()) -> Vec<TemplateSchema> {
        vec![TemplateSchema::new("class_template").variable("message", "")]
    }

    /// Attaches [`CUSTOM_STYLES`] to [`PAGE_ROUTE`] only.
    #[hook(PageAttachments)]
    pub fn page_attachments(&self, ctx: &mut AttachmentsContext) {
        if ctx.route_name == PAGE_ROUTE {
            ctx.attachments.attach_library(CUSTOM_STYLES);
        }
    }
}

/// Answers help requests for the module's help page.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpHook;

#[hooks]
impl HelpHook {
    /// Returns [`HELP_TEXT`] for [`HELP_ROUTE`], nothing otherwise.
    #[hook(Help)]
    pub fn help(&self, request: &mut HelpRequest) -> String {
        if request.route_name == HELP_ROUTE {
            return HELP_TEXT.to_string();
        }
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Hook, RenderDescriptor};

    #[test]
    fn test_help_only_for_own_page() {
        assert_eq!(HelpHook.help(&mut HelpRequest::new(HELP_ROUTE)), HELP_TEXT);
        assert!(HelpHook.help(&mut HelpRequest::new("anything_else")).is_empty());
    }

    #[test]
    fn test_attachments_only_on_page_route() {
        let mut ctx = AttachmentsContext::new(PAGE_ROUTE);
        Hook::<PageAttachments>::invoke(&ThemeHook, &mut ctx);
        assert_eq!(ctx.attachments.libraries(), [CUSTOM_STYLES]);

        let mut other = AttachmentsContext::new("legacy_hooks.page");
        Hook::<PageAttachments>::invoke(&ThemeHook, &mut other);
        assert!(other.attachments.is_empty());
    }

    #[test]
    fn test_module_renderer() {
        let descriptor = ClassHooks.renderer().render(PAGE_ROUTE).unwrap();
        assert_eq!(
            descriptor,
            RenderDescriptor::new("class_template").with(
                "message",
                "This is rendered using the class-based way of implementing theme hooks!"
            )
        );
    }
}
