//! The framework's lifecycle points.
//!
//! | Point | Name | Context | Output | Dispatch |
//! |-------|------|---------|--------|----------|
//! | [`Theme`] | `theme` | `()` | `Vec<TemplateSchema>` | collect |
//! | [`Help`] | `help` | [`HelpRequest`] | `String` | first non-empty |
//! | [`PageAttachments`] | `page_attachments` | [`AttachmentsContext`] | `()` | alter |

use crate::{hook::HookPoint, render::TemplateSchema};

/// Declares the templates a module provides. Dispatched once at boot.
#[derive(Debug, Clone, Copy, Default)]
pub struct Theme;

impl HookPoint for Theme {
    const NAME: &'static str = "theme";
    type Context = ();
    type Output = Vec<TemplateSchema>;
}

/// Looks up help text for a route.
#[derive(Debug, Clone, Copy, Default)]
pub struct Help;

impl HookPoint for Help {
    const NAME: &'static str = "help";
    type Context = HelpRequest;
    type Output = String;
}

/// Adds asset libraries to the page being built.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageAttachments;

impl HookPoint for PageAttachments {
    const NAME: &'static str = "page_attachments";
    type Context = AttachmentsContext;
    type Output = ();
}

/// The request passed to `help` handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpRequest {
    /// The route help is requested for, e.g. `help.page.class_hooks`.
    pub route_name: String,
}

impl HelpRequest {
    /// Create a help request for a route.
    pub fn new(route_name: impl Into<String>) -> Self {
        Self {
            route_name: route_name.into(),
        }
    }
}

/// The context passed to `page_attachments` handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentsContext {
    /// The route of the page being built.
    pub route_name: String,
    /// The attachments collected so far.
    pub attachments: Attachments,
}

impl AttachmentsContext {
    /// Create an empty context for a route.
    pub fn new(route_name: impl Into<String>) -> Self {
        Self {
            route_name: route_name.into(),
            attachments: Attachments::default(),
        }
    }
}

/// The asset libraries attached to a page.
///
/// Libraries keep the order they were attached in; attaching the same
/// library twice is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attachments {
    libraries: Vec<String>,
}

impl Attachments {
    /// Attach a library, e.g. `class_hooks/custom_styles`.
    ///
    /// Returns `false` if it was already attached.
    pub fn attach_library(&mut self, library: impl Into<String>) -> bool {
        let library = library.into();
        if self.contains(&library) {
            return false;
        }
        self.libraries.push(library);
        true
    }

    /// Whether a library is attached.
    pub fn contains(&self, library: &str) -> bool {
        self.libraries.iter().any(|l| l == library)
    }

    /// The attached libraries, in attachment order.
    pub fn libraries(&self) -> &[String] {
        &self.libraries
    }

    /// Number of attached libraries.
    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    /// Whether nothing is attached.
    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_library_is_idempotent() {
        let mut attachments = Attachments::default();
        assert!(attachments.attach_library("class_hooks/custom_styles"));
        assert!(attachments.attach_library("core/drupal"));
        assert!(!attachments.attach_library("class_hooks/custom_styles"));

        assert_eq!(
            attachments.libraries(),
            ["class_hooks/custom_styles", "core/drupal"]
        );
    }

    #[test]
    fn test_point_names() {
        assert_eq!(Theme::NAME, "theme");
        assert_eq!(Help::NAME, "help");
        assert_eq!(PageAttachments::NAME, "page_attachments");
    }
}
