//! Theme registry built from the `theme` hook.

use crate::dispatch::Dispatcher;
use hookset_core::{HandlerId, RegistryError, RenderDescriptor, RenderError, TemplateSchema, Theme};
use std::collections::BTreeMap;

/// A declared template and the handler that declared it.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeEntry {
    /// The declared schema.
    pub schema: TemplateSchema,
    /// The `theme` handler that declared it.
    pub provider: HandlerId,
}

/// Every template declared by `theme` hooks, by name.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    templates: BTreeMap<String, ThemeEntry>,
}

impl ThemeRegistry {
    /// Dispatch `theme` and index every declared template.
    pub fn build(dispatcher: &Dispatcher<'_>) -> Result<Self, RegistryError> {
        let mut registry = Self::default();
        for (provider, schemas) in dispatcher.collect::<Theme>(&mut ()) {
            for schema in schemas {
                registry.declare(provider.clone(), schema)?;
            }
        }
        Ok(registry)
    }

    /// Declare a template directly.
    pub fn declare(
        &mut self,
        provider: HandlerId,
        schema: TemplateSchema,
    ) -> Result<(), RegistryError> {
        if let Some(existing) = self.templates.get(schema.name()) {
            return Err(RegistryError::DuplicateTemplate {
                template: schema.name().to_string(),
                first: existing.provider.to_string(),
                second: provider.to_string(),
            });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(template = schema.name(), provider = %provider, "declared template");

        self.templates
            .insert(schema.name().to_string(), ThemeEntry { schema, provider });
        Ok(())
    }

    /// A template's schema.
    pub fn get(&self, template: &str) -> Option<&TemplateSchema> {
        self.templates.get(template).map(|entry| &entry.schema)
    }

    /// The handler that declared a template.
    pub fn provider(&self, template: &str) -> Option<&HandlerId> {
        self.templates.get(template).map(|entry| &entry.provider)
    }

    /// Declared template names, sorted.
    pub fn templates(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Number of declared templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether no template is declared.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Check a descriptor against its template and fill in defaults.
    ///
    /// Every variable the descriptor carries must be declared; every
    /// declared variable it leaves out gets its default.
    pub fn resolve(&self, descriptor: RenderDescriptor) -> Result<RenderDescriptor, RenderError> {
        let schema = self
            .get(descriptor.template())
            .ok_or_else(|| RenderError::UnknownTemplate(descriptor.template().to_string()))?;

        if let Some(variable) = descriptor.variables().keys().find(|v| !schema.declares(v)) {
            return Err(RenderError::UndeclaredVariable {
                template: schema.name().to_string(),
                variable: variable.clone(),
            });
        }

        let mut resolved = descriptor;
        for (name, default) in schema.variables() {
            if resolved.get(name).is_none() {
                resolved.set(name.clone(), default.clone());
            }
        }
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryBuilder;
    use hookset_core::{Value, hook_fn};

    fn theme_registry() -> ThemeRegistry {
        let mut builder = RegistryBuilder::new();
        builder
            .module("card")
            .implement_fn::<Theme, _>(|_: &mut ()| {
                vec![
                    TemplateSchema::new("card")
                        .variable("title", "Untitled")
                        .variable("body", ""),
                ]
            })
            .unwrap();
        let registry = builder.build();
        ThemeRegistry::build(&Dispatcher::new(&registry)).unwrap()
    }

    #[test]
    fn test_resolve_fills_defaults() {
        let theme = theme_registry();
        let resolved = theme
            .resolve(RenderDescriptor::new("card").with("body", "Hello"))
            .unwrap();

        assert_eq!(resolved.get("title"), Some(&Value::from("Untitled")));
        assert_eq!(resolved.get("body"), Some(&Value::from("Hello")));
        assert_eq!(theme.provider("card").map(HandlerId::as_str), Some("card_theme"));
    }

    #[test]
    fn test_resolve_rejects_undeclared_variable() {
        let theme = theme_registry();
        let err = theme
            .resolve(RenderDescriptor::new("card").with("footer", "x"))
            .unwrap_err();
        assert_eq!(
            err,
            RenderError::UndeclaredVariable {
                template: "card".into(),
                variable: "footer".into(),
            }
        );
    }

    #[test]
    fn test_resolve_rejects_unknown_template() {
        let theme = theme_registry();
        let err = theme.resolve(RenderDescriptor::new("table")).unwrap_err();
        assert_eq!(err, RenderError::UnknownTemplate("table".into()));
    }

    #[test]
    fn test_duplicate_template_rejected() {
        let mut builder = RegistryBuilder::new();
        builder
            .register_as::<Theme, _>(
                "a_theme".into(),
                hook_fn(|_: &mut ()| vec![TemplateSchema::new("page")]),
            )
            .unwrap()
            .register_as::<Theme, _>(
                "b_theme".into(),
                hook_fn(|_: &mut ()| vec![TemplateSchema::new("page")]),
            )
            .unwrap();
        let registry = builder.build();

        let err = ThemeRegistry::build(&Dispatcher::new(&registry)).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateTemplate {
                template: "page".into(),
                first: "a_theme".into(),
                second: "b_theme".into(),
            }
        );
    }
}
