//! Render descriptors, template schemas and static routes.
//!
//! A [`RenderDescriptor`] is what a route produces: a template name plus the
//! variables to fill it with. A [`TemplateSchema`] is what a `theme` hook
//! declares: the variables a template accepts and their defaults.

use std::collections::BTreeMap;

pub use serde_json::Value;

/// The (template, variables) pair handed to a templating pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderDescriptor {
    template: String,
    variables: BTreeMap<String, Value>,
}

impl RenderDescriptor {
    /// Create a descriptor with no variables.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            variables: BTreeMap::new(),
        }
    }

    /// Set a variable.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a variable in place, returning the previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.variables.insert(name.into(), value.into())
    }

    /// The template name.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// A variable's value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// All variables, ordered by name.
    pub fn variables(&self) -> &BTreeMap<String, Value> {
        &self.variables
    }
}

/// The variables a template declares, with their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSchema {
    name: String,
    variables: BTreeMap<String, Value>,
}

impl TemplateSchema {
    /// Declare a template with no variables.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: BTreeMap::new(),
        }
    }

    /// Declare a variable and its default.
    pub fn variable(mut self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.variables.insert(name.into(), default.into());
        self
    }

    /// The template name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a variable is declared.
    pub fn declares(&self, variable: &str) -> bool {
        self.variables.contains_key(variable)
    }

    /// A declared variable's default.
    pub fn default_of(&self, variable: &str) -> Option<&Value> {
        self.variables.get(variable)
    }

    /// All declared variables with their defaults.
    pub fn variables(&self) -> &BTreeMap<String, Value> {
        &self.variables
    }
}

/// A static page definition.
///
/// Routes are const-constructible so modules can keep them in `phf` tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// The URL path the route is served at.
    pub path: &'static str,
    /// The template the page renders with.
    pub template: &'static str,
    /// Fixed variables passed to the template.
    pub variables: &'static [(&'static str, &'static str)],
}

impl Route {
    /// The descriptor this route renders to.
    pub fn descriptor(&self) -> RenderDescriptor {
        self.variables.iter().fold(
            RenderDescriptor::new(self.template),
            |descriptor, (name, value)| descriptor.with(*name, *value),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_descriptor() {
        const ROUTE: Route = Route {
            path: "/hello",
            template: "hello_template",
            variables: &[("message", "hi"), ("title", "Hello")],
        };

        let descriptor = ROUTE.descriptor();
        assert_eq!(descriptor.template(), "hello_template");
        assert_eq!(descriptor.get("message"), Some(&Value::from("hi")));
        assert_eq!(descriptor.get("title"), Some(&Value::from("Hello")));
        assert_eq!(descriptor.variables().len(), 2);
    }

    #[test]
    fn test_schema_declares_defaults() {
        let schema = TemplateSchema::new("class_template").variable("message", "");
        assert!(schema.declares("message"));
        assert!(!schema.declares("title"));
        assert_eq!(schema.default_of("message"), Some(&Value::from("")));
    }

    #[test]
    fn test_set_returns_previous() {
        let mut descriptor = RenderDescriptor::new("t").with("a", 1);
        assert_eq!(descriptor.set("a", 2), Some(Value::from(1)));
        assert_eq!(descriptor.get("a"), Some(&Value::from(2)));
    }
}
