use proc_macro::TokenStream;

mod hooks;

/// Attribute macro for implementing hooks as methods.
///
/// Placed on an inherent `impl` block. Every method annotated with
/// `#[hook(Point)]` becomes the body of a `Hook<Point>` implementation for
/// the type, and the type gets a `RegisterHooks` implementation that
/// registers each method under the identity `Type::method`.
///
/// # Example
///
/// ```rust,ignore
/// use hookset::{hooks, Help, HelpRequest};
///
/// pub struct HelpHook;
///
/// #[hooks]
/// impl HelpHook {
///     #[hook(Help)]
///     fn help(&self, request: &mut HelpRequest) -> String {
///         String::new()
///     }
/// }
///
/// // In `Module::register`:
/// hooks.implement_all(HelpHook)?;
/// ```
#[proc_macro_attribute]
pub fn hooks(attr: TokenStream, item: TokenStream) -> TokenStream {
    hooks::hooks_impl(attr, item)
}
