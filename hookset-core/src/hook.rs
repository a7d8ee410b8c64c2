//! # Hooks and Hook Points
//!
//! A [`HookPoint`] names a lifecycle point of the framework and fixes the
//! shape of the call made there: what handlers receive ([`HookPoint::Context`])
//! and what they give back ([`HookPoint::Output`]). A [`Hook`] is one
//! handler for one point.
//!
//! Handlers always receive the context mutably. Value-returning points
//! simply leave it alone; mutation points (such as page attachments) append
//! to it.
//!
//! # Identity
//!
//! Every registration carries a [`HandlerId`]. The registry uses it as an
//! idempotency guard: the same identity can only be registered once per
//! hook name.
//!
//! Handlers registered without an explicit identity are identified by
//! instance. Values of a zero-sized type are indistinguishable and share
//! their type name; any other handler is named after its type and the
//! address of the value it holds, so distinct values never collide while
//! two handles to one shared value (an `Arc` cloned twice) do.

use std::{borrow::Cow, fmt, sync::Arc};

/// A named lifecycle point at which hooks are dispatched.
///
/// # Example
///
/// ```rust,ignore
/// pub struct Cron;
///
/// impl HookPoint for Cron {
///     const NAME: &'static str = "cron";
///     type Context = CronRun;
///     type Output = ();
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a hook point",
    label = "missing `HookPoint` implementation",
    note = "Hook points declare a `NAME`, the `Context` handlers receive and their `Output`."
)]
pub trait HookPoint: Send + Sync + 'static {
    /// The hook name handlers are registered under.
    const NAME: &'static str;

    /// The value handlers receive.
    type Context: ?Sized;

    /// The value handlers return.
    type Output;
}

/// A handler for the hook point `P`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Hook<{P}>`",
    label = "missing `Hook` implementation",
    note = "Implement `invoke` for the point, or annotate a method with `#[hook({P})]` inside a `#[hooks]` impl block."
)]
pub trait Hook<P: HookPoint>: Send + Sync + 'static {
    /// Called when `P` is dispatched.
    fn invoke(&self, ctx: &mut P::Context) -> P::Output;

    /// Address of the value this handler stands for.
    ///
    /// Handles to shared state return the address of what they share.
    fn instance(&self) -> *const () {
        (self as *const Self).cast()
    }
}

impl<P: HookPoint, H: Hook<P> + ?Sized> Hook<P> for Arc<H> {
    fn invoke(&self, ctx: &mut P::Context) -> P::Output {
        (**self).invoke(ctx)
    }

    fn instance(&self) -> *const () {
        (**self).instance()
    }
}

impl<P: HookPoint, H: Hook<P> + ?Sized> Hook<P> for Box<H> {
    fn invoke(&self, ctx: &mut P::Context) -> P::Output {
        (**self).invoke(ctx)
    }

    fn instance(&self) -> *const () {
        (**self).instance()
    }
}

/// A hook backed by a plain function or closure.
///
/// Created with [`hook_fn`].
#[derive(Clone, Copy)]
pub struct FnHook<F> {
    func: F,
}

/// Wrap a function as a [`Hook`].
///
/// ```rust,ignore
/// registry.register::<Help, _>(hook_fn(|req: &mut HelpRequest| String::new()))?;
/// ```
pub const fn hook_fn<F>(func: F) -> FnHook<F> {
    FnHook { func }
}

impl<P, F> Hook<P> for FnHook<F>
where
    P: HookPoint,
    F: Fn(&mut P::Context) -> P::Output + Send + Sync + 'static,
{
    fn invoke(&self, ctx: &mut P::Context) -> P::Output {
        (self.func)(ctx)
    }
}

impl<F> fmt::Debug for FnHook<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHook")
            .field("func", &std::any::type_name::<F>())
            .finish()
    }
}

/// Outputs that can be "empty", for short-circuiting dispatch.
pub trait HookOutput {
    /// Whether this output counts as "nothing to say".
    fn is_empty(&self) -> bool;
}

impl HookOutput for String {
    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }
}

impl HookOutput for &'static str {
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl<T> HookOutput for Vec<T> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<T> HookOutput for Option<T> {
    fn is_empty(&self) -> bool {
        self.is_none()
    }
}

impl HookOutput for () {
    fn is_empty(&self) -> bool {
        true
    }
}

/// The identity of a registered handler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId(Cow<'static, str>);

impl HandlerId {
    /// Create an identity from a name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The identity derived from a handler's type.
    pub fn of<H: ?Sized>() -> Self {
        Self(Cow::Borrowed(std::any::type_name::<H>()))
    }

    /// The identity of one handler value: `{type}@{address}`.
    pub fn instance<H: ?Sized>(address: *const ()) -> Self {
        Self(Cow::Owned(format!("{}@{:p}", std::any::type_name::<H>(), address)))
    }

    /// The identity of a procedural implementation: `{module}_{hook}`.
    pub fn procedural(module: &str, hook: &str) -> Self {
        Self(Cow::Owned(format!("{module}_{hook}")))
    }

    /// The identity as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for HandlerId {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping;

    impl HookPoint for Ping {
        const NAME: &'static str = "ping";
        type Context = Vec<&'static str>;
        type Output = usize;
    }

    struct Pong;

    impl Hook<Ping> for Pong {
        fn invoke(&self, ctx: &mut Vec<&'static str>) -> usize {
            ctx.push("pong");
            ctx.len()
        }
    }

    #[test]
    fn test_fn_hook_invokes_closure() {
        let hook = hook_fn(|ctx: &mut Vec<&'static str>| {
            ctx.push("fn");
            ctx.len() * 10
        });
        let mut ctx = vec!["a"];
        assert_eq!(Hook::<Ping>::invoke(&hook, &mut ctx), 20);
        assert_eq!(ctx, vec!["a", "fn"]);
    }

    #[test]
    fn test_shared_hook_forwards() {
        let hook: Arc<dyn Hook<Ping>> = Arc::new(Pong);
        let mut ctx = Vec::new();
        assert_eq!(hook.invoke(&mut ctx), 1);
    }

    #[test]
    fn test_shared_handles_report_one_instance() {
        let shared = Arc::new(Pong);
        let other = Arc::clone(&shared);
        assert_eq!(Hook::<Ping>::instance(&shared), Hook::<Ping>::instance(&other));
        assert_ne!(
            Hook::<Ping>::instance(&shared),
            Hook::<Ping>::instance(&Arc::new(Pong))
        );
    }

    #[test]
    fn test_handler_id_forms() {
        assert_eq!(HandlerId::procedural("legacy_hooks", "theme").as_str(), "legacy_hooks_theme");
        assert!(HandlerId::of::<Pong>().as_str().ends_with("Pong"));
        assert_eq!(
            HandlerId::instance::<Pong>(std::ptr::null()),
            HandlerId::instance::<Pong>(std::ptr::null())
        );
        assert_eq!(HandlerId::from("x"), HandlerId::new(String::from("x")));
    }

    #[test]
    fn test_hook_output_emptiness() {
        assert!(HookOutput::is_empty(&String::new()));
        assert!(!HookOutput::is_empty(&"help".to_string()));
        assert!(HookOutput::is_empty(&None::<u8>));
        assert!(!HookOutput::is_empty(&vec![1]));
    }
}
