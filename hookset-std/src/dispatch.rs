//! Hook dispatch.
//!
//! The [`Dispatcher`] runs the handlers registered for a hook point in
//! registration order. It holds nothing but a borrow of the registry, so it
//! is free to create per call.
//!
//! # Dispatch Modes
//!
//! | Mode | Method | Behavior |
//! |------|--------|----------|
//! | Value-returning | [`Dispatcher::first`] | First non-empty output wins |
//! | Mutation | [`Dispatcher::alter`] | Every handler mutates the context |
//! | Aggregating | [`Dispatcher::collect`] | Every output is returned |

use crate::registry::HookRegistry;
use hookset_core::{HandlerId, HookOutput, HookPoint};

/// Invokes the handlers of a [`HookRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'r> {
    registry: &'r HookRegistry,
}

impl<'r> Dispatcher<'r> {
    /// Create a dispatcher over a registry.
    pub const fn new(registry: &'r HookRegistry) -> Self {
        Self { registry }
    }

    /// The registry being dispatched.
    pub fn registry(&self) -> &'r HookRegistry {
        self.registry
    }

    /// Return the first non-empty output, or the empty default.
    ///
    /// Handlers after the first answer are not invoked.
    pub fn first<P>(&self, ctx: &mut P::Context) -> P::Output
    where
        P: HookPoint,
        P::Output: HookOutput + Default,
    {
        for (_id, hook) in self.registry.handlers::<P>() {
            let output = hook.invoke(ctx);
            if !HookOutput::is_empty(&output) {
                #[cfg(feature = "tracing")]
                tracing::debug!(hook = P::NAME, handler = %_id, "handler answered");
                return output;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(hook = P::NAME, "no handler answered");
        P::Output::default()
    }

    /// Let every handler mutate the shared context.
    ///
    /// Returns how many handlers ran.
    pub fn alter<P>(&self, ctx: &mut P::Context) -> usize
    where
        P: HookPoint<Output = ()>,
    {
        let mut invoked = 0;
        for (_, hook) in self.registry.handlers::<P>() {
            hook.invoke(ctx);
            invoked += 1;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(hook = P::NAME, invoked, "altered context");
        invoked
    }

    /// Invoke every handler and return each output with its handler.
    pub fn collect<P>(&self, ctx: &mut P::Context) -> Vec<(HandlerId, P::Output)>
    where
        P: HookPoint,
    {
        let outputs: Vec<_> = self
            .registry
            .handlers::<P>()
            .map(|(id, hook)| (id.clone(), hook.invoke(&mut *ctx)))
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(hook = P::NAME, collected = outputs.len(), "collected outputs");
        outputs
    }
}
