//! Testing utilities for hookset.
//!
//! - [`RecordingHook`]: A hook that records every context it receives
//! - [`OrderProbe`]: Shared log for asserting the order handlers ran in

use hookset_core::{Hook, HookPoint};
use std::{
    marker::PhantomData,
    sync::{Arc, Mutex, PoisonError},
};

// ============================================================================
// Recording Hook
// ============================================================================

/// A hook that records all contexts it receives and returns a fixed output.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHook::<Help>::new("answer".to_string());
/// builder.register::<Help, _>(recorder.clone())?;
///
/// // Dispatch...
///
/// assert_eq!(recorder.count(), 1);
/// ```
pub struct RecordingHook<P: HookPoint>
where
    P::Context: Sized,
{
    contexts: Arc<Mutex<Vec<P::Context>>>,
    output: P::Output,
}

impl<P: HookPoint> RecordingHook<P>
where
    P::Context: Sized,
{
    /// Create a recording hook that returns `output`.
    pub fn new(output: P::Output) -> Self {
        Self {
            contexts: Arc::new(Mutex::new(Vec::new())),
            output,
        }
    }

    /// Get the number of recorded contexts.
    pub fn count(&self) -> usize {
        self.contexts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Clear all recorded contexts.
    pub fn clear(&self) {
        self.contexts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl<P: HookPoint> RecordingHook<P>
where
    P::Context: Sized + Clone,
{
    /// Get a clone of the recorded contexts.
    pub fn contexts(&self) -> Vec<P::Context> {
        self.contexts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<P: HookPoint> Default for RecordingHook<P>
where
    P::Context: Sized,
    P::Output: Default,
{
    fn default() -> Self {
        Self::new(P::Output::default())
    }
}

impl<P: HookPoint> Clone for RecordingHook<P>
where
    P::Context: Sized,
    P::Output: Clone,
{
    fn clone(&self) -> Self {
        Self {
            contexts: self.contexts.clone(),
            output: self.output.clone(),
        }
    }
}

impl<P: HookPoint> Hook<P> for RecordingHook<P>
where
    P::Context: Sized + Clone + Send,
    P::Output: Clone + Send + Sync,
{
    fn invoke(&self, ctx: &mut P::Context) -> P::Output {
        self.contexts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ctx.clone());
        self.output.clone()
    }

    // Clones share one log, so they count as one recorder.
    fn instance(&self) -> *const () {
        Arc::as_ptr(&self.contexts).cast()
    }
}

// ============================================================================
// Order Probe
// ============================================================================

/// A shared log that hooks write their label into when invoked.
///
/// # Example
///
/// ```rust,ignore
/// let probe = OrderProbe::new();
/// builder.register_as::<Help, _>("b".into(), probe.hook::<Help>("b", String::new()))?;
/// builder.register_as::<Help, _>("a".into(), probe.hook::<Help>("a", String::new()))?;
///
/// // Dispatch...
///
/// assert_eq!(probe.labels(), ["b", "a"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrderProbe {
    labels: Arc<Mutex<Vec<&'static str>>>,
}

impl OrderProbe {
    /// Create an empty probe.
    pub fn new() -> Self {
        Self::default()
    }

    /// A hook for `P` that logs `label` and returns `output`.
    pub fn hook<P: HookPoint>(&self, label: &'static str, output: P::Output) -> ProbeHook<P> {
        ProbeHook {
            label,
            labels: self.labels.clone(),
            output,
            _point: PhantomData,
        }
    }

    /// The labels logged so far, in invocation order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.labels
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// A hook created by [`OrderProbe::hook`].
pub struct ProbeHook<P: HookPoint> {
    label: &'static str,
    labels: Arc<Mutex<Vec<&'static str>>>,
    output: P::Output,
    _point: PhantomData<fn() -> P>,
}

impl<P: HookPoint> Hook<P> for ProbeHook<P>
where
    P::Output: Clone + Send + Sync,
{
    fn invoke(&self, _ctx: &mut P::Context) -> P::Output {
        self.labels
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(self.label);
        self.output.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookset_core::{Help, HelpRequest};

    #[test]
    fn test_recording_hook_records_contexts() {
        let recorder = RecordingHook::<Help>::new("answer".to_string());
        let clone = recorder.clone();

        let output = clone.invoke(&mut HelpRequest::new("a"));
        assert_eq!(output, "answer");
        assert_eq!(recorder.contexts(), vec![HelpRequest::new("a")]);

        recorder.clear();
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn test_probe_logs_labels() {
        let probe = OrderProbe::new();
        let first = probe.hook::<Help>("first", String::new());
        let second = probe.hook::<Help>("second", String::new());

        second.invoke(&mut HelpRequest::new("x"));
        first.invoke(&mut HelpRequest::new("x"));
        assert_eq!(probe.labels(), ["second", "first"]);
    }
}
