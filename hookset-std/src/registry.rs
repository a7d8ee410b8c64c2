//! Hook registry with boot-time registration.
//!
//! Hooks are registered on a [`RegistryBuilder`] while modules load, then
//! frozen into an immutable [`HookRegistry`] that is shared by reference
//! for the rest of the process.
//!
//! Registrations for the same hook name keep the order they were made in.
//! Each hook name is bound to exactly one [`HookPoint`] type: the first
//! registration decides it.

use hookset_core::{HandlerId, Hook, HookPoint, RegistryError, hook_fn};
use std::{
    any::{Any, TypeId},
    collections::{HashMap, hash_map::Entry},
    fmt,
    sync::Arc,
};

/// A single handler registration.
pub struct Registration {
    hook: &'static str,
    id: HandlerId,
    module: Option<&'static str>,
    order: usize,
    /// Always a `Box<dyn Hook<P>>` for the point bound to `hook`.
    handler: Box<dyn Any + Send + Sync>,
}

impl Registration {
    /// The hook name this handler is registered under.
    pub fn hook_name(&self) -> &'static str {
        self.hook
    }

    /// The handler identity.
    pub fn id(&self) -> &HandlerId {
        &self.id
    }

    /// The module that registered the handler, if any.
    pub fn module(&self) -> Option<&'static str> {
        self.module
    }

    /// Position in the global registration sequence.
    pub fn order(&self) -> usize {
        self.order
    }

    fn handler<P: HookPoint>(&self) -> Option<&dyn Hook<P>> {
        self.handler
            .downcast_ref::<Box<dyn Hook<P>>>()
            .map(|hook| &**hook)
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("hook", &self.hook)
            .field("id", &self.id)
            .field("module", &self.module)
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}

struct Slot {
    point: TypeId,
    registrations: Vec<Registration>,
}

/// An immutable registry of hook handlers.
pub struct HookRegistry {
    slots: HashMap<&'static str, Slot>,
    names: Vec<&'static str>,
    len: usize,
}

impl HookRegistry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The registrations for a hook name, in registration order.
    ///
    /// Returns an empty slice when nothing is registered.
    pub fn lookup(&self, hook: &str) -> &[Registration] {
        self.slots
            .get(hook)
            .map(|slot| slot.registrations.as_slice())
            .unwrap_or(&[])
    }

    /// The typed handlers for a hook point, in registration order.
    pub fn handlers<P: HookPoint>(&self) -> impl Iterator<Item = (&HandlerId, &dyn Hook<P>)> {
        self.slots
            .get(P::NAME)
            .filter(|slot| slot.point == TypeId::of::<P>())
            .into_iter()
            .flat_map(|slot| slot.registrations.iter())
            .filter_map(|registration| {
                registration
                    .handler::<P>()
                    .map(|hook| (registration.id(), hook))
            })
    }

    /// Whether `module` implements the hook `hook`.
    pub fn implements(&self, hook: &str, module: &str) -> bool {
        self.lookup(hook)
            .iter()
            .any(|registration| registration.module == Some(module))
    }

    /// Hook names with at least one handler, in order of first registration.
    pub fn hook_names(&self) -> &[&'static str] {
        &self.names
    }

    /// Total number of registrations.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for name in &self.names {
            map.entry(name, &self.lookup(name));
        }
        map.finish()
    }
}

// ============================================================================
// RegistryBuilder
// ============================================================================

/// Builder for constructing a [`HookRegistry`].
///
/// # Example
/// ```ignore
/// let mut builder = HookRegistry::builder();
/// builder
///     .register::<Help, _>(HelpHook)?
///     .register::<Theme, _>(ThemeHook)?;
/// let registry = builder.build();
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    slots: HashMap<&'static str, Slot>,
    names: Vec<&'static str>,
    next_order: usize,
}

impl fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("hooks", &self.names)
            .field("len", &self.next_order)
            .finish_non_exhaustive()
    }
}

impl RegistryBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook, identified by instance.
    ///
    /// A zero-sized handler is identified by its type name, so registering
    /// it twice is rejected. Any other handler is identified by the value
    /// it holds: distinct values of one type are distinct handlers, while
    /// two clones of one `Arc` are the same handler.
    pub fn register<P, H>(&mut self, hook: H) -> Result<&mut Self, RegistryError>
    where
        P: HookPoint,
        H: Hook<P>,
    {
        let (id, hook) = instance_of::<P, H>(hook);
        self.insert::<P>(None, id, hook)?;
        Ok(self)
    }

    /// Register a hook under an explicit identity.
    pub fn register_as<P, H>(&mut self, id: HandlerId, hook: H) -> Result<&mut Self, RegistryError>
    where
        P: HookPoint,
        H: Hook<P>,
    {
        self.insert::<P>(None, id, Box::new(hook))?;
        Ok(self)
    }

    /// Scope further registrations to a module.
    pub fn module(&mut self, name: &'static str) -> ModuleHooks<'_> {
        ModuleHooks {
            builder: self,
            module: name,
        }
    }

    /// Number of registrations so far.
    pub fn len(&self) -> usize {
        self.next_order
    }

    /// Whether nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.next_order == 0
    }

    /// Freeze the registry.
    pub fn build(self) -> HookRegistry {
        HookRegistry {
            slots: self.slots,
            names: self.names,
            len: self.next_order,
        }
    }

    fn insert<P: HookPoint>(
        &mut self,
        module: Option<&'static str>,
        id: HandlerId,
        hook: Box<dyn Hook<P>>,
    ) -> Result<(), RegistryError> {
        let point = TypeId::of::<P>();
        let slot = match self.slots.entry(P::NAME) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.names.push(P::NAME);
                entry.insert(Slot {
                    point,
                    registrations: Vec::new(),
                })
            }
        };

        if slot.point != point {
            #[cfg(feature = "tracing")]
            tracing::warn!(hook = P::NAME, handler = %id, "hook point type mismatch");
            return Err(RegistryError::HookTypeMismatch { hook: P::NAME });
        }

        if slot.registrations.iter().any(|r| r.id == id) {
            #[cfg(feature = "tracing")]
            tracing::warn!(hook = P::NAME, handler = %id, "duplicate handler rejected");
            return Err(RegistryError::DuplicateHandler {
                hook: P::NAME,
                handler: id.to_string(),
            });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            hook = P::NAME,
            handler = %id,
            module = module.unwrap_or("-"),
            order = self.next_order,
            "registered hook"
        );

        slot.registrations.push(Registration {
            hook: P::NAME,
            id,
            module,
            order: self.next_order,
            handler: Box::new(hook),
        });
        self.next_order += 1;
        Ok(())
    }
}

// ============================================================================
// Module-scoped registration
// ============================================================================

/// Registration scoped to one module.
///
/// Offers both ways modules implement hooks: class-based handlers, which
/// are identified by type (or `Type::method`), and procedural functions,
/// which are identified by the `{module}_{hook}` naming convention.
pub struct ModuleHooks<'a> {
    builder: &'a mut RegistryBuilder,
    module: &'static str,
}

impl fmt::Debug for ModuleHooks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleHooks")
            .field("module", &self.module)
            .field("builder", &self.builder)
            .finish()
    }
}

impl ModuleHooks<'_> {
    /// The module name.
    pub fn name(&self) -> &'static str {
        self.module
    }

    /// Implement a hook with a handler identified by instance.
    ///
    /// Identities follow [`RegistryBuilder::register`].
    pub fn implement<P, H>(&mut self, hook: H) -> Result<&mut Self, RegistryError>
    where
        P: HookPoint,
        H: Hook<P>,
    {
        let (id, hook) = instance_of::<P, H>(hook);
        self.builder.insert::<P>(Some(self.module), id, hook)?;
        Ok(self)
    }

    /// Implement a hook under an explicit identity.
    pub fn implement_as<P, H>(&mut self, id: HandlerId, hook: H) -> Result<&mut Self, RegistryError>
    where
        P: HookPoint,
        H: Hook<P>,
    {
        self.builder.insert::<P>(Some(self.module), id, Box::new(hook))?;
        Ok(self)
    }

    /// Implement a hook with a procedural function.
    ///
    /// The function is identified as `{module}_{hook}`, so a module can
    /// implement each hook procedurally only once.
    pub fn implement_fn<P, F>(&mut self, func: F) -> Result<&mut Self, RegistryError>
    where
        P: HookPoint,
        F: Fn(&mut P::Context) -> P::Output + Send + Sync + 'static,
    {
        let id = HandlerId::procedural(self.module, P::NAME);
        self.implement_as::<P, _>(id, hook_fn(func))
    }

    /// Implement every hook a [`RegisterHooks`] type declares.
    pub fn implement_all<T: RegisterHooks>(&mut self, hooks: T) -> Result<&mut Self, RegistryError> {
        Arc::new(hooks).register_hooks(self)?;
        Ok(self)
    }
}

/// Box a handler and derive its instance identity.
///
/// The address is taken after boxing, so it stays valid for as long as the
/// registration lives.
fn instance_of<P, H>(hook: H) -> (HandlerId, Box<dyn Hook<P>>)
where
    P: HookPoint,
    H: Hook<P>,
{
    let hook: Box<dyn Hook<P>> = Box::new(hook);
    let id = if size_of::<H>() == 0 {
        HandlerId::of::<H>()
    } else {
        HandlerId::instance::<H>(Hook::<P>::instance(&*hook))
    };
    (id, hook)
}

/// A type that implements several hooks and knows how to register them.
///
/// Usually generated by the `#[hooks]` attribute.
pub trait RegisterHooks: Send + Sync + 'static {
    /// Register every hook implemented by this value.
    fn register_hooks(self: Arc<Self>, hooks: &mut ModuleHooks<'_>) -> Result<(), RegistryError>;
}
