use crate::error::ValidationError;
use crate::property::{PropertyDescriptor, Setter};
use crate::registry::Registry;
use crate::switch;
use crate::validation::Validator;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// Wrap a descriptor's setter so the member's chain runs before every write.
///
/// The replacement setter reads the global switch at entry; when enabled it
/// evaluates the ordered chain for `(owner, member)` against the incoming
/// value and propagates the first failure without touching the original
/// setter. When disabled, or once every validator has passed, it delegates
/// to the original setter unchanged.
///
/// A descriptor without a setter is returned untouched: a getter-only
/// property stays unmodified, with no error and no protection.
pub fn guard_descriptor(
    registry: Arc<Registry>,
    owner: &str,
    member: &str,
    mut descriptor: PropertyDescriptor,
) -> PropertyDescriptor {
    let Some(mut original) = descriptor.set.take() else {
        log::debug!("No setter on {owner}::{member}, leaving property un-intercepted");
        return descriptor;
    };

    let owner = owner.to_string();
    let member = member.to_string();
    let replacement: Setter = Box::new(move |value: Value| {
        if switch::is_enabled() {
            for wrapper in registry.accessor_validators(&owner, &member) {
                wrapper.validate(&value)?;
            }
        }
        original(value)
    });
    descriptor.set = Some(replacement);
    descriptor
}

/// A backing slot behind a guarded accessor pair.
///
/// Owns the stored value and the intercepted descriptor around it, so a
/// caller gets the validated-property behavior without wiring descriptors by
/// hand: `set` runs the member's chain and only then writes the slot, `get`
/// reads the slot back.
pub struct GuardedField {
    descriptor: PropertyDescriptor,
}

impl GuardedField {
    /// A readable, writable field whose writes run the member's chain.
    pub fn new(registry: Arc<Registry>, owner: &str, member: &str, initial: Value) -> Self {
        let slot = Rc::new(RefCell::new(initial));
        let read = Rc::clone(&slot);
        let write = Rc::clone(&slot);
        let descriptor = PropertyDescriptor::accessor(
            Some(Box::new(move || read.borrow().clone())),
            Some(Box::new(move |value| {
                *write.borrow_mut() = value;
                Ok(())
            })),
        );
        Self {
            descriptor: guard_descriptor(registry, owner, member, descriptor),
        }
    }

    /// A getter-only field. Interception is a no-op: validators may be
    /// registered for the member but nothing ever runs them.
    pub fn read_only(registry: Arc<Registry>, owner: &str, member: &str, value: Value) -> Self {
        let descriptor = PropertyDescriptor::accessor(Some(Box::new(move || value.clone())), None);
        Self {
            descriptor: guard_descriptor(registry, owner, member, descriptor),
        }
    }

    /// Current stored value.
    pub fn get(&self) -> Value {
        match &self.descriptor.get {
            Some(get) => get(),
            None => Value::Null,
        }
    }

    /// Write a new value through the guarded setter. On a getter-only field
    /// this is a silent no-op, mirroring an un-intercepted missing setter.
    pub fn set(&mut self, value: Value) -> Result<(), ValidationError> {
        match self.descriptor.set.as_mut() {
            Some(set) => set(value),
            None => Ok(()),
        }
    }
}
