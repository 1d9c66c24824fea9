use crate::validation::ValidatorWrapper;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

static GLOBAL_REGISTRY: Lazy<Arc<Registry>> = Lazy::new(|| Arc::new(Registry::new()));

/// Identity of one accessor's chain: `(owning type, member name)`.
///
/// Stable for the lifetime of the owning type; parameter chains reuse the
/// same identity plus a numeric position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberKey {
    owner: String,
    member: String,
}

impl MemberKey {
    pub fn new(owner: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            member: member.into(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn member(&self) -> &str {
        &self.member
    }
}

/// Out-of-band store of ordered validator chains.
///
/// Two keyed mappings: one chain per accessor, and one position-indexed
/// array of chains per method. Entries are created during the definition
/// phase and persist for the life of the process; nothing is ever removed.
/// Registration always appends, so chain order equals registration order.
///
/// One process-wide instance lives behind [`Registry::global`]; independent
/// instances can be constructed for isolated use. Interior mutability is
/// `Mutex`-disciplined, so definition from multiple threads is safe, though
/// the intended lifecycle is define-then-use.
#[derive(Debug, Default)]
pub struct Registry {
    accessors: Mutex<HashMap<MemberKey, Vec<ValidatorWrapper>>>,
    parameters: Mutex<HashMap<MemberKey, Vec<Vec<ValidatorWrapper>>>>,
}

fn relock<'a, T>(
    result: Result<MutexGuard<'a, T>, PoisonError<MutexGuard<'a, T>>>,
) -> MutexGuard<'a, T> {
    result.unwrap_or_else(PoisonError::into_inner)
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry every decorator registers into by default.
    pub fn global() -> Arc<Registry> {
        Arc::clone(&GLOBAL_REGISTRY)
    }

    /// Append a validator to the accessor chain for `(owner, member)`,
    /// creating the chain if absent.
    pub fn register_accessor_validator(
        &self,
        owner: &str,
        member: &str,
        wrapper: ValidatorWrapper,
    ) {
        let key = MemberKey::new(owner, member);
        log::debug!(
            "Registering accessor validator on {}::{} ({})",
            owner,
            member,
            wrapper.template()
        );
        relock(self.accessors.lock())
            .entry(key)
            .or_default()
            .push(wrapper);
    }

    /// The ordered accessor chain for `(owner, member)`, possibly empty.
    pub fn accessor_validators(&self, owner: &str, member: &str) -> Vec<ValidatorWrapper> {
        let key = MemberKey::new(owner, member);
        relock(self.accessors.lock())
            .get(&key)
            .cloned()
            .unwrap_or_default()
    }

    /// Append a validator to the chain at parameter position `index` within
    /// `(owner, member)`, growing the slot array as needed.
    pub fn register_parameter_validator(
        &self,
        owner: &str,
        member: &str,
        index: usize,
        wrapper: ValidatorWrapper,
    ) {
        let key = MemberKey::new(owner, member);
        log::debug!(
            "Registering parameter validator on {}::{} position {} ({})",
            owner,
            member,
            index,
            wrapper.template()
        );
        let mut parameters = relock(self.parameters.lock());
        let slots = parameters.entry(key).or_default();
        if slots.len() <= index {
            slots.resize_with(index + 1, Vec::new);
        }
        slots[index].push(wrapper);
    }

    /// The position-indexed chains for `(owner, member)`; unused positions
    /// are empty, and a member with no registrations yields no slots.
    pub fn parameter_validators(&self, owner: &str, member: &str) -> Vec<Vec<ValidatorWrapper>> {
        let key = MemberKey::new(owner, member);
        relock(self.parameters.lock())
            .get(&key)
            .cloned()
            .unwrap_or_default()
    }

    /// Whether any chain is registered anywhere. Used by tests asserting
    /// that toggling the switch leaves the registry intact.
    pub fn is_empty(&self) -> bool {
        relock(self.accessors.lock()).is_empty() && relock(self.parameters.lock()).is_empty()
    }
}
