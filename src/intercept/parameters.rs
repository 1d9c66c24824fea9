use crate::error::ValidationError;
use crate::property::MethodBody;
use crate::registry::Registry;
use crate::switch;
use crate::validation::Validator;
use serde_json::Value;
use std::sync::Arc;

/// Wrap a method body so per-parameter chains run before it executes.
pub fn guard_method(
    registry: Arc<Registry>,
    owner: &str,
    member: &str,
    body: MethodBody,
) -> GuardedMethod {
    GuardedMethod {
        registry,
        owner: owner.to_string(),
        member: member.to_string(),
        body,
    }
}

/// A method body behind per-parameter validator chains.
///
/// Each invocation reads the global switch once at entry. When enabled,
/// every position with a registered chain is validated in registration
/// order against the corresponding argument; the first failure propagates
/// and the body is never invoked. Positions without a chain pass through
/// unchecked, and an argument list shorter than the highest validated
/// position validates `null` at the missing positions rather than failing
/// on length. On success, or when the switch is disabled, the body runs
/// with the exact original arguments and its result is returned unchanged.
pub struct GuardedMethod {
    registry: Arc<Registry>,
    owner: String,
    member: String,
    body: MethodBody,
}

impl GuardedMethod {
    pub fn invoke(&self, args: &[Value]) -> Result<Value, ValidationError> {
        if switch::is_enabled() {
            let slots = self.registry.parameter_validators(&self.owner, &self.member);
            for (position, chain) in slots.iter().enumerate() {
                if chain.is_empty() {
                    continue;
                }
                let value = args.get(position).cloned().unwrap_or(Value::Null);
                for wrapper in chain {
                    wrapper.validate(&value)?;
                }
            }
        }
        Ok((self.body)(args))
    }
}
