//! # Propguard
//!
//! Ordered validation chains for property setters and call parameters.
//! Validators are registered out of band against `(owner, member)` keys and
//! run by interceptors before the real setter or body executes, so the
//! guarded code never contains validation logic itself.
//!
//! ## Modules
//!
//! - [`context`] - Classification of the site a decorator is applied to
//! - [`decorator`] - Factory turning a predicate and message template into a
//!   reusable decorator
//! - [`error`] - Validation, definition, and configuration error types
//! - [`intercept`] - Replacement setters and call wrappers
//! - [`property`] - Descriptor model for accessors and methods
//! - [`registry`] - Out-of-band store of ordered validator chains
//! - [`switch`] - Process-wide enable/disable gate
//! - [`validation`] - The `Validator` trait and predicate wrapper
//!
//! ## Usage
//!
//! ```no_run
//! use propguard::context::Site;
//! use propguard::decorator::generate_validation_decorator;
//! use propguard::intercept::accessor::GuardedField;
//! use propguard::property::PropertyDescriptor;
//! use propguard::registry::Registry;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Definition phase: attach a rule to the Rect::width accessor.
//! let is_positive_int = generate_validation_decorator(
//!     |v| v.as_i64().is_some_and(|n| n > 0),
//!     "%1 is not a positive integer",
//! )?;
//! let width_shape =
//!     PropertyDescriptor::accessor(Some(Box::new(|| json!(0))), Some(Box::new(|_| Ok(()))));
//! is_positive_int.apply(&Site::member("Rect", "width", &width_shape))?;
//!
//! // Call phase: writes run the chain before the slot is touched.
//! let mut width = GuardedField::new(Registry::global(), "Rect", "width", json!(1));
//! width.set(json!(33))?;
//! assert!(width.set(json!(-2)).is_err());
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod decorator;
pub mod error;
pub mod intercept;
pub mod property;
pub mod registry;
pub mod switch;
pub mod validation;

pub use context::{ContextKind, Site, SiteArg, classify};
pub use decorator::{ValidationDecorator, generate_validation_decorator};
pub use error::{ConfigError, DefinitionError, ValidationError};
pub use intercept::accessor::{GuardedField, guard_descriptor};
pub use intercept::parameters::{GuardedMethod, guard_method};
pub use property::{DescriptorValue, Getter, MethodBody, PropertyDescriptor, Setter};
pub use registry::{MemberKey, Registry};
pub use validation::{Predicate, Validator, ValidatorWrapper};
