use crate::error::ValidationError;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Core validation trait that all validators must implement.
///
/// This trait provides a consistent interface for validating data across
/// the engine. Validators can be composed and chained together; the
/// interceptors evaluate chains of them in registration order.
///
/// # Type Parameters
///
/// * `T` - The type of data being validated (can be unsized like `str`)
///
/// # Examples
///
/// ```
/// use propguard::validation::Validator;
///
/// struct NonEmpty;
/// impl Validator<str> for NonEmpty {
///     type Error = String;
///
///     fn validate(&self, input: &str) -> Result<(), Self::Error> {
///         if input.is_empty() {
///             Err("Input cannot be empty".to_string())
///         } else {
///             Ok(())
///         }
///     }
/// }
/// ```
pub trait Validator<T: ?Sized> {
    type Error;

    /// Validate the input and return Ok(()) if valid, or Err with validation error
    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}

/// Boolean test deciding whether a value is valid.
///
/// Concrete predicate semantics (ranges, formats, ...) belong to the
/// predicate provider; option binding happens before the predicate reaches
/// the engine, so the engine only ever sees the `(value) -> bool` shape.
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Literal token in a message template replaced by the rejected value.
pub const VALUE_PLACEHOLDER: &str = "%1";

/// Diagnostic rendering of a value for rejection messages.
///
/// Compact JSON, so strings keep their quotes and `null` renders as `null`.
/// Valid for any primitive or composite input.
pub fn render_value(value: &Value) -> String {
    value.to_string()
}

/// A predicate paired with its message template.
///
/// Produced once per decorator application and stored in the registry.
/// Stateless beyond the captured predicate and template; cloning shares the
/// predicate. The predicate is never invoked at construction time.
#[derive(Clone)]
pub struct ValidatorWrapper {
    predicate: Predicate,
    template: String,
}

impl ValidatorWrapper {
    pub(crate) fn new(predicate: Predicate, template: String) -> Self {
        Self {
            predicate,
            template,
        }
    }

    /// The raw message template, placeholder included.
    pub fn template(&self) -> &str {
        &self.template
    }
}

impl Validator<Value> for ValidatorWrapper {
    type Error = ValidationError;

    fn validate(&self, input: &Value) -> Result<(), Self::Error> {
        if (self.predicate)(input) {
            Ok(())
        } else {
            let message = self
                .template
                .replace(VALUE_PLACEHOLDER, &render_value(input));
            Err(ValidationError::rejected(message))
        }
    }
}

impl fmt::Debug for ValidatorWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorWrapper")
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}
