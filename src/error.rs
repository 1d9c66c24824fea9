use crate::context::ContextKind;
use thiserror::Error;

/// Call-time rejection of a value by a validator chain.
///
/// This is expected, caller-recoverable control flow: the intercepted setter
/// or call raises it to its immediate caller and the guarded body is never
/// invoked. The message is the validator's template with the `%1` placeholder
/// replaced by a diagnostic rendering of the rejected value.
///
/// # Examples
///
/// ```no_run
/// use propguard::error::ValidationError;
///
/// fn apply_width(set: &mut dyn FnMut(serde_json::Value) -> Result<(), ValidationError>) {
///     match set(serde_json::json!(-3)) {
///         Ok(()) => println!("width updated"),
///         Err(e) => eprintln!("rejected: {e}"),
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub(crate) fn rejected(message: String) -> Self {
        Self { message }
    }

    /// The fully-rendered rejection message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Definition-time failure: a validation decorator was applied to a site that
/// cannot carry validators.
///
/// This is a programmer mistake, never recoverable at runtime. It surfaces
/// while the owning type is being defined and must prevent the type from
/// being used; it is never deferred to first use.
///
/// # Error Categories
///
/// - [`Unsupported`] - the site was recognized (class, plain property,
///   method) but validators cannot attach there
/// - [`Unrecognized`] - the site's shape matched no known context
///
/// [`Unsupported`]: DefinitionError::Unsupported
/// [`Unrecognized`]: DefinitionError::Unrecognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// Validators only attach to accessors and parameters.
    #[error("validators cannot be attached to {kind} `{target}`")]
    Unsupported { kind: ContextKind, target: String },

    /// The decoration site matched none of the known context shapes.
    #[error("unrecognized decoration context for `{target}`")]
    Unrecognized { target: String },
}

/// Decoration-time failure: the decorator factory received statically invalid
/// configuration, independent of any runtime value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A validator's message template must not be empty.
    #[error("validator message template is empty")]
    EmptyTemplate,
}
