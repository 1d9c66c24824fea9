use crate::context::{ContextKind, Site, SiteArg, classify};
use crate::error::{ConfigError, DefinitionError};
use crate::registry::Registry;
use crate::validation::{Predicate, VALUE_PLACEHOLDER, ValidatorWrapper};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Build a validation decorator from a predicate and a message template.
///
/// The template's `%1` placeholder is replaced by the rejected value when a
/// validation fails. Statically invalid configuration fails here, at
/// decoration time; the predicate itself is never invoked by the factory or
/// by registration.
///
/// # Errors
///
/// [`ConfigError::EmptyTemplate`] when the template is empty. A template
/// without the placeholder is accepted but logged, since every rejection it
/// produces will carry the same message.
pub fn generate_validation_decorator(
    predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    template: impl Into<String>,
) -> Result<ValidationDecorator, ConfigError> {
    let template = template.into();
    if template.is_empty() {
        return Err(ConfigError::EmptyTemplate);
    }
    if !template.contains(VALUE_PLACEHOLDER) {
        log::warn!("Validator template `{template}` has no `{VALUE_PLACEHOLDER}` placeholder");
    }
    Ok(ValidationDecorator {
        predicate: Arc::new(predicate),
        template,
        registry: Registry::global(),
    })
}

/// A reusable annotation: applying it to a site registers one validator.
///
/// One decorator can be applied to many sites; each application appends a
/// fresh [`ValidatorWrapper`] sharing the decorator's predicate. Only
/// accessor and parameter sites are supported: applying to a class, plain
/// property, or method is a definition-time error, never deferred to first
/// use.
pub struct ValidationDecorator {
    predicate: Predicate,
    template: String,
    registry: Arc<Registry>,
}

impl fmt::Debug for ValidationDecorator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationDecorator")
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}

impl ValidationDecorator {
    /// Redirect registration to a specific registry instead of the
    /// process-wide one.
    pub fn with_registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = registry;
        self
    }

    /// Classify the site and register a validator for it.
    pub fn apply(&self, site: &Site<'_>) -> Result<(), DefinitionError> {
        let kind = classify(site);
        match kind {
            ContextKind::Accessor => {
                let Some(member) = site.member else {
                    return Err(DefinitionError::Unrecognized {
                        target: site.target(),
                    });
                };
                self.registry.register_accessor_validator(
                    site.owner,
                    member,
                    self.wrapper(),
                );
                Ok(())
            }
            ContextKind::Parameter => {
                let (Some(member), Some(SiteArg::Index(index))) = (site.member, &site.arg) else {
                    return Err(DefinitionError::Unrecognized {
                        target: site.target(),
                    });
                };
                self.registry
                    .register_parameter_validator(site.owner, member, *index, self.wrapper());
                Ok(())
            }
            ContextKind::Class | ContextKind::Property | ContextKind::Method => {
                Err(DefinitionError::Unsupported {
                    kind,
                    target: site.target(),
                })
            }
            ContextKind::Unknown => Err(DefinitionError::Unrecognized {
                target: site.target(),
            }),
        }
    }

    fn wrapper(&self) -> ValidatorWrapper {
        ValidatorWrapper::new(Arc::clone(&self.predicate), self.template.clone())
    }
}
