use crate::error::ValidationError;
use serde_json::Value;
use std::fmt;

/// Read side of an accessor.
pub type Getter = Box<dyn Fn() -> Value>;

/// Write side of an accessor.
///
/// Un-intercepted setters always return `Ok`; interception is what makes the
/// write path fallible.
pub type Setter = Box<dyn FnMut(Value) -> Result<(), ValidationError>>;

/// Callable body of a method site.
pub type MethodBody = Box<dyn Fn(&[Value]) -> Value>;

/// Payload carried by a descriptor that is not an accessor pair.
pub enum DescriptorValue {
    /// A plain data value.
    Data(Value),
    /// A callable body, marking the descriptor as a method site.
    Body(MethodBody),
}

/// Shape of the member a decoration was applied to.
///
/// Mirrors the host-level property descriptor: accessor sites carry a
/// get/set pair, method sites carry a callable body, and data sites carry a
/// plain value. The classifier only inspects which parts are present.
#[derive(Default)]
pub struct PropertyDescriptor {
    pub get: Option<Getter>,
    pub set: Option<Setter>,
    pub value: Option<DescriptorValue>,
}

impl PropertyDescriptor {
    /// Descriptor for an accessor pair; either side may be absent.
    pub fn accessor(get: Option<Getter>, set: Option<Setter>) -> Self {
        Self {
            get,
            set,
            value: None,
        }
    }

    /// Descriptor for a method with a callable body.
    pub fn method(body: MethodBody) -> Self {
        Self {
            get: None,
            set: None,
            value: Some(DescriptorValue::Body(body)),
        }
    }

    /// Descriptor for a plain data member.
    pub fn data(value: Value) -> Self {
        Self {
            get: None,
            set: None,
            value: Some(DescriptorValue::Data(value)),
        }
    }

    /// Whether the descriptor carries a callable body.
    pub fn has_body(&self) -> bool {
        matches!(self.value, Some(DescriptorValue::Body(_)))
    }
}

impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("get", &self.get.is_some())
            .field("set", &self.set.is_some())
            .field(
                "value",
                &self.value.as_ref().map(|v| match v {
                    DescriptorValue::Data(_) => "data",
                    DescriptorValue::Body(_) => "body",
                }),
            )
            .finish()
    }
}
