use crate::property::PropertyDescriptor;
use std::fmt;

/// The kind of site a validation decorator was applied to.
///
/// Only [`Accessor`] and [`Parameter`] sites can carry validators; the
/// decorator factory rejects every other kind at definition time.
///
/// [`Accessor`]: ContextKind::Accessor
/// [`Parameter`]: ContextKind::Parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind {
    /// The owning type itself, no member named.
    Class,
    /// A plain data property without a descriptor.
    Property,
    /// A property with a get/set descriptor.
    Accessor,
    /// A member whose descriptor carries a callable body.
    Method,
    /// One positional parameter of a method.
    Parameter,
    /// None of the known shapes matched.
    Unknown,
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContextKind::Class => "class",
            ContextKind::Property => "property",
            ContextKind::Accessor => "accessor",
            ContextKind::Method => "method",
            ContextKind::Parameter => "parameter",
            ContextKind::Unknown => "unknown context",
        };
        f.write_str(name)
    }
}

/// The varying third value available at a decoration site.
pub enum SiteArg<'a> {
    /// Accessor and method sites carry a descriptor object.
    Descriptor(&'a PropertyDescriptor),
    /// Parameter sites carry the numeric parameter position.
    Index(usize),
}

/// The inputs available where a decoration is applied: a target owner, an
/// optional member name, and an optional third value whose shape varies.
pub struct Site<'a> {
    pub owner: &'a str,
    pub member: Option<&'a str>,
    pub arg: Option<SiteArg<'a>>,
}

impl<'a> Site<'a> {
    /// A decoration applied to the owning type itself.
    pub fn class(owner: &'a str) -> Self {
        Self {
            owner,
            member: None,
            arg: None,
        }
    }

    /// A decoration applied to a plain property, no descriptor present.
    pub fn property(owner: &'a str, member: &'a str) -> Self {
        Self {
            owner,
            member: Some(member),
            arg: None,
        }
    }

    /// A decoration applied to a member with a descriptor (accessor or
    /// method, depending on the descriptor's shape).
    pub fn member(owner: &'a str, member: &'a str, descriptor: &'a PropertyDescriptor) -> Self {
        Self {
            owner,
            member: Some(member),
            arg: Some(SiteArg::Descriptor(descriptor)),
        }
    }

    /// A decoration applied to one parameter position of a method.
    pub fn parameter(owner: &'a str, member: &'a str, index: usize) -> Self {
        Self {
            owner,
            member: Some(member),
            arg: Some(SiteArg::Index(index)),
        }
    }

    /// `Owner::member` rendering for diagnostics.
    pub(crate) fn target(&self) -> String {
        match self.member {
            Some(member) => format!("{}::{}", self.owner, member),
            None => self.owner.to_string(),
        }
    }
}

/// Decide what kind of site a decoration was applied to.
///
/// Pure and total: every input maps to exactly one [`ContextKind`], with
/// [`ContextKind::Unknown`] as the sentinel callers treat as an error. Shape
/// rules: no member and no third value is the class itself; a member without
/// a third value is a plain property; a numeric position is a parameter; a
/// descriptor is an accessor when it has a get or set side, a method when it
/// carries a callable body.
pub fn classify(site: &Site<'_>) -> ContextKind {
    match (site.member, &site.arg) {
        (None, None) => ContextKind::Class,
        (Some(_), None) => ContextKind::Property,
        (Some(_), Some(SiteArg::Index(_))) => ContextKind::Parameter,
        (Some(_), Some(SiteArg::Descriptor(descriptor))) => {
            if descriptor.get.is_some() || descriptor.set.is_some() {
                ContextKind::Accessor
            } else if descriptor.has_body() {
                ContextKind::Method
            } else {
                ContextKind::Unknown
            }
        }
        (None, Some(_)) => ContextKind::Unknown,
    }
}
