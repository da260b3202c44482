// Thu Oct 15 2026 - Alex

//! Coarse type categories for shape-only comparison.
//!
//! Class names do not survive obfuscation or recompilation, so every
//! reference type collapses to `AnyObject` and every array, whatever its
//! element type or dimension, to `AnyArray`. Primitives and `void` keep
//! their identity. Categories are only ever compared, never stored back
//! into a definition.

use crate::classes::{BaseType, TypeDescriptor};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    Void,
    Primitive(BaseType),
    AnyObject,
    AnyArray,
}

pub fn normalize(ty: &TypeDescriptor) -> TypeCategory {
    match ty {
        TypeDescriptor::Void => TypeCategory::Void,
        TypeDescriptor::Primitive(base) => TypeCategory::Primitive(*base),
        TypeDescriptor::Object(_) => TypeCategory::AnyObject,
        TypeDescriptor::Array(_) => TypeCategory::AnyArray,
    }
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => write!(f, "void"),
            Self::Primitive(base) => write!(f, "{}", base.keyword()),
            Self::AnyObject => write!(f, "object"),
            Self::AnyArray => write!(f, "array"),
        }
    }
}
