// Thu Oct 15 2026 - Alex

use crate::classes::{AccessFlags, TypeDescriptor};
use crate::pattern::OpcodePattern;
use crate::signature::Constraint;
use std::fmt;

/// Named, partial shape of a method to locate.
///
/// Each field is independently a wildcard or a concrete constraint. Types are
/// kept in full descriptor form and normalized at comparison time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    name: String,
    pub returns: Constraint<TypeDescriptor>,
    pub accessors: Constraint<AccessFlags>,
    pub parameters: Constraint<Vec<TypeDescriptor>>,
    pub opcodes: Constraint<OpcodePattern>,
}

impl Signature {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            returns: Constraint::Any,
            accessors: Constraint::Any,
            parameters: Constraint::Any,
            opcodes: Constraint::Any,
        }
    }

    pub fn with_returns(mut self, ty: TypeDescriptor) -> Self {
        self.returns = Constraint::Exactly(ty);
        self
    }

    pub fn with_accessors(mut self, flags: AccessFlags) -> Self {
        self.accessors = Constraint::Exactly(flags);
        self
    }

    pub fn with_parameters(mut self, params: Vec<TypeDescriptor>) -> Self {
        self.parameters = Constraint::Exactly(params);
        self
    }

    pub fn with_opcodes<P: Into<OpcodePattern>>(mut self, pattern: P) -> Self {
        self.opcodes = Constraint::Exactly(pattern.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_unconstrained(&self) -> bool {
        self.returns.is_any() && self.accessors.is_any() && self.parameters.is_any() && self.opcodes.is_any()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.name)?;

        match &self.accessors {
            Constraint::Exactly(flags) => write!(f, "{} ", flags)?,
            Constraint::Any => write!(f, "* ")?,
        }

        write!(f, "(")?;
        match &self.parameters {
            Constraint::Exactly(params) => {
                for param in params {
                    write!(f, "{}", param)?;
                }
            }
            Constraint::Any => write!(f, "*")?,
        }
        write!(f, ")")?;

        match &self.returns {
            Constraint::Exactly(ty) => write!(f, "{}", ty)?,
            Constraint::Any => write!(f, "*")?,
        }

        if let Constraint::Exactly(pattern) = &self.opcodes {
            write!(f, " {{{}}}", pattern)?;
        }

        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::opcodes;

    #[test]
    fn test_builder_sets_constraints() {
        let sig = Signature::new("getter")
            .with_returns(TypeDescriptor::parse("I").unwrap())
            .with_accessors(AccessFlags::PUBLIC)
            .with_opcodes(vec![opcodes::ALOAD_0, opcodes::GETFIELD]);
        assert_eq!(sig.name(), "getter");
        assert!(!sig.returns.is_any());
        assert!(sig.parameters.is_any());
        assert!(!sig.is_unconstrained());
        assert!(Signature::new("any").is_unconstrained());
    }

    #[test]
    fn test_display() {
        let sig = Signature::new("tick")
            .with_accessors(AccessFlags::PUBLIC | AccessFlags::STATIC)
            .with_parameters(vec![TypeDescriptor::parse("J").unwrap()])
            .with_opcodes(vec![opcodes::RETURN]);
        assert_eq!(sig.to_string(), "tick [public static (J)* {RETURN}]");
        assert_eq!(Signature::new("x").to_string(), "x [* (*)*]");
    }
}
