// Thu Oct 15 2026 - Alex

use crate::classes::MethodDefinition;
use crate::pattern::{OpcodeScanner, ScanResult};
use crate::signature::normalize::{normalize, TypeCategory};
use crate::signature::{Constraint, Signature};
use thiserror::Error;

/// Why a method was rejected by a signature. Not a failure of the
/// comparison itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    #[error("return type is {actual}, expected {expected}")]
    ReturnType { expected: TypeCategory, actual: TypeCategory },
    #[error("access flags are 0x{actual:04x}, expected 0x{expected:04x}")]
    Access { expected: u16, actual: u16 },
    #[error("takes {actual} parameters, expected {expected}")]
    ParameterCount { expected: usize, actual: usize },
    #[error("parameter {index} is {actual}, expected {expected}")]
    Parameter { index: usize, expected: TypeCategory, actual: TypeCategory },
    #[error("opcode pattern of {length} opcodes not present")]
    OpcodePattern { length: usize },
}

/// Applies a signature's constraints to a method.
///
/// Checks run cheapest first: return category, access mask, parameter
/// categories, then the opcode scan. Stateless, so one instance can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureComparator {
    scanner: OpcodeScanner,
}

impl SignatureComparator {
    pub const fn new() -> Self {
        Self {
            scanner: OpcodeScanner::new(),
        }
    }

    /// On success the result is `Found` with the matched window, or
    /// `Unscanned` when the signature has no opcode constraint.
    pub fn compare(&self, method: &MethodDefinition, signature: &Signature) -> Result<ScanResult, Mismatch> {
        if let Constraint::Exactly(expected) = &signature.returns {
            let expected = normalize(expected);
            let actual = normalize(&method.return_type);
            if expected != actual {
                return Err(Mismatch::ReturnType { expected, actual });
            }
        }

        if let Constraint::Exactly(expected) = &signature.accessors {
            if *expected != method.access {
                return Err(Mismatch::Access {
                    expected: expected.bits(),
                    actual: method.access.bits(),
                });
            }
        }

        if let Constraint::Exactly(expected) = &signature.parameters {
            if expected.len() != method.parameters.len() {
                return Err(Mismatch::ParameterCount {
                    expected: expected.len(),
                    actual: method.parameters.len(),
                });
            }
            for (index, (want, have)) in expected.iter().zip(&method.parameters).enumerate() {
                let (expected, actual) = (normalize(want), normalize(have));
                if expected != actual {
                    return Err(Mismatch::Parameter { index, expected, actual });
                }
            }
        }

        match &signature.opcodes {
            Constraint::Exactly(pattern) => match self.scanner.scan(&method.instructions, pattern.opcodes()) {
                ScanResult::NotFound => Err(Mismatch::OpcodePattern { length: pattern.len() }),
                found => Ok(found),
            },
            Constraint::Any => Ok(ScanResult::Unscanned),
        }
    }

    pub fn matches(&self, method: &MethodDefinition, signature: &Signature) -> bool {
        self.compare(method, signature).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::opcodes::*;
    use crate::classes::{AccessFlags, Instruction, TypeDescriptor};
    use crate::pattern::Window;

    fn ty(desc: &str) -> TypeDescriptor {
        TypeDescriptor::parse(desc).unwrap()
    }

    fn zero_getter() -> MethodDefinition {
        MethodDefinition::new("a", ty("I"))
            .with_access(AccessFlags::PUBLIC | AccessFlags::STATIC)
            .with_instructions([
                Instruction::Label(0),
                Instruction::Op(ICONST_0),
                Instruction::Label(1),
                Instruction::Op(IRETURN),
            ])
    }

    #[test]
    fn test_full_signature_matches() {
        let sig = Signature::new("zero")
            .with_returns(ty("I"))
            .with_accessors(AccessFlags::PUBLIC | AccessFlags::STATIC)
            .with_parameters(Vec::new())
            .with_opcodes(vec![ICONST_0, IRETURN]);
        let result = SignatureComparator::new().compare(&zero_getter(), &sig);
        assert_eq!(result, Ok(ScanResult::Found(Window::new(1, 4))));
    }

    #[test]
    fn test_unconstrained_matches_without_window() {
        let result = SignatureComparator::new().compare(&zero_getter(), &Signature::new("any"));
        assert_eq!(result, Ok(ScanResult::Unscanned));
    }

    #[test]
    fn test_return_category_mismatch() {
        let sig = Signature::new("s").with_returns(ty("Ljava/lang/String;"));
        let result = SignatureComparator::new().compare(&zero_getter(), &sig);
        assert_eq!(
            result,
            Err(Mismatch::ReturnType {
                expected: TypeCategory::AnyObject,
                actual: TypeCategory::Primitive(crate::classes::BaseType::Int),
            })
        );
    }

    #[test]
    fn test_access_requires_exact_mask() {
        let sig = Signature::new("s").with_accessors(AccessFlags::PUBLIC);
        let result = SignatureComparator::new().compare(&zero_getter(), &sig);
        assert_eq!(result, Err(Mismatch::Access { expected: 0x0001, actual: 0x0009 }));
    }

    #[test]
    fn test_parameters_compare_by_category() {
        let method = MethodDefinition::from_descriptor("m", "(Lx/Y;[[IJ)V", AccessFlags::empty()).unwrap();
        let comparator = SignatureComparator::new();

        let loose = Signature::new("s").with_parameters(vec![ty("Ljava/lang/Object;"), ty("[B"), ty("J")]);
        assert!(comparator.matches(&method, &loose));

        let wrong_count = Signature::new("s").with_parameters(vec![ty("Ljava/lang/Object;")]);
        assert_eq!(
            comparator.compare(&method, &wrong_count),
            Err(Mismatch::ParameterCount { expected: 1, actual: 3 })
        );

        let wrong_kind = Signature::new("s").with_parameters(vec![ty("La;"), ty("[B"), ty("I")]);
        assert!(matches!(
            comparator.compare(&method, &wrong_kind),
            Err(Mismatch::Parameter { index: 2, .. })
        ));
    }

    #[test]
    fn test_cheap_checks_run_before_scan() {
        let sig = Signature::new("s")
            .with_returns(ty("V"))
            .with_opcodes(vec![NOP]);
        let result = SignatureComparator::new().compare(&zero_getter(), &sig);
        assert!(matches!(result, Err(Mismatch::ReturnType { .. })));
    }

    #[test]
    fn test_missing_pattern_rejects() {
        let sig = Signature::new("s").with_opcodes(vec![ICONST_1, IRETURN]);
        let result = SignatureComparator::new().compare(&zero_getter(), &sig);
        assert_eq!(result, Err(Mismatch::OpcodePattern { length: 2 }));
    }
}
