// Thu Oct 15 2026 - Alex

pub mod access;
pub mod definition;
pub mod descriptor;
pub mod error;
pub mod instruction;
pub mod opcodes;

pub use access::AccessFlags;
pub use definition::{ClassDefinition, MethodDefinition};
pub use descriptor::{parse_method_descriptor, BaseType, MethodDescriptor, TypeDescriptor};
pub use error::ClassError;
pub use instruction::Instruction;
