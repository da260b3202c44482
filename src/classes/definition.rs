// Thu Oct 15 2026 - Alex

use crate::classes::access::AccessFlags;
use crate::classes::descriptor::{parse_method_descriptor, MethodDescriptor, TypeDescriptor};
use crate::classes::error::ClassError;
use crate::classes::instruction::Instruction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDefinition {
    pub name: String,
    pub return_type: TypeDescriptor,
    pub parameters: Vec<TypeDescriptor>,
    pub access: AccessFlags,
    pub instructions: Vec<Instruction>,
}

impl MethodDefinition {
    pub fn new(name: &str, return_type: TypeDescriptor) -> Self {
        Self {
            name: name.to_string(),
            return_type,
            parameters: Vec::new(),
            access: AccessFlags::empty(),
            instructions: Vec::new(),
        }
    }

    pub fn from_descriptor(name: &str, descriptor: &str, access: AccessFlags) -> Result<Self, ClassError> {
        let MethodDescriptor { parameters, return_type } = parse_method_descriptor(descriptor)?;
        Ok(Self {
            name: name.to_string(),
            return_type,
            parameters,
            access,
            instructions: Vec::new(),
        })
    }

    pub fn with_parameter(mut self, param: TypeDescriptor) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn with_access(mut self, access: AccessFlags) -> Self {
        self.access = access;
        self
    }

    pub fn with_instructions<I>(mut self, instructions: I) -> Self
    where
        I: IntoIterator<Item = Instruction>,
    {
        self.instructions.extend(instructions);
        self
    }

    pub fn descriptor(&self) -> String {
        MethodDescriptor {
            parameters: self.parameters.clone(),
            return_type: self.return_type.clone(),
        }
        .to_string()
    }

    pub fn opcode_count(&self) -> usize {
        self.instructions.iter().filter(|insn| !insn.is_pseudo()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDefinition {
    pub name: String,
    pub methods: Vec<MethodDefinition>,
}

impl ClassDefinition {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            methods: Vec::new(),
        }
    }

    pub fn with_method(mut self, method: MethodDefinition) -> Self {
        self.methods.push(method);
        self
    }

    /// First method with the given name. Names are not unique across overloads.
    pub fn method(&self, name: &str) -> Option<&MethodDefinition> {
        self.methods.iter().find(|m| m.name == name)
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }
}
