// Thu Oct 15 2026 - Alex

pub mod entries;
pub mod error;

pub use entries::{ClassCatalog, SignatureCatalog};
pub use error::CatalogError;

use crate::classes::{opcodes, AccessFlags, ClassDefinition, ClassError, Instruction, MethodDefinition, TypeDescriptor};
use crate::pattern::{OpcodePattern, PatternError};
use crate::signature::{Constraint, Signature};
use entries::{AccessEntry, ClassEntry, InstructionEntry, MethodEntry, OpcodeEntry, PseudoEntry, SignatureEntry};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub fn load_classes(path: &Path) -> Result<Vec<ClassDefinition>, CatalogError> {
    let text = fs::read_to_string(path)?;
    let classes = parse_classes(&text)?;
    log::debug!("Loaded {} classes from {}", classes.len(), path.display());
    Ok(classes)
}

pub fn load_signatures(path: &Path) -> Result<Vec<Signature>, CatalogError> {
    let text = fs::read_to_string(path)?;
    let signatures = parse_signatures(&text)?;
    log::debug!("Loaded {} signatures from {}", signatures.len(), path.display());
    Ok(signatures)
}

pub fn parse_classes(json: &str) -> Result<Vec<ClassDefinition>, CatalogError> {
    let catalog: ClassCatalog = serde_json::from_str(json)?;
    catalog.classes.into_iter().map(convert_class).collect()
}

/// Signature names must be unique within a catalog.
pub fn parse_signatures(json: &str) -> Result<Vec<Signature>, CatalogError> {
    let catalog: SignatureCatalog = serde_json::from_str(json)?;
    let mut seen = HashSet::new();

    catalog
        .signatures
        .into_iter()
        .map(|entry| {
            if entry.name.trim().is_empty() {
                return Err(CatalogError::EmptySignatureName);
            }
            if !seen.insert(entry.name.clone()) {
                return Err(CatalogError::DuplicateSignature(entry.name));
            }
            convert_signature(entry)
        })
        .collect()
}

fn convert_class(entry: ClassEntry) -> Result<ClassDefinition, CatalogError> {
    let methods = entry
        .methods
        .into_iter()
        .map(|method| convert_method(&entry.name, method))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ClassDefinition { name: entry.name, methods })
}

fn convert_method(owner: &str, entry: MethodEntry) -> Result<MethodDefinition, CatalogError> {
    let context = format!("{}.{}{}", owner, entry.name, entry.descriptor);
    let class_error = |source: ClassError| CatalogError::Class {
        context: context.clone(),
        source,
    };

    let access = match entry.access {
        Some(access) => convert_access(access).map_err(class_error)?,
        None => AccessFlags::empty(),
    };

    let instructions = entry
        .instructions
        .into_iter()
        .map(convert_instruction)
        .collect::<Result<Vec<_>, _>>()
        .map_err(class_error)?;

    Ok(MethodDefinition::from_descriptor(&entry.name, &entry.descriptor, access)
        .map_err(class_error)?
        .with_instructions(instructions))
}

fn convert_signature(entry: SignatureEntry) -> Result<Signature, CatalogError> {
    let class_error = |source: ClassError| CatalogError::Class {
        context: format!("signature {}", entry.name),
        source,
    };

    let mut signature = Signature::new(&entry.name);

    if let Some(returns) = &entry.returns {
        signature.returns = Constraint::Exactly(TypeDescriptor::parse(returns).map_err(class_error)?);
    }

    if let Some(accessors) = entry.accessors.clone() {
        signature.accessors = Constraint::Exactly(convert_access(accessors).map_err(class_error)?);
    }

    if let Some(params) = &entry.parameters {
        let params = params
            .iter()
            .map(|p| TypeDescriptor::parse(p))
            .collect::<Result<Vec<_>, _>>()
            .map_err(class_error)?;
        signature.parameters = Constraint::Exactly(params);
    }

    if let Some(codes) = &entry.opcodes {
        let codes = codes
            .iter()
            .map(convert_opcode)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| CatalogError::Pattern {
                context: format!("signature {}", entry.name),
                source,
            })?;
        if codes.is_empty() {
            log::warn!("Signature {} has an empty opcode pattern, it matches any body", entry.name);
        }
        signature.opcodes = Constraint::Exactly(OpcodePattern::new(codes));
    }

    if signature.is_unconstrained() {
        log::warn!("Signature {} has no constraints, it matches the first method scanned", entry.name);
    }

    Ok(signature)
}

fn convert_access(entry: AccessEntry) -> Result<AccessFlags, ClassError> {
    match entry {
        AccessEntry::Mask(bits) => Ok(AccessFlags::from_bits_retain(bits)),
        AccessEntry::Names(names) => AccessFlags::parse_keywords(names),
    }
}

fn convert_opcode(entry: &OpcodeEntry) -> Result<u8, PatternError> {
    match entry {
        OpcodeEntry::Code(code) => Ok(*code),
        OpcodeEntry::Mnemonic(name) => opcodes::opcode(name).ok_or_else(|| PatternError::InvalidToken(name.clone())),
    }
}

fn convert_instruction(entry: InstructionEntry) -> Result<Instruction, ClassError> {
    match entry {
        InstructionEntry::Code(code) => Ok(Instruction::Op(code)),
        InstructionEntry::Mnemonic(name) => opcodes::opcode(&name)
            .map(Instruction::Op)
            .ok_or(ClassError::UnknownOpcode(name)),
        InstructionEntry::Pseudo(PseudoEntry::Label { id }) => Ok(Instruction::Label(id)),
        InstructionEntry::Pseudo(PseudoEntry::Line { line }) => Ok(Instruction::LineNumber(line)),
        InstructionEntry::Pseudo(PseudoEntry::Frame) => Ok(Instruction::Frame),
    }
}
