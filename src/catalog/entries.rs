// Thu Oct 15 2026 - Alex

//! On-disk JSON shapes. These stay close to what a class dumper or a
//! hand-written signature file produces and are converted into the typed
//! model by the loaders.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassCatalog {
    pub classes: Vec<ClassEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassEntry {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<MethodEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodEntry {
    pub name: String,
    pub descriptor: String,
    #[serde(default)]
    pub access: Option<AccessEntry>,
    #[serde(default)]
    pub instructions: Vec<InstructionEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureCatalog {
    pub signatures: Vec<SignatureEntry>,
}

/// Missing or `null` fields are wildcards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureEntry {
    pub name: String,
    #[serde(default)]
    pub returns: Option<String>,
    #[serde(default)]
    pub accessors: Option<AccessEntry>,
    #[serde(default)]
    pub parameters: Option<Vec<String>>,
    #[serde(default)]
    pub opcodes: Option<Vec<OpcodeEntry>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccessEntry {
    Mask(u16),
    Names(Vec<String>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpcodeEntry {
    Code(u8),
    Mnemonic(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InstructionEntry {
    Code(u8),
    Mnemonic(String),
    Pseudo(PseudoEntry),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PseudoEntry {
    Label { id: u32 },
    Line { line: u32 },
    Frame,
}
