// Thu Oct 15 2026 - Alex

//! Locates methods in recompiled or obfuscated class dumps by structural
//! signature: return category, access flags, parameter categories and an
//! ordered opcode sub-pattern. Names are never consulted.

pub mod catalog;
pub mod classes;
pub mod config;
pub mod output;
pub mod pattern;
pub mod resolver;
pub mod signature;
pub mod ui;
pub mod utils;

pub use classes::{ClassDefinition, Instruction, MethodDefinition};
pub use config::Config;
pub use output::ResolutionReport;
pub use pattern::{OpcodeScanner, ScanResult, Window};
pub use resolver::{MethodMap, MethodResolver, PatchData};
pub use signature::{Signature, SignatureComparator};
