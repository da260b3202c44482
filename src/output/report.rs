// Thu Oct 15 2026 - Alex

use crate::pattern::{OpcodeScanner, Window};
use crate::resolver::MethodMap;
use crate::signature::Signature;
use serde::{Deserialize, Serialize};

/// Owned, serializable view of one resolution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionReport {
    pub version: String,
    pub statistics: ReportStatistics,
    pub resolved: Vec<ResolvedEntry>,
    pub unresolved: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedEntry {
    pub signature: String,
    pub class: String,
    pub method: String,
    pub descriptor: String,
    pub access: String,
    pub window: Option<Window>,
    /// Instructions inside the window, pseudo-instructions included.
    pub instructions: Vec<String>,
    /// Non-overlapping occurrences of the opcode pattern in the method.
    /// More than one means the injection point is ambiguous.
    pub occurrences: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportStatistics {
    pub total_signatures: usize,
    pub resolved: usize,
    pub unresolved: usize,
    pub ambiguous: usize,
}

impl ResolutionReport {
    pub fn build(map: &MethodMap<'_>, signatures: &[Signature]) -> Self {
        let scanner = OpcodeScanner::new();

        let resolved: Vec<ResolvedEntry> = signatures
            .iter()
            .filter_map(|signature| {
                let data = map.get(signature.name())?;
                let window = data.window();
                let instructions: Vec<String> = window
                    .map(|w| data.method.instructions[w.range()].iter().map(ToString::to_string).collect())
                    .unwrap_or_default();
                let occurrences = signature
                    .opcodes
                    .value()
                    .map(|pattern| scanner.count(&data.method.instructions, pattern.opcodes()));

                Some(ResolvedEntry {
                    signature: signature.name().to_string(),
                    class: data.class.name.clone(),
                    method: data.method.name.clone(),
                    descriptor: data.method.descriptor(),
                    access: data.method.access.to_string(),
                    window,
                    instructions,
                    occurrences,
                })
            })
            .collect();

        let unresolved: Vec<String> = map.unresolved(signatures).into_iter().map(String::from).collect();

        let statistics = ReportStatistics {
            total_signatures: signatures.len(),
            resolved: resolved.len(),
            unresolved: unresolved.len(),
            ambiguous: resolved.iter().filter(|e| e.is_ambiguous()).count(),
        };

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            statistics,
            resolved,
            unresolved,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    pub fn resolution_rate(&self) -> f64 {
        if self.statistics.total_signatures == 0 {
            return 1.0;
        }
        self.statistics.resolved as f64 / self.statistics.total_signatures as f64
    }
}

impl ResolvedEntry {
    pub fn is_ambiguous(&self) -> bool {
        self.occurrences.map_or(false, |n| n > 1)
    }
}
