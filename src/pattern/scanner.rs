// Thu Oct 15 2026 - Alex

use crate::classes::Instruction;
use crate::pattern::{ScanResult, Window};

/// Finds the first contiguous run of opcodes equal to a pattern, stepping
/// over pseudo-instructions.
///
/// Candidate windows start only on opcode-bearing positions, so a marker in
/// front of the first matched opcode is never part of the window. Markers
/// between matched opcodes are inside it, markers after the last one are not.
/// Trying every position instead, markers included, finds the same matches;
/// trimming their leading markers gives exactly these windows.
/// Worst case is `O(n * m)`, fine for method bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpcodeScanner;

impl OpcodeScanner {
    pub const fn new() -> Self {
        Self
    }

    /// An empty pattern always matches with an empty window at 0.
    pub fn scan(&self, instructions: &[Instruction], pattern: &[u8]) -> ScanResult {
        if pattern.is_empty() {
            return ScanResult::Found(Window::PLACEHOLDER);
        }

        for (start, insn) in instructions.iter().enumerate() {
            if insn.is_pseudo() {
                continue;
            }
            if let Some(end) = Self::match_from(instructions, start, pattern) {
                return ScanResult::Found(Window::new(start, end));
            }
        }

        ScanResult::NotFound
    }

    /// Returns the position after the last consumed opcode on success.
    fn match_from(instructions: &[Instruction], start: usize, pattern: &[u8]) -> Option<usize> {
        let mut offset = 0;

        for (index, insn) in instructions.iter().enumerate().skip(start) {
            let Some(opcode) = insn.opcode() else {
                continue;
            };
            if opcode != pattern[offset] {
                return None;
            }
            offset += 1;
            if offset == pattern.len() {
                return Some(index + 1);
            }
        }

        None
    }

    /// Counts non-overlapping occurrences, used by reports to flag patterns
    /// that are ambiguous inside a single method.
    pub fn count(&self, instructions: &[Instruction], pattern: &[u8]) -> usize {
        if pattern.is_empty() {
            return 0;
        }

        let mut count = 0;
        let mut start = 0;
        while start < instructions.len() {
            match self.scan(&instructions[start..], pattern) {
                ScanResult::Found(window) => {
                    count += 1;
                    start += window.end;
                }
                _ => break,
            }
        }
        count
    }
}
