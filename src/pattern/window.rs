// Thu Oct 15 2026 - Alex

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Half-open range `[start, end)` of positions in the original instruction
/// sequence, pseudo-instructions included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    /// Reported where a window is required but carries no meaning.
    pub const PLACEHOLDER: Window = Window { start: 0, end: 0 };

    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Outcome of an opcode scan.
///
/// `Unscanned` is a successful comparison for a signature without an opcode
/// constraint: found, but without a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanResult {
    Found(Window),
    Unscanned,
    NotFound,
}

impl ScanResult {
    pub const fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound)
    }

    /// Only `Found` carries meaningful indices.
    pub const fn window(&self) -> Option<Window> {
        match self {
            Self::Found(window) => Some(*window),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_bounds() {
        let window = Window::new(2, 5);
        assert_eq!(window.len(), 3);
        assert_eq!(window.range(), 2..5);
        assert!(Window::PLACEHOLDER.is_empty());
    }

    #[test]
    fn test_scan_result_flags() {
        assert!(ScanResult::Found(Window::new(0, 1)).is_found());
        assert!(ScanResult::Unscanned.is_found());
        assert!(!ScanResult::NotFound.is_found());
        assert_eq!(ScanResult::Unscanned.window(), None);
        assert_eq!(ScanResult::NotFound.window(), None);
    }
}
