// Thu Oct 15 2026 - Alex

use crate::classes::opcodes;
use std::fmt;

/// One entry of a method body.
///
/// `Op` carries an executable opcode. The other variants are markers the
/// parser keeps in the stream (jump targets, line numbers, stack map frames)
/// and never match an opcode pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Op(u8),
    Label(u32),
    LineNumber(u32),
    Frame,
}

impl Instruction {
    pub const fn opcode(&self) -> Option<u8> {
        match self {
            Self::Op(opcode) => Some(*opcode),
            _ => None,
        }
    }

    pub const fn is_pseudo(&self) -> bool {
        !matches!(self, Self::Op(_))
    }
}

impl From<u8> for Instruction {
    fn from(opcode: u8) -> Self {
        Self::Op(opcode)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Op(opcode) => match opcodes::mnemonic(*opcode) {
                Some(name) => write!(f, "{}", name),
                None => write!(f, "0x{:02x}", opcode),
            },
            Self::Label(id) => write!(f, "L{}:", id),
            Self::LineNumber(line) => write!(f, "LINE {}", line),
            Self::Frame => write!(f, "FRAME"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pseudo_detection() {
        assert_eq!(Instruction::Op(opcodes::IRETURN).opcode(), Some(172));
        assert!(!Instruction::Op(opcodes::NOP).is_pseudo());
        assert!(Instruction::Label(0).is_pseudo());
        assert!(Instruction::LineNumber(12).is_pseudo());
        assert_eq!(Instruction::Frame.opcode(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Instruction::Op(opcodes::ICONST_0).to_string(), "ICONST_0");
        assert_eq!(Instruction::Op(0xfe).to_string(), "0xfe");
        assert_eq!(Instruction::Label(3).to_string(), "L3:");
    }
}
