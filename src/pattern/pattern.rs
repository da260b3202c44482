// Thu Oct 15 2026 - Alex

use crate::classes::opcodes;
use crate::pattern::PatternError;
use std::fmt;
use std::str::FromStr;

/// Ordered opcode sequence a method body must contain contiguously,
/// ignoring pseudo-instructions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct OpcodePattern {
    opcodes: Vec<u8>,
}

impl OpcodePattern {
    pub fn new(opcodes: Vec<u8>) -> Self {
        Self { opcodes }
    }

    /// Parses whitespace or comma separated tokens. A token is a mnemonic
    /// (`ICONST_0`), a decimal opcode (`172`) or a hex opcode (`0xac`).
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        text.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(parse_token)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    pub fn len(&self) -> usize {
        self.opcodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opcodes.is_empty()
    }

    pub fn opcodes(&self) -> &[u8] {
        &self.opcodes
    }
}

fn parse_token(token: &str) -> Result<u8, PatternError> {
    let value = if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).ok()
    } else if token.chars().all(|c| c.is_ascii_digit()) {
        token.parse::<u32>().ok()
    } else {
        return opcodes::opcode(token).ok_or_else(|| PatternError::InvalidToken(token.to_string()));
    };

    let value = value.ok_or_else(|| PatternError::InvalidToken(token.to_string()))?;
    u8::try_from(value).map_err(|_| PatternError::OutOfRange(value))
}

impl From<Vec<u8>> for OpcodePattern {
    fn from(opcodes: Vec<u8>) -> Self {
        Self::new(opcodes)
    }
}

impl FromStr for OpcodePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for OpcodePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .opcodes
            .iter()
            .map(|&op| match opcodes::mnemonic(op) {
                Some(name) => name.to_string(),
                None => format!("0x{:02x}", op),
            })
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}
