// Thu Oct 15 2026 - Alex

use crate::classes::error::ClassError;
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Method access and property flags as stored in `method_info.access_flags`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AccessFlags: u16 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        const SYNCHRONIZED = 0x0020;
        const BRIDGE = 0x0040;
        const VARARGS = 0x0080;
        const NATIVE = 0x0100;
        const ABSTRACT = 0x0400;
        const STRICT = 0x0800;
        const SYNTHETIC = 0x1000;
    }
}

impl AccessFlags {
    /// Accepts flag names in any case, with or without the `ACC_` prefix.
    pub fn parse_keyword(keyword: &str) -> Result<Self, ClassError> {
        let upper = keyword.trim().to_ascii_uppercase();
        let name = upper.strip_prefix("ACC_").unwrap_or(&upper);
        let name = match name {
            "STRICTFP" => "STRICT",
            "VARARG" => "VARARGS",
            other => other,
        };
        Self::from_name(name).ok_or_else(|| ClassError::UnknownAccessFlag(keyword.to_string()))
    }

    pub fn parse_keywords<I, S>(keywords: I) -> Result<Self, ClassError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keywords
            .into_iter()
            .try_fold(Self::empty(), |acc, keyword| Ok(acc | Self::parse_keyword(keyword.as_ref())?))
    }

    pub fn keywords(&self) -> Vec<String> {
        self.iter_names().map(|(name, _)| name.to_lowercase()).collect()
    }
}

impl fmt::Display for AccessFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "package-private");
        }
        write!(f, "{}", self.keywords().join(" "))
    }
}
