// Thu Oct 15 2026 - Alex

pub mod error;
pub mod pattern;
pub mod scanner;
pub mod window;

pub use error::PatternError;
pub use pattern::OpcodePattern;
pub use scanner::OpcodeScanner;
pub use window::{ScanResult, Window};
