// Thu Oct 15 2026 - Alex

pub mod patch;
pub mod resolver;

pub use patch::{MethodMap, PatchData};
pub use resolver::MethodResolver;
