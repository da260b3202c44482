// Thu Oct 15 2026 - Alex

pub mod comparator;
pub mod constraint;
pub mod normalize;
pub mod signature;

pub use comparator::{Mismatch, SignatureComparator};
pub use constraint::Constraint;
pub use normalize::{normalize, TypeCategory};
pub use signature::Signature;
