// Thu Oct 15 2026 - Alex

pub mod json;
pub mod report;
pub mod summary;

pub use json::{JsonError, JsonSerializer};
pub use report::{ReportStatistics, ResolutionReport, ResolvedEntry};
pub use summary::SummaryPrinter;
