//! Read-side operations over a scored county table: filtering, summary
//! metrics, aggregation, ranking and export.

mod aggregate;
mod filter;
mod rank;
mod scored;
mod summary;

pub use aggregate::{RegionStats, StateScore};
pub use filter::{AffluenceFilter, ViewFilter};
pub use scored::ScoredDataset;
pub use summary::ViewSummary;
