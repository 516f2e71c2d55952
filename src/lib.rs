#![doc = "GolfMap public API"]
mod common;
mod dataset;
mod io;
mod objective;
mod session;
mod types;
mod view;

#[doc(inline)]
pub use dataset::{DatasetCache, PreparedDataset, columns};

#[doc(inline)]
pub use objective::{Factor, OpportunityScorer, ScoringParams, Thresholds, Weights};

#[doc(inline)]
pub use view::{AffluenceFilter, RegionStats, ScoredDataset, StateScore, ViewFilter, ViewSummary};

#[doc(inline)]
pub use session::{NormalizationScope, Session};

#[doc(inline)]
pub use types::{GeoId, GeoType, normalize_state_name, state_abbr_to_fips, state_abbr_to_name, state_name_to_abbr};
