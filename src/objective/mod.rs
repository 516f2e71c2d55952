mod factor;
mod objective;
mod params;

pub use factor::Factor;
pub use objective::OpportunityScorer;
pub use params::{ScoringParams, Thresholds, Weights};
