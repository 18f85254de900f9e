//! Quality Domain Services

mod pair_notes;
mod range_quality_advisor;
mod scoring;

pub use pair_notes::pair_recommendations;
pub use range_quality_advisor::RangeQualityAdvisor;
pub use scoring::score_pips;
