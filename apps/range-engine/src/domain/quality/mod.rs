//! Quality Bounded Context
//!
//! Scores a measured range against the method's pip policy and assembles
//! plain-language advice, including per-pair notes.
//!
//! # Zones
//!
//! | Zone | Pip count | Score |
//! |------|-----------|-------|
//! | Optimal | inside the method's band (inclusive) | 70-100 |
//! | Caution | outside the band, not above the invalidation threshold | 40-69 |
//! | Invalid | above the invalidation threshold | 0-39 |

pub mod services;
pub mod value_objects;

pub use services::{RangeQualityAdvisor, pair_recommendations, score_pips};
pub use value_objects::{MethodPolicy, PolicyTable, QualityVerdict, RangeZone, SessionWindow};
