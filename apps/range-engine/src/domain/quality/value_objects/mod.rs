//! Quality Value Objects

mod method_policy;
mod quality_verdict;
mod session_window;

pub use method_policy::{MethodPolicy, PolicyTable};
pub use quality_verdict::{QualityVerdict, RangeZone};
pub use session_window::SessionWindow;
