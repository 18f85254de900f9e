//! Analyze Range Use Case

use rayon::prelude::*;

use crate::application::dto::{
    AdviceDto, AnalyzeRangeRequestDto, PolicyDto, RangeAnalysisDto,
};
use crate::domain::projection::{AnchorMode, ProjectionCalculator};
use crate::domain::quality::{PolicyTable, RangeQualityAdvisor};
use crate::domain::range::RangeBuilder;
use crate::domain::shared::{Method, Pair};
use crate::error::EngineError;

/// Use case for turning a measured range into projections and advice.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeRangeUseCase {
    advisor: RangeQualityAdvisor,
}

impl AnalyzeRangeUseCase {
    /// Create a use case scoring against `policies`.
    #[must_use]
    pub const fn new(policies: PolicyTable) -> Self {
        Self {
            advisor: RangeQualityAdvisor::new(policies),
        }
    }

    /// Execute the use case.
    ///
    /// # Errors
    ///
    /// Returns an `EngineError` if the pair, method, anchor or prices are invalid.
    pub fn execute(
        &self,
        request: &AnalyzeRangeRequestDto,
    ) -> Result<RangeAnalysisDto, EngineError> {
        // 1. Parse inputs
        let pair = Pair::parse(&request.pair)?;
        let method = Method::parse(&request.method)?;
        let primary_mode = match request.anchor.as_deref() {
            Some(anchor) => anchor.parse::<AnchorMode>()?,
            None => AnchorMode::from(method),
        };

        // 2. Validate the range
        let range = RangeBuilder::build_f64(request.high, request.low, &pair).inspect_err(|_| {
            tracing::debug!(pair = %pair, high = request.high, low = request.low, "Rejected range");
        })?;

        // 3. Project both ladders
        let primary = ProjectionCalculator::calculate(&range, primary_mode);
        let alternate = ProjectionCalculator::calculate(&range, primary_mode.alternate());

        // 4. Score
        let verdict = self.advisor.evaluate(&range, method, &pair)?;

        tracing::info!(
            pair = %pair,
            method = %method,
            anchor = %primary_mode,
            pips = %range.pips(),
            zone = %verdict.zone,
            score = verdict.score,
            "Range analyzed"
        );

        Ok(RangeAnalysisDto::build(
            &range, method, &primary, &alternate, verdict,
        )?)
    }

    /// Execute many requests in parallel. Results keep the input order.
    #[must_use]
    pub fn execute_batch(
        &self,
        requests: &[AnalyzeRangeRequestDto],
    ) -> Vec<Result<RangeAnalysisDto, EngineError>> {
        tracing::debug!(count = requests.len(), "Analyzing batch");
        requests
            .par_iter()
            .map(|request| self.execute(request))
            .collect()
    }

    /// Pair notes for a method without scoring a range.
    ///
    /// # Errors
    ///
    /// Returns an `EngineError` if the pair or method is invalid.
    pub fn advice(&self, pair: &str, method: &str) -> Result<AdviceDto, EngineError> {
        let pair = Pair::parse(pair)?;
        let method = Method::parse(method)?;
        let recommendations = self.advisor.get_pair_recommendations(&pair, method);

        tracing::debug!(pair = %pair, method = %method, count = recommendations.len(), "Pair advice");

        Ok(AdviceDto {
            pair: pair.to_string(),
            method: method.to_string(),
            recommendations,
        })
    }

    /// Active policy table, in method order.
    #[must_use]
    pub fn policies(&self) -> Vec<PolicyDto> {
        self.advisor.policies().iter().map(PolicyDto::from).collect()
    }
}
