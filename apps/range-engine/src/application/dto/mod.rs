//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for API boundaries and use case inputs/outputs. Prices
//! are carried as display strings at the pair's precision.

mod analysis_dto;

pub use analysis_dto::{
    AdviceDto, AnalyzeRangeRequestDto, PolicyDto, QualityDto, RangeAnalysisDto, SdLadderDto,
    SdLevelDto,
};
