pub use crate::interface::{
    Category, CategoryCounts, DetectionReport, DetectionResult, Geometry, Material, RadarConfig,
    Signature, Track, TrackKind, TrackReturn,
};
pub use crate::math::Position;
pub use crate::processing::{ClassificationPolicy, Classifier, DetectionEngine, RangeModel};

/// Error taxonomy shared by every stage of a detection run.
///
/// Any variant aborts the run; there is no partial report.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RadarError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("invalid attribute: {0}")]
    InvalidAttribute(String),
}

pub type RadarResult<T> = Result<T, RadarError>;

impl RadarError {
    pub fn configuration(message: impl Into<String>) -> Self {
        RadarError::Configuration(message.into())
    }

    pub fn invalid_attribute(message: impl Into<String>) -> Self {
        RadarError::InvalidAttribute(message.into())
    }
}
