use crate::math::Position;
use crate::prelude::{RadarError, RadarResult};
use crate::processing::RangeModel;
use serde::Serialize;

/// Immutable per-run radar parameters.
///
/// Construction validates every field, so an engine holding a `RadarConfig`
/// never sees a non-positive range or a challenge that cannot tell keys apart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RadarConfig {
    position: Position,
    range_km: f64,
    challenge_message: String,
    challenge_shift: i32,
}

impl RadarConfig {
    pub fn new(
        position: Position,
        range_km: f64,
        challenge_message: impl Into<String>,
        challenge_shift: i32,
    ) -> RadarResult<Self> {
        let challenge_message = challenge_message.into();
        if !position.is_finite() {
            return Err(RadarError::configuration(format!(
                "radar position ({}, {}) is not finite",
                position.x, position.y
            )));
        }
        if !(range_km.is_finite() && range_km > 0.0) {
            return Err(RadarError::configuration(format!(
                "radar range must be a positive distance, got {}",
                range_km
            )));
        }
        // A message without letters decodes identically under every key.
        if !challenge_message.chars().any(|c| c.is_ascii_alphabetic()) {
            return Err(RadarError::configuration(
                "challenge message must contain at least one ASCII letter",
            ));
        }
        Ok(Self {
            position,
            range_km,
            challenge_message,
            challenge_shift,
        })
    }

    /// Resolves the detection radius from `model` before validating.
    pub fn from_model(
        position: Position,
        model: &RangeModel,
        challenge_message: impl Into<String>,
        challenge_shift: i32,
    ) -> RadarResult<Self> {
        let range_km = model.range_km()?;
        Self::new(position, range_km, challenge_message, challenge_shift)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn range_km(&self) -> f64 {
        self.range_km
    }

    pub fn challenge_message(&self) -> &str {
        &self.challenge_message
    }

    pub fn challenge_shift(&self) -> i32 {
        self.challenge_shift
    }
}
