use crate::generator::random::RandomSource;
use radarcore::math::Position;
use radarcore::processing::ClassificationPolicy;
use std::f64::consts::TAU;

/// How track positions are spread around the radar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Uniform over the square of half-width `range`; corners fall out of range.
    Square,
    /// Polar draw with angle and radius both uniform; always in range.
    Disk,
}

impl Placement {
    pub fn for_policy(policy: ClassificationPolicy) -> Self {
        match policy {
            ClassificationPolicy::Cell => Placement::Square,
            ClassificationPolicy::Threshold => Placement::Disk,
        }
    }

    pub fn sample(&self, rng: &mut dyn RandomSource, origin: Position, range_km: f64) -> Position {
        match self {
            Placement::Square => Position::new(
                origin.x + rng.uniform(-range_km, range_km),
                origin.y + rng.uniform(-range_km, range_km),
            ),
            Placement::Disk => {
                let angle = rng.uniform(0.0, TAU);
                let radius = rng.uniform(0.0, range_km);
                Position::from_polar(origin, radius, angle)
            }
        }
    }
}
