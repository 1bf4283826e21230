use crate::interface::{RadarConfig, Track};
use crate::math::{DecibelHelper, Position};
use crate::prelude::{RadarError, RadarResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// How the detection radius of a run is obtained. Chosen once at setup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum RangeModel {
    Fixed { range_km: f64 },
    Derived(RadarEquation),
}

impl RangeModel {
    pub fn range_km(&self) -> RadarResult<f64> {
        match self {
            RangeModel::Fixed { range_km } => {
                if range_km.is_finite() && *range_km > 0.0 {
                    Ok(*range_km)
                } else {
                    Err(RadarError::configuration(format!(
                        "fixed range must be positive, got {}",
                        range_km
                    )))
                }
            }
            RangeModel::Derived(equation) => equation.max_range_km(),
        }
    }
}

/// Inputs to the radar range equation.
///
/// `R = ((Pt * Gt * Gr * sigma) / ((4π)^3 * Pmin))^(1/4)` with gains converted
/// from dB to linear. The result is read as kilometres.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RadarEquation {
    pub transmit_power_w: f64,
    pub transmit_gain_db: f64,
    pub receive_gain_db: f64,
    pub cross_section_m2: f64,
    pub min_detectable_power_w: f64,
}

impl Default for RadarEquation {
    fn default() -> Self {
        Self {
            transmit_power_w: 1.0e6,
            transmit_gain_db: 60.0,
            receive_gain_db: 60.0,
            cross_section_m2: 1.0,
            min_detectable_power_w: 1.0e-9,
        }
    }
}

impl RadarEquation {
    pub fn max_range_km(&self) -> RadarResult<f64> {
        let inputs = [
            ("transmit power", self.transmit_power_w),
            ("transmit gain", self.transmit_gain_db),
            ("receive gain", self.receive_gain_db),
            ("cross section", self.cross_section_m2),
            ("minimum detectable power", self.min_detectable_power_w),
        ];
        for (name, value) in inputs {
            if !(value.is_finite() && value > 0.0) {
                return Err(RadarError::configuration(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        let gt = DecibelHelper::to_linear(self.transmit_gain_db);
        let gr = DecibelHelper::to_linear(self.receive_gain_db);
        let numerator = self.transmit_power_w * gt * gr * self.cross_section_m2;
        let denominator = (4.0 * PI).powi(3) * self.min_detectable_power_w;
        let range = (numerator / denominator).powf(0.25);

        if range.is_finite() && range > 0.0 {
            Ok(range)
        } else {
            Err(RadarError::configuration(format!(
                "radar equation produced an unusable range {}",
                range
            )))
        }
    }
}

/// At-most-range visibility test around the radar origin.
#[derive(Debug, Clone, Copy)]
pub struct RangeGate {
    origin: Position,
    range_km: f64,
}

impl RangeGate {
    pub fn new(origin: Position, range_km: f64) -> Self {
        Self { origin, range_km }
    }

    pub fn for_radar(config: &RadarConfig) -> Self {
        Self::new(config.position(), config.range_km())
    }

    /// A position on the boundary is in range.
    pub fn contains(&self, position: Position) -> bool {
        position.distance_to(&self.origin) <= self.range_km
    }

    pub fn filter(&self, tracks: &[Track]) -> Vec<Track> {
        tracks
            .iter()
            .filter(|track| self.contains(track.position()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_range_matches_closed_form() {
        let equation = RadarEquation::default();
        let range = equation.max_range_km().unwrap();
        let expected = ((1.0e6_f64 * 1.0e6 * 1.0e6 * 1.0) / ((4.0 * PI).powi(3) * 1.0e-9)).powf(0.25);
        assert!(((range - expected) / expected).abs() < 1e-6);
        assert!((range - 842.54).abs() < 0.01);
    }

    #[test]
    fn zero_minimum_power_is_a_configuration_error() {
        let equation = RadarEquation {
            min_detectable_power_w: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            equation.max_range_km(),
            Err(RadarError::Configuration(_))
        ));
    }

    #[test]
    fn every_non_positive_input_is_rejected() {
        let base = RadarEquation::default();
        let variants = [
            RadarEquation { transmit_power_w: -1.0, ..base.clone() },
            RadarEquation { transmit_gain_db: 0.0, ..base.clone() },
            RadarEquation { receive_gain_db: -3.0, ..base.clone() },
            RadarEquation { cross_section_m2: 0.0, ..base.clone() },
            RadarEquation { min_detectable_power_w: f64::NAN, ..base.clone() },
        ];
        for equation in variants {
            assert!(matches!(
                RangeModel::Derived(equation).range_km(),
                Err(RadarError::Configuration(_))
            ));
        }
    }

    #[test]
    fn fixed_model_returns_configured_range() {
        assert_eq!(RangeModel::Fixed { range_km: 40.0 }.range_km().unwrap(), 40.0);
        assert!(RangeModel::Fixed { range_km: 0.0 }.range_km().is_err());
    }

    #[test]
    fn range_model_deserializes_by_mode() {
        let fixed: RangeModel = serde_json::from_str(r#"{"mode":"fixed","range_km":40.0}"#).unwrap();
        assert_eq!(fixed, RangeModel::Fixed { range_km: 40.0 });
        let derived: RangeModel = serde_json::from_str(
            r#"{"mode":"derived","transmit_power_w":1e6,"transmit_gain_db":60,
                "receive_gain_db":60,"cross_section_m2":1,"min_detectable_power_w":1e-9}"#,
        )
        .unwrap();
        assert_eq!(derived, RangeModel::Derived(RadarEquation::default()));
    }

    #[test]
    fn gate_includes_boundary_and_is_idempotent() {
        let gate = RangeGate::new(Position::ORIGIN, 40.0);
        assert!(gate.contains(Position::new(40.0, 0.0)));
        assert!(!gate.contains(Position::new(40.0, 0.1)));

        let tracks = vec![
            Track::aircraft(1, Position::new(10.0, 0.0), 4),
            Track::aircraft(2, Position::new(30.0, 30.0), 4),
            Track::aircraft(3, Position::new(0.0, -40.0), 7),
        ];
        let once = gate.filter(&tracks);
        assert_eq!(once.iter().map(Track::id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(gate.filter(&once), once);
    }
}
