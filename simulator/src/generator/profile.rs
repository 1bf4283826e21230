use radarcore::iff::IdentityCipher;
use radarcore::interface::{Geometry, Material};
use radarcore::prelude::{RadarError, RadarResult};
use serde::{Deserialize, Serialize};

/// Inclusive bounds for how many tracks of one family a run emits.
///
/// Signed so that a negative request surfaces as a configuration error
/// rather than a parse failure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountRange {
    pub min: i64,
    pub max: i64,
}

impl CountRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn bounds(&self, family: &str) -> RadarResult<(usize, usize)> {
        if self.min < 0 || self.max < 0 {
            return Err(RadarError::configuration(format!(
                "{} count range {}..={} is negative",
                family, self.min, self.max
            )));
        }
        if self.min > self.max {
            return Err(RadarError::configuration(format!(
                "{} count range {}..={} is empty",
                family, self.min, self.max
            )));
        }
        Ok((self.min as usize, self.max as usize))
    }
}

/// Reflectivity interval a family's signatures are drawn from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Band {
    pub low: f64,
    pub high: f64,
}

impl Band {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    fn validate(&self, family: &str) -> RadarResult<()> {
        if !(self.low.is_finite() && self.high.is_finite()) || self.low > self.high {
            return Err(RadarError::configuration(format!(
                "{} reflectivity band [{}, {}] is malformed",
                family, self.low, self.high
            )));
        }
        if self.low < 0.0 || self.high > 1.0 {
            return Err(RadarError::invalid_attribute(format!(
                "{} reflectivity band [{}, {}] leaves [0, 1]",
                family, self.low, self.high
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AircraftProfile {
    pub friendly: CountRange,
    pub hostile: CountRange,
    /// Rotation keys aircraft may answer with; must include the radar's shift.
    pub response_keys: Vec<i32>,
}

impl AircraftProfile {
    /// Candidate that answers the radar's challenge correctly.
    pub fn friendly_key(&self, challenge_shift: i32) -> Option<i32> {
        let shift = IdentityCipher::reduce(challenge_shift);
        self.response_keys
            .iter()
            .copied()
            .find(|key| IdentityCipher::reduce(*key) == shift)
    }

    pub fn hostile_keys(&self, challenge_shift: i32) -> Vec<i32> {
        let shift = IdentityCipher::reduce(challenge_shift);
        self.response_keys
            .iter()
            .copied()
            .filter(|key| IdentityCipher::reduce(*key) != shift)
            .collect()
    }

    fn validate(&self, challenge_shift: i32) -> RadarResult<()> {
        let (_, friendly_max) = self.friendly.bounds("friendly aircraft")?;
        let (_, hostile_max) = self.hostile.bounds("hostile aircraft")?;
        if friendly_max > 0 && self.friendly_key(challenge_shift).is_none() {
            return Err(RadarError::configuration(format!(
                "response keys {:?} do not include the challenge shift {}",
                self.response_keys, challenge_shift
            )));
        }
        if hostile_max > 0 && self.hostile_keys(challenge_shift).is_empty() {
            return Err(RadarError::configuration(format!(
                "response keys {:?} leave no key for hostile aircraft",
                self.response_keys
            )));
        }
        Ok(())
    }
}

/// Generation parameters for one non-cooperative family.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ObjectProfile {
    pub count: CountRange,
    pub reflectivity: Band,
    pub materials: Vec<Material>,
    pub geometries: Vec<Geometry>,
}

impl ObjectProfile {
    fn validate(&self, family: &str) -> RadarResult<()> {
        let (_, max) = self.count.bounds(family)?;
        self.reflectivity.validate(family)?;
        if max > 0 && (self.materials.is_empty() || self.geometries.is_empty()) {
            return Err(RadarError::configuration(format!(
                "{} need at least one material and one geometry",
                family
            )));
        }
        Ok(())
    }
}

/// Traffic mix for a scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrafficProfile {
    pub aircraft: AircraftProfile,
    pub drones: ObjectProfile,
    pub missiles: ObjectProfile,
}

impl Default for TrafficProfile {
    fn default() -> Self {
        Self::cell()
    }
}

impl TrafficProfile {
    /// Short-range mix where drones and missiles sit in distinct reflectivity bands.
    pub fn cell() -> Self {
        Self {
            aircraft: AircraftProfile {
                friendly: CountRange::new(1, 5),
                hostile: CountRange::new(1, 5),
                response_keys: vec![4, 7, 9],
            },
            drones: ObjectProfile {
                count: CountRange::new(1, 5),
                reflectivity: Band::new(0.1, 0.3),
                materials: vec![Material::Composite, Material::Metal],
                geometries: vec![Geometry::Small, Geometry::Large],
            },
            missiles: ObjectProfile {
                count: CountRange::new(1, 5),
                reflectivity: Band::new(0.7, 1.0),
                materials: vec![Material::Composite, Material::Metal],
                geometries: vec![Geometry::Small, Geometry::Large, Geometry::Pointed],
            },
        }
    }

    /// Long-range mix with a denser, shared-signature object population.
    pub fn threshold() -> Self {
        let objects = |count| ObjectProfile {
            count,
            reflectivity: Band::new(0.5, 1.0),
            materials: vec![Material::Composite, Material::Metal],
            geometries: vec![Geometry::Pointed, Geometry::Large],
        };
        Self {
            aircraft: AircraftProfile {
                friendly: CountRange::new(1, 5),
                hostile: CountRange::new(1, 5),
                response_keys: vec![4, 7, 9],
            },
            drones: objects(CountRange::new(5, 15)),
            missiles: objects(CountRange::new(5, 10)),
        }
    }

    pub fn validate(&self, challenge_shift: i32) -> RadarResult<()> {
        self.aircraft.validate(challenge_shift)?;
        self.drones.validate("drones")?;
        self.missiles.validate("missiles")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        assert!(TrafficProfile::cell().validate(4).is_ok());
        assert!(TrafficProfile::threshold().validate(4).is_ok());
    }

    #[test]
    fn negative_or_empty_counts_are_configuration_errors() {
        assert!(matches!(
            CountRange::new(-1, 3).bounds("drones"),
            Err(RadarError::Configuration(_))
        ));
        assert!(matches!(
            CountRange::new(4, 2).bounds("drones"),
            Err(RadarError::Configuration(_))
        ));
        assert_eq!(CountRange::new(0, 0).bounds("drones").unwrap(), (0, 0));
    }

    #[test]
    fn keys_split_into_friendly_and_hostile() {
        let aircraft = TrafficProfile::cell().aircraft;
        assert_eq!(aircraft.friendly_key(4), Some(4));
        assert_eq!(aircraft.friendly_key(30), Some(4));
        assert_eq!(aircraft.hostile_keys(4), vec![7, 9]);
        assert_eq!(aircraft.friendly_key(5), None);
    }

    #[test]
    fn missing_friendly_key_is_rejected() {
        let err = TrafficProfile::cell().validate(5).unwrap_err();
        assert!(matches!(err, RadarError::Configuration(_)));
    }

    #[test]
    fn hostiles_need_a_wrong_key() {
        let mut profile = TrafficProfile::cell();
        profile.aircraft.response_keys = vec![4];
        assert!(profile.validate(4).is_err());
        profile.aircraft.hostile = CountRange::new(0, 0);
        assert!(profile.validate(4).is_ok());
    }

    #[test]
    fn band_outside_unit_interval_is_an_attribute_error() {
        let mut profile = TrafficProfile::threshold();
        profile.missiles.reflectivity = Band::new(0.5, 1.2);
        assert!(matches!(
            profile.validate(4),
            Err(RadarError::InvalidAttribute(_))
        ));
        profile.missiles.reflectivity = Band::new(0.9, 0.1);
        assert!(matches!(
            profile.validate(4),
            Err(RadarError::Configuration(_))
        ));
    }
}
