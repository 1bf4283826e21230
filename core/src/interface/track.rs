use crate::math::Position;
use crate::prelude::{RadarError, RadarResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Family a synthetic track was generated as.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrackKind {
    Aircraft,
    Drone,
    Missile,
    UnknownObject,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Material {
    Composite,
    Metal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Geometry {
    Small,
    Large,
    Pointed,
}

impl Material {
    pub fn as_str(&self) -> &'static str {
        match self {
            Material::Composite => "composite",
            Material::Metal => "metal",
        }
    }
}

impl Geometry {
    pub fn as_str(&self) -> &'static str {
        match self {
            Geometry::Small => "small",
            Geometry::Large => "large",
            Geometry::Pointed => "pointed",
        }
    }
}

impl FromStr for Material {
    type Err = RadarError;

    fn from_str(value: &str) -> RadarResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "composite" => Ok(Material::Composite),
            "metal" => Ok(Material::Metal),
            other => Err(RadarError::invalid_attribute(format!(
                "unknown material '{}'",
                other
            ))),
        }
    }
}

impl FromStr for Geometry {
    type Err = RadarError;

    fn from_str(value: &str) -> RadarResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Geometry::Small),
            "large" => Ok(Geometry::Large),
            "pointed" => Ok(Geometry::Pointed),
            other => Err(RadarError::invalid_attribute(format!(
                "unknown geometry '{}'",
                other
            ))),
        }
    }
}

impl TryFrom<String> for Material {
    type Error = RadarError;

    fn try_from(value: String) -> RadarResult<Self> {
        value.parse()
    }
}

impl TryFrom<String> for Geometry {
    type Error = RadarError;

    fn try_from(value: String) -> RadarResult<Self> {
        value.parse()
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical return attributes of a non-cooperative track.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Signature {
    pub reflectivity: f64,
    pub material: Material,
    pub geometry: Geometry,
}

impl Signature {
    pub fn new(reflectivity: f64, material: Material, geometry: Geometry) -> Self {
        Self {
            reflectivity,
            material,
            geometry,
        }
    }

    /// Rejects reflectivity outside `[0, 1]`, NaN included. Values are never clamped.
    pub fn validate(&self) -> RadarResult<()> {
        if !(0.0..=1.0).contains(&self.reflectivity) {
            return Err(RadarError::invalid_attribute(format!(
                "reflectivity {} outside [0, 1]",
                self.reflectivity
            )));
        }
        Ok(())
    }
}

/// What a track gives back to the radar. Cooperative and non-cooperative
/// attributes are mutually exclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TrackReturn {
    /// Aircraft answering the IFF challenge with its rotation key.
    Transponder { response_key: i32 },
    /// Skin return described by physical attributes.
    Skin(Signature),
    /// Scenario-injected track whose category is fixed by its kind.
    Designated,
}

/// One synthetic detectable entity before range filtering.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Track {
    id: u32,
    kind: TrackKind,
    position: Position,
    returns: TrackReturn,
}

impl Track {
    pub fn aircraft(id: u32, position: Position, response_key: i32) -> Self {
        Self {
            id,
            kind: TrackKind::Aircraft,
            position,
            returns: TrackReturn::Transponder { response_key },
        }
    }

    pub fn non_cooperative(
        id: u32,
        kind: TrackKind,
        position: Position,
        signature: Signature,
    ) -> RadarResult<Self> {
        if kind == TrackKind::Aircraft {
            return Err(RadarError::invalid_attribute(format!(
                "track {} is an aircraft and cannot carry a skin signature",
                id
            )));
        }
        Ok(Self {
            id,
            kind,
            position,
            returns: TrackReturn::Skin(signature),
        })
    }

    /// Drone or missile labelled at generation; it bypasses the classifier.
    pub fn designated(id: u32, kind: TrackKind, position: Position) -> RadarResult<Self> {
        match kind {
            TrackKind::Drone | TrackKind::Missile => Ok(Self {
                id,
                kind,
                position,
                returns: TrackReturn::Designated,
            }),
            other => Err(RadarError::invalid_attribute(format!(
                "track {} of kind {:?} cannot be designated",
                id, other
            ))),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn kind(&self) -> TrackKind {
        self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn returns(&self) -> &TrackReturn {
        &self.returns
    }

    pub fn response_key(&self) -> Option<i32> {
        match self.returns {
            TrackReturn::Transponder { response_key } => Some(response_key),
            _ => None,
        }
    }

    pub fn signature(&self) -> Option<&Signature> {
        match &self.returns {
            TrackReturn::Skin(signature) => Some(signature),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aircraft_carry_only_a_response_key() {
        let track = Track::aircraft(1, Position::new(1.0, 2.0), 4);
        assert_eq!(track.response_key(), Some(4));
        assert!(track.signature().is_none());
    }

    #[test]
    fn non_cooperative_tracks_carry_only_a_signature() {
        let signature = Signature::new(0.1, Material::Composite, Geometry::Small);
        let track =
            Track::non_cooperative(2, TrackKind::Drone, Position::ORIGIN, signature).unwrap();
        assert_eq!(track.signature(), Some(&signature));
        assert!(track.response_key().is_none());

        let err = Track::non_cooperative(3, TrackKind::Aircraft, Position::ORIGIN, signature)
            .unwrap_err();
        assert!(matches!(err, RadarError::InvalidAttribute(_)));
    }

    #[test]
    fn only_drones_and_missiles_can_be_designated() {
        assert!(Track::designated(1, TrackKind::Missile, Position::ORIGIN).is_ok());
        assert!(Track::designated(2, TrackKind::Aircraft, Position::ORIGIN).is_err());
        assert!(Track::designated(3, TrackKind::UnknownObject, Position::ORIGIN).is_err());
    }

    #[test]
    fn attribute_names_parse_and_reject_unknowns() {
        assert_eq!("Metal".parse::<Material>().unwrap(), Material::Metal);
        assert_eq!(" pointed ".parse::<Geometry>().unwrap(), Geometry::Pointed);
        assert!(matches!(
            "wood".parse::<Material>(),
            Err(RadarError::InvalidAttribute(_))
        ));
        assert!(matches!(
            "round".parse::<Geometry>(),
            Err(RadarError::InvalidAttribute(_))
        ));
    }

    #[test]
    fn attributes_deserialize_through_the_parser() {
        let material: Material = serde_json::from_str("\"composite\"").unwrap();
        assert_eq!(material, Material::Composite);
        assert!(serde_json::from_str::<Geometry>("\"cubic\"").is_err());
        assert_eq!(serde_json::to_string(&Geometry::Large).unwrap(), "\"large\"");
    }

    #[test]
    fn reflectivity_outside_unit_interval_is_rejected() {
        assert!(Signature::new(0.0, Material::Metal, Geometry::Large)
            .validate()
            .is_ok());
        assert!(Signature::new(1.0, Material::Metal, Geometry::Large)
            .validate()
            .is_ok());
        for bad in [-0.01, 1.01, f64::NAN] {
            let err = Signature::new(bad, Material::Metal, Geometry::Large)
                .validate()
                .unwrap_err();
            assert!(matches!(err, RadarError::InvalidAttribute(_)));
        }
    }
}
