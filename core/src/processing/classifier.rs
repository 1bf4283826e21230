use crate::interface::{Category, Geometry, Material, Signature};
use crate::prelude::RadarResult;
use serde::{Deserialize, Serialize};

/// Rule set used to map a skin signature to a class.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationPolicy {
    /// Reflectivity bands combined with exact material and geometry.
    #[default]
    Cell,
    /// Reflectivity thresholds per material; geometry is not consulted.
    Threshold,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Classification {
    Drone,
    FighterJet,
    Missile,
    Unknown,
}

impl From<Classification> for Category {
    fn from(classification: Classification) -> Self {
        match classification {
            Classification::Drone => Category::Drone,
            Classification::FighterJet => Category::FighterJet,
            Classification::Missile => Category::Missile,
            Classification::Unknown => Category::Unknown,
        }
    }
}

/// Ordered, first-match rule evaluation over a signature.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    policy: ClassificationPolicy,
}

impl Classifier {
    pub fn new(policy: ClassificationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ClassificationPolicy {
        self.policy
    }

    pub fn classify(&self, signature: &Signature) -> RadarResult<Classification> {
        signature.validate()?;
        Ok(match self.policy {
            ClassificationPolicy::Cell => Self::cell(signature),
            ClassificationPolicy::Threshold => Self::threshold(signature),
        })
    }

    fn cell(signature: &Signature) -> Classification {
        match (signature.reflectivity, signature.material, signature.geometry) {
            (r, Material::Composite, Geometry::Small) if r < 0.2 => Classification::Drone,
            (r, Material::Metal, Geometry::Large) if (0.2..0.8).contains(&r) => {
                Classification::FighterJet
            }
            (r, Material::Metal, Geometry::Pointed) if r >= 0.8 => Classification::Missile,
            _ => Classification::Unknown,
        }
    }

    fn threshold(signature: &Signature) -> Classification {
        match (signature.reflectivity, signature.material) {
            (r, Material::Metal) if r > 0.8 => Classification::Missile,
            (r, Material::Composite) if r > 0.5 => Classification::Drone,
            _ => Classification::Unknown,
        }
    }
}
