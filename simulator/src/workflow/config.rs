use crate::generator::profile::TrafficProfile;
use anyhow::Context;
use clap::ValueEnum;
use radarcore::interface::RadarConfig;
use radarcore::math::Position;
use radarcore::prelude::RadarResult;
use radarcore::processing::{ClassificationPolicy, RadarEquation, RangeModel};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CHALLENGE: &str =
    "THIS IS THE INDIAN SKIES, IDENTIFY YOURSELF OR WE WILL SHOT YOU DOWN RIGHT NOW";

/// Built-in scenario presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// 40 km fixed range, square placement, cell classification
    Cell,
    /// Radar-equation range, disk placement, threshold classification
    Threshold,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RadarSettings {
    pub position: Position,
    pub range: RangeModel,
    pub challenge_message: String,
    pub challenge_shift: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorkflowConfig {
    pub name: String,
    pub policy: ClassificationPolicy,
    /// Fixed seed for a reproducible run; drawn from entropy when absent.
    pub seed: Option<u64>,
    pub radar: RadarSettings,
    pub traffic: TrafficProfile,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self::preset(Scenario::Cell)
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn preset(scenario: Scenario) -> Self {
        match scenario {
            Scenario::Cell => Self {
                name: "cell".into(),
                policy: ClassificationPolicy::Cell,
                seed: None,
                radar: RadarSettings {
                    position: Position::ORIGIN,
                    range: RangeModel::Fixed { range_km: 40.0 },
                    challenge_message: DEFAULT_CHALLENGE.into(),
                    challenge_shift: 4,
                },
                traffic: TrafficProfile::cell(),
            },
            Scenario::Threshold => Self {
                name: "threshold".into(),
                policy: ClassificationPolicy::Threshold,
                seed: None,
                radar: RadarSettings {
                    position: Position::ORIGIN,
                    range: RangeModel::Derived(RadarEquation::default()),
                    challenge_message: DEFAULT_CHALLENGE.into(),
                    challenge_shift: 4,
                },
                traffic: TrafficProfile::threshold(),
            },
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    pub fn to_radar_config(&self) -> RadarResult<RadarConfig> {
        RadarConfig::from_model(
            self.radar.position,
            &self.radar.range,
            self.radar.challenge_message.clone(),
            self.radar.challenge_shift,
        )
    }
}
