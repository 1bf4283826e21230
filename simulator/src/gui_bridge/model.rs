use crate::workflow::config::{Scenario, WorkflowConfig};
use crate::workflow::runner::WorkflowResult;
use radarcore::iff::IdentityCipher;
use radarcore::interface::DetectionReport;
use radarcore::processing::RangeModel;
use serde::{Deserialize, Serialize};

/// What the visualizer polls for: the latest report plus a few notes.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VisualizationModel {
    pub scenario: Option<String>,
    pub report: Option<DetectionReport>,
    pub notes: Vec<String>,
}

impl VisualizationModel {
    pub fn from_report(scenario: &str, report: DetectionReport) -> Self {
        Self {
            scenario: Some(scenario.to_string()),
            notes: vec![
                format!("challenge {}", report.challenge),
                format!(
                    "{} of {} tracks in range",
                    report.detections.len(),
                    report.scanned
                ),
            ],
            report: Some(report),
        }
    }

    pub fn from_result(scenario: &str, result: &WorkflowResult) -> Self {
        let metrics = &result.metrics;
        let mut model = Self::from_report(scenario, result.report.clone());
        model.notes.push(format!(
            "scanned {} / in range {} / dropped {}",
            metrics.scanned, metrics.in_range, metrics.dropped
        ));
        model
    }
}

/// Partial overrides posted by the visualizer on top of a preset.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScenarioRequest {
    pub scenario: Option<Scenario>,
    pub seed: Option<u64>,
    pub range_km: Option<f64>,
    pub challenge_shift: Option<i32>,
    pub description: Option<String>,
}

impl ScenarioRequest {
    pub fn into_config(self) -> WorkflowConfig {
        let mut config =
            WorkflowConfig::preset(self.scenario.unwrap_or(Scenario::Cell)).with_seed(self.seed);
        if let Some(range_km) = self.range_km {
            config.radar.range = RangeModel::Fixed { range_km };
        }
        if let Some(shift) = self.challenge_shift {
            config.radar.challenge_shift = shift;
            let keys = &mut config.traffic.aircraft.response_keys;
            let reduced = IdentityCipher::reduce(shift);
            if !keys.iter().any(|key| IdentityCipher::reduce(*key) == reduced) {
                keys.push(shift);
            }
        }
        if let Some(description) = self.description {
            config.name = description;
        }
        config
    }
}
