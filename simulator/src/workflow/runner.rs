use crate::generator::random::RandomSource;
use crate::generator::tracks::TrackGenerator;
use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use log::info;
use radarcore::interface::DetectionReport;
use radarcore::processing::DetectionEngine;
use radarcore::telemetry::MetricsSnapshot;
use rand::{rngs::StdRng, SeedableRng};

#[derive(Debug)]
pub struct WorkflowResult {
    pub report: DetectionReport,
    pub metrics: MetricsSnapshot,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    /// One complete detection cycle drawing from `rng`.
    pub fn execute(&self, rng: &mut dyn RandomSource) -> anyhow::Result<WorkflowResult> {
        let radar = self
            .config
            .to_radar_config()
            .context("building radar configuration")?;
        info!(
            "scenario {} -> range {:.2} km, {:?} policy",
            self.config.name,
            radar.range_km(),
            self.config.policy
        );

        let generator = TrackGenerator::new(&radar, &self.config.traffic, self.config.policy);
        let tracks = generator.generate(rng).context("generating tracks")?;

        let engine = DetectionEngine::new(radar, self.config.policy);
        let report = engine.run(&tracks).context("running detection engine")?;

        Ok(WorkflowResult {
            report,
            metrics: engine.metrics().snapshot(),
        })
    }

    /// Runs with a random source seeded from the config, or from entropy.
    pub fn run(&self) -> anyhow::Result<WorkflowResult> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.execute(&mut rng)
    }
}

/// Driver entry point: generate, detect, report.
pub fn run_simulation(config: &WorkflowConfig) -> anyhow::Result<DetectionReport> {
    Runner::new(config.clone()).run().map(|result| result.report)
}
