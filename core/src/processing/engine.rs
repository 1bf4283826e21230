use crate::iff::IffInterrogator;
use crate::interface::{
    Category, CategoryCounts, DetectionReport, DetectionResult, RadarConfig, Track, TrackKind,
    TrackReturn,
};
use crate::prelude::{RadarError, RadarResult};
use crate::processing::classifier::{ClassificationPolicy, Classifier};
use crate::processing::range::RangeGate;
use crate::telemetry::{LogManager, MetricsRecorder};

/// Turns a batch of tracks into a range-filtered, categorised report.
///
/// The engine holds no randomness. Given the same tracks and configuration it
/// produces the same report.
pub struct DetectionEngine {
    radar: RadarConfig,
    gate: RangeGate,
    interrogator: IffInterrogator,
    classifier: Classifier,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl DetectionEngine {
    pub fn new(radar: RadarConfig, policy: ClassificationPolicy) -> Self {
        Self {
            gate: RangeGate::for_radar(&radar),
            interrogator: IffInterrogator::new(&radar),
            classifier: Classifier::new(policy),
            logger: LogManager::new(),
            metrics: MetricsRecorder::new(),
            radar,
        }
    }

    pub fn radar(&self) -> &RadarConfig {
        &self.radar
    }

    pub fn policy(&self) -> ClassificationPolicy {
        self.classifier.policy()
    }

    pub fn challenge(&self) -> &str {
        self.interrogator.challenge()
    }

    /// Tallies for the most recent call to [`DetectionEngine::run`].
    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }

    /// Results come out friendly aircraft first, then enemy aircraft, then
    /// everything else, each group in input order.
    pub fn run(&self, tracks: &[Track]) -> RadarResult<DetectionReport> {
        self.metrics.reset();

        // Positions and signatures are checked before filtering so a bad track
        // aborts the run no matter where it sits.
        for track in tracks {
            if !track.position().is_finite() {
                self.metrics.record_rejected();
                return Err(RadarError::invalid_attribute(format!(
                    "track {} position ({}, {}) is not finite",
                    track.id(),
                    track.position().x,
                    track.position().y
                )));
            }
            if let Some(signature) = track.signature() {
                if let Err(err) = signature.validate() {
                    self.metrics.record_rejected();
                    return Err(err);
                }
            }
        }

        let visible = self.gate.filter(tracks);
        self.metrics.record_scan(tracks.len(), visible.len());
        self.logger.record(&format!(
            "RangeGate kept {} of {} tracks within {:.2} km",
            visible.len(),
            tracks.len(),
            self.radar.range_km()
        ));

        let mut friendly = Vec::new();
        let mut enemy = Vec::new();
        let mut others = Vec::new();
        for track in &visible {
            let category = self.categorize(track)?;
            let result = DetectionResult::new(
                track.id(),
                category,
                track.position(),
                self.radar.position(),
            );
            match category {
                Category::Friendly => friendly.push(result),
                Category::Enemy => enemy.push(result),
                _ => others.push(result),
            }
        }

        let detections: Vec<DetectionResult> =
            friendly.into_iter().chain(enemy).chain(others).collect();
        let mut counts = CategoryCounts::default();
        for detection in &detections {
            counts.record(detection.category);
        }
        self.logger.record(&format!(
            "DetectionEngine friendly {} enemy {} drones {} missiles {}",
            counts.friendly, counts.enemy, counts.drone, counts.missile
        ));

        Ok(DetectionReport {
            challenge: self.interrogator.challenge().to_string(),
            radar_position: self.radar.position(),
            range_km: self.radar.range_km(),
            policy: self.classifier.policy(),
            scanned: tracks.len(),
            detections,
            counts,
        })
    }

    fn categorize(&self, track: &Track) -> RadarResult<Category> {
        match track.returns() {
            TrackReturn::Transponder { response_key } => {
                let reply = self.interrogator.interrogate(*response_key);
                self.logger.detail(&format!(
                    "Track {} decryption -> {}: {:?}",
                    track.id(),
                    reply.decoded,
                    reply.category
                ));
                Ok(reply.category)
            }
            TrackReturn::Skin(signature) => {
                let class = self.classifier.classify(signature)?;
                self.logger
                    .detail(&format!("Track {} classified as {:?}", track.id(), class));
                Ok(class.into())
            }
            TrackReturn::Designated => Ok(match track.kind() {
                TrackKind::Drone => Category::Drone,
                TrackKind::Missile => Category::Missile,
                TrackKind::Aircraft | TrackKind::UnknownObject => Category::Unknown,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::{Geometry, Material, Signature};
    use crate::math::Position;

    fn radar() -> RadarConfig {
        RadarConfig::new(Position::ORIGIN, 40.0, "HELLO", 4).unwrap()
    }

    fn drone(id: u32, position: Position, reflectivity: f64) -> Track {
        Track::non_cooperative(
            id,
            TrackKind::Drone,
            position,
            Signature::new(reflectivity, Material::Composite, Geometry::Small),
        )
        .unwrap()
    }

    #[test]
    fn matching_key_in_range_is_one_friendly() {
        let engine = DetectionEngine::new(radar(), ClassificationPolicy::Cell);
        let position = Position::new(6.0, 8.0);
        let report = engine.run(&[Track::aircraft(1, position, 4)]).unwrap();

        assert_eq!(report.detections.len(), 1);
        let detection = &report.detections[0];
        assert_eq!(detection.category, Category::Friendly);
        assert_eq!(detection.position, position);
        assert!((detection.distance_from_radar() - 10.0).abs() < 1e-12);
        assert_eq!(report.count(Category::Friendly), 1);
        assert_eq!(report.challenge, "LIPPS");
    }

    #[test]
    fn out_of_range_aircraft_are_dropped_regardless_of_key() {
        let engine = DetectionEngine::new(radar(), ClassificationPolicy::Cell);
        let far = Position::new(30.0, 40.0);
        for key in [4, 7, 9] {
            let report = engine.run(&[Track::aircraft(1, far, key)]).unwrap();
            assert!(report.detections.is_empty());
            assert_eq!(report.counts.total(), 0);
            assert_eq!(report.scanned, 1);
        }
    }

    #[test]
    fn wrong_key_resolves_enemy() {
        let engine = DetectionEngine::new(radar(), ClassificationPolicy::Cell);
        let report = engine
            .run(&[Track::aircraft(1, Position::new(1.0, 1.0), 7)])
            .unwrap();
        assert_eq!(report.detections[0].category, Category::Enemy);
    }

    #[test]
    fn results_are_grouped_friendly_enemy_then_objects() {
        let engine = DetectionEngine::new(radar(), ClassificationPolicy::Cell);
        let tracks = vec![
            drone(1, Position::new(1.0, 0.0), 0.1),
            Track::aircraft(2, Position::new(2.0, 0.0), 9),
            Track::aircraft(3, Position::new(3.0, 0.0), 4),
            Track::designated(4, TrackKind::Missile, Position::new(4.0, 0.0)).unwrap(),
            Track::aircraft(5, Position::new(5.0, 0.0), 4),
            Track::aircraft(6, Position::new(60.0, 0.0), 4),
        ];
        let report = engine.run(&tracks).unwrap();
        let order: Vec<(u32, Category)> = report
            .detections
            .iter()
            .map(|d| (d.track_id, d.category))
            .collect();
        assert_eq!(
            order,
            vec![
                (3, Category::Friendly),
                (5, Category::Friendly),
                (2, Category::Enemy),
                (1, Category::Drone),
                (4, Category::Missile),
            ]
        );
    }

    #[test]
    fn policy_selects_the_rule_set() {
        let track = Track::non_cooperative(
            1,
            TrackKind::Missile,
            Position::new(5.0, 5.0),
            Signature::new(0.85, Material::Metal, Geometry::Large),
        )
        .unwrap();

        let cell = DetectionEngine::new(radar(), ClassificationPolicy::Cell)
            .run(std::slice::from_ref(&track))
            .unwrap();
        assert_eq!(cell.detections[0].category, Category::Unknown);

        let threshold = DetectionEngine::new(radar(), ClassificationPolicy::Threshold)
            .run(&[track])
            .unwrap();
        assert_eq!(threshold.detections[0].category, Category::Missile);
        assert_eq!(threshold.policy, ClassificationPolicy::Threshold);
    }

    #[test]
    fn invalid_signature_aborts_even_out_of_range() {
        let engine = DetectionEngine::new(radar(), ClassificationPolicy::Cell);
        let tracks = vec![
            Track::aircraft(1, Position::new(1.0, 1.0), 4),
            drone(2, Position::new(500.0, 0.0), 1.2),
        ];
        let err = engine.run(&tracks).unwrap_err();
        assert!(matches!(err, RadarError::InvalidAttribute(_)));
        assert_eq!(engine.metrics().snapshot().rejected, 1);
    }

    #[test]
    fn non_finite_position_aborts_the_run() {
        let engine = DetectionEngine::new(radar(), ClassificationPolicy::Cell);
        for bad in [
            Position::new(f64::NAN, 0.0),
            Position::new(0.0, f64::INFINITY),
            Position::new(f64::NEG_INFINITY, f64::NAN),
        ] {
            let tracks = vec![
                Track::aircraft(1, bad, 4),
                Track::aircraft(2, Position::new(1.0, 1.0), 4),
            ];
            let err = engine.run(&tracks).unwrap_err();
            assert!(matches!(err, RadarError::InvalidAttribute(_)));
        }
        assert_eq!(engine.metrics().snapshot().rejected, 1);
    }

    #[test]
    fn empty_input_gives_empty_report() {
        let engine = DetectionEngine::new(radar(), ClassificationPolicy::Threshold);
        let report = engine.run(&[]).unwrap();
        assert!(report.detections.is_empty());
        assert_eq!(report.counts, CategoryCounts::default());
    }

    #[test]
    fn repeated_runs_are_identical() {
        let engine = DetectionEngine::new(radar(), ClassificationPolicy::Cell);
        let tracks = vec![
            Track::aircraft(1, Position::new(10.0, -3.0), 4),
            drone(2, Position::new(-20.0, 12.0), 0.05),
            drone(3, Position::new(39.0, 39.0), 0.05),
        ];
        let first = engine.run(&tracks).unwrap();
        let second = engine.run(&tracks).unwrap();
        assert_eq!(first, second);

        let metrics = engine.metrics().snapshot();
        assert_eq!(metrics.scanned, 3);
        assert_eq!(metrics.in_range, 2);
        assert_eq!(metrics.dropped, 1);
    }
}
