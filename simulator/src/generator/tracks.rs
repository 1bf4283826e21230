use crate::generator::placement::Placement;
use crate::generator::profile::{ObjectProfile, TrafficProfile};
use crate::generator::random::RandomSource;
use log::debug;
use radarcore::interface::{RadarConfig, Signature, Track, TrackKind};
use radarcore::math::Position;
use radarcore::prelude::{RadarError, RadarResult};
use radarcore::processing::{Classification, ClassificationPolicy, Classifier, RangeGate};

/// Synthesises one run's tracks: friendly aircraft, hostile aircraft, drones,
/// then missiles, with ids assigned in that order.
pub struct TrackGenerator<'a> {
    radar: &'a RadarConfig,
    profile: &'a TrafficProfile,
    policy: ClassificationPolicy,
    placement: Placement,
}

impl<'a> TrackGenerator<'a> {
    pub fn new(
        radar: &'a RadarConfig,
        profile: &'a TrafficProfile,
        policy: ClassificationPolicy,
    ) -> Self {
        Self {
            radar,
            profile,
            policy,
            placement: Placement::for_policy(policy),
        }
    }

    pub fn generate(&self, rng: &mut dyn RandomSource) -> RadarResult<Vec<Track>> {
        let shift = self.radar.challenge_shift();
        self.profile.validate(shift)?;

        let mut tracks = Vec::new();
        let aircraft = &self.profile.aircraft;

        let (min, max) = aircraft.friendly.bounds("friendly aircraft")?;
        let friendly_count = rng.count(min, max);
        if friendly_count > 0 {
            let key = aircraft.friendly_key(shift).ok_or_else(|| {
                RadarError::configuration("no response key answers the challenge")
            })?;
            for _ in 0..friendly_count {
                let position = self.place(rng);
                tracks.push(Track::aircraft(next_id(&tracks), position, key));
            }
        }

        let (min, max) = aircraft.hostile.bounds("hostile aircraft")?;
        let hostile_keys = aircraft.hostile_keys(shift);
        for _ in 0..rng.count(min, max) {
            let key = hostile_keys[rng.index(hostile_keys.len())];
            let position = self.place(rng);
            tracks.push(Track::aircraft(next_id(&tracks), position, key));
        }

        self.push_objects(&mut tracks, rng, TrackKind::Drone, &self.profile.drones, "drones")?;
        self.push_objects(
            &mut tracks,
            rng,
            TrackKind::Missile,
            &self.profile.missiles,
            "missiles",
        )?;

        if self.policy == ClassificationPolicy::Cell {
            self.ensure_visible(&mut tracks, rng, TrackKind::Drone, Classification::Drone)?;
            self.ensure_visible(&mut tracks, rng, TrackKind::Missile, Classification::Missile)?;
        }

        debug!(
            "generated {} tracks ({} friendly aircraft)",
            tracks.len(),
            friendly_count
        );
        Ok(tracks)
    }

    fn push_objects(
        &self,
        tracks: &mut Vec<Track>,
        rng: &mut dyn RandomSource,
        kind: TrackKind,
        profile: &ObjectProfile,
        family: &str,
    ) -> RadarResult<()> {
        let (min, max) = profile.count.bounds(family)?;
        for _ in 0..rng.count(min, max) {
            let position = self.place(rng);
            let signature = Signature::new(
                rng.uniform(profile.reflectivity.low, profile.reflectivity.high),
                profile.materials[rng.index(profile.materials.len())],
                profile.geometries[rng.index(profile.geometries.len())],
            );
            tracks.push(Track::non_cooperative(
                next_id(tracks),
                kind,
                position,
                signature,
            )?);
        }
        Ok(())
    }

    /// Injects a labelled track when no in-range track classifies as `wanted`.
    fn ensure_visible(
        &self,
        tracks: &mut Vec<Track>,
        rng: &mut dyn RandomSource,
        kind: TrackKind,
        wanted: Classification,
    ) -> RadarResult<()> {
        let gate = RangeGate::for_radar(self.radar);
        let classifier = Classifier::new(ClassificationPolicy::Cell);
        let present = tracks.iter().any(|track| {
            gate.contains(track.position())
                && track.signature().is_some_and(|signature| {
                    matches!(classifier.classify(signature), Ok(class) if class == wanted)
                })
        });
        if !present {
            let position =
                Placement::Disk.sample(rng, self.radar.position(), self.radar.range_km());
            debug!(
                "no {:?} in range, injecting one at ({:.2}, {:.2})",
                kind, position.x, position.y
            );
            tracks.push(Track::designated(next_id(tracks), kind, position)?);
        }
        Ok(())
    }

    fn place(&self, rng: &mut dyn RandomSource) -> Position {
        self.placement
            .sample(rng, self.radar.position(), self.radar.range_km())
    }
}

fn next_id(tracks: &[Track]) -> u32 {
    tracks.len() as u32 + 1
}
