use crate::math::Position;
use crate::processing::ClassificationPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Final category assigned to an in-range track.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Friendly,
    Enemy,
    Drone,
    Missile,
    FighterJet,
    Unknown,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Friendly,
        Category::Enemy,
        Category::Drone,
        Category::Missile,
        Category::FighterJet,
        Category::Unknown,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Friendly => "Friendly Jet",
            Category::Enemy => "Enemy Jet",
            Category::Drone => "Drone",
            Category::Missile => "Missile",
            Category::FighterJet => "Fighter Jet",
            Category::Unknown => "Unknown Object",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Simplified detection record emitted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectionResult {
    pub track_id: u32,
    pub category: Category,
    pub position: Position,
    /// Radar position the distance is measured from.
    pub origin: Position,
}

impl DetectionResult {
    pub fn new(track_id: u32, category: Category, position: Position, origin: Position) -> Self {
        Self {
            track_id,
            category,
            position,
            origin,
        }
    }

    pub fn distance_from_radar(&self) -> f64 {
        self.position.distance_to(&self.origin)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryCounts {
    pub friendly: usize,
    pub enemy: usize,
    pub drone: usize,
    pub missile: usize,
    pub fighter_jet: usize,
    pub unknown: usize,
}

impl CategoryCounts {
    pub fn record(&mut self, category: Category) {
        *self.slot(category) += 1;
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Friendly => self.friendly,
            Category::Enemy => self.enemy,
            Category::Drone => self.drone,
            Category::Missile => self.missile,
            Category::FighterJet => self.fighter_jet,
            Category::Unknown => self.unknown,
        }
    }

    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|category| self.get(*category)).sum()
    }

    fn slot(&mut self, category: Category) -> &mut usize {
        match category {
            Category::Friendly => &mut self.friendly,
            Category::Enemy => &mut self.enemy,
            Category::Drone => &mut self.drone,
            Category::Missile => &mut self.missile,
            Category::FighterJet => &mut self.fighter_jet,
            Category::Unknown => &mut self.unknown,
        }
    }
}

impl fmt::Display for CategoryCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Friendly Jets: {}", self.friendly)?;
        writeln!(f, "Enemy Jets: {}", self.enemy)?;
        writeln!(f, "Drones: {}", self.drone)?;
        writeln!(f, "Missiles: {}", self.missile)?;
        writeln!(f, "Fighter Jets: {}", self.fighter_jet)?;
        write!(f, "Unknown: {}", self.unknown)
    }
}

/// Everything a single run produced, in a form renderers can consume as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectionReport {
    /// Challenge ciphertext broadcast to aircraft.
    pub challenge: String,
    pub radar_position: Position,
    pub range_km: f64,
    pub policy: ClassificationPolicy,
    /// Tracks presented to the engine, in or out of range.
    pub scanned: usize,
    pub detections: Vec<DetectionResult>,
    pub counts: CategoryCounts,
}

impl DetectionReport {
    pub fn count(&self, category: Category) -> usize {
        self.counts.get(category)
    }

    pub fn of_category(&self, category: Category) -> impl Iterator<Item = &DetectionResult> {
        self.detections
            .iter()
            .filter(move |detection| detection.category == category)
    }
}
