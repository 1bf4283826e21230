pub mod detection;
pub mod radar;
pub mod track;

pub use detection::{Category, CategoryCounts, DetectionReport, DetectionResult};
pub use radar::RadarConfig;
pub use track::{Geometry, Material, Signature, Track, TrackKind, TrackReturn};
