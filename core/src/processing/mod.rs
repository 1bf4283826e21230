pub mod classifier;
pub mod engine;
pub mod range;

pub use classifier::{Classification, ClassificationPolicy, Classifier};
pub use engine::DetectionEngine;
pub use range::{RadarEquation, RangeGate, RangeModel};
