pub mod geometry;
pub mod units;

pub use geometry::Position;
pub use units::DecibelHelper;
