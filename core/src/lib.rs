//! Detection-and-classification engine for the ground radar simulator.
//!
//! Synthetic tracks go in; a range-filtered report comes out, with aircraft
//! resolved by an IFF challenge and skin returns classified from their
//! physical attributes. Nothing here draws random numbers or performs I/O.

pub mod iff;
pub mod interface;
pub mod math;
pub mod prelude;
pub mod processing;
pub mod telemetry;

pub use prelude::{RadarError, RadarResult};
