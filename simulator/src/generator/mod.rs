pub mod placement;
pub mod profile;
pub mod random;
pub mod tracks;
