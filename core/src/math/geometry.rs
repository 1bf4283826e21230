use serde::{Deserialize, Serialize};

/// Planar coordinate in kilometres, relative to the radar origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` km along `angle` radians, measured from `origin`.
    pub fn from_polar(origin: Position, radius: f64, angle: f64) -> Self {
        Self {
            x: origin.x + radius * angle.cos(),
            y: origin.y + radius * angle.sin(),
        }
    }

    /// Euclidean distance between two positions.
    pub fn distance_to(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean_norm() {
        let a = Position::new(3.0, 4.0);
        assert!((a.distance_to(&Position::ORIGIN) - 5.0).abs() < 1e-12);
        let b = Position::new(-1.0, 1.0);
        assert!((b.distance_to(&Position::new(2.0, 5.0)) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn polar_points_land_on_the_requested_radius() {
        let origin = Position::new(10.0, -2.0);
        let point = Position::from_polar(origin, 7.5, 2.1);
        assert!((point.distance_to(&origin) - 7.5).abs() < 1e-9);
    }
}
