use rand::{rngs::StdRng, Rng};

/// Source of uniform samples for scenario generation.
///
/// Only the generator draws randomness; the engine never sees this trait.
pub trait RandomSource {
    /// Next sample, uniform in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform between `low` and `high`; a zero-width band yields `low`.
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_unit()
    }

    /// Uniform index in `0..len`; `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        ((self.next_unit() * len as f64) as usize).min(len.saturating_sub(1))
    }

    /// Uniform integer in `min..=max`.
    fn count(&mut self, min: usize, max: usize) -> usize {
        min + self.index(max - min + 1)
    }
}

impl RandomSource for StdRng {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.gen_range(low..=high)
    }

    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn count(&mut self, min: usize, max: usize) -> usize {
        self.gen_range(min..=max)
    }
}

/// Replays a fixed list of unit samples, cycling when exhausted.
#[cfg(test)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty());
        Self { values, cursor: 0 }
    }
}

#[cfg(test)]
impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn derived_draws_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let value = rng.uniform(-40.0, 40.0);
            assert!((-40.0..=40.0).contains(&value));
            assert!(rng.index(3) < 3);
            assert!((1..=5).contains(&rng.count(1, 5)));
        }
    }

    #[test]
    fn zero_width_draws_collapse_to_the_bound() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(rng.uniform(0.25, 0.25), 0.25);
        assert_eq!(rng.count(3, 3), 3);
        assert_eq!(rng.index(1), 0);
    }

    #[test]
    fn sequence_source_maps_units_onto_ranges() {
        let mut source = SequenceSource::new(vec![0.0, 0.5, 0.999]);
        assert_eq!(source.count(1, 5), 1);
        assert_eq!(source.uniform(10.0, 20.0), 15.0);
        assert_eq!(source.index(3), 2);
        assert_eq!(source.count(2, 2), 2);
    }
}
