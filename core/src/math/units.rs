pub struct DecibelHelper;

impl DecibelHelper {
    /// Converts a power ratio in dB to its linear value, `10^(dB/10)`.
    pub fn to_linear(db: f64) -> f64 {
        10f64.powf(db / 10.0)
    }
}
