use crate::iff::cipher::IdentityCipher;
use crate::interface::{Category, RadarConfig};

/// Outcome of challenging one aircraft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interrogation {
    pub decoded: String,
    pub category: Category,
}

/// Holds the radar's encoded challenge and judges aircraft replies against it.
#[derive(Debug, Clone)]
pub struct IffInterrogator {
    message: String,
    challenge: String,
}

impl IffInterrogator {
    pub fn new(config: &RadarConfig) -> Self {
        let message = config.challenge_message().to_string();
        let challenge = IdentityCipher::encode(&message, config.challenge_shift());
        Self { message, challenge }
    }

    /// Ciphertext broadcast to every aircraft in range.
    pub fn challenge(&self) -> &str {
        &self.challenge
    }

    /// Decodes the challenge with the aircraft's key; a faithful decode is friendly.
    pub fn interrogate(&self, response_key: i32) -> Interrogation {
        let decoded = IdentityCipher::decode(&self.challenge, response_key);
        let category = if decoded == self.message {
            Category::Friendly
        } else {
            Category::Enemy
        };
        Interrogation { decoded, category }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Position;

    fn interrogator(message: &str, shift: i32) -> IffInterrogator {
        IffInterrogator::new(&RadarConfig::new(Position::ORIGIN, 40.0, message, shift).unwrap())
    }

    #[test]
    fn matching_key_resolves_friendly() {
        let iff = interrogator("HELLO", 4);
        assert_eq!(iff.challenge(), "LIPPS");
        let reply = iff.interrogate(4);
        assert_eq!(reply.decoded, "HELLO");
        assert_eq!(reply.category, Category::Friendly);
    }

    #[test]
    fn every_other_key_resolves_enemy() {
        let iff = interrogator("HELLO", 4);
        for key in (-30..60).filter(|key| IdentityCipher::reduce(*key) != 4) {
            assert_eq!(iff.interrogate(key).category, Category::Enemy, "key {}", key);
        }
    }

    #[test]
    fn congruent_keys_are_the_same_key() {
        let iff = interrogator("HELLO", 4);
        assert_eq!(iff.interrogate(30).category, Category::Friendly);
        assert_eq!(iff.interrogate(-22).category, Category::Friendly);
    }

    #[test]
    fn a_single_letter_is_enough_to_separate_keys() {
        let iff = interrogator("1-2-3 a", 9);
        assert_eq!(iff.interrogate(9).category, Category::Friendly);
        assert_eq!(iff.interrogate(7).category, Category::Enemy);
    }
}
