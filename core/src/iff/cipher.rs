const ALPHABET_LEN: i32 = 26;

/// Case-preserving rotation over the ASCII letters.
///
/// Every key is reduced modulo 26 first, so negative keys and keys of 26 or
/// more behave like their reduced counterpart. Characters other than ASCII
/// letters pass through untouched.
pub struct IdentityCipher;

impl IdentityCipher {
    pub fn encode(text: &str, key: i32) -> String {
        Self::rotate(text, Self::reduce(key))
    }

    pub fn decode(text: &str, key: i32) -> String {
        Self::rotate(text, (ALPHABET_LEN - Self::reduce(key)) % ALPHABET_LEN)
    }

    /// Canonical rotation in `0..26` for any integer key.
    pub fn reduce(key: i32) -> i32 {
        key.rem_euclid(ALPHABET_LEN)
    }

    fn rotate(text: &str, shift: i32) -> String {
        text.chars()
            .map(|c| match c {
                'A'..='Z' => Self::rotate_letter(c, b'A', shift),
                'a'..='z' => Self::rotate_letter(c, b'a', shift),
                other => other,
            })
            .collect()
    }

    fn rotate_letter(c: char, base: u8, shift: i32) -> char {
        let offset = (c as u8 - base) as i32;
        (base + ((offset + shift) % ALPHABET_LEN) as u8) as char
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "THIS IS THE INDIAN SKIES, identify yourself! 0-9 ~";

    #[test]
    fn encode_rotates_letters_by_key() {
        assert_eq!(IdentityCipher::encode("HELLO", 4), "LIPPS");
        assert_eq!(IdentityCipher::encode("xyz", 3), "abc");
        assert_eq!(IdentityCipher::decode("LIPPS", 4), "HELLO");
    }

    #[test]
    fn decode_inverts_encode_for_any_key() {
        for key in [-1000, -27, -26, -1, 0, 1, 4, 7, 9, 25, 26, 27, 52, 1001, i32::MIN, i32::MAX] {
            let encoded = IdentityCipher::encode(SAMPLE, key);
            assert_eq!(IdentityCipher::decode(&encoded, key), SAMPLE, "key {}", key);
        }
    }

    #[test]
    fn keys_behave_like_their_reduction() {
        assert_eq!(
            IdentityCipher::encode(SAMPLE, 30),
            IdentityCipher::encode(SAMPLE, 4)
        );
        assert_eq!(
            IdentityCipher::encode(SAMPLE, -1),
            IdentityCipher::encode(SAMPLE, 25)
        );
        assert_eq!(IdentityCipher::encode(SAMPLE, 26), SAMPLE);
        assert_eq!(IdentityCipher::reduce(-27), 25);
    }

    #[test]
    fn case_and_non_letters_are_preserved() {
        let encoded = IdentityCipher::encode(SAMPLE, 11);
        assert_eq!(encoded.chars().count(), SAMPLE.chars().count());
        for (plain, coded) in SAMPLE.chars().zip(encoded.chars()) {
            if plain.is_ascii_uppercase() {
                assert!(coded.is_ascii_uppercase());
            } else if plain.is_ascii_lowercase() {
                assert!(coded.is_ascii_lowercase());
            } else {
                assert_eq!(plain, coded);
            }
        }
    }

    #[test]
    fn non_ascii_text_passes_through() {
        assert_eq!(IdentityCipher::encode("é Ω 5", 3), "é Ω 5");
    }
}
