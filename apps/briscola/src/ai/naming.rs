//! Random names for the computer opponent.

use rand::Rng;

const CONSONANTS: &[u8] = b"BCDFGHJKLMNPQRSTVWXYZ";
const VOWELS: &[u8] = b"AEIOU";

fn pick<R: Rng + ?Sized>(rng: &mut R, letters: &[u8]) -> char {
    char::from(letters[rng.random_range(0..letters.len())])
}

/// `AI-` followed by three consonant-vowel pairs, title-cased (`AI-Bakodu`).
pub fn generate_ai_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let consonants: [char; 3] = std::array::from_fn(|_| pick(&mut *rng, CONSONANTS));
    let vowels: [char; 3] = std::array::from_fn(|_| pick(&mut *rng, VOWELS));

    let mut name = String::from("AI-");
    for (i, (c, v)) in consonants.into_iter().zip(vowels).enumerate() {
        name.push(if i == 0 { c } else { c.to_ascii_lowercase() });
        name.push(v.to_ascii_lowercase());
    }
    name
}
