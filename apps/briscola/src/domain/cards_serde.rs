//! Cards serialize as their two-character code (`"3D"`, `"0S"`), the same
//! text the match log and the status prompt use.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::Card;

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct CardCode;

impl Visitor<'_> for CardCode {
    type Value = Card;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a card code such as \"AB\" or \"0D\"")
    }

    fn visit_str<E: de::Error>(self, code: &str) -> Result<Card, E> {
        code.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(CardCode)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{Card, Rank, Suit};

    #[test]
    fn card_travels_as_its_code() {
        let card = Card::new(Rank::Knight, Suit::Swords);
        assert_eq!(serde_json::to_string(&card).unwrap(), "\"9S\"");
        let back: Card = serde_json::from_str("\"9S\"").unwrap();
        assert_eq!(back, card);
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert!(serde_json::from_str::<Card>("\"1X\"").is_err());
        assert!(serde_json::from_str::<Card>("7").is_err());
    }
}
