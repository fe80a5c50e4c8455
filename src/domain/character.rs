//! Character record and its create shape.

use serde::{Deserialize, Serialize};

/// Store-assigned character identifier.
///
/// Assigned once at creation and never reused or mutated, even after the
/// record is deleted. Serializes transparently as the underlying integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub i64);

impl CharacterId {
    /// Create a CharacterId from a raw integer.
    pub fn new(id: i64) -> Self {
        CharacterId(id)
    }

    /// Get the underlying integer value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted character record.
///
/// Field names double as the JSON wire names and the `characters` column
/// names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Store-assigned identifier.
    pub id: CharacterId,
    /// Character name.
    pub name: String,
    /// Height in centimeters.
    pub height: i64,
    /// Mass in kilograms.
    pub mass: i64,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    /// Birth year (in-universe calendar).
    pub birth_year: i64,
}

/// The create shape: a character before the store has assigned its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCharacter {
    pub name: String,
    pub height: i64,
    pub mass: i64,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: i64,
}

impl NewCharacter {
    /// Combine with a store-assigned id into a full record.
    pub fn with_id(self, id: CharacterId) -> Character {
        Character {
            id,
            name: self.name,
            height: self.height,
            mass: self.mass,
            hair_color: self.hair_color,
            skin_color: self.skin_color,
            eye_color: self.eye_color,
            birth_year: self.birth_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luke() -> NewCharacter {
        NewCharacter {
            name: "Luke".to_string(),
            height: 172,
            mass: 77,
            hair_color: "blond".to_string(),
            skin_color: "fair".to_string(),
            eye_color: "blue".to_string(),
            birth_year: 19,
        }
    }

    #[test]
    fn test_with_id_preserves_all_fields() {
        let character = luke().with_id(CharacterId::new(1));

        assert_eq!(character.id, CharacterId::new(1));
        assert_eq!(character.name, "Luke");
        assert_eq!(character.height, 172);
        assert_eq!(character.mass, 77);
        assert_eq!(character.hair_color, "blond");
        assert_eq!(character.skin_color, "fair");
        assert_eq!(character.eye_color, "blue");
        assert_eq!(character.birth_year, 19);
    }

    #[test]
    fn test_character_id_serializes_as_integer() {
        let character = luke().with_id(CharacterId::new(7));
        let json = serde_json::to_value(&character).unwrap();

        assert_eq!(json["id"], serde_json::json!(7));
    }

    #[test]
    fn test_character_wire_field_names() {
        let character = luke().with_id(CharacterId::new(1));
        let json = serde_json::to_value(&character).unwrap();

        let obj = json.as_object().unwrap();
        for key in [
            "id",
            "name",
            "height",
            "mass",
            "hair_color",
            "skin_color",
            "eye_color",
            "birth_year",
        ] {
            assert!(obj.contains_key(key), "missing wire field: {}", key);
        }
        assert_eq!(obj.len(), 8);
    }

    #[test]
    fn test_new_character_deserializes_from_wire_json() {
        let body = r#"{
            "name": "Luke",
            "height": 172,
            "mass": 77,
            "hair_color": "blond",
            "skin_color": "fair",
            "eye_color": "blue",
            "birth_year": 19
        }"#;

        let parsed: NewCharacter = serde_json::from_str(body).unwrap();
        assert_eq!(parsed, luke());
    }

    #[test]
    fn test_new_character_rejects_missing_field() {
        let body = r#"{"name": "Luke", "height": 172}"#;
        assert!(serde_json::from_str::<NewCharacter>(body).is_err());
    }

    #[test]
    fn test_new_character_rejects_wrong_type() {
        let body = r#"{
            "name": "Luke",
            "height": "tall",
            "mass": 77,
            "hair_color": "blond",
            "skin_color": "fair",
            "eye_color": "blue",
            "birth_year": 19
        }"#;
        assert!(serde_json::from_str::<NewCharacter>(body).is_err());
    }

    #[test]
    fn test_character_roundtrip() {
        let character = luke().with_id(CharacterId::new(42));
        let json = serde_json::to_string(&character).unwrap();
        let back: Character = serde_json::from_str(&json).unwrap();
        assert_eq!(character, back);
    }

    #[test]
    fn test_character_id_display() {
        assert_eq!(CharacterId::new(42).to_string(), "42");
    }

    #[test]
    fn test_character_id_ordering() {
        assert!(CharacterId::new(1) < CharacterId::new(2));
    }
}
