use serde::{Deserialize, Serialize};

use crate::domain::entities::Treasure;
use crate::domain::value_objects::{ItemCategory, ITEM_POWERS};

#[derive(Debug, Deserialize)]
pub struct GenerateTreasureRequestDto {
    pub level: u32,
}

#[derive(Debug, Deserialize)]
pub struct GenerateItemRequestDto {
    pub power: String,
}

/// Envelope for every treasure-producing endpoint. Single items ride inside
/// a hoard that contains nothing else, so clients parse one shape.
#[derive(Debug, Serialize)]
pub struct TreasureResponseDto {
    pub treasure: Treasure,
}

impl From<Treasure> for TreasureResponseDto {
    fn from(treasure: Treasure) -> Self {
        Self { treasure }
    }
}

#[derive(Debug, Serialize)]
pub struct TreasureOptionsDto {
    pub powers: Vec<String>,
    pub item_categories: Vec<String>,
}

impl TreasureOptionsDto {
    pub fn current() -> Self {
        Self {
            powers: ITEM_POWERS.iter().map(|p| p.to_string()).collect(),
            item_categories: ItemCategory::ALL
                .iter()
                .map(|c| c.as_str().to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Item;

    #[test]
    fn test_envelope_has_exactly_one_field_named_treasure() {
        let response = TreasureResponseDto::from(Treasure::default());

        let json = serde_json::to_value(&response).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 1);
        assert!(object.contains_key("treasure"));
    }

    #[test]
    fn test_single_item_rides_in_an_otherwise_empty_hoard() {
        let item = Item::new("Scroll of Haste", ItemCategory::Scroll);
        let response = TreasureResponseDto::from(Treasure::of_item(item));

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["treasure"]["items"].as_array().unwrap().len(), 1);
        assert_eq!(json["treasure"]["items"][0]["name"], "Scroll of Haste");
        assert_eq!(json["treasure"]["goods"].as_array().unwrap().len(), 0);
        assert_eq!(json["treasure"]["coin"]["quantity"], 0);
    }

    #[test]
    fn test_options_list_every_power_and_category() {
        let options = TreasureOptionsDto::current();

        assert_eq!(options.powers.len(), 4);
        assert_eq!(options.item_categories.len(), 11);
        assert!(options.item_categories.contains(&"wondrous-item".to_string()));
    }
}
