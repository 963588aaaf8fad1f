//! Treasure payloads produced by the treasure generator

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ItemCategory;

/// A single generated item.
///
/// Everything except `category` is opaque to the gateway and passes through
/// to clients untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub category: ItemCategory,
    pub quantity: u32,
    pub is_magical: bool,
    pub traits: Vec<String>,
    /// Spells held by scrolls and other containers.
    pub contents: Vec<String>,
    pub charges: Option<u32>,
}

impl Item {
    pub fn new(name: impl Into<String>, category: ItemCategory) -> Self {
        Self {
            name: name.into(),
            category,
            quantity: 1,
            is_magical: false,
            traits: Vec::new(),
            contents: Vec::new(),
            charges: None,
        }
    }
}

/// A pile of coins of one currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub currency: String,
    pub quantity: u64,
}

/// A non-item valuable such as a gem or an art object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Good {
    pub description: String,
    pub value_in_gold: u64,
}

/// A complete treasure hoard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Treasure {
    pub coin: Coin,
    pub goods: Vec<Good>,
    pub items: Vec<Item>,
}

impl Treasure {
    /// Wrap a single item in an otherwise empty hoard.
    pub fn of_item(item: Item) -> Self {
        Self {
            items: vec![item],
            ..Self::default()
        }
    }
}
