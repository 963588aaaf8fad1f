//! Item categories emitted by the treasure generator

use serde::{Deserialize, Serialize};

/// The discriminator classifying a generated item.
///
/// The external item generator rolls a category alongside everything else, so
/// a single call can come back with any of these. The gateway never interprets
/// a category beyond comparing it to the one a client asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemCategory {
    AlchemicalItem,
    Armor,
    Potion,
    Ring,
    Rod,
    Scroll,
    Staff,
    Tool,
    Wand,
    Weapon,
    WondrousItem,
}

impl ItemCategory {
    /// Every category the generator suite can emit, in catalog order.
    pub const ALL: [ItemCategory; 11] = [
        ItemCategory::AlchemicalItem,
        ItemCategory::Armor,
        ItemCategory::Potion,
        ItemCategory::Ring,
        ItemCategory::Rod,
        ItemCategory::Scroll,
        ItemCategory::Staff,
        ItemCategory::Tool,
        ItemCategory::Wand,
        ItemCategory::Weapon,
        ItemCategory::WondrousItem,
    ];

    /// Wire spelling of the category, matching its serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::AlchemicalItem => "alchemical-item",
            ItemCategory::Armor => "armor",
            ItemCategory::Potion => "potion",
            ItemCategory::Ring => "ring",
            ItemCategory::Rod => "rod",
            ItemCategory::Scroll => "scroll",
            ItemCategory::Staff => "staff",
            ItemCategory::Tool => "tool",
            ItemCategory::Wand => "wand",
            ItemCategory::Weapon => "weapon",
            ItemCategory::WondrousItem => "wondrous-item",
        }
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
