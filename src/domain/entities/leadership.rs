//! Leadership payloads produced by the character generator

use serde::{Deserialize, Serialize};

/// The leadership stats a leader character commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leadership {
    pub score: i32,
    /// Score used when attracting a cohort, after modifiers.
    pub cohort_score: i32,
    /// Human-readable modifier explanations, like a reputation of cruelty.
    pub modifiers: Vec<String>,
    pub follower_quantities: FollowerQuantities,
}

/// How many followers of each level a leader attracts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FollowerQuantities {
    pub level1: u32,
    pub level2: u32,
    pub level3: u32,
    pub level4: u32,
    pub level5: u32,
    pub level6: u32,
}
