//! Character payloads produced by the character generator

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A generated character: an encounter NPC, a cohort, or a follower.
///
/// Collections arrive from the generator in table order, which varies call to
/// call. Presentation ordering is applied when a character leaves the gateway,
/// never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub alignment: String,
    pub class_name: String,
    pub race: String,
    pub level: u32,
    pub hit_points: i32,
    /// Ability blocks keyed by ability name. The map is the internal
    /// representation; its iteration order is never exposed.
    pub abilities: HashMap<String, Ability>,
    pub skills: Vec<Skill>,
    pub feats: Vec<Feat>,
    pub languages: Vec<String>,
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alignment: String::new(),
            class_name: String::new(),
            race: String::new(),
            level: 1,
            hit_points: 0,
            abilities: HashMap::new(),
            skills: Vec::new(),
            feats: Vec::new(),
            languages: Vec::new(),
        }
    }

    pub fn with_skills(mut self, skills: Vec<Skill>) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_feats(mut self, feats: Vec<Feat>) -> Self {
        self.feats = feats;
        self
    }

    pub fn with_ability(mut self, name: impl Into<String>, ability: Ability) -> Self {
        self.abilities.insert(name.into(), ability);
        self
    }
}

/// An ability score block. The ability's name lives in the character's map
/// key, not here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub score: i32,
    pub modifier: i32,
}

/// A trained skill. Skills sharing a name are told apart by focus, like
/// Craft with an alchemy focus versus Craft with a weaponsmithing focus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub focus: Option<String>,
    pub base_ability: String,
    pub ranks: i32,
    pub bonus: i32,
    pub class_skill: bool,
}

impl Skill {
    pub fn new(name: impl Into<String>, base_ability: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            focus: None,
            base_ability: base_ability.into(),
            ranks: 0,
            bonus: 0,
            class_skill: false,
        }
    }

    pub fn with_focus(mut self, focus: impl Into<String>) -> Self {
        self.focus = Some(focus.into());
        self
    }
}

/// A feat, optionally narrowed to a focus such as a chosen weapon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feat {
    pub name: String,
    pub focus: Option<String>,
    pub power: Option<i32>,
}

impl Feat {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            focus: None,
            power: None,
        }
    }

    pub fn with_focus(mut self, focus: impl Into<String>) -> Self {
        self.focus = Some(focus.into());
        self
    }
}
