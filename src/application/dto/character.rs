use serde::Serialize;

use crate::domain::entities::{Ability, Character, Feat, Skill};
use crate::domain::services::{canonicalize, canonicalize_map};

/// Wire representation of a generated character.
///
/// Conversion from the domain entity is where presentation order is imposed:
/// skills and feats are sorted by (name, focus) and the ability map flattens
/// into a sequence in ability-name order. The conversion changes arrangement
/// only, never content.
#[derive(Debug, Serialize)]
pub struct CharacterDto {
    pub name: String,
    pub alignment: String,
    pub class_name: String,
    pub race: String,
    pub level: u32,
    pub hit_points: i32,
    pub abilities: Vec<AbilityDto>,
    pub skills: Vec<SkillDto>,
    pub feats: Vec<FeatDto>,
    pub languages: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AbilityDto {
    pub name: String,
    pub score: i32,
    pub modifier: i32,
}

#[derive(Debug, Serialize)]
pub struct SkillDto {
    pub name: String,
    pub focus: Option<String>,
    pub base_ability: String,
    pub ranks: i32,
    pub bonus: i32,
    pub class_skill: bool,
}

#[derive(Debug, Serialize)]
pub struct FeatDto {
    pub name: String,
    pub focus: Option<String>,
    pub power: Option<i32>,
}

impl From<Character> for CharacterDto {
    fn from(character: Character) -> Self {
        Self {
            name: character.name,
            alignment: character.alignment,
            class_name: character.class_name,
            race: character.race,
            level: character.level,
            hit_points: character.hit_points,
            abilities: canonicalize_map(character.abilities)
                .into_iter()
                .map(|(name, ability)| AbilityDto::named(name, ability))
                .collect(),
            skills: canonicalize(character.skills)
                .into_iter()
                .map(SkillDto::from)
                .collect(),
            feats: canonicalize(character.feats)
                .into_iter()
                .map(FeatDto::from)
                .collect(),
            languages: character.languages,
        }
    }
}

impl AbilityDto {
    fn named(name: String, ability: Ability) -> Self {
        Self {
            name,
            score: ability.score,
            modifier: ability.modifier,
        }
    }
}

impl From<Skill> for SkillDto {
    fn from(skill: Skill) -> Self {
        Self {
            name: skill.name,
            focus: skill.focus,
            base_ability: skill.base_ability,
            ranks: skill.ranks,
            bonus: skill.bonus,
            class_skill: skill.class_skill,
        }
    }
}

impl From<Feat> for FeatDto {
    fn from(feat: Feat) -> Self {
        Self {
            name: feat.name,
            focus: feat.focus,
            power: feat.power,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_come_out_in_name_then_focus_order() {
        let character = Character::new("Tordek").with_skills(vec![
            Skill::new("zzzz", "Strength"),
            Skill::new("aaaa", "Intelligence").with_focus("ccccc"),
            Skill::new("kkkk", "Wisdom"),
            Skill::new("aaaa", "Intelligence").with_focus("bbbbb"),
        ]);

        let dto = CharacterDto::from(character);

        let keys: Vec<(&str, Option<&str>)> = dto
            .skills
            .iter()
            .map(|s| (s.name.as_str(), s.focus.as_deref()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("aaaa", Some("bbbbb")),
                ("aaaa", Some("ccccc")),
                ("kkkk", None),
                ("zzzz", None),
            ]
        );
    }

    #[test]
    fn test_feats_come_out_in_name_then_focus_order() {
        let character = Character::new("Mialee").with_feats(vec![
            Feat::new("zzzz"),
            Feat::new("aaa"),
            Feat::new("kkkk"),
        ]);

        let dto = CharacterDto::from(character);

        let names: Vec<&str> = dto.feats.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["aaa", "kkkk", "zzzz"]);
    }

    #[test]
    fn test_ability_map_flattens_in_name_order() {
        let character = Character::new("Regdar")
            .with_ability(
                "Strength",
                Ability {
                    score: 17,
                    modifier: 3,
                },
            )
            .with_ability(
                "Charisma",
                Ability {
                    score: 8,
                    modifier: -1,
                },
            )
            .with_ability(
                "Wisdom",
                Ability {
                    score: 12,
                    modifier: 1,
                },
            );

        let dto = CharacterDto::from(character);

        let names: Vec<&str> = dto.abilities.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Charisma", "Strength", "Wisdom"]);
        assert_eq!(dto.abilities[1].score, 17);
    }

    #[test]
    fn test_conversion_rearranges_without_dropping_anything() {
        let character = Character::new("Lidda")
            .with_skills(vec![
                Skill::new("Hide", "Dexterity"),
                Skill::new("Appraise", "Intelligence"),
            ])
            .with_feats(vec![Feat::new("Dodge")]);

        let dto = CharacterDto::from(character);

        assert_eq!(dto.name, "Lidda");
        assert_eq!(dto.skills.len(), 2);
        assert_eq!(dto.feats.len(), 1);
    }

    #[test]
    fn test_languages_pass_through_in_generator_order() {
        let mut character = Character::new("Jozan");
        character.languages = vec!["Common".to_string(), "Celestial".to_string()];

        let dto = CharacterDto::from(character);

        assert_eq!(dto.languages, vec!["Common", "Celestial"]);
    }
}
