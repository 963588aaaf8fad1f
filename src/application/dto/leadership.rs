use serde::{Deserialize, Serialize};

use crate::application::dto::CharacterDto;
use crate::domain::entities::{Character, Leadership};

#[derive(Debug, Deserialize)]
pub struct LeadershipRequestDto {
    pub leader_level: u32,
    pub leader_charisma_bonus: i32,
    #[serde(default)]
    pub leader_animal: String,
}

#[derive(Debug, Deserialize)]
pub struct CohortRequestDto {
    pub cohort_score: i32,
    pub leader_level: u32,
    pub leader_alignment: String,
    pub leader_class: String,
}

#[derive(Debug, Deserialize)]
pub struct FollowerRequestDto {
    pub follower_level: u32,
    pub leader_alignment: String,
    pub leader_class: String,
}

/// Envelope for leadership generation.
#[derive(Debug, Serialize)]
pub struct LeadershipResponseDto {
    pub leadership: Leadership,
}

impl From<Leadership> for LeadershipResponseDto {
    fn from(leadership: Leadership) -> Self {
        Self { leadership }
    }
}

/// Envelope for cohort generation.
#[derive(Debug, Serialize)]
pub struct CohortResponseDto {
    pub cohort: CharacterDto,
}

impl From<Character> for CohortResponseDto {
    fn from(character: Character) -> Self {
        Self {
            cohort: CharacterDto::from(character),
        }
    }
}

/// Envelope for follower generation.
#[derive(Debug, Serialize)]
pub struct FollowerResponseDto {
    pub follower: CharacterDto,
}

impl From<Character> for FollowerResponseDto {
    fn from(character: Character) -> Self {
        Self {
            follower: CharacterDto::from(character),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{FollowerQuantities, Skill};

    fn leadership() -> Leadership {
        Leadership {
            score: 14,
            cohort_score: 12,
            modifiers: vec!["Great renown".to_string()],
            follower_quantities: FollowerQuantities {
                level1: 20,
                level2: 2,
                ..FollowerQuantities::default()
            },
        }
    }

    #[test]
    fn test_leadership_envelope_has_exactly_one_field() {
        let json = serde_json::to_value(LeadershipResponseDto::from(leadership())).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 1);
        assert_eq!(json["leadership"]["score"], 14);
    }

    #[test]
    fn test_cohort_envelope_names_its_field_cohort() {
        let cohort = Character::new("Meepo").with_skills(vec![
            Skill::new("Craft", "Intelligence").with_focus("trapmaking"),
            Skill::new("Craft", "Intelligence").with_focus("alchemy"),
        ]);

        let json = serde_json::to_value(CohortResponseDto::from(cohort)).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 1);
        assert_eq!(json["cohort"]["name"], "Meepo");
        // Ordering applies on the way into the envelope.
        assert_eq!(json["cohort"]["skills"][0]["focus"], "alchemy");
    }

    #[test]
    fn test_follower_envelope_names_its_field_follower() {
        let json =
            serde_json::to_value(FollowerResponseDto::from(Character::new("Kip"))).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 1);
        assert_eq!(json["follower"]["name"], "Kip");
    }

    #[test]
    fn test_cohort_request_parses_all_fields() {
        let request: CohortRequestDto = serde_json::from_str(
            r#"{"cohort_score":10,"leader_level":9,"leader_alignment":"Neutral Good","leader_class":"Cleric"}"#,
        )
        .unwrap();

        assert_eq!(request.cohort_score, 10);
        assert_eq!(request.leader_level, 9);
        assert_eq!(request.leader_alignment, "Neutral Good");
        assert_eq!(request.leader_class, "Cleric");
    }

    #[test]
    fn test_leadership_request_animal_defaults_to_empty() {
        let request: LeadershipRequestDto =
            serde_json::from_str(r#"{"leader_level":6,"leader_charisma_bonus":1}"#).unwrap();

        assert_eq!(request.leader_animal, "");
    }
}
