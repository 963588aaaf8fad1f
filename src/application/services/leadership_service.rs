//! Leadership Service - Application service for leadership generation
//!
//! Delegates leadership, cohort, and follower rolls to the external character
//! generator.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, instrument};

use crate::application::ports::outbound::LeadershipGeneratorPort;
use crate::domain::entities::{Character, Leadership};

/// Service for generating a leader's leadership, cohort, and followers
pub struct LeadershipService<L: LeadershipGeneratorPort> {
    generator: Arc<L>,
}

impl<L: LeadershipGeneratorPort> LeadershipService<L> {
    pub fn new(generator: Arc<L>) -> Self {
        Self { generator }
    }

    /// Generate leadership stats for a leader
    #[instrument(skip(self))]
    pub async fn generate_leadership(
        &self,
        leader_level: u32,
        leader_charisma_bonus: i32,
        leader_animal: &str,
    ) -> Result<Leadership> {
        let leadership = self
            .generator
            .generate_leadership(leader_level, leader_charisma_bonus, leader_animal)
            .await?;

        info!(
            score = leadership.score,
            cohort_score = leadership.cohort_score,
            "Generated leadership for level {} leader",
            leader_level
        );
        Ok(leadership)
    }

    /// Generate a cohort attracted by a leader
    #[instrument(skip(self, leader_alignment, leader_class))]
    pub async fn generate_cohort(
        &self,
        cohort_score: i32,
        leader_level: u32,
        leader_alignment: &str,
        leader_class: &str,
    ) -> Result<Character> {
        let cohort = self
            .generator
            .generate_cohort(cohort_score, leader_level, leader_alignment, leader_class)
            .await?;

        info!(name = %cohort.name, level = cohort.level, "Generated cohort");
        Ok(cohort)
    }

    /// Generate a follower of the given level
    #[instrument(skip(self, leader_alignment, leader_class))]
    pub async fn generate_follower(
        &self,
        follower_level: u32,
        leader_alignment: &str,
        leader_class: &str,
    ) -> Result<Character> {
        let follower = self
            .generator
            .generate_follower(follower_level, leader_alignment, leader_class)
            .await?;

        info!(name = %follower.name, level = follower.level, "Generated follower");
        Ok(follower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::domain::entities::FollowerQuantities;

    /// Generator that records the parameters of the last call.
    #[derive(Default)]
    struct RecordingGenerator {
        leadership_args: Mutex<Option<(u32, i32, String)>>,
        cohort_args: Mutex<Option<(i32, u32, String, String)>>,
        follower_args: Mutex<Option<(u32, String, String)>>,
    }

    #[async_trait::async_trait]
    impl LeadershipGeneratorPort for RecordingGenerator {
        async fn generate_leadership(
            &self,
            leader_level: u32,
            leader_charisma_bonus: i32,
            leader_animal: &str,
        ) -> Result<Leadership> {
            *self.leadership_args.lock().unwrap() =
                Some((leader_level, leader_charisma_bonus, leader_animal.to_string()));
            Ok(Leadership {
                score: 12,
                cohort_score: 10,
                modifiers: vec!["Has a familiar".to_string()],
                follower_quantities: FollowerQuantities {
                    level1: 5,
                    ..FollowerQuantities::default()
                },
            })
        }

        async fn generate_cohort(
            &self,
            cohort_score: i32,
            leader_level: u32,
            leader_alignment: &str,
            leader_class: &str,
        ) -> Result<Character> {
            *self.cohort_args.lock().unwrap() = Some((
                cohort_score,
                leader_level,
                leader_alignment.to_string(),
                leader_class.to_string(),
            ));
            Ok(Character::new("Cohort"))
        }

        async fn generate_follower(
            &self,
            follower_level: u32,
            leader_alignment: &str,
            leader_class: &str,
        ) -> Result<Character> {
            *self.follower_args.lock().unwrap() = Some((
                follower_level,
                leader_alignment.to_string(),
                leader_class.to_string(),
            ));
            Ok(Character::new("Follower"))
        }
    }

    #[tokio::test]
    async fn test_leadership_parameters_pass_through() {
        let generator = Arc::new(RecordingGenerator::default());
        let service = LeadershipService::new(generator.clone());

        let leadership = service
            .generate_leadership(9, 3, "Raven familiar")
            .await
            .unwrap();

        assert_eq!(leadership.score, 12);
        let seen = generator.leadership_args.lock().unwrap().clone().unwrap();
        assert_eq!(seen, (9, 3, "Raven familiar".to_string()));
    }

    #[tokio::test]
    async fn test_cohort_parameters_pass_through() {
        let generator = Arc::new(RecordingGenerator::default());
        let service = LeadershipService::new(generator.clone());

        service
            .generate_cohort(10, 9, "Lawful Good", "Paladin")
            .await
            .unwrap();

        let seen = generator.cohort_args.lock().unwrap().clone().unwrap();
        assert_eq!(
            seen,
            (10, 9, "Lawful Good".to_string(), "Paladin".to_string())
        );
    }

    #[tokio::test]
    async fn test_follower_parameters_pass_through() {
        let generator = Arc::new(RecordingGenerator::default());
        let service = LeadershipService::new(generator.clone());

        service
            .generate_follower(2, "Chaotic Neutral", "Bard")
            .await
            .unwrap();

        let seen = generator.follower_args.lock().unwrap().clone().unwrap();
        assert_eq!(seen, (2, "Chaotic Neutral".to_string(), "Bard".to_string()));
    }
}
