//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so infrastructure (HTTP) can
//! serialize/deserialize without pulling presentation concerns into the
//! domain model. Conversions into response DTOs are where canonical
//! presentation ordering is applied.

pub mod character;
pub mod encounter;
pub mod leadership;
pub mod treasure;

pub use character::{AbilityDto, CharacterDto, FeatDto, SkillDto};
pub use encounter::{
    EncounterDto, EncounterOptionsDto, EncounterRequestDto, EncounterResponseDto,
    ValidationResponseDto,
};
pub use leadership::{
    CohortRequestDto, CohortResponseDto, FollowerRequestDto, FollowerResponseDto,
    LeadershipRequestDto, LeadershipResponseDto,
};
pub use treasure::{
    GenerateItemRequestDto, GenerateTreasureRequestDto, TreasureOptionsDto, TreasureResponseDto,
};
