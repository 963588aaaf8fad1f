//! Domain entities - Content payloads returned by the generator suite

mod character;
mod encounter;
mod item;
mod leadership;

pub use character::{Ability, Character, Feat, Skill};
pub use encounter::{Creature, Encounter};
pub use item::{Coin, Good, Item, Treasure};
pub use leadership::{FollowerQuantities, Leadership};
