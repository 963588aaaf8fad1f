//! Value objects - Immutable objects defined by their attributes

mod catalogs;
mod encounter_criteria;
mod item_category;

pub use catalogs::{CREATURE_TYPES, ENVIRONMENTS, ITEM_POWERS, TEMPERATURES, TIMES_OF_DAY};
pub use encounter_criteria::EncounterCriteria;
pub use item_category::ItemCategory;
