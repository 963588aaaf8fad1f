//! Known parameter values for the generator suite
//!
//! These lists mirror the tables the external generators were built from. The
//! gateway serves them to clients so pickers can be populated without
//! hardcoding generator internals on the front end.

/// Environments the encounter generator understands.
pub const ENVIRONMENTS: &[&str] = &[
    "Civilized",
    "Desert",
    "Dungeon",
    "Forest",
    "Hills",
    "Marsh",
    "Mountain",
    "Plains",
];

/// Temperature bands an environment can have.
pub const TEMPERATURES: &[&str] = &["Cold", "Temperate", "Warm"];

/// Times of day an encounter can occur at.
pub const TIMES_OF_DAY: &[&str] = &["Day", "Night"];

/// Creature types accepted as encounter filters.
pub const CREATURE_TYPES: &[&str] = &[
    "Aberration",
    "Animal",
    "Construct",
    "Dragon",
    "Elemental",
    "Fey",
    "Giant",
    "Humanoid",
    "Magical Beast",
    "Monstrous Humanoid",
    "Ooze",
    "Outsider",
    "Plant",
    "Undead",
    "Vermin",
];

/// Power tiers for item generation.
pub const ITEM_POWERS: &[&str] = &["Mundane", "Minor", "Medium", "Major"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(ENVIRONMENTS.len(), 8);
        assert_eq!(TEMPERATURES.len(), 3);
        assert_eq!(TIMES_OF_DAY.len(), 2);
        assert_eq!(CREATURE_TYPES.len(), 15);
        assert_eq!(ITEM_POWERS.len(), 4);
    }

    #[test]
    fn test_catalogs_have_no_duplicates() {
        for catalog in [
            ENVIRONMENTS,
            TEMPERATURES,
            TIMES_OF_DAY,
            CREATURE_TYPES,
            ITEM_POWERS,
        ] {
            let mut seen = std::collections::HashSet::new();
            for entry in catalog {
                assert!(seen.insert(entry), "duplicate catalog entry: {}", entry);
            }
        }
    }
}
