//! Filter normalization for encounter requests
//!
//! Clients may omit the creature type filter list entirely. Normalization
//! happens once, at the edge, so every downstream collaborator sees a
//! concrete list and never branches on presence.

/// Resolve an optional filter list into a concrete one.
///
/// An absent list becomes an empty one, meaning "no filtering". A present
/// list passes through untouched, order and duplicates included, so applying
/// this twice changes nothing.
pub fn normalize_filters(filters: Option<Vec<String>>) -> Vec<String> {
    filters.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_filters_become_empty() {
        assert!(normalize_filters(None).is_empty());
    }

    #[test]
    fn test_present_filters_pass_through() {
        let filters = vec!["Undead".to_string(), "Dragon".to_string()];

        let normalized = normalize_filters(Some(filters.clone()));

        assert_eq!(normalized, filters);
    }

    #[test]
    fn test_empty_list_stays_empty() {
        assert!(normalize_filters(Some(Vec::new())).is_empty());
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let once = normalize_filters(Some(vec!["Vermin".to_string(), "Vermin".to_string()]));
        let twice = normalize_filters(Some(once.clone()));

        assert_eq!(once, twice);
    }
}
