//! Fully-resolved encounter generation criteria

use serde::Serialize;

/// The complete set of parameters for one encounter generation or validation
/// call against the external encounter generator.
///
/// `filters` is always concrete: a request with no filters carries an empty
/// list here, never an absence marker, so nothing downstream has to branch on
/// whether filtering was requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncounterCriteria {
    pub environment: String,
    pub level: u32,
    pub temperature: String,
    pub time_of_day: String,
    pub filters: Vec<String>,
}

impl EncounterCriteria {
    pub fn new(
        environment: impl Into<String>,
        level: u32,
        temperature: impl Into<String>,
        time_of_day: impl Into<String>,
        filters: Vec<String>,
    ) -> Self {
        Self {
            environment: environment.into(),
            level,
            temperature: temperature.into(),
            time_of_day: time_of_day.into(),
            filters,
        }
    }
}
