//! Domain services - Pure business logic operations

mod canonical;

pub use canonical::{canonical_order, canonicalize, canonicalize_map, NamedEntity};
