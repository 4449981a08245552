// src/filter.rs
//
// Record predicate: case-sensitive substring match on one field.
// Free-text substring matching can over- or under-match (a fallback
// attribution paragraph that merely mentions a name still passes).

use crate::store::Record;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Predicate {
    /// Every record passes.
    Any,
    /// `field` is present and contains `needle`.
    Contains { field: String, needle: String },
}

impl Predicate {
    pub fn contains(field: impl Into<String>, needle: impl Into<String>) -> Self {
        Self::Contains { field: field.into(), needle: needle.into() }
    }

    /// `Any` when no target is configured.
    pub fn from_target(field: &str, target: Option<&str>) -> Self {
        match target {
            Some(t) => Self::contains(field, t),
            None => Self::Any,
        }
    }
}

pub fn accept(record: &Record, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::Any => true,
        Predicate::Contains { field, needle } => record
            .field(field)
            .is_some_and(|v| v.contains(needle.as_str())),
    }
}
