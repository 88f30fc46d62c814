//! Wire-level data transfer objects.
//!
//! Every request and response body exchanged over the HTTP API is defined here. Field
//! names are camelCase on the wire and enumerations use their SCREAMING_SNAKE_CASE names.

pub mod ai;
pub mod api;
pub mod athlete;
pub mod discipline;
pub mod event;
pub mod gameday;
pub mod performance;
pub mod position;
pub mod season;
pub mod sport;
pub mod team;
pub mod venue;

/// A string that does not name any variant of the enumeration it was parsed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl std::fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown value '{}'", self.0)
    }
}

impl std::error::Error for UnknownVariant {}
