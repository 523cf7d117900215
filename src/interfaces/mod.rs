//! Adapters between the domain types and the outside world.

pub mod csv;
pub mod report;
