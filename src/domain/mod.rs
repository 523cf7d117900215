//! Domain layer: value types that can only be built in a valid state.

pub mod bounded;
pub mod card;
pub mod constraint;
pub mod payment;
pub mod person;
