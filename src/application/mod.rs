//! Application layer: batch orchestration over the domain constructors.
//!
//! `PaymentProcessor` feeds reader output and ad-hoc values through the smart
//! constructors and writes whatever survives to a report.

pub mod processor;
