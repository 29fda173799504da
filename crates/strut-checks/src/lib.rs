//! Convention enforcement engine for strut.
//!
//! Validates a resolved program snapshot and produces diagnostics:
//! - layer-dependency: disallowed import edges between architectural groups
//! - configure-receiver: configure routines declared without a receiver
//! - inject-receiver: inject routines with a value receiver (auto-fixable)
//! - binding-conformance: binding targets incompatible with their contract
//! - inject-tags: empty or unconsumed injectable-field tags

pub mod conformance;
pub mod engine;
pub mod extract;
pub mod layers;
pub mod paths;
pub mod receivers;
pub mod result;
pub mod routines;
pub mod tags;
