//! Domain layer: version maps, change sets and the comparison rules.
pub mod domain;
pub mod policies;
pub mod services;
