//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `tour.rs` — list/show/tour over the lesson catalog.
//! - `playground.rs` — sum-by/leap/add/config on user input.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate lesson logic to `services/*`.
//! - Each handler returns `Ok(false)` for commands it does not own.
//! - Keep behavior and output schema stable.

pub mod playground;
pub mod tour;

pub use playground::handle_playground_commands;
pub use tour::handle_tour_commands;
