//! Shared data model layer (structs/enums only).
//!
//! ## Purpose
//! - Keep lesson ids, report DTOs and records in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — lesson ids, reports, small records used by lessons.
//! - `error.rs` — `TourError`, the typed error for lesson-level failures.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no printing, no config lookups.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs.
//! Keep them synchronized with `docs/contracts/*`.

pub mod error;
pub mod models;
