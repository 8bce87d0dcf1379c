//! Service layer containing the lessons and their helpers.
//!
//! ## Service map
//! - `lessons.rs` — lesson catalog, single-lesson and full-tour runners.
//! - `words.rs` — word filtering and comparator-driven sorting.
//! - `iteration.rs` — each/each-pair/times/leap-years/with-index helpers.
//! - `reduce.rs` — map and seedless reduction (`inject`).
//! - `my_list.rs` — list wrapper taking a caller-supplied transformation.
//! - `sum_by_ext.rs` — the same reduction as a scoped extension trait.
//! - `block_given.rs` — behavior conditional on a closure being passed.
//! - `dynamic.rs` — loosely typed values and the type-mismatch error.
//! - `template.rs` — rendering rows through a closure.
//! - `config.rs` — layered TOML/env configuration.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Lessons are pure: they return lines, they never print.
//! - Printing happens in `output.rs`, called from command handlers.

pub mod block_given;
pub mod config;
pub mod dynamic;
pub mod iteration;
pub mod lessons;
pub mod my_list;
pub mod output;
pub mod reduce;
pub mod sum_by_ext;
pub mod template;
pub mod words;
