//! Static boss data
//!
//! The field-boss table and the compact display labels derived from it.
//! Data is fixed at compile time; runtime lookup goes through [`crate::catalog::Catalog`].

mod bosses;
mod labels;

pub use bosses::{BOSS_DATA, BossEntry};
pub use labels::{compact_name, short_location};
