//! Respawn scheduling
//!
//! This module provides:
//! - **Policies**: parsed forms of the raw respawn rules in the boss table
//! - **Next-occurrence math**: fixed-interval arithmetic and weekly-slot
//!   selection with the force-to-next-week tie-break
//! - **`TimeLeft`**: the countdown value rendered in the live table

mod policy;


pub use policy::{RespawnPolicy, SpawnSlot, TimeLeft};
