//! Live countdown surfaces
//!
//! This module provides:
//! - **`SurfaceGateway`**: the interface a frontend implements to publish
//!   and update countdown messages on its display surface
//! - **`LiveRegistry`**: the set of active subscriptions, safe to mutate
//!   while the refresh loop iterates a snapshot
//! - **`LiveBoard`**: the periodic re-render + push driver
//!
//! One background task drives all surfaces. A failing surface never blocks
//! the others: "target gone" removes the subscription, anything else is
//! logged and retried naturally on the next tick.

mod board;
mod error;
mod gateway;
mod registry;

#[cfg(test)]
mod tests;

pub use board::LiveBoard;
pub use error::LiveError;
pub use gateway::{ChannelId, GatewayError, MessageId, SurfaceGateway};
pub use registry::LiveRegistry;
