//! Display surface interface

use std::future::Future;

use thiserror::Error;

/// Identifies a display surface (a channel, window, or terminal)
pub type ChannelId = u64;

/// Identifies a published message on a surface
pub type MessageId = u64;

/// Errors pushing to a display surface
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The target message or channel no longer exists; the subscription
    /// should be dropped permanently.
    #[error("target message or channel no longer exists")]
    Gone,

    /// Anything else; the subscription stays and the next tick retries.
    #[error("surface push failed: {reason}")]
    Transient { reason: String },
}

/// Interface to the system that owns the display surfaces.
///
/// Futures must be `Send` so the refresh loop can run on the runtime's
/// worker threads.
pub trait SurfaceGateway: Send + Sync + 'static {
    /// Publish a new message, returning its identifier for later updates.
    fn publish(
        &self,
        channel: ChannelId,
        text: &str,
    ) -> impl Future<Output = Result<MessageId, GatewayError>> + Send;

    /// Replace the content of a previously published message.
    fn update(
        &self,
        channel: ChannelId,
        message: MessageId,
        text: &str,
    ) -> impl Future<Output = Result<(), GatewayError>> + Send;
}
