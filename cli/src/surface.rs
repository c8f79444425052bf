//! Terminal implementation of the surface gateway

use std::sync::atomic::{AtomicU64, Ordering};

use bosswatch_core::{ChannelId, GatewayError, MessageId, SurfaceGateway};

/// Prints countdown tables to stdout.
///
/// A terminal cannot lose a published "message", so updates never report
/// the target gone; each refresh simply reprints the table.
pub struct TermSurface {
    next_id: AtomicU64,
}

impl TermSurface {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for TermSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceGateway for TermSurface {
    async fn publish(&self, _channel: ChannelId, text: &str) -> Result<MessageId, GatewayError> {
        println!("{text}");
        Ok(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    async fn update(
        &self,
        _channel: ChannelId,
        _message: MessageId,
        text: &str,
    ) -> Result<(), GatewayError> {
        println!("{text}");
        Ok(())
    }
}
