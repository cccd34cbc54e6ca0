// SPDX-License-Identifier: MPL-2.0
//! Boundary between the controller and the embedded player frame.
//!
//! The frame is a black box reached through a single script-evaluation
//! primitive. Outbound traffic is a [`Command`] rendered to its script
//! form and handed to a [`PlayerBridge`]; inbound traffic is a
//! [`PlayerEvent`] decoded from the frame's JSON messages and pushed
//! through an [`EventSender`]. Hosts implement [`PlayerBridge`] for
//! whatever webview or test double they embed.

mod command;
mod event;

pub use command::Command;
pub use event::PlayerEvent;

use tokio::sync::mpsc;
use tracing::debug;

/// Script evaluation endpoint of the embedded frame.
///
/// Implementations forward the script to the player frame without waiting
/// for a result; anything the player has to say comes back as an event.
pub trait PlayerBridge: Send + Sync {
    /// Evaluates a script inside the player frame. Fire and forget.
    fn evaluate(&self, script: &str);
}

/// Handle for pushing player events into a controller's queue.
///
/// Cloneable and cheap; typically one clone lives in the frame's message
/// handler. Events sent after the controller is disposed are dropped.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<PlayerEvent>,
}

impl EventSender {
    pub(crate) fn new(tx: mpsc::UnboundedSender<PlayerEvent>) -> Self {
        Self { tx }
    }

    /// Queues an event for the controller's next pump.
    pub fn send(&self, event: PlayerEvent) {
        if self.tx.send(event).is_err() {
            debug!("player event dropped, controller queue closed");
        }
    }

    /// Decodes a frame message and queues the result.
    ///
    /// # Errors
    ///
    /// Returns the decoding error for undecodable payloads; nothing is
    /// queued in that case.
    pub fn send_json(&self, payload: &str) -> crate::error::Result<()> {
        self.send(PlayerEvent::from_json(payload)?);
        Ok(())
    }
}
