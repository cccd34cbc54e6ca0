// SPDX-License-Identifier: MPL-2.0
//! Playback state tracking for an embedded player session.

mod controller;
mod listeners;
mod rate;
mod snapshot;
mod state;

pub use controller::PlaybackController;
pub use listeners::ListenerId;
pub use rate::PlaybackRate;
pub use snapshot::{PlaybackSnapshot, SnapshotPatch};
pub use state::PlayerState;
