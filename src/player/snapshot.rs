// SPDX-License-Identifier: MPL-2.0
//! Published playback state.
//!
//! A [`PlaybackSnapshot`] is replaced wholesale on every change; subscribers
//! receive a reference to the new value and never observe a partial update.
//! [`SnapshotPatch`] is the copy-with form the controller builds for each
//! mutation, with unset fields inheriting the previous snapshot.

use super::state::PlayerState;
use crate::config::defaults::{DEFAULT_PLAYBACK_RATE, DEFAULT_VOLUME};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Immutable snapshot of one playback session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaybackSnapshot {
    /// The embedded player object finished constructing.
    pub is_ready: bool,
    /// The script evaluation channel is usable.
    pub is_evaluation_ready: bool,
    /// At least one state report arrived, so a video is loaded.
    pub is_loaded: bool,
    /// Playback has started at least once this session. Sticky.
    pub has_played: bool,
    /// Total duration reported by the player.
    pub duration: Duration,
    /// Current playback position.
    pub position: Duration,
    /// Buffered share of the video, `0.0..=1.0`.
    pub buffered_fraction: f64,
    /// The player is actively playing right now.
    pub is_playing: bool,
    /// The host shows the player fullscreen.
    pub is_full_screen: bool,
    /// On-screen controls are currently shown.
    pub is_controls_visible: bool,
    /// Player volume, `0..=100`.
    pub volume: u8,
    /// Last state code reported by the player.
    pub player_state: PlayerState,
    /// Last rate multiplier reported by the player.
    pub playback_rate: f64,
    /// Last error code reported by the player, `0` when none.
    pub error_code: i32,
}

impl Default for PlaybackSnapshot {
    fn default() -> Self {
        Self {
            is_ready: false,
            is_evaluation_ready: false,
            is_loaded: false,
            has_played: false,
            duration: Duration::ZERO,
            position: Duration::ZERO,
            buffered_fraction: 0.0,
            is_playing: false,
            is_full_screen: false,
            is_controls_visible: false,
            volume: DEFAULT_VOLUME,
            player_state: PlayerState::Unknown,
            playback_rate: DEFAULT_PLAYBACK_RATE,
            error_code: 0,
        }
    }
}

impl PlaybackSnapshot {
    /// True when the player reported a nonzero error code.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error_code != 0
    }

    /// Returns a new snapshot with the patch applied.
    /// Unset patch fields inherit the current value.
    #[must_use]
    pub fn merge(&self, patch: SnapshotPatch) -> Self {
        Self {
            is_ready: patch.is_ready.unwrap_or(self.is_ready),
            is_evaluation_ready: patch.is_evaluation_ready.unwrap_or(self.is_evaluation_ready),
            is_loaded: patch.is_loaded.unwrap_or(self.is_loaded),
            has_played: patch.has_played.unwrap_or(self.has_played),
            duration: patch.duration.unwrap_or(self.duration),
            position: patch.position.unwrap_or(self.position),
            buffered_fraction: patch.buffered_fraction.unwrap_or(self.buffered_fraction),
            is_playing: patch.is_playing.unwrap_or(self.is_playing),
            is_full_screen: patch.is_full_screen.unwrap_or(self.is_full_screen),
            is_controls_visible: patch.is_controls_visible.unwrap_or(self.is_controls_visible),
            volume: patch.volume.unwrap_or(self.volume),
            player_state: patch.player_state.unwrap_or(self.player_state),
            playback_rate: patch.playback_rate.unwrap_or(self.playback_rate),
            error_code: patch.error_code.unwrap_or(self.error_code),
        }
    }
}

/// Partial update applied with [`PlaybackSnapshot::merge`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotPatch {
    pub is_ready: Option<bool>,
    pub is_evaluation_ready: Option<bool>,
    pub is_loaded: Option<bool>,
    pub has_played: Option<bool>,
    pub duration: Option<Duration>,
    pub position: Option<Duration>,
    pub buffered_fraction: Option<f64>,
    pub is_playing: Option<bool>,
    pub is_full_screen: Option<bool>,
    pub is_controls_visible: Option<bool>,
    pub volume: Option<u8>,
    pub player_state: Option<PlayerState>,
    pub playback_rate: Option<f64>,
    pub error_code: Option<i32>,
}
