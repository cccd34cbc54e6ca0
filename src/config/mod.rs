// SPDX-License-Identifier: MPL-2.0
//! Host-supplied player configuration.
//!
//! [`PlayerFlags`] is handed to the controller at construction and never
//! changes afterwards; per-session variations (the fullscreen surface) get
//! their own restricted copy via [`PlayerFlags::for_fullscreen`].

pub mod defaults;

use self::defaults::DEFAULT_CONTROLS_TIMEOUT;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Startup flags for an embedded player session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerFlags {
    /// Start playback as soon as the player frame is ready.
    /// When false the first video is cued instead of loaded.
    pub autoplay: bool,

    /// Mute the player right after the first load.
    pub mute: bool,

    /// Offset the first load starts from.
    pub start_at: Duration,

    /// Disable seeking by dragging the progress bar.
    pub disable_drag_seek: bool,

    /// Never show on-screen controls.
    pub hide_controls: bool,

    /// Show controls immediately instead of waiting for an interaction.
    pub controls_visible_at_start: bool,

    /// Treat the stream as live content (no fixed duration).
    pub is_live: bool,

    /// Show the thin progress indicator under the player surface.
    pub show_video_progress_indicator: bool,

    /// Delay before visible controls hide again.
    pub controls_timeout: Duration,
}

impl Default for PlayerFlags {
    fn default() -> Self {
        Self {
            autoplay: true,
            mute: false,
            start_at: Duration::ZERO,
            disable_drag_seek: false,
            hide_controls: false,
            controls_visible_at_start: false,
            is_live: false,
            show_video_progress_indicator: true,
            controls_timeout: DEFAULT_CONTROLS_TIMEOUT,
        }
    }
}

impl PlayerFlags {
    /// Restricted flag set for the fullscreen surface.
    ///
    /// The fullscreen player never shows its own progress indicator and
    /// inherits only drag-seek, mute, autoplay and live flags from the
    /// parent. `start_at` is deliberately not inherited; the session's
    /// captured position seeds fullscreen playback instead.
    #[must_use]
    pub fn for_fullscreen(&self) -> Self {
        Self {
            autoplay: self.autoplay,
            mute: self.mute,
            disable_drag_seek: self.disable_drag_seek,
            is_live: self.is_live,
            show_video_progress_indicator: false,
            ..Self::default()
        }
    }
}

/// Host platform the controller runs on.
///
/// Only affects workarounds the embedded player needs on one side,
/// currently annotation suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    /// Detects the platform from the compile target.
    /// Non-Apple targets behave like Android.
    #[must_use]
    pub fn current() -> Self {
        if cfg!(target_os = "ios") {
            Self::Ios
        } else {
            Self::Android
        }
    }

    /// Returns true when the native player already suppresses annotation
    /// overlays and no script workaround is needed.
    #[must_use]
    pub fn suppresses_annotations(self) -> bool {
        matches!(self, Self::Ios)
    }
}
