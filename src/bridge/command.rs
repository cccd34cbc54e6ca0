// SPDX-License-Identifier: MPL-2.0
//! Outgoing script commands for the embedded player.
//!
//! Every command renders to a fixed script template with parameters
//! substituted verbatim; the player frame exposes matching functions.

use crate::video_id::VideoId;

/// Commands evaluated inside the player frame's script context.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Starts or resumes playback.
    Play,

    /// Pauses playback at the current position.
    Pause,

    /// Mutes audio without touching the volume setting.
    Mute,

    /// Restores audio after a mute.
    Unmute,

    /// Loads a video and starts playing at the given offset.
    Load { id: VideoId, start_seconds: u64 },

    /// Cues a video at the given offset without starting playback.
    Cue { id: VideoId, start_seconds: u64 },

    /// Sets the player volume, `0..=100`.
    SetVolume(u8),

    /// Seeks to a position. `allow_seek_ahead` lets the player request
    /// not-yet-buffered ranges from the server.
    Seek { seconds: f64, allow_seek_ahead: bool },

    /// Resizes the player surface. Dimensions are in logical units and
    /// scaled by 100 inside the frame.
    SetSize { width: f64, height: f64 },

    /// Sets the playback rate multiplier.
    SetRate(f64),

    /// Hides annotation overlays on platforms whose native player shows them.
    HideAnnotations,
}

impl Command {
    /// Renders the script evaluated in the player frame.
    #[must_use]
    pub fn to_script(&self) -> String {
        match self {
            Self::Play => "play()".to_string(),
            Self::Pause => "pause()".to_string(),
            Self::Mute => "mute()".to_string(),
            Self::Unmute => "unMute()".to_string(),
            Self::Load { id, start_seconds } => {
                format!("loadById('{}', {})", id.as_str(), start_seconds)
            }
            Self::Cue { id, start_seconds } => {
                format!("cueById('{}', {})", id.as_str(), start_seconds)
            }
            Self::SetVolume(volume) => format!("setVolume({})", volume),
            Self::Seek {
                seconds,
                allow_seek_ahead,
            } => format!("seekTo({}, {})", seconds, allow_seek_ahead),
            Self::SetSize { width, height } => {
                format!("setSize({}, {})", width * 100.0, height * 100.0)
            }
            Self::SetRate(rate) => format!("setPlaybackRate({})", rate),
            Self::HideAnnotations => "hideAnnotations()".to_string(),
        }
    }
}
