// SPDX-License-Identifier: MPL-2.0
//! Player state codes reported by the embedded frame.

use serde::{Deserialize, Serialize};

/// Lifecycle state of the embedded player.
///
/// Mirrors the numeric state codes of the underlying iframe API. `Unknown`
/// covers both "no report received yet" and unrecognized codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlayerState {
    #[default]
    Unknown,
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Cued,
}

impl PlayerState {
    /// Maps a raw iframe state code. Unrecognized codes collapse to `Unknown`.
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        match code {
            -1 => Self::Unstarted,
            0 => Self::Ended,
            1 => Self::Playing,
            2 => Self::Paused,
            3 => Self::Buffering,
            5 => Self::Cued,
            _ => Self::Unknown,
        }
    }

    /// Raw iframe code for this state, if the API defines one.
    #[must_use]
    pub fn code(self) -> Option<i32> {
        match self {
            Self::Unknown => None,
            Self::Unstarted => Some(-1),
            Self::Ended => Some(0),
            Self::Playing => Some(1),
            Self::Paused => Some(2),
            Self::Buffering => Some(3),
            Self::Cued => Some(5),
        }
    }
}
