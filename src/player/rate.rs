// SPDX-License-Identifier: MPL-2.0
//! Playback rate domain type.
//!
//! The embedded player offers a fixed set of rate steps; free-form
//! multipliers are clamped into the same range before being sent.

use crate::config::defaults::{DEFAULT_PLAYBACK_RATE, MAX_PLAYBACK_RATE, MIN_PLAYBACK_RATE};

/// Fixed playback rate steps offered by the embedded player.
///
/// # Example
///
/// ```
/// use tubeframe::player::PlaybackRate;
///
/// assert_eq!(PlaybackRate::Double.multiplier(), 2.0);
/// assert_eq!(PlaybackRate::from_multiplier(0.5), Some(PlaybackRate::Half));
///
/// // Free-form values are clamped to the supported range
/// assert_eq!(PlaybackRate::clamp_multiplier(10.0), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackRate {
    Quarter,
    Half,
    #[default]
    Normal,
    OneAndHalf,
    Double,
}

impl PlaybackRate {
    /// All steps in ascending order.
    pub const ALL: [Self; 5] = [
        Self::Quarter,
        Self::Half,
        Self::Normal,
        Self::OneAndHalf,
        Self::Double,
    ];

    /// Multiplier sent to the player for this step.
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Quarter => 0.25,
            Self::Half => 0.5,
            Self::Normal => 1.0,
            Self::OneAndHalf => 1.5,
            Self::Double => 2.0,
        }
    }

    /// Returns the step matching a multiplier exactly, if any.
    #[must_use]
    pub fn from_multiplier(value: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|step| (step.multiplier() - value).abs() < f64::EPSILON)
    }

    /// Clamps a free-form multiplier into the supported range.
    /// Non-finite input falls back to normal speed.
    #[must_use]
    pub fn clamp_multiplier(value: f64) -> f64 {
        if value.is_finite() {
            value.clamp(MIN_PLAYBACK_RATE, MAX_PLAYBACK_RATE)
        } else {
            DEFAULT_PLAYBACK_RATE
        }
    }
}
