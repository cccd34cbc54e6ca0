// SPDX-License-Identifier: MPL-2.0
//! Inbound events reported by the embedded player.
//!
//! The player frame posts JSON messages of the form
//! `{"event": "<name>", "data": <payload>}`. Decoding sanitizes numeric
//! payloads (out-of-range values are clamped, non-finite ones collapse to a
//! neutral value); structural problems such as unknown event names or
//! wrongly-typed payloads are decode errors.

use crate::config::defaults::{DEFAULT_PLAYBACK_RATE, MAX_VOLUME, MIN_VOLUME};
use crate::error::{Error, Result};
use crate::player::PlayerState;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

/// One report from the embedded player.
///
/// Events arrive in arbitrary order and cardinality; no ordering between
/// distinct kinds may be assumed.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// The player object finished constructing inside the frame.
    Ready,
    /// The script evaluation channel is usable.
    EvaluationReady,
    /// The player transitioned to a new lifecycle state.
    StateChange(PlayerState),
    /// Playback position progressed.
    PositionChange(Duration),
    /// The player (re)reported the video duration.
    DurationChange(Duration),
    /// Buffered share of the video changed, `0.0..=1.0`.
    BufferedChange(f64),
    /// Player volume changed, `0..=100`.
    VolumeChange(u8),
    /// Playback rate multiplier changed.
    RateChange(f64),
    /// The player reported an error code.
    Error(i32),
}

/// Raw wire form of a posted message.
#[derive(Debug, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
enum WireEvent {
    Ready,
    EvaluationReady,
    StateChange(i32),
    PositionChange(f64),
    DurationChange(f64),
    BufferedChange(f64),
    VolumeChange(f64),
    RateChange(f64),
    Error(i32),
}

impl PlayerEvent {
    /// Decodes one posted message from the player frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedEvent`] for unknown event names or payloads
    /// of the wrong shape.
    pub fn from_json(payload: &str) -> Result<Self> {
        let wire: WireEvent = serde_json::from_str(payload).map_err(|err| {
            warn!("undecodable player event: {err}");
            Error::MalformedEvent(err.to_string())
        })?;

        Ok(match wire {
            WireEvent::Ready => Self::Ready,
            WireEvent::EvaluationReady => Self::EvaluationReady,
            WireEvent::StateChange(code) => Self::StateChange(PlayerState::from_code(code)),
            WireEvent::PositionChange(secs) => Self::PositionChange(duration_from_secs(secs)),
            WireEvent::DurationChange(secs) => Self::DurationChange(duration_from_secs(secs)),
            WireEvent::BufferedChange(fraction) => Self::BufferedChange(clamp_fraction(fraction)),
            WireEvent::VolumeChange(volume) => Self::VolumeChange(clamp_volume(volume)),
            WireEvent::RateChange(rate) => Self::RateChange(sanitize_rate(rate)),
            WireEvent::Error(code) => Self::Error(code),
        })
    }
}

/// Negative, non-finite and overflowing second counts collapse to zero.
fn duration_from_secs(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or_default()
}

fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn clamp_volume(volume: f64) -> u8 {
    // NaN rounds to NaN and casts to 0; finite values saturate into range.
    volume.round().clamp(f64::from(MIN_VOLUME), f64::from(MAX_VOLUME)) as u8
}

fn sanitize_rate(rate: f64) -> f64 {
    if rate.is_finite() {
        rate
    } else {
        DEFAULT_PLAYBACK_RATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_unit_events() {
        assert_eq!(
            PlayerEvent::from_json(r#"{"event": "ready"}"#).unwrap(),
            PlayerEvent::Ready
        );
        assert_eq!(
            PlayerEvent::from_json(r#"{"event": "evaluationReady"}"#).unwrap(),
            PlayerEvent::EvaluationReady
        );
    }

    #[test]
    fn decodes_state_changes_through_the_code_table() {
        assert_eq!(
            PlayerEvent::from_json(r#"{"event": "stateChange", "data": 1}"#).unwrap(),
            PlayerEvent::StateChange(PlayerState::Playing)
        );
        assert_eq!(
            PlayerEvent::from_json(r#"{"event": "stateChange", "data": -1}"#).unwrap(),
            PlayerEvent::StateChange(PlayerState::Unstarted)
        );
        // Unrecognized codes are not an error, they collapse to Unknown
        assert_eq!(
            PlayerEvent::from_json(r#"{"event": "stateChange", "data": 99}"#).unwrap(),
            PlayerEvent::StateChange(PlayerState::Unknown)
        );
    }

    #[test]
    fn decodes_position_and_duration_seconds() {
        assert_eq!(
            PlayerEvent::from_json(r#"{"event": "positionChange", "data": 12.5}"#).unwrap(),
            PlayerEvent::PositionChange(Duration::from_millis(12_500))
        );
        assert_eq!(
            PlayerEvent::from_json(r#"{"event": "durationChange", "data": 212.091}"#).unwrap(),
            PlayerEvent::DurationChange(Duration::from_millis(212_091))
        );
    }

    #[test]
    fn negative_seconds_collapse_to_zero() {
        assert_eq!(
            PlayerEvent::from_json(r#"{"event": "positionChange", "data": -3.0}"#).unwrap(),
            PlayerEvent::PositionChange(Duration::ZERO)
        );
    }

    #[test]
    fn buffered_fraction_is_clamped() {
        assert_eq!(
            PlayerEvent::from_json(r#"{"event": "bufferedChange", "data": 0.25}"#).unwrap(),
            PlayerEvent::BufferedChange(0.25)
        );
        assert_eq!(
            PlayerEvent::from_json(r#"{"event": "bufferedChange", "data": 1.7}"#).unwrap(),
            PlayerEvent::BufferedChange(1.0)
        );
        assert_eq!(
            PlayerEvent::from_json(r#"{"event": "bufferedChange", "data": -0.5}"#).unwrap(),
            PlayerEvent::BufferedChange(0.0)
        );
    }

    #[test]
    fn volume_saturates_into_range() {
        assert_eq!(
            PlayerEvent::from_json(r#"{"event": "volumeChange", "data": 73.4}"#).unwrap(),
            PlayerEvent::VolumeChange(73)
        );
        assert_eq!(
            PlayerEvent::from_json(r#"{"event": "volumeChange", "data": 150}"#).unwrap(),
            PlayerEvent::VolumeChange(100)
        );
        assert_eq!(
            PlayerEvent::from_json(r#"{"event": "volumeChange", "data": -20}"#).unwrap(),
            PlayerEvent::VolumeChange(0)
        );
    }

    #[test]
    fn rate_and_error_pass_through() {
        assert_eq!(
            PlayerEvent::from_json(r#"{"event": "rateChange", "data": 1.5}"#).unwrap(),
            PlayerEvent::RateChange(1.5)
        );
        assert_eq!(
            PlayerEvent::from_json(r#"{"event": "error", "data": 101}"#).unwrap(),
            PlayerEvent::Error(101)
        );
    }

    #[test]
    fn unknown_event_names_are_malformed() {
        let err = PlayerEvent::from_json(r#"{"event": "telemetry", "data": 1}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedEvent(_)));
    }

    #[test]
    fn wrongly_typed_payloads_are_malformed() {
        assert!(PlayerEvent::from_json(r#"{"event": "stateChange", "data": "playing"}"#).is_err());
        assert!(PlayerEvent::from_json(r#"{"event": "positionChange"}"#).is_err());
        assert!(PlayerEvent::from_json("not json").is_err());
    }

    #[test]
    fn non_finite_numerics_collapse_to_neutral_values() {
        // JSON cannot carry non-finite numbers; exercise the sanitizers directly.
        assert_eq!(clamp_fraction(f64::NAN), 0.0);
        assert_eq!(clamp_volume(f64::INFINITY), 100);
        assert_eq!(clamp_volume(f64::NAN), 0);
        assert_eq!(sanitize_rate(f64::NEG_INFINITY), 1.0);
    }
}
