// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Volume**: Player volume bounds
//! - **Playback Rate**: Supported rate multiplier range
//! - **Controls**: On-screen controls auto-hide timing
//! - **Fullscreen**: Session handoff parameters

use std::time::Duration;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Volume the embedded player starts at.
pub const DEFAULT_VOLUME: u8 = 100;

/// Minimum accepted volume.
pub const MIN_VOLUME: u8 = 0;

/// Maximum accepted volume.
pub const MAX_VOLUME: u8 = 100;

// ==========================================================================
// Playback Rate Defaults
// ==========================================================================

/// Rate the embedded player starts at.
pub const DEFAULT_PLAYBACK_RATE: f64 = 1.0;

/// Minimum rate multiplier the player accepts.
pub const MIN_PLAYBACK_RATE: f64 = 0.25;

/// Maximum rate multiplier the player accepts.
pub const MAX_PLAYBACK_RATE: f64 = 2.0;

// ==========================================================================
// Controls Defaults
// ==========================================================================

/// Auto-hide timeout for on-screen controls.
pub const DEFAULT_CONTROLS_TIMEOUT: Duration = Duration::from_secs(3);

// ==========================================================================
// Fullscreen Defaults
// ==========================================================================

/// Position to resume at when a fullscreen session closes without
/// reporting where the user left off.
pub const FALLBACK_RESUME_POSITION: Duration = Duration::from_secs(1);

/// Aspect ratio of the fullscreen surface.
pub const DEFAULT_ASPECT_RATIO: f64 = 16.0 / 9.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Volume validation
    assert!(MIN_VOLUME < MAX_VOLUME);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);

    // Playback rate validation
    assert!(MIN_PLAYBACK_RATE > 0.0);
    assert!(MAX_PLAYBACK_RATE > MIN_PLAYBACK_RATE);
    assert!(DEFAULT_PLAYBACK_RATE >= MIN_PLAYBACK_RATE);
    assert!(DEFAULT_PLAYBACK_RATE <= MAX_PLAYBACK_RATE);

    // Controls validation
    assert!(DEFAULT_CONTROLS_TIMEOUT.as_secs() > 0);

    // Fullscreen validation
    assert!(FALLBACK_RESUME_POSITION.as_secs() > 0);
    assert!(DEFAULT_ASPECT_RATIO > 0.0);
};
