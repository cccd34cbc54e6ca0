// SPDX-License-Identifier: MPL-2.0
//! `tubeframe` is a headless playback-state controller for embedded
//! YouTube iframe players.
//!
//! It keeps a host-side model of an iframe player session: commands
//! render to scripts evaluated through a [`bridge::PlayerBridge`], facts
//! reported by the player merge into an immutable
//! [`player::PlaybackSnapshot`], and a [`player::PlaybackController`]
//! reconciles the two. No webview, rendering, or networking is included;
//! hosts plug in their own frame behind the bridge trait.

#![doc(html_root_url = "https://docs.rs/tubeframe/0.1.0")]

pub mod bridge;
pub mod config;
pub mod error;
pub mod fullscreen;
pub mod player;
pub mod thumbnail;
pub mod video_id;

pub use error::{Error, Result};
pub use video_id::VideoId;
