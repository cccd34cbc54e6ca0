// SPDX-License-Identifier: MPL-2.0
//! Playback state machine for the embedded player.
//!
//! [`PlaybackController`] owns the published snapshot and is its only
//! writer. High-level commands render to scripts evaluated through the
//! attached bridge; facts reported back by the player arrive as
//! [`PlayerEvent`]s and are merged into a fresh snapshot, one replace per
//! event. The host drives the controller from a single sequential context:
//! issue commands, drain events with [`pump_events`](Self::pump_events),
//! read [`value`](Self::value).

use crate::bridge::{Command, EventSender, PlayerBridge, PlayerEvent};
use crate::config::defaults::MAX_VOLUME;
use crate::config::{Platform, PlayerFlags};
use crate::error::{Error, Result};
use crate::video_id::VideoId;
use std::sync::Arc;
use std::time::{Duration, Instant};
use super::listeners::{ListenerId, Listeners};
use super::rate::PlaybackRate;
use super::snapshot::{PlaybackSnapshot, SnapshotPatch};
use super::state::PlayerState;
use tokio::sync::mpsc;
use tracing::{debug, info, trace};

/// Controller for one embedded player session.
pub struct PlaybackController {
    /// Identifier of the video this session plays.
    video_id: VideoId,

    /// Startup flags, fixed for the session lifetime.
    flags: PlayerFlags,

    /// Platform quirk selector for script workarounds.
    platform: Platform,

    /// Latest published snapshot.
    value: PlaybackSnapshot,

    /// Outgoing script channel. Commands issued while unattached are
    /// silently dropped.
    bridge: Option<Arc<dyn PlayerBridge>>,

    /// Snapshot subscribers, notified synchronously after each replace.
    listeners: Listeners,

    /// Inbound event queue. The sender side is cloned out to whatever
    /// component receives frame messages.
    event_tx: mpsc::UnboundedSender<PlayerEvent>,
    event_rx: mpsc::UnboundedReceiver<PlayerEvent>,

    /// One-shot latch for the first load. Never rearmed, even when the
    /// readiness flags toggle afterwards.
    initial_load_fired: bool,

    /// Auto-hide deadline for on-screen controls. Each interaction
    /// overwrites it; the last writer wins.
    controls_deadline: Option<Instant>,

    /// Set by [`dispose`](Self::dispose); commands and events are ignored
    /// from then on.
    disposed: bool,
}

impl PlaybackController {
    /// Creates a controller for the given video, detecting the platform
    /// from the compile target.
    #[must_use]
    pub fn new(video_id: VideoId, flags: PlayerFlags) -> Self {
        Self::with_platform(video_id, flags, Platform::current())
    }

    /// Creates a controller with an explicit platform.
    #[must_use]
    pub fn with_platform(video_id: VideoId, flags: PlayerFlags, platform: Platform) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let value = PlaybackSnapshot {
            is_controls_visible: flags.controls_visible_at_start && !flags.hide_controls,
            ..PlaybackSnapshot::default()
        };
        Self {
            video_id,
            flags,
            platform,
            value,
            bridge: None,
            listeners: Listeners::default(),
            event_tx,
            event_rx,
            initial_load_fired: false,
            controls_deadline: None,
            disposed: false,
        }
    }

    /// Returns the latest published snapshot.
    pub fn value(&self) -> &PlaybackSnapshot {
        &self.value
    }

    /// Returns the video this session plays.
    pub fn video_id(&self) -> &VideoId {
        &self.video_id
    }

    /// Returns the session's startup flags.
    pub fn flags(&self) -> &PlayerFlags {
        &self.flags
    }

    /// Returns true once a bridge has been attached.
    pub fn has_bridge(&self) -> bool {
        self.bridge.is_some()
    }

    /// Returns true after [`dispose`](Self::dispose).
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Attaches the script bridge. Evaluates nothing by itself; the first
    /// load is driven by the readiness events.
    pub fn attach_bridge(&mut self, bridge: Arc<dyn PlayerBridge>) {
        if self.disposed {
            return;
        }
        self.bridge = Some(bridge);
        debug!("bridge attached");
    }

    /// Returns a handle for pushing player events into this controller.
    pub fn event_sender(&self) -> EventSender {
        EventSender::new(self.event_tx.clone())
    }

    /// Starts or resumes playback.
    pub fn play(&self) {
        self.issue(Command::Play);
    }

    /// Pauses playback at the current position.
    pub fn pause(&self) {
        self.issue(Command::Pause);
    }

    /// Mutes audio without touching the volume setting.
    pub fn mute(&self) {
        self.issue(Command::Mute);
    }

    /// Restores audio after a mute.
    pub fn unmute(&self) {
        self.issue(Command::Unmute);
    }

    /// Loads the session's video and starts playing at the given offset.
    /// Stateless; issuing it again reloads from the offset.
    pub fn load(&self, start_seconds: u64) {
        self.issue(Command::Load {
            id: self.video_id.clone(),
            start_seconds,
        });
    }

    /// Cues the session's video at the given offset without playing.
    pub fn cue(&self, start_seconds: u64) {
        self.issue(Command::Cue {
            id: self.video_id.clone(),
            start_seconds,
        });
    }

    /// Sets the player volume.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `volume` exceeds 100; the
    /// bridge is not called in that case.
    pub fn set_volume(&self, volume: u8) -> Result<()> {
        if volume > MAX_VOLUME {
            return Err(Error::InvalidArgument(format!(
                "volume must be between 0 and {MAX_VOLUME}, got {volume}"
            )));
        }
        self.issue(Command::SetVolume(volume));
        Ok(())
    }

    /// Seeks to a position and resumes playback.
    ///
    /// The local position is updated optimistically before the player
    /// confirms it, so progress UIs do not jump back while the seek is in
    /// flight. This is the only command that mutates local state.
    pub fn seek_to(&mut self, position: Duration, allow_seek_ahead: bool) {
        if self.disposed {
            return;
        }
        self.issue(Command::Seek {
            seconds: position.as_secs_f64(),
            allow_seek_ahead,
        });
        self.play();
        self.replace(SnapshotPatch {
            position: Some(position),
            ..SnapshotPatch::default()
        });
    }

    /// Sets the playback rate to one of the fixed steps.
    pub fn set_playback_rate(&self, rate: PlaybackRate) {
        self.issue(Command::SetRate(rate.multiplier()));
    }

    /// Sets a free-form playback rate, clamped to the supported range.
    pub fn set_playback_rate_value(&self, rate: f64) {
        self.issue(Command::SetRate(PlaybackRate::clamp_multiplier(rate)));
    }

    /// Resizes the player surface.
    pub fn set_size(&self, width: f64, height: f64) {
        self.issue(Command::SetSize { width, height });
    }

    /// Hides annotation overlays where the platform needs the script
    /// workaround; no-op elsewhere.
    pub fn force_hide_annotation(&self) {
        if self.platform.suppresses_annotations() {
            return;
        }
        self.issue(Command::HideAnnotations);
    }

    /// Marks the session fullscreen. A local flag flip; presenting the
    /// fullscreen surface is the host's job, usually via a coordinator
    /// watching this flag.
    pub fn enter_full_screen(&mut self) {
        self.set_full_screen(true);
    }

    /// Clears the fullscreen flag.
    pub fn exit_full_screen(&mut self) {
        self.set_full_screen(false);
    }

    /// Flips the fullscreen flag.
    pub fn toggle_full_screen(&mut self) {
        self.set_full_screen(!self.value.is_full_screen);
    }

    fn set_full_screen(&mut self, full_screen: bool) {
        if self.disposed || self.value.is_full_screen == full_screen {
            return;
        }
        self.replace(SnapshotPatch {
            is_full_screen: Some(full_screen),
            ..SnapshotPatch::default()
        });
    }

    /// Shows on-screen controls and restarts the auto-hide countdown.
    /// Ignored when the session hides controls entirely.
    pub fn show_controls(&mut self) {
        if self.disposed || self.flags.hide_controls {
            return;
        }
        self.controls_deadline = Some(Instant::now() + self.flags.controls_timeout);
        if !self.value.is_controls_visible {
            self.replace(SnapshotPatch {
                is_controls_visible: Some(true),
                ..SnapshotPatch::default()
            });
        }
    }

    /// Hides on-screen controls and cancels the countdown.
    pub fn hide_controls(&mut self) {
        if self.disposed {
            return;
        }
        self.controls_deadline = None;
        if self.value.is_controls_visible {
            self.replace(SnapshotPatch {
                is_controls_visible: Some(false),
                ..SnapshotPatch::default()
            });
        }
    }

    /// Hides controls once the auto-hide deadline has passed.
    /// Called from [`pump_events`](Self::pump_events); hosts with their own
    /// tick can also call it directly.
    pub fn check_controls_timeout(&mut self) {
        if self.disposed {
            return;
        }
        let Some(deadline) = self.controls_deadline else {
            return;
        };
        if Instant::now() >= deadline {
            self.controls_deadline = None;
            if self.value.is_controls_visible {
                self.replace(SnapshotPatch {
                    is_controls_visible: Some(false),
                    ..SnapshotPatch::default()
                });
            }
        }
    }

    /// Drains queued player events, then evaluates the controls deadline.
    pub fn pump_events(&mut self) {
        if self.disposed {
            return;
        }
        while let Ok(event) = self.event_rx.try_recv() {
            self.apply_event(event);
        }
        self.check_controls_timeout();
    }

    /// Merges one player event into the snapshot.
    ///
    /// Derived fields follow the event kind: a state report marks the video
    /// loaded, tracks `is_playing`, latches `has_played`, and an `Unstarted`
    /// report resets `buffered_fraction` for the reload. Buffered reports
    /// otherwise keep the running maximum.
    pub fn apply_event(&mut self, event: PlayerEvent) {
        if self.disposed {
            return;
        }
        trace!(?event, "applying player event");
        let patch = match event {
            PlayerEvent::Ready => SnapshotPatch {
                is_ready: Some(true),
                ..SnapshotPatch::default()
            },
            PlayerEvent::EvaluationReady => SnapshotPatch {
                is_evaluation_ready: Some(true),
                ..SnapshotPatch::default()
            },
            PlayerEvent::StateChange(state) => {
                let mut patch = SnapshotPatch {
                    player_state: Some(state),
                    is_loaded: Some(true),
                    is_playing: Some(state == PlayerState::Playing),
                    ..SnapshotPatch::default()
                };
                if state == PlayerState::Playing {
                    patch.has_played = Some(true);
                }
                if state == PlayerState::Unstarted {
                    patch.buffered_fraction = Some(0.0);
                }
                patch
            }
            PlayerEvent::PositionChange(position) => SnapshotPatch {
                position: Some(position),
                ..SnapshotPatch::default()
            },
            PlayerEvent::DurationChange(duration) => SnapshotPatch {
                duration: Some(duration),
                ..SnapshotPatch::default()
            },
            PlayerEvent::BufferedChange(fraction) => SnapshotPatch {
                buffered_fraction: Some(self.value.buffered_fraction.max(fraction)),
                ..SnapshotPatch::default()
            },
            PlayerEvent::VolumeChange(volume) => SnapshotPatch {
                volume: Some(volume),
                ..SnapshotPatch::default()
            },
            PlayerEvent::RateChange(rate) => SnapshotPatch {
                playback_rate: Some(rate),
                ..SnapshotPatch::default()
            },
            PlayerEvent::Error(code) => SnapshotPatch {
                error_code: Some(code),
                ..SnapshotPatch::default()
            },
        };
        self.replace(patch);
        self.maybe_fire_initial_load();
    }

    /// Registers a snapshot listener; it fires after every replace.
    pub fn add_listener(
        &mut self,
        listener: impl FnMut(&PlaybackSnapshot) + Send + 'static,
    ) -> ListenerId {
        self.listeners.add(Box::new(listener))
    }

    /// Removes a listener. Returns `true` if it was registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Returns true while any listener is registered.
    pub fn has_listeners(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// Tears the session down: drops subscribers and the bridge, cancels
    /// the controls countdown and closes the event queue. Further commands
    /// and events are no-ops. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.listeners.clear();
        self.bridge = None;
        self.controls_deadline = None;
        self.event_rx.close();
        debug!("controller disposed");
    }

    fn issue(&self, command: Command) {
        match &self.bridge {
            Some(bridge) => {
                let script = command.to_script();
                trace!("evaluating {script}");
                bridge.evaluate(&script);
            }
            None => debug!("command dropped, no bridge attached"),
        }
    }

    fn replace(&mut self, patch: SnapshotPatch) {
        self.value = self.value.merge(patch);
        self.listeners.notify(&self.value);
    }

    /// Fires the one-shot first load once both readiness flags are up.
    fn maybe_fire_initial_load(&mut self) {
        if self.initial_load_fired || !(self.value.is_ready && self.value.is_evaluation_ready) {
            return;
        }
        self.initial_load_fired = true;

        let start_seconds = self.flags.start_at.as_secs();
        info!(
            video_id = %self.video_id,
            autoplay = self.flags.autoplay,
            "player ready, issuing first load"
        );
        if self.flags.autoplay {
            self.load(start_seconds);
        } else {
            self.cue(start_seconds);
        }
        if self.flags.mute {
            self.mute();
        }
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        self.dispose();
    }
}
