// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the fullscreen hand-off
//!
//! These tests run the full loop a host would: a controller fed by JSON
//! frame messages, a coordinator reconciling after each pump, and a fake
//! presenter standing in for the host's fullscreen surface.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;
use tubeframe::bridge::PlayerBridge;
use tubeframe::config::defaults::FALLBACK_RESUME_POSITION;
use tubeframe::config::{Platform, PlayerFlags};
use tubeframe::fullscreen::{FullscreenCoordinator, FullscreenPresenter, FullscreenSession};
use tubeframe::player::PlaybackController;
use tubeframe::VideoId;

#[derive(Default)]
struct RecordingBridge {
    scripts: Mutex<Vec<String>>,
}

impl RecordingBridge {
    fn scripts(&self) -> Vec<String> {
        self.scripts.lock().unwrap().clone()
    }
}

impl PlayerBridge for RecordingBridge {
    fn evaluate(&self, script: &str) {
        self.scripts.lock().unwrap().push(script.to_string());
    }
}

#[derive(Default)]
struct FakeSurface {
    sessions: Mutex<Vec<FullscreenSession>>,
    resolvers: Mutex<Vec<oneshot::Sender<Option<Duration>>>>,
    dismissed: Mutex<Vec<Duration>>,
}

impl FakeSurface {
    fn resolve(&self, result: Option<Duration>) {
        let sender = self.resolvers.lock().unwrap().pop().unwrap();
        sender.send(result).unwrap();
    }

    fn last_session(&self) -> FullscreenSession {
        self.sessions.lock().unwrap().last().unwrap().clone()
    }
}

impl FullscreenPresenter for FakeSurface {
    fn present(&self, session: FullscreenSession) -> oneshot::Receiver<Option<Duration>> {
        self.sessions.lock().unwrap().push(session);
        let (tx, rx) = oneshot::channel();
        self.resolvers.lock().unwrap().push(tx);
        rx
    }

    fn dismiss(&self, position: Duration) {
        self.dismissed.lock().unwrap().push(position);
    }
}

struct Host {
    controller: PlaybackController,
    coordinator: FullscreenCoordinator,
    bridge: Arc<RecordingBridge>,
    surface: Arc<FakeSurface>,
}

fn host(flags: PlayerFlags) -> Host {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();

    let id = VideoId::new("dQw4w9WgXcQ").unwrap();
    let mut controller = PlaybackController::with_platform(id, flags, Platform::Android);
    let bridge = Arc::new(RecordingBridge::default());
    controller.attach_bridge(bridge.clone());

    let surface = Arc::new(FakeSurface::default());
    let coordinator = FullscreenCoordinator::new(surface.clone());
    Host {
        controller,
        coordinator,
        bridge,
        surface,
    }
}

impl Host {
    /// One iteration of the host's update loop.
    fn tick(&mut self) {
        self.controller.pump_events();
        self.coordinator.reconcile(&mut self.controller);
    }
}

#[test]
fn test_fullscreen_round_trip() {
    let mut host = host(PlayerFlags::default());
    let events = host.controller.event_sender();

    // Inline playback reaches 42 seconds
    events.send_json(r#"{"event": "stateChange", "data": 1}"#).unwrap();
    events.send_json(r#"{"event": "positionChange", "data": 42.0}"#).unwrap();
    host.tick();

    host.controller.enter_full_screen();
    host.tick();

    assert!(host.coordinator.is_active());
    let session = host.surface.last_session();
    assert_eq!(session.start_position, Duration::from_secs(42));

    // The user leaves fullscreen at 120 seconds
    let issued_before = host.bridge.scripts().len();
    host.surface.resolve(Some(Duration::from_secs(120)));
    host.tick();

    assert!(!host.coordinator.is_active());
    assert!(!host.controller.value().is_full_screen);
    assert_eq!(host.controller.value().position, Duration::from_secs(120));
    assert_eq!(
        host.bridge.scripts()[issued_before..],
        ["seekTo(120, true)", "play()"],
        "Inline playback resumes where fullscreen stopped"
    );
}

#[test]
fn test_fallback_resume_when_no_position_comes_back() {
    let mut host = host(PlayerFlags::default());

    host.controller.enter_full_screen();
    host.tick();

    host.surface.resolve(None);
    host.tick();

    assert_eq!(host.controller.value().position, FALLBACK_RESUME_POSITION);
    assert!(!host.controller.value().is_full_screen);
}

#[test]
fn test_host_driven_exit_dismisses_the_surface() {
    let mut host = host(PlayerFlags::default());
    let events = host.controller.event_sender();

    events.send_json(r#"{"event": "positionChange", "data": 55.0}"#).unwrap();
    host.tick();
    host.controller.enter_full_screen();
    host.tick();

    let issued_before = host.bridge.scripts().len();
    host.controller.exit_full_screen();
    host.tick();

    assert_eq!(
        *host.surface.dismissed.lock().unwrap(),
        [Duration::from_secs(55)]
    );
    assert!(!host.coordinator.is_active());
    assert_eq!(
        host.bridge.scripts().len(),
        issued_before,
        "No resume seek on the host-exit path"
    );
}

#[test]
fn test_fullscreen_session_flags_are_restricted() {
    let flags = PlayerFlags {
        autoplay: false,
        mute: true,
        disable_drag_seek: true,
        is_live: true,
        start_at: Duration::from_secs(25),
        controls_visible_at_start: true,
        ..PlayerFlags::default()
    };
    let mut host = host(flags);

    host.controller.enter_full_screen();
    host.tick();

    let session = host.surface.last_session();
    assert!(!session.flags.autoplay);
    assert!(session.flags.mute);
    assert!(session.flags.disable_drag_seek);
    assert!(session.flags.is_live);
    assert!(!session.flags.show_video_progress_indicator);
    assert_eq!(session.flags.start_at, Duration::ZERO, "Offset is not inherited");
    assert!(!session.flags.controls_visible_at_start);
}

#[test]
fn test_sequential_sessions_chain_positions() {
    let mut host = host(PlayerFlags::default());

    host.controller.enter_full_screen();
    host.tick();
    host.surface.resolve(Some(Duration::from_secs(120)));
    host.tick();

    // Entering again starts from the resumed position
    host.controller.enter_full_screen();
    host.tick();

    let sessions = host.surface.sessions.lock().unwrap();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[1].start_position, Duration::from_secs(120));
}
