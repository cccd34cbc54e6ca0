// SPDX-License-Identifier: MPL-2.0
//! Hand-off between an inline session and a host-presented fullscreen
//! surface.
//!
//! The controller only tracks a fullscreen flag; actually swapping
//! surfaces is host territory. [`FullscreenCoordinator`] watches the flag
//! across [`reconcile`](FullscreenCoordinator::reconcile) calls and drives
//! a [`FullscreenPresenter`]: on entry it captures the current position,
//! derives restricted session flags and presents; the presenter answers
//! later through a one-shot channel carrying the position where fullscreen
//! playback stopped. Inline playback then resumes from that position, or
//! from a short fallback offset when no position came back.

use crate::config::defaults::{DEFAULT_ASPECT_RATIO, FALLBACK_RESUME_POSITION};
use crate::config::PlayerFlags;
use crate::player::PlaybackController;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tracing::{debug, info};

/// Everything the host needs to spin up the fullscreen surface.
#[derive(Debug, Clone, PartialEq)]
pub struct FullscreenSession {
    /// Position the fullscreen player starts from.
    pub start_position: Duration,

    /// Flags for the fullscreen session, derived from the inline ones via
    /// [`PlayerFlags::for_fullscreen`].
    pub flags: PlayerFlags,

    /// Aspect ratio the surface keeps.
    pub aspect_ratio: f64,
}

/// Host-side presenter of the fullscreen surface.
pub trait FullscreenPresenter: Send + Sync {
    /// Presents the surface for the given session.
    ///
    /// The returned channel resolves once the user leaves fullscreen,
    /// carrying the position where playback stopped, or `None` when the
    /// fullscreen player never reported one. Dropping the sender counts
    /// as `None`.
    fn present(&self, session: FullscreenSession) -> oneshot::Receiver<Option<Duration>>;

    /// Tears the surface down after the host left fullscreen on its own,
    /// handing over the position to resume from.
    fn dismiss(&self, position: Duration);
}

/// Watches a controller's fullscreen flag and runs the presenter protocol.
pub struct FullscreenCoordinator {
    presenter: Arc<dyn FullscreenPresenter>,
    aspect_ratio: f64,

    /// A session is presented and unresolved.
    active: bool,

    /// Flag value seen at the end of the previous reconcile.
    was_full_screen: bool,

    /// Resolution channel of the presented session.
    pending: Option<oneshot::Receiver<Option<Duration>>>,
}

impl FullscreenCoordinator {
    #[must_use]
    pub fn new(presenter: Arc<dyn FullscreenPresenter>) -> Self {
        Self {
            presenter,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            active: false,
            was_full_screen: false,
            pending: None,
        }
    }

    /// Overrides the aspect ratio handed to presented sessions.
    #[must_use]
    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Returns true while a presented session is unresolved.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advances the protocol one step.
    ///
    /// Call this from the same sequential context that drives the
    /// controller, after pumping events. It first settles a pending
    /// resolution, then reacts to fullscreen flag edges since the last
    /// call. A flag raised while a session is active presents nothing.
    pub fn reconcile(&mut self, controller: &mut PlaybackController) {
        let resolution = match self.pending.as_mut() {
            Some(receiver) => match receiver.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Closed) => Some(None),
                Err(TryRecvError::Empty) => None,
            },
            None => None,
        };
        if let Some(result) = resolution {
            self.finish_session(controller, result);
        }

        let is_full_screen = controller.value().is_full_screen;
        if is_full_screen && !self.was_full_screen && !self.active {
            self.begin_session(controller);
        } else if !is_full_screen && self.was_full_screen && self.active {
            // Host left fullscreen itself instead of waiting for the
            // presenter's resolution
            let position = controller.value().position;
            debug!(?position, "dismissing fullscreen after host exit");
            self.presenter.dismiss(position);
            self.pending = None;
            self.active = false;
        }
        self.was_full_screen = is_full_screen;
    }

    fn begin_session(&mut self, controller: &mut PlaybackController) {
        let session = FullscreenSession {
            start_position: controller.value().position,
            flags: controller.flags().for_fullscreen(),
            aspect_ratio: self.aspect_ratio,
        };
        info!(start = ?session.start_position, "presenting fullscreen session");
        self.pending = Some(self.presenter.present(session));
        self.active = true;
    }

    fn finish_session(&mut self, controller: &mut PlaybackController, result: Option<Duration>) {
        self.pending = None;
        self.active = false;
        let resume_at = result.unwrap_or(FALLBACK_RESUME_POSITION);
        info!(?resume_at, "fullscreen session finished");
        controller.seek_to(resume_at, true);
        controller.exit_full_screen();
    }
}
