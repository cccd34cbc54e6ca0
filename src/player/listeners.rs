// SPDX-License-Identifier: MPL-2.0
//! Subscriber registry for snapshot updates.

use super::snapshot::PlaybackSnapshot;
use std::fmt;

/// Identifier handed out on registration, used to remove a listener later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback = Box<dyn FnMut(&PlaybackSnapshot) + Send>;

/// Registry of snapshot subscribers, notified in registration order.
///
/// Notification is synchronous and happens on the controller's own context;
/// listeners observe the snapshot and must not call back into the controller.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Callback)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, callback: Callback) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    /// Removes a listener by its ID.
    ///
    /// Returns `true` if the listener was found and removed.
    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn notify(&mut self, snapshot: &PlaybackSnapshot) {
        for (_, callback) in &mut self.entries {
            callback(snapshot);
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
