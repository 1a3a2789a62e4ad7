//! Native event queue shared between a widget and its backend.
//!
//! ## Usage
//!
//! A backend receives a [`NativeEvents`] handle when it is created and posts
//! into it whenever the native control reports interaction. The widget drains
//! the queue and turns the events into handler calls.

use std::{collections::VecDeque, sync::Arc};

use parking_lot::Mutex;
use smallvec::SmallVec;
use tracing::trace;

/// Events a native control can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeEvent {
    /// The native value changed.
    Changed,
    /// The user pressed the control.
    Pressed,
    /// The user released the control.
    Released,
}

/// Batch returned by [`NativeEvents::drain`].
pub type NativeEventBatch = SmallVec<[NativeEvent; 4]>;

#[derive(Debug, Default)]
struct EventQueue {
    suppress_depth: usize,
    pending: VecDeque<NativeEvent>,
}

/// Cloneable handle to the event queue of a single widget.
///
/// While change suppression is active, posted [`NativeEvent::Changed`] events
/// are discarded; backends are free to report programmatic changes or not,
/// and the widget reconciles the difference itself. Press and release events
/// are never suppressed.
#[derive(Debug, Clone, Default)]
pub struct NativeEvents {
    inner: Arc<Mutex<EventQueue>>,
}

impl NativeEvents {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an event reported by the native control.
    pub fn post(&self, event: NativeEvent) {
        let mut queue = self.inner.lock();
        if event == NativeEvent::Changed && queue.suppress_depth > 0 {
            trace!(depth = queue.suppress_depth, "suppressed native change event");
            return;
        }
        queue.pending.push_back(event);
    }

    /// Starts suppressing change events.
    ///
    /// Returns `true` when this call opened the outermost suppression scope.
    pub fn suppress_changes(&self) -> bool {
        let mut queue = self.inner.lock();
        queue.suppress_depth += 1;
        queue.suppress_depth == 1
    }

    /// Ends one level of change suppression.
    ///
    /// Returns `true` when this call closed the outermost suppression scope.
    pub fn resume_changes(&self) -> bool {
        let mut queue = self.inner.lock();
        queue.suppress_depth = queue.suppress_depth.saturating_sub(1);
        queue.suppress_depth == 0
    }

    /// Whether change events are currently being discarded.
    pub fn is_suppressed(&self) -> bool {
        self.inner.lock().suppress_depth > 0
    }

    /// Whether any events are waiting to be drained.
    pub fn has_pending(&self) -> bool {
        !self.inner.lock().pending.is_empty()
    }

    /// Takes every pending event in the order it was posted.
    ///
    /// The lock is released before the batch is returned, so handlers run
    /// while processing the batch may post new events.
    pub fn drain(&self) -> NativeEventBatch {
        self.inner.lock().pending.drain(..).collect()
    }
}
