//! Handler slots exposed by widgets to application code.
//!
//! ## Usage
//!
//! Attach `on_change`, `on_press` and `on_release` handlers to widgets. A
//! handler receives the widget that produced the event and a
//! [`HandlerEvent`] describing it.

use std::{fmt, sync::Arc};

use tracing::trace;

/// What a widget is reporting to its handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// The widget value changed, either by the user or programmatically.
    Change,
    /// The user pressed the widget before changing it.
    Press,
    /// The user released the widget after changing it.
    Release,
}

/// Data passed to a handler alongside the widget.
///
/// New fields may be added in later versions, so this cannot be constructed
/// with a struct literal outside of this crate.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct HandlerEvent {
    /// The kind of event being reported.
    pub kind: EventKind,
}

impl HandlerEvent {
    /// Creates an event of the given kind.
    pub fn new(kind: EventKind) -> Self {
        Self { kind }
    }

    /// A value change event.
    pub fn change() -> Self {
        Self::new(EventKind::Change)
    }

    /// A press event.
    pub fn press() -> Self {
        Self::new(EventKind::Press)
    }

    /// A release event.
    pub fn release() -> Self {
        Self::new(EventKind::Release)
    }
}

/// Stable, comparable handler for events produced by a widget of type `W`.
///
/// `Handler` compares by identity (`Arc::ptr_eq`), so replacing a handler with
/// a clone of itself is observable as "unchanged". The default handler does
/// nothing, which is what a widget holds while no handler is attached. All
/// empty handlers compare equal.
pub struct Handler<W: ?Sized> {
    inner: Option<Arc<dyn Fn(&W, &HandlerEvent) + Send + Sync>>,
}

impl<W: ?Sized> Handler<W> {
    /// Create a handler from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&W, &HandlerEvent) + Send + Sync + 'static,
    {
        Self {
            inner: Some(Arc::new(handler)),
        }
    }

    /// A handler that ignores every event.
    pub fn noop() -> Self {
        Self { inner: None }
    }

    /// Wraps an optional handler, mapping `None` to [`Handler::noop`].
    pub fn from_option(handler: Option<Self>) -> Self {
        handler.unwrap_or_else(Self::noop)
    }

    /// Whether this handler ignores every event.
    pub fn is_noop(&self) -> bool {
        self.inner.is_none()
    }

    /// Invoke the handler.
    pub fn call(&self, widget: &W, event: &HandlerEvent) {
        let Some(handler) = self.inner.as_ref().map(Arc::clone) else {
            trace!(kind = ?event.kind, "event dropped by empty handler");
            return;
        };
        handler(widget, event);
    }
}

impl<W: ?Sized, F> From<F> for Handler<W>
where
    F: Fn(&W, &HandlerEvent) + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<W: ?Sized> Default for Handler<W> {
    fn default() -> Self {
        Self::noop()
    }
}

impl<W: ?Sized> Clone for Handler<W> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<W: ?Sized> PartialEq for Handler<W> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.inner, &other.inner) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<W: ?Sized> Eq for Handler<W> {}

impl<W: ?Sized> fmt::Debug for Handler<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("noop", &self.is_noop())
            .finish()
    }
}
