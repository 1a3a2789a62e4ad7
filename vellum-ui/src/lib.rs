//! vellum-ui is the portable core shared by vellum widgets and the platforms
//! that render them.
//!
//! # Backends
//!
//! Widgets never talk to a native control directly. Each platform provides a
//! [`WidgetFactory`] that creates one backend object per widget instance, and
//! the widget drives it through the [`SliderBackend`] or [`DateInputBackend`]
//! capability set.
//!
//! Platforms whose native slider only understands integer positions can wrap
//! that control in an [`IntRangeAdapter`], which maps a continuous logical
//! range onto a fixed integer step space.
//!
//! # Events
//!
//! Native controls report user interaction by posting a [`NativeEvent`] into
//! the [`NativeEvents`] queue handed to them at creation time. The owning
//! widget drains the queue and invokes its [`Handler`]s.
//!
//! ```
//! use vellum_ui::{Handler, HandlerEvent};
//!
//! struct Counter;
//!
//! let handler: Handler<Counter> = Handler::new(|_widget: &Counter, event: &HandlerEvent| {
//!     println!("{:?}", event.kind);
//! });
//! handler.call(&Counter, &HandlerEvent::change());
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod backend;
pub mod error;
pub mod events;
pub mod handler;
pub mod int_range;
mod logging;

pub use backend::{DateInputBackend, IntNative, SliderBackend, WidgetFactory};
pub use error::{ErrorKind, WidgetError, WidgetResult};
pub use events::{NativeEvent, NativeEventBatch, NativeEvents};
pub use handler::{EventKind, Handler, HandlerEvent};
pub use int_range::{IntRangeAdapter, MAX_TICK_COUNT};
pub use logging::init_tracing;

pub use chrono;
pub use downcast_rs;
