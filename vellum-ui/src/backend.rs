//! Capability sets a platform implements to host vellum widgets.
//!
//! ## Usage
//!
//! Implement [`WidgetFactory`] once per target platform, returning backend
//! objects that wrap the platform's native controls.

use chrono::NaiveDate;
use downcast_rs::{Downcast, impl_downcast};

use crate::events::NativeEvents;

/// Creates backends for the widgets of one platform.
pub trait WidgetFactory {
    /// Returns the platform name for logging and diagnostics.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Creates the native side of a date input.
    ///
    /// The backend should post into `events` whenever its native control
    /// reports a value change.
    fn create_date_input(&self, events: NativeEvents) -> Box<dyn DateInputBackend>;

    /// Creates the native side of a slider.
    ///
    /// The backend should post into `events` whenever its native control
    /// reports a value change, a press or a release.
    fn create_slider(&self, events: NativeEvents) -> Box<dyn SliderBackend>;
}

/// Native operations behind a date input.
///
/// Dates passed in have already been normalized by the widget; a backend only
/// stores and displays them.
pub trait DateInputBackend: Downcast {
    /// Currently displayed date.
    fn value(&self) -> NaiveDate;

    /// Displays a new date.
    fn set_value(&mut self, value: NaiveDate);

    /// Earliest selectable date.
    fn min_date(&self) -> NaiveDate;

    /// Sets the earliest selectable date.
    fn set_min_date(&mut self, value: NaiveDate);

    /// Latest selectable date.
    fn max_date(&self) -> NaiveDate;

    /// Sets the latest selectable date.
    fn set_max_date(&mut self, value: NaiveDate);
}

impl_downcast!(DateInputBackend);

/// Native operations behind a slider.
pub trait SliderBackend: Downcast {
    /// Current logical value.
    fn value(&self) -> f64;

    /// Moves the slider to a logical value already clipped and rounded by the
    /// widget.
    fn set_value(&mut self, value: f64);

    /// Lower end of the range.
    fn min(&self) -> f64;

    /// Sets the lower end of the range.
    fn set_min(&mut self, value: f64);

    /// Upper end of the range.
    fn max(&self) -> f64;

    /// Sets the upper end of the range.
    fn set_max(&mut self, value: f64);

    /// Number of ticks, or `None` for a continuous slider.
    fn tick_count(&self) -> Option<u32>;

    /// Switches between discrete and continuous mode.
    fn set_tick_count(&mut self, tick_count: Option<u32>);

    /// Enables or disables user interaction.
    fn set_enabled(&mut self, _enabled: bool) {}

    /// Refreshes the logical state after the native control reported a user
    /// change.
    ///
    /// Backends that store the logical value natively have nothing to do.
    fn sync_native(&mut self) {}
}

impl_downcast!(SliderBackend);

/// Integer-only native slider control.
///
/// The native minimum is always 0. See [`IntRangeAdapter`](crate::IntRangeAdapter)
/// for the mapping onto a float range.
pub trait IntNative: 'static {
    /// Current native position.
    fn int_value(&self) -> i32;

    /// Moves the native control to a position.
    fn set_int_value(&mut self, value: i32);

    /// Native maximum position.
    fn int_max(&self) -> i32;

    /// Sets the native maximum position.
    fn set_int_max(&mut self, max: i32);

    /// Shows or hides tick marks.
    fn set_ticks_visible(&mut self, visible: bool);

    /// Enables or disables user interaction.
    fn set_enabled(&mut self, _enabled: bool) {}
}
