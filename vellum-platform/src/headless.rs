//! In-memory controls for headless apps and tests.
//!
//! ## Usage
//!
//! Use [`HeadlessFactory`] where no native toolkit is available. The controls
//! behave like typical float-native widgets: the slider never reports
//! programmatic changes, while the date input reports every change.

use chrono::{Local, NaiveDate};
use tracing::trace;
use vellum_ui::{DateInputBackend, NativeEvent, NativeEvents, SliderBackend, WidgetFactory};

/// Earliest date the headless date control can hold.
pub const NATIVE_MIN_DATE: NaiveDate = NaiveDate::MIN;
/// Latest date the headless date control can hold.
pub const NATIVE_MAX_DATE: NaiveDate = NaiveDate::MAX;

/// Creates headless backends.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeadlessFactory;

impl WidgetFactory for HeadlessFactory {
    fn name(&self) -> &'static str {
        "headless"
    }

    fn create_date_input(&self, events: NativeEvents) -> Box<dyn DateInputBackend> {
        Box::new(HeadlessDateInput::new(events))
    }

    fn create_slider(&self, events: NativeEvents) -> Box<dyn SliderBackend> {
        Box::new(HeadlessSlider::new(events))
    }
}

/// Float-native slider held in memory.
#[derive(Debug)]
pub struct HeadlessSlider {
    events: NativeEvents,
    value: f64,
    min: f64,
    max: f64,
    tick_count: Option<u32>,
    enabled: bool,
    pressed: bool,
}

impl HeadlessSlider {
    /// Creates a continuous slider over `[0, 1]`.
    pub fn new(events: NativeEvents) -> Self {
        Self {
            events,
            value: 0.0,
            min: 0.0,
            max: 1.0,
            tick_count: None,
            enabled: true,
            pressed: false,
        }
    }

    /// Whether user interaction is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the user is currently holding the thumb.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Simulates the user grabbing the thumb.
    pub fn press(&mut self) {
        if !self.enabled {
            return;
        }
        self.pressed = true;
        self.events.post(NativeEvent::Pressed);
    }

    /// Simulates the user dragging the thumb to `value`.
    ///
    /// The position is clamped to the range and snapped to the nearest tick,
    /// as a native control would.
    pub fn drag_to(&mut self, value: f64) {
        if !self.enabled {
            return;
        }
        let mut value = value.max(self.min).min(self.max);
        if let Some(count) = self.tick_count.filter(|&count| count >= 2)
            && self.max != self.min
        {
            let step = (self.max - self.min) / f64::from(count - 1);
            value = self.min + ((value - self.min) / step).round_ties_even() * step;
        }
        if value != self.value {
            self.value = value;
            trace!(value, "headless slider dragged");
            self.events.post(NativeEvent::Changed);
        }
    }

    /// Simulates the user letting go of the thumb.
    pub fn release(&mut self) {
        if !self.pressed {
            return;
        }
        self.pressed = false;
        self.events.post(NativeEvent::Released);
    }
}

impl SliderBackend for HeadlessSlider {
    fn value(&self) -> f64 {
        self.value
    }

    fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    fn min(&self) -> f64 {
        self.min
    }

    fn set_min(&mut self, value: f64) {
        self.min = value;
    }

    fn max(&self) -> f64 {
        self.max
    }

    fn set_max(&mut self, value: f64) {
        self.max = value;
    }

    fn tick_count(&self) -> Option<u32> {
        self.tick_count
    }

    fn set_tick_count(&mut self, tick_count: Option<u32>) {
        self.tick_count = tick_count;
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// Date control held in memory.
///
/// Every change of the stored value is reported, whether it came from the
/// user or from the widget.
#[derive(Debug)]
pub struct HeadlessDateInput {
    events: NativeEvents,
    value: NaiveDate,
    min: NaiveDate,
    max: NaiveDate,
}

impl HeadlessDateInput {
    /// Creates a control showing today's date over its full native range.
    pub fn new(events: NativeEvents) -> Self {
        Self {
            events,
            value: Local::now().date_naive(),
            min: NATIVE_MIN_DATE,
            max: NATIVE_MAX_DATE,
        }
    }

    /// Simulates the user picking a date in the calendar.
    ///
    /// Dates outside the selectable range cannot be picked and are clamped.
    pub fn pick(&mut self, date: NaiveDate) {
        self.store(date.clamp(self.min, self.max));
    }

    fn store(&mut self, value: NaiveDate) {
        if value != self.value {
            self.value = value;
            trace!(%value, "headless date changed");
            self.events.post(NativeEvent::Changed);
        }
    }
}

impl DateInputBackend for HeadlessDateInput {
    fn value(&self) -> NaiveDate {
        self.value
    }

    fn set_value(&mut self, value: NaiveDate) {
        self.store(value);
    }

    fn min_date(&self) -> NaiveDate {
        self.min
    }

    fn set_min_date(&mut self, value: NaiveDate) {
        self.min = value;
    }

    fn max_date(&self) -> NaiveDate {
        self.max
    }

    fn set_max_date(&mut self, value: NaiveDate) {
        self.max = value;
    }
}
