//! Integer-only slider controls.
//!
//! ## Usage
//!
//! Use [`StepperFactory`] to exercise the integer range adapter. The track
//! reports every position change, including those made programmatically.

use tracing::trace;
use vellum_ui::{
    DateInputBackend, IntNative, IntRangeAdapter, NativeEvent, NativeEvents, SliderBackend,
    WidgetFactory,
};

use crate::headless::HeadlessDateInput;

/// Slider backend produced by [`StepperFactory`].
pub type StepperSlider = IntRangeAdapter<StepperTrack>;

/// Creates integer-only slider backends. Date inputs are headless.
#[derive(Clone, Copy, Debug, Default)]
pub struct StepperFactory;

impl WidgetFactory for StepperFactory {
    fn name(&self) -> &'static str {
        "stepper"
    }

    fn create_date_input(&self, events: NativeEvents) -> Box<dyn DateInputBackend> {
        Box::new(HeadlessDateInput::new(events))
    }

    fn create_slider(&self, events: NativeEvents) -> Box<dyn SliderBackend> {
        Box::new(IntRangeAdapter::new(StepperTrack::new(events)))
    }
}

/// Track bar that only knows integer positions in `[0, max]`.
#[derive(Debug)]
pub struct StepperTrack {
    events: NativeEvents,
    position: i32,
    max: i32,
    ticks_visible: bool,
    enabled: bool,
}

impl StepperTrack {
    /// Creates a track with ten positions.
    pub fn new(events: NativeEvents) -> Self {
        Self {
            events,
            position: 0,
            max: 10,
            ticks_visible: false,
            enabled: true,
        }
    }

    /// Whether tick marks are drawn.
    pub fn ticks_visible(&self) -> bool {
        self.ticks_visible
    }

    /// Whether user interaction is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Simulates the user pressing the track.
    pub fn press(&mut self) {
        if self.enabled {
            self.events.post(NativeEvent::Pressed);
        }
    }

    /// Simulates the user moving the thumb to a native position.
    pub fn drag_to_position(&mut self, position: i32) {
        if self.enabled {
            self.move_to(position);
        }
    }

    /// Simulates the user releasing the track.
    pub fn release(&mut self) {
        if self.enabled {
            self.events.post(NativeEvent::Released);
        }
    }

    fn move_to(&mut self, position: i32) {
        let position = position.clamp(0, self.max);
        if position != self.position {
            self.position = position;
            trace!(position, "stepper track moved");
            self.events.post(NativeEvent::Changed);
        }
    }
}

impl IntNative for StepperTrack {
    fn int_value(&self) -> i32 {
        self.position
    }

    fn set_int_value(&mut self, value: i32) {
        self.move_to(value);
    }

    fn int_max(&self) -> i32 {
        self.max
    }

    fn set_int_max(&mut self, max: i32) {
        self.max = max.max(0);
        let position = self.position;
        self.move_to(position);
    }

    fn set_ticks_visible(&mut self, visible: bool) {
        self.ticks_visible = visible;
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn programmatic_moves_are_reported() {
        let events = NativeEvents::new();
        let mut track = StepperTrack::new(events.clone());
        track.set_int_value(4);

        assert_eq!(track.int_value(), 4);
        assert_eq!(events.drain().as_slice(), &[NativeEvent::Changed]);
    }

    #[test]
    fn shrinking_the_track_clamps_the_position() {
        let events = NativeEvents::new();
        let mut track = StepperTrack::new(events.clone());
        track.set_int_value(8);
        track.set_int_max(3);

        assert_eq!(track.int_value(), 3);
        assert_eq!(events.drain().len(), 2);
    }

    #[test]
    fn adapter_drives_the_track() {
        let events = NativeEvents::new();
        let mut slider = StepperFactory.create_slider(events.clone());
        slider.set_max(100.0);
        slider.set_tick_count(Some(11));
        slider.set_value(42.0);

        let adapter = slider
            .downcast_ref::<StepperSlider>()
            .expect("stepper backend");
        assert_eq!(adapter.native().int_value(), 4);
        assert!(adapter.native().ticks_visible());
        assert_eq!(slider.value(), 42.0);
    }
}
