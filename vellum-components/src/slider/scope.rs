use std::ops::{Deref, DerefMut};

use tracing::trace;
use vellum_ui::EventKind;

use super::Slider;

/// Guard for a change made by code rather than by the user.
///
/// While alive, native change events are discarded. When the outermost guard
/// drops, `on_change` fires once if the value differs from the value seen when
/// that guard was created. Nested guards never fire.
pub(super) struct ProgrammaticChange<'a> {
    slider: &'a mut Slider,
    old_value: f64,
}

impl<'a> ProgrammaticChange<'a> {
    pub(super) fn new(slider: &'a mut Slider) -> Self {
        let old_value = slider.value();
        slider.events.suppress_changes();
        Self { slider, old_value }
    }

    /// Value before this scope started.
    pub(super) fn old_value(&self) -> f64 {
        self.old_value
    }
}

impl Deref for ProgrammaticChange<'_> {
    type Target = Slider;

    fn deref(&self) -> &Slider {
        self.slider
    }
}

impl DerefMut for ProgrammaticChange<'_> {
    fn deref_mut(&mut self) -> &mut Slider {
        self.slider
    }
}

impl Drop for ProgrammaticChange<'_> {
    fn drop(&mut self) {
        if !self.slider.events.resume_changes() {
            return;
        }
        let value = self.slider.value();
        if value != self.old_value {
            trace!(old = self.old_value, new = value, "programmatic slider change");
            self.slider.notify(EventKind::Change);
        }
    }
}
