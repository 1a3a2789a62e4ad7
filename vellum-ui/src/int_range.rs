//! Float slider emulation on top of integer-only native controls.
//!
//! ## Usage
//!
//! Wrap a platform's integer slider in [`IntRangeAdapter`] to obtain a full
//! [`SliderBackend`].

use tracing::{debug, trace};

use crate::backend::{IntNative, SliderBackend};

/// Number of native steps used to approximate a continuous slider.
pub const CONTINUOUS_MAX: i32 = 10_000;

/// Largest tick count a slider accepts, one past the highest `i32` position.
pub const MAX_TICK_COUNT: u32 = i32::MAX as u32 + 1;

/// Maps a continuous logical range onto the `[0, native_max]` position space
/// of an [`IntNative`] control.
///
/// The logical value passed to [`SliderBackend::set_value`] is cached as
/// given, so a value read back is exactly the one written unless the user
/// moved the native control in between.
#[derive(Debug)]
pub struct IntRangeAdapter<N> {
    native: N,
    value: f64,
    min: f64,
    max: f64,
    discrete: bool,
}

impl<N: IntNative> IntRangeAdapter<N> {
    /// Wraps a native control, putting it in continuous mode over `[0, 1]`.
    pub fn new(mut native: N) -> Self {
        native.set_int_max(CONTINUOUS_MAX);
        native.set_ticks_visible(false);
        Self {
            native,
            value: 0.0,
            min: 0.0,
            max: 1.0,
            discrete: false,
        }
    }

    /// The wrapped native control.
    pub fn native(&self) -> &N {
        &self.native
    }

    /// Mutable access to the wrapped native control.
    pub fn native_mut(&mut self) -> &mut N {
        &mut self.native
    }

    /// Native position that represents `value` in the current range.
    pub fn position_for(&self, value: f64) -> i32 {
        let span = self.max - self.min;
        if span == 0.0 {
            return 0;
        }
        let fraction = (value - self.min) / span;
        (fraction * f64::from(self.native.int_max())).round_ties_even() as i32
    }

    /// Logical value represented by the native control's current position.
    pub fn value_at_native_position(&self) -> f64 {
        let int_max = self.native.int_max();
        if int_max == 0 {
            return self.min;
        }
        let span = self.max - self.min;
        self.min + f64::from(self.native.int_value()) / f64::from(int_max) * span
    }
}

impl<N: IntNative> SliderBackend for IntRangeAdapter<N> {
    fn value(&self) -> f64 {
        self.value
    }

    fn set_value(&mut self, value: f64) {
        let position = self.position_for(value);
        trace!(value, position, "moving integer slider");
        self.native.set_int_value(position);
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
        if !self.discrete {
            return None;
        }
        u32::try_from(self.native.int_max()).ok().map(|max| max + 1)
    }

    fn set_tick_count(&mut self, tick_count: Option<u32>) {
        match tick_count {
            None => {
                self.discrete = false;
                self.native.set_int_max(CONTINUOUS_MAX);
            }
            Some(count) => {
                self.discrete = true;
                let int_max =
                    i32::try_from(count.clamp(1, MAX_TICK_COUNT) - 1).unwrap_or(i32::MAX);
                self.native.set_int_max(int_max);
            }
        }
        debug!(
            discrete = self.discrete,
            int_max = self.native.int_max(),
            "integer slider mode"
        );
        self.native.set_ticks_visible(self.discrete);
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.native.set_enabled(enabled);
    }

    fn sync_native(&mut self) {
        self.value = self.value_at_native_position();
        trace!(value = self.value, "integer slider moved by user");
    }
}
