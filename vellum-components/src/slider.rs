//! A slider for selecting a number in a range.
//!
//! ## Usage
//!
//! Use for continuous values such as volume, or with a tick count for a small
//! set of evenly spaced choices.
use derive_setters::Setters;
use tracing::{debug, trace, warn};
use vellum_ui::{
    EventKind, Handler, HandlerEvent, MAX_TICK_COUNT, NativeEvent, NativeEvents, SliderBackend,
    WidgetError, WidgetFactory, WidgetResult,
};

use scope::ProgrammaticChange;

mod scope;

/// Arguments for creating a [`Slider`].
#[derive(Clone, Debug, Setters)]
pub struct SliderArgs {
    /// Initial value. Defaults to the middle of the range.
    #[setters(strip_option)]
    pub value: Option<f64>,
    /// Lower end of the range.
    pub min: f64,
    /// Upper end of the range.
    pub max: f64,
    /// Number of evenly spaced ticks, including both ends. `None` makes the
    /// slider continuous.
    #[setters(strip_option)]
    pub tick_count: Option<u32>,
    /// Whether the user can interact with the slider.
    pub enabled: bool,
    /// Handler invoked when the value changes.
    #[setters(skip)]
    pub on_change: Option<Handler<Slider>>,
    /// Handler invoked when the user presses the slider.
    #[setters(skip)]
    pub on_press: Option<Handler<Slider>>,
    /// Handler invoked when the user releases the slider.
    #[setters(skip)]
    pub on_release: Option<Handler<Slider>>,
}

impl SliderArgs {
    /// Sets the on_change handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(&Slider, &HandlerEvent) + Send + Sync + 'static,
    {
        self.on_change = Some(Handler::new(on_change));
        self
    }

    /// Sets the on_change handler using a shared handler.
    pub fn on_change_shared(mut self, on_change: impl Into<Handler<Slider>>) -> Self {
        self.on_change = Some(on_change.into());
        self
    }

    /// Sets the on_press handler.
    pub fn on_press<F>(mut self, on_press: F) -> Self
    where
        F: Fn(&Slider, &HandlerEvent) + Send + Sync + 'static,
    {
        self.on_press = Some(Handler::new(on_press));
        self
    }

    /// Sets the on_release handler.
    pub fn on_release<F>(mut self, on_release: F) -> Self
    where
        F: Fn(&Slider, &HandlerEvent) + Send + Sync + 'static,
    {
        self.on_release = Some(Handler::new(on_release));
        self
    }
}

impl Default for SliderArgs {
    fn default() -> Self {
        Self {
            value: None,
            min: 0.0,
            max: 1.0,
            tick_count: None,
            enabled: true,
            on_change: None,
            on_press: None,
            on_release: None,
        }
    }
}

/// A slider whose value always lies within `[min, max]`.
///
/// A discrete slider rounds every value to the nearest of its `tick_count`
/// evenly spaced ticks. `on_change` fires once for every observable value
/// change, whether it came from the user or from code, and never while the
/// slider is being created.
pub struct Slider {
    backend: Box<dyn SliderBackend>,
    events: NativeEvents,
    enabled: bool,
    on_change: Handler<Slider>,
    on_press: Handler<Slider>,
    on_release: Handler<Slider>,
}

impl Slider {
    /// Creates a slider on the given platform.
    ///
    /// # Errors
    ///
    /// Fails if `tick_count` is less than 2 or greater than [`MAX_TICK_COUNT`].
    pub fn new<F>(factory: &F, args: SliderArgs) -> WidgetResult<Self>
    where
        F: WidgetFactory + ?Sized,
    {
        let events = NativeEvents::new();
        let backend = factory.create_slider(events.clone());
        let mut slider = Self {
            backend,
            events,
            enabled: true,
            on_change: Handler::noop(),
            on_press: Handler::noop(),
            on_release: Handler::noop(),
        };

        slider.set_min(args.min);
        slider.set_max(args.max);
        slider.set_tick_count(args.tick_count)?;
        slider.set_value(args.value.unwrap_or((args.min + args.max) / 2.0));
        slider.events.drain();

        slider.on_change = Handler::from_option(args.on_change);
        slider.on_press = Handler::from_option(args.on_press);
        slider.on_release = Handler::from_option(args.on_release);
        slider.set_enabled(args.enabled);

        debug!(
            platform = factory.name(),
            value = slider.value(),
            min = slider.min(),
            max = slider.max(),
            tick_count = ?slider.tick_count(),
            "slider created"
        );
        Ok(slider)
    }

    fn programmatic_change(&mut self) -> ProgrammaticChange<'_> {
        ProgrammaticChange::new(self)
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.backend.value()
    }

    /// Sets the value, clipping it to the range and rounding it to the nearest
    /// tick if the slider is discrete.
    pub fn set_value(&mut self, value: f64) {
        let value = if value < self.min() {
            self.min()
        } else if value > self.max() {
            self.max()
        } else {
            value
        };
        let mut scope = self.programmatic_change();
        scope.apply_value(value);
    }

    fn apply_value(&mut self, value: f64) {
        let rounded = self.round_value(value);
        self.backend.set_value(rounded);
    }

    fn round_value(&self, value: f64) -> f64 {
        match self.tick_step() {
            Some(step) => {
                let min = self.min();
                min + ((value - min) / step).round_ties_even() * step
            }
            None => value,
        }
    }

    /// Lower end of the range.
    pub fn min(&self) -> f64 {
        self.backend.min()
    }

    /// Sets the lower end of the range.
    ///
    /// A minimum above the current maximum raises the maximum to match. The
    /// value is clipped to the new range and re-rounded to the moved ticks.
    pub fn set_min(&mut self, min: f64) {
        let mut scope = self.programmatic_change();
        let old_value = scope.old_value();
        let mut max = scope.max();
        if max < min {
            debug!(min, "raising slider maximum to follow minimum");
            max = min;
            scope.backend.set_max(max);
        }
        scope.backend.set_min(min);
        scope.apply_value(old_value.min(max).max(min));
    }

    /// Upper end of the range.
    pub fn max(&self) -> f64 {
        self.backend.max()
    }

    /// Sets the upper end of the range.
    ///
    /// A maximum below the current minimum lowers the minimum to match. The
    /// value is clipped to the new range and re-rounded to the moved ticks.
    pub fn set_max(&mut self, max: f64) {
        let mut scope = self.programmatic_change();
        let old_value = scope.old_value();
        let mut min = scope.min();
        if min > max {
            debug!(max, "lowering slider minimum to follow maximum");
            min = max;
            scope.backend.set_min(min);
        }
        scope.backend.set_max(max);
        scope.apply_value(old_value.min(max).max(min));
    }

    /// Number of ticks, or `None` for a continuous slider.
    pub fn tick_count(&self) -> Option<u32> {
        self.backend.tick_count()
    }

    /// Makes the slider discrete with `tick_count` ticks, or continuous with
    /// `None`. The current value is rounded to the nearest tick.
    ///
    /// # Errors
    ///
    /// Fails without changing anything if the count is less than 2 or greater
    /// than [`MAX_TICK_COUNT`].
    pub fn set_tick_count(&mut self, tick_count: Option<u32>) -> WidgetResult {
        if let Some(count) = tick_count {
            if count < 2 {
                warn!(tick_count = count, "rejected slider tick count");
                return Err(WidgetError::TickCountTooSmall { tick_count: count });
            }
            if count > MAX_TICK_COUNT {
                warn!(tick_count = count, "rejected slider tick count");
                return Err(WidgetError::TickCountTooLarge {
                    tick_count: count,
                    max: MAX_TICK_COUNT,
                });
            }
        }

        let mut scope = self.programmatic_change();
        let old_value = scope.old_value();
        scope.backend.set_tick_count(tick_count);
        // Switching between discrete and continuous changes the native range of
        // some backends, so the value is always pushed again.
        scope.set_value(old_value);
        Ok(())
    }

    /// Difference in value between adjacent ticks.
    ///
    /// `None` for a continuous slider, or when the range is empty.
    pub fn tick_step(&self) -> Option<f64> {
        let intervals = self.tick_count()?.checked_sub(1).filter(|&n| n > 0)?;
        let (min, max) = (self.min(), self.max());
        if max == min {
            return None;
        }
        Some((max - min) / f64::from(intervals))
    }

    /// Value measured in ticks, from 1 at `min` to `tick_count` at `max`.
    ///
    /// `None` for a continuous slider.
    pub fn tick_value(&self) -> Option<i64> {
        let step = self.tick_step()?;
        Some(((self.value() - self.min()) / step).round_ties_even() as i64 + 1)
    }

    /// Sets the value by tick number.
    ///
    /// # Errors
    ///
    /// Fails if a tick is given to a continuous slider, or if `None` is given
    /// to a discrete one.
    pub fn set_tick_value(&mut self, tick_value: Option<i64>) -> WidgetResult {
        match (self.tick_count(), tick_value) {
            (None, None) => Ok(()),
            (None, Some(_)) => Err(WidgetError::TickValueOnContinuous),
            (Some(_), None) => Err(WidgetError::MissingTickValue),
            (Some(_), Some(tick)) => {
                let step = self.tick_step().ok_or(WidgetError::MissingTickValue)?;
                self.set_value(self.min() + (tick as f64 - 1.0) * step);
                Ok(())
            }
        }
    }

    /// Runs `update` as a single programmatic change.
    ///
    /// However many setters `update` calls, `on_change` fires at most once,
    /// and only if the value at the end differs from the value at the start.
    pub fn update<R>(&mut self, update: impl FnOnce(&mut Slider) -> R) -> R {
        let mut scope = self.programmatic_change();
        update(&mut *scope)
    }

    /// Whether the user can interact with the slider.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables user interaction.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.backend.set_enabled(enabled);
    }

    /// Handler invoked when the value changes.
    pub fn on_change(&self) -> &Handler<Slider> {
        &self.on_change
    }

    /// Replaces the on_change handler. `None` detaches it.
    pub fn set_on_change(&mut self, handler: Option<Handler<Slider>>) {
        self.on_change = Handler::from_option(handler);
    }

    /// Handler invoked when the user presses the slider.
    pub fn on_press(&self) -> &Handler<Slider> {
        &self.on_press
    }

    /// Replaces the on_press handler. `None` detaches it.
    pub fn set_on_press(&mut self, handler: Option<Handler<Slider>>) {
        self.on_press = Handler::from_option(handler);
    }

    /// Handler invoked when the user releases the slider.
    pub fn on_release(&self) -> &Handler<Slider> {
        &self.on_release
    }

    /// Replaces the on_release handler. `None` detaches it.
    pub fn set_on_release(&mut self, handler: Option<Handler<Slider>>) {
        self.on_release = Handler::from_option(handler);
    }

    /// Delivers user interaction reported by the native control.
    ///
    /// Platform glue calls this after the native control posted events.
    pub fn process_native_events(&mut self) {
        for event in self.events.drain() {
            match event {
                NativeEvent::Changed => {
                    self.backend.sync_native();
                    self.notify(EventKind::Change);
                }
                NativeEvent::Pressed => self.notify(EventKind::Press),
                NativeEvent::Released => self.notify(EventKind::Release),
            }
        }
    }

    fn notify(&self, kind: EventKind) {
        let handler = match kind {
            EventKind::Change => &self.on_change,
            EventKind::Press => &self.on_press,
            EventKind::Release => &self.on_release,
        };
        trace!(?kind, value = self.value(), "slider event");
        handler.call(self, &HandlerEvent::new(kind));
    }

    /// The platform backend, for platform glue.
    pub fn native(&self) -> &dyn SliderBackend {
        self.backend.as_ref()
    }

    /// Mutable access to the platform backend, for platform glue.
    ///
    /// Changing the range through the backend bypasses the clipping rules.
    pub fn native_mut(&mut self) -> &mut dyn SliderBackend {
        self.backend.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use parking_lot::Mutex;
    use rstest::rstest;
    use vellum_platform::{HeadlessSlider, Platform, StepperSlider};
    use vellum_ui::ErrorKind;

    use super::*;

    #[derive(Clone, Default)]
    struct Counts {
        change: Arc<AtomicUsize>,
        press: Arc<AtomicUsize>,
        release: Arc<AtomicUsize>,
    }

    impl Counts {
        fn attach(&self, args: SliderArgs) -> SliderArgs {
            let change = Arc::clone(&self.change);
            let press = Arc::clone(&self.press);
            let release = Arc::clone(&self.release);
            args.on_change(move |_, event| {
                assert_eq!(event.kind, EventKind::Change);
                change.fetch_add(1, Ordering::SeqCst);
            })
            .on_press(move |_, _| {
                press.fetch_add(1, Ordering::SeqCst);
            })
            .on_release(move |_, _| {
                release.fetch_add(1, Ordering::SeqCst);
            })
        }

        fn changes(&self) -> usize {
            self.change.load(Ordering::SeqCst)
        }

        fn presses(&self) -> usize {
            self.press.load(Ordering::SeqCst)
        }

        fn releases(&self) -> usize {
            self.release.load(Ordering::SeqCst)
        }
    }

    fn make_slider(platform: Platform, args: SliderArgs) -> (Slider, Counts) {
        let counts = Counts::default();
        let slider = Slider::new(&platform, counts.attach(args)).expect("valid slider");
        (slider, counts)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[rstest]
    fn defaults_to_midpoint(#[values(Platform::Headless, Platform::Stepper)] platform: Platform) {
        let (slider, counts) = make_slider(platform, SliderArgs::default().min(-4.0).max(8.0));

        assert_eq!(slider.value(), 2.0);
        assert_eq!(slider.tick_count(), None);
        assert_eq!(slider.tick_step(), None);
        assert_eq!(slider.tick_value(), None);
        assert_eq!(counts.changes(), 0);
    }

    #[rstest]
    fn construction_never_notifies(
        #[values(Platform::Headless, Platform::Stepper)] platform: Platform,
    ) {
        let (slider, counts) = make_slider(
            platform,
            SliderArgs::default()
                .min(10.0)
                .max(20.0)
                .tick_count(3)
                .value(19.0),
        );

        assert_eq!(slider.value(), 20.0);
        assert_eq!(counts.changes(), 0);
    }

    #[rstest]
    fn discrete_values_round_to_nearest_tick(
        #[values(Platform::Headless, Platform::Stepper)] platform: Platform,
    ) {
        let (mut slider, counts) =
            make_slider(platform, SliderArgs::default().max(10.0).tick_count(3));
        assert_eq!(slider.tick_step(), Some(5.0));
        assert_eq!(slider.value(), 5.0);

        slider.set_value(7.0);
        assert_eq!(slider.value(), 5.0);
        assert_eq!(slider.tick_value(), Some(2));
        assert_eq!(counts.changes(), 0);

        slider.set_value(8.0);
        assert_eq!(slider.value(), 10.0);
        assert_eq!(slider.tick_value(), Some(3));
        assert_eq!(counts.changes(), 1);
    }

    #[rstest]
    #[case(-3.0, 0.0)]
    #[case(0.25, 0.25)]
    #[case(7.5, 1.0)]
    fn values_are_clipped_to_range(
        #[case] requested: f64,
        #[case] expected: f64,
        #[values(Platform::Headless, Platform::Stepper)] platform: Platform,
    ) {
        let (mut slider, counts) = make_slider(platform, SliderArgs::default());
        slider.set_value(requested);

        assert_eq!(slider.value(), expected);
        assert!(slider.min() <= slider.value() && slider.value() <= slider.max());
        assert_eq!(counts.changes(), 1);
    }

    #[test]
    fn setting_the_same_value_does_not_notify() {
        let (mut slider, counts) = make_slider(Platform::Stepper, SliderArgs::default().value(0.3));
        slider.set_value(0.3);
        assert_eq!(counts.changes(), 0);
    }

    #[rstest]
    fn min_above_max_drags_max_up(
        #[values(Platform::Headless, Platform::Stepper)] platform: Platform,
    ) {
        let (mut slider, counts) =
            make_slider(platform, SliderArgs::default().max(10.0).value(5.0));
        slider.set_min(20.0);

        assert_eq!(slider.min(), 20.0);
        assert_eq!(slider.max(), 20.0);
        assert_eq!(slider.value(), 20.0);
        assert_eq!(counts.changes(), 1);
    }

    #[rstest]
    fn max_below_min_drags_min_down(
        #[values(Platform::Headless, Platform::Stepper)] platform: Platform,
    ) {
        let (mut slider, counts) =
            make_slider(platform, SliderArgs::default().min(5.0).max(10.0).value(7.0));
        slider.set_max(2.0);

        assert_eq!(slider.min(), 2.0);
        assert_eq!(slider.max(), 2.0);
        assert_eq!(slider.value(), 2.0);
        assert_eq!(counts.changes(), 1);
    }

    #[test]
    fn moving_a_bound_re_rounds_to_the_new_ticks() {
        let (mut slider, counts) = make_slider(
            Platform::Headless,
            SliderArgs::default().max(10.0).tick_count(3).value(5.0),
        );
        slider.set_max(12.0);

        assert_eq!(slider.tick_step(), Some(6.0));
        assert_eq!(slider.value(), 6.0);
        assert_eq!(counts.changes(), 1);
    }

    #[test]
    fn widening_the_range_keeps_a_continuous_value() {
        let (mut slider, counts) = make_slider(Platform::Headless, SliderArgs::default().value(0.4));
        slider.set_max(100.0);

        assert_eq!(slider.value(), 0.4);
        assert_eq!(counts.changes(), 0);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn tick_count_below_two_is_rejected(#[case] tick_count: u32) {
        let (mut slider, counts) = make_slider(Platform::Headless, SliderArgs::default().tick_count(5));
        let err = slider
            .set_tick_count(Some(tick_count))
            .expect_err("too few ticks");

        assert_eq!(err, WidgetError::TickCountTooSmall { tick_count });
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(slider.tick_count(), Some(5));
        assert_eq!(counts.changes(), 0);
    }

    #[test]
    fn creation_with_too_few_ticks_fails() {
        let result = Slider::new(&Platform::Headless, SliderArgs::default().tick_count(1));
        assert!(matches!(
            result,
            Err(WidgetError::TickCountTooSmall { tick_count: 1 })
        ));
    }

    #[rstest]
    fn tick_count_round_trip_restores_continuous_mode(
        #[values(Platform::Headless, Platform::Stepper)] platform: Platform,
    ) {
        let (mut slider, counts) = make_slider(platform, SliderArgs::default().value(0.3));

        slider.set_tick_count(None).expect("valid tick count");
        assert_eq!(slider.tick_step(), None);

        slider.set_tick_count(Some(5)).expect("valid tick count");
        assert_eq!(slider.tick_step(), Some(0.25));
        assert_eq!(slider.value(), 0.25);
        assert_eq!(counts.changes(), 1);

        slider.set_tick_count(None).expect("valid tick count");
        assert_eq!(slider.tick_count(), None);
        assert_eq!(slider.tick_step(), None);
        assert_eq!(slider.tick_value(), None);
        assert_eq!(slider.value(), 0.25);
        assert_eq!(counts.changes(), 1);
    }

    #[rstest]
    fn tick_values_cover_every_tick(
        #[values(2, 3, 5, 11)] tick_count: u32,
        #[values(Platform::Headless, Platform::Stepper)] platform: Platform,
    ) {
        let (mut slider, _) = make_slider(
            platform,
            SliderArgs::default()
                .min(-1.5)
                .max(3.5)
                .tick_count(tick_count),
        );
        let step = slider.tick_step().expect("discrete slider");

        for tick in 1..=i64::from(tick_count) {
            slider.set_tick_value(Some(tick)).expect("valid tick");
            assert_eq!(slider.tick_value(), Some(tick));
            assert_close(slider.value(), -1.5 + (tick - 1) as f64 * step);
        }
    }

    #[rstest]
    #[case(0, 0.0)]
    #[case(-3, 0.0)]
    #[case(8, 10.0)]
    #[case(i64::MIN, 0.0)]
    #[case(i64::MAX, 10.0)]
    fn out_of_range_tick_values_are_clipped(#[case] tick: i64, #[case] expected: f64) {
        let (mut slider, _) = make_slider(
            Platform::Headless,
            SliderArgs::default().max(10.0).tick_count(3),
        );
        slider.set_tick_value(Some(tick)).expect("discrete slider");

        assert_eq!(slider.value(), expected);
        assert!(slider.min() <= slider.value() && slider.value() <= slider.max());
    }

    #[rstest]
    fn tick_count_above_native_limit_is_rejected(
        #[values(Platform::Headless, Platform::Stepper)] platform: Platform,
    ) {
        let (mut slider, _) = make_slider(platform, SliderArgs::default().tick_count(5));
        let err = slider
            .set_tick_count(Some(u32::MAX))
            .expect_err("too many ticks");

        assert_eq!(
            err,
            WidgetError::TickCountTooLarge {
                tick_count: u32::MAX,
                max: MAX_TICK_COUNT
            }
        );
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(slider.tick_count(), Some(5));
    }

    #[test]
    fn largest_tick_count_matches_across_platforms() {
        let args = SliderArgs::default().max(4.0).tick_count(MAX_TICK_COUNT);
        let (headless, _) = make_slider(Platform::Headless, args.clone());
        let (stepper, _) = make_slider(Platform::Stepper, args);

        assert_eq!(headless.tick_count(), Some(MAX_TICK_COUNT));
        assert_eq!(stepper.tick_count(), Some(MAX_TICK_COUNT));
        assert_eq!(headless.tick_step(), stepper.tick_step());
    }

    #[test]
    fn tick_value_must_match_the_slider_mode() {
        let (mut continuous, _) = make_slider(Platform::Headless, SliderArgs::default());
        assert_eq!(
            continuous.set_tick_value(Some(1)),
            Err(WidgetError::TickValueOnContinuous)
        );
        assert_eq!(continuous.set_tick_value(None), Ok(()));

        let (mut discrete, _) = make_slider(Platform::Headless, SliderArgs::default().tick_count(4));
        assert_eq!(
            discrete.set_tick_value(None),
            Err(WidgetError::MissingTickValue)
        );
    }

    #[test]
    fn empty_range_has_no_ticks() {
        let (mut slider, _) = make_slider(
            Platform::Headless,
            SliderArgs::default().min(3.0).max(3.0).tick_count(4),
        );

        assert_eq!(slider.value(), 3.0);
        assert_eq!(slider.tick_step(), None);
        assert_eq!(slider.tick_value(), None);
        assert_eq!(
            slider.set_tick_value(Some(2)),
            Err(WidgetError::MissingTickValue)
        );
    }

    #[rstest]
    fn compound_update_notifies_at_most_once(
        #[values(Platform::Headless, Platform::Stepper)] platform: Platform,
    ) {
        let (mut slider, counts) = make_slider(platform, SliderArgs::default().max(10.0).value(4.0));

        slider.update(|slider| {
            slider.set_min(5.0);
            slider.set_max(8.0);
            slider.set_value(6.0);
        });
        assert_eq!(slider.value(), 6.0);
        assert_eq!(counts.changes(), 1);

        slider.update(|slider| {
            slider.set_value(7.0);
            slider.set_tick_count(Some(4)).expect("valid tick count");
            slider.set_tick_count(None).expect("valid tick count");
            slider.set_value(6.0);
        });
        assert_eq!(slider.value(), 6.0);
        assert_eq!(counts.changes(), 1);
    }

    #[test]
    fn headless_user_drag_reports_press_change_release() {
        let (mut slider, counts) = make_slider(
            Platform::Headless,
            SliderArgs::default().max(10.0).tick_count(11),
        );
        let native = slider
            .native_mut()
            .downcast_mut::<HeadlessSlider>()
            .expect("headless backend");
        native.press();
        native.drag_to(7.2);
        native.release();
        slider.process_native_events();

        assert_eq!(slider.value(), 7.0);
        assert_eq!(slider.tick_value(), Some(8));
        assert_eq!(counts.presses(), 1);
        assert_eq!(counts.changes(), 1);
        assert_eq!(counts.releases(), 1);
    }

    #[test]
    fn stepper_user_drag_syncs_logical_value() {
        let (mut slider, counts) = make_slider(
            Platform::Stepper,
            SliderArgs::default().min(100.0).max(200.0).tick_count(5),
        );
        let track = slider
            .native_mut()
            .downcast_mut::<StepperSlider>()
            .expect("stepper backend")
            .native_mut();
        track.press();
        track.drag_to_position(3);
        track.release();
        slider.process_native_events();

        assert_eq!(slider.value(), 175.0);
        assert_eq!(slider.tick_value(), Some(4));
        assert_eq!(counts.presses(), 1);
        assert_eq!(counts.changes(), 1);
        assert_eq!(counts.releases(), 1);
    }

    #[test]
    fn replaced_press_and_release_handlers_take_over() {
        let (mut slider, counts) = make_slider(Platform::Headless, SliderArgs::default());
        let swapped = Arc::new(AtomicUsize::new(0));
        let on_press = Arc::clone(&swapped);
        let on_release = Arc::clone(&swapped);
        slider.set_on_press(Some(Handler::new(move |_: &Slider, event: &HandlerEvent| {
            assert_eq!(event.kind, EventKind::Press);
            on_press.fetch_add(1, Ordering::SeqCst);
        })));
        slider.set_on_release(Some(Handler::new(move |_: &Slider, event: &HandlerEvent| {
            assert_eq!(event.kind, EventKind::Release);
            on_release.fetch_add(10, Ordering::SeqCst);
        })));

        let native = slider
            .native_mut()
            .downcast_mut::<HeadlessSlider>()
            .expect("headless backend");
        native.press();
        assert!(native.is_pressed());
        native.drag_to(0.9);
        native.release();
        assert!(!native.is_pressed());
        slider.process_native_events();

        assert_eq!(swapped.load(Ordering::SeqCst), 11);
        assert_eq!(counts.presses(), 0);
        assert_eq!(counts.releases(), 0);
        assert_eq!(counts.changes(), 1);
        assert!(!slider.on_press().is_noop());
        assert!(!slider.on_release().is_noop());
    }

    #[test]
    fn disabled_stepper_track_ignores_the_user() {
        let (mut slider, counts) = make_slider(
            Platform::Stepper,
            SliderArgs::default().max(10.0).tick_count(11).enabled(false),
        );
        let track = slider
            .native_mut()
            .downcast_mut::<StepperSlider>()
            .expect("stepper backend")
            .native_mut();
        assert!(!track.is_enabled());
        track.press();
        track.drag_to_position(9);
        track.release();
        slider.process_native_events();

        assert_eq!(slider.value(), 5.0);
        assert_eq!(counts.presses(), 0);
        assert_eq!(counts.changes(), 0);

        slider.set_enabled(true);
        let track = slider
            .native()
            .downcast_ref::<StepperSlider>()
            .expect("stepper backend")
            .native();
        assert!(track.is_enabled());
    }

    #[test]
    fn stepper_echoes_never_reach_the_handler() {
        let (mut slider, counts) = make_slider(Platform::Stepper, SliderArgs::default().max(100.0));

        slider.set_value(33.3);
        slider.process_native_events();

        assert_eq!(slider.value(), 33.3);
        assert_eq!(counts.changes(), 1);
    }

    #[test]
    fn enabled_state_reaches_the_backend() {
        let (mut slider, _) = make_slider(Platform::Headless, SliderArgs::default().enabled(false));
        let native = slider
            .native()
            .downcast_ref::<HeadlessSlider>()
            .expect("headless backend");
        assert!(!slider.is_enabled());
        assert!(!native.is_enabled());

        slider.set_enabled(true);
        assert!(slider.is_enabled());
    }

    #[test]
    fn handlers_receive_the_slider() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut slider = Slider::new(
            &Platform::Headless,
            SliderArgs::default().on_change(move |slider, _| sink.lock().push(slider.value())),
        )
        .expect("valid slider");

        slider.set_value(0.75);
        slider.set_on_change(None);
        slider.set_value(0.25);

        assert_eq!(*seen.lock(), vec![0.75]);
        assert!(slider.on_change().is_noop());
    }
}
