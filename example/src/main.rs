use tracing::info;
use vellum_components::{DateInput, DateInputArgs, Slider, SliderArgs};
use vellum_platform::{HeadlessSlider, Platform, StepperSlider};
use vellum_ui::{IntNative, SliderBackend, WidgetFactory, chrono::NaiveDate, init_tracing};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let platform = Platform::from_env();
    info!("Running on the {} platform", platform.name());

    let mut volume = Slider::new(
        &platform,
        SliderArgs::default()
            .max(10.0)
            .tick_count(11)
            .on_change(|slider, _| info!("volume is now {}", slider.value()))
            .on_press(|_, _| info!("volume grabbed"))
            .on_release(|_, _| info!("volume released")),
    )?;

    volume.set_value(7.4);
    volume.update(|slider| {
        slider.set_max(20.0);
        slider.set_tick_count(Some(5))
    })?;
    drag(&mut volume, 0.25);
    info!(
        "volume settled at {} (tick {:?} of {:?})",
        volume.value(),
        volume.tick_value(),
        volume.tick_count()
    );

    let mut deadline = DateInput::new(
        &platform,
        DateInputArgs::default()
            .min("2024-01-01")
            .max("2024-12-31")
            .on_change(|input, _| info!("deadline moved to {}", input.value())),
    )?;
    deadline.set_value("2030-06-30")?;
    deadline.set_min("2024-07-01")?;
    let far_future = NaiveDate::from_ymd_opt(10_000, 1, 1).unwrap_or(NaiveDate::MAX);
    if let Err(err) = deadline.set_max(far_future) {
        info!("rejected deadline bound: {err}");
    }
    info!("deadline is {}", deadline.value());

    Ok(())
}

/// Simulates the user dragging the slider to `fraction` of its track.
fn drag(slider: &mut Slider, fraction: f64) {
    let native = slider.native_mut();
    if let Some(headless) = native.downcast_mut::<HeadlessSlider>() {
        let target = headless.min() + fraction * (headless.max() - headless.min());
        headless.press();
        headless.drag_to(target);
        headless.release();
    } else if let Some(stepper) = native.downcast_mut::<StepperSlider>() {
        let track = stepper.native_mut();
        let position = (fraction * f64::from(track.int_max())).round();
        track.press();
        track.drag_to_position(position as i32);
        track.release();
    }
    slider.process_native_events();
}
