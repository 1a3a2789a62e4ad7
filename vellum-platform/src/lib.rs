//! Platform backends for vellum widgets.
//!
//! ## Usage
//!
//! Pick a [`Platform`] at app startup and pass it wherever a
//! [`WidgetFactory`] is expected.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod headless;
pub mod stepper;

use tracing::warn;
use vellum_ui::{DateInputBackend, NativeEvents, SliderBackend, WidgetFactory};

pub use headless::{HeadlessDateInput, HeadlessFactory, HeadlessSlider};
pub use stepper::{StepperFactory, StepperSlider, StepperTrack};

/// Environment variable naming the platform chosen by [`Platform::from_env`].
pub const PLATFORM_ENV: &str = "VELLUM_PLATFORM";

/// Platforms bundled with vellum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Platform {
    /// Float-native controls kept in memory.
    #[default]
    Headless,
    /// Integer-only slider controls behind an integer range adapter.
    Stepper,
}

impl Platform {
    /// Looks a platform up by its lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "headless" => Some(Self::Headless),
            "stepper" => Some(Self::Stepper),
            _ => None,
        }
    }

    /// Reads the platform from [`PLATFORM_ENV`], falling back to
    /// [`Platform::Headless`].
    pub fn from_env() -> Self {
        match std::env::var(PLATFORM_ENV) {
            Ok(name) => Self::from_name(&name).unwrap_or_else(|| {
                warn!("Unknown platform {name:?} in {PLATFORM_ENV}, using headless");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}

impl WidgetFactory for Platform {
    fn name(&self) -> &'static str {
        match self {
            Self::Headless => "headless",
            Self::Stepper => "stepper",
        }
    }

    fn create_date_input(&self, events: NativeEvents) -> Box<dyn DateInputBackend> {
        match self {
            Self::Headless => HeadlessFactory.create_date_input(events),
            Self::Stepper => StepperFactory.create_date_input(events),
        }
    }

    fn create_slider(&self, events: NativeEvents) -> Box<dyn SliderBackend> {
        match self {
            Self::Headless => HeadlessFactory.create_slider(events),
            Self::Stepper => StepperFactory.create_slider(events),
        }
    }
}
