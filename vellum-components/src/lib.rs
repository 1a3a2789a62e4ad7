//! Bounded widgets for vellum.
//!
//! Both widgets keep `value`, `min` and `max` mutually consistent after every
//! mutation, whatever the platform backend does natively.
//!
//! ```
//! use vellum_components::slider::{Slider, SliderArgs};
//! use vellum_platform::Platform;
//!
//! let mut slider = Slider::new(
//!     &Platform::Headless,
//!     SliderArgs::default().max(10.0).tick_count(3),
//! )
//! .expect("valid slider");
//!
//! slider.set_value(7.0);
//! assert_eq!(slider.value(), 5.0);
//! assert_eq!(slider.tick_value(), Some(2));
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod date_input;
pub mod slider;

pub use date_input::{DateInput, DateInputArgs, DateSource, MAX_DATE, MIN_DATE};
pub use slider::{Slider, SliderArgs};
