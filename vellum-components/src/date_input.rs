//! A date input bounded by a selectable range.
//!
//! ## Usage
//!
//! Use to let users pick a calendar date between an earliest and a latest
//! allowed date.
use std::any::Any;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use derive_setters::Setters;
use tracing::{debug, trace, warn};
use vellum_ui::{
    DateInputBackend, EventKind, Handler, HandlerEvent, NativeEvent, NativeEvents, WidgetError,
    WidgetFactory, WidgetResult,
};

/// Lowest date accepted as a bound. Every supported platform can display it.
pub const MIN_DATE: NaiveDate = ymd(1800, 1, 1);
/// Highest date accepted as a bound. Every supported platform can display it.
pub const MAX_DATE: NaiveDate = ymd(8999, 12, 31);

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date"),
    }
}

/// Accepted representations of a date.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateSource {
    /// No date given. Means today for a value, and the edge of the supported
    /// range for a bound.
    #[default]
    Unset,
    /// A calendar date.
    Date(NaiveDate),
    /// A date and time; the time of day is discarded.
    DateTime(NaiveDateTime),
    /// An ISO 8601 date such as `2024-05-17`.
    Iso(String),
}

impl DateSource {
    /// Interprets a dynamically typed value, as produced by binding layers.
    ///
    /// Accepts dates, date-times (naive or zoned), strings and `None` dates.
    pub fn from_any(value: &dyn Any) -> WidgetResult<Self> {
        if let Some(date) = value.downcast_ref::<NaiveDate>() {
            return Ok(Self::Date(*date));
        }
        if let Some(date_time) = value.downcast_ref::<NaiveDateTime>() {
            return Ok(Self::DateTime(*date_time));
        }
        if let Some(date_time) = value.downcast_ref::<DateTime<Utc>>() {
            return Ok(date_time.into());
        }
        if let Some(date_time) = value.downcast_ref::<DateTime<Local>>() {
            return Ok(date_time.into());
        }
        if let Some(date_time) = value.downcast_ref::<DateTime<FixedOffset>>() {
            return Ok(date_time.into());
        }
        if let Some(text) = value.downcast_ref::<String>() {
            return Ok(Self::Iso(text.clone()));
        }
        if let Some(text) = value.downcast_ref::<&str>() {
            return Ok(Self::Iso((*text).to_owned()));
        }
        if let Some(date) = value.downcast_ref::<Option<NaiveDate>>() {
            return Ok((*date).into());
        }
        if value.is::<()>() {
            return Ok(Self::Unset);
        }
        warn!("rejected a value that is not a date");
        Err(WidgetError::NotADate)
    }

    /// Resolves to a calendar date, treating [`DateSource::Unset`] as today.
    ///
    /// With `check_range`, dates outside `[MIN_DATE, MAX_DATE]` are rejected.
    pub fn resolve(self, check_range: bool) -> WidgetResult<NaiveDate> {
        let date = match self {
            Self::Unset => Local::now().date_naive(),
            Self::Date(date) => date,
            Self::DateTime(date_time) => date_time.date(),
            Self::Iso(text) => parse_iso_date(&text)?,
        };

        if check_range {
            if date < MIN_DATE {
                return Err(WidgetError::DateBeforeSupportedRange { lowest: MIN_DATE });
            }
            if date > MAX_DATE {
                return Err(WidgetError::DateAfterSupportedRange { highest: MAX_DATE });
            }
        }
        Ok(date)
    }
}

fn parse_iso_date(text: &str) -> WidgetResult<NaiveDate> {
    // `D` stands for one ASCII digit; chrono alone accepts padding and signs.
    const FORMATS: [(&str, &str); 4] = [
        ("DDDD-DD-DD", "%Y-%m-%d"),
        ("DDDDDDDD", "%Y%m%d"),
        ("DDDD-WDD-D", "%G-W%V-%u"),
        ("DDDDWDDD", "%GW%V%u"),
    ];

    FORMATS
        .iter()
        .filter(|(shape, _)| has_shape(text, shape))
        .find_map(|(_, format)| NaiveDate::parse_from_str(text, format).ok())
        .ok_or_else(|| {
            warn!(input = text, "rejected malformed ISO date");
            WidgetError::InvalidIsoDate {
                input: text.to_owned(),
            }
        })
}

fn has_shape(text: &str, shape: &str) -> bool {
    text.len() == shape.len()
        && text.bytes().zip(shape.bytes()).all(|(byte, expected)| match expected {
            b'D' => byte.is_ascii_digit(),
            _ => byte == expected,
        })
}

impl From<NaiveDate> for DateSource {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveDateTime> for DateSource {
    fn from(date_time: NaiveDateTime) -> Self {
        Self::DateTime(date_time)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateSource {
    fn from(date_time: DateTime<Tz>) -> Self {
        Self::DateTime(date_time.naive_local())
    }
}

impl<Tz: TimeZone> From<&DateTime<Tz>> for DateSource {
    fn from(date_time: &DateTime<Tz>) -> Self {
        Self::DateTime(date_time.naive_local())
    }
}

impl From<&str> for DateSource {
    fn from(text: &str) -> Self {
        Self::Iso(text.to_owned())
    }
}

impl From<String> for DateSource {
    fn from(text: String) -> Self {
        Self::Iso(text)
    }
}

impl<T: Into<DateSource>> From<Option<T>> for DateSource {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Into::into)
    }
}

/// Arguments for creating a [`DateInput`].
#[derive(Clone, Debug, Default, Setters)]
pub struct DateInputArgs {
    /// Initial date. Defaults to today.
    #[setters(into)]
    pub value: DateSource,
    /// Earliest selectable date (inclusive). Defaults to [`MIN_DATE`].
    #[setters(into)]
    pub min: DateSource,
    /// Latest selectable date (inclusive). Defaults to [`MAX_DATE`].
    #[setters(into)]
    pub max: DateSource,
    /// Handler invoked when the date changes.
    #[setters(skip)]
    pub on_change: Option<Handler<DateInput>>,
}

impl DateInputArgs {
    /// Sets the on_change handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(&DateInput, &HandlerEvent) + Send + Sync + 'static,
    {
        self.on_change = Some(Handler::new(on_change));
        self
    }

    /// Sets the on_change handler using a shared handler.
    pub fn on_change_shared(mut self, on_change: impl Into<Handler<DateInput>>) -> Self {
        self.on_change = Some(on_change.into());
        self
    }
}

/// A date picker whose value always lies within `[min, max]`.
///
/// Setting the value outside the range clips it silently. Moving one bound
/// past the other drags the other bound along.
pub struct DateInput {
    backend: Box<dyn DateInputBackend>,
    events: NativeEvents,
    on_change: Handler<DateInput>,
}

impl DateInput {
    /// Creates a date input on the given platform.
    ///
    /// The bounds are established before the value, and `on_change` is not
    /// invoked for anything that happens during construction.
    ///
    /// # Errors
    ///
    /// Fails if a bound is malformed or lies outside the supported range, or
    /// if the initial value is malformed.
    pub fn new<F>(factory: &F, args: DateInputArgs) -> WidgetResult<Self>
    where
        F: WidgetFactory + ?Sized,
    {
        let events = NativeEvents::new();
        let backend = factory.create_date_input(events.clone());
        let mut input = Self {
            backend,
            events,
            on_change: Handler::noop(),
        };

        input.set_min(args.min)?;
        input.set_max(args.max)?;
        input.set_value(args.value)?;
        input.events.drain();

        input.on_change = Handler::from_option(args.on_change);
        debug!(
            platform = factory.name(),
            value = %input.value(),
            "date input created"
        );
        Ok(input)
    }

    /// The currently selected date.
    pub fn value(&self) -> NaiveDate {
        self.backend.value()
    }

    /// Selects a date, clipping it to `[min, max]`.
    ///
    /// [`DateSource::Unset`] selects today. Dates outside the supported range
    /// are not rejected here; they are clipped like any other.
    ///
    /// # Errors
    ///
    /// Fails only if an ISO string is malformed.
    pub fn set_value(&mut self, value: impl Into<DateSource>) -> WidgetResult {
        let requested = value.into().resolve(false)?;
        let (min, max) = (self.min(), self.max());

        let value = if requested < min {
            trace!(%requested, %min, "date clipped to minimum");
            min
        } else if requested > max {
            trace!(%requested, %max, "date clipped to maximum");
            max
        } else {
            requested
        };

        self.backend.set_value(value);
        self.process_native_events();
        Ok(())
    }

    /// The earliest selectable date (inclusive).
    pub fn min(&self) -> NaiveDate {
        self.backend.min_date()
    }

    /// Sets the earliest selectable date.
    ///
    /// [`DateSource::Unset`] restores [`MIN_DATE`]. A minimum after the current
    /// maximum raises the maximum to match, and the value is clipped.
    ///
    /// # Errors
    ///
    /// Fails without changing anything if the date is malformed or outside
    /// `[MIN_DATE, MAX_DATE]`.
    pub fn set_min(&mut self, min: impl Into<DateSource>) -> WidgetResult {
        let min = match min.into() {
            DateSource::Unset => MIN_DATE,
            source => source.resolve(true)?,
        };

        if self.max() < min {
            debug!(%min, "raising maximum date to follow minimum");
            self.backend.set_max_date(min);
        }
        self.backend.set_min_date(min);
        if self.value() < min {
            self.set_value(min)?;
        }
        self.process_native_events();
        Ok(())
    }

    /// The latest selectable date (inclusive).
    pub fn max(&self) -> NaiveDate {
        self.backend.max_date()
    }

    /// Sets the latest selectable date.
    ///
    /// [`DateSource::Unset`] restores [`MAX_DATE`]. A maximum before the
    /// current minimum lowers the minimum to match, and the value is clipped.
    ///
    /// # Errors
    ///
    /// Fails without changing anything if the date is malformed or outside
    /// `[MIN_DATE, MAX_DATE]`.
    pub fn set_max(&mut self, max: impl Into<DateSource>) -> WidgetResult {
        let max = match max.into() {
            DateSource::Unset => MAX_DATE,
            source => source.resolve(true)?,
        };

        if self.min() > max {
            debug!(%max, "lowering minimum date to follow maximum");
            self.backend.set_min_date(max);
        }
        self.backend.set_max_date(max);
        if self.value() > max {
            self.set_value(max)?;
        }
        self.process_native_events();
        Ok(())
    }

    /// Handler invoked when the date changes.
    pub fn on_change(&self) -> &Handler<DateInput> {
        &self.on_change
    }

    /// Replaces the on_change handler. `None` detaches it.
    pub fn set_on_change(&mut self, handler: Option<Handler<DateInput>>) {
        self.on_change = Handler::from_option(handler);
    }

    /// Delivers change events reported by the native control.
    ///
    /// Setters call this themselves. Platform glue calls it after the native
    /// control reported user interaction.
    pub fn process_native_events(&self) {
        for event in self.events.drain() {
            match event {
                NativeEvent::Changed => self
                    .on_change
                    .call(self, &HandlerEvent::new(EventKind::Change)),
                NativeEvent::Pressed | NativeEvent::Released => {
                    trace!(?event, "date input ignores native event");
                }
            }
        }
    }

    /// The platform backend, for platform glue.
    pub fn native(&self) -> &dyn DateInputBackend {
        self.backend.as_ref()
    }

    /// Mutable access to the platform backend, for platform glue.
    ///
    /// Changing the range through the backend bypasses the clipping rules.
    pub fn native_mut(&mut self) -> &mut dyn DateInputBackend {
        self.backend.as_mut()
    }
}
