//! Error taxonomy shared by all widgets.

use chrono::NaiveDate;
use thiserror::Error;

/// Result alias used by fallible widget operations.
pub type WidgetResult<T = ()> = Result<T, WidgetError>;

/// Broad classification of a [`WidgetError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input was not a recognised representation of the expected type.
    Type,
    /// The input was well formed but outside of what the widget accepts.
    Range,
}

/// Errors raised synchronously by widget setters.
///
/// Setters validate before mutating, so a returned error always leaves the
/// widget unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WidgetError {
    /// A dynamic value could not be interpreted as a date.
    #[error("not a valid date value")]
    NotADate,
    /// A string did not contain an ISO 8601 calendar date.
    #[error("{input:?} is not a valid ISO 8601 date")]
    InvalidIsoDate {
        /// The rejected input.
        input: String,
    },
    /// A bound date lies before the supported epoch window.
    #[error("the lowest supported date is {lowest}")]
    DateBeforeSupportedRange {
        /// The lowest date every platform can represent.
        lowest: NaiveDate,
    },
    /// A bound date lies after the supported epoch window.
    #[error("the highest supported date is {highest}")]
    DateAfterSupportedRange {
        /// The highest date every platform can represent.
        highest: NaiveDate,
    },
    /// A discrete slider needs ticks at both ends of its range.
    #[error("tick count must be at least 2, got {tick_count}")]
    TickCountTooSmall {
        /// The rejected tick count.
        tick_count: u32,
    },
    /// More ticks than an integer-only native control can represent.
    #[error("tick count must be at most {max}, got {tick_count}")]
    TickCountTooLarge {
        /// The rejected tick count.
        tick_count: u32,
        /// The largest accepted tick count.
        max: u32,
    },
    /// A tick value was given to a continuous slider.
    #[error("cannot set tick value when tick count is None")]
    TickValueOnContinuous,
    /// A discrete slider was asked to clear its tick value.
    #[error("cannot set tick value to None when tick count is not None")]
    MissingTickValue,
}

impl WidgetError {
    /// Returns whether this is a type error or a range error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotADate | Self::InvalidIsoDate { .. } => ErrorKind::Type,
            Self::DateBeforeSupportedRange { .. }
            | Self::DateAfterSupportedRange { .. }
            | Self::TickCountTooSmall { .. }
            | Self::TickCountTooLarge { .. }
            | Self::TickValueOnContinuous
            | Self::MissingTickValue => ErrorKind::Range,
        }
    }
}
