//! Time window presets.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use clap::ValueEnum;
use strum_macros::Display;

use crate::error_handling::ValidationError;

/// Bounds passed to the API; `None` leaves that side open.
pub type Window = (Option<DateTime<Utc>>, Option<DateTime<Utc>>);

/// How much history the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display)]
pub enum RangePreset {
    /// The last 60 minutes
    #[strum(to_string = "last hour")]
    LastHour,
    /// The last 24 hours
    #[value(name = "last-24-hours")]
    #[strum(to_string = "last 24 hours")]
    Last24Hours,
    /// Everything in the store
    #[default]
    #[strum(to_string = "all")]
    All,
    /// `--start`/`--end`, defaulting to today (UTC)
    #[strum(to_string = "custom")]
    Custom,
}

impl RangePreset {
    /// Resolves the preset against `now`.
    ///
    /// `start` and `end` are only read for `Custom`; when omitted they default
    /// to 00:00 and 23:59 of `now`'s UTC date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidRange` when a custom `end` precedes
    /// `start`.
    pub fn window(
        self,
        now: DateTime<Utc>,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Window, ValidationError> {
        match self {
            RangePreset::LastHour => Ok((Some(now - Duration::hours(1)), Some(now))),
            RangePreset::Last24Hours => Ok((Some(now - Duration::days(1)), Some(now))),
            RangePreset::All => Ok((None, None)),
            RangePreset::Custom => {
                let today = now.date_naive();
                let start = start.unwrap_or_else(|| today.and_time(NaiveTime::MIN).and_utc());
                let end = end.unwrap_or_else(|| {
                    let end_of_day = NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(NaiveTime::MIN);
                    today.and_time(end_of_day).and_utc()
                });
                if end < start {
                    return Err(ValidationError::InvalidRange { start, end });
                }
                Ok((Some(start), Some(end)))
            }
        }
    }
}
