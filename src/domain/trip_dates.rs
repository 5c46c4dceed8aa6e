use chrono::{DateTime, Utc};

use chrono_tz::Tz;

use crate::error::{Error, Result};

/// Validated start/end pair of a trip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripDates {
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
}

impl TripDates {
    /// Validate the dates of a trip being planned at `now`.
    /// The trip must start strictly after `now` and must not end before it starts.
    pub fn planned(
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        if starts_at <= now {
            return Err(Error::InvalidTemporalRange("Invalid trip start date".into()));
        }
        Self::stored(starts_at, ends_at)
    }

    /// Dates of an already stored trip, which may lie in the past
    pub fn stored(starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Result<Self> {
        if ends_at < starts_at {
            return Err(Error::InvalidTemporalRange("Invalid trip end date".into()));
        }
        Ok(Self { starts_at, ends_at })
    }

    pub fn starts_at(&self) -> DateTime<Utc> {
        self.starts_at
    }

    pub fn ends_at(&self) -> DateTime<Utc> {
        self.ends_at
    }

    /// Check that a timestamp falls on one of the trip's calendar days in `tz`,
    /// first and last day included
    pub fn covers_day_of(&self, timestamp: DateTime<Utc>, tz: Tz) -> bool {
        let day = timestamp.with_timezone(&tz).date_naive();
        self.starts_at.with_timezone(&tz).date_naive() <= day
            && day <= self.ends_at.with_timezone(&tz).date_naive()
    }
}
