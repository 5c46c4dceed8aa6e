use chrono::{DateTime, NaiveDate, Utc};

use chrono_tz::Tz;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::Activity;

/// One calendar day of a trip, with the activities planned for that day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub activities: Vec<Activity>,
}

/// Group activities by calendar day over the inclusive range `starts_at..=ends_at`.
///
/// Days are computed in `tz`, so two timestamps belong to the same bucket when they share
/// a local calendar date, not when they are equal. One bucket is produced per day of the
/// range, ascending, even when empty. Activities falling outside the range are dropped.
/// Activity order is preserved within each bucket.
pub fn bucket_by_day(
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    activities: Vec<Activity>,
    tz: Tz,
) -> Result<Vec<DayBucket>> {
    let first_day = starts_at.with_timezone(&tz).date_naive();
    let last_day = ends_at.with_timezone(&tz).date_naive();

    let day_count = (last_day - first_day).num_days() + 1;
    if day_count < 1 {
        return Err(Error::InvalidTemporalRange(format!(
            "Trip ends ({}) before it starts ({})",
            last_day, first_day
        )));
    }

    let mut buckets: Vec<DayBucket> = first_day
        .iter_days()
        .take(day_count as usize)
        .map(|date| DayBucket {
            date,
            activities: Vec::new(),
        })
        .collect();

    for activity in activities {
        let day = activity.occurs_at.with_timezone(&tz).date_naive();
        let index = (day - first_day).num_days();

        match usize::try_from(index).ok().and_then(|i| buckets.get_mut(i)) {
            Some(bucket) => bucket.activities.push(activity),
            _ => tracing::debug!(
                activity.id = %activity.id,
                "Skipping activity outside of the trip dates"
            ),
        }
    }

    Ok(buckets)
}
