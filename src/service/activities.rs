use chrono_tz::Tz;

use sqlx::PgPool;

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::itinerary::{bucket_by_day, DayBucket};
use crate::model::NewActivity;
use crate::repo::{ActivityRepo, TripRepo};

/// Plan an activity on a trip. The activity must happen on one of the trip's days in `tz`.
#[tracing::instrument(name = "Create activity", skip(pool))]
pub async fn create_activity(
    pool: &PgPool,
    tz: Tz,
    trip_id: Uuid,
    activity: NewActivity,
) -> Result<Uuid> {
    let trip = TripRepo::fetch_by_id(pool, trip_id)
        .await?
        .ok_or(Error::NotFound("Trip"))?;

    if !trip.dates()?.covers_day_of(activity.occurs_at, tz) {
        return Err(Error::InvalidTemporalRange(
            "Activity must happen during the trip".into(),
        ));
    }

    Ok(ActivityRepo::insert(pool, trip_id, &activity).await?)
}

/// List the activities of a trip grouped by day, one entry per day of the trip
#[tracing::instrument(name = "Get trip activities", skip(pool))]
pub async fn get_activities(pool: &PgPool, tz: Tz, trip_id: Uuid) -> Result<Vec<DayBucket>> {
    let trip = TripRepo::fetch_by_id(pool, trip_id)
        .await?
        .ok_or(Error::NotFound("Trip"))?;

    let activities = ActivityRepo::fetch_by_trip(pool, trip_id).await?;

    bucket_by_day(trip.starts_at, trip.ends_at, activities, tz)
}
