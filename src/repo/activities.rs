use uuid::Uuid;

use sqlx::PgExecutor;

use crate::model::{Activity, NewActivity};

/// Repository for interfacing with the activities table
pub struct ActivityRepo;

impl ActivityRepo {
    #[tracing::instrument(name = "Insert activity", skip(executor))]
    pub async fn insert<'con>(
        executor: impl PgExecutor<'con>,
        trip_id: Uuid,
        activity: &NewActivity,
    ) -> sqlx::Result<Uuid> {
        let title: &str = activity.title.as_ref();

        sqlx::query_scalar::<_, Uuid>(
            "insert into activities(trip_id, title, occurs_at) values ($1, $2, $3) returning id",
        )
        .bind(trip_id)
        .bind(title)
        .bind(activity.occurs_at)
        .fetch_one(executor)
        .await
    }

    /// Fetch the activities of a trip, earliest first
    #[tracing::instrument(name = "Fetch activities of a trip", skip(executor))]
    pub async fn fetch_by_trip<'con>(
        executor: impl PgExecutor<'con>,
        trip_id: Uuid,
    ) -> sqlx::Result<Vec<Activity>> {
        sqlx::query_as::<_, Activity>(
            "select id, trip_id, title, occurs_at from activities \
             where trip_id=$1 order by occurs_at, id",
        )
        .bind(trip_id)
        .fetch_all(executor)
        .await
    }
}
