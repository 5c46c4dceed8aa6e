use uuid::Uuid;

use sqlx::PgExecutor;

use crate::domain::{Destination, TripDates};
use crate::model::Trip;

/// Repository for interfacing with the trips table
pub struct TripRepo;

impl TripRepo {
    #[tracing::instrument(name = "Insert trip", skip(executor))]
    pub async fn insert<'con>(
        executor: impl PgExecutor<'con>,
        destination: &Destination,
        dates: &TripDates,
    ) -> sqlx::Result<Uuid> {
        let destination: &str = destination.as_ref();

        sqlx::query_scalar::<_, Uuid>(
            "insert into trips(destination, starts_at, ends_at) values ($1, $2, $3) returning id",
        )
        .bind(destination)
        .bind(dates.starts_at())
        .bind(dates.ends_at())
        .fetch_one(executor)
        .await
    }

    #[tracing::instrument(name = "Fetch trip by id", skip(executor))]
    pub async fn fetch_by_id<'con>(
        executor: impl PgExecutor<'con>,
        id: Uuid,
    ) -> sqlx::Result<Option<Trip>> {
        sqlx::query_as::<_, Trip>(
            "select id, destination, starts_at, ends_at, is_confirmed, created_at from trips where id=$1",
        )
        .bind(id)
        .fetch_optional(executor)
        .await
    }

    #[tracing::instrument(name = "Check that a trip exists", skip(executor))]
    pub async fn exists<'con>(executor: impl PgExecutor<'con>, id: Uuid) -> sqlx::Result<bool> {
        sqlx::query_scalar::<_, bool>("select exists(select 1 from trips where id=$1)")
            .bind(id)
            .fetch_one(executor)
            .await
    }

    /// Mark a trip as confirmed.
    /// Returns the trip only if this call performed the transition, `None` if the trip
    /// is missing or was already confirmed.
    #[tracing::instrument(name = "Confirm trip by id", skip(executor))]
    pub async fn confirm_by_id<'con>(
        executor: impl PgExecutor<'con>,
        id: Uuid,
    ) -> sqlx::Result<Option<Trip>> {
        sqlx::query_as::<_, Trip>(
            "update trips set is_confirmed=true where id=$1 and is_confirmed=false \
             returning id, destination, starts_at, ends_at, is_confirmed, created_at",
        )
        .bind(id)
        .fetch_optional(executor)
        .await
    }
}
