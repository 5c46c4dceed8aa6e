use uuid::Uuid;

use sqlx::PgExecutor;

use crate::model::{Link, NewLink};

/// Repository for interfacing with the links table
pub struct LinkRepo;

impl LinkRepo {
    #[tracing::instrument(name = "Insert link", skip(executor))]
    pub async fn insert<'con>(
        executor: impl PgExecutor<'con>,
        trip_id: Uuid,
        link: &NewLink,
    ) -> sqlx::Result<Uuid> {
        let title: &str = link.title.as_ref();
        let url: &str = link.url.as_ref();

        sqlx::query_scalar::<_, Uuid>(
            "insert into links(trip_id, title, url) values ($1, $2, $3) returning id",
        )
        .bind(trip_id)
        .bind(title)
        .bind(url)
        .fetch_one(executor)
        .await
    }

    /// Fetch the links of a trip in insertion order
    #[tracing::instrument(name = "Fetch links of a trip", skip(executor))]
    pub async fn fetch_by_trip<'con>(
        executor: impl PgExecutor<'con>,
        trip_id: Uuid,
    ) -> sqlx::Result<Vec<Link>> {
        sqlx::query_as::<_, Link>(
            "select id, trip_id, title, url from links where trip_id=$1 order by created_at, id",
        )
        .bind(trip_id)
        .fetch_all(executor)
        .await
    }
}
