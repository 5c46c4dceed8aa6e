use sqlx::PgPool;

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::model::{Link, NewLink};
use crate::repo::{LinkRepo, TripRepo};

#[tracing::instrument(name = "Add link to trip", skip(pool))]
pub async fn add_link(pool: &PgPool, trip_id: Uuid, link: NewLink) -> Result<Uuid> {
    if !TripRepo::exists(pool, trip_id).await? {
        return Err(Error::NotFound("Trip"));
    }
    Ok(LinkRepo::insert(pool, trip_id, &link).await?)
}

#[tracing::instrument(name = "Get trip links", skip(pool))]
pub async fn get_links(pool: &PgPool, trip_id: Uuid) -> Result<Vec<Link>> {
    if !TripRepo::exists(pool, trip_id).await? {
        return Err(Error::NotFound("Trip"));
    }
    Ok(LinkRepo::fetch_by_trip(pool, trip_id).await?)
}
