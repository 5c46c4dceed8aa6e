use sqlx::PgPool;

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::repo::ParticipantRepo;

/// Confirm a participant's attendance, returning the id of their trip
#[tracing::instrument(name = "Confirm participant", skip(pool))]
pub async fn confirm_participant(pool: &PgPool, participant_id: Uuid) -> Result<Uuid> {
    if let Some(trip_id) = ParticipantRepo::confirm_by_id(pool, participant_id).await? {
        return Ok(trip_id);
    }

    // Already confirmed, or missing
    ParticipantRepo::fetch_trip_id(pool, participant_id)
        .await?
        .ok_or(Error::NotFound("Participant"))
}
