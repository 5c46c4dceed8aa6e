use uuid::Uuid;

use sqlx::PgExecutor;

use crate::model::{NewParticipant, Participant};

/// Repository for interfacing with the participants table
pub struct ParticipantRepo;

impl ParticipantRepo {
    #[tracing::instrument(name = "Insert participant", skip(executor))]
    pub async fn insert<'con>(
        executor: impl PgExecutor<'con>,
        trip_id: Uuid,
        participant: &NewParticipant,
    ) -> sqlx::Result<Uuid> {
        let name: Option<&str> = participant.name.as_ref().map(AsRef::as_ref);
        let email: &str = participant.email.as_ref();

        sqlx::query_scalar::<_, Uuid>(
            "insert into participants(trip_id, name, email, is_owner, is_confirmed) \
             values ($1, $2, $3, $4, $5) returning id",
        )
        .bind(trip_id)
        .bind(name)
        .bind(email)
        .bind(participant.is_owner)
        .bind(participant.is_confirmed)
        .fetch_one(executor)
        .await
    }

    /// Fetch every participant of a trip, owner first
    #[tracing::instrument(name = "Fetch participants of a trip", skip(executor))]
    pub async fn fetch_by_trip<'con>(
        executor: impl PgExecutor<'con>,
        trip_id: Uuid,
    ) -> sqlx::Result<Vec<Participant>> {
        sqlx::query_as::<_, Participant>(
            "select id, trip_id, name, email, is_owner, is_confirmed from participants \
             where trip_id=$1 order by is_owner desc, email",
        )
        .bind(trip_id)
        .fetch_all(executor)
        .await
    }

    /// Fetch the invited (non-owner) participants of a trip
    #[tracing::instrument(name = "Fetch invitees of a trip", skip(executor))]
    pub async fn fetch_invitees<'con>(
        executor: impl PgExecutor<'con>,
        trip_id: Uuid,
    ) -> sqlx::Result<Vec<Participant>> {
        sqlx::query_as::<_, Participant>(
            "select id, trip_id, name, email, is_owner, is_confirmed from participants \
             where trip_id=$1 and is_owner=false order by email",
        )
        .bind(trip_id)
        .fetch_all(executor)
        .await
    }

    /// Mark a participant as confirmed.
    /// Returns the id of their trip only if this call performed the transition.
    #[tracing::instrument(name = "Confirm participant by id", skip(executor))]
    pub async fn confirm_by_id<'con>(
        executor: impl PgExecutor<'con>,
        id: Uuid,
    ) -> sqlx::Result<Option<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            "update participants set is_confirmed=true where id=$1 and is_confirmed=false \
             returning trip_id",
        )
        .bind(id)
        .fetch_optional(executor)
        .await
    }

    #[tracing::instrument(name = "Fetch trip id of a participant", skip(executor))]
    pub async fn fetch_trip_id<'con>(
        executor: impl PgExecutor<'con>,
        id: Uuid,
    ) -> sqlx::Result<Option<Uuid>> {
        sqlx::query_scalar::<_, Uuid>("select trip_id from participants where id=$1")
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}
