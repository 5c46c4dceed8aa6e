use std::collections::HashSet;

use sqlx::PgPool;

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::model::{NewParticipant, NewTrip, Participant, Trip};
use crate::notify::{DispatchReport, Notifier};
use crate::repo::{ParticipantRepo, TripRepo};

/// Result of a trip confirmation request
#[derive(Debug, PartialEq, Eq)]
pub enum Confirmation {
    /// The trip was confirmed by this request and participants were notified
    Confirmed(DispatchReport),
    /// The trip had been confirmed before, nothing was done
    AlreadyConfirmed,
}

/// Create a trip with its owner and invited participants, then ask the owner to confirm it.
/// Email delivery failures do not fail the creation.
#[tracing::instrument(name = "Create trip", skip(pool, notifier))]
pub async fn create_trip(pool: &PgPool, notifier: &Notifier<'_>, new_trip: NewTrip) -> Result<Uuid> {
    let NewTrip {
        destination,
        dates,
        owner_name,
        owner_email,
        emails_to_invite,
    } = new_trip;

    // Each address is only invited once, and never alongside its owner
    let mut seen = HashSet::from([owner_email.clone()]);
    let invitees: Vec<NewParticipant> = emails_to_invite
        .into_iter()
        .filter(|email| seen.insert(email.clone()))
        .map(NewParticipant::invitee)
        .collect();

    let trip_id = {
        let mut tx = pool.begin().await?;

        let trip_id = TripRepo::insert(&mut *tx, &destination, &dates).await?;

        let owner = NewParticipant::owner(owner_name, owner_email.clone());
        ParticipantRepo::insert(&mut *tx, trip_id, &owner).await?;
        for invitee in &invitees {
            ParticipantRepo::insert(&mut *tx, trip_id, invitee).await?;
        }

        tx.commit().await?;
        trip_id
    };

    let report = notifier
        .trip_created(trip_id, destination.as_ref(), dates, &owner_email)
        .await;
    if report.failed > 0 {
        tracing::warn!(%trip_id, "Trip created but the owner could not be emailed");
    }

    Ok(trip_id)
}

/// Confirm a trip, inviting its participants the first time only
#[tracing::instrument(name = "Confirm trip", skip(pool, notifier))]
pub async fn confirm_trip(
    pool: &PgPool,
    notifier: &Notifier<'_>,
    trip_id: Uuid,
) -> Result<Confirmation> {
    let (trip, invitees) = {
        let mut tx = pool.begin().await?;

        // The conditional update only succeeds for the first confirmation
        let Some(trip) = TripRepo::confirm_by_id(&mut *tx, trip_id).await? else {
            tx.rollback().await?;
            return if TripRepo::exists(pool, trip_id).await? {
                Ok(Confirmation::AlreadyConfirmed)
            } else {
                Err(Error::NotFound("Trip"))
            };
        };
        let invitees = ParticipantRepo::fetch_invitees(&mut *tx, trip_id).await?;

        tx.commit().await?;
        (trip, invitees)
    };

    let report = notifier
        .trip_confirmed(&trip.destination, trip.dates()?, &invitees)
        .await;

    Ok(Confirmation::Confirmed(report))
}

#[tracing::instrument(name = "Get trip", skip(pool))]
pub async fn get_trip(pool: &PgPool, trip_id: Uuid) -> Result<Trip> {
    TripRepo::fetch_by_id(pool, trip_id)
        .await?
        .ok_or(Error::NotFound("Trip"))
}

#[tracing::instrument(name = "Get trip participants", skip(pool))]
pub async fn get_participants(pool: &PgPool, trip_id: Uuid) -> Result<Vec<Participant>> {
    if !TripRepo::exists(pool, trip_id).await? {
        return Err(Error::NotFound("Trip"));
    }
    Ok(ParticipantRepo::fetch_by_trip(pool, trip_id).await?)
}
