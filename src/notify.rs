mod templates;

use chrono_tz::Tz;

use futures::future::join_all;

use uuid::Uuid;

use crate::client::{Email, EmailSender};
use crate::domain::{EmailAddress, TripDates};
use crate::model::Participant;
use crate::urls::PublicUrls;

use templates::TripDetails;

/// Outcome of a batch of email deliveries
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchReport {
    pub delivered: usize,
    pub failed: usize,
}

/// Send every email concurrently and wait for all of them to settle.
/// Failed deliveries are logged and counted, never returned.
pub async fn dispatch(sender: &dyn EmailSender, emails: Vec<Email>) -> DispatchReport {
    let attempts = emails.iter().map(|email| async move {
        match sender.send(email).await {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(
                    error.cause_chain = ?error,
                    "Failed to deliver email to {}",
                    email.recipient
                );
                false
            }
        }
    });

    join_all(attempts)
        .await
        .into_iter()
        .fold(DispatchReport::default(), |mut report, delivered| {
            if delivered {
                report.delivered += 1;
            } else {
                report.failed += 1;
            }
            report
        })
}

/// Trip notifications, rendered and dispatched on behalf of the services
pub struct Notifier<'a> {
    sender: &'a dyn EmailSender,
    urls: &'a PublicUrls,
    tz: Tz,
}

impl<'a> Notifier<'a> {
    pub fn new(sender: &'a dyn EmailSender, urls: &'a PublicUrls, tz: Tz) -> Self {
        Self { sender, urls, tz }
    }

    /// Ask the owner of a freshly created trip to confirm it
    #[tracing::instrument(name = "Notify trip owner", skip(self, destination, dates))]
    pub async fn trip_created(
        &self,
        trip_id: Uuid,
        destination: &str,
        dates: TripDates,
        owner: &EmailAddress,
    ) -> DispatchReport {
        let details = self.details(destination, dates);
        let link = self.urls.trip_confirmation(trip_id);

        match templates::trip_confirmation(&details, owner.clone(), &link) {
            Ok(email) => dispatch(self.sender, vec![email]).await,
            Err(error) => {
                tracing::warn!(error.cause_chain = ?error, "Failed to render trip confirmation");
                DispatchReport {
                    delivered: 0,
                    failed: 1,
                }
            }
        }
    }

    /// Invite every participant of a confirmed trip to confirm their attendance
    #[tracing::instrument(
        name = "Notify trip participants",
        skip(self, destination, dates, participants),
        fields(participants = participants.len())
    )]
    pub async fn trip_confirmed(
        &self,
        destination: &str,
        dates: TripDates,
        participants: &[Participant],
    ) -> DispatchReport {
        let details = self.details(destination, dates);

        let emails = participants
            .iter()
            .filter_map(|participant| match self.invitation(&details, participant) {
                Ok(email) => Some(email),
                Err(error) => {
                    tracing::warn!(
                        error.cause_chain = ?error,
                        "Skipping a participant (id: {}, email: {})",
                        participant.id,
                        participant.email
                    );
                    None
                }
            })
            .collect();

        let report = dispatch(self.sender, emails).await;
        tracing::info!(
            delivered = report.delivered,
            failed = report.failed,
            "Participant invitations dispatched"
        );
        report
    }

    fn invitation(&self, details: &TripDetails, participant: &Participant) -> anyhow::Result<Email> {
        let recipient = participant.email.parse::<EmailAddress>()?;
        let link = self.urls.participant_confirmation(participant.id);
        Ok(templates::participant_invitation(details, recipient, &link)?)
    }

    fn details<'d>(&self, destination: &'d str, dates: TripDates) -> TripDetails<'d> {
        TripDetails {
            destination,
            dates,
            tz: self.tz,
        }
    }
}
