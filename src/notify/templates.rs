use askama::Template;

use chrono::{DateTime, Utc};

use chrono_tz::Tz;

use crate::client::Email;
use crate::domain::{EmailAddress, TripDates};

const DATE_FORMAT: &str = "%B %-d, %Y";

/// Trip fields interpolated into emails
#[derive(Debug, Clone)]
pub struct TripDetails<'a> {
    pub destination: &'a str,
    pub dates: TripDates,
    pub tz: Tz,
}

impl TripDetails<'_> {
    fn starts_on(&self) -> String {
        format_date(self.dates.starts_at(), self.tz)
    }

    fn ends_on(&self) -> String {
        format_date(self.dates.ends_at(), self.tz)
    }
}

fn format_date(timestamp: DateTime<Utc>, tz: Tz) -> String {
    timestamp.with_timezone(&tz).format(DATE_FORMAT).to_string()
}

/// HTML body shared by every trip email. Interpolated values are escaped.
#[derive(Template)]
#[template(path = "trip_email.html")]
struct HtmlBody<'a> {
    summary: &'a str,
    action: &'a str,
    link: &'a str,
}

/// Email asking the owner of a new trip to confirm it
pub fn trip_confirmation(
    trip: &TripDetails,
    recipient: EmailAddress,
    link: &str,
) -> askama::Result<Email> {
    let subject = format!(
        "Confirm your trip to {} on {}",
        trip.destination,
        trip.starts_on()
    );
    let summary = format!(
        "You asked to create a trip to {} from {} to {}.",
        trip.destination,
        trip.starts_on(),
        trip.ends_on()
    );

    build(recipient, subject, &summary, "To confirm your trip", link)
}

/// Email inviting a participant to confirm their attendance on a confirmed trip
pub fn participant_invitation(
    trip: &TripDetails,
    recipient: EmailAddress,
    link: &str,
) -> askama::Result<Email> {
    let subject = format!(
        "Confirm your attendance on the trip to {} on {}",
        trip.destination,
        trip.starts_on()
    );
    let summary = format!(
        "You have been invited to a trip to {} from {} to {}.",
        trip.destination,
        trip.starts_on(),
        trip.ends_on()
    );

    build(
        recipient,
        subject,
        &summary,
        "To confirm your attendance",
        link,
    )
}

fn build(
    recipient: EmailAddress,
    subject: String,
    summary: &str,
    action: &str,
    link: &str,
) -> askama::Result<Email> {
    let html_body = HtmlBody {
        summary,
        action,
        link,
    }
    .render()?;
    let text_body = format!(
        "{summary}\n\n{action}, visit this web page: {link}\n\nIf you don't know what this email is about, just ignore it."
    );

    Ok(Email {
        recipient,
        subject,
        html_body,
        text_body,
    })
}
