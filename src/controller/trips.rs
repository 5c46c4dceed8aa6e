use actix_web::dev::HttpServiceFactory;
use actix_web::http::header;
use actix_web::{get, post, web, HttpResponse};

use chrono::{DateTime, Utc};

use chrono_tz::Tz;

use serde::{Deserialize, Serialize};

use sqlx::PgPool;

use uuid::Uuid;

use crate::client::EmailClient;
use crate::controller::{activities, links};
use crate::domain::{EmailAddress, TripDates};
use crate::error::{Error, RestResult};
use crate::model::{NewTrip, Participant, Trip};
use crate::notify::Notifier;
use crate::service::trips::{self as service, Confirmation};
use crate::urls::PublicUrls;

/// JSON body for new trips
#[derive(Debug, Deserialize)]
pub struct CreateTripBody {
    destination: String,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    owner_name: String,
    owner_email: String,
    emails_to_invite: Vec<String>,
}

impl TryFrom<CreateTripBody> for NewTrip {
    type Error = Error;

    fn try_from(body: CreateTripBody) -> Result<Self, Self::Error> {
        let destination = body.destination.parse()?;
        let dates = TripDates::planned(body.starts_at, body.ends_at, Utc::now())?;
        let owner_name = body.owner_name.parse()?;
        let owner_email = body.owner_email.parse()?;
        let emails_to_invite = body
            .emails_to_invite
            .iter()
            .map(|email| email.parse::<EmailAddress>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            destination,
            dates,
            owner_name,
            owner_email,
            emails_to_invite,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreatedTrip {
    trip_id: Uuid,
}

#[derive(Debug, Serialize)]
struct TripResponse {
    trip: Trip,
}

#[derive(Debug, Serialize)]
struct ParticipantsResponse {
    participants: Vec<Participant>,
}

#[tracing::instrument(name = "Create a new trip", skip(pool, email_client, urls, tz))]
#[post("")]
async fn create(
    pool: web::Data<PgPool>,
    email_client: web::Data<EmailClient>,
    urls: web::Data<PublicUrls>,
    tz: web::Data<Tz>,
    body: web::Json<CreateTripBody>,
) -> RestResult<HttpResponse> {
    let new_trip: NewTrip = body.into_inner().try_into()?;
    let notifier = Notifier::new(email_client.get_ref(), urls.get_ref(), *tz.get_ref());

    let trip_id = service::create_trip(&pool, &notifier, new_trip).await?;

    Ok(HttpResponse::Created().json(CreatedTrip { trip_id }))
}

#[tracing::instrument(name = "Show a trip", skip(pool))]
#[get("/{trip_id}")]
async fn show(pool: web::Data<PgPool>, path: web::Path<(Uuid,)>) -> RestResult<HttpResponse> {
    let (trip_id,) = path.into_inner();

    let trip = service::get_trip(&pool, trip_id).await?;

    Ok(HttpResponse::Ok().json(TripResponse { trip }))
}

#[tracing::instrument(name = "Confirm a trip", skip(pool, email_client, urls, tz))]
#[get("/{trip_id}/confirm")]
async fn confirm(
    pool: web::Data<PgPool>,
    email_client: web::Data<EmailClient>,
    urls: web::Data<PublicUrls>,
    tz: web::Data<Tz>,
    path: web::Path<(Uuid,)>,
) -> RestResult<HttpResponse> {
    let (trip_id,) = path.into_inner();
    let notifier = Notifier::new(email_client.get_ref(), urls.get_ref(), *tz.get_ref());

    match service::confirm_trip(&pool, &notifier, trip_id).await? {
        Confirmation::Confirmed(report) => {
            tracing::info!(?report, "Trip confirmed");
        }
        Confirmation::AlreadyConfirmed => {
            tracing::info!("Trip was already confirmed");
        }
    }

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, urls.trip(trip_id)))
        .finish())
}

#[tracing::instrument(name = "List the participants of a trip", skip(pool))]
#[get("/{trip_id}/participants")]
async fn participants(
    pool: web::Data<PgPool>,
    path: web::Path<(Uuid,)>,
) -> RestResult<HttpResponse> {
    let (trip_id,) = path.into_inner();

    let participants = service::get_participants(&pool, trip_id).await?;

    Ok(HttpResponse::Ok().json(ParticipantsResponse { participants }))
}

/// Trips API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/trips")
        .service(create)
        .service(show)
        .service(confirm)
        .service(participants)
        .service(links::create)
        .service(links::list)
        .service(activities::create)
        .service(activities::list)
}
