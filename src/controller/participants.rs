use actix_web::dev::HttpServiceFactory;
use actix_web::http::header;
use actix_web::{get, web, HttpResponse};

use sqlx::PgPool;

use uuid::Uuid;

use crate::error::RestResult;
use crate::service::participants as service;
use crate::urls::PublicUrls;

#[tracing::instrument(name = "Confirm a participant", skip(pool, urls))]
#[get("/{participant_id}/confirm")]
async fn confirm(
    pool: web::Data<PgPool>,
    urls: web::Data<PublicUrls>,
    path: web::Path<(Uuid,)>,
) -> RestResult<HttpResponse> {
    let (participant_id,) = path.into_inner();

    let trip_id = service::confirm_participant(&pool, participant_id).await?;

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, urls.trip(trip_id)))
        .finish())
}

/// Participants API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/participants").service(confirm)
}
