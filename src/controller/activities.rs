use actix_web::{get, post, web, HttpResponse};

use chrono::{DateTime, Utc};

use chrono_tz::Tz;

use serde::{Deserialize, Serialize};

use sqlx::PgPool;

use uuid::Uuid;

use crate::error::{Error, RestResult};
use crate::itinerary::DayBucket;
use crate::model::NewActivity;
use crate::service::activities as service;

#[derive(Debug, Deserialize)]
pub struct CreateActivityBody {
    title: String,
    occurs_at: DateTime<Utc>,
}

impl TryFrom<CreateActivityBody> for NewActivity {
    type Error = Error;

    fn try_from(body: CreateActivityBody) -> Result<Self, Self::Error> {
        Ok(Self {
            title: body.title.parse()?,
            occurs_at: body.occurs_at,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreatedActivity {
    activity_id: Uuid,
}

#[derive(Debug, Serialize)]
struct ActivitiesResponse {
    activities: Vec<DayBucket>,
}

#[tracing::instrument(name = "Plan an activity on a trip", skip(pool, tz))]
#[post("/{trip_id}/activities")]
pub async fn create(
    pool: web::Data<PgPool>,
    tz: web::Data<Tz>,
    path: web::Path<(Uuid,)>,
    body: web::Json<CreateActivityBody>,
) -> RestResult<HttpResponse> {
    let (trip_id,) = path.into_inner();
    let new_activity: NewActivity = body.into_inner().try_into()?;

    let activity_id = service::create_activity(&pool, *tz.get_ref(), trip_id, new_activity).await?;

    Ok(HttpResponse::Created().json(CreatedActivity { activity_id }))
}

#[tracing::instrument(name = "List the activities of a trip by day", skip(pool, tz))]
#[get("/{trip_id}/activities")]
pub async fn list(
    pool: web::Data<PgPool>,
    tz: web::Data<Tz>,
    path: web::Path<(Uuid,)>,
) -> RestResult<HttpResponse> {
    let (trip_id,) = path.into_inner();

    let activities = service::get_activities(&pool, *tz.get_ref(), trip_id).await?;

    Ok(HttpResponse::Ok().json(ActivitiesResponse { activities }))
}
