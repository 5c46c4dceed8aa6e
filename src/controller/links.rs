use actix_web::{get, post, web, HttpResponse};

use serde::{Deserialize, Serialize};

use sqlx::PgPool;

use uuid::Uuid;

use crate::error::{Error, RestResult};
use crate::model::{Link, NewLink};
use crate::service::links as service;

#[derive(Debug, Deserialize)]
pub struct CreateLinkBody {
    title: String,
    url: String,
}

impl TryFrom<CreateLinkBody> for NewLink {
    type Error = Error;

    fn try_from(body: CreateLinkBody) -> Result<Self, Self::Error> {
        Ok(Self {
            title: body.title.parse()?,
            url: body.url.parse()?,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreatedLink {
    link_id: Uuid,
}

#[derive(Debug, Serialize)]
struct LinksResponse {
    links: Vec<Link>,
}

#[tracing::instrument(name = "Add a link to a trip", skip(pool))]
#[post("/{trip_id}/links")]
pub async fn create(
    pool: web::Data<PgPool>,
    path: web::Path<(Uuid,)>,
    body: web::Json<CreateLinkBody>,
) -> RestResult<HttpResponse> {
    let (trip_id,) = path.into_inner();
    let new_link: NewLink = body.into_inner().try_into()?;

    let link_id = service::add_link(&pool, trip_id, new_link).await?;

    Ok(HttpResponse::Created().json(CreatedLink { link_id }))
}

#[tracing::instrument(name = "List the links of a trip", skip(pool))]
#[get("/{trip_id}/links")]
pub async fn list(pool: web::Data<PgPool>, path: web::Path<(Uuid,)>) -> RestResult<HttpResponse> {
    let (trip_id,) = path.into_inner();

    let links = service::get_links(&pool, trip_id).await?;

    Ok(HttpResponse::Ok().json(LinksResponse { links }))
}
