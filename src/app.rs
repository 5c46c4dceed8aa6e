use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{get, HttpRequest, HttpResponse, Responder};
use actix_web::{web, App, HttpServer};

use chrono_tz::Tz;

use sqlx::PgPool;

use tracing_actix_web::TracingLogger;

use crate::client::EmailClient;
use crate::controller::{participants, trips};
use crate::error::RestError;
use crate::urls::PublicUrls;

/// Simple health-check endpoint
#[tracing::instrument(name = "Health check")]
#[get("/health_check")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().finish()
}

/// Malformed JSON bodies are validation errors
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    RestError::Validation(err.to_string()).into()
}

/// Malformed path parameters (e.g. a trip id that is not a UUID) are validation errors
fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    RestError::Validation(err.to_string()).into()
}

/// Run the application on a specified TCP listener
pub fn run(
    listener: TcpListener,
    pool: PgPool,
    email_client: EmailClient,
    urls: PublicUrls,
    tz: Tz,
) -> anyhow::Result<Server> {
    // Wrap application data
    let pool = web::Data::new(pool);
    let email_client = web::Data::new(email_client);
    let urls = web::Data::new(urls);
    let tz = web::Data::new(tz);

    // Start the server
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .app_data(pool.clone())
            .app_data(email_client.clone())
            .app_data(urls.clone())
            .app_data(tz.clone())
            .service(health_check)
            .service(trips::scope())
            .service(participants::scope())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
