use std::net::TcpListener;

use anyhow::Context;

use sqlx::PgPool;

use planner::app;
use planner::client::EmailClient;
use planner::settings::Settings;
use planner::telemetry;
use planner::urls::PublicUrls;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = telemetry::create_subscriber("info", std::io::stdout);
    telemetry::set_subscriber(subscriber)?;

    let settings = Settings::load()?;

    let pool = PgPool::connect_with(settings.database.with_db())
        .await
        .context("Failed to connect to the database")?;
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    let email_client = EmailClient::new(
        settings.email.sender()?,
        settings.email.api_timeout(),
        settings.email.api_base_url()?,
        settings.email.api_auth_token(),
    )?;

    let urls = PublicUrls::new(&settings.app.base_url()?);
    let tz = settings.app.timezone()?;

    let listener = TcpListener::bind(settings.app.addr())?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    app::run(listener, pool, email_client, urls, tz)?
        .await
        .context("Failed to run app")
}
