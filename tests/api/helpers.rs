use std::net::TcpListener;
use std::time::Duration;

use chrono::{DateTime, DurationRound, Utc};

use chrono_tz::Tz;

use reqwest::{Client, Method, Response};

use sqlx::PgPool;

use secrecy::Secret;

use serde_json::{json, Value};

use url::Url;

use uuid::Uuid;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use planner::app;
use planner::client::EmailClient;
use planner::urls::PublicUrls;

pub struct TestApp {
    pub addr: String,

    pub client: Client,
    pub email_server: MockServer,
}

impl TestApp {
    pub async fn spawn(pool: &PgPool) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to listen on random port");
        let port = listener.local_addr().unwrap().port();

        let addr = format!("http://127.0.0.1:{}", port);

        let email_server = MockServer::start().await;

        let email_client = {
            let sender = "trips@test.com"
                .parse()
                .expect("Failed to parse sender email address");
            let api_base_url =
                Url::parse(&email_server.uri()).expect("Failed to parse mock server uri");
            let api_auth_token = Secret::new("TestAuthorization".into());
            let api_timeout = Duration::from_secs(2);

            EmailClient::new(sender, api_timeout, api_base_url, api_auth_token)
                .expect("Failed to create email client")
        };

        let urls = PublicUrls::new(&Url::parse(&addr).unwrap());

        let server = app::run(listener, pool.clone(), email_client, urls, Tz::UTC)
            .expect("Failed to spawn app instance");
        let _ = tokio::spawn(server);

        // Redirects are asserted on, not followed
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to build http client");

        Self {
            addr,
            client,
            email_server,
        }
    }

    pub fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", &self.addr, url);
        self.client.request(method, url)
    }

    pub async fn health_check(&self) -> reqwest::Result<Response> {
        self.request(Method::GET, "health_check").send().await
    }

    pub async fn create_trip(&self, body: &Value) -> reqwest::Result<Response> {
        self.request(Method::POST, "trips").json(body).send().await
    }

    pub async fn get_trip(&self, trip_id: &str) -> reqwest::Result<Response> {
        self.request(Method::GET, &format!("trips/{}", trip_id))
            .send()
            .await
    }

    pub async fn confirm_trip(&self, trip_id: &str) -> reqwest::Result<Response> {
        self.request(Method::GET, &format!("trips/{}/confirm", trip_id))
            .send()
            .await
    }

    pub async fn get_participants(&self, trip_id: &str) -> reqwest::Result<Response> {
        self.request(Method::GET, &format!("trips/{}/participants", trip_id))
            .send()
            .await
    }

    pub async fn create_link(&self, trip_id: &str, body: &Value) -> reqwest::Result<Response> {
        self.request(Method::POST, &format!("trips/{}/links", trip_id))
            .json(body)
            .send()
            .await
    }

    pub async fn get_links(&self, trip_id: &str) -> reqwest::Result<Response> {
        self.request(Method::GET, &format!("trips/{}/links", trip_id))
            .send()
            .await
    }

    pub async fn create_activity(&self, trip_id: &str, body: &Value) -> reqwest::Result<Response> {
        self.request(Method::POST, &format!("trips/{}/activities", trip_id))
            .json(body)
            .send()
            .await
    }

    pub async fn get_activities(&self, trip_id: &str) -> reqwest::Result<Response> {
        self.request(Method::GET, &format!("trips/{}/activities", trip_id))
            .send()
            .await
    }

    /// Accept every send-email request
    pub async fn accept_emails(&self) {
        Mock::given(path("/email"))
            .and(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&self.email_server)
            .await;
    }

    /// Create a trip through the API, returning its id
    pub async fn create_trip_with(&self, body: &Value) -> String {
        let res = self
            .create_trip(body)
            .await
            .expect("Failed to execute request");
        assert_eq!(201, res.status().as_u16());

        let body: Value = res.json().await.expect("Failed to parse response");
        body["tripId"]
            .as_str()
            .expect("Missing trip id")
            .to_string()
    }

    /// JSON bodies of the emails sent so far
    pub async fn sent_emails(&self) -> Vec<Value> {
        self.email_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|req| serde_json::from_slice(&req.body).unwrap())
            .collect()
    }
}

/// Midnight (UTC) a given number of days from today
pub fn midnight_in(days: i64) -> DateTime<Utc> {
    Utc::now()
        .duration_trunc(chrono::Duration::days(1))
        .unwrap()
        + chrono::Duration::days(days)
}

/// A valid new trip body starting tomorrow and lasting `days` extra days
pub fn trip_body(days: i64, emails_to_invite: &[&str]) -> Value {
    json!({
        "destination": "Florianópolis",
        "starts_at": midnight_in(1),
        "ends_at": midnight_in(1 + days),
        "owner_name": "Trip Owner",
        "owner_email": "owner@test.com",
        "emails_to_invite": emails_to_invite,
    })
}

pub fn extract_email_link(body: &str) -> String {
    let links: Vec<_> = linkify::LinkFinder::new()
        .links(body)
        .filter(|l| *l.kind() == linkify::LinkKind::Url)
        .collect();
    assert_eq!(1, links.len());
    links[0].as_str().to_string()
}

pub fn missing_id() -> String {
    Uuid::new_v4().to_string()
}
