use reqwest::StatusCode;

use serde_json::{json, Value};

use sqlx::{PgPool, Row};

use uuid::Uuid;

use wiremock::matchers::*;
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{extract_email_link, midnight_in, missing_id, trip_body, TestApp};

#[sqlx::test]
async fn create_returns_trip_id_and_stores_participants(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;
    app.accept_emails().await;

    let trip_id = app
        .create_trip_with(&trip_body(2, &["b@test.com", "c@test.com"]))
        .await;
    let trip_id: Uuid = trip_id.parse().expect("Trip id is not a UUID");

    let rows = sqlx::query("select email, is_owner, is_confirmed from participants where trip_id=$1")
        .bind(trip_id)
        .fetch_all(&pool)
        .await?;

    assert_eq!(3, rows.len());
    let owners: Vec<_> = rows
        .iter()
        .filter(|row| row.get::<bool, _>("is_owner"))
        .collect();
    assert_eq!(1, owners.len());
    assert_eq!("owner@test.com", owners[0].get::<String, _>("email"));
    assert!(owners[0].get::<bool, _>("is_confirmed"));

    Ok(())
}

#[sqlx::test]
async fn create_emails_only_the_owner(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let trip_id = app
        .create_trip_with(&trip_body(2, &["b@test.com", "c@test.com"]))
        .await;

    let emails = app.sent_emails().await;
    assert_eq!("owner@test.com", emails[0]["To"]);

    let html_link = extract_email_link(emails[0]["HtmlBody"].as_str().unwrap());
    let text_link = extract_email_link(emails[0]["TextBody"].as_str().unwrap());
    assert_eq!(html_link, text_link);
    assert_eq!(format!("{}/trips/{}/confirm", app.addr, trip_id), html_link);

    Ok(())
}

#[sqlx::test]
async fn create_succeeds_if_email_send_fails(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let trip_id = app.create_trip_with(&trip_body(1, &[])).await;

    let res = app.get_trip(&trip_id).await.expect("Failed to execute request");
    assert_eq!(StatusCode::OK, res.status());

    Ok(())
}

#[sqlx::test]
async fn create_rejects_invalid_dates(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        ("start in the past", midnight_in(-1), midnight_in(2)),
        ("end before start", midnight_in(3), midnight_in(2)),
    ];

    for (desc, starts_at, ends_at) in test_cases {
        let mut body = trip_body(1, &[]);
        body["starts_at"] = json!(starts_at);
        body["ends_at"] = json!(ends_at);

        let res = app.create_trip(&body).await.expect("Failed to execute request");

        assert_eq!(
            StatusCode::BAD_REQUEST,
            res.status(),
            "API did not fail when trip had {}",
            desc
        );
    }

    let count: i64 = sqlx::query_scalar("select count(*) from trips")
        .fetch_one(&pool)
        .await?;
    assert_eq!(0, count);

    Ok(())
}

#[sqlx::test]
async fn create_accepts_single_day_trip(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;
    app.accept_emails().await;

    let trip_id = app.create_trip_with(&trip_body(0, &[])).await;

    let res = app
        .get_activities(&trip_id)
        .await
        .expect("Failed to execute request");
    let body: Value = res.json().await.unwrap();
    assert_eq!(1, body["activities"].as_array().unwrap().len());

    Ok(())
}

#[sqlx::test]
async fn create_rejects_malformed_payloads(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    let test_cases: Vec<(&str, &str, Value)> = vec![
        ("short destination", "destination", json!("Rio")),
        ("malformed owner email", "owner_email", json!("owner at test")),
        ("malformed invitee email", "emails_to_invite", json!(["nope"])),
        ("empty owner name", "owner_name", json!("  ")),
        ("unparseable date", "starts_at", json!("tomorrow")),
        ("missing invitees", "emails_to_invite", Value::Null),
    ];

    for (desc, field, value) in test_cases {
        let mut body = trip_body(1, &[]);
        body[field] = value;

        let res = app.create_trip(&body).await.expect("Failed to execute request");

        assert_eq!(
            StatusCode::BAD_REQUEST,
            res.status(),
            "API did not fail when payload had {}",
            desc
        );
    }

    Ok(())
}

#[sqlx::test]
async fn confirm_redirects_and_invites_participants(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;
    app.accept_emails().await;

    let trip_id = app
        .create_trip_with(&trip_body(2, &["b@test.com", "c@test.com"]))
        .await;

    let owner_email = &app.sent_emails().await[0];
    let link = extract_email_link(owner_email["HtmlBody"].as_str().unwrap());

    let res = app
        .client
        .get(&link)
        .send()
        .await
        .expect("Failed to follow confirmation link");

    assert_eq!(StatusCode::SEE_OTHER, res.status());
    assert_eq!(
        format!("{}/trips/{}", app.addr, trip_id),
        res.headers()["location"].to_str().unwrap()
    );

    let mut invited: Vec<String> = app.sent_emails().await[1..]
        .iter()
        .map(|email| email["To"].as_str().unwrap().to_string())
        .collect();
    invited.sort();
    assert_eq!(vec!["b@test.com", "c@test.com"], invited);

    let trip: Value = app.get_trip(&trip_id).await.unwrap().json().await.unwrap();
    assert_eq!(json!(true), trip["trip"]["is_confirmed"]);

    Ok(())
}

#[sqlx::test]
async fn confirm_twice_invites_once(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        // One owner email, then one per invitee
        .expect(3)
        .mount(&app.email_server)
        .await;

    let trip_id = app
        .create_trip_with(&trip_body(2, &["b@test.com", "c@test.com"]))
        .await;

    for _ in 0..2 {
        let res = app.confirm_trip(&trip_id).await.expect("Failed to execute request");
        assert_eq!(StatusCode::SEE_OTHER, res.status());
    }

    Ok(())
}

#[sqlx::test]
async fn confirm_redirects_even_if_invitations_fail(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&app.email_server)
        .await;

    let trip_id = app
        .create_trip_with(&trip_body(2, &["b@test.com", "c@test.com"]))
        .await;

    let res = app.confirm_trip(&trip_id).await.expect("Failed to execute request");

    assert_eq!(StatusCode::SEE_OTHER, res.status());

    Ok(())
}

#[sqlx::test]
async fn confirm_unknown_trip_is_not_found(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    let res = app
        .confirm_trip(&missing_id())
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::NOT_FOUND, res.status());

    let res = app.get_trip(&missing_id()).await.expect("Failed to execute request");
    assert_eq!(StatusCode::NOT_FOUND, res.status());

    Ok(())
}

#[sqlx::test]
async fn malformed_trip_id_is_bad_request(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    let res = app
        .confirm_trip("not-a-uuid")
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_REQUEST, res.status());
    let body: Value = res.json().await.unwrap();
    assert!(body["error"].is_string());

    Ok(())
}

#[sqlx::test]
async fn participants_are_listed_owner_first(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;
    app.accept_emails().await;

    let trip_id = app
        .create_trip_with(&trip_body(2, &["c@test.com", "b@test.com"]))
        .await;

    let res = app
        .get_participants(&trip_id)
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::OK, res.status());

    let body: Value = res.json().await.unwrap();
    let emails: Vec<&str> = body["participants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["email"].as_str().unwrap())
        .collect();
    assert_eq!(vec!["owner@test.com", "b@test.com", "c@test.com"], emails);
    assert_eq!(json!("Trip Owner"), body["participants"][0]["name"]);

    Ok(())
}
