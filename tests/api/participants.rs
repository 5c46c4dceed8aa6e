use reqwest::StatusCode;

use serde_json::Value;

use sqlx::PgPool;

use crate::helpers::{extract_email_link, missing_id, trip_body, TestApp};

#[sqlx::test]
async fn invitation_link_confirms_participant(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;
    app.accept_emails().await;

    let trip_id = app.create_trip_with(&trip_body(2, &["b@test.com"])).await;
    app.confirm_trip(&trip_id)
        .await
        .expect("Failed to execute request");

    let invitation = app
        .sent_emails()
        .await
        .into_iter()
        .find(|email| email["To"] == "b@test.com")
        .expect("Participant was not invited");
    let link = extract_email_link(invitation["TextBody"].as_str().unwrap());

    let res = app
        .client
        .get(&link)
        .send()
        .await
        .expect("Failed to follow invitation link");

    assert_eq!(StatusCode::SEE_OTHER, res.status());
    assert_eq!(
        format!("{}/trips/{}", app.addr, trip_id),
        res.headers()["location"].to_str().unwrap()
    );

    let body: Value = app
        .get_participants(&trip_id)
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(body["participants"]
        .as_array()
        .unwrap()
        .iter()
        .all(|p| p["is_confirmed"] == true));

    Ok(())
}

#[sqlx::test]
async fn unknown_participant_is_not_found(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    let res = app
        .request(
            reqwest::Method::GET,
            &format!("participants/{}/confirm", missing_id()),
        )
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::NOT_FOUND, res.status());

    Ok(())
}
