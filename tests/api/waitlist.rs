use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::helpers::TestApp;

#[tokio::test]
async fn api_waitlist_join_ok() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .post_waitlist(&json!({
            "email": "john.doe@example.com",
            "source": "hero_section"
        }))
        .await?;

    assert_eq!(
        res.status(),
        StatusCode::OK,
        "Wrong response StatusCode: {}",
        res.status()
    );
    let body: Value = res.json().await?;
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": "Successfully joined the waitlist!",
            "email": "john.doe@example.com",
        })
    );
    assert_eq!(app.app_state.model_mgr.waitlist().count(), 1);

    Ok(())
}

#[tokio::test]
async fn api_waitlist_count_starts_at_zero() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .http_client
        .get(format!("http://{}/api/waitlist/count", app.addr))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body, json!({ "count": 0, "status": "ok" }));

    Ok(())
}

#[tokio::test]
async fn api_waitlist_duplicate_email_rejected() -> Result<()> {
    let app = TestApp::spawn().await?;
    let json_request = json!({ "email": "john.doe@example.com" });

    let res = app.post_waitlist(&json_request).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.post_waitlist(&json_request).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let req_id = res
        .headers()
        .get("x-request-id")
        .and_then(|id| id.to_str().ok())
        .map(str::to_string);
    let body: Value = res.json().await?;
    assert_eq!(body["detail"], "Email already registered");
    assert_eq!(body["req_id"].as_str().map(str::to_string), req_id);

    assert_eq!(app.get_waitlist_count().await?, 1);

    Ok(())
}

#[tokio::test]
async fn api_waitlist_scenario_counts() -> Result<()> {
    let app = TestApp::spawn().await?;

    let tests = [
        ("a@example.com", StatusCode::OK, 1),
        ("a@example.com", StatusCode::BAD_REQUEST, 1),
        ("b@example.com", StatusCode::OK, 2),
    ];

    for (email, expected_status, expected_count) in tests {
        let res = app.post_waitlist(&json!({ "email": email })).await?;
        assert_eq!(
            res.status(),
            expected_status,
            "Wrong response for: {email}"
        );
        assert_eq!(app.get_waitlist_count().await?, expected_count);
    }

    Ok(())
}

#[tokio::test]
async fn api_waitlist_n_distinct_emails() -> Result<()> {
    let app = TestApp::spawn().await?;

    for i in 0..10 {
        let res = app
            .post_waitlist(&json!({ "email": format!("user{i}@example.com") }))
            .await?;
        assert_eq!(res.status(), StatusCode::OK);
    }

    assert_eq!(app.get_waitlist_count().await?, 10);

    Ok(())
}

#[tokio::test]
async fn api_waitlist_emails_differing_in_case_are_distinct() -> Result<()> {
    let app = TestApp::spawn().await?;

    for email in ["John.Doe@example.com", "john.doe@example.com"] {
        let res = app.post_waitlist(&json!({ "email": email })).await?;
        assert_eq!(res.status(), StatusCode::OK, "Wrong response for: {email}");
    }

    assert_eq!(app.get_waitlist_count().await?, 2);

    Ok(())
}

#[tokio::test]
async fn api_waitlist_domain_case_is_normalized() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .post_waitlist(&json!({ "email": "john@Example.COM" }))
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["email"], "john@example.com");

    let res = app
        .post_waitlist(&json!({ "email": "john@example.com" }))
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    assert_eq!(app.get_waitlist_count().await?, 1);

    Ok(())
}

#[tokio::test]
async fn api_waitlist_concurrent_duplicates_only_one_succeeds() -> Result<()> {
    let app = TestApp::spawn().await?;

    let mut set = tokio::task::JoinSet::new();
    for _ in 0..8 {
        let client = app.http_client.clone();
        let url = format!("http://{}/api/waitlist", app.addr);
        set.spawn(async move {
            client
                .post(url)
                .json(&json!({ "email": "race@example.com" }))
                .send()
                .await
                .map(|res| res.status())
        });
    }

    let mut ok = 0;
    while let Some(status) = set.join_next().await {
        if status?? == StatusCode::OK {
            ok += 1;
        }
    }

    assert_eq!(ok, 1);
    assert_eq!(app.get_waitlist_count().await?, 1);

    Ok(())
}

#[tokio::test]
async fn api_waitlist_invalid_email_unprocessable_entity() -> Result<()> {
    let app = TestApp::spawn().await?;

    let tests = [
        ("ursuladomain.com", "missing @"),
        ("@domain.com", "missing subject"),
        ("", "empty email"),
    ];

    for (email, params) in tests {
        let res = app.post_waitlist(&json!({ "email": email })).await?;
        assert_eq!(
            res.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "Wrong response: ({}), Expected: ({}); for request with: {params}",
            res.status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        let body: Value = res.json().await?;
        assert!(body["detail"]
            .as_str()
            .is_some_and(|d| d.starts_with("Received invalid input")));
    }

    assert_eq!(app.get_waitlist_count().await?, 0);

    Ok(())
}

#[tokio::test]
async fn api_waitlist_malformed_body_unprocessable_entity() -> Result<()> {
    let app = TestApp::spawn().await?;

    let tests = [
        (json!({ "source": "footer" }), "Missing email"),
        (json!({ "email": null }), "Null email"),
        (json!({ "email": 42 }), "Email not a string"),
        (json!({}), "Empty json"),
    ];

    for (json_request, params) in tests {
        let res = app.post_waitlist(&json_request).await?;
        assert_eq!(
            res.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "Wrong response: ({}), Expected: ({}); for request with: {params}",
            res.status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    Ok(())
}
