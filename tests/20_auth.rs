mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn register_rejects_missing_body() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/register", server.base_url))
        .send()
        .await?;

    assert!(
        res.status().is_client_error(),
        "expected client error, got {}",
        res.status()
    );
    Ok(())
}

#[tokio::test]
async fn register_rejects_missing_password_field() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // Body deserialization fails before any database access, so this is an
    // exact 400 regardless of database availability.
    let res = client
        .post(format!("{}/auth/register", server.base_url))
        .json(&json!({ "email": "user@example.com" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<serde_json::Value>().await?;
    assert!(body.get("error").is_some(), "missing error field: {}", body);
    Ok(())
}

#[tokio::test]
async fn register_rejects_empty_fields() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/register", server.base_url))
        .json(&json!({ "email": "user@example.com", "password": "" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .post(format!("{}/auth/register", server.base_url))
        .json(&json!({ "email": "", "password": "secret" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn register_endpoint_responds_to_valid_input() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/register", server.base_url))
        .json(&json!({ "email": "widget-buyer@example.com", "password": "hunter22" }))
        .send()
        .await?;

    // 201 with a real database; 409 if the user is left over from an earlier
    // run; 500 when the database is unreachable.
    assert!(
        res.status() == StatusCode::CREATED
            || res.status() == StatusCode::CONFLICT
            || res.status() == StatusCode::INTERNAL_SERVER_ERROR,
        "unexpected status: {}",
        res.status()
    );

    let status = res.status();
    let body = res.json::<serde_json::Value>().await?;
    if status == StatusCode::CREATED {
        assert_eq!(body["email"], "widget-buyer@example.com");
        assert!(body["id"].is_number(), "missing id: {}", body);
    } else {
        assert!(body.get("error").is_some(), "missing error field: {}", body);
    }
    Ok(())
}

#[tokio::test]
async fn login_rejects_empty_fields() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&json!({ "email": "user@example.com", "password": "" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn login_with_unknown_email_never_issues_token() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&json!({ "email": "nobody@example.com", "password": "whatever" }))
        .send()
        .await?;

    // 404 with a reachable database, 500 without one; never a token.
    assert!(
        res.status() == StatusCode::NOT_FOUND
            || res.status() == StatusCode::INTERNAL_SERVER_ERROR,
        "unexpected status: {}",
        res.status()
    );

    let body = res.json::<serde_json::Value>().await?;
    assert!(body.get("token").is_none(), "unexpected token: {}", body);
    Ok(())
}
