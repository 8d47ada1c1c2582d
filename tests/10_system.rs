mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn root_returns_service_banner() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true, "unexpected body: {}", body);
    assert!(body["data"]["version"].is_string(), "missing version: {}", body);
    assert!(body["data"]["endpoints"].is_object(), "missing endpoints: {}", body);

    Ok(())
}

#[tokio::test]
async fn hello_endpoint_greets() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/hello", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["message"], "Hello from the backend API!");

    Ok(())
}

#[tokio::test]
async fn test_endpoint_reports_unconfigured_database() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/test", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK, "diagnostics must always be 200");

    let body = res.json::<serde_json::Value>().await?;
    let report = &body["data"];
    assert_eq!(report["backend"], "running", "unexpected report: {}", body);
    assert_eq!(report["database_url"], "not_set");
    assert_eq!(report["database_name"], "not_set");
    assert_eq!(report["connection_status"], "not_connected");
    assert!(report["collections"].as_array().map(|c| c.is_empty()).unwrap_or(false));

    Ok(())
}
