//! End-to-end tests for the rainfall API: a real listener on an ephemeral
//! port, probed with a plain HTTP client.

use rgv_db::Database;
use serde_json::{json, Value};

const FIXTURE: &str = "\
2024-01-05T00:00:00Z,0.1
2024-01-05T00:15:00Z,0.0
2024-01-05T00:30:00Z,0.3
2024-01-09T06:00:00Z,1.8
";

async fn spawn_app(db: Database) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, rgv_server::router(db)).await.unwrap();
    });
    format!("http://{addr}")
}

async fn spawn_populated_app() -> String {
    let db = Database::new().unwrap();
    db.load_measurements(FIXTURE).unwrap();
    spawn_app(db).await
}

async fn get_json(url: &str) -> (u16, Value) {
    let response = reqwest::get(url).await.expect("request should complete");
    let status = response.status().as_u16();
    let body = response.json::<Value>().await.expect("body should be JSON");
    (status, body)
}

#[tokio::test]
async fn rainfall_for_date_returns_rows_in_order() {
    let base = spawn_populated_app().await;
    let (status, body) = get_json(&format!("{base}/api/rainfall?date=2024-01-05")).await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!([
            { "timestamp": "2024-01-05T00:00:00Z", "value": 0.1 },
            { "timestamp": "2024-01-05T00:15:00Z", "value": 0.0 },
            { "timestamp": "2024-01-05T00:30:00Z", "value": 0.3 },
        ])
    );
}

#[tokio::test]
async fn omitted_date_is_an_empty_success() {
    let base = spawn_populated_app().await;

    let (status, body) = get_json(&format!("{base}/api/rainfall")).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!([]));

    let (status, body) = get_json(&format!("{base}/api/rainfall?date=")).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn date_without_rows_is_an_empty_success() {
    let base = spawn_populated_app().await;
    let (status, body) = get_json(&format!("{base}/api/rainfall?date=2024-02-14")).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn malformed_date_is_a_retrieval_fault() {
    let base = spawn_populated_app().await;
    let (status, body) = get_json(&format!("{base}/api/rainfall?date=05-01-2024")).await;

    assert_eq!(status, 500);
    let message = body["error"].as_str().expect("error body carries a message");
    assert!(message.contains("05-01-2024"), "message names the bad input: {message}");
}

#[tokio::test]
async fn daterange_returns_min_and_max() {
    let base = spawn_populated_app().await;
    let (status, body) = get_json(&format!("{base}/api/rainfall/daterange")).await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({ "min_date": "2024-01-05", "max_date": "2024-01-09" })
    );
}

#[tokio::test]
async fn daterange_of_empty_store_is_null_bounds() {
    let base = spawn_app(Database::new().unwrap()).await;
    let (status, body) = get_json(&format!("{base}/api/rainfall/daterange")).await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "min_date": null, "max_date": null }));
}
