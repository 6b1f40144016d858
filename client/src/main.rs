use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::env;

/// Smoke-test client: posts one reading of each sensor type to a running
/// service and prints the responses.
#[tokio::main]
async fn main() -> Result<()> {
    let base_url =
        env::var("FLEET_SERVICE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let vehicle_id = env::args().nth(1).unwrap_or_else(|| "test-vehicle-1".to_string());

    println!("Fleet Telemetry Client");
    println!("======================");
    println!("Service:  {}", base_url);
    println!("Vehicle:  {}", vehicle_id);

    let client = reqwest::Client::new();
    let ingest_url = format!("{}/api/fleet/vehicles/{}/sensor-data", base_url, vehicle_id);

    for (label, payload) in sample_payloads() {
        let response = client
            .post(&ingest_url)
            .json(&payload)
            .send()
            .await
            .with_context(|| format!("posting {} reading", label))?;
        let status = response.status();
        let body: Value = response.json().await.context("decoding response body")?;
        println!("\n[{}] {} -> {}", label, ingest_url, status);
        println!("{}", serde_json::to_string_pretty(&body)?);
    }

    let status: Value = client
        .get(&ingest_url)
        .send()
        .await
        .context("fetching rate-limit status")?
        .json()
        .await
        .context("decoding status body")?;
    println!("\nRate-limit status:");
    println!("{}", serde_json::to_string_pretty(&status)?);

    Ok(())
}

fn sample_payloads() -> Vec<(&'static str, Value)> {
    vec![
        (
            "radar",
            json!({
                "timestamp": "2024-02-03T10:00:00Z",
                "sensorType": "radar",
                "data": {"range": 100, "angle": 45}
            }),
        ),
        (
            "gps",
            json!({
                "timestamp": "2024-02-03T10:00:01Z",
                "sensorType": "gps",
                "data": {"latitude": 52.52, "longitude": 13.405}
            }),
        ),
        (
            "camera",
            json!({
                "timestamp": "2024-02-03T10:00:02Z",
                "sensorType": "camera",
                "data": {"resolution": "1920x1080", "format": "h264"}
            }),
        ),
        (
            "lidar",
            json!({
                "timestamp": "2024-02-03T10:00:03Z",
                "sensorType": "lidar",
                "data": {
                    "points": [[1.0, 2.0, 0.5], [1.1, 2.1, 0.4]],
                    "resolution": 0.2,
                    "scanDuration": 100
                }
            }),
        ),
    ]
}
