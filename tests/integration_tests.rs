use fuel_prices::{CliConfig, Engine, FuelPipeline, LocalStorage};
use httpmock::prelude::*;
use std::collections::HashSet;
use tempfile::TempDir;

fn test_config(server: &MockServer, output_path: &str, states: &[&str]) -> CliConfig {
    CliConfig {
        goodreturns_base: server.base_url(),
        ndtv_base: server.base_url(),
        drivespark_base: server.base_url(),
        output_path: output_path.to_string(),
        output_file: "data.json".to_string(),
        states: states.iter().map(|s| s.to_string()).collect(),
        request_timeout_secs: 5,
        source_delay_ms: 0,
        state_delay_ms: 0,
        verbose: false,
    }
}

fn run_output(output_path: &str) -> serde_json::Value {
    let raw = std::fs::read_to_string(std::path::Path::new(output_path).join("data.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[tokio::test]
async fn test_all_sources_down_yields_estimated_records() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(500);
    });

    let config = test_config(&server, &output_path, &["Goa", "Kerala", "Delhi"]);
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = FuelPipeline::new(storage, config).unwrap();
    let report = Engine::new(pipeline).run().await.unwrap();

    assert_eq!(report.fetched, 0);
    assert_eq!(report.estimated, 3);

    let parsed = run_output(&output_path);
    let records = parsed.as_array().unwrap();
    assert_eq!(records.len(), 3);

    // Deterministic per-state estimates, distinct because the name hashes
    // differ, diesel offset at 0.8x the petrol offset.
    assert_eq!(records[0]["state"], "Goa");
    assert_eq!(records[0]["petrol"], "98.91");
    assert_eq!(records[0]["diesel"], "91.43");
    assert_eq!(records[1]["state"], "Kerala");
    assert_eq!(records[1]["petrol"], "102.49");
    assert_eq!(records[1]["diesel"], "94.29");
    assert_eq!(records[2]["state"], "Delhi");
    assert_eq!(records[2]["petrol"], "107.49");
    assert_eq!(records[2]["diesel"], "98.29");

    let petrols: HashSet<&str> = records.iter().map(|r| r["petrol"].as_str().unwrap()).collect();
    assert_eq!(petrols.len(), 3);

    for record in records {
        assert!(record.get("source").is_none(), "source tag must be stripped");
        let updated = record["updated"].as_str().unwrap();
        assert_eq!(updated.len(), 10);
        assert_eq!(updated.as_bytes()[4], b'-');
        assert_eq!(updated.as_bytes()[7], b'-');
    }
}

#[tokio::test]
async fn test_first_source_success_skips_the_rest() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let goodreturns = MockServer::start();
    let ndtv = MockServer::start();
    let drivespark = MockServer::start();

    goodreturns.mock(|when, then| {
        when.method(GET).path("/petrol-price-in-bangalore.html");
        then.status(200)
            .body(r#"<div class="fuel-price"><span>₹ 100.00</span></div>"#);
    });
    goodreturns.mock(|when, then| {
        when.method(GET).path("/diesel-price-in-bangalore.html");
        then.status(200)
            .body(r#"<div class="fuel-price"><span>₹ 90.00</span></div>"#);
    });
    let ndtv_mock = ndtv.mock(|when, then| {
        when.method(GET);
        then.status(200);
    });
    let drivespark_mock = drivespark.mock(|when, then| {
        when.method(GET);
        then.status(200);
    });

    let mut config = test_config(&goodreturns, &output_path, &["Karnataka"]);
    config.ndtv_base = ndtv.base_url();
    config.drivespark_base = drivespark.base_url();

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = FuelPipeline::new(storage, config).unwrap();
    let report = Engine::new(pipeline).run().await.unwrap();

    assert_eq!(report.fetched, 1);
    assert_eq!(report.estimated, 0);
    ndtv_mock.assert_hits(0);
    drivespark_mock.assert_hits(0);

    let parsed = run_output(&output_path);
    let records = parsed.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["state"], "Karnataka");
    assert_eq!(records[0]["petrol"], "100.00");
    assert_eq!(records[0]["diesel"], "90.00");
}

#[tokio::test]
async fn test_full_state_list_gets_one_record_each() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(503);
    });

    // Empty states list means the full static list.
    let config = test_config(&server, &output_path, &[]);
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = FuelPipeline::new(storage, config).unwrap();
    let report = Engine::new(pipeline).run().await.unwrap();

    assert_eq!(report.fetched + report.estimated, 36);

    let parsed = run_output(&output_path);
    let records = parsed.as_array().unwrap();
    assert_eq!(records.len(), 36);

    let names: HashSet<&str> = records.iter().map(|r| r["state"].as_str().unwrap()).collect();
    assert_eq!(names.len(), 36, "no duplicate state names");

    for record in records {
        for field in ["state", "petrol", "diesel", "updated"] {
            let value = record[field].as_str().unwrap();
            assert!(!value.is_empty(), "{} must be non-empty", field);
        }
    }
}

#[tokio::test]
async fn test_write_failure_fails_the_run() {
    let temp_dir = TempDir::new().unwrap();
    // Point the output base at a regular file so directory creation fails.
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let output_path = blocker.join("nested").to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(500);
    });

    let config = test_config(&server, &output_path, &["Goa"]);
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = FuelPipeline::new(storage, config).unwrap();

    let result = Engine::new(pipeline).run().await;
    assert!(result.is_err());
}
