// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT

//! CubeLab Analysis Kernel Tests
//!
//! End-to-end scenario tests driving the kernel through its JSON surface.

use crate::analysis_kernel::AnalysisKernel;
use crate::record::CubeRecord;
use serde_json::json;

#[test]
fn test_class_n_seven_day_scenario() {
    println!(" Checking Class N 7-day scenario");

    // 23/24/25 MPa cubes at 7 days, Class N (s = 0.25):
    // mean 24.0, characteristic 20.0, proportion exp(-0.25) ~ 0.7788,
    // predicted 28-day strength ~ 25.68 MPa.
    let records = json!([
        { "id": "Slab A3", "samples": [23.0, 24.0, 25.0], "ageDays": 7, "cementClass": "N" }
    ]);

    let response_json = AnalysisKernel::analyze_records(&records.to_string());
    let response: serde_json::Value = serde_json::from_str(&response_json).unwrap();

    assert!(response.get("error").is_none(), "{}", response_json);
    let result = &response["results"][0];

    assert_eq!(result["id"], "Slab A3");
    assert_eq!(result["age_days"], 7);
    assert_eq!(result["cement_class"], "N");

    let mean = result["mean_strength"].as_f64().unwrap();
    assert_eq!(mean, 24.0);

    let characteristic = result["characteristic_strength"].as_f64().unwrap();
    assert_eq!(characteristic, 20.0);

    let predicted = result["predicted_characteristic_strength"].as_f64().unwrap();
    assert!((predicted - 25.68).abs() < 0.005, "predicted {}", predicted);

    // Healthy record, no advisory events
    assert_eq!(response["events"].as_array().unwrap().len(), 0);
    assert!(response["compute_time_ms"].as_f64().unwrap() >= 0.0);
}

#[test]
fn test_single_object_payload_matches_array() {
    let single = AnalysisKernel::analyze_records(
        r#"{"samples":[40.0,41.0,42.0],"ageDays":14,"cementClass":"R"}"#,
    );
    let array = AnalysisKernel::analyze_records(
        r#"[{"samples":[40.0,41.0,42.0],"ageDays":14,"cementClass":"R"}]"#,
    );

    let single: serde_json::Value = serde_json::from_str(&single).unwrap();
    let array: serde_json::Value = serde_json::from_str(&array).unwrap();

    assert_eq!(single["results"], array["results"]);
}

#[test]
fn test_unsupported_class_yields_error_object() {
    let response_json = AnalysisKernel::analyze_records(
        r#"{"samples":[23.0,24.0,25.0],"ageDays":7,"cementClass":"X"}"#,
    );
    let response: serde_json::Value = serde_json::from_str(&response_json).unwrap();

    let error = response["error"].as_str().unwrap();
    assert!(error.contains("cement class"), "{}", error);
}

#[test]
fn test_out_of_domain_age_yields_error_object() {
    for age in [0, 29] {
        let records = json!({ "samples": [23.0, 24.0, 25.0], "ageDays": age, "cementClass": "N" });
        let response_json = AnalysisKernel::analyze_records(&records.to_string());
        let response: serde_json::Value = serde_json::from_str(&response_json).unwrap();

        let error = response["error"].as_str().unwrap();
        assert!(error.contains("curve domain"), "age {}: {}", age, error);
    }
}

#[test]
fn test_batch_matches_per_record_analysis() {
    let records = CubeRecord::from_json(
        r#"[{"id":"Pier 1","samples":[33.0,35.0,34.0],"ageDays":3,"cementClass":"R"},
            {"id":"Pier 2","samples":[27.0,26.5,28.0],"ageDays":21,"cementClass":"S"}]"#,
    )
    .unwrap();

    let batch = AnalysisKernel::analyze_batch(&records).unwrap();
    assert_eq!(batch.len(), 2);

    for (record, from_batch) in records.iter().zip(&batch) {
        let alone = AnalysisKernel::analyze(record).unwrap();
        assert_eq!(
            alone.predicted_characteristic_strength,
            from_batch.predicted_characteristic_strength
        );
        assert_eq!(alone.id, from_batch.id);
    }
}

#[test]
fn test_low_strength_events() {
    println!(" Checking advisory event stream");

    // Mean 4.0 -> characteristic 0.0: at the sampling margin, prediction
    // stays 0.0. Should flag CRITICAL (margin) and WARNING (low 28d).
    let records = json!([
        { "id": "Kerb K1", "samples": [3.0, 4.0, 5.0], "ageDays": 7, "cementClass": "N" }
    ]);

    let response_json = AnalysisKernel::analyze_records(&records.to_string());
    let response: serde_json::Value = serde_json::from_str(&response_json).unwrap();

    assert!(response.get("error").is_none(), "{}", response_json);

    let events = response["events"].as_array().unwrap();
    let severities: Vec<&str> = events
        .iter()
        .map(|e| e["severity"].as_str().unwrap())
        .collect();

    assert!(severities.contains(&"CRITICAL"), "{:?}", severities);
    assert!(severities.contains(&"WARNING"), "{:?}", severities);

    // Events are advisory only; the record still computes
    assert_eq!(response["results"].as_array().unwrap().len(), 1);
}
