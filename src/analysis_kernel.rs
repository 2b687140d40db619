// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// CubeLab — Concrete Cube Test Analysis
// AnalysisKernel: Unified Test-Record Analysis Orchestrator
//

// ============================================================================
// AnalysisKernel: Unified Rust Analysis Orchestrator
// ============================================================================
// This module centralizes the per-record pipeline (summary + prediction).
// Frontends should call ONLY this module, not individual engines.
// ============================================================================

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::error::EngineError;
use crate::record::CubeRecord;
use crate::science::strength_gain::{CementClass, CurveRegistry, PredictionEngine};
use crate::science::summary::SummaryEngine;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationEvent {
    pub topic: String,
    pub message: String,
    pub severity: String, // 'INFO', 'WARNING', 'CRITICAL'
}

#[derive(Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub results: Vec<AnalysisResult>,
    pub events: Vec<ValidationEvent>,
    pub compute_time_ms: f32,
}

/// Computed fields for one record, joined with the record's own id, age and
/// cement class for display. Values stay at full precision here; rounding is
/// the presentation layer's job.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: Option<String>,
    pub age_days: u32,
    pub cement_class: CementClass,
    pub mean_strength: f64,
    pub characteristic_strength: f64,
    pub predicted_characteristic_strength: f64,
}

#[wasm_bindgen]
pub struct AnalysisKernel;

#[wasm_bindgen]
impl AnalysisKernel {
    /// Analyze cube test records sent as JSON.
    ///
    /// # Arguments
    /// * `records_json` - a single record object or an array of records:
    ///   `{"id": "Slab A3", "samples": [23.0, 24.0, 25.0], "ageDays": 7, "cementClass": "N"}`
    ///
    /// # Returns
    /// JSON string containing an `AnalysisResponse` (results + validation
    /// events + timing), or an `{"error": ...}` object if hydration or
    /// analysis fails.
    ///
    /// # Notes
    /// This function is deterministic and reproducible across platforms.
    /// Records are independent; a batch is the per-record pipeline in a loop.
    #[wasm_bindgen]
    pub fn analyze_records(records_json: &str) -> String {
        let start = instant::Instant::now();

        // 1. Hydrate records from JSON (ALL marshalling in Rust)
        let records = match CubeRecord::from_json(records_json) {
            Ok(r) => r,
            Err(e) => {
                return serde_json::to_string(&serde_json::json!({
                    "error": format!("Failed to hydrate records: {}", e)
                }))
                .unwrap_or_default();
            }
        };

        // 2. Run the pure pipeline, one record at a time
        let results = match Self::analyze_batch(&records) {
            Ok(r) => r,
            Err(e) => {
                return serde_json::to_string(&serde_json::json!({
                    "error": format!("Analysis failed: {}", e)
                }))
                .unwrap_or_default();
            }
        };

        // 3. Generate events (the bridge to the frontend)
        let events = Self::collect_events(&results);

        // 4. Serialize output
        let response = AnalysisResponse {
            results,
            events,
            compute_time_ms: start.elapsed().as_secs_f32() * 1000.0,
        };

        serde_json::to_string(&response).unwrap_or_default()
    }

    /// Full day/proportion table for one class, for frontend charting.
    pub fn gain_curve(cement_class: &str) -> Result<JsValue, JsValue> {
        let class =
            CementClass::parse(cement_class).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(serde_wasm_bindgen::to_value(CurveRegistry::get(class))?)
    }
}

/// Pure Rust Implementation (Non-WASM-Bindgen)
impl AnalysisKernel {
    /// [CORE] Pure per-record pipeline.
    /// Zero-overhead access for Rust callers; the JSON surface wraps this.
    pub fn analyze(record: &CubeRecord) -> Result<AnalysisResult, EngineError> {
        let summary = SummaryEngine::compute(&record.samples);

        let predicted = PredictionEngine::predict(
            summary.characteristic_strength,
            record.age_days,
            record.cement_class,
        )?;

        Ok(AnalysisResult {
            id: record.id.clone(),
            age_days: record.age_days,
            cement_class: record.cement_class,
            mean_strength: summary.mean_strength,
            characteristic_strength: summary.characteristic_strength,
            predicted_characteristic_strength: predicted,
        })
    }

    /// Batch analysis is the same path in a loop; records never share state.
    pub fn analyze_batch(records: &[CubeRecord]) -> Result<Vec<AnalysisResult>, EngineError> {
        records.iter().map(Self::analyze).collect()
    }

    /// Advisory findings attached to a response. Events never fail a record;
    /// plausibility judgment stays with the caller.
    fn collect_events(results: &[AnalysisResult]) -> Vec<ValidationEvent> {
        let mut events = Vec::new();

        for result in results {
            let label = result.id.as_deref().unwrap_or("(unlabeled)");

            if result.characteristic_strength <= 0.0 {
                events.push(ValidationEvent {
                    topic: "ANALYSIS.SUMMARY".to_string(),
                    message: format!(
                        "{}: mean strength {:.1} MPa is at or below the 4 MPa sampling margin",
                        label, result.mean_strength
                    ),
                    severity: "CRITICAL".to_string(),
                });
            }

            if result.predicted_characteristic_strength < 25.0 {
                events.push(ValidationEvent {
                    topic: "ANALYSIS.PREDICTION".to_string(),
                    message: format!(
                        "{}: Low predicted 28d strength: {:.1} MPa",
                        label, result.predicted_characteristic_strength
                    ),
                    severity: "WARNING".to_string(),
                });
            }
        }

        events
    }
}
