// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::EngineError;
use crate::science::strength_gain::CementClass;

/// Incoming test record from the collector (JSON).
/// This struct is designed to be FLEXIBLE against the wider collector schema
/// using `#[serde(default)]` for optional fields and a flattened catch-all.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestRecordInput {
    /// Test ID / location label, carried opaquely for display.
    #[serde(default)]
    pub id: Option<String>,
    /// Cube compressive strengths (MPa), exactly three expected.
    pub samples: Vec<f64>,
    #[serde(rename = "ageDays")]
    pub age_days: u32,
    /// Class code string, resolved to a `CementClass` at validation.
    #[serde(rename = "cementClass")]
    pub cement_class: String,
    // Ignore all other fields from the collector schema
    #[serde(flatten)]
    #[allow(dead_code)]
    _extra: HashMap<String, serde_json::Value>,
}

/// Validated cube test record, the unit of analysis.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CubeRecord {
    pub id: Option<String>,
    pub samples: [f64; 3],
    pub age_days: u32,
    pub cement_class: CementClass,
}

impl CubeRecord {
    /// Validate a raw collector record into a typed one.
    ///
    /// Format-level checks only: sample count, finiteness, class code. The
    /// age *range* is the predictor's domain check, not the boundary's.
    pub fn from_input(input: TestRecordInput) -> Result<CubeRecord, EngineError> {
        let samples: [f64; 3] = input.samples.as_slice().try_into().map_err(|_| {
            EngineError::InvalidArgument(format!(
                "expected exactly 3 sample strengths, got {}",
                input.samples.len()
            ))
        })?;

        if samples.iter().any(|v| !v.is_finite()) {
            return Err(EngineError::InvalidArgument(
                "sample strengths must be finite".to_string(),
            ));
        }

        let cement_class = CementClass::parse(&input.cement_class)?;

        Ok(CubeRecord {
            id: input.id,
            samples,
            age_days: input.age_days,
            cement_class,
        })
    }

    /// Hydrate records directly from JSON. Collectors send either a single
    /// record object or an array of them; both shapes are accepted.
    pub fn from_json(records_json: &str) -> Result<Vec<CubeRecord>, EngineError> {
        let value: serde_json::Value = serde_json::from_str(records_json)?;

        let inputs: Vec<TestRecordInput> = if value.is_array() {
            serde_json::from_value(value)?
        } else {
            vec![serde_json::from_value(value)?]
        };

        inputs.into_iter().map(CubeRecord::from_input).collect()
    }
}
