// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use serde::{Deserialize, Serialize};

/// Margin subtracted from the three-cube mean to obtain the characteristic
/// strength (small-sample convention of the governing concrete standard).
pub const CHARACTERISTIC_MARGIN: f64 = 4.0;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StrengthSummary {
    pub mean_strength: f64,           // MPa
    pub characteristic_strength: f64, // MPa
}

pub struct SummaryEngine;

impl SummaryEngine {
    /// Mean of the three cube strengths, and the characteristic value at the
    /// fixed 4 MPa margin below it.
    ///
    /// Inputs arrive validated from the record boundary; there is no error
    /// path at this layer.
    pub fn compute(samples: &[f64; 3]) -> StrengthSummary {
        let mean_strength = samples.iter().sum::<f64>() / samples.len() as f64;

        StrengthSummary {
            mean_strength,
            characteristic_strength: mean_strength - CHARACTERISTIC_MARGIN,
        }
    }
}
