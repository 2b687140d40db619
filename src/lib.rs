// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// CubeLab — Concrete Cube Test Analysis
// Core Profile: strength summary + 28-day strength-gain prediction
//

pub mod analysis_kernel;
pub mod error;
pub mod record;
pub mod science;
#[cfg(test)]
pub mod tests_analysis;

// Re-export core types
pub use analysis_kernel::{AnalysisKernel, AnalysisResponse, AnalysisResult, ValidationEvent};
pub use error::EngineError;
pub use record::{CubeRecord, TestRecordInput};
pub use science::strength_gain::{CementClass, CurveRegistry, GainCurve, PredictionEngine};
pub use science::summary::{StrengthSummary, SummaryEngine};
