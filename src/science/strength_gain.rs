// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// CubeLab — Concrete Cube Test Analysis
// StrengthGain: cement-class development curves and 28-day back-calculation
//

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

use crate::error::EngineError;

/// Reference age in days. Curves are normalized so proportion(28) == 1.0.
pub const REFERENCE_AGE_DAYS: u32 = 28;

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CementClass {
    R = 0,
    N = 1,
    S = 2,
}

impl CementClass {
    /// Strength-development coefficient s per BS EN 1992-1-1, sub-clause 3.1.2(6);
    ///  0.20 for cement of strength classes CEM 42.5R, CEM 52.5N and CEM 52.5R (Class R)
    ///  0.25 for cement of strength classes CEM 32.5R, CEM 42.5N (Class N)
    ///  0.38 for cement of strength classes CEM 32.5N (Class S)
    pub fn coefficient(self) -> f64 {
        match self {
            CementClass::R => 0.20,
            CementClass::N => 0.25,
            CementClass::S => 0.38,
        }
    }

    /// Resolve a class code. Anything outside {R, N, S} is rejected here,
    /// never defaulted.
    pub fn parse(code: &str) -> Result<CementClass, EngineError> {
        match code {
            "R" => Ok(CementClass::R),
            "N" => Ok(CementClass::N),
            "S" => Ok(CementClass::S),
            _ => Err(EngineError::InvalidArgument(format!(
                "unsupported cement class '{}' (expected N, R or S)",
                code
            ))),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            CementClass::R => "R",
            CementClass::N => "N",
            CementClass::S => "S",
        }
    }
}

/// Strength-gain curve for one cement class: the proportion of 28-day
/// characteristic strength attained on each day of the 1-28 domain.
///
/// Built once per class and shared read-only; serializable so the full
/// day/proportion table can be handed to a frontend for charting.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GainCurve {
    class: CementClass,
    days: Vec<f64>,
    proportions: Vec<f64>,
}

impl GainCurve {
    /// Tabulate proportion(t) = exp(s * (1 - sqrt(28 / t))) over integer days
    /// 1..=28. The sqrt term vanishes at t = 28, so the curve ends at exactly 1.0.
    pub fn build(class: CementClass) -> GainCurve {
        let s = class.coefficient();
        let reference = f64::from(REFERENCE_AGE_DAYS);

        let days: Vec<f64> = (1..=REFERENCE_AGE_DAYS).map(f64::from).collect();
        let proportions = days
            .iter()
            .map(|&t| (s * (1.0 - (reference / t).sqrt())).exp())
            .collect();

        GainCurve {
            class,
            days,
            proportions,
        }
    }

    pub fn class(&self) -> CementClass {
        self.class
    }

    /// Proportion of 28-day strength at `age_days`, by piecewise-linear
    /// interpolation over the curve table. An age that lands on a table node
    /// returns that node's value.
    ///
    /// The curve is defined only on [1, 28]. Ages outside the table are an
    /// error, not a clamp — the model says nothing about them.
    pub fn proportion_at(&self, age_days: f64) -> Result<f64, EngineError> {
        let n = self.days.len();
        if !age_days.is_finite() || age_days < self.days[0] || age_days > self.days[n - 1] {
            return Err(EngineError::InvalidArgument(format!(
                "test age {} days is outside the curve domain [{}, {}]",
                age_days,
                self.days[0],
                self.days[n - 1]
            )));
        }

        // Find the bracketing interval
        for i in 0..n - 1 {
            if self.days[i] <= age_days && age_days <= self.days[i + 1] {
                let x0 = self.days[i];
                let x1 = self.days[i + 1];
                let y0 = self.proportions[i];
                let y1 = self.proportions[i + 1];

                // Linear interpolation formula
                return Ok(y0 + (y1 - y0) * (age_days - x0) / (x1 - x0));
            }
        }

        unreachable!("age inside the curve domain but no bracketing interval");
    }
}

/// Process-wide curve cache. Curves depend only on the class, not on test
/// data, so they are built once and shared read-only across all predictions.
pub struct CurveRegistry;

impl CurveRegistry {
    pub fn get(class: CementClass) -> &'static GainCurve {
        static CURVES: OnceLock<[GainCurve; 3]> = OnceLock::new();

        let curves = CURVES.get_or_init(|| {
            [
                GainCurve::build(CementClass::R),
                GainCurve::build(CementClass::N),
                GainCurve::build(CementClass::S),
            ]
        });

        // Discriminants R=0, N=1, S=2 index the build order above
        &curves[class as usize]
    }
}

pub struct PredictionEngine;

impl PredictionEngine {
    /// Back-calculate the predicted 28-day characteristic strength from an
    /// early-age characteristic strength.
    ///
    /// proportion(age) never exceeds 1.0 on the domain, so the prediction
    /// scales the early measurement up, and leaves a day-28 test unchanged.
    pub fn predict(
        characteristic_strength: f64,
        age_days: u32,
        cement_class: CementClass,
    ) -> Result<f64, EngineError> {
        if !characteristic_strength.is_finite() {
            return Err(EngineError::InvalidArgument(format!(
                "characteristic strength must be finite, got {}",
                characteristic_strength
            )));
        }

        let curve = CurveRegistry::get(cement_class);
        let proportion = curve.proportion_at(f64::from(age_days))?;

        Ok(characteristic_strength / proportion)
    }
}
