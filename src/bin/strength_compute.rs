// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
//
//! strength_compute — CLI binary for cube test-record analysis
//!
//! Takes JSON test records on stdin or as --json argument (a single record
//! object or an array of records), runs the analysis kernel (strength
//! summary + 28-day strength-gain prediction), and outputs an
//! AnalysisResponse JSON object with per-record results, validation events
//! and timing.
//!
//! Usage:
//!   echo '[{"id":"Slab A3","samples":[23.0,24.0,25.0],"ageDays":7,"cementClass":"N"}]' | strength_compute
//!   strength_compute --json '{"samples":[23.0,24.0,25.0],"ageDays":7,"cementClass":"N"}'
//!
//! Output: JSON with mean, characteristic and predicted 28-day strengths per
//!         record, joined with each record's id, age and cement class.
//!         Values are full precision; see strength_report for rounded tables.

use std::env;
use std::io::{self, Read};

use cubelab_core::analysis_kernel::AnalysisKernel;

fn main() {
    let input = get_input();

    let output = AnalysisKernel::analyze_records(&input);

    // The kernel reports hydration/analysis failures as an {"error": ...}
    // object; forward those to stderr and fail the process.
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&output) {
        if let Some(error) = value.get("error") {
            eprintln!("ERROR: {}", error);
            std::process::exit(1);
        }
    }

    println!("{}", output);
}

fn get_input() -> String {
    let args: Vec<String> = env::args().collect();

    // Check for --json argument
    for i in 0..args.len() {
        if args[i] == "--json" && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }

    // Otherwise read from stdin
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .expect("Failed to read stdin");
    input
}
