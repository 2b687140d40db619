// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
//
//! strength_report — tabular presentation of cube test analysis
//!
//! Takes the same JSON test records as strength_compute (stdin or --json) and
//! prints a fixed-width summary table, one row per record. This is the only
//! place values are rounded; the kernel itself keeps full precision.
//!
//! Usage:
//!   echo '[{"id":"Slab A3","samples":[23.0,24.0,25.0],"ageDays":7,"cementClass":"N"}]' | strength_report

use std::env;
use std::io::{self, Read};

use cubelab_core::analysis_kernel::AnalysisKernel;
use cubelab_core::record::CubeRecord;

fn main() {
    let input = get_input();

    let records = match CubeRecord::from_json(&input) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    let results = match AnalysisKernel::analyze_batch(&records) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    println!();
    println!("\t\tAnalysis of Compressive Strength Test Results");
    println!();
    println!(
        "{:<16} {:>4} {:>6} {:>14} {:>24} {:>26}",
        "ID", "Age", "Class", "Mean Strength", "Characteristic Strength", "Predicted 28-day Strength"
    );

    for result in &results {
        println!(
            "{:<16} {:>4} {:>6} {:>14.2} {:>24.2} {:>26.2}",
            result.id.as_deref().unwrap_or("-"),
            result.age_days,
            result.cement_class.code(),
            result.mean_strength,
            result.characteristic_strength,
            result.predicted_characteristic_strength
        );
    }
    println!();
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
