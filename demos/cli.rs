//! Command-line interface for chromatap
//!
//! Simulates a capture session without a camera: each hex color argument
//! stands in for one clicked pixel. Prints the nearest name per sample as
//! live feedback, then a JSON session report with every harmony member
//! labeled.

use chromatap::{analyze_session, ColorConverter, ColorNamer, HarmonyGenerator, SampleSession};
use std::{env, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut hex_samples = Vec::new();
    for arg in &args[1..] {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            hex => hex_samples.push(hex.to_string()),
        }
    }

    if hex_samples.is_empty() {
        print_help(&args[0]);
        process::exit(1);
    }

    let converter = ColorConverter::new();
    let namer = ColorNamer::css3();
    let generator = HarmonyGenerator::new();
    let mut session = SampleSession::new();

    // "Click" each sample and give immediate feedback, as the capture
    // loop would during a live session
    for hex in &hex_samples {
        match converter.hex_to_rgb(hex) {
            Ok(rgb) => {
                let sample = session.record(rgb);
                eprintln!(
                    "Sample {} (RGB): {} -> nearest name: {}",
                    sample.index,
                    sample.rgb,
                    namer.nearest_name(sample.rgb)
                );
            }
            Err(error) => {
                eprintln!("Skipping '{}': {}", hex, error);
            }
        }
    }

    if session.is_empty() {
        eprintln!("No valid samples provided.");
        process::exit(1);
    }

    // Post-session report: harmony sets with labeled members
    let reports = analyze_session(&session, &namer, &generator);

    match serde_json::to_string_pretty(&reports) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing report: {}", e);
            process::exit(1);
        }
    }

    // Human-readable summary to stderr
    eprintln!();
    eprintln!("Session Summary:");
    for report in &reports {
        eprintln!("  [{}] {} {} ({})", report.index, report.hex, report.name, report.rgb);
        for member in &report.harmony {
            eprintln!("      {:<14} {} {}", member.kind.to_string(), member.hex, member.name);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} <hex_color> [<hex_color> ...]", program_name);
    eprintln!();
    eprintln!("Name each sampled color and derive its harmony palette.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} '#FF0000'", program_name);
    eprintln!("  {} FF0000 4682B4 9ACD32", program_name);
}
