//! JSON-driven screener shim around the library pipeline.
//!
//! Reads an `AnalysisRequest` from the file named on the command line (or
//! from stdin when the argument is `-` or absent), runs the filter/rank/
//! scenario pipeline, and prints the `AnalysisResponse` as pretty JSON.
//! Interactive prompting and table rendering stay with external callers.

use std::io::Read;

use optionscreen::analysis::analyze;
use optionscreen::core::{from_json, to_json_pretty, AnalysisRequest};

fn main() {
    if let Err(err) = run() {
        eprintln!("chain-screen: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let payload = match std::env::args().nth(1).as_deref() {
        None | Some("-") => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        Some(path) => std::fs::read_to_string(path)?,
    };

    let request: AnalysisRequest = from_json(&payload)?;
    let response = analyze(&request)?;

    if response.ranked.is_empty() {
        eprintln!("no contracts match the budget and breakeven criteria");
    }
    println!("{}", to_json_pretty(&response)?);
    Ok(())
}
