// Entry point and high-level flow.
//
// One linear batch run per invocation:
// - read building records from the geodatabase CSV export,
// - aggregate legality/zoning statistics at national, province, and
//   district granularity,
// - write the JSON snapshot consumed by the web dashboard.
//
// Paths are constants on purpose: the tool runs unattended from an external
// scheduler, with no flags and no environment variables.
mod error;
mod loader;
mod output;
mod reports;
mod types;
mod util;
mod zoning;

use std::process::ExitCode;

use error::ExportError;

const SOURCE_PATH: &str = "national_construction_master.csv";
const OUTPUT_PATH: &str = "construction_stats.json";

fn run() -> Result<(), ExportError> {
    println!("Reading data from: {}", SOURCE_PATH);
    println!(
        "Started at: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let (records, load_report) = loader::load_records(SOURCE_PATH)?;
    println!(
        "Processed {} records",
        util::format_int(load_report.total_rows)
    );
    if load_report.parse_errors > 0 {
        println!(
            "Note: {} rows skipped due to parse errors.",
            util::format_int(load_report.parse_errors)
        );
    }
    if load_report.normalized_fields > 0 {
        println!(
            "Info: Normalized missing fields in {} rows.",
            util::format_int(load_report.normalized_fields)
        );
    }

    let report = reports::generate_stats(&records, util::timestamp_now());
    output::write_json(OUTPUT_PATH, &report)?;

    println!("\n{}", "=".repeat(50));
    println!("EXPORT COMPLETE");
    println!("{}", "=".repeat(50));
    println!("Output: {}", OUTPUT_PATH);
    println!(
        "Total buildings: {}",
        util::format_int(report.national.total)
    );
    println!("Legal: {}", util::format_int(report.national.legal));
    println!("Illegal: {}", util::format_int(report.national.illegal));
    println!("Compliance: {}%", report.national.compliance);
    println!("Provinces: {}", report.provinces.len());
    println!("Districts: {}", report.districts.len());
    println!("Zoning categories: {}", report.zoning.len());
    println!("{}\n", "=".repeat(50));

    println!("Top districts by illegal construction:\n");
    output::preview_table_rows(&report.districts, 5);

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Export failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
