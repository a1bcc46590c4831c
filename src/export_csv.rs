use std::env;
use std::error::Error;

use viz_lib::parser;

const DEFAULT_LOG_PATH: &str = "test_results.log";
const DEFAULT_OUTPUT_PATH: &str = "test_results.csv";

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);

    let mut log_path = String::from(DEFAULT_LOG_PATH);
    let mut output_path = String::from(DEFAULT_OUTPUT_PATH);
    let mut log_path_seen = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-o" => {
                output_path = args
                    .next()
                    .ok_or("You should specify an output file after -o")?;
            }
            _ => {
                if arg.starts_with('-') {
                    return Err(format!("Unknown parameter: {}", arg).into());
                }
                if log_path_seen {
                    return Err("You should specify at most one log file".into());
                }
                log_path = arg;
                log_path_seen = true;
            }
        }
    }

    let records = parser::parse_log_file(&log_path)?;

    let mut writer = csv::Writer::from_path(&output_path)?;
    writer.write_record([
        "Trace",
        "Policy",
        "L1 hit ratio",
        "L1 AAT",
        "L2 read hit ratio",
        "L2 AAT",
    ])?;
    for record in &records {
        writer.write_record([
            record.trace.clone(),
            record.policy.clone(),
            record.l1_hit_ratio.to_string(),
            record.l1_aat.to_string(),
            record.l2_hit_ratio.to_string(),
            record.l2_aat.to_string(),
        ])?;
    }
    writer.flush()?;

    eprintln!("Wrote {} records to {}", records.len(), output_path);

    Ok(())
}
