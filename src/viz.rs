use std::env;
use std::error::Error;
use std::path::PathBuf;

use viz_lib::chart;
use viz_lib::parser;

const DEFAULT_LOG_PATH: &str = "test_results.log";

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);

    let mut log_path = String::from(DEFAULT_LOG_PATH);
    let mut output_dir = PathBuf::from(".");
    let mut verbose = false;
    let mut log_path_seen = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-v" => verbose = true,
            "-o" => {
                output_dir = PathBuf::from(
                    args.next()
                        .ok_or("You should specify an output directory after -o")?,
                );
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
    eprintln!("Parsed {} records from {}", records.len(), log_path);
    if verbose {
        for record in &records {
            eprintln!("{:?}", record);
        }
    }

    let hit_ratio_path = output_dir.join("hit_ratio.svg");
    let aat_path = output_dir.join("aat.svg");
    chart::render_hit_ratio_chart(&records, &hit_ratio_path)?;
    chart::render_aat_chart(&records, &aat_path)?;

    println!(
        "Wrote {} and {}",
        hit_ratio_path.display(),
        aat_path.display()
    );

    Ok(())
}
