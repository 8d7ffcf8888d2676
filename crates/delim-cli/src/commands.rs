use anyhow::{Context, Result};
use tracing::debug;

use delim_cli::pipeline::{self, CleanConfig, IdentifyConfig};

use crate::cli::{CleanArgs, IdentifyArgs};
use crate::summary::{print_clean_summary, print_identify_report, print_sample_rows};

pub fn run_identify(args: &IdentifyArgs) -> Result<()> {
    let config = IdentifyConfig {
        input: args.input_file.clone(),
        sample_lines: args.sample_lines,
        details: args.details,
    };
    let report = pipeline::run_identify(&config)?;

    if args.name_only {
        println!("{}", report.format);
    } else if args.json {
        let json = serde_json::to_string_pretty(&report).context("serialize identify report")?;
        println!("{json}");
    } else {
        print_identify_report(&report, args.details);
    }
    Ok(())
}

pub fn run_clean(args: &CleanArgs) -> Result<()> {
    let config = clean_config(args);
    debug!(?config, "clean configuration");
    let outcome = pipeline::run_clean(&config)?;

    if args.silent {
        return Ok(());
    }

    let resolved = &outcome.delimiter;
    match resolved.confidence() {
        Some(confidence) => println!(
            "Detected {} format (delimiter {}, confidence {:.1}%)",
            resolved.format_name(),
            resolved.delimiter.escaped(),
            confidence * 100.0
        ),
        None => println!(
            "Using {} format (delimiter {})",
            resolved.format_name(),
            resolved.delimiter.escaped()
        ),
    }
    println!(
        "Loaded {} rows with {} columns",
        outcome.table.row_count(),
        outcome.table.column_count()
    );
    println!();
    print_sample_rows(&outcome.table, args.sample_rows);
    print_clean_summary(&outcome);
    Ok(())
}

fn clean_config(args: &CleanArgs) -> CleanConfig {
    CleanConfig {
        input: args.input_file.clone(),
        output_csv: (!args.no_csv).then(|| args.output_csv.clone()),
        output_sql: (!args.no_sql).then(|| args.output_sql.clone()),
        table_name: args.table_name.clone(),
        formats: args.format_flags(),
        custom_delimiter: args.delimiter.clone(),
        detection: args.detection.into(),
        sample_lines: args.sample_lines,
    }
}
