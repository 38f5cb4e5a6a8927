use std::path::PathBuf;

use acmg_lite::reader::read_records;
use acmg_lite::rules::{classify, explain_ba1, explain_pm2};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{error, info, Level};
use simple_logger::init_with_level;

#[derive(Debug, Parser)]
#[command(version, about = "Classify VCF variants by ACMG/AMP population-frequency evidence")]
struct Args {
    #[arg(value_name = "PATH", help = "Path to a (optionally gzipped) VCF-like file")]
    input: PathBuf,

    #[arg(
        long = "explain",
        help = "Print the BA1 and PM2 explanations for every variant",
        value_name = "FLAG",
        default_missing_value("true"),
        default_value("true"),
        num_args(0..=1),
        require_equals(true),
        action = ArgAction::Set,
    )]
    explain: bool,

    #[arg(
        long = "log-level",
        help = "Log level (error, warn, info, debug, trace)",
        value_name = "LEVEL",
        default_value_t = Level::Info
    )]
    log_level: Level,
}

fn run(args: &Args) -> Result<()> {
    let records = read_records(&args.input)
        .with_context(|| format!("Failed to classify {}", args.input.display()))?;
    info!(
        "Parsed {} variants from {}",
        records.len(),
        args.input.display()
    );

    for record in &records {
        let classification = classify(record);
        println!("Variant: {}", record);
        println!("  Classification: {}", classification.label());
        println!("  Evidence: {}", classification.evidence_summary());
        if args.explain {
            println!("  BA1 explanation: {}", explain_ba1(record));
            println!("  PM2 explanation: {}", explain_pm2(record));
        }
        println!();
    }
    Ok(())
}

fn main() {
    let start = std::time::Instant::now();
    let args = Args::parse();
    init_with_level(args.log_level).unwrap();

    run(&args).unwrap_or_else(|e| {
        error!("{:#}", e);
        std::process::exit(1);
    });

    info!("Elapsed time: {:?}", start.elapsed());
}
