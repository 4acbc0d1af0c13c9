use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use regex_validator::findings::{Kind, LineChecker};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tracing::{debug, info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about = "Validate a file of values line by line with JSON output")]
struct Args {
    /// File with one value per line
    #[arg(index = 1)]
    file_path: PathBuf,

    /// Process only first N lines
    #[arg(short, long, default_value = "1000")]
    limit: usize,

    /// Check only this kind instead of every known pattern
    #[arg(short, long, value_enum)]
    kind: Option<Kind>,

    /// Output JSON file path
    #[arg(short, long, default_value = "findings.json")]
    output: PathBuf,

    /// Show a progress bar while reading
    #[arg(short, long)]
    progress: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    println!("Processing file: {}", args.file_path.display());
    let file = File::open(&args.file_path)?;
    let reader = BufReader::new(file);

    let progress_bar = if args.progress {
        let pb = ProgressBar::new(args.limit as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let checker = LineChecker::new();
    let mut findings = Vec::new();
    let mut line_count = 0;

    for line_result in reader.lines() {
        line_count += 1;
        if line_count > args.limit {
            line_count -= 1;
            break;
        }
        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }

        let line = line_result?;
        let value = line.trim();
        if value.is_empty() {
            continue;
        }

        let finding = checker.check(line_count, value, args.kind);
        debug!(line = line_count, value, kinds = ?finding.kinds, "checked");
        findings.push(finding);
    }

    if let Some(pb) = progress_bar {
        pb.finish_and_clear();
    }

    let matched = findings.iter().filter(|f| !f.kinds.is_empty()).count();
    info!(lines = line_count, matched, "finished");
    println!("Matched {} of {} values in {} lines", matched, findings.len(), line_count);

    let json_output = serde_json::to_string_pretty(&findings)?;
    std::fs::write(&args.output, json_output)?;
    println!("Results written to {}", args.output.display());

    Ok(())
}
