use std::fs;

use anyhow::{Context, Result};
use clap::Parser;

use tabula::core::Dataset;
use tabula::evaluation::PerformanceReport;
use tabula::io::TrainTestSets;
use tabula::ui::cli::args::{Cli, Command, RunArgs, ShowArgs};
use tabula::ui::types::build::{build_classifier, build_evaluator};
use tabula::ui::types::choices::OutputFormat;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const FG_CYAN: &str = "\x1b[36m";
const FG_GREY: &str = "\x1b[90m";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tabula=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => run(args),
        Command::Show(args) => show(args),
    }
}

fn run(args: RunArgs) -> Result<()> {
    let config = args.resolve_config().context("invalid evaluation settings")?;

    let sets = TrainTestSets::from_paths(&args.train, args.test.as_ref())
        .context("failed to load datasets")?;
    let mut classifier =
        build_classifier(&config.classifier).context("failed to build classifier")?;
    let evaluator = build_evaluator(&config);

    let performance = evaluator
        .evaluate(classifier.as_mut(), &sets)
        .context("evaluation failed")?;
    let report = PerformanceReport::new(
        sets.training_set().name(),
        classifier.name(),
        &performance,
    );

    match args.format {
        OutputFormat::Text => {
            println!(
                "{BOLD}{FG_CYAN}▶ {} on {}{RESET}  {DIM}{}{RESET}",
                report.classifier, report.dataset, report.timestamp
            );
            println!(
                "{FG_GREY}────────────────────────────────────────────────────────────────────────{RESET}"
            );
            println!("{performance}");
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if let Some(path) = args.dump_file
        && !path.as_os_str().is_empty()
    {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(&path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
    }

    Ok(())
}

fn show(args: ShowArgs) -> Result<()> {
    let dataset = Dataset::load(&args.path)
        .with_context(|| format!("failed to load {}", args.path.display()))?;
    print!("{dataset}");
    Ok(())
}
