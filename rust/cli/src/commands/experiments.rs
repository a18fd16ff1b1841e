//! `--run_experiments`: run the Monte Carlo experiments and print the report.

use crate::config::Config;
use crate::error::CliError;
use crate::ui;
use hog_ai::harness::{ExperimentReport, run_experiments};
use hog_engine::dice::DiceBox;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct SeededReport<'a> {
    seed: u64,
    #[serde(flatten)]
    report: &'a ExperimentReport,
}

/// Runs every experiment enabled in `config` with dice seeded from `seed`.
///
/// The report goes to `out` as text, or as pretty JSON when `json` is set.
/// When no experiment is enabled a warning goes to `err` and nothing runs.
pub fn handle_experiments_command(
    config: &Config,
    seed: u64,
    json: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if !config.experiments.any() {
        ui::display_warning(err, "No experiments are enabled in the configuration.")?;
        return Ok(());
    }

    tracing::info!(seed, num_samples = config.num_samples, "running experiments");
    let mut dice = DiceBox::seeded(seed);
    let report = run_experiments(&config.experiment_config(), &mut dice)?;

    if json {
        let seeded = SeededReport {
            seed,
            report: &report,
        };
        let json_str = serde_json::to_string_pretty(&seeded).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
    } else {
        print_report(out, &report, seed)?;
    }
    Ok(())
}

fn print_report(out: &mut dyn Write, report: &ExperimentReport, seed: u64) -> std::io::Result<()> {
    writeln!(out, "Hog Experiments")?;
    writeln!(out, "═══════════════════════════════════════")?;
    writeln!(out, "Samples: {}", report.num_samples)?;
    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Baseline: {}", report.baseline)?;
    writeln!(out)?;

    if let Some(rolls) = report.max_scoring_num_rolls {
        writeln!(
            out,
            "Max scoring num rolls for six-sided dice: {}",
            rolls.six_sided
        )?;
        writeln!(
            out,
            "Max scoring num rolls for four-sided dice: {}",
            rolls.four_sided
        )?;
    }
    for rate in &report.win_rates {
        writeln!(
            out,
            "{} win rate: {:.4} ({})",
            rate.strategy,
            rate.win_rate,
            ui::format_percent(rate.win_rate)
        )?;
    }
    Ok(())
}
