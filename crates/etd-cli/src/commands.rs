use std::fs;

use anyhow::{Context, Result, bail};
use chrono::{TimeZone, Utc};
use comfy_table::Table;

use etd_cli::pipeline;
use etd_core::{AssumeYes, Confirm};
use etd_model::{DoiStrategyKind, RunConfig, RunSummary, YearBounds};

use crate::cli::ConvertArgs;
use crate::confirm::StdinConfirm;
use crate::summary::apply_table_style;

pub fn run_strategies() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Strategy", "Description"]);
    apply_table_style(&mut table);
    for strategy in DoiStrategyKind::ALL {
        table.add_row(vec![strategy.name(), strategy.description()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_convert(args: &ConvertArgs) -> Result<RunSummary> {
    let config = build_config(args)?;

    let mut confirm: Box<dyn Confirm> = if args.assume_yes {
        Box::new(AssumeYes)
    } else {
        Box::new(StdinConfirm)
    };

    let summary = pipeline::run(
        &args.input,
        &args.output,
        &args.report,
        &config,
        confirm.as_mut(),
    )?;

    if let Some(path) = &args.summary_json {
        let json = serde_json::to_string_pretty(&summary).context("serialize summary")?;
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    }

    Ok(summary)
}

fn build_config(args: &ConvertArgs) -> Result<RunConfig> {
    // clap guarantees presence; emptiness still has to be rejected here.
    for (value, flag) in [
        (&args.depositor, "--depositor"),
        (&args.email, "--email"),
        (&args.registrant, "--registrant"),
        (&args.prefix, "--prefix"),
    ] {
        if value.trim().is_empty() {
            bail!("{flag} must not be empty");
        }
    }
    if args.min_year > args.max_year {
        bail!("--min-year must not exceed --max-year");
    }

    let run_at = match args.timestamp {
        None => Utc::now(),
        Some(nanos) => Utc.timestamp_nanos(nanos),
    };

    Ok(RunConfig {
        prefix: args.prefix.clone(),
        depositor_name: args.depositor.clone(),
        depositor_email: args.email.clone(),
        registrant: args.registrant.clone(),
        base_url: args.base_url.clone(),
        institution_name: args.institution.clone(),
        institution_place: args.institution_place.clone(),
        strategy: args.strategy.kind(),
        year_bounds: YearBounds {
            min: args.min_year,
            max: args.max_year,
        },
        start_seq: args.start_seq,
        max_batch_size: args.batch_size,
        run_at,
    })
}
