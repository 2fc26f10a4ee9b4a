// file: src/cli/commands.rs
// version: 1.0.0
// guid: 013bd09e-1f8c-4dbe-b91c-0d1b00b95072

//! Command implementations for the CLI

use crate::{
    certify::certify,
    cli::args::Cli,
    config::{loader::ConfigLoader, RunConfig},
    error::WeaveError,
    logging::logger::with_operation_span,
    plot,
    store::{SolutionRecord, SolutionStore},
    weaver::weave,
    Result,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;
use tokio::task;
use tracing::{debug, warn};

/// Solve every instance in the requested range, certifying, exporting
/// and plotting as configured
pub async fn weave_range_command(cli: Cli) -> Result<()> {
    let start = cli.start;
    if start < 1 {
        return Err(WeaveError::invalid_argument("--start must be at least 1"));
    }
    let end = cli.end.unwrap_or(start);
    if end < start {
        return Err(WeaveError::validation(format!(
            "--end ({end}) must not be smaller than --start ({start})"
        )));
    }
    let mut plot_n = cli.plot.unwrap_or(end);
    if plot_n > end {
        warn!(
            "--plot {} is beyond the solved range, plotting {} instead",
            plot_n, end
        );
        plot_n = end;
    }
    if plot_n < start {
        warn!("--plot {} is below the solved range, nothing will be plotted", plot_n);
    }

    let config = resolve_config(&cli)?;
    let store = match &config.output_dir {
        Some(dir) => {
            let store = SolutionStore::new(dir);
            store.initialize().await?;
            Some(store)
        }
        None => None,
    };

    let bar = (config.progress && end > start).then(|| {
        let bar = ProgressBar::new(u64::from(end - start + 1));
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        bar
    });

    for n in start..=end {
        let begin = Instant::now();
        let solution = task::spawn_blocking(move || with_operation_span("weave", || weave(n)))
            .await
            .map_err(|e| WeaveError::other(format!("solver task failed: {e}")))??;
        let elapsed = begin.elapsed().as_secs_f64();
        debug!("Solved n={} in {:.6} secs", n, elapsed);

        let verdict = if config.certify {
            certify(&solution)?;
            "solved and certified"
        } else {
            "solved"
        };
        let line = format!(
            "Order {} {}: solving took {} secs.",
            solution.len(),
            verdict,
            elapsed
        );
        match &bar {
            Some(bar) => bar.println(&line),
            None => println!("{line}"),
        }

        if let Some(store) = &store {
            let record = SolutionRecord::new(n, solution.clone(), elapsed)?;
            store.save(&record).await?;
        }

        if n == plot_n {
            println!("Plotting n={n} to web.");
            let dir = config
                .plot_dir
                .clone()
                .unwrap_or_else(plot::default_plot_dir);
            plot::write_plot(&solution, &dir).await?;
        }

        if let Some(bar) = &bar {
            bar.inc(1);
        }
    }

    if let Some(bar) = &bar {
        bar.finish_and_clear();
    }
    Ok(())
}

/// Merge the configuration file with command line overrides
fn resolve_config(cli: &Cli) -> Result<RunConfig> {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::new().load_run_config(path)?,
        None => RunConfig::default(),
    };
    if cli.output.is_some() {
        config.output_dir = cli.output.clone();
    }
    if cli.plot_dir.is_some() {
        config.plot_dir = cli.plot_dir.clone();
    }
    if cli.no_certify {
        config.certify = false;
    }
    if cli.no_progress {
        config.progress = false;
    }
    config.validate()?;
    Ok(config)
}
