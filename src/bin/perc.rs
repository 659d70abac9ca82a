use std::sync::atomic::AtomicBool;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use log::debug;

use percolate::config::SimConfig;
use percolate::io;
use percolate::options::{Mode, Options};
use percolate::render;
use percolate::sim::driver::{RunConfig, run_until_percolation};
use percolate::sim::stats::{StatsConfig, estimate_threshold};

fn main() -> Result<()> {
    if std::env::var("PERC_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("PERC_LOG")
            .write_style("PERC_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = Options::parse_from_args(&args).map_err(|err| anyhow!(err.to_string()))?;
    debug!("perc options: {:?}", options);

    let config = SimConfig::load_from_file(&options.config)?;

    // CLI flags override the config file, which overrides built-in defaults.
    let size = options.size.unwrap_or(config.size);
    let trials = options.trials.unwrap_or(config.trials);
    let delay_ms = options.delay_ms.unwrap_or(config.delay_ms);
    let seed = options.seed.or(config.seed);

    match options.mode {
        Mode::Run => run_animated(size, seed, delay_ms),
        Mode::Stats => run_stats(size, trials, seed, &options.output),
    }
}

fn run_animated(size: usize, seed: Option<u64>, delay_ms: u64) -> Result<()> {
    let run = RunConfig {
        size,
        seed,
        site_limit: None,
    };
    let cancel = AtomicBool::new(false);
    let delay = Duration::from_millis(delay_ms);

    let summary = run_until_percolation(&run, &cancel, |snapshot| {
        println!("{}", render::render(snapshot));
        println!("{}", render::status_line(snapshot));
        println!();
        // Pacing lives here, not in the driver.
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    })
    .context("simulation run failed")?;

    println!(
        "opened {} of {} sites ({:.1}% vacancy), {}",
        summary.opened,
        size * size,
        summary.vacancy() * 100.0,
        if summary.percolated {
            "percolates"
        } else {
            "does not percolate"
        }
    );
    Ok(())
}

fn run_stats(size: usize, trials: usize, seed: Option<u64>, output: &str) -> Result<()> {
    let config = StatsConfig { size, trials, seed };
    let report = estimate_threshold(&config).context("threshold estimation failed")?;
    println!("{report}");
    io::write_json(output, &report).with_context(|| format!("Failed to write report to {output}"))?;
    Ok(())
}
