//! u-select command-line runner.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use u_select::model::DesignSpace;
use u_select::{export, Optimizer, OptimizerConfig, Report, Strategy};

#[derive(Parser)]
#[command(name = "u-select")]
#[command(about = "Pick one option per component under mass/cost budgets")]
#[command(version)]
struct Cli {
    /// Design space file (.yaml, .yml or .toml)
    config: PathBuf,

    /// Search strategy: exhaustive or greedy (unknown names use exhaustive)
    #[arg(short, long, default_value = "exhaustive")]
    strategy: String,

    /// Refuse exhaustive search above this many combinations
    #[arg(long)]
    limit: Option<u128>,

    /// Write the selected combination to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

/// Installs the tracing subscriber. `RUST_LOG` overrides the default
/// `info` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let space = DesignSpace::load(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    let mut config = OptimizerConfig::new(Strategy::from_name(&cli.strategy));
    if let Some(limit) = cli.limit {
        config = config.with_combination_limit(limit);
    }

    let outcome = Optimizer::new(config).optimize(&space)?;
    print!("{}", Report::new(&space, &outcome));

    if let Some(path) = cli.csv {
        match outcome.best() {
            Some(best) => {
                export::save_csv(&path, &space, best)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("CSV saved to: {}", path.display());
            }
            None => tracing::warn!("no feasible design; CSV not written"),
        }
    }

    Ok(())
}
