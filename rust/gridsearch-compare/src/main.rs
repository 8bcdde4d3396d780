use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use gridsearch_compare::{run_comparison, Config};

#[derive(Parser, Debug)]
#[command(name = "gridsearch-compare", version, about = "Compare A*, greedy best-first and beam search on a random grid")]
struct Args {
    /// Grid width in cells
    #[arg(long, value_name = "CELLS")]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(long, value_name = "CELLS")]
    height: Option<usize>,

    /// Fraction of cells to block, in [0, 1)
    #[arg(long = "density", value_name = "FRACTION")]
    obstacle_density: Option<f64>,

    #[arg(long, value_name = "N")]
    beam_width: Option<usize>,

    /// Keep the beam width fixed regardless of obstacle density
    #[arg(long)]
    no_adaptive: bool,

    /// Seed for obstacle placement and beam tie-breaking
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Print the grid layout before the report
    #[arg(long)]
    show_grid: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

impl Args {
    fn apply(&self, cfg: &mut Config) {
        if let Some(v) = self.width { cfg.grid.width = v; }
        if let Some(v) = self.height { cfg.grid.height = v; }
        if let Some(v) = self.obstacle_density { cfg.grid.obstacle_density = v; }
        if let Some(v) = self.beam_width { cfg.beam.beam_width = v; }
        if let Some(v) = self.seed { cfg.grid.seed = Some(v); }
        if self.no_adaptive { cfg.beam.adaptive = false; }
        if self.log_json { cfg.log_json = true; }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut cfg = Config::from_env().context("reading GRIDSEARCH_* environment")?;
    args.apply(&mut cfg);
    init_tracing(cfg.log_json);
    info!(?cfg, core_version = %gridsearch_core::version(), "starting comparison");

    cfg.validate().context("invalid comparison settings")?;
    let grid = cfg.grid.build().context("failed to build grid")?;
    if args.show_grid {
        print!("{grid}");
    }

    let report = run_comparison(&grid, cfg.beam, cfg.grid.seed);
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{report}");
    }
    Ok(())
}
