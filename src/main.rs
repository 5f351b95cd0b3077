use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use coupon::{
    random::{parse_hex_seed, seeded_rng},
    simulation::{run_with_progress, Config, DEFAULT_UNIVERSE_SIZE},
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// the number of distinct coupons
    #[arg(short, default_value_t = DEFAULT_UNIVERSE_SIZE)]
    n: usize,

    /// the number of coupons drawn between two completion checks
    #[arg(short, default_value_t = 1)]
    k: usize,

    /// 64 hexadecimal characters, the run is seeded from system entropy when missing
    #[arg(long, value_parser = parse_hex_seed)]
    prng_seed: Option<[u8; 32]>,

    /// give up after that many incomplete batches
    #[arg(long)]
    max_iters: Option<usize>,

    /// show the number of distinct coupons drawn so far
    #[arg(long)]
    progress: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("cannot init logger: {}", e))?;

    let cli = Cli::parse();

    let config = Config {
        n: cli.n,
        batch_size: cli.k,
        max_iters: cli.max_iters,
    };
    let mut rng = seeded_rng(cli.prng_seed);

    let pb = if cli.progress {
        let pb = ProgressBar::new(cli.n as u64);
        pb.set_style(
            ProgressStyle::with_template("{msg}: {bar:40.cyan/blue} {pos:>7}/{len:7}")?
                .progress_chars("##-"),
        );
        pb.set_message("coupons");
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcome = run_with_progress(&config, &mut rng, |coupons| {
        pb.set_position(coupons.nb_seen() as u64)
    })
    .with_context(|| format!("coupon collector run failed (n = {})", cli.n))?;
    pb.finish_and_clear();

    info!(
        "{} draws, expected {:.1} (nlogn = {:.1})",
        outcome.nb_draws,
        outcome.expected_draws(),
        outcome.nlogn()
    );
    println!("num_iters = {}", outcome.num_iters);

    Ok(())
}
