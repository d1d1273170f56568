//! Obtain a fixed size uniform random sample from a potentially infinite
//! stream of values.
//!
//! ```console
//! $ seq 0 100000000 | rsampling
//! ```

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use rsampling::{write_annotated, write_plain, TrackedReservoir};

#[derive(Parser)]
#[command(
    name = "rsampling",
    version,
    about = "Uniform random sample from a stream of unknown length"
)]
struct Args {
    /// Number of samples to obtain.
    #[arg(short = 'n', long = "samples", default_value_t = 16)]
    samples: usize,

    /// Random seed; defaults to the current time's nanoseconds, which
    /// sacrifices reproducibility for ease of use.
    #[arg(short = 'r', long = "seed")]
    seed: Option<u64>,

    /// Show the final buffer with slot indexes, highlighting the slot
    /// written last.
    #[arg(long)]
    annotate: bool,
}

fn seed_from_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(seed_from_time);
    debug!(samples = args.samples, seed, annotate = args.annotate, "configured");

    let mut reservoir: TrackedReservoir<String> =
        TrackedReservoir::with_seed(args.samples, seed).context("invalid sample size")?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line
            .with_context(|| format!("reading stdin at line {}", reservoir.seen() + 1))?;
        reservoir.add(line.trim().to_owned());
    }
    debug!(
        seen = reservoir.seen(),
        admission_probability = reservoir.admission_probability(),
        "stream exhausted"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.annotate {
        write_annotated(&mut out, reservoir.sample(), reservoir.last_written())?;
    } else {
        write_plain(&mut out, reservoir.sample())?;
    }
    out.flush()?;
    Ok(())
}
