//! `por`: drives the five-stage PoR pipeline (KeyGen, Sign, Challenge,
//! Prove, Verify) over one file across a sweep of block sizes.
//!
//! Run with: `por <file> <s_min> <s_max> <interval> <c>`

use clap::{ArgAction, Parser};
use por_crypto::api::PorSystem;
use por_crypto::config::DEFAULT_WORKING_DIR;
use por_crypto::metrics::PipelineMetrics;
use rand::rngs::OsRng;
use std::time::Instant;
use tracing::{error, info, info_span};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for the `por` pipeline runner.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path of the file to run the pipeline against.
    file: std::path::PathBuf,

    /// Smallest block size s to try.
    s_min: usize,

    /// Largest block size s to try (inclusive).
    s_max: usize,

    /// Step between successive s values.
    interval: usize,

    /// Number of challenges c to draw per iteration.
    c: usize,

    /// Directory to write the per-run record files (sk.bin, pk.bin, ...).
    #[arg(long, default_value = DEFAULT_WORKING_DIR)]
    working_dir: std::path::PathBuf,

    /// Increase output verbosity (-v for DEBUG, -vv for TRACE).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.s_min == 0 || cli.s_max < cli.s_min || cli.interval == 0 {
        error!("s_min must be >= 1, s_max must be >= s_min, and interval must be >= 1");
        std::process::exit(1);
    }
    if cli.c == 0 {
        info!("c = 0: every iteration will trivially verify (empty challenge set)");
    }

    info!("");
    info!("por: compact Proof of Retrievability pipeline");
    info!("file = {}", cli.file.display());
    info!(
        "s in [{}, {}] step {}, c = {}",
        cli.s_min, cli.s_max, cli.interval, cli.c
    );
    info!("");

    let mut pass_count = 0usize;
    let mut total = 0usize;
    let mut rng = OsRng;

    let mut s = cli.s_min;
    while s <= cli.s_max {
        total += 1;
        let span = info_span!("iteration", s);
        let _guard = span.enter();

        match run_once(&cli.file, s, cli.c, &cli.working_dir, &mut rng) {
            Ok((true, metrics)) => {
                info!("s = {:>6} -> PASS", s);
                info!("\n{}", metrics.format_table());
                pass_count += 1;
            }
            Ok((false, metrics)) => {
                info!("s = {:>6} -> FAIL (proof rejected)", s);
                info!("\n{}", metrics.format_table());
            }
            Err(e) => {
                error!("s = {:>6} -> ERROR: {}", s, e);
                std::process::exit(1);
            }
        }

        s += cli.interval;
    }

    info!("");
    info!("{}/{} iterations passed", pass_count, total);

    if pass_count != total {
        std::process::exit(1);
    }
}

/// Runs KeyGen, Sign, Challenge, Prove, and Verify once for block size
/// `s`, returning the Verifier's boolean result alongside the per-stage
/// timing and proof-size summary.
fn run_once(
    file: &std::path::Path,
    s: usize,
    c: usize,
    working_dir: &std::path::Path,
    rng: &mut OsRng,
) -> por_crypto::Result<(bool, PipelineMetrics)> {
    let run_dir = working_dir.join(format!("s-{}", s));
    let system = PorSystem::new(&run_dir, s);

    let t = Instant::now();
    let km = system.setup(rng)?;
    system.save_key_material(&km)?;
    let setup_duration = t.elapsed();

    let t = Instant::now();
    let tags = system.sign(file, &km)?;
    system.save_tags(&tags)?;
    let sign_duration = t.elapsed();

    let t = Instant::now();
    let n = tags.len() as u64;
    let q = system.challenge(n, c, rng)?;
    system.save_challenges(&q)?;
    let challenge_duration = t.elapsed();

    let t = Instant::now();
    let proof = system.prove(&q, &tags, file)?;
    system.save_proof(&proof)?;
    let prove_duration = t.elapsed();

    let t = Instant::now();
    let ok = system.verify(&km.pk, &km.name, &km.u, &q, &proof)?;
    let verify_duration = t.elapsed();

    let metrics = PipelineMetrics {
        setup_duration,
        sign_duration,
        challenge_duration,
        prove_duration,
        verify_duration,
        proof_size_bytes: por_crypto::metrics::proof_size_bytes(&proof),
    };

    Ok((ok, metrics))
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "info,por_crypto=info",
        1 => "debug,por_crypto=debug",
        _ => "por_crypto=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    use tracing_tree::HierarchicalLayer;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            HierarchicalLayer::new(2)
                .with_targets(false)
                .with_bracketed_fields(true),
        )
        .init();
}
