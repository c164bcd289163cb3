//! Approximates pi by finding the root of cos(x) near 1.0 and doubling it.
//!
//! The derivative is left to the forward-difference fallback, as the
//! original demonstration did.

use clap::Parser;
use newtonfind::solver::{RootFinder, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

#[derive(Parser)]
#[command(about = "Approximate pi via the root of cos(x)")]
struct Settings {
    /// Starting point for the Newton iteration
    #[arg(long, default_value_t = 1.0)]
    start: f64,

    /// Convergence tolerance (also the finite-difference step)
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Iteration cap
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Log iteration progress to stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    // the subscriber filters bridged log records on its own max level, so
    // it must be raised together with the log crate's filter
    let (log_level, tracing_level) = if verbose > 1 {
        (
            log::LevelFilter::Trace,
            tracing_subscriber::filter::LevelFilter::TRACE,
        )
    } else {
        (
            log::LevelFilter::Debug,
            tracing_subscriber::filter::LevelFilter::DEBUG,
        )
    };

    tracing_subscriber::fmt::fmt()
        .with_max_level(tracing_level)
        .with_writer(std::io::stderr)
        .init();
    log::set_max_level(log_level);
}

fn main() {
    let settings = Settings::parse();

    if settings.verbose > 0 {
        init_logging(settings.verbose);
    }

    let f = |x: f64| x.cos();

    let finder = match RootFinder::new(
        &f,
        settings.start,
        settings.tolerance,
        settings.max_iterations,
    ) {
        Ok(finder) => finder,
        Err(e) => {
            eprintln!("invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    let root = finder.find_root();
    if root.is_nan() {
        eprintln!(
            "no convergence within {} iterations",
            settings.max_iterations
        );
        std::process::exit(1);
    }

    println!("{}", 2.0 * root);
}
