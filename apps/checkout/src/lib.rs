//! # grocer-checkout: Terminal Register for Grocer POS
//!
//! Everything with a side effect lives here. `grocer-core` decides prices and
//! rules; this crate reads the keyboard, the scale, the clock and the config
//! file, and prints receipts.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Checkout Run                                      │
//! │                                                                         │
//! │  Args ──► init_tracing() ──► CheckoutConfig::load()                     │
//! │                                     │                                   │
//! │                                     ▼                                   │
//! │   stdin ──► CheckoutSession<stdin, stdout, Scale>::run(today)           │
//! │                                     │                                   │
//! │                 ┌───────────────────┴───────────────────┐               │
//! │                 ▼                                       ▼               │
//! │     stdout: items, receipt,                 stdout (--json):            │
//! │     copy, gift receipt                      receipt as JSON             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`args`] - Command line flags
//! - [`config`] - `checkout.toml` and `GROCER_*` overrides
//! - [`session`] - The interactive checkout loop
//! - [`scale`] - Simulated and fixed scales
//! - [`render`] - Menu and item text
//! - [`error`] - Error types

pub mod args;
pub mod config;
pub mod error;
pub mod render;
pub mod scale;
pub mod session;

use std::io::{self, Write};

use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

pub use args::Args;
pub use config::CheckoutConfig;
pub use error::{CheckoutError, CheckoutResult, ConfigError, ConfigResult};
pub use scale::{FixedScale, Scale, SimulatedScale};
pub use session::{CheckoutOutcome, CheckoutSession};

/// Installs the stderr log subscriber. `RUST_LOG` wins over `level` when set.
pub fn init_tracing(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "grocer_checkout={},grocer_core={}",
            level, level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Runs one checkout against the terminal.
pub fn run(args: &Args) -> CheckoutResult<CheckoutOutcome> {
    let config = CheckoutConfig::load(args.config().map(|p| p.to_path_buf()))?;
    debug!(?config, "Configuration resolved");

    let today = args
        .today()
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let stdin = io::stdin();
    let stdout = io::stdout();

    let outcome = match args.weight() {
        Some(weight) => {
            grocer_core::validation::validate_weight(weight)?;
            info!(%weight, "Using fixed scale reading");
            CheckoutSession::new(stdin.lock(), stdout.lock(), FixedScale(weight), config)
                .run(today)?
        }
        None => {
            let scale: SimulatedScale = SimulatedScale::from(&config.scale);
            CheckoutSession::new(stdin.lock(), stdout.lock(), scale, config).run(today)?
        }
    };

    if args.json() {
        let mut out = stdout.lock();
        writeln!(out, "{}", outcome.receipt.to_json()?)?;
    }

    Ok(outcome)
}
