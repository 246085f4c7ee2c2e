//! Command line arguments for `grocer-checkout`.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::Parser;
use grocer_core::Weight;
use tracing_subscriber::filter::LevelFilter;

/// Ring up a customer at a grocery register.
///
/// Reads menu codes from stdin and prints each item, the receipt, a copy and
/// a gift receipt to stdout. Logs go to stderr.
#[derive(Debug, Clone, Parser)]
#[command(name = "grocer-checkout", version, about, long_about = None)]
pub struct Args {
    /// Path to checkout.toml. Defaults to the platform config directory.
    #[arg(long, env = "GROCER_CONFIG")]
    config: Option<PathBuf>,

    /// Date to use for ID and expiry checks, as YYYY-MM-DD. Defaults to today.
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Use a fixed scale reading in pounds (e.g. 2.5) instead of a random one.
    #[arg(long)]
    weight: Option<Weight>,

    /// Print the final receipt as JSON after the session.
    #[arg(long)]
    json: bool,

    /// Log level when RUST_LOG is not set.
    #[arg(long, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,
}

impl Args {
    pub fn config(&self) -> Option<&Path> {
        self.config.as_deref()
    }

    pub fn today(&self) -> Option<NaiveDate> {
        self.today
    }

    pub fn weight(&self) -> Option<Weight> {
        self.weight
    }

    pub fn json(&self) -> bool {
        self.json
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["grocer-checkout"]).unwrap();
        assert!(args.today().is_none());
        assert!(args.weight().is_none());
        assert!(!args.json());
        assert_eq!(args.log_level(), LevelFilter::WARN);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "grocer-checkout",
            "--config",
            "/tmp/checkout.toml",
            "--today",
            "2020-08-15",
            "--weight",
            "2.5",
            "--json",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.config(), Some(Path::new("/tmp/checkout.toml")));
        assert_eq!(args.today(), NaiveDate::from_ymd_opt(2020, 8, 15));
        assert_eq!(args.weight(), Some(Weight::from_hundredths(250)));
        assert!(args.json());
        assert_eq!(args.log_level(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_bad_values_are_rejected() {
        assert!(Args::try_parse_from(["grocer-checkout", "--today", "15/08/2020"]).is_err());
        assert!(Args::try_parse_from(["grocer-checkout", "--weight", "heavy"]).is_err());
    }
}
