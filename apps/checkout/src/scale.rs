//! # Scale
//!
//! Where produce weights come from. There is no real scale attached, so the
//! default reading is a random whole number of pounds.

use grocer_core::Weight;
use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::debug;

use crate::config::ScaleSettings;

/// Anything that can produce a weight reading at the register.
pub trait Scale {
    fn weigh(&mut self) -> Weight;
}

/// A scale that reads a random whole number of pounds in
/// `[min_lbs, max_lbs]`.
#[derive(Debug, Clone)]
pub struct SimulatedScale<R = ThreadRng> {
    min_lbs: u32,
    max_lbs: u32,
    rng: R,
}

impl SimulatedScale {
    /// Bounds are swapped if given in the wrong order.
    pub fn new(min_lbs: u32, max_lbs: u32) -> Self {
        SimulatedScale::with_rng(min_lbs, max_lbs, rand::thread_rng())
    }
}

impl<R: Rng> SimulatedScale<R> {
    /// Same as [`SimulatedScale::new`] with a caller-supplied generator.
    pub fn with_rng(min_lbs: u32, max_lbs: u32, rng: R) -> Self {
        SimulatedScale {
            min_lbs: min_lbs.min(max_lbs),
            max_lbs: min_lbs.max(max_lbs),
            rng,
        }
    }
}

impl From<&ScaleSettings> for SimulatedScale {
    fn from(settings: &ScaleSettings) -> Self {
        SimulatedScale::new(settings.min_lbs, settings.max_lbs)
    }
}

impl<R: Rng> Scale for SimulatedScale<R> {
    fn weigh(&mut self) -> Weight {
        let pounds = self.rng.gen_range(self.min_lbs..=self.max_lbs);
        let weight = Weight::from_pounds(i64::from(pounds));
        debug!(%weight, "Simulated scale reading");
        weight
    }
}

/// A scale that always reads the same weight (`--weight`, tests).
#[derive(Debug, Clone, Copy)]
pub struct FixedScale(pub Weight);

impl Scale for FixedScale {
    fn weigh(&mut self) -> Weight {
        self.0
    }
}
