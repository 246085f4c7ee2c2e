//! # Checkout Session
//!
//! Drives one customer through the register: a fixed number of menu prompts,
//! then the receipt, a copy of it, and a gift copy.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  repeat line_items times:                                               │
//! │                                                                         │
//! │    menu ──► code ──► resolve()                                          │
//! │                         │                                               │
//! │      ┌──────────────────┼────────────────┬───────────────┐              │
//! │      ▼                  ▼                ▼               ▼              │
//! │   Produce            Alcohol          Frozen       Cancel / Unknown     │
//! │   "Weigh Item?"      birth date       expiry          (skip line)       │
//! │   scale.weigh()      verify_id()      warning                           │
//! │      │                  │                │                              │
//! │      └──────────────────┴──── item ──────┘                              │
//! │                               │                                         │
//! │                               ▼                                         │
//! │                         item block printed                              │
//! │                                                                         │
//! │  Receipt::new(items) ──► compute_total ──► print                        │
//! │          │                                                              │
//! │          ├──► clone()            ──► print (same total)                 │
//! │          └──► gift_copy(..)      ──► print (placeholder)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! End of input stops prompting and checks out whatever was already rung up.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use grocer_core::catalog::{resolve, MenuChoice, Selection};
use grocer_core::{Alcohol, Item, Receipt};
use tracing::{debug, info, warn};

use crate::config::CheckoutConfig;
use crate::error::CheckoutResult;
use crate::render;
use crate::scale::Scale;

/// Printed when an alcohol sale is refused.
pub const UNDERAGE_NOTICE: &str = "Not of age. Purchase prohibited.";

/// Printed when a frozen item is past its date.
pub const EXPIRED_NOTICE: &str = "Item has expired, please replace.";

/// The receipts a finished session produced.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutOutcome {
    pub receipt: Receipt,
    pub gift: Receipt,
}

/// One run of the register over an input, an output and a scale.
pub struct CheckoutSession<R, W, S> {
    input: R,
    output: W,
    scale: S,
    config: CheckoutConfig,
}

impl<R: BufRead, W: Write, S: Scale> CheckoutSession<R, W, S> {
    pub fn new(input: R, output: W, scale: S, config: CheckoutConfig) -> Self {
        CheckoutSession {
            input,
            output,
            scale,
            config,
        }
    }

    /// Runs the whole session. `today` drives ID and expiry checks.
    pub fn run(&mut self, today: NaiveDate) -> CheckoutResult<CheckoutOutcome> {
        info!(
            store = %self.config.store.name,
            line_items = self.config.checkout.line_items,
            %today,
            "Checkout session started"
        );
        writeln!(self.output, "{}", self.config.store.name)?;

        let mut items = Vec::with_capacity(self.config.checkout.line_items);
        for line in 1..=self.config.checkout.line_items {
            match self.ring_up(today)? {
                Prompt::Rung(item) => {
                    writeln!(self.output, "\n{}\n", render::item_block(&item))?;
                    info!(
                        line,
                        name = %item.name(),
                        total = %item.total_price(),
                        "Item added"
                    );
                    items.push(item);
                }
                Prompt::Skipped => debug!(line, "Line left empty"),
                Prompt::EndOfInput => {
                    info!(line, "Input closed, checking out early");
                    break;
                }
            }
        }

        let mut receipt = Receipt::new(items);
        let total = receipt.compute_total();
        writeln!(self.output, "{}", receipt)?;

        let copy = receipt.clone();
        writeln!(self.output, "{}", copy)?;

        let gift = receipt.gift_copy(self.config.checkout.gift_placeholder.as_str());
        writeln!(self.output, "{}", gift)?;
        self.output.flush()?;

        info!(receipt_id = %receipt.id(), items = receipt.len(), %total, "Checkout complete");
        Ok(CheckoutOutcome { receipt, gift })
    }

    /// One menu prompt, start to finish.
    fn ring_up(&mut self, today: NaiveDate) -> CheckoutResult<Prompt> {
        write!(self.output, "{}", render::menu())?;
        let Some(input) = self.read_line()? else {
            return Ok(Prompt::EndOfInput);
        };

        let entry = match resolve(&input) {
            MenuChoice::Cancel => {
                writeln!(self.output, "Cancelled.")?;
                return Ok(Prompt::Skipped);
            }
            MenuChoice::Unknown(raw) => {
                warn!(code = raw, "Unknown menu code");
                writeln!(self.output, "Unknown item code: {}", raw)?;
                return Ok(Prompt::Skipped);
            }
            MenuChoice::Entry(entry) => entry,
        };

        let weight = if entry.requires_weight() {
            write!(self.output, "Weigh Item? (y/n)")?;
            match self.read_line()? {
                None => return Ok(Prompt::EndOfInput),
                Some(answer) if answer == "y" => Some(self.scale.weigh()),
                Some(_) => None,
            }
        } else {
            None
        };

        let mut item = match entry.select(weight)? {
            Selection::Item(item) => item,
            Selection::NotWeighed { code } => {
                debug!(code, "Produce not weighed");
                writeln!(self.output, "Item not weighed, nothing added.")?;
                return Ok(Prompt::Skipped);
            }
            Selection::Cancelled | Selection::Unknown(_) => return Ok(Prompt::Skipped),
        };

        if let Item::Alcohol(alcohol) = &mut item {
            if self.config.checkout.verify_age && !self.check_id(entry.code, alcohol, today)? {
                return Ok(Prompt::Skipped);
            }
        }

        if let Item::Frozen(frozen) = &item {
            if frozen.is_expired(today) {
                warn!(
                    name = %frozen.name(),
                    expired = %frozen.expiration_date(),
                    "Expired item scanned"
                );
                writeln!(self.output, "{}", EXPIRED_NOTICE)?;
            }
        }

        Ok(Prompt::Rung(item))
    }

    /// Asks for the customer's birth date. Returns whether the sale may go on.
    fn check_id(
        &mut self,
        code: u8,
        alcohol: &mut Alcohol,
        today: NaiveDate,
    ) -> CheckoutResult<bool> {
        write!(self.output, "Customer birth date (YYYY-MM-DD): ")?;
        let Some(raw) = self.read_line()? else {
            return Ok(false);
        };

        let birth_date = match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                warn!(code, input = %raw, "Unreadable birth date");
                writeln!(self.output, "Invalid birth date. {}\n", UNDERAGE_NOTICE)?;
                return Ok(false);
            }
        };

        match alcohol.verify_id(birth_date, today) {
            Ok(outcome) if outcome.is_of_age() => {
                debug!(code, age = outcome.age(), "ID verified");
                Ok(true)
            }
            Ok(outcome) => {
                warn!(code, age = outcome.age(), "Underage purchase blocked");
                writeln!(self.output, "{}\n", UNDERAGE_NOTICE)?;
                Ok(false)
            }
            Err(err) => {
                warn!(code, error = %err, "Birth date rejected");
                writeln!(self.output, "Invalid birth date. {}\n", UNDERAGE_NOTICE)?;
                Ok(false)
            }
        }
    }

    /// Next trimmed line, or `None` once input is exhausted.
    fn read_line(&mut self) -> CheckoutResult<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// What one menu prompt came to.
enum Prompt {
    Rung(Item),
    Skipped,
    EndOfInput,
}

// =============================================================================
// Unit Tests
// =============================================================================
