//! Synthetic trade feed for demos and soak testing.

use chrono::{DateTime, Utc};
use covercheck_core::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Bond universe used when none is configured.
pub const DEFAULT_BONDS: [&str; 5] = ["BOND_A", "BOND_B", "BOND_C", "BOND_D", "BOND_E"];

/// Face amounts a synthetic ticket is drawn from.
pub const QUANTITY_CHOICES: [u64; 4] = [1_000_000, 2_000_000, 5_000_000, 10_000_000];

/// Formats a booking timestamp the way the store writes it.
pub fn format_book_time(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Random cash trade and repo cover generator.
///
/// Ids are sequential: `T000001` for cash, `R000001` for covers. Callers
/// pass the first sequence number, normally existing rows + 1.
#[derive(Debug)]
pub struct FeedGenerator<R: Rng> {
    rng: R,
    bonds: Vec<String>,
}

impl FeedGenerator<StdRng> {
    /// Deterministic generator for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> FeedGenerator<R> {
    /// Wraps an RNG with the default bond universe.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            bonds: DEFAULT_BONDS.iter().map(|b| (*b).to_string()).collect(),
        }
    }

    /// Replaces the bond universe. An empty list keeps the current one.
    #[must_use]
    pub fn with_bonds<I, S>(mut self, bonds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let bonds: Vec<String> = bonds
            .into_iter()
            .map(Into::into)
            .filter(|b| !b.trim().is_empty())
            .collect();
        if !bonds.is_empty() {
            self.bonds = bonds;
        }
        self
    }

    /// Active bond universe.
    pub fn bonds(&self) -> &[String] {
        &self.bonds
    }

    fn pick_bond(&mut self) -> String {
        self.bonds
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| DEFAULT_BONDS[0].to_string())
    }

    fn pick_quantity(&mut self) -> u64 {
        QUANTITY_CHOICES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(QUANTITY_CHOICES[0])
    }

    /// Generates `count` cash trades settling on `settle`.
    pub fn cash_trades(
        &mut self,
        count: usize,
        settle: Date,
        first_seq: usize,
        book_time: DateTime<Utc>,
    ) -> Vec<CashRecord> {
        let book_time = format_book_time(book_time);
        (0..count)
            .map(|i| {
                let side = if self.rng.gen_bool(0.5) {
                    Side::Buy
                } else {
                    Side::Sell
                };
                CashRecord {
                    trade_id: format!("T{:06}", first_seq + i),
                    book_time: book_time.clone(),
                    settle_date: settle.to_string(),
                    bond: self.pick_bond(),
                    side: side.code().to_string(),
                    qty: self.pick_quantity().to_string(),
                }
            })
            .collect()
    }

    /// Generates `count` open repo covers settling on `settle`.
    pub fn repo_covers(
        &mut self,
        count: usize,
        settle: Date,
        first_seq: usize,
        book_time: DateTime<Utc>,
    ) -> Vec<CoverRecord> {
        let book_time = format_book_time(book_time);
        (0..count)
            .map(|i| CoverRecord {
                repo_id: format!("R{:06}", first_seq + i),
                book_time: book_time.clone(),
                settle_date: settle.to_string(),
                bond: self.pick_bond(),
                cover_qty: self.pick_quantity().to_string(),
                status: CoverStatus::Open.code().to_string(),
            })
            .collect()
    }
}
