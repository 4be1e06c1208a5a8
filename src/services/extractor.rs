//! Synthetic document extraction
//!
//! Stands in for OCR: the document name decides what kind of data comes
//! back and the figures are drawn from a seedable random source.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Category, ExtractedData, Money, UtilityKind};

const STATEMENT_CATEGORIES: [Category; 5] = [
    Category::Salary,
    Category::Food,
    Category::Transport,
    Category::Bills,
    Category::Entertainment,
];

const BILL_VENDOR: &str = "Service Provider";

const DUE_WINDOW_MS: i64 = 30 * 24 * 60 * 60 * 1000;

pub struct Extractor {
    rng: Mutex<StdRng>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    /// Extractor seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Deterministic extractor for tests and reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Produce extracted data for a document uploaded at `uploaded_at`.
    ///
    /// Names mentioning a bank or statement yield a statement summary, names
    /// mentioning a bill or invoice yield a bill, anything else yields
    /// nothing.
    pub fn extract(&self, name: &str, uploaded_at: DateTime<Utc>) -> Option<ExtractedData> {
        let name = name.to_lowercase();
        let mut rng = match self.rng.lock() {
            Ok(rng) => rng,
            Err(poisoned) => poisoned.into_inner(),
        };

        if name.contains("bank") || name.contains("statement") {
            Some(ExtractedData::Statement {
                transactions: rng.random_range(20..70),
                total_income: Money::from_rupees(rng.random_range(40_000..60_000)),
                total_expenses: Money::from_rupees(rng.random_range(25_000..40_000)),
                categories: STATEMENT_CATEGORIES.to_vec(),
            })
        } else if name.contains("bill") || name.contains("invoice") {
            let amount = Money::from_rupees(rng.random_range(1_000..6_000));
            let due_in = Duration::milliseconds(rng.random_range(0..DUE_WINDOW_MS));
            let utilities = UtilityKind::all();
            let category = utilities[rng.random_range(0..utilities.len())];
            Some(ExtractedData::Bill {
                amount,
                due_date: (uploaded_at + due_in).date_naive(),
                category,
                vendor: BILL_VENDOR.to_string(),
            })
        } else {
            None
        }
    }
}
