//! Progressive income tax
//!
//! Tax is computed bracket by bracket: every bracket below the taxable income
//! contributes `rate * min(income above floor, bracket width)`. A 4% cess is
//! then charged on the tax itself.

use serde::Serialize;

use crate::models::{BandTax, Money, TaxInput, TaxRegime, TaxResult};

/// Cess charged on top of income tax, in percent
pub const CESS_PERCENT: i64 = 4;

/// One marginal tax bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    pub floor: Money,
    /// `None` for the open-ended top bracket
    pub ceiling: Option<Money>,
    pub rate_percent: i64,
}

const fn bracket(floor: i64, ceiling: Option<i64>, rate_percent: i64) -> Bracket {
    Bracket {
        floor: Money::from_rupees(floor),
        ceiling: match ceiling {
            Some(c) => Some(Money::from_rupees(c)),
            None => None,
        },
        rate_percent,
    }
}

const NEW_REGIME_BRACKETS: [Bracket; 6] = [
    bracket(0, Some(300_000), 0),
    bracket(300_000, Some(600_000), 5),
    bracket(600_000, Some(900_000), 10),
    bracket(900_000, Some(1_200_000), 15),
    bracket(1_200_000, Some(1_500_000), 20),
    bracket(1_500_000, None, 30),
];

const OLD_REGIME_BRACKETS: [Bracket; 4] = [
    bracket(0, Some(250_000), 0),
    bracket(250_000, Some(500_000), 5),
    bracket(500_000, Some(1_000_000), 20),
    bracket(1_000_000, None, 30),
];

/// The bracket table of a regime, lowest bracket first
pub fn brackets(regime: TaxRegime) -> &'static [Bracket] {
    match regime {
        TaxRegime::New => &NEW_REGIME_BRACKETS,
        TaxRegime::Old => &OLD_REGIME_BRACKETS,
    }
}

/// Tax owed on `taxable_income` under `regime`, with the per-bracket split
///
/// Only brackets that part of the income falls into are listed.
pub fn bracket_tax(taxable_income: Money, regime: TaxRegime) -> (Money, Vec<BandTax>) {
    let mut bands = Vec::new();

    for b in brackets(regime) {
        if taxable_income <= b.floor {
            break;
        }
        let above_floor = taxable_income - b.floor;
        let taxed_amount = match b.ceiling {
            Some(ceiling) => above_floor.min(ceiling - b.floor),
            None => above_floor,
        };
        bands.push(BandTax {
            floor: b.floor,
            ceiling: b.ceiling,
            rate_percent: b.rate_percent,
            taxed_amount,
            tax: taxed_amount.percent(b.rate_percent),
        });
    }

    let total = bands.iter().map(|b| b.tax).sum();
    (total, bands)
}

/// Compute the full tax breakdown for an input. Never fails.
pub fn compute_tax(input: &TaxInput) -> TaxResult {
    let gross_income = input.annual_income.non_negative();

    let (total_deductions, taxable_income) = match input.regime {
        TaxRegime::Old => {
            let deductions = input.capped_deductions();
            (deductions, (gross_income - deductions).non_negative())
        }
        TaxRegime::New => (Money::zero(), gross_income),
    };

    let (income_tax, bands) = bracket_tax(taxable_income, input.regime);
    let cess = income_tax.percent(CESS_PERCENT);
    let total_tax = income_tax + cess;

    let effective_rate = if gross_income.is_positive() {
        total_tax.as_f64() / gross_income.as_f64() * 100.0
    } else {
        0.0
    };

    tracing::debug!(
        regime = %input.regime,
        taxable = %taxable_income,
        total = %total_tax,
        "Computed income tax"
    );

    TaxResult {
        regime: input.regime,
        gross_income,
        total_deductions,
        taxable_income,
        income_tax,
        cess,
        total_tax,
        net_income: gross_income - total_tax,
        effective_rate,
        bands,
    }
}

/// Side-by-side result for both regimes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegimeComparison {
    pub old: TaxResult,
    pub new: TaxResult,
    /// Regime with the lower total tax; the new regime wins ties
    pub recommended: TaxRegime,
    /// How much the recommended regime saves over the other one
    pub savings: Money,
}

/// Evaluate the same income and deductions under both regimes
pub fn compare_regimes(input: &TaxInput) -> RegimeComparison {
    let old = compute_tax(&TaxInput {
        regime: TaxRegime::Old,
        ..*input
    });
    let new = compute_tax(&TaxInput {
        regime: TaxRegime::New,
        ..*input
    });

    let (recommended, savings) = if old.total_tax < new.total_tax {
        (TaxRegime::Old, new.total_tax - old.total_tax)
    } else {
        (TaxRegime::New, old.total_tax - new.total_tax)
    };

    RegimeComparison {
        old,
        new,
        recommended,
        savings,
    }
}
