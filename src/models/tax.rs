//! Income tax request and result types
//!
//! `TaxForm` carries the raw text a user typed; `TaxInput` is the parsed,
//! non-negative version the calculator works on.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Cap on Section 80C deductions
pub const SECTION_80C_CAP: Money = Money::from_rupees(150_000);
/// Cap on Section 80D deductions
pub const SECTION_80D_CAP: Money = Money::from_rupees(25_000);
/// Cap on deductible home loan interest
pub const HOME_LOAN_INTEREST_CAP: Money = Money::from_rupees(200_000);

/// Tax scheme to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaxRegime {
    /// More deductions, steeper brackets
    #[default]
    Old,
    /// No deductions, wider brackets
    New,
}

impl TaxRegime {
    /// Read a regime from form text: only "new" selects the new regime
    pub fn from_form(text: &str) -> Self {
        if text.trim().eq_ignore_ascii_case("new") {
            Self::New
        } else {
            Self::Old
        }
    }
}

impl fmt::Display for TaxRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Old => write!(f, "Old"),
            Self::New => write!(f, "New"),
        }
    }
}

/// Parsed tax calculator input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxInput {
    pub annual_income: Money,
    pub regime: TaxRegime,
    pub section_80c: Money,
    pub section_80d: Money,
    pub home_loan_interest: Money,
    pub other_deductions: Money,
}

impl TaxInput {
    pub fn new(annual_income: Money, regime: TaxRegime) -> Self {
        Self {
            annual_income,
            regime,
            ..Default::default()
        }
    }

    /// Sum of deductions after applying the statutory caps
    pub fn capped_deductions(&self) -> Money {
        self.section_80c.min(SECTION_80C_CAP)
            + self.section_80d.min(SECTION_80D_CAP)
            + self.home_loan_interest.min(HOME_LOAN_INTEREST_CAP)
            + self.other_deductions
    }
}

/// Raw form fields, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxForm {
    pub annual_income: String,
    pub regime: String,
    pub section_80c: String,
    pub section_80d: String,
    pub home_loan_interest: String,
    pub other_deductions: String,
}

impl TaxForm {
    /// Parse every field, treating empty, invalid or negative amounts as zero
    pub fn parse(&self) -> TaxInput {
        let amount = |s: &str| Money::parse_or_zero(s).non_negative();
        TaxInput {
            annual_income: amount(&self.annual_income),
            regime: TaxRegime::from_form(&self.regime),
            section_80c: amount(&self.section_80c),
            section_80d: amount(&self.section_80d),
            home_loan_interest: amount(&self.home_loan_interest),
            other_deductions: amount(&self.other_deductions),
        }
    }
}

/// Tax owed within one bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandTax {
    pub floor: Money,
    /// `None` for the open-ended top bracket
    pub ceiling: Option<Money>,
    pub rate_percent: i64,
    /// Portion of taxable income falling inside this bracket
    pub taxed_amount: Money,
    pub tax: Money,
}

/// Full breakdown returned by the tax calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxResult {
    pub regime: TaxRegime,
    pub gross_income: Money,
    /// Zero under the new regime
    pub total_deductions: Money,
    pub taxable_income: Money,
    pub income_tax: Money,
    pub cess: Money,
    pub total_tax: Money,
    pub net_income: Money,
    /// Total tax as a percentage of gross income
    pub effective_rate: f64,
    pub bands: Vec<BandTax>,
}
