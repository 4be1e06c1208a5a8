//! Tax calculator command

use clap::Args;

use crate::display::{format_regime_comparison, format_tax_result};
use crate::error::FinbuddyResult;
use crate::finance::{compare_regimes, compute_tax};
use crate::models::TaxForm;

/// Amounts are read as typed; anything that is not a number counts as zero
#[derive(Args, Debug, Clone)]
pub struct TaxArgs {
    /// Annual income (e.g. 12,00,000 or ₹1200000)
    #[arg(short, long)]
    pub income: String,

    /// Tax regime: old or new
    #[arg(short, long, default_value = "old")]
    pub regime: String,

    /// Section 80C investments (capped at ₹1,50,000)
    #[arg(long = "section-80c", default_value = "")]
    pub section_80c: String,

    /// Section 80D health insurance (capped at ₹25,000)
    #[arg(long = "section-80d", default_value = "")]
    pub section_80d: String,

    /// Home loan interest (capped at ₹2,00,000)
    #[arg(long, default_value = "")]
    pub home_loan: String,

    /// Other deductions
    #[arg(long, default_value = "")]
    pub other: String,

    /// Show both regimes side by side
    #[arg(long)]
    pub compare: bool,
}

impl From<TaxArgs> for TaxForm {
    fn from(args: TaxArgs) -> Self {
        TaxForm {
            annual_income: args.income,
            regime: args.regime,
            section_80c: args.section_80c,
            section_80d: args.section_80d,
            home_loan_interest: args.home_loan,
            other_deductions: args.other,
        }
    }
}

pub fn handle_tax(args: TaxArgs, symbol: &str) -> FinbuddyResult<()> {
    let compare = args.compare;
    let input = TaxForm::from(args).parse();

    if compare {
        print!("{}", format_regime_comparison(&compare_regimes(&input), symbol));
    } else {
        print!("{}", format_tax_result(&compute_tax(&input), symbol));
    }
    Ok(())
}
