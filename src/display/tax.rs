//! Tax calculator display formatting

use tabled::Tabled;

use super::render_table;
use crate::finance::RegimeComparison;
use crate::models::{BandTax, Money, TaxResult};

#[derive(Tabled)]
struct BandRow {
    #[tabled(rename = "Bracket")]
    bracket: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Taxed Amount")]
    taxed: String,
    #[tabled(rename = "Tax")]
    tax: String,
}

fn bracket_label(band: &BandTax, symbol: &str) -> String {
    match band.ceiling {
        Some(ceiling) => format!(
            "{} - {}",
            band.floor.format_with_symbol(symbol),
            ceiling.format_with_symbol(symbol)
        ),
        None => format!("Above {}", band.floor.format_with_symbol(symbol)),
    }
}

/// Full breakdown of one regime's tax
pub fn format_tax_result(result: &TaxResult, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Tax calculation ({} regime)\n", result.regime));
    output.push_str(&format!(
        "  Gross Income:     {}\n",
        result.gross_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Total Deductions: {}\n",
        result.total_deductions.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Taxable Income:   {}\n",
        result.taxable_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Income Tax:       {}\n",
        result.income_tax.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Cess (4%):        {}\n",
        result.cess.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Total Tax:        {}\n",
        result.total_tax.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Net Income:       {}\n",
        result.net_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Effective Rate:   {:.2}%\n",
        result.effective_rate
    ));

    if !result.bands.is_empty() {
        let rows = result
            .bands
            .iter()
            .map(|band| BandRow {
                bracket: bracket_label(band, symbol),
                rate: format!("{}%", band.rate_percent),
                taxed: band.taxed_amount.format_with_symbol(symbol),
                tax: band.tax.format_with_symbol(symbol),
            })
            .collect();
        output.push('\n');
        output.push_str(&render_table(rows, &[1, 2, 3]));
        output.push('\n');
    }

    output
}

#[derive(Tabled)]
struct ComparisonRow {
    #[tabled(rename = "")]
    label: &'static str,
    #[tabled(rename = "Old Regime")]
    old: String,
    #[tabled(rename = "New Regime")]
    new: String,
}

/// Side-by-side totals for both regimes and the recommendation
pub fn format_regime_comparison(comparison: &RegimeComparison, symbol: &str) -> String {
    let (old, new) = (&comparison.old, &comparison.new);
    let money = |amount: Money| amount.format_with_symbol(symbol);
    let row = |label, old: String, new: String| ComparisonRow { label, old, new };

    let rows = vec![
        row(
            "Deductions",
            money(old.total_deductions),
            money(new.total_deductions),
        ),
        row(
            "Taxable Income",
            money(old.taxable_income),
            money(new.taxable_income),
        ),
        row("Total Tax", money(old.total_tax), money(new.total_tax)),
        row("Net Income", money(old.net_income), money(new.net_income)),
        row(
            "Effective Rate",
            format!("{:.2}%", old.effective_rate),
            format!("{:.2}%", new.effective_rate),
        ),
    ];

    let mut output = render_table(rows, &[1, 2]);
    output.push('\n');
    if comparison.savings.is_zero() {
        output.push_str(&format!(
            "\nBoth regimes cost the same; the {} regime is recommended.\n",
            comparison.recommended
        ));
    } else {
        output.push_str(&format!(
            "\nThe {} regime saves you {}.\n",
            comparison.recommended,
            comparison.savings.format_with_symbol(symbol)
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::{compare_regimes, compute_tax};
    use crate::models::{TaxInput, TaxRegime};

    #[test]
    fn test_format_new_regime_result() {
        let result = compute_tax(&TaxInput::new(Money::from_rupees(1_000_000), TaxRegime::New));
        let output = format_tax_result(&result, "₹");

        assert!(output.contains("Tax calculation (New regime)"));
        assert!(output.contains("Total Tax:        ₹62,400.00"));
        assert!(output.contains("Effective Rate:   6.24%"));
        assert!(output.contains("₹900,000.00 - ₹1,200,000.00"));
        assert!(output.contains("15%"));
    }

    #[test]
    fn test_format_zero_income_has_no_bands() {
        let output = format_tax_result(&compute_tax(&TaxInput::default()), "₹");
        assert!(output.contains("Total Tax:        ₹0.00"));
        assert!(!output.contains("Bracket"));
    }

    #[test]
    fn test_format_comparison() {
        let input = TaxInput {
            annual_income: Money::from_rupees(800_000),
            section_80c: Money::from_rupees(150_000),
            section_80d: Money::from_rupees(25_000),
            ..Default::default()
        };
        let output = format_regime_comparison(&compare_regimes(&input), "₹");

        assert!(output.contains("Old Regime"));
        assert!(output.contains("₹39,000.00"));
        assert!(output.contains("₹36,400.00"));
        assert!(output.contains("The New regime saves you ₹2,600.00."));
    }
}
