//! Summary command - headline figures, advances and 2%/3% assignment

use crate::cmd::{format_eur, read_input, with_filing_date, yes_no};
use clap::Args;
use dpfo::core::donate_only_3_percent;
use dpfo::{advance_payments, build_summary, calculate, AdvancePayments, Summary, TaxForm, TAX_YEAR};
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct SummaryCommand {
    /// Input JSON file. Reads from stdin if not specified.
    #[arg(default_value = "-")]
    file: PathBuf,

    /// Filing date (dd.mm.yyyy), defaults to the input's date or today
    #[arg(short, long)]
    date: Option<String>,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Summary data for JSON output
#[derive(Debug, Serialize)]
struct SummaryData {
    tax_year: String,
    summary: Summary,
    advance_payments: AdvancePayments,
    donation: DonationSummary,
}

#[derive(Debug, Serialize)]
struct DonationSummary {
    can_donate: bool,
    only_3_percent: bool,
    claimed: bool,
    amount: Decimal,
}

impl DonationSummary {
    fn from_form(form: &TaxForm) -> Self {
        DonationSummary {
            can_donate: form.can_donate_two_percent_of_tax,
            only_3_percent: donate_only_3_percent(form),
            claimed: form.xii_oddiel_uplatnujem2percenta,
            amount: form.r151,
        }
    }
}

#[derive(Debug, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Item")]
    item: &'static str,

    #[tabled(rename = "Amount")]
    amount: String,
}

impl SummaryCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let input = with_filing_date(read_input(&self.file)?, self.date.as_deref());
        let form = calculate(&input);
        let summary = build_summary(&form);
        let advances = advance_payments(&form, TAX_YEAR);

        if self.json {
            let data = SummaryData {
                tax_year: TAX_YEAR.to_string(),
                summary,
                advance_payments: advances,
                donation: DonationSummary::from_form(&form),
            };
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else {
            self.print_summary(&form, &summary, advances);
        }
        Ok(())
    }

    fn print_summary(&self, form: &TaxForm, summary: &Summary, advances: AdvancePayments) {
        println!();
        println!("TAX SUMMARY ({}) - filed {}", TAX_YEAR, form.datum);
        println!();

        let rows = vec![
            row("Income", summary.income),
            row("Health insurance", summary.health_insurance),
            row("Social insurance", summary.social_insurance),
            row("Insurance total", summary.insurance_total),
            row("Partner allowance", summary.partner_reduction),
            row("Pension contributions", summary.pension_contribution),
            row("Tax base", summary.tax_base),
            row("Child tax bonus", summary.child_bonus),
            row("Advances paid", summary.prepayments_made),
            row("Tax to pay", summary.tax_due),
            row("Overpayment", summary.overpayment),
        ];
        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::last()).with(Alignment::right()))
            .to_string();
        println!("{}", table);
        println!();

        println!("ADVANCE PAYMENTS");
        println!("  {}", describe_advances(advances));
        println!();

        let donation = DonationSummary::from_form(form);
        println!("2% / 3% ASSIGNMENT");
        println!(
            "  Eligible: {} | 3% only: {} | Claimed: {}",
            yes_no(donation.can_donate),
            yes_no(donation.only_3_percent),
            yes_no(donation.claimed)
        );
        if donation.claimed {
            let recipient = form
                .r152
                .as_ref()
                .map_or(String::new(), |ngo| format!(" to {} ({})", ngo.obch_meno, ngo.ico));
            println!("  Amount: {}{}", format_eur(donation.amount), recipient);
        }
        println!();
    }
}

fn describe_advances(advances: AdvancePayments) -> String {
    let schedule = match advances {
        AdvancePayments::None => return "None due".to_string(),
        AdvancePayments::Quarterly(_) => "Quarterly",
        AdvancePayments::Monthly(_) => "Monthly",
    };
    format!(
        "{}: {} x {}",
        schedule,
        advances.instalments(),
        format_eur(advances.amount())
    )
}

fn row(item: &'static str, amount: Decimal) -> SummaryRow {
    SummaryRow {
        item,
        amount: format_eur(amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn advances_list_instalments() {
        assert_eq!(describe_advances(AdvancePayments::None), "None due");
        assert_eq!(
            describe_advances(AdvancePayments::Quarterly(dec!(1425))),
            "Quarterly: 4 x 1425.00 €"
        );
        assert_eq!(
            describe_advances(AdvancePayments::Monthly(dec!(2058.33))),
            "Monthly: 12 x 2058.33 €"
        );
    }
}
