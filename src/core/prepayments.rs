use super::form::TaxForm;
use super::numeric::round;
use super::sk::TaxYear;
use rust_decimal::Decimal;
use serde::Serialize;

/// Income tax advances payable in the following year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "schedule", content = "amount")]
pub enum AdvancePayments {
    /// Tax due too low, no advances
    None,
    Quarterly(Decimal),
    Monthly(Decimal),
}

impl AdvancePayments {
    /// Amount of a single instalment, zero when none are due
    pub fn amount(&self) -> Decimal {
        match self {
            AdvancePayments::None => Decimal::ZERO,
            AdvancePayments::Quarterly(amount) | AdvancePayments::Monthly(amount) => *amount,
        }
    }

    pub fn instalments(&self) -> u32 {
        match self {
            AdvancePayments::None => 0,
            AdvancePayments::Quarterly(_) => 4,
            AdvancePayments::Monthly(_) => 12,
        }
    }
}

/// Advance schedule derived from the tax due (r. 135).
///
/// Instalments are 19% of the business base (r. 55) spread over the year.
pub fn advance_payments(form: &TaxForm, tax_year: TaxYear) -> AdvancePayments {
    let due = form.r135_dan_na_uhradu;
    let annual = form.r055 * tax_year.basic_rate();

    if due > tax_year.monthly_advance_threshold() {
        AdvancePayments::Monthly(round(annual / Decimal::from(12)))
    } else if due > tax_year.quarterly_advance_threshold() {
        AdvancePayments::Quarterly(round(annual / Decimal::from(4)))
    } else {
        AdvancePayments::None
    }
}
