//! Partner allowance (r. 74) eligibility gate

use super::input::UserInput;
use super::numeric::digits_only;
use rust_decimal::Decimal;

/// Decides whether the partner lines of the form may be filled in.
///
/// When the gate fails, every partner-derived line is zero.
pub trait PartnerEligibility {
    fn is_eligible(&self, input: &UserInput) -> bool;
}

impl<F> PartnerEligibility for F
where
    F: Fn(&UserInput) -> bool,
{
    fn is_eligible(&self, input: &UserInput) -> bool {
        self(input)
    }
}

/// The § 11 (3) conditions as the partner section of the form collects them
#[derive(Debug, Clone, Copy, Default)]
pub struct StatutoryPartnerRules;

impl PartnerEligibility for StatutoryPartnerRules {
    fn is_eligible(&self, input: &UserInput) -> bool {
        validate_partner_bonus_form(input)
    }
}

/// Check the partner section is complete and the partner qualifies
pub fn validate_partner_bonus_form(input: &UserInput) -> bool {
    if !input.claims_partner_allowance {
        return false;
    }
    if input.partner_name.trim().is_empty() {
        log::debug!("Partner allowance: missing partner name");
        return false;
    }
    if digits_only(&input.partner_id_number).len() < 9 {
        log::debug!("Partner allowance: invalid partner ID number");
        return false;
    }

    let months = input.partner_months.value();
    if !months.fract().is_zero() || months < Decimal::ONE || months > Decimal::from(12) {
        log::debug!("Partner allowance: months out of range ({})", months);
        return false;
    }

    if input.partner_own_income.is_blank() || input.partner_own_income.value() < Decimal::ZERO {
        log::debug!("Partner allowance: missing partner income");
        return false;
    }

    let conditions = &input.partner_conditions;
    conditions.household && conditions.any_reason()
}
