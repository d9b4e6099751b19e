use super::form::TaxForm;
use rust_decimal::Decimal;
use serde::Serialize;

/// Headline figures of a computed return
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Business plus employment income
    pub income: Decimal,
    pub health_insurance: Decimal,
    pub social_insurance: Decimal,
    pub insurance_total: Decimal,
    pub partner_reduction: Decimal,
    pub child_bonus: Decimal,
    pub pension_contribution: Decimal,
    pub tax_base: Decimal,
    pub overpayment: Decimal,
    pub tax_due: Decimal,
    pub prepayments_made: Decimal,
}

/// Project the form onto the summary; values are taken as computed
pub fn build_summary(form: &TaxForm) -> Summary {
    let health_insurance = form.priloha3_r13_zdravotne + form.priloha3_r10_zdravotne;
    let social_insurance = form.priloha3_r11_socialne + form.priloha3_r09_socialne;

    Summary {
        income: form.t1r10_prijmy + form.r036,
        health_insurance,
        social_insurance,
        insurance_total: health_insurance + social_insurance,
        partner_reduction: form.r074_znizenie_partner,
        child_bonus: form.r117,
        pension_contribution: form.r075_zaplatene_prispevky_na_dochodok,
        tax_base: form.r080_zaklad_dane_celkovo,
        overpayment: form.r136_danovy_preplatok,
        tax_due: form.r135_dan_na_uhradu,
        prepayments_made: form.r133,
    }
}
