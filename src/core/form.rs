//! DPFO typ B form lines derived from the user input

use super::bonus::child_tax_bonus;
use super::children::Child;
use super::input::UserInput;
use super::numeric::{digits_only, percentage, round, strip_whitespace, sum};
use super::partner::{PartnerEligibility, StatutoryPartnerRules};
use super::sk::{TaxYear, TAX_YEAR};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// NGO receiving the 2% / 3% assignment (r. 152)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NgoRecipient {
    /// IČO, digits only
    pub ico: String,
    pub obch_meno: String,
    pub suhlas_zasl_udaje: bool,
}

/// A completed tax return.
///
/// Field names follow the line numbers of the official form. Every value is
/// computed once, in dependency order, by [`calculate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxForm {
    // Personal details
    pub r001_dic: String,
    pub r003_nace: String,
    pub r004_priezvisko: String,
    pub r005_meno: String,
    pub r006_titul: String,
    pub r006_titul_za: String,
    pub r007_ulica: String,
    pub r008_cislo: String,
    pub r009_psc: String,
    pub r010_obec: String,
    pub r011_stat: String,

    // Business income, table 1
    pub t1r10_prijmy: Decimal,
    pub t1r2_prijmy: Decimal,
    pub t1r10_vydavky: Decimal,

    // Attachment 3, insurance
    pub priloha3_r08_poistne_spolu: Decimal,
    pub priloha3_r09_socialne: Decimal,
    pub priloha3_r10_zdravotne: Decimal,
    pub priloha3_r11_socialne: Decimal,
    pub priloha3_r13_zdravotne: Decimal,
    pub vydavky_poist_par6ods11_ods1a2: Decimal,

    // Pension contributions
    pub platil_prispevky_na_dochodok: bool,
    pub r075_zaplatene_prispevky_na_dochodok: Decimal,

    // Partner
    pub r031_priezvisko_a_meno: String,
    pub r031_rodne_cislo: String,
    /// Claimed and accepted by the partner eligibility gate
    pub r032_uplatnujem_na_partnera: bool,
    pub r032_partner_vlastne_prijmy: Decimal,
    pub r032_partner_pocet_mesiacov: Decimal,

    // Children
    pub r033: Vec<Child>,
    /// Other person claiming the child bonus; not collected, always empty
    pub r034: Option<String>,
    /// Child bonus claimed by the other person; always zero
    pub r034a: Decimal,

    // Employment
    pub r036: Decimal,
    pub r037: Decimal,
    pub r038: Decimal,

    // Business base
    pub r039: Decimal,
    pub r040: Decimal,
    pub r041: Decimal,
    pub r045: Decimal,
    pub r055: Decimal,
    pub r057: Decimal,

    // Non-taxable parts of the base
    pub r072_pred_znizenim: Decimal,
    pub r073: Decimal,
    pub r074_znizenie_partner: Decimal,
    pub r077_nezdanitelna_cast: Decimal,
    pub r078_zaklad_dane_zo_zamestnania: Decimal,
    pub r080_zaklad_dane_celkovo: Decimal,

    // Tax
    pub r081: Decimal,
    pub r090: Decimal,
    pub r091: Decimal,
    pub r092: Decimal,
    pub r094: Decimal,
    pub r095: Decimal,
    pub r096: Decimal,
    pub r105: Decimal,
    pub r116_dan: Decimal,

    // Child tax bonus
    pub r117: Decimal,
    pub r118: Decimal,
    pub r119: Decimal,
    pub r120: Decimal,
    pub r121: Decimal,
    pub r124: Decimal,

    // Advances and settlement
    pub r131: Decimal,
    pub r133: Decimal,
    pub r135_dan_na_uhradu: Decimal,
    pub r136_danovy_preplatok: Decimal,
    pub moze_ziadat_vyplatit_danovy_bonus: bool,
    pub moze_ziadat_vratit_danovy_preplatok: bool,

    // NGO assignment
    pub splnam3per: bool,
    pub suma_2_percenta: Decimal,
    pub suma_3_percenta: Decimal,
    pub can_donate_two_percent_of_tax: bool,
    pub xii_oddiel_uplatnujem2percenta: bool,
    pub r151: Decimal,
    pub r152: Option<NgoRecipient>,

    // Flags and payout details
    pub children: bool,
    pub employed: bool,
    pub mikrodanovnik: bool,
    pub ziadam_vyplatit_danovy_bonus: bool,
    pub ziadam_vratit_danovy_preplatok: bool,
    pub iban: String,
    pub datum: String,
}

/// Compute the return with the statutory partner eligibility rules
pub fn calculate(input: &UserInput) -> TaxForm {
    calculate_with(input, &StatutoryPartnerRules)
}

/// Compute the return with a caller-supplied partner eligibility gate
pub fn calculate_with<P: PartnerEligibility + ?Sized>(input: &UserInput, partner: &P) -> TaxForm {
    let ty = TAX_YEAR;

    // Business income and flat-rate expenses
    let t1r10_prijmy = input.business_income.value();
    let t1r2_prijmy = t1r10_prijmy;
    let priloha3_r11_socialne = input.business_social_insurance.value();
    let priloha3_r13_zdravotne = input.business_health_insurance.value();
    let vydavky_poist = priloha3_r11_socialne + priloha3_r13_zdravotne;
    let t1r10_vydavky = flat_rate_expenses(t1r10_prijmy, vydavky_poist, ty).min(t1r2_prijmy);

    // Employment
    let r036 = input.employment_income.value();
    let priloha3_r09_socialne = input.employment_social_insurance.value();
    let priloha3_r10_zdravotne = input.employment_health_insurance.value();
    let r037 = priloha3_r09_socialne + priloha3_r10_zdravotne;
    let r038 = r036 - r037;

    // Business base
    let r039 = t1r10_prijmy;
    let r040 = t1r10_vydavky;
    let r041 = (r039 - r040).abs();
    let r045 = r041;
    let r055 = r045;
    let r057 = r055;

    // Non-taxable parts
    let r072 = sum([r057, r038]);
    let r073 = personal_allowance(r072, ty);

    let r032_uplatnujem_na_partnera =
        input.claims_partner_allowance && partner.is_eligible(input);
    let partner_income = input.partner_own_income.value();
    let partner_months = input.partner_months.value();
    let r074 = if r032_uplatnujem_na_partnera {
        partner_allowance(r072, partner_income, partner_months, ty)
    } else {
        Decimal::ZERO
    };

    let r075 = input.pension_contributions.value().min(ty.pension_contribution_cap());
    let r077 = (r073 + r074 + r075).min(r072);

    // Employment tax
    let r078 = round((r038 - r077).max(Decimal::ZERO));
    let r080 = r078;
    let r081 = progressive_tax(r080, ty);
    let r090 = r081;

    // Business tax
    let r091 = if r078.is_zero() {
        round((r077 - r038).max(Decimal::ZERO))
    } else {
        Decimal::ZERO
    };
    let r092 = r057 - r091;
    let r094 = r092;
    let r095 = t1r10_prijmy;
    let r096 = business_tax(r094, r095, ty);
    let r105 = r096;
    let r116 = round(r090 + r105);

    // Child tax bonus
    let r033: Vec<Child> = input
        .children
        .iter()
        .map(|child| Child::from_input(input.has_children, child))
        .collect();
    let r117 = child_tax_bonus(&r033, r038, r045, ty);
    let r118 = (r116 - r117).max(Decimal::ZERO);
    let r119 = input.employer_child_bonus.value();
    let r120 = (r117 - r119).max(Decimal::ZERO);
    let r121 = (r120 - r116).max(Decimal::ZERO);
    let r124 = r118;

    // Settlement
    let r131 = input.employer_advances.value();
    let r133 = input.paid_advances.value();
    let r135 = tax_due(r116, r117, r119, r121, r131, r133, ty);
    let r136 = (r116 - r117 + r119 + r121 - r131 - r133)
        .min(Decimal::ZERO)
        .abs();

    // NGO assignment
    let suma_2_percenta = percentage(r124, dec!(2));
    let suma_3_percenta = percentage(r124, dec!(3));
    let can_donate_two_percent_of_tax = suma_3_percenta >= ty.min_donation();
    let r151 = if input.donates {
        let amount = if input.meets_three_percent_conditions {
            suma_3_percenta
        } else {
            suma_2_percenta
        };
        if amount >= ty.min_donation() {
            amount
        } else {
            Decimal::ZERO
        }
    } else {
        Decimal::ZERO
    };
    let r152 = input.donates.then(|| NgoRecipient {
        ico: digits_only(&input.ngo_ico),
        obch_meno: input.ngo_name.clone(),
        suhlas_zasl_udaje: input.ngo_consent,
    });

    log::debug!(
        "Base {} (employment {}, business {}), tax {}, child bonus {}",
        r072,
        r038,
        r057,
        r116,
        r117
    );

    TaxForm {
        r001_dic: input.tax_id.clone(),
        r003_nace: input.nace.clone(),
        r004_priezvisko: input.surname.clone(),
        r005_meno: input.first_name.clone(),
        r006_titul: input.title.clone(),
        r006_titul_za: input.title_after.clone(),
        r007_ulica: input.street.clone(),
        r008_cislo: input.house_number.clone(),
        r009_psc: digits_only(&input.postal_code),
        r010_obec: input.municipality.clone(),
        r011_stat: input.country.clone(),

        t1r10_prijmy,
        t1r2_prijmy,
        t1r10_vydavky,

        priloha3_r08_poistne_spolu: r037,
        priloha3_r09_socialne,
        priloha3_r10_zdravotne,
        priloha3_r11_socialne,
        priloha3_r13_zdravotne,
        vydavky_poist_par6ods11_ods1a2: vydavky_poist,

        platil_prispevky_na_dochodok: input.platil_prispevky_na_dochodok,
        r075_zaplatene_prispevky_na_dochodok: r075,

        r031_priezvisko_a_meno: input.partner_name.clone(),
        r031_rodne_cislo: digits_only(&input.partner_id_number),
        r032_uplatnujem_na_partnera,
        r032_partner_vlastne_prijmy: partner_income,
        r032_partner_pocet_mesiacov: partner_months,

        r033,
        r034: None,
        r034a: Decimal::ZERO,

        r036,
        r037,
        r038,

        r039,
        r040,
        r041,
        r045,
        r055,
        r057,

        r072_pred_znizenim: r072,
        r073,
        r074_znizenie_partner: r074,
        r077_nezdanitelna_cast: r077,
        r078_zaklad_dane_zo_zamestnania: r078,
        r080_zaklad_dane_celkovo: r080,

        r081,
        r090,
        r091,
        r092,
        r094,
        r095,
        r096,
        r105,
        r116_dan: r116,

        r117,
        r118,
        r119,
        r120,
        r121,
        r124,

        r131,
        r133,
        r135_dan_na_uhradu: r135,
        r136_danovy_preplatok: r136,
        moze_ziadat_vyplatit_danovy_bonus: r121 > Decimal::ZERO,
        moze_ziadat_vratit_danovy_preplatok: r136 > Decimal::ZERO,

        splnam3per: input.meets_three_percent_conditions,
        suma_2_percenta,
        suma_3_percenta,
        can_donate_two_percent_of_tax,
        xii_oddiel_uplatnujem2percenta: can_donate_two_percent_of_tax && input.donates,
        r151,
        r152,

        children: input.has_children,
        employed: input.employed,
        mikrodanovnik: r095 <= ty.reduced_rate_revenue_limit(),
        ziadam_vyplatit_danovy_bonus: input.requests_bonus_payout,
        ziadam_vratit_danovy_preplatok: input.requests_refund,
        iban: strip_whitespace(&input.iban),
        datum: input.date.clone(),
    }
}

/// 60% of income up to the cap, plus the insurance paid (before the income cap)
fn flat_rate_expenses(income: Decimal, insurance: Decimal, ty: TaxYear) -> Decimal {
    (income * ty.flat_rate_expense_share()).min(ty.flat_rate_expense_cap()) + insurance
}

/// Non-taxable part of the base per taxpayer (r. 73)
fn personal_allowance(base: Decimal, ty: TaxYear) -> Decimal {
    if base.is_zero() || base >= ty.allowance_threshold() {
        return Decimal::ZERO;
    }
    if base > ty.allowance_taper_threshold() {
        let reduction = round(base * ty.taper_rate());
        return round((ty.allowance_taper_base() - reduction).max(Decimal::ZERO));
    }
    ty.personal_allowance()
}

/// Partner allowance (r. 74), prorated to the claimed months
fn partner_allowance(
    base: Decimal,
    partner_income: Decimal,
    months: Decimal,
    ty: TaxYear,
) -> Decimal {
    let partner_income = partner_income.max(Decimal::ZERO);
    let annual = if base > ty.allowance_threshold() {
        ty.partner_allowance_taper_base() - base * ty.taper_rate() - partner_income
    } else {
        ty.partner_max_allowance() - partner_income
    };

    if months == Decimal::from(12) {
        round(annual).max(Decimal::ZERO)
    } else {
        let monthly = round(annual / Decimal::from(12));
        round(monthly * months).max(Decimal::ZERO)
    }
}

/// 19% up to the threshold, 25% above it
fn progressive_tax(base: Decimal, ty: TaxYear) -> Decimal {
    if base.is_zero() {
        return Decimal::ZERO;
    }
    let threshold = ty.allowance_threshold();
    if base <= threshold {
        base * ty.basic_rate()
    } else {
        threshold * ty.basic_rate() + (base - threshold) * ty.higher_rate()
    }
}

/// Business tax (r. 96): 15% for small revenue, otherwise progressive
fn business_tax(base: Decimal, revenue: Decimal, ty: TaxYear) -> Decimal {
    if base <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    if revenue <= ty.reduced_rate_revenue_limit() {
        return base * ty.reduced_rate();
    }
    progressive_tax(base, ty)
}

/// Tax to pay (r. 135).
///
/// Tax of 17 EUR or less is only levied when a child bonus is claimed, and
/// nothing is payable up to the 5 EUR de minimis. Lines 106-114 and 122-123
/// of the statutory formula are not collected and are left out.
fn tax_due(
    r116: Decimal,
    r117: Decimal,
    r119: Decimal,
    r121: Decimal,
    r131: Decimal,
    r133: Decimal,
    ty: TaxYear,
) -> Decimal {
    let base_tax = if r116 > ty.minimum_tax() || r117 > Decimal::ZERO {
        r116
    } else {
        Decimal::ZERO
    };
    let due = (base_tax - r117 + r119 + r121 - r131 - r133).max(Decimal::ZERO);
    if due > ty.de_minimis() {
        due
    } else {
        Decimal::ZERO
    }
}

/// Filer can assign 3% but 2% would fall under the minimum donation
pub fn donate_only_3_percent(form: &TaxForm) -> bool {
    form.can_donate_two_percent_of_tax && form.suma_2_percenta < TAX_YEAR.min_donation()
}
