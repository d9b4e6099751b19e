//! Whole-return scenarios computed from the JSON fixtures in tests/data

use dpfo::core::{child_bonus_groups, donate_only_3_percent, PartnerConditions};
use dpfo::{
    advance_payments, build_summary, calculate, calculate_with, read_input_json, AdvancePayments,
    UserInput, TAX_YEAR,
};
use rust_decimal_macros::dec;
use std::fs::File;

fn load(name: &str) -> UserInput {
    let path = format!("tests/data/{}", name);
    let file = File::open(&path).unwrap_or_else(|e| panic!("cannot open {}: {}", path, e));
    read_input_json(file).expect("fixture should parse")
}

#[test]
fn complete_input_business_only() {
    let form = calculate(&load("complete_input.json"));

    assert_eq!(form.t1r10_vydavky, dec!(17000));
    assert_eq!(form.r041, dec!(8000));
    assert_eq!(form.r073, dec!(4922.82));
    assert_eq!(form.r077_nezdanitelna_cast, dec!(4922.82));
    assert_eq!(form.r091, dec!(4922.82));
    assert_eq!(form.r094, dec!(3077.18));
    // 3077.18 * 15%
    assert_eq!(form.r116_dan, dec!(461.58));
    assert_eq!(form.r135_dan_na_uhradu, dec!(461.58));
    assert_eq!(form.r136_danovy_preplatok, dec!(0));
    assert!(form.mikrodanovnik);
    assert_eq!(form.r009_psc, "82105");
    assert_eq!(form.datum, "22.02.2024");
}

#[test]
fn partner_claim_without_conditions_is_dropped() {
    let form = calculate(&load("complete_input.json"));

    assert!(!form.r032_uplatnujem_na_partnera);
    assert_eq!(form.r074_znizenie_partner, dec!(0));
    // identity is still carried onto the form
    assert_eq!(form.r031_rodne_cislo, "9609226286");
}

#[test]
fn partner_claim_with_conditions() {
    let mut input = load("complete_input.json");
    input.partner_conditions = PartnerConditions {
        household: true,
        job_seeker: true,
        ..Default::default()
    };
    let form = calculate(&input);

    assert!(form.r032_uplatnujem_na_partnera);
    // 4500.86 - 4000 own income
    assert_eq!(form.r074_znizenie_partner, dec!(500.86));
    assert_eq!(form.r077_nezdanitelna_cast, dec!(5423.68));
}

#[test]
fn custom_partner_gate() {
    let input = load("complete_input.json");

    let accepted = calculate_with(&input, &|_: &UserInput| true);
    assert_eq!(accepted.r074_znizenie_partner, dec!(500.86));

    let rejected = calculate_with(&input, &|_: &UserInput| false);
    assert!(!rejected.r032_uplatnujem_na_partnera);
    assert_eq!(rejected.r074_znizenie_partner, dec!(0));
}

#[test]
fn complete_input_can_assign_tax() {
    let form = calculate(&load("complete_input.json"));

    assert!(form.can_donate_two_percent_of_tax);
    assert!(!donate_only_3_percent(&form));
    assert!(!form.xii_oddiel_uplatnujem2percenta);
    assert_eq!(form.r151, dec!(0));
    assert_eq!(form.r152, None);
}

#[test]
fn employment_with_child_bonus() {
    let form = calculate(&load("with_employment_bonus_input.json"));

    assert_eq!(form.r036, dec!(3248.30));
    assert_eq!(form.r037, dec!(435.22));
    assert_eq!(form.r038, dec!(2813.08));
    assert_eq!(form.r045, dec!(1525.45));

    assert_eq!(form.r033.len(), 2);
    assert!(form.r033.iter().all(|child| child.whole_year));

    assert_eq!(form.r116_dan, dec!(0));
    assert_eq!(form.r117, dec!(1171.40));
    assert_eq!(form.r119, dec!(221.70));
    assert_eq!(form.r120, dec!(949.70));
    assert_eq!(form.r121, dec!(949.70));
    assert_eq!(form.r135_dan_na_uhradu, dec!(0));
    assert_eq!(form.r136_danovy_preplatok, dec!(78.20));
    assert!(form.moze_ziadat_vyplatit_danovy_bonus);
    assert!(form.moze_ziadat_vratit_danovy_preplatok);
    assert_eq!(form.iban, "SK6807200002891987426353");
}

#[test]
fn child_bonus_is_one_group_for_the_whole_year() {
    let form = calculate(&load("with_employment_bonus_input.json"));
    let groups = child_bonus_groups(&form.r033, form.r038, form.r045, TAX_YEAR);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].months, 0..12);
    assert_eq!(groups[0].children, 2);
    // round(4338.53 * 27%)
    assert_eq!(groups[0].limit, dec!(1171.40));
    assert_eq!(groups[0].bonus, form.r117);
}

#[test]
fn children_ignored_without_claim() {
    let mut input = load("with_employment_bonus_input.json");
    input.has_children = false;
    let form = calculate(&input);

    assert_eq!(form.r117, dec!(0));
    assert_eq!(form.r121, dec!(0));
    assert!(form.r033.iter().all(|child| !child.whole_year));
}

#[test]
fn bug_report_5() {
    let form = calculate(&load("bug_report_5_input.json"));

    assert_eq!(form.t1r10_vydavky, dec!(26824.88));
    assert_eq!(form.r041, dec!(23980.91));
    assert_eq!(form.r038, dec!(203.51));
    assert_eq!(form.r072_pred_znizenim, dec!(24184.42));
    // 10361.36 - round(24184.42 * 25%)
    assert_eq!(form.r073, dec!(4315.25));
    assert_eq!(form.r075_zaplatene_prispevky_na_dochodok, dec!(180));
    assert_eq!(form.r078_zaklad_dane_zo_zamestnania, dec!(0));
    assert_eq!(form.r091, dec!(4291.74));
    assert_eq!(form.r094, dec!(19689.17));
    assert!(!form.mikrodanovnik);
    assert_eq!(form.r116_dan, dec!(3740.94));
    assert_eq!(form.r117, dec!(0));
    assert_eq!(form.r135_dan_na_uhradu, dec!(3702.27));
    assert_eq!(form.r031_rodne_cislo, "");
}

#[test]
fn bug_report_5_assigns_two_percent() {
    let form = calculate(&load("bug_report_5_input.json"));

    assert!(form.can_donate_two_percent_of_tax);
    assert!(form.xii_oddiel_uplatnujem2percenta);
    assert_eq!(form.suma_2_percenta, dec!(74.8188));
    assert_eq!(form.suma_3_percenta, dec!(112.2282));
    assert_eq!(form.r151, dec!(74.8188));

    let ngo = form.r152.as_ref().expect("recipient");
    assert_eq!(ngo.ico, "53335082");
    assert_eq!(ngo.obch_meno, "\"Znepokojené matky\"");
    assert!(ngo.suhlas_zasl_udaje);
}

#[test]
fn bug_report_5_summary_and_advances() {
    let form = calculate(&load("bug_report_5_input.json"));
    let summary = build_summary(&form);

    assert_eq!(summary.income, dec!(51040.79));
    assert_eq!(summary.health_insurance, dec!(1923.62));
    assert_eq!(summary.social_insurance, dec!(4932.75));
    assert_eq!(summary.tax_base, dec!(0));
    assert_eq!(summary.tax_due, dec!(3702.27));

    assert_eq!(advance_payments(&form, TAX_YEAR), AdvancePayments::None);
}

#[test]
fn calculation_is_deterministic() {
    let input = load("with_employment_bonus_input.json");
    assert_eq!(calculate(&input), calculate(&input));
}
