use super::months::Month;
use super::numeric::parse_input_number;
use dpfo_derive::FieldSchema;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::io::Read;

/// Description of one input field, generated by `#[derive(FieldSchema)]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputField {
    pub name: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
}

/// An amount exactly as the user typed it ("1 234,56", "9.40", "")
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct Amount(pub String);

impl Amount {
    /// Parsed value; anything unreadable is zero
    pub fn value(&self) -> Decimal {
        parse_input_number(&self.0)
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for Amount {
    fn from(s: &str) -> Self {
        Amount(s.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Amount(loose_text(Value::deserialize(deserializer)?)))
    }
}

/// Input record collected by the UI, one snapshot per calculation.
///
/// Field names on the wire follow the UI's form model. Every field is
/// optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, FieldSchema)]
#[serde(default)]
pub struct UserInput {
    /// Tax identification number (DIČ)
    #[serde(rename = "r001_dic", deserialize_with = "lenient_text")]
    pub tax_id: String,
    /// Main business activity (SK NACE)
    #[serde(rename = "r003_nace", deserialize_with = "lenient_text")]
    pub nace: String,
    /// Surname
    #[serde(rename = "r004_priezvisko", deserialize_with = "lenient_text")]
    pub surname: String,
    /// First name
    #[serde(rename = "r005_meno", deserialize_with = "lenient_text")]
    pub first_name: String,
    /// Academic title before the name
    #[serde(rename = "r006_titul", deserialize_with = "lenient_text")]
    pub title: String,
    /// Academic title after the name
    #[serde(rename = "r006_titul_za", deserialize_with = "lenient_text")]
    pub title_after: String,
    /// Street
    #[serde(rename = "r007_ulica", deserialize_with = "lenient_text")]
    pub street: String,
    /// House number
    #[serde(rename = "r008_cislo", deserialize_with = "lenient_text")]
    pub house_number: String,
    /// Postal code
    #[serde(rename = "r009_psc", deserialize_with = "lenient_text")]
    pub postal_code: String,
    /// Municipality
    #[serde(rename = "r010_obec", deserialize_with = "lenient_text")]
    pub municipality: String,
    /// Country
    #[serde(rename = "r011_stat", deserialize_with = "lenient_text")]
    pub country: String,

    /// Gross business income under § 6 (1) and (2)
    #[serde(rename = "t1r10_prijmy")]
    pub business_income: Amount,
    /// Social insurance paid as self-employed
    #[serde(rename = "priloha3_r11_socialne")]
    pub business_social_insurance: Amount,
    /// Health insurance paid as self-employed
    #[serde(rename = "priloha3_r13_zdravotne")]
    pub business_health_insurance: Amount,

    /// Paid supplementary pension contributions (III. pilier)
    #[serde(deserialize_with = "lenient_bool")]
    pub platil_prispevky_na_dochodok: bool,
    /// Supplementary pension contributions paid
    #[serde(rename = "zaplatene_prispevky_na_dochodok")]
    pub pension_contributions: Amount,

    /// Partner's surname and name
    #[serde(rename = "r031_priezvisko_a_meno", deserialize_with = "lenient_text")]
    pub partner_name: String,
    /// Partner's national ID number
    #[serde(rename = "r031_rodne_cislo", deserialize_with = "lenient_text")]
    pub partner_id_number: String,
    /// Claims the partner allowance
    #[serde(rename = "r032_uplatnujem_na_partnera", deserialize_with = "lenient_bool")]
    pub claims_partner_allowance: bool,
    /// Partner's own income
    #[serde(rename = "r032_partner_vlastne_prijmy")]
    pub partner_own_income: Amount,
    /// Number of months the partner allowance is claimed for
    #[serde(rename = "r032_partner_pocet_mesiacov")]
    pub partner_months: Amount,
    /// Statutory conditions the partner meets
    #[serde(rename = "partner_podmienky")]
    pub partner_conditions: PartnerConditions,

    /// Claims the child tax bonus
    #[serde(rename = "hasChildren", deserialize_with = "lenient_bool")]
    pub has_children: bool,
    /// Children the bonus is claimed for
    pub children: Vec<ChildInput>,

    /// Had employment income under § 5
    #[serde(deserialize_with = "lenient_bool")]
    pub employed: bool,
    /// Total employment income from all employers
    #[serde(rename = "uhrnPrijmovOdVsetkychZamestnavatelov")]
    pub employment_income: Amount,
    /// Employee social insurance withheld
    #[serde(rename = "uhrnPovinnehoPoistnehoNaSocialnePoistenie")]
    pub employment_social_insurance: Amount,
    /// Employee health insurance withheld
    #[serde(rename = "uhrnPovinnehoPoistnehoNaZdravotnePoistenie")]
    pub employment_health_insurance: Amount,
    /// Child tax bonus already paid out by the employer
    #[serde(rename = "udajeODanovomBonuseNaDieta")]
    pub employer_child_bonus: Amount,
    /// Tax advances withheld by the employer
    #[serde(rename = "uhrnPreddavkovNaDan")]
    pub employer_advances: Amount,
    /// Tax advances paid directly
    #[serde(rename = "zaplatenePreddavky")]
    pub paid_advances: Amount,

    /// Assigns 2% (or 3%) of the tax to an NGO
    #[serde(rename = "XIIoddiel_uplatnujem2percenta", deserialize_with = "lenient_bool")]
    pub donates: bool,
    /// Meets the conditions for assigning 3% (volunteering)
    #[serde(rename = "splnam3per", deserialize_with = "lenient_bool")]
    pub meets_three_percent_conditions: bool,
    /// Recipient NGO identification number (IČO)
    #[serde(rename = "r142_ico", deserialize_with = "lenient_text")]
    pub ngo_ico: String,
    /// Recipient NGO name
    #[serde(rename = "r142_obchMeno", deserialize_with = "lenient_text")]
    pub ngo_name: String,
    /// Consents to sharing name and address with the NGO
    #[serde(rename = "XIIoddiel_suhlasZaslUdaje", deserialize_with = "lenient_bool")]
    pub ngo_consent: bool,

    /// Requests payout of the child tax bonus
    #[serde(rename = "ziadamVyplatitDanovyBonus", deserialize_with = "lenient_bool")]
    pub requests_bonus_payout: bool,
    /// Requests refund of the overpayment
    #[serde(rename = "ziadamVratitDanovyPreplatok", deserialize_with = "lenient_bool")]
    pub requests_refund: bool,
    /// Account for payouts and refunds
    #[serde(deserialize_with = "lenient_text")]
    pub iban: String,
    /// Filing date (dd.mm.yyyy)
    #[serde(rename = "datum", deserialize_with = "lenient_text")]
    pub date: String,
}

/// A child the bonus is claimed for
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, FieldSchema)]
#[serde(default)]
pub struct ChildInput {
    /// UI identifier
    #[serde(deserialize_with = "lenient_text")]
    pub id: String,
    /// Surname and name
    #[serde(rename = "priezviskoMeno", deserialize_with = "lenient_text")]
    pub name: String,
    /// National ID number
    #[serde(rename = "rodneCislo", deserialize_with = "lenient_text")]
    pub id_number: String,
    /// Eligible for the whole year
    #[serde(rename = "wholeYear", deserialize_with = "lenient_bool")]
    pub whole_year: bool,
    /// First eligible month, January = 0
    #[serde(rename = "monthFrom", deserialize_with = "lenient_month")]
    pub month_from: Option<u32>,
    /// Last eligible month, December = 11
    #[serde(rename = "monthTo", deserialize_with = "lenient_month")]
    pub month_to: Option<u32>,
}

/// Conditions under § 11 (3) for the partner allowance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, FieldSchema)]
#[serde(default)]
pub struct PartnerConditions {
    /// Partner lives with the taxpayer in one household
    #[serde(deserialize_with = "lenient_bool")]
    pub household: bool,
    /// Partner cares for a child under 3 (6 if disabled)
    #[serde(deserialize_with = "lenient_bool")]
    pub child_care: bool,
    /// Partner receives a caregiver allowance
    #[serde(deserialize_with = "lenient_bool")]
    pub caregiver_allowance: bool,
    /// Partner is registered as a job seeker
    #[serde(deserialize_with = "lenient_bool")]
    pub job_seeker: bool,
    /// Partner is a person with a disability
    #[serde(deserialize_with = "lenient_bool")]
    pub disability: bool,
}

impl PartnerConditions {
    /// At least one qualifying reason besides sharing the household
    pub fn any_reason(&self) -> bool {
        self.child_care || self.caregiver_allowance || self.job_seeker || self.disability
    }
}

/// Read a user input document
pub fn read_input_json<R: Read>(reader: R) -> serde_json::Result<UserInput> {
    serde_json::from_reader(reader)
}

fn loose_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => {
            log::debug!("Ignoring non-text value {}", other);
            String::new()
        }
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(loose_text(Value::deserialize(deserializer)?))
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let flag = match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    };
    Ok(flag)
}

fn lenient_month<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let month = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().and_then(|m| u32::try_from(m).ok()),
        Value::String(s) => s
            .trim()
            .parse()
            .ok()
            .or_else(|| Month::from_slovak_name(&s).map(|month| month.index() as u32)),
        _ => None,
    };
    Ok(month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn from_json(value: Value) -> UserInput {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn missing_fields_take_defaults() {
        let input = from_json(json!({}));
        assert!(!input.has_children);
        assert!(input.children.is_empty());
        assert_eq!(input.business_income.value(), Decimal::ZERO);
    }

    #[test]
    fn amounts_accept_strings_numbers_and_null() {
        let input = from_json(json!({
            "t1r10_prijmy": "25 000,50",
            "priloha3_r11_socialne": 1000.25,
            "priloha3_r13_zdravotne": null,
            "uhrnPrijmovOdVsetkychZamestnavatelov": "anon",
        }));
        assert_eq!(input.business_income.value(), dec!(25000.50));
        assert_eq!(input.business_social_insurance.value(), dec!(1000.25));
        assert!(input.business_health_insurance.is_blank());
        assert_eq!(input.employment_income.value(), Decimal::ZERO);
    }

    #[test]
    fn flags_degrade_to_false() {
        let input = from_json(json!({
            "employed": "true",
            "hasChildren": null,
            "splnam3per": 1,
            "XIIoddiel_uplatnujem2percenta": true,
        }));
        assert!(input.employed);
        assert!(!input.has_children);
        assert!(!input.meets_three_percent_conditions);
        assert!(input.donates);
    }

    #[test]
    fn child_months_accept_numbers_and_strings() {
        let input = from_json(json!({
            "children": [
                { "id": 1, "priezviskoMeno": "Morty Smith", "rodneCislo": "1607201167",
                  "wholeYear": false, "monthFrom": "6", "monthTo": 11 },
                { "id": "2", "monthFrom": "", "monthTo": "x" },
            ]
        }));
        let first = &input.children[0];
        assert_eq!(first.id, "1");
        assert_eq!(first.month_from, Some(6));
        assert_eq!(first.month_to, Some(11));
        let second = &input.children[1];
        assert_eq!(second.month_from, None);
        assert_eq!(second.month_to, None);
    }

    #[test]
    fn child_months_accept_slovak_labels() {
        let input = from_json(json!({
            "children": [{ "monthFrom": "Júl", "monthTo": " December " }]
        }));
        assert_eq!(input.children[0].month_from, Some(6));
        assert_eq!(input.children[0].month_to, Some(11));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let input = from_json(json!({
            "partner_step": 0,
            "prijmyPredJul22": null,
            "percent2": "77,57",
            "r005_meno": "Fake",
        }));
        assert_eq!(input.first_name, "Fake");
    }

    #[test]
    fn field_schema_uses_wire_names() {
        let fields = UserInput::field_schema();
        let income = fields.iter().find(|f| f.name == "t1r10_prijmy").unwrap();
        assert_eq!(income.kind, "amount");
        assert_eq!(income.description, "Gross business income under § 6 (1) and (2)");

        let children = fields.iter().find(|f| f.name == "children").unwrap();
        assert_eq!(children.kind, "list");

        let month = ChildInput::field_schema()
            .iter()
            .find(|f| f.name == "monthFrom")
            .unwrap();
        assert_eq!(month.kind, "number");
        assert!(PartnerConditions::field_schema().iter().all(|f| f.kind == "flag"));
    }
}
