pub mod bonus;
pub mod children;
pub mod form;
pub mod input;
pub mod months;
pub mod numeric;
pub mod partner;
pub mod prepayments;
pub mod rodne_cislo;
pub mod sk;
pub mod summary;

// Flat public surface for domain types and functions.
pub use bonus::{child_bonus_groups, child_tax_bonus, BonusGroup};
pub use children::Child;
pub use form::{calculate, calculate_with, donate_only_3_percent, NgoRecipient, TaxForm};
pub use input::{read_input_json, Amount, ChildInput, InputField, PartnerConditions, UserInput};
pub use months::{partition_runs, Month, Run};
pub use numeric::{parse_input_number, percentage, round, round_with, sum, Rounding};
pub use partner::{validate_partner_bonus_form, PartnerEligibility, StatutoryPartnerRules};
pub use prepayments::{advance_payments, AdvancePayments};
pub use rodne_cislo::age_at;
pub use sk::{TaxYear, TAX_YEAR};
pub use summary::{build_summary, Summary};
