//! Child tax bonus (r. 117)
//!
//! The bonus is the sum of the monthly per-child rates, capped at a share of
//! the tax base. The share depends on how many children qualify, so the year
//! is split into runs of months with the same number of children and each run
//! is capped on its own, pro rata to its length.

use super::children::{eligible_count, Child};
use super::months::{partition_runs, Month};
use super::numeric::{round, round_with, sum, Rounding};
use super::rodne_cislo::age_at;
use super::sk::TaxYear;
use rust_decimal::Decimal;
use serde::Serialize;
use std::ops::Range;

/// One run of months with a constant number of eligible children
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BonusGroup {
    /// Month indices covered (January = 0)
    pub months: Range<usize>,
    pub children: usize,
    /// Sum of monthly per-child rates over the run
    pub rates: Decimal,
    /// Cap for the run
    pub limit: Decimal,
    /// `min(rates, limit)`
    pub bonus: Decimal,
}

/// Monthly bonus for one child; zero when not eligible that month
pub fn monthly_rate(child: &Child, month: Month, tax_year: TaxYear) -> Decimal {
    if !child.is_eligible_in(month) {
        return Decimal::ZERO;
    }
    let age = age_at(&child.id_number, tax_year.year(), month.index() as u32);
    if age < 18 {
        tax_year.child_rate_under_18()
    } else {
        tax_year.child_rate_18_and_over()
    }
}

/// Capped bonus per run of months.
///
/// `employment_base` is r. 38 and `business_base` r. 45.
pub fn child_bonus_groups(
    children: &[Child],
    employment_base: Decimal,
    business_base: Decimal,
    tax_year: TaxYear,
) -> Vec<BonusGroup> {
    let counts: Vec<usize> = Month::ALL
        .iter()
        .map(|&month| eligible_count(children, month))
        .collect();
    let base = round_with(employment_base + business_base, Rounding::Up);

    partition_runs(&counts)
        .into_iter()
        .map(|run| {
            let rates = sum(run.range.clone().filter_map(Month::from_index).flat_map(|month| {
                children
                    .iter()
                    .map(move |child| monthly_rate(child, month, tax_year))
            }));

            let mut limit = round(base * tax_year.child_bonus_cap(run.value));
            if run.len() != Month::ALL.len() {
                let monthly = round(limit / Decimal::from(12));
                limit = round(monthly * Decimal::from(run.len()));
            }

            let group = BonusGroup {
                months: run.range,
                children: run.value,
                rates,
                limit,
                bonus: rates.min(limit),
            };
            log::debug!(
                "Child bonus months {:?}: {} children, rates {}, limit {}",
                group.months,
                group.children,
                group.rates,
                group.limit
            );
            group
        })
        .collect()
}

/// Total child tax bonus (r. 117)
pub fn child_tax_bonus(
    children: &[Child],
    employment_base: Decimal,
    business_base: Decimal,
    tax_year: TaxYear,
) -> Decimal {
    sum(child_bonus_groups(children, employment_base, business_base, tax_year)
        .into_iter()
        .map(|group| group.bonus))
}
