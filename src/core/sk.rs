use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Slovak tax year (calendar year).
///
/// Only 2023 is modelled; every constant below belongs to that year's
/// DPFO typ B form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaxYear(pub i32);

/// The tax year the engine computes returns for.
pub const TAX_YEAR: TaxYear = TaxYear(2023);

impl Default for TaxYear {
    fn default() -> Self {
        TAX_YEAR
    }
}

impl TaxYear {
    /// Calendar year as a plain number
    pub fn year(&self) -> i32 {
        self.0
    }

    /// Display as "2023"
    pub fn display(&self) -> String {
        self.0.to_string()
    }

    /// Cap on flat-rate expenses (paušálne výdavky)
    pub fn flat_rate_expense_cap(&self) -> Decimal {
        dec!(20000)
    }

    /// Share of income claimable as flat-rate expenses
    pub fn flat_rate_expense_share(&self) -> Decimal {
        dec!(0.6)
    }

    /// Non-taxable part of the base per taxpayer (r. 73, full amount)
    pub fn personal_allowance(&self) -> Decimal {
        dec!(4922.82)
    }

    /// Base at or above which the personal allowance is zero, and the
    /// 19% / 25% bracket boundary.
    pub fn allowance_threshold(&self) -> Decimal {
        dec!(41445.42)
    }

    /// Base above which the personal allowance starts to taper
    pub fn allowance_taper_threshold(&self) -> Decimal {
        dec!(21754.18)
    }

    /// 44.2 times the subsistence minimum, the taper starting point
    pub fn allowance_taper_base(&self) -> Decimal {
        dec!(10361.36)
    }

    /// Partner allowance base for a high earner (63.4 times the subsistence minimum)
    pub fn partner_allowance_taper_base(&self) -> Decimal {
        dec!(14862.228)
    }

    /// Maximum partner allowance below the threshold
    pub fn partner_max_allowance(&self) -> Decimal {
        dec!(4500.86)
    }

    /// Share of the base that reduces the tapered allowances
    pub fn taper_rate(&self) -> Decimal {
        dec!(0.25)
    }

    /// Cap on deductible supplementary pension contributions (r. 75)
    pub fn pension_contribution_cap(&self) -> Decimal {
        dec!(180)
    }

    /// Revenue limit for the reduced 15% business rate and microentity status
    pub fn reduced_rate_revenue_limit(&self) -> Decimal {
        dec!(49790)
    }

    pub fn reduced_rate(&self) -> Decimal {
        dec!(0.15)
    }

    pub fn basic_rate(&self) -> Decimal {
        dec!(0.19)
    }

    pub fn higher_rate(&self) -> Decimal {
        dec!(0.25)
    }

    /// Monthly child tax bonus for a child under 18
    pub fn child_rate_under_18(&self) -> Decimal {
        dec!(140)
    }

    /// Monthly child tax bonus for a child aged 18 or more
    pub fn child_rate_18_and_over(&self) -> Decimal {
        dec!(50)
    }

    /// Cap on the child tax bonus as a share of the base, by number of children
    pub fn child_bonus_cap(&self, children: usize) -> Decimal {
        match children {
            0 => Decimal::ZERO,
            1 => dec!(0.20),
            2 => dec!(0.27),
            3 => dec!(0.34),
            4 => dec!(0.41),
            5 => dec!(0.48),
            _ => dec!(0.55),
        }
    }

    /// Minimum amount an NGO may receive from the 2% / 3% assignment
    pub fn min_donation(&self) -> Decimal {
        dec!(3)
    }

    /// Tax due is only payable above this amount
    pub fn de_minimis(&self) -> Decimal {
        dec!(5)
    }

    /// Tax at or below this amount is not levied unless a child bonus is claimed
    pub fn minimum_tax(&self) -> Decimal {
        dec!(17)
    }

    /// Tax due above which quarterly advances are payable
    pub fn quarterly_advance_threshold(&self) -> Decimal {
        dec!(5000)
    }

    /// Tax due above which monthly advances are payable
    pub fn monthly_advance_threshold(&self) -> Decimal {
        dec!(16600)
    }
}

impl std::fmt::Display for TaxYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
