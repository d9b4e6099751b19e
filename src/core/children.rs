use super::input::ChildInput;
use super::months::Month;
use super::numeric::digits_only;
use serde::Serialize;

/// A child as entered on line 33, with its eligible months
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Child {
    pub name: String,
    /// National ID number, digits only
    pub id_number: String,
    /// Eligible for the whole year (m00); `months` is then all false
    pub whole_year: bool,
    /// Eligibility per month, January first (m01..m12)
    pub months: [bool; 12],
}

impl Child {
    /// Build the line 33 entry from what the user declared.
    ///
    /// Nothing is eligible unless the taxpayer claims the bonus at all.
    pub fn from_input(has_children: bool, input: &ChildInput) -> Self {
        let whole_year = has_children && input.whole_year;

        let mut months = [false; 12];
        if has_children && !input.whole_year {
            if let (Some(from), Some(to)) = (input.month_from, input.month_to) {
                for month in Month::ALL {
                    let index = month.index() as u32;
                    months[month.index()] = from <= index && index <= to;
                }
            }
        }

        Child {
            name: input.name.clone(),
            id_number: digits_only(&input.id_number),
            whole_year,
            months,
        }
    }

    pub fn is_eligible_in(&self, month: Month) -> bool {
        self.whole_year || self.months[month.index()]
    }
}

/// Number of children eligible in `month`
pub fn eligible_count(children: &[Child], month: Month) -> usize {
    children
        .iter()
        .filter(|child| child.is_eligible_in(month))
        .count()
}
