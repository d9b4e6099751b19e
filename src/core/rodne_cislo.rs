//! Birth date and age from a Slovak national identification number (rodné číslo)

use super::numeric::digits_only;

/// Birth year and 0-indexed birth month encoded in a national ID number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthMonth {
    pub year: i32,
    pub month_index: u32,
}

impl BirthMonth {
    /// Decode `YYMM...`, ignoring any separators.
    ///
    /// Women have 50 added to the month, the extended series since 2004 adds
    /// 20 (men) or 70 (women). Nine-digit numbers were issued before 1954.
    pub fn parse(id_number: &str) -> Option<Self> {
        let digits = digits_only(id_number);
        if digits.len() < 6 {
            return None;
        }

        let yy: i32 = digits[0..2].parse().ok()?;
        let mut mm: u32 = digits[2..4].parse().ok()?;
        if mm > 50 {
            mm -= 50;
        }
        if mm > 20 {
            mm -= 20;
        }
        if !(1..=12).contains(&mm) {
            return None;
        }

        let year = if digits.len() == 9 || yy >= 54 {
            1900 + yy
        } else {
            2000 + yy
        };

        Some(BirthMonth {
            year,
            month_index: mm - 1,
        })
    }

    /// Completed years in the given month; the birth month itself counts
    pub fn age_at(&self, year: i32, month_index: u32) -> i32 {
        let mut age = year - self.year;
        if month_index < self.month_index {
            age -= 1;
        }
        age.max(0)
    }
}

/// Age in completed years at `year` / `month_index` (January = 0).
/// An unreadable number yields 0.
pub fn age_at(id_number: &str, year: i32, month_index: u32) -> i32 {
    match BirthMonth::parse(id_number) {
        Some(birth) => birth.age_at(year, month_index),
        None => {
            log::debug!("Cannot decode birth date from national ID {:?}", id_number);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_men_and_women() {
        assert_eq!(
            BirthMonth::parse("1607201167"),
            Some(BirthMonth { year: 2016, month_index: 6 })
        );
        assert_eq!(
            BirthMonth::parse("1057201167"),
            Some(BirthMonth { year: 2010, month_index: 6 })
        );
        assert_eq!(
            BirthMonth::parse("960922/6286"),
            Some(BirthMonth { year: 1996, month_index: 8 })
        );
    }

    #[test]
    fn decodes_extended_series() {
        assert_eq!(
            BirthMonth::parse("0623011234"),
            Some(BirthMonth { year: 2006, month_index: 2 })
        );
        assert_eq!(
            BirthMonth::parse("0673011234"),
            Some(BirthMonth { year: 2006, month_index: 2 })
        );
    }

    #[test]
    fn nine_digit_numbers_are_pre_1954() {
        assert_eq!(
            BirthMonth::parse("320415123"),
            Some(BirthMonth { year: 1932, month_index: 3 })
        );
    }

    #[test]
    fn rejects_unreadable_numbers() {
        assert_eq!(BirthMonth::parse("anon"), None);
        assert_eq!(BirthMonth::parse("12345"), None);
        assert_eq!(BirthMonth::parse("0513011234"), None);
        assert_eq!(BirthMonth::parse("0500011234"), None);
    }

    #[test]
    fn age_counts_birth_month_as_completed() {
        // born July 2005
        let id = "0507201234";
        assert_eq!(age_at(id, 2023, 5), 17);
        assert_eq!(age_at(id, 2023, 6), 18);
        assert_eq!(age_at(id, 2023, 11), 18);
    }

    #[test]
    fn age_never_negative() {
        assert_eq!(age_at("2401011234", 2023, 0), 0);
        assert_eq!(age_at("anon", 2023, 0), 0);
    }
}
