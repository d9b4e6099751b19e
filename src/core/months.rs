use std::ops::Range;

/// Calendar month of the tax year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// 0-indexed position (January = 0)
    pub fn index(self) -> usize {
        self as usize
    }

    /// 1-indexed number (January = 1)
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn from_index(index: usize) -> Option<Month> {
        Month::ALL.get(index).copied()
    }

    /// Month label as shown in the Slovak form ("Január" .. "December")
    pub fn slovak_name(self) -> &'static str {
        match self {
            Month::January => "Január",
            Month::February => "Február",
            Month::March => "Marec",
            Month::April => "Apríl",
            Month::May => "Máj",
            Month::June => "Jún",
            Month::July => "Júl",
            Month::August => "August",
            Month::September => "September",
            Month::October => "Október",
            Month::November => "November",
            Month::December => "December",
        }
    }

    pub fn from_slovak_name(name: &str) -> Option<Month> {
        Month::ALL
            .into_iter()
            .find(|month| month.slovak_name() == name.trim())
    }
}

/// A maximal run of equal values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run<T> {
    pub value: T,
    pub range: Range<usize>,
}

impl<T> Run<T> {
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Split `values` into maximal contiguous runs of equal value.
///
/// Runs cover the whole slice in order; an empty slice has no runs.
pub fn partition_runs<T: PartialEq + Clone>(values: &[T]) -> Vec<Run<T>> {
    let mut runs = Vec::new();
    let mut start = 0;

    for index in 1..=values.len() {
        if index == values.len() || values[index] != values[start] {
            runs.push(Run {
                value: values[start].clone(),
                range: start..index,
            });
            start = index;
        }
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_positions() {
        assert_eq!(Month::January.index(), 0);
        assert_eq!(Month::December.index(), 11);
        assert_eq!(Month::January.number(), 1);
        assert_eq!(Month::December.number(), 12);
        assert_eq!(Month::from_index(6), Some(Month::July));
        assert_eq!(Month::from_index(12), None);
    }

    #[test]
    fn slovak_names_round_trip() {
        for month in Month::ALL {
            assert_eq!(Month::from_slovak_name(month.slovak_name()), Some(month));
        }
        assert_eq!(Month::from_slovak_name("Apríl").map(Month::index), Some(3));
        assert_eq!(Month::from_slovak_name("Smarch"), None);
    }

    #[test]
    fn constant_sequence_is_one_run() {
        let runs = partition_runs(&[2; 12]);
        assert_eq!(runs, vec![Run { value: 2, range: 0..12 }]);
        assert_eq!(runs[0].len(), 12);
    }

    #[test]
    fn changepoints_start_new_runs() {
        let counts = [0, 0, 0, 0, 0, 0, 1, 1, 1, 2, 2, 1];
        let runs = partition_runs(&counts);
        assert_eq!(
            runs,
            vec![
                Run { value: 0, range: 0..6 },
                Run { value: 1, range: 6..9 },
                Run { value: 2, range: 9..11 },
                Run { value: 1, range: 11..12 },
            ]
        );
    }

    #[test]
    fn last_month_alone() {
        let mut counts = [1; 12];
        counts[11] = 3;
        let runs = partition_runs(&counts);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[1], Run { value: 3, range: 11..12 });
    }

    #[test]
    fn empty_has_no_runs() {
        assert!(partition_runs::<u8>(&[]).is_empty());
    }
}
