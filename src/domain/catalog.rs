// SPDX-License-Identifier: MPL-2.0
//! Derived views over a record list: filtering, century grouping and
//! severity statistics.
//!
//! Functions take the record slice explicitly so they work on any list; the
//! application always passes [`super::dataset::PANDEMICS`].

use super::century::CenturyFilter;
use super::pandemic::{PandemicRecord, Severity};

/// Returns the records passing `filter`, in their original order.
#[must_use]
pub fn visible_records(
    records: &[PandemicRecord],
    filter: CenturyFilter,
) -> Vec<&PandemicRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record.year))
        .collect()
}

/// Returns the distinct centuries present in `records`, ascending.
#[must_use]
pub fn distinct_centuries(records: &[PandemicRecord]) -> Vec<i32> {
    let mut centuries: Vec<i32> = records.iter().map(PandemicRecord::century).collect();
    centuries.sort_unstable();
    centuries.dedup();
    centuries
}

/// Number of records per severity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub moderate: usize,
}

impl SeverityCounts {
    /// Counts the records of `records` per tier.
    #[must_use]
    pub fn tally(records: &[PandemicRecord]) -> Self {
        records
            .iter()
            .fold(Self::default(), |mut counts, record| {
                match record.severity {
                    Severity::Critical => counts.critical += 1,
                    Severity::High => counts.high += 1,
                    Severity::Moderate => counts.moderate += 1,
                }
                counts
            })
    }

    /// Returns the count for one tier.
    #[must_use]
    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Moderate => self.moderate,
        }
    }

    /// Sum over all tiers.
    #[must_use]
    pub fn total(&self) -> usize {
        self.critical + self.high + self.moderate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::PANDEMICS;
    use crate::domain::pandemic::RecordId;

    fn record(id: &'static str, year: i32, severity: Severity) -> PandemicRecord {
        PandemicRecord {
            id: RecordId::new(id),
            name: id,
            year,
            period: "",
            deaths: "",
            affected: "",
            description: "",
            region: "",
            severity,
        }
    }

    #[test]
    fn all_filter_returns_every_record_in_order() {
        let visible = visible_records(&PANDEMICS, CenturyFilter::All);
        let ids: Vec<&str> = visible.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11"]
        );
    }

    #[test]
    fn sixth_century_filter_returns_only_justinian() {
        let visible = visible_records(&PANDEMICS, CenturyFilter::Century(6));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.as_str(), "1");
        assert_eq!(visible[0].year, 541);
    }

    #[test]
    fn century_filter_keeps_original_order() {
        let visible = visible_records(&PANDEMICS, CenturyFilter::Century(21));
        let years: Vec<i32> = visible.iter().map(|record| record.year).collect();
        assert_eq!(years, vec![2002, 2009, 2014, 2019]);
    }

    #[test]
    fn absent_century_yields_empty_list() {
        assert!(visible_records(&PANDEMICS, CenturyFilter::Century(3)).is_empty());
    }

    #[test]
    fn distinct_centuries_of_dataset_are_sorted_and_unique() {
        assert_eq!(distinct_centuries(&PANDEMICS), vec![6, 14, 16, 19, 20, 21]);
    }

    #[test]
    fn distinct_centuries_sorts_numerically_not_lexically() {
        let records = [
            record("a", 2019, Severity::High),
            record("b", 541, Severity::High),
            record("c", 1347, Severity::High),
        ];
        assert_eq!(distinct_centuries(&records), vec![6, 14, 21]);
    }

    #[test]
    fn distinct_centuries_of_empty_list_is_empty() {
        assert!(distinct_centuries(&[]).is_empty());
    }

    #[test]
    fn severity_counts_cover_whole_dataset() {
        let counts = SeverityCounts::tally(&PANDEMICS);
        assert_eq!(counts.critical, 6);
        assert_eq!(counts.high, 4);
        assert_eq!(counts.moderate, 1);
        assert_eq!(counts.total(), PANDEMICS.len());
    }

    #[test]
    fn get_reads_each_tier() {
        let records = [
            record("a", 1, Severity::Moderate),
            record("b", 2, Severity::Moderate),
            record("c", 3, Severity::Critical),
        ];
        let counts = SeverityCounts::tally(&records);
        assert_eq!(counts.get(Severity::Critical), 1);
        assert_eq!(counts.get(Severity::High), 0);
        assert_eq!(counts.get(Severity::Moderate), 2);
    }
}
