//! Work progress reports.

use chrono::{Months, NaiveDate};
use adminview_core::{ParseError, Priority, WorkItem, WorkStatus};
use serde::Serialize;
use crate::aggregate::{group_with_keys, GroupBy, GroupSummary, StatusCounts};
use crate::filter::FilterOptions;

/// How far back a report looks, by work start date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    /// Everything
    #[default]
    All,
    /// Started within the last month
    Month,
    /// Started within the last three months
    Quarter,
    /// Started within the last year
    Year,
}

impl TimeRange {
    /// Earliest start date included, or `None` for [`TimeRange::All`].
    pub fn cutoff(&self, today: NaiveDate) -> Option<NaiveDate> {
        let months = match self {
            Self::All => return None,
            Self::Month => 1,
            Self::Quarter => 3,
            Self::Year => 12,
        };
        Some(today.checked_sub_months(Months::new(months)).unwrap_or(NaiveDate::MIN))
    }

    /// Whether the item started inside the range.
    pub fn includes(&self, item: &WorkItem, today: NaiveDate) -> bool {
        self.cutoff(today).map_or(true, |cutoff| item.start_date >= cutoff)
    }

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }
}

impl std::str::FromStr for TimeRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            "year" => Ok(Self::Year),
            _ => Err(ParseError {
                kind: "time range",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A progress report over the items started within a time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Range the report covers
    pub range: TimeRange,

    /// Reference date the range was computed from
    pub today: NaiveDate,

    /// Status tally of the items in range
    pub status: StatusCounts,

    /// Items per priority, lowest first
    pub priorities: Vec<(Priority, usize)>,

    /// Completed share of the items in range
    pub completion_rate: u8,

    /// High-priority items in range
    pub high_priority: usize,

    /// One row per known department
    pub by_department: Vec<GroupSummary>,

    /// One row per known region
    pub by_region: Vec<GroupSummary>,
}

impl Report {
    /// Build a report from the full item list.
    ///
    /// Rows are produced for every department and region present in `items`,
    /// even those with no items inside the range.
    pub fn build(items: &[WorkItem], range: TimeRange, today: NaiveDate) -> Self {
        let options = FilterOptions::from_items(items);
        let in_range: Vec<WorkItem> = items
            .iter()
            .filter(|item| range.includes(item, today))
            .cloned()
            .collect();

        let status: StatusCounts = in_range.iter().collect();
        let priorities: Vec<(Priority, usize)> = Priority::ALL
            .into_iter()
            .map(|p| (p, in_range.iter().filter(|item| item.priority == p).count()))
            .collect();
        let high_priority = priorities
            .iter()
            .find(|(p, _)| *p == Priority::High)
            .map_or(0, |(_, n)| *n);

        Self {
            range,
            today,
            status,
            priorities,
            completion_rate: status.completion_rate(),
            high_priority,
            by_department: group_with_keys(
                &in_range,
                GroupBy::Department,
                options.departments.iter().map(String::as_str),
            ),
            by_region: group_with_keys(
                &in_range,
                GroupBy::Region,
                options.regions.iter().map(String::as_str),
            ),
        }
    }

    /// Items counted in the report.
    pub fn total(&self) -> usize {
        self.status.total
    }

    /// Items with the given status.
    pub fn status_count(&self, status: WorkStatus) -> usize {
        self.status.get(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adminview_storage::fixtures;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_cutoffs() {
        let today = date(2023, 12, 1);
        assert_eq!(TimeRange::All.cutoff(today), None);
        assert_eq!(TimeRange::Month.cutoff(today), Some(date(2023, 11, 1)));
        assert_eq!(TimeRange::Quarter.cutoff(today), Some(date(2023, 9, 1)));
        assert_eq!(TimeRange::Year.cutoff(today), Some(date(2022, 12, 1)));
        // Clamped to the end of a shorter month
        assert_eq!(TimeRange::Month.cutoff(date(2024, 3, 31)), Some(date(2024, 2, 29)));
    }

    #[test]
    fn test_parse_time_range() {
        assert_eq!("Quarter".parse::<TimeRange>().unwrap(), TimeRange::Quarter);
        assert!("decade".parse::<TimeRange>().is_err());
    }

    #[test]
    fn test_full_report() {
        let items = fixtures::work_items().unwrap();
        let report = Report::build(&items, TimeRange::All, date(2023, 12, 1));

        assert_eq!(report.total(), 6);
        assert_eq!(report.status_count(WorkStatus::InProgress), 4);
        assert_eq!(report.status_count(WorkStatus::Pending), 2);
        assert_eq!(report.completion_rate, 0);
        assert_eq!(report.high_priority, 4);
        assert_eq!(
            report.priorities,
            [(Priority::Low, 0), (Priority::Medium, 2), (Priority::High, 4)]
        );
        assert_eq!(report.by_department.len(), 5);
        assert_eq!(report.by_region.len(), 5);
    }

    #[test]
    fn test_month_report_keeps_empty_rows() {
        let items = fixtures::work_items().unwrap();
        // Cutoff 2023-11-12: keeps WRK002, WRK005 and WRK006
        let report = Report::build(&items, TimeRange::Month, date(2023, 12, 12));

        assert_eq!(report.total(), 3);
        assert_eq!(report.by_department.len(), 5);

        let health = report.by_department.iter().find(|g| g.key == "Health").unwrap();
        assert_eq!(health.counts.total, 0);
        assert_eq!(health.completion_rate, 0);

        let central = report.by_region.iter().find(|g| g.key == "Central").unwrap();
        assert_eq!(central.counts.total, 2);
    }

    #[test]
    fn test_report_on_empty_input() {
        let report = Report::build(&[], TimeRange::Year, date(2023, 12, 1));
        assert_eq!(report.total(), 0);
        assert_eq!(report.completion_rate, 0);
        assert!(report.by_department.is_empty());
    }

    #[test]
    fn test_report_serializes() {
        let items = fixtures::work_items().unwrap();
        let report = Report::build(&items, TimeRange::All, date(2023, 12, 1));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["range"], "all");
        assert_eq!(json["by_department"][0]["key"], "Agriculture");
    }
}
