//! Grouped counts and completion rates.

use adminview_core::{Priority, WorkItem, WorkStatus};
use serde::Serialize;

/// Rounded percentage of `part` in `whole`, 0 when `whole` is 0.
///
/// Halves round up, so 1 of 8 is 13 and 1 of 6 is 17.
pub fn rounded_percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole);
    ((part * 200 + whole) / (whole * 2)) as u8
}

/// Per-status tally of a set of work items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    /// Items counted
    pub total: usize,
    /// Completed items
    pub completed: usize,
    /// In-progress items
    pub in_progress: usize,
    /// Pending items
    pub pending: usize,
}

impl StatusCounts {
    /// Count one item.
    pub fn add(&mut self, status: WorkStatus) {
        self.total += 1;
        match status {
            WorkStatus::Completed => self.completed += 1,
            WorkStatus::InProgress => self.in_progress += 1,
            WorkStatus::Pending => self.pending += 1,
        }
    }

    /// Number of items with the given status.
    pub fn get(&self, status: WorkStatus) -> usize {
        match status {
            WorkStatus::Completed => self.completed,
            WorkStatus::InProgress => self.in_progress,
            WorkStatus::Pending => self.pending,
        }
    }

    /// Completed share of the total, 0-100.
    pub fn completion_rate(&self) -> u8 {
        rounded_percentage(self.completed, self.total)
    }
}

impl<'a> FromIterator<&'a WorkItem> for StatusCounts {
    fn from_iter<I: IntoIterator<Item = &'a WorkItem>>(iter: I) -> Self {
        let mut counts = Self::default();
        for item in iter {
            counts.add(item.status);
        }
        counts
    }
}

/// Summary of the items sharing one department or region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    /// Department or region name
    pub key: String,

    /// Status tally
    pub counts: StatusCounts,

    /// High-priority items
    pub high_priority: usize,

    /// Mean progress, rounded
    pub average_progress: u8,

    /// Completed share, 0-100
    pub completion_rate: u8,
}

impl GroupSummary {
    /// Summarise `items` under `key`.
    pub fn new<'a>(key: impl Into<String>, items: impl IntoIterator<Item = &'a WorkItem>) -> Self {
        let mut counts = StatusCounts::default();
        let mut high_priority = 0;
        let mut progress_sum = 0usize;

        for item in items {
            counts.add(item.status);
            if item.priority == Priority::High {
                high_priority += 1;
            }
            progress_sum += usize::from(item.progress.min(100));
        }

        let average_progress = if counts.total > 0 {
            ((progress_sum * 2 + counts.total) / (counts.total * 2)) as u8
        } else {
            0
        };

        Self {
            key: key.into(),
            counts,
            high_priority,
            average_progress,
            completion_rate: counts.completion_rate(),
        }
    }
}

/// Which field items are grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    /// Group by department
    Department,
    /// Group by region
    Region,
}

impl GroupBy {
    /// The grouping key of an item.
    pub fn key<'a>(&self, item: &'a WorkItem) -> &'a str {
        match self {
            Self::Department => &item.department,
            Self::Region => &item.region,
        }
    }
}

/// One summary per distinct key of `items`, in first-seen order.
pub fn group(items: &[WorkItem], by: GroupBy) -> Vec<GroupSummary> {
    let mut keys: Vec<&str> = Vec::new();
    for item in items {
        let key = by.key(item);
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    group_with_keys(items, by, keys)
}

/// One summary per given key, including keys with no items.
pub fn group_with_keys<'k>(
    items: &[WorkItem],
    by: GroupBy,
    keys: impl IntoIterator<Item = &'k str>,
) -> Vec<GroupSummary> {
    keys.into_iter()
        .map(|key| GroupSummary::new(key, items.iter().filter(|item| by.key(item) == key)))
        .collect()
}

/// Department and region breakdowns of a set of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aggregation {
    /// Totals across all items
    pub overall: StatusCounts,

    /// Per-department summaries
    pub by_department: Vec<GroupSummary>,

    /// Per-region summaries
    pub by_region: Vec<GroupSummary>,
}

/// Aggregate `items` by department and by region.
pub fn aggregate(items: &[WorkItem]) -> Aggregation {
    Aggregation {
        overall: items.iter().collect(),
        by_department: group(items, GroupBy::Department),
        by_region: group(items, GroupBy::Region),
    }
}

/// Display band for a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RateBand {
    /// Healthy
    Good,
    /// Needs watching
    Fair,
    /// Behind
    Poor,
}

impl RateBand {
    /// Band for a completion rate: above 70 is good, above 40 fair.
    pub fn for_completion(rate: u8) -> Self {
        Self::banded(rate, 70, 40)
    }

    /// Band for an average progress: above 70 is good, above 30 fair.
    pub fn for_progress(progress: u8) -> Self {
        Self::banded(progress, 70, 30)
    }

    fn banded(value: u8, good: u8, fair: u8) -> Self {
        if value > good {
            Self::Good
        } else if value > fair {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}
