//! Work item search and filtering.

use adminview_core::{WorkItem, WorkStatus};
use serde::{Deserialize, Serialize};

/// Predicates for narrowing down a list of work items.
///
/// Every predicate is optional. An empty search term or an empty
/// department/region string matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItemFilter {
    /// Case-insensitive substring of id, title, department or officer name
    pub search: String,

    /// Exact department
    pub department: Option<String>,

    /// Exact region
    pub region: Option<String>,

    /// Exact status
    pub status: Option<WorkStatus>,
}

impl WorkItemFilter {
    /// A filter that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Restrict to one department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Restrict to one region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Restrict to one status.
    pub fn with_status(mut self, status: WorkStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// True when no predicate is set.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && is_unset(&self.department)
            && is_unset(&self.region)
            && self.status.is_none()
    }

    /// Check a single item against every predicate.
    pub fn matches(&self, item: &WorkItem) -> bool {
        self.matches_search(item)
            && matches_exact(&self.department, &item.department)
            && matches_exact(&self.region, &item.region)
            && self.status.map_or(true, |s| s == item.status)
    }

    /// Items matching the filter, in input order.
    pub fn apply<'a>(&self, items: &'a [WorkItem]) -> Vec<&'a WorkItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }

    fn matches_search(&self, item: &WorkItem) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [
            item.id.as_str(),
            item.title.as_str(),
            item.department.as_str(),
            item.assigned_officer_name.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

fn is_unset(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

fn matches_exact(wanted: &Option<String>, actual: &str) -> bool {
    match wanted.as_deref() {
        None | Some("") => true,
        Some(wanted) => wanted == actual,
    }
}

/// Distinct values offered in filter drop-downs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Departments in first-seen order
    pub departments: Vec<String>,

    /// Regions in first-seen order
    pub regions: Vec<String>,

    /// Statuses in first-seen order
    pub statuses: Vec<WorkStatus>,
}

impl FilterOptions {
    /// Collect the options present in `items`.
    pub fn from_items(items: &[WorkItem]) -> Self {
        let mut options = Self::default();
        for item in items {
            push_unique(&mut options.departments, &item.department);
            push_unique(&mut options.regions, &item.region);
            if !options.statuses.contains(&item.status) {
                options.statuses.push(item.status);
            }
        }
        options
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}
