//! Work item filtering and reporting.
//!
//! Search and multi-field filtering, department/region breakdowns with
//! completion rates, and time-ranged progress reports.

#![warn(missing_docs)]

pub mod filter;
pub mod aggregate;
pub mod report;
pub mod service;

pub use filter::{WorkItemFilter, FilterOptions};
pub use aggregate::{
    aggregate, group, group_with_keys, rounded_percentage, Aggregation, GroupBy, GroupSummary,
    RateBand, StatusCounts,
};
pub use report::{Report, TimeRange};
pub use service::{ReportService, WorkItemQueries};
