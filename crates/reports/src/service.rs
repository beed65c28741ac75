//! Report service over storage.

use std::sync::Arc;
use async_trait::async_trait;
use chrono::NaiveDate;
use adminview_core::WorkItem;
use adminview_storage::{Result, Storage};
use tracing::debug;
use crate::aggregate::{aggregate, Aggregation};
use crate::filter::{FilterOptions, WorkItemFilter};
use crate::report::{Report, TimeRange};

/// Read-only views of the work item collection.
#[async_trait]
pub trait WorkItemQueries: Send + Sync {
    /// Items matching the filter, in storage order.
    async fn search(&self, filter: &WorkItemFilter) -> Result<Vec<WorkItem>>;

    /// Distinct departments, regions and statuses.
    async fn options(&self) -> Result<FilterOptions>;

    /// Department and region breakdown of the items matching the filter.
    async fn aggregate(&self, filter: &WorkItemFilter) -> Result<Aggregation>;

    /// Progress report for a time range.
    async fn report(&self, range: TimeRange, today: NaiveDate) -> Result<Report>;
}

/// Query service reading straight from storage on every call.
pub struct ReportService<S: Storage> {
    storage: Arc<S>,
}

impl<S: Storage> ReportService<S> {
    /// Create a new report service.
    pub fn new(storage: S) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }
}

#[async_trait]
impl<S: Storage + 'static> WorkItemQueries for ReportService<S> {
    async fn search(&self, filter: &WorkItemFilter) -> Result<Vec<WorkItem>> {
        let items = self.storage.list_work_items().await?;
        let matched: Vec<WorkItem> = filter.apply(&items).into_iter().cloned().collect();
        debug!(total = items.len(), matched = matched.len(), ?filter, "Filtered work items");
        Ok(matched)
    }

    async fn options(&self) -> Result<FilterOptions> {
        let items = self.storage.list_work_items().await?;
        Ok(FilterOptions::from_items(&items))
    }

    async fn aggregate(&self, filter: &WorkItemFilter) -> Result<Aggregation> {
        let matched = self.search(filter).await?;
        Ok(aggregate(&matched))
    }

    async fn report(&self, range: TimeRange, today: NaiveDate) -> Result<Report> {
        let items = self.storage.list_work_items().await?;
        let report = Report::build(&items, range, today);
        debug!(%range, %today, total = report.total(), "Built report");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adminview_core::WorkStatus;
    use adminview_storage::MemoryStorage;

    fn service() -> ReportService<MemoryStorage> {
        ReportService::new(MemoryStorage::seeded().unwrap())
    }

    #[tokio::test]
    async fn test_search_through_service() {
        let found = service()
            .search(&WorkItemFilter::new().with_status(WorkStatus::Pending))
            .await
            .unwrap();
        let ids: Vec<_> = found.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["WRK003", "WRK005"]);
    }

    #[tokio::test]
    async fn test_aggregate_through_service() {
        let agg = service()
            .aggregate(&WorkItemFilter::new().with_department("Agriculture"))
            .await
            .unwrap();
        assert_eq!(agg.overall.total, 2);
        assert_eq!(agg.by_department.len(), 1);
        assert_eq!(agg.by_region.len(), 2);
    }

    #[tokio::test]
    async fn test_report_on_empty_storage() {
        let service = ReportService::new(MemoryStorage::new());
        let today = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        let report = service.report(TimeRange::All, today).await.unwrap();
        assert_eq!(report.total(), 0);
        assert!(service.options().await.unwrap().departments.is_empty());
    }
}
