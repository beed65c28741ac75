//! The create-work form.

use chrono::NaiveDate;
use adminview_core::{
    Officer, Priority, Time, ValidationErrors, WorkItem, WorkItemId, WorkStatus,
};
use serde::{Deserialize, Serialize};

/// Work item fields as entered on the create-work form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDraft {
    /// Short title
    pub title: String,

    /// Owning department. Use [`WorkDraft::set_department`] to change it.
    pub department: String,

    /// Region
    pub region: String,

    /// Selected officer id
    pub assigned_officer_id: String,

    /// Name of the selected officer
    pub assigned_officer_name: String,

    /// Priority, medium unless chosen
    pub priority: Priority,

    /// Planned start
    pub start_date: Option<NaiveDate>,

    /// Planned completion
    pub due_date: Option<NaiveDate>,

    /// Detailed description
    pub description: String,

    /// Initial status, pending unless chosen
    pub status: WorkStatus,
}

impl WorkDraft {
    /// An empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the department. Any selected officer is cleared.
    pub fn set_department(&mut self, department: impl Into<String>) {
        self.department = department.into();
        self.assigned_officer_id.clear();
        self.assigned_officer_name.clear();
    }

    /// Select an officer by id and fill in their name.
    ///
    /// An unknown id is kept with an empty name.
    pub fn select_officer(&mut self, id: impl Into<String>, officers: &[Officer]) {
        let id = id.into();
        self.assigned_officer_name = officers
            .iter()
            .find(|o| o.id.as_str() == id)
            .map(|o| o.name.clone())
            .unwrap_or_default();
        self.assigned_officer_id = id;
    }

    /// Officers offered for the current department.
    pub fn officer_choices<'a>(&self, officers: &'a [Officer]) -> Vec<&'a Officer> {
        officers_for(officers, &self.department)
    }

    /// Check every field, collecting one message per failing field.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        self.checked_dates().map(|_| ())
    }

    /// Start and due date, provided every field is valid.
    fn checked_dates(&self) -> Result<(NaiveDate, NaiveDate), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.title.trim().is_empty() {
            errors.add("title", "Title is required");
        }
        if self.department.is_empty() {
            errors.add("department", "Department is required");
        }
        if self.region.is_empty() {
            errors.add("region", "Region is required");
        }
        if self.assigned_officer_id.is_empty() {
            errors.add("assignedOfficerId", "Assigned officer is required");
        }
        if self.start_date.is_none() {
            errors.add("startDate", "Start date is required");
        }
        match (self.start_date, self.due_date) {
            (_, None) => errors.add("dueDate", "Due date is required"),
            (Some(start), Some(due)) if due < start => {
                errors.add("dueDate", "Due date must be after start date")
            }
            _ => {}
        }
        if self.description.trim().is_empty() {
            errors.add("description", "Description is required");
        }

        match (self.start_date, self.due_date) {
            (Some(start), Some(due)) if errors.is_empty() => Ok((start, due)),
            _ => Err(errors),
        }
    }

    /// Turn a valid draft into a new work item.
    pub fn into_work_item(self, created_by: &str, now: Time) -> Result<WorkItem, ValidationErrors> {
        let (start_date, due_date) = self.checked_dates()?;

        Ok(WorkItem {
            id: WorkItemId::generate(now),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            department: self.department,
            region: self.region,
            assigned_officer: self.assigned_officer_id,
            assigned_officer_name: self.assigned_officer_name,
            start_date,
            due_date,
            status: self.status,
            progress: 0,
            priority: self.priority,
            notes: Vec::new(),
            documents: Vec::new(),
            created_by: Some(created_by.to_string()),
            created_at: Some(now),
        })
    }
}

/// Officers of `department`, or all officers when it is empty.
pub fn officers_for<'a>(officers: &'a [Officer], department: &str) -> Vec<&'a Officer> {
    officers
        .iter()
        .filter(|o| department.is_empty() || o.department == department)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use adminview_storage::fixtures;
    use chrono::DateTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn filled() -> WorkDraft {
        let officers = fixtures::officers().unwrap();
        let mut draft = WorkDraft::new();
        draft.title = "  Clinic Inspection ".to_string();
        draft.set_department("Health");
        draft.region = "East".to_string();
        draft.select_officer("OFF003", &officers);
        draft.start_date = Some(date(2023, 12, 1));
        draft.due_date = Some(date(2023, 12, 15));
        draft.description = "Inspect rural clinics".to_string();
        draft
    }

    #[test]
    fn test_defaults() {
        let draft = WorkDraft::new();
        assert_eq!(draft.priority, Priority::Medium);
        assert_eq!(draft.status, WorkStatus::Pending);
    }

    #[test]
    fn test_empty_draft_messages() {
        let errors = WorkDraft::new().validate().unwrap_err();
        assert_eq!(errors.len(), 7);
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.get("assignedOfficerId"), Some("Assigned officer is required"));
        assert_eq!(errors.get("dueDate"), Some("Due date is required"));
        assert_eq!(errors.get("description"), Some("Description is required"));
    }

    #[test]
    fn test_due_before_start() {
        let mut draft = filled();
        draft.due_date = Some(date(2023, 11, 30));
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("dueDate"), Some("Due date must be after start date"));

        // Same day is accepted
        draft.due_date = draft.start_date;
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_missing_due_date_is_reported_on_due_date() {
        let mut draft = filled();
        draft.due_date = None;
        let errors = draft.into_work_item("collector1", chrono::Utc::now()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("dueDate"), Some("Due date is required"));
        assert_eq!(errors.get("startDate"), None);
    }

    #[test]
    fn test_department_change_clears_officer() {
        let mut draft = filled();
        assert_eq!(draft.assigned_officer_name, "Robert Johnson");

        draft.set_department("Education");
        assert!(draft.assigned_officer_id.is_empty());
        assert!(draft.assigned_officer_name.is_empty());
    }

    #[test]
    fn test_officer_choices_follow_department() {
        let officers = fixtures::officers().unwrap();
        let mut draft = WorkDraft::new();
        assert_eq!(draft.officer_choices(&officers).len(), 5);

        draft.set_department("Revenue");
        let names: Vec<_> = draft.officer_choices(&officers).iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["Jane Smith"]);

        draft.select_officer("OFF999", &officers);
        assert_eq!(draft.assigned_officer_id, "OFF999");
        assert!(draft.assigned_officer_name.is_empty());
    }

    #[test]
    fn test_into_work_item() {
        let now = DateTime::from_timestamp_millis(1_700_012_345_678).unwrap();
        let item = filled().into_work_item("collector1", now).unwrap();

        assert_eq!(item.id.as_str(), "W12345678");
        assert_eq!(item.title, "Clinic Inspection");
        assert_eq!(item.assigned_officer, "OFF003");
        assert_eq!(item.progress, 0);
        assert_eq!(item.status, WorkStatus::Pending);
        assert_eq!(item.created_by.as_deref(), Some("collector1"));
        assert_eq!(item.created_at, Some(now));
        assert!(item.notes.is_empty());
    }
}
