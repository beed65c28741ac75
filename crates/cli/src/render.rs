//! Terminal output.

use adminview_auth::{default_permissions, DepartmentSummary, Route};
use adminview_core::{Account, Assignment, Role, SessionUser, WorkItem, WorkStatus};
use adminview_reports::{Aggregation, FilterOptions, GroupSummary, RateBand, Report};
use serde::Serialize;

/// Pretty-print any serializable value as JSON.
pub fn json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn session(user: &SessionUser) {
    println!("{} ({})", user.full_name, user.username);
    println!("  Role: {}", user.role.label());
    println!("  Department: {}", user.department);
    let pages: Vec<String> = Route::accessible_by(user.role)
        .into_iter()
        .map(|r| r.to_string())
        .collect();
    println!("  Pages: {}", pages.join(", "));
}

pub fn work_list(items: &[WorkItem]) {
    println!("Work items ({})", items.len());
    for item in items {
        println!(
            "  {} | {:<11} | {:>3}% | {:<6} | {} | {} | {}",
            item.id,
            item.status.as_str(),
            item.progress,
            item.priority.as_str(),
            item.department,
            item.assigned_officer_name,
            item.title,
        );
    }
}

pub fn work_detail(item: &WorkItem) {
    println!("Work item: {}", item.id);
    println!("  Title: {}", item.title);
    println!("  Description: {}", item.description);
    println!("  Department: {}", item.department);
    println!("  Region: {}", item.region);
    println!("  Officer: {} ({})", item.assigned_officer_name, item.assigned_officer);
    println!("  Dates: {} -> {}", item.start_date, item.due_date);
    println!("  Status: {}", item.status);
    println!("  Priority: {}", item.priority);
    println!("  Progress: {}%", item.progress);
    if let Some(created_by) = &item.created_by {
        println!("  Created by: {}", created_by);
    }

    if item.notes.is_empty() {
        println!("  No notes available.");
    } else {
        println!("  Notes:");
        for note in &item.notes {
            println!("    [{}] {}: {}", note.date, note.author, note.content);
        }
    }

    if item.documents.is_empty() {
        println!("  No documents available.");
    } else {
        println!("  Documents:");
        for doc in &item.documents {
            println!("    {} ({:?}, {})", doc.name, doc.kind, doc.upload_date);
        }
    }
}

pub fn filter_options(options: &FilterOptions) {
    println!("Departments: {}", options.departments.join(", "));
    println!("Regions: {}", options.regions.join(", "));
    let statuses: Vec<&str> = options.statuses.iter().map(WorkStatus::as_str).collect();
    println!("Statuses: {}", statuses.join(", "));
}

fn group_rows(title: &str, rows: &[GroupSummary]) {
    println!("{}", title);
    for row in rows {
        println!(
            "  {:<16} total {:>2} | done {:>2} | active {:>2} | pending {:>2} | high {:>2} | avg {:>3}% ({}) | rate {:>3}% ({})",
            row.key,
            row.counts.total,
            row.counts.completed,
            row.counts.in_progress,
            row.counts.pending,
            row.high_priority,
            row.average_progress,
            RateBand::for_progress(row.average_progress).as_str(),
            row.completion_rate,
            RateBand::for_completion(row.completion_rate).as_str(),
        );
    }
}

pub fn aggregation(agg: &Aggregation) {
    let overall = &agg.overall;
    println!(
        "Total {} | completed {} | in progress {} | pending {} | completion {}%",
        overall.total,
        overall.completed,
        overall.in_progress,
        overall.pending,
        overall.completion_rate(),
    );
    group_rows("By department", &agg.by_department);
    group_rows("By region", &agg.by_region);
}

pub fn report(report: &Report) {
    println!("Report ({}, as of {})", report.range, report.today);
    println!(
        "  Total {} | completed {} | in progress {} | pending {}",
        report.total(),
        report.status_count(WorkStatus::Completed),
        report.status_count(WorkStatus::InProgress),
        report.status_count(WorkStatus::Pending),
    );
    println!(
        "  Completion rate {}% ({}) | high priority {}",
        report.completion_rate,
        RateBand::for_completion(report.completion_rate).as_str(),
        report.high_priority,
    );
    let priorities: Vec<String> = report
        .priorities
        .iter()
        .map(|(p, n)| format!("{} {}", p, n))
        .collect();
    println!("  Priorities: {}", priorities.join(", "));
    group_rows("By department", &report.by_department);
    group_rows("By region", &report.by_region);
}

pub fn assignments(items: &[Assignment]) {
    println!("Assignments ({})", items.len());
    for a in items {
        println!(
            "  {:>3} | {:<11} | {:<6} | due {} | {}",
            a.id.0,
            a.status.as_str(),
            a.priority.as_str(),
            a.deadline,
            a.title,
        );
    }
}

pub fn accounts(accounts: &[Account]) {
    println!("Users ({})", accounts.len());
    for account in accounts {
        println!(
            "  {} | {:<16} | {:<15} | {:<14} | {:<8} | last login {}",
            account.id,
            account.username,
            account.role.label(),
            account.department,
            if account.is_active { "active" } else { "inactive" },
            account.last_login,
        );
    }
}

pub fn account(account: &Account) {
    println!("User: {}", account.id);
    println!("  Name: {} ({})", account.full_name, account.username);
    println!("  Email: {}", account.email);
    println!("  Department: {}", account.department);
    println!("  Role: {}", account.role.label());
    println!("  Active: {}", account.is_active);
    let permissions: Vec<&str> = account.permissions.iter().map(|p| p.label()).collect();
    println!("  Permissions: {}", permissions.join(", "));
}

pub fn departments(summaries: &[DepartmentSummary]) {
    for summary in summaries {
        let mut active = summary.active_preview.join(", ");
        if summary.more_active > 0 {
            active.push_str(&format!(" +{} more", summary.more_active));
        }
        println!("  {:<16} {} users | {}", summary.department, summary.total, active);
    }
}

pub fn roles() {
    for role in Role::ALL {
        let permissions: Vec<&str> = default_permissions(role).iter().map(|p| p.label()).collect();
        println!("{} ({})", role.label(), role);
        println!("  {}", permissions.join(", "));
    }
}
