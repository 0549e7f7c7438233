/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDate;
use colored::*;
use connector::models::{Project, Task, TaskStatus};

/// A task is overdue once its due date has passed and it was not completed.
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    match task.due_date {
        Some(due) => due < today && task.status != TaskStatus::Completed,
        None => false,
    }
}

pub fn badge_text(task: &Task, today: NaiveDate) -> &'static str {
    if is_overdue(task, today) {
        return "OVERDUE";
    }

    match task.status {
        TaskStatus::Pending => "PENDING",
        TaskStatus::InProgress => "IN PROGRESS",
        TaskStatus::Completed => "COMPLETED",
    }
}

fn status_badge(task: &Task, today: NaiveDate) -> ColoredString {
    let text = badge_text(task, today);

    if is_overdue(task, today) {
        return text.red().bold();
    }

    match task.status {
        TaskStatus::Pending => text.yellow(),
        TaskStatus::InProgress => text.blue(),
        TaskStatus::Completed => text.green(),
    }
}

pub fn render_task_line(task: &Task, today: NaiveDate) {
    let title = if task.status == TaskStatus::Completed {
        task.title.strikethrough().dimmed()
    } else {
        task.title.bold()
    };

    let due = match task.due_date {
        Some(due) => format!("  (due {})", due).dimmed(),
        None => "".dimmed(),
    };

    println!(
        "  {:>4}  [{}]  {}{}",
        task.id,
        status_badge(task, today),
        title,
        due
    );
}

pub fn render_project(project: &Project, today: NaiveDate) {
    println!("{}", project.name.bold());
    match &project.description {
        Some(description) if !description.is_empty() => println!("{}", description),
        _ => println!("{}", "This project has no description.".dimmed()),
    }
    println!();

    if project.tasks.is_empty() {
        println!("No tasks in this project yet.");
        return;
    }

    println!("Tasks:");
    for task in &project.tasks {
        render_task_line(task, today);
    }
}
