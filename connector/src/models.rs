/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Next status in the fixed cycle pending -> in_progress -> completed
    /// -> pending.
    pub fn advance(self) -> TaskStatus {
        match self {
            TaskStatus::Pending => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "pending"),
            TaskStatus::InProgress => write!(f, "in_progress"),
            TaskStatus::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
    pub responsible: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub creator: i64,
    pub created_at: DateTime<Utc>,
    /// Absent from the list endpoint, populated by the detail endpoint.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Project {
    pub fn task(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Append a server-confirmed task to the aggregate.
    pub fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Replace the task with the same id by its server-echoed version.
    /// A task unknown to the aggregate is left alone.
    pub fn replace_task(&mut self, task: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
        }
    }

    pub fn remove_task(&mut self, id: i64) {
        self.tasks.retain(|task| task.id != id);
    }

    /// Fold a PATCH echo into the aggregate. The detail serializer nests
    /// tasks, but if the echo carries none the held list is kept.
    pub fn apply_update(&mut self, updated: Project) {
        let tasks = if updated.tasks.is_empty() {
            std::mem::take(&mut self.tasks)
        } else {
            updated.tasks
        };

        *self = Project { tasks, ..updated };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn task(id: i64, status: TaskStatus) -> Task {
        Task {
            id,
            title: format!("task {}", id),
            description: None,
            status,
            due_date: None,
            responsible: 1,
            created_at: Utc.with_ymd_and_hms(2026, 1, 10, 9, 30, 0).unwrap(),
        }
    }

    fn project(tasks: Vec<Task>) -> Project {
        Project {
            id: 1,
            name: "Garden".to_string(),
            description: None,
            creator: 1,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap(),
            tasks,
        }
    }

    #[test]
    fn status_cycle_returns_to_pending_after_three_steps() {
        let mut status = TaskStatus::Pending;

        status = status.advance();
        assert_eq!(status, TaskStatus::InProgress);
        status = status.advance();
        assert_eq!(status, TaskStatus::Completed);
        status = status.advance();
        assert_eq!(status, TaskStatus::Pending);
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::from_str::<TaskStatus>("\"completed\"").unwrap(),
            TaskStatus::Completed
        );
    }

    #[test]
    fn push_task_appends_exactly_one() {
        let mut project = project(vec![task(1, TaskStatus::Pending)]);

        project.push_task(task(2, TaskStatus::Pending));

        assert_eq!(project.tasks.len(), 2);
        assert_eq!(project.tasks[1].id, 2);
    }

    #[test]
    fn replace_task_only_touches_matching_id() {
        let mut project = project(vec![task(1, TaskStatus::Pending), task(2, TaskStatus::Pending)]);

        project.replace_task(task(2, TaskStatus::InProgress));

        assert_eq!(project.tasks[0].status, TaskStatus::Pending);
        assert_eq!(project.tasks[1].status, TaskStatus::InProgress);
    }

    #[test]
    fn replace_unknown_task_is_a_no_op() {
        let mut project = project(vec![task(1, TaskStatus::Pending)]);

        project.replace_task(task(9, TaskStatus::Completed));

        assert_eq!(project.tasks.len(), 1);
        assert_eq!(project.tasks[0].id, 1);
    }

    #[test]
    fn remove_task_filters_by_id() {
        let mut project = project(vec![task(1, TaskStatus::Pending), task(2, TaskStatus::Pending)]);

        project.remove_task(1);

        assert_eq!(project.tasks.len(), 1);
        assert_eq!(project.tasks[0].id, 2);
    }

    #[test]
    fn apply_update_keeps_tasks_when_echo_has_none() {
        let mut current = project(vec![task(1, TaskStatus::Pending)]);
        let mut echo = project(vec![]);
        echo.name = "Garden (renamed)".to_string();
        echo.description = Some("spring cleanup".to_string());

        current.apply_update(echo);

        assert_eq!(current.name, "Garden (renamed)");
        assert_eq!(current.description.as_deref(), Some("spring cleanup"));
        assert_eq!(current.tasks.len(), 1);
    }

    #[test]
    fn apply_update_takes_echoed_tasks_when_present() {
        let mut current = project(vec![task(1, TaskStatus::Pending)]);
        let echo = project(vec![task(1, TaskStatus::Completed), task(2, TaskStatus::Pending)]);

        current.apply_update(echo);

        assert_eq!(current.tasks.len(), 2);
        assert_eq!(current.tasks[0].status, TaskStatus::Completed);
    }

    #[test]
    fn task_with_only_a_title_deserializes() {
        let bytes = br#"{"id": 3, "title": "Water the plants", "description": null, "status": "pending", "due_date": null, "responsible": 1, "created_at": "2026-02-01T12:00:00Z"}"#;
        let task: Task = serde_json::from_slice(bytes).unwrap();

        assert_eq!(task.title, "Water the plants");
        assert!(task.description.is_none());
        assert!(task.due_date.is_none());
        assert_eq!(task.status, TaskStatus::Pending);
    }
}
