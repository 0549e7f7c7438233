/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::models::{Task, TaskStatus};
use crate::*;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Serialize, Debug)]
struct MakeTaskRequest {
    pub title: String,
    pub description: Option<String>,
    // null when no due date was given
    pub due_date: Option<NaiveDate>,
    pub project: i64,
}

#[derive(Serialize, Debug)]
struct PatchTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

pub async fn post(
    config: RequestConfig,
    title: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
    project: i64,
) -> Result<Task, ApiError> {
    let req = MakeTaskRequest {
        title,
        description,
        due_date,
        project,
    };

    let res = get_client(config, "tasks/".to_string(), RequestType::POST, true)?
        .json(&req)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn patch_status(
    config: RequestConfig,
    task: i64,
    status: TaskStatus,
) -> Result<Task, ApiError> {
    let req = PatchTaskRequest {
        title: None,
        description: None,
        status: Some(status),
        due_date: None,
    };

    let res = get_client(config, format!("tasks/{}/", task), RequestType::PATCH, true)?
        .json(&req)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn delete_task(config: RequestConfig, task: i64) -> Result<(), ApiError> {
    let res = get_client(
        config,
        format!("tasks/{}/", task),
        RequestType::DELETE,
        true,
    )?
    .send()
    .await?;

    parse_empty_response(res).await
}
