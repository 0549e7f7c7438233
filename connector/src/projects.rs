/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::models::Project;
use crate::*;
use serde::Serialize;

#[derive(Serialize, Debug)]
struct MakeProjectRequest {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Serialize, Debug)]
struct PatchProjectRequest {
    pub name: String,
    // always sent; null clears the stored description
    pub description: Option<String>,
}

pub async fn get(config: RequestConfig) -> Result<Vec<Project>, ApiError> {
    let res = get_client(config, "projects/".to_string(), RequestType::GET, true)?
        .send()
        .await?;

    parse_response(res).await
}

pub async fn post(
    config: RequestConfig,
    name: String,
    description: Option<String>,
) -> Result<Project, ApiError> {
    let req = MakeProjectRequest { name, description };

    let res = get_client(config, "projects/".to_string(), RequestType::POST, true)?
        .json(&req)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn get_project(config: RequestConfig, project: i64) -> Result<Project, ApiError> {
    let res = get_client(
        config,
        format!("projects/{}/", project),
        RequestType::GET,
        true,
    )?
    .send()
    .await?;

    parse_response(res).await
}

pub async fn patch_project(
    config: RequestConfig,
    project: i64,
    name: String,
    description: Option<String>,
) -> Result<Project, ApiError> {
    let req = PatchProjectRequest { name, description };

    let res = get_client(
        config,
        format!("projects/{}/", project),
        RequestType::PATCH,
        true,
    )?
    .json(&req)
    .send()
    .await?;

    parse_response(res).await
}

pub async fn delete_project(config: RequestConfig, project: i64) -> Result<(), ApiError> {
    let res = get_client(
        config,
        format!("projects/{}/", project),
        RequestType::DELETE,
        true,
    )?
    .send()
    .await?;

    parse_empty_response(res).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_body_clears_description_with_null() {
        let req = PatchProjectRequest {
            name: "Garden".to_string(),
            description: None,
        };

        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"name":"Garden","description":null}"#
        );
    }

    #[test]
    fn patch_body_sends_edited_description() {
        let req = PatchProjectRequest {
            name: "Garden".to_string(),
            description: Some("spring cleanup".to_string()),
        };

        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"name":"Garden","description":"spring cleanup"}"#
        );
    }
}
