/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod auth;
pub mod models;
pub mod projects;
pub mod tasks;

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub server_url: String,
    pub token: Option<String>,
}

pub type RequestType = reqwest::Method;

/// Field name -> list of messages, as the backend returns for 400s.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Connection error. Please check the server URL and try again.")]
    Connection(#[from] reqwest::Error),

    #[error("{}", render_field_errors(.0))]
    Validation(FieldErrors),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Request failed ({0}): {1}")]
    Api(StatusCode, String),

    #[error("Failed to decode server response: {0}")]
    Decode(#[from] serde_json::Error),
}

fn render_field_errors(fields: &FieldErrors) -> String {
    fields
        .iter()
        .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Deserialize)]
struct DetailBody {
    detail: String,
}

fn error_from_body(status: StatusCode, bytes: &[u8]) -> ApiError {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        let detail = serde_json::from_slice::<DetailBody>(bytes)
            .map(|body| body.detail)
            .unwrap_or_else(|_| "Authentication required.".to_string());
        return ApiError::Unauthorized(detail);
    }

    if let Ok(fields) = serde_json::from_slice::<FieldErrors>(bytes) {
        return ApiError::Validation(fields);
    }

    if let Ok(body) = serde_json::from_slice::<DetailBody>(bytes) {
        return ApiError::Api(status, body.detail);
    }

    ApiError::Api(status, String::from_utf8_lossy(bytes).into_owned())
}

/// Decode a response body once the status and bytes are known. Split out of
/// the async path so the mapping is testable without a live server.
pub fn parse_body<T: DeserializeOwned>(status: StatusCode, bytes: &[u8]) -> Result<T, ApiError> {
    if status.is_success() {
        return Ok(serde_json::from_slice(bytes)?);
    }

    Err(error_from_body(status, bytes))
}

/// Like [`parse_body`], for endpoints whose success body is unused
/// (DELETE returns 204, register returns the created user).
pub fn parse_empty(status: StatusCode, bytes: &[u8]) -> Result<(), ApiError> {
    if status.is_success() {
        return Ok(());
    }

    Err(error_from_body(status, bytes))
}

pub(crate) async fn parse_response<T: DeserializeOwned>(
    res: reqwest::Response,
) -> Result<T, ApiError> {
    let status = res.status();
    let bytes = res.bytes().await?;
    parse_body(status, &bytes)
}

pub(crate) async fn parse_empty_response(res: reqwest::Response) -> Result<(), ApiError> {
    let status = res.status();
    let bytes = res.bytes().await?;
    parse_empty(status, &bytes)
}

pub(crate) fn get_client(
    config: RequestConfig,
    endpoint: String,
    request_type: RequestType,
    auth: bool,
) -> Result<reqwest::RequestBuilder, ApiError> {
    let client = reqwest::Client::new();
    let mut client = client.request(
        request_type,
        format!("{}/{}", config.server_url.trim_end_matches('/'), endpoint),
    );

    client = client.header("Content-Type", "application/json");

    if !auth {
        return Ok(client);
    }

    let token = if let Some(token) = config.token {
        token
    } else {
        return Err(ApiError::Unauthorized(
            "Not logged in. Use `taskdeck login` to log in.".to_string(),
        ));
    };

    client = client.header("Authorization", format!("Bearer {}", token));

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Project;

    #[test]
    fn parse_body_decodes_success_payload() {
        let bytes = br#"{"id": 7, "name": "Garden", "description": null, "creator": 1, "created_at": "2026-01-10T09:30:00Z", "tasks": []}"#;
        let project: Project = parse_body(StatusCode::OK, bytes).unwrap();

        assert_eq!(project.id, 7);
        assert_eq!(project.name, "Garden");
        assert!(project.description.is_none());
        assert!(project.tasks.is_empty());
    }

    #[test]
    fn parse_body_maps_field_errors() {
        let bytes = br#"{"username": ["A user with that username already exists."], "email": ["Enter a valid email address."]}"#;
        let err = parse_body::<Project>(StatusCode::BAD_REQUEST, bytes).unwrap_err();

        match err {
            ApiError::Validation(fields) => {
                assert_eq!(fields.len(), 2);
                assert_eq!(
                    fields["username"],
                    vec!["A user with that username already exists."]
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn parse_body_maps_unauthorized_detail() {
        let bytes = br#"{"detail": "No active account found with the given credentials"}"#;
        let err = parse_body::<Project>(StatusCode::UNAUTHORIZED, bytes).unwrap_err();

        match err {
            ApiError::Unauthorized(detail) => {
                assert_eq!(detail, "No active account found with the given credentials")
            }
            other => panic!("expected unauthorized error, got {:?}", other),
        }
    }

    #[test]
    fn parse_body_falls_back_to_raw_body() {
        let err = parse_body::<Project>(StatusCode::INTERNAL_SERVER_ERROR, b"server exploded")
            .unwrap_err();

        match err {
            ApiError::Api(status, body) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "server exploded");
            }
            other => panic!("expected api error, got {:?}", other),
        }
    }

    #[test]
    fn parse_empty_accepts_no_content() {
        parse_empty(StatusCode::NO_CONTENT, b"").unwrap();
    }

    #[test]
    fn validation_errors_render_one_line_per_field() {
        let mut fields = FieldErrors::new();
        fields.insert(
            "password".to_string(),
            vec!["This field is required.".to_string()],
        );
        fields.insert(
            "username".to_string(),
            vec!["Too short.".to_string(), "Reserved name.".to_string()],
        );

        let rendered = ApiError::Validation(fields).to_string();
        assert_eq!(
            rendered,
            "password: This field is required.\nusername: Too short., Reserved name."
        );
    }
}
