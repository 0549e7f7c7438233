/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Debug)]
struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Client-side confirmation check, run before any request is issued.
/// A mismatch is reported under the `password2` field like a server
/// validation error would be.
pub fn check_password_confirmation(password: &str, password2: &str) -> Result<(), ApiError> {
    if password == password2 {
        return Ok(());
    }

    let mut fields = FieldErrors::new();
    fields.insert(
        "password2".to_string(),
        vec!["Passwords do not match.".to_string()],
    );

    Err(ApiError::Validation(fields))
}

pub async fn post_login(
    config: RequestConfig,
    username: String,
    password: String,
) -> Result<TokenPair, ApiError> {
    let req = LoginRequest { username, password };

    let res = get_client(config, "auth/login/".to_string(), RequestType::POST, false)?
        .json(&req)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn post_register(
    config: RequestConfig,
    username: String,
    email: String,
    password: String,
    password2: String,
) -> Result<(), ApiError> {
    check_password_confirmation(&password, &password2)?;

    let req = RegisterRequest {
        username,
        email,
        password,
        password2,
    };

    let res = get_client(config, "register/".to_string(), RequestType::POST, false)?
        .json(&req)
        .send()
        .await?;

    parse_empty_response(res).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_passwords_pass_the_confirmation_check() {
        check_password_confirmation("hunter22!A", "hunter22!A").unwrap();
    }

    #[test]
    fn mismatched_passwords_yield_a_password2_error() {
        let err = check_password_confirmation("hunter22!A", "hunter22!B").unwrap_err();

        match err {
            ApiError::Validation(fields) => {
                assert_eq!(fields.len(), 1);
                assert_eq!(fields["password2"], vec!["Passwords do not match."]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
