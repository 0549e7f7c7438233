/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::config::*;
use connector::RequestConfig;
use std::process::exit;

/// The authenticated-state token pair. Presence implies a logged-in user;
/// no expiry detection or refresh rotation happens client-side.
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

/// Hydrate the session from the persisted config, if one exists.
pub fn current() -> Option<Session> {
    let config = load_config();
    let access_token = config.get(&ConfigKey::AccessToken).cloned().flatten()?;
    let refresh_token = config.get(&ConfigKey::RefreshToken).cloned().flatten();

    Some(Session {
        access_token,
        refresh_token,
    })
}

/// Persist both tokens and mark the session authenticated.
pub fn login(access: String, refresh: String) {
    set_get_value(ConfigKey::AccessToken, Some(access), true);
    set_get_value(ConfigKey::RefreshToken, Some(refresh), true);
}

/// Clear both tokens and mark the session unauthenticated.
pub fn logout() {
    set_get_value(ConfigKey::AccessToken, Some(String::new()), true);
    set_get_value(ConfigKey::RefreshToken, Some(String::new()), true);
}

pub fn get_request_config() -> Result<RequestConfig, String> {
    let config = load_config();
    let server_url = if let Some(server_url) = config.get(&ConfigKey::Server).cloned().flatten() {
        server_url
    } else {
        return Err(
            "Server URL not set. Use `taskdeck config server <url>` to set it.".to_string(),
        );
    };

    Ok(RequestConfig {
        server_url,
        token: current().map(|session| session.access_token),
    })
}

/// Gate for authenticated commands: hands back a request config carrying
/// the bearer token, or sends the user to `taskdeck login`.
pub fn require_auth() -> RequestConfig {
    let config = match get_request_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    };

    if config.token.is_none() {
        eprintln!("Not logged in. Use `taskdeck login` to log in.");
        exit(1);
    }

    config
}
