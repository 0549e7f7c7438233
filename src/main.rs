/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod commands;
mod config;
mod input;
mod render;
mod session;

#[tokio::main]
pub async fn main() -> std::io::Result<()> {
    env_logger::init();
    commands::base::run_cli().await
}
