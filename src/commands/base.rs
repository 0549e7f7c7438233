/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use crate::config::*;
use crate::input::*;
use crate::session;
use clap::{CommandFactory, Parser, Subcommand, arg};
use clap_complete::{Shell, generate};
use connector::auth;
use std::io;
use std::process::exit;

#[derive(Parser, Debug)]
#[command(name = "Taskdeck", display_name = "Taskdeck", bin_name = "taskdeck", author = "Wavelens", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<MainCommands>,
    #[arg(long, value_enum)]
    generate_completions: Option<Shell>,
}

#[derive(Subcommand, Debug)]
enum MainCommands {
    /// Get or set a configuration value
    Config {
        key: String,
        value: Option<String>,
    },
    /// Show the configured server and session state
    Status,
    /// Create a new account
    Register {
        #[arg(short, long)]
        username: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Log in and store the session tokens
    Login {
        #[arg(short, long)]
        username: Option<String>,
    },
    /// Clear the stored session tokens
    Logout,
    Project {
        #[command(subcommand)]
        cmd: project::Commands,
    },
    Task {
        #[command(subcommand)]
        cmd: task::Commands,
    },
}

pub async fn run_cli() -> std::io::Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.generate_completions {
        let mut app = Cli::command();
        let bin_name = app.get_name().to_string();
        generate(shell, &mut app, bin_name, &mut io::stdout());
        return Ok(());
    }

    if let Some(cmd) = cli.cmd {
        match cmd {
            MainCommands::Config { key, value } => {
                set_get_value_from_string(key, value, false)
                    .map_err(|_| {
                        exit(1);
                    })
                    .unwrap();
            }

            MainCommands::Status => {
                let server_url = set_get_value(ConfigKey::Server, None, true);

                match server_url {
                    Some(server_url) => println!("Server: {}", server_url),
                    None => {
                        eprintln!(
                            "Server URL is not set. Use `taskdeck config server <url>` to set it."
                        );
                        exit(1);
                    }
                }

                if session::current().is_none() {
                    eprintln!("Not logged in. Use `taskdeck login` to log in.");
                    exit(1);
                }

                println!("Logged in.");
            }

            MainCommands::Register { username, email } => {
                let server_url = set_get_value(ConfigKey::Server, None, true);

                if server_url.is_none() {
                    set_get_value(ConfigKey::Server, Some(ask_for_input("Server URL")), true);
                }

                // Resolved before any credentials are collected.
                let config = match session::get_request_config() {
                    Ok(config) => config,
                    Err(e) => {
                        eprintln!("{}", e);
                        exit(1);
                    }
                };

                let input_fields = vec![field("Username", username), field("Email", email)];
                let input = handle_input(input_fields, true);

                let password = ask_for_password("Password");
                let password2 = ask_for_password("Confirm Password");

                // Checked before anything goes over the wire.
                if let Err(e) = auth::check_password_confirmation(&password, &password2) {
                    eprintln!("{}", e);
                    exit(1);
                }

                match auth::post_register(
                    config,
                    input.get("Username").unwrap().clone(),
                    input.get("Email").unwrap().clone(),
                    password,
                    password2,
                )
                .await
                {
                    Ok(()) => println!("Registration successful. Please log in."),
                    Err(e) => {
                        log::error!("registration request failed: {:?}", e);
                        eprintln!("Registration failed:\n{}", e);
                        exit(1);
                    }
                }
            }

            MainCommands::Login { username } => {
                let server_url = set_get_value(ConfigKey::Server, None, true);

                if server_url.is_none() {
                    set_get_value(ConfigKey::Server, Some(ask_for_input("Server URL")), true);
                }

                let username = if let Some(username) = username {
                    username
                } else {
                    ask_for_input("Username")
                };

                let password = ask_for_password("Password");

                let config = match session::get_request_config() {
                    Ok(config) => config,
                    Err(e) => {
                        eprintln!("{}", e);
                        exit(1);
                    }
                };

                match auth::post_login(config, username, password).await {
                    Ok(tokens) => {
                        session::login(tokens.access, tokens.refresh);
                        println!("Login successful.");
                    }
                    Err(e) => {
                        log::error!("login request failed: {:?}", e);
                        eprintln!("Login failed: {}", e);
                        exit(1);
                    }
                }
            }

            MainCommands::Logout => {
                session::logout();
                println!("Logged out.");
            }

            MainCommands::Project { cmd } => project::handle(cmd).await,
            MainCommands::Task { cmd } => task::handle(cmd).await,
        }
    } else {
        eprintln!("No subcommand provided");
        exit(1);
    }

    exit(0);
}
