/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::project::selected_project;
use crate::input::*;
use crate::render;
use crate::session::require_auth;
use chrono::{Local, NaiveDate};
use clap::{Subcommand, arg};
use connector::{projects, tasks};
use std::process::exit;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a task to the selected project
    Add {
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        /// Due date as YYYY-MM-DD
        #[arg(short = 'u', long)]
        due_date: Option<String>,
    },
    /// Move a task to the next status in the cycle
    /// pending -> in_progress -> completed -> pending
    Advance {
        task: i64,
    },
    /// Delete a task from the selected project
    Delete {
        task: i64,
    },
}

fn parse_due_date(raw: &str) -> NaiveDate {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => {
            eprintln!("Invalid due date \"{}\" (expected YYYY-MM-DD).", raw);
            exit(1);
        }
    }
}

pub async fn handle(cmd: Commands) {
    match cmd {
        Commands::Add {
            title,
            description,
            due_date,
        } => {
            let project = selected_project();
            let config = require_auth();

            let input_fields = vec![
                field("Title", title),
                optional("Description", description),
                optional("Due Date", due_date),
            ];
            let input = handle_input(input_fields, true);

            let due_date = input.get("Due Date").map(|raw| parse_due_date(raw));

            let mut current = match projects::get_project(config.clone(), project).await {
                Ok(res) => res,
                Err(e) => {
                    eprintln!("Failed to load project details: {}", e);
                    exit(1);
                }
            };

            let task = match tasks::post(
                config,
                input.get("Title").unwrap().clone(),
                input.get("Description").cloned(),
                due_date,
                project,
            )
            .await
            {
                Ok(task) => task,
                Err(e) => {
                    log::error!("task create request failed: {:?}", e);
                    eprintln!("Failed to create the task:\n{}", e);
                    exit(1);
                }
            };

            current.push_task(task);
            render::render_project(&current, Local::now().date_naive());
        }

        Commands::Advance { task } => {
            let project = selected_project();
            let config = require_auth();

            let mut current = match projects::get_project(config.clone(), project).await {
                Ok(res) => res,
                Err(e) => {
                    eprintln!("Failed to load project details: {}", e);
                    exit(1);
                }
            };

            let Some(found) = current.task(task) else {
                eprintln!("Task {} not found in the selected project.", task);
                exit(1);
            };

            // Independent partial update, no version check: last write wins.
            let next = found.status.advance();

            let updated = match tasks::patch_status(config, task, next).await {
                Ok(updated) => updated,
                Err(e) => {
                    log::error!("task status request failed: {:?}", e);
                    eprintln!("Failed to update the task status: {}", e);
                    exit(1);
                }
            };

            println!("Task {} is now {}.", updated.id, updated.status);
            current.replace_task(updated);
            render::render_project(&current, Local::now().date_naive());
        }

        Commands::Delete { task } => {
            let project = selected_project();
            let config = require_auth();

            let mut current = match projects::get_project(config.clone(), project).await {
                Ok(res) => res,
                Err(e) => {
                    eprintln!("Failed to load project details: {}", e);
                    exit(1);
                }
            };

            if current.task(task).is_none() {
                eprintln!("Task {} not found in the selected project.", task);
                exit(1);
            }

            if let Err(e) = tasks::delete_task(config, task).await {
                log::error!("task delete request failed: {:?}", e);
                eprintln!("Failed to delete the task: {}", e);
                exit(1);
            }

            current.remove_task(task);
            println!("Task deleted.");
            render::render_project(&current, Local::now().date_naive());
        }
    }
}
