/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::config::*;
use crate::input::*;
use crate::render;
use crate::session::require_auth;
use chrono::Local;
use clap::{Subcommand, arg};
use connector::projects;
use std::process::exit;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all projects (the dashboard)
    List,
    /// Create a project and select it
    Create {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Select the working project
    Select {
        project: i64,
    },
    /// Show the selected project with its tasks
    Show,
    /// Edit name/description of the selected project
    Edit {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete the selected project and all of its tasks
    Delete,
}

/// The working project id, set via `project select` or `project create`.
pub fn selected_project() -> i64 {
    let Some(raw) = set_get_value(ConfigKey::SelectedProject, None, true) else {
        eprintln!("No project selected. Use `taskdeck project select <id>`.");
        exit(1);
    };

    match raw.parse() {
        Ok(id) => id,
        Err(_) => {
            eprintln!("Invalid selected project \"{}\". Use `taskdeck project select <id>`.", raw);
            exit(1);
        }
    }
}

pub async fn handle(cmd: Commands) {
    match cmd {
        Commands::List => {
            let res = match projects::get(require_auth()).await {
                Ok(res) => res,
                Err(e) => {
                    log::error!("project list request failed: {:?}", e);
                    eprintln!("Failed to load projects: {}", e);
                    exit(1);
                }
            };

            if res.is_empty() {
                println!("You have no projects yet. Create one!");
            } else {
                for project in res {
                    println!("{:>4}  {}", project.id, project.name);
                }
            }
        }

        Commands::Create { name, description } => {
            let input_fields = vec![field("Name", name), optional("Description", description)];
            let input = handle_input(input_fields, true);

            let res = match projects::post(
                require_auth(),
                input.get("Name").unwrap().clone(),
                input.get("Description").cloned(),
            )
            .await
            {
                Ok(res) => res,
                Err(e) => {
                    log::error!("project create request failed: {:?}", e);
                    eprintln!("Project creation failed:\n{}", e);
                    exit(1);
                }
            };

            set_get_value(ConfigKey::SelectedProject, Some(res.id.to_string()), true);
            println!("Project {} created and selected.", res.id);
        }

        Commands::Select { project } => {
            // Fetch before selecting so a stale or foreign id is refused.
            if let Err(e) = projects::get_project(require_auth(), project).await {
                eprintln!("Failed to select project {}: {}", project, e);
                exit(1);
            }

            set_get_value(ConfigKey::SelectedProject, Some(project.to_string()), true);
            println!("Project selected.");
        }

        Commands::Show => {
            let project = selected_project();

            let res = match projects::get_project(require_auth(), project).await {
                Ok(res) => res,
                Err(e) => {
                    log::error!("project detail request failed: {:?}", e);
                    eprintln!("Failed to load project details: {}", e);
                    exit(1);
                }
            };

            render::render_project(&res, Local::now().date_naive());
        }

        Commands::Edit { name, description } => {
            let project = selected_project();
            let config = require_auth();

            let current = match projects::get_project(config.clone(), project).await {
                Ok(res) => res,
                Err(e) => {
                    eprintln!("Failed to load project details: {}", e);
                    exit(1);
                }
            };

            let input_fields = vec![
                field("Name", Some(name.unwrap_or(current.name))),
                optional(
                    "Description",
                    Some(description.or(current.description).unwrap_or_default()),
                ),
            ];
            let input = handle_input(input_fields, false);

            // Both fields go out every time, so an emptied description
            // clears the stored one instead of being kept.
            let res = match projects::patch_project(
                config,
                project,
                input.get("Name").unwrap().clone(),
                input.get("Description").cloned(),
            )
            .await
            {
                Ok(res) => res,
                Err(e) => {
                    log::error!("project edit request failed: {:?}", e);
                    eprintln!("Failed to update the project:\n{}", e);
                    exit(1);
                }
            };

            println!("Project updated.");
            render::render_project(&res, Local::now().date_naive());
        }

        Commands::Delete => {
            let project = selected_project();

            if !confirm("Delete this project and all of its tasks? This cannot be undone.") {
                println!("Aborted.");
                return;
            }

            if let Err(e) = projects::delete_project(require_auth(), project).await {
                log::error!("project delete request failed: {:?}", e);
                eprintln!("Failed to delete the project: {}", e);
                exit(1);
            }

            // Drop the selection so stale detail lookups cannot be issued.
            set_get_value(ConfigKey::SelectedProject, Some(String::new()), true);
            println!("Project deleted.");
        }
    }
}
