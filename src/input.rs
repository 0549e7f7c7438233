/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use rpassword::read_password;
use std::collections::HashMap;
use std::io::Write;
use std::process::Command;
use std::process::exit;
use std::{fs, io};

pub struct Field {
    pub name: String,
    pub value: Option<String>,
    pub required: bool,
}

pub fn field(name: &str, value: Option<String>) -> Field {
    Field {
        name: name.to_string(),
        value,
        required: true,
    }
}

pub fn optional(name: &str, value: Option<String>) -> Field {
    Field {
        name: name.to_string(),
        value,
        required: false,
    }
}

/// Collect form values through $EDITOR, prefilled with whatever was already
/// given on the command line. With `skip`, the editor is not opened when
/// every required field is filled. Optional fields may be left empty and
/// are then absent from the result.
pub fn handle_input(fields: Vec<Field>, skip: bool) -> HashMap<String, String> {
    if fields.is_empty() {
        println!("No input fields");
        exit(1);
    }

    if skip && !fields.iter().any(|f| f.required && f.value.is_none()) {
        return fields
            .iter()
            .filter_map(|f| f.value.clone().map(|v| (f.name.clone(), v)))
            .collect();
    }

    let input_fields: String = fields
        .iter()
        .map(|f| format!("{}: {}\n", f.name, f.value.clone().unwrap_or_default()))
        .collect();

    let name = format!("/tmp/TASKDECK-FORM-{}", std::process::id());

    let mut file = fs::File::create(name.clone()).unwrap();
    file.write_all(input_fields.as_bytes()).unwrap();

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    let output = Command::new(editor.clone())
        .arg(name.clone())
        .status()
        .unwrap();

    if !output.success() {
        println!("Failed to open editor {}", editor);
        exit(1);
    }

    let contents = fs::read_to_string(name.clone()).unwrap();
    fs::remove_file(name).unwrap();

    let mut result: HashMap<String, String> = HashMap::new();
    for line in contents.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            eprintln!("Invalid input line: {}", line);
            exit(1);
        };
        let (key, value) = (key.trim(), value.trim());

        let Some(field) = fields.iter().find(|f| f.name == key) else {
            eprintln!("Invalid input field: {}", key);
            exit(1);
        };

        if value.is_empty() {
            if field.required {
                eprintln!("{} cannot be empty.", key);
                exit(1);
            }
            continue;
        }

        result.insert(key.to_string(), value.to_string());
    }

    for field in &fields {
        if field.required && !result.contains_key(&field.name) {
            eprintln!("{} cannot be empty.", field.name);
            exit(1);
        }
    }

    result
}

pub fn ask_for_input(prompt: &str) -> String {
    print!("{}: ", prompt);
    io::stdout().flush().unwrap();
    let mut inp = String::new();
    io::stdin()
        .read_line(&mut inp)
        .unwrap_or_else(|_| panic!("Failed to read {}.", prompt));
    let inp = inp.trim().to_string();

    if inp.is_empty() {
        eprintln!("{} cannot be empty.", prompt);
        exit(1);
    }

    inp
}

pub fn ask_for_password(prompt: &str) -> String {
    print!("{}: ", prompt);
    io::stdout().flush().unwrap();
    let inp = read_password().unwrap();

    if inp.is_empty() {
        eprintln!("{} cannot be empty.", prompt);
        exit(1);
    }

    inp
}

pub fn confirm(prompt: &str) -> bool {
    print!("{} [y/N]: ", prompt);
    io::stdout().flush().unwrap();
    let mut inp = String::new();
    io::stdin().read_line(&mut inp).expect("Failed to read answer.");

    inp.trim().to_lowercase() == "y"
}
