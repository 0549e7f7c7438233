/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::{fmt, fs};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

#[derive(Clone, Debug, EnumIter, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum ConfigKey {
    Server,
    AccessToken,
    RefreshToken,
    SelectedProject,
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

impl std::str::FromStr for ConfigKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::iter()
            .find(|key| format!("{}", key) == s.to_lowercase())
            .ok_or(())
    }
}

fn get_config_file() -> PathBuf {
    let mut config_dir = dirs::config_dir().expect("Could not find configuration directory");
    config_dir.push("taskdeck");
    config_dir.push("config.toml");
    config_dir
}

pub fn load_config() -> HashMap<ConfigKey, Option<String>> {
    let config_file = get_config_file();
    let stored: HashMap<ConfigKey, String> = if config_file.exists() {
        let contents = fs::read_to_string(&config_file).expect("Failed to read configuration file");
        toml::from_str(&contents).expect("Failed to parse configuration file")
    } else {
        HashMap::new()
    };

    let mut config = HashMap::new();

    for config_key in ConfigKey::iter() {
        let value = stored.get(&config_key).cloned();
        config.insert(config_key, value);
    }

    config
}

pub fn save_config(config: &HashMap<ConfigKey, Option<String>>) {
    let config_file = get_config_file();
    let config_dir = config_file
        .parent()
        .expect("Failed to get configuration directory");

    fs::create_dir_all(config_dir).expect("Failed to create configuration directory");

    // TOML has no null, only set keys are written out.
    let set_values: HashMap<ConfigKey, String> = config
        .iter()
        .filter_map(|(key, value)| value.clone().map(|value| (key.clone(), value)))
        .collect();

    let contents = toml::to_string_pretty(&set_values).expect("Failed to serialize configuration");
    let mut file = fs::File::create(config_file).expect("Failed to create configuration file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write configuration file");
}

/// Set the key when a value is given (an empty string clears it), otherwise
/// read the current value. Returns the value now in effect.
pub fn set_get_value(key: ConfigKey, value: Option<String>, quiet: bool) -> Option<String> {
    let mut config = load_config();

    if let Some(value) = value {
        let stored = if value.is_empty() { None } else { Some(value) };
        config.insert(key.clone(), stored.clone());
        save_config(&config);

        if !quiet {
            match &stored {
                Some(value) => println!("{} set to \"{}\"", key, value),
                None => println!("{} cleared", key),
            }
        }

        return stored;
    }

    let current = config.get(&key).cloned().flatten();

    if !quiet {
        match &current {
            Some(value) => println!("{}", value),
            None => println!("[unset]"),
        }
    }

    current
}

pub fn set_get_value_from_string(
    key: String,
    value: Option<String>,
    quiet: bool,
) -> Result<Option<String>, String> {
    let config_key: ConfigKey = key.parse().map_err(|_| {
        if !quiet {
            println!("Invalid key: {}", key);
            println!("Valid keys are:");
            for config_key in ConfigKey::iter() {
                println!("{}", config_key);
            }
        }

        "Invalid key".to_string()
    })?;

    Ok(set_get_value(config_key, value, quiet))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_keys_round_trip_through_display() {
        for key in ConfigKey::iter() {
            let parsed: ConfigKey = key.to_string().parse().unwrap();
            assert_eq!(parsed, key);
        }
    }

    #[test]
    fn key_parsing_is_case_insensitive() {
        let parsed: ConfigKey = "AccessToken".parse().unwrap();
        assert_eq!(parsed, ConfigKey::AccessToken);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!("authtoken".parse::<ConfigKey>().is_err());
    }
}
