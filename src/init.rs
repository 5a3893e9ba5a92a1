use std::path::Path;

use anyhow::{bail, Context, Result};
use dialoguer::{Confirm, Input, Select};
use toml_edit::{value, Array, ArrayOfTables, DocumentMut, Item, Table};

use crate::config::{default_locations, CONFIG_FILE};
use crate::model::ReferenceLocation;

const DEFAULT_LOCATION: &str = "Dhaka";

struct InitAnswers {
    location: String,
    twelve_hour: bool,
    schedule: Option<String>,
}

impl Default for InitAnswers {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            twelve_hour: false,
            schedule: None,
        }
    }
}

fn prompt_answers(locations: &[ReferenceLocation]) -> Result<InitAnswers> {
    let names: Vec<&str> = locations.iter().map(|l| l.name.as_str()).collect();
    let default_index = names
        .iter()
        .position(|n| *n == DEFAULT_LOCATION)
        .unwrap_or(0);
    let index = Select::new()
        .with_prompt("Select your location")
        .items(&names)
        .default(default_index)
        .interact()?;

    let twelve_hour = Confirm::new()
        .with_prompt("Show times on a 12-hour clock?")
        .default(false)
        .interact()?;

    let schedule: String = Input::new()
        .with_prompt("Default schedule file (leave empty for none)")
        .allow_empty(true)
        .interact_text()?;
    let schedule = schedule.trim();

    Ok(InitAnswers {
        location: names[index].to_string(),
        twelve_hour,
        schedule: (!schedule.is_empty()).then(|| schedule.to_string()),
    })
}

pub fn cmd_init(root: &Path, non_interactive: bool) -> Result<()> {
    let config_path = root.join(CONFIG_FILE);

    if config_path.exists() {
        if non_interactive {
            bail!("{CONFIG_FILE} already exists. Use interactive mode to overwrite.");
        }
        let overwrite = Confirm::new()
            .with_prompt(format!("{CONFIG_FILE} already exists. Overwrite?"))
            .default(false)
            .interact()?;
        if !overwrite {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    let locations = default_locations();
    let answers = if non_interactive {
        InitAnswers::default()
    } else {
        prompt_answers(&locations)?
    };

    let content = build_config_toml(&answers, &locations);
    std::fs::write(&config_path, content)
        .with_context(|| format!("Failed to write config: {}", config_path.display()))?;

    eprintln!("Created {CONFIG_FILE}");
    eprintln!("Try it out: salat status --schedule today.json");
    Ok(())
}

fn build_config_toml(answers: &InitAnswers, locations: &[ReferenceLocation]) -> String {
    let mut doc = DocumentMut::new();

    doc["location"] = value(answers.location.as_str());
    doc["twelve_hour"] = value(answers.twelve_hour);
    if let Some(ref schedule) = answers.schedule {
        doc["schedule"] = value(schedule.as_str());
    }

    // An empty array of tables is not rendered at all.
    if locations.is_empty() {
        doc["locations"] = value(Array::new());
    } else {
        let mut catalog = ArrayOfTables::new();
        for loc in locations {
            let mut entry = Table::new();
            entry["name"] = value(loc.name.as_str());
            entry["latitude"] = value(loc.latitude);
            entry["longitude"] = value(loc.longitude);
            catalog.push(entry);
        }
        doc["locations"] = Item::ArrayOfTables(catalog);
    }

    doc.to_string()
}
