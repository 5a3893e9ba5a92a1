use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use toml_edit::{value, DocumentMut};

use crate::cli::Format;
use crate::config::{find_config_file, Config, CONFIG_FILE};
use crate::geo::nearest;
use crate::model::Coordinates;
use crate::output::print_nearest;

pub struct NearestOptions<'a> {
    pub root: &'a Path,
    pub config_path: Option<&'a Path>,
    pub latitude: f64,
    pub longitude: f64,
    pub save: bool,
}

pub fn cmd_nearest(config: &Config, format: &Format, opts: NearestOptions) -> Result<()> {
    let coords = Coordinates {
        latitude: opts.latitude,
        longitude: opts.longitude,
    };
    let found = nearest(coords, &config.locations)
        .context("no reference locations configured; add [[locations]] to .salat.toml")?;

    tracing::info!(
        location = %found.location.name,
        distance_km = found.distance_km,
        "resolved nearest location"
    );

    if opts.save {
        let path: PathBuf = opts
            .config_path
            .map(Path::to_path_buf)
            .or_else(|| find_config_file(opts.root))
            .unwrap_or_else(|| opts.root.join(CONFIG_FILE));
        save_location(&path, &found.location.name)?;
        eprintln!("Saved location '{}' to {}", found.location.name, path.display());
    }

    print_nearest(&found, format)
}

/// Set `location` in the config at `path`, keeping the rest of the file intact.
fn save_location(path: &Path, name: &str) -> Result<()> {
    let content = if path.exists() {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?
    } else {
        String::new()
    };
    let mut doc: DocumentMut = content
        .parse()
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    doc["location"] = value(name);
    std::fs::write(path, doc.to_string())
        .with_context(|| format!("Failed to write config: {}", path.display()))?;
    Ok(())
}
