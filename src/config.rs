use std::{
    env,
    fs,
    path::Path,
    path::PathBuf,
};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::menu::Chevron;

pub const CONFIG_ENV: &str = "DASH_CONFIG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Yellow header bar, plain navigation list and classic chevrons.
    #[default]
    Classic,
    /// Dark brand sidebar with icons and rotating chevrons.
    Sidebar,
}

impl Layout {
    pub fn chevron(self) -> Chevron {
        match self {
            Layout::Classic => Chevron::Classic,
            Layout::Sidebar => Chevron::Rotating,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub layout: Option<Layout>,

    #[serde(default)]
    pub ascii_icons: Option<bool>,

    /// Login location shown in the header (e.g. "GEHDOFF").
    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub counter: Option<String>,

    #[serde(default)]
    pub version_id: Option<String>,

    #[serde(default)]
    pub build_banner: Option<String>,

    #[serde(default)]
    pub password_expiry_days: Option<u32>,

    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

/// Command-line values that win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub layout: Option<Layout>,
    pub ascii_icons: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub layout: Layout,
    pub ascii_icons: bool,
    pub location: String,
    pub counter: String,
    pub version_id: String,
    pub build_banner: String,
    pub password_expiry_days: u32,
    pub log_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        resolve(None, None, &Overrides::default())
    }
}

/// Reads the config file (if any) and merges it with `overrides`.
pub fn load_settings(overrides: &Overrides) -> Result<Settings> {
    load_settings_from(resolve_config_path().as_deref(), overrides)
}

pub fn load_settings_from(path: Option<&Path>, overrides: &Overrides) -> Result<Settings> {
    let cfg = match path {
        Some(p) => load_from(p)?,
        None => None,
    };
    Ok(resolve(cfg.as_ref(), path, overrides))
}

pub fn load_from(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }
    let bytes = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let cfg: Config =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(Some(cfg))
}

pub fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(p) = env::var(CONFIG_ENV) {
        if !p.trim().is_empty() {
            return Some(PathBuf::from(p));
        }
    }

    let local = PathBuf::from("dash.json");
    if local.exists() {
        return Some(local);
    }

    if let Some(appdata) = env::var_os("APPDATA") {
        return Some(PathBuf::from(appdata).join("dash").join("config.json"));
    }

    if let Some(home) = env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config").join("dash").join("config.json"));
    }

    None
}

pub fn ensure_config_file_exists() -> Result<PathBuf> {
    let Some(path) = resolve_config_path() else {
        return Err(anyhow!(
            "No config path available (set {CONFIG_ENV} or ensure APPDATA/HOME is present)"
        ));
    };
    write_template(&path)?;
    Ok(path)
}

fn write_template(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
    }

    if path.exists() {
        return Ok(());
    }

    let defaults = Settings::default();
    let template = serde_json::json!({
        "layout": defaults.layout,
        "ascii_icons": defaults.ascii_icons,
        "location": defaults.location,
        "counter": defaults.counter,
    });
    let mut s = serde_json::to_string_pretty(&template).context("serialize config template")?;
    s.push('\n');
    fs::write(path, s.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Merges defaults, the config file and CLI overrides (in that order).
pub fn resolve(config: Option<&Config>, config_path: Option<&Path>, overrides: &Overrides) -> Settings {
    let cfg = config.cloned().unwrap_or_default();

    let log_dir = cfg.log_dir.unwrap_or_else(|| {
        config_path
            .and_then(|p| p.parent())
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| p.join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs"))
    });

    Settings {
        layout: overrides.layout.or(cfg.layout).unwrap_or_default(),
        ascii_icons: overrides.ascii_icons || cfg.ascii_icons.unwrap_or(false),
        location: non_blank(cfg.location).unwrap_or_else(|| "GEHDOFF".to_string()),
        counter: non_blank(cfg.counter).unwrap_or_else(|| "01".to_string()),
        version_id: non_blank(cfg.version_id).unwrap_or_else(|| "3.21.0-14.11".to_string()),
        build_banner: non_blank(cfg.build_banner).unwrap_or_else(|| "3.19.0 - TESTING".to_string()),
        password_expiry_days: cfg.password_expiry_days.unwrap_or(20),
        log_dir,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
