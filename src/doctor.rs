//! Environment checks behind `dash doctor`.

use std::path::Path;

use crate::{config, menu::catalog};

#[derive(Debug, Clone)]
pub struct DoctorReport {
    pub ok: bool,
    pub lines: Vec<String>,
}

/// Checks the terminal, the config file at `config_path` and the menu catalog.
pub fn check(config_path: Option<&Path>, is_terminal: bool) -> DoctorReport {
    let mut ok = true;
    let mut lines = Vec::new();

    if is_terminal {
        lines.push("terminal: ok".to_string());
    } else {
        ok = false;
        lines.push("terminal: stdout is not a terminal; `dash run` needs an interactive TTY".to_string());
    }

    match config_path {
        None => lines.push("config: no path available, using defaults".to_string()),
        Some(p) => match config::load_from(p) {
            Ok(Some(_)) => lines.push(format!("config: ok ({})", p.display())),
            Ok(None) => lines.push(format!("config: {} not found, using defaults", p.display())),
            Err(e) => {
                ok = false;
                lines.push(format!("config: {e:#}"));
            }
        },
    }

    match catalog::forest() {
        Ok(forest) => lines.push(format!("menu: ok ({} top-level entries)", forest.len())),
        Err(e) => {
            ok = false;
            lines.push(format!("menu: {e:#}"));
        }
    }

    DoctorReport { ok, lines }
}
