//! Terminal host for the login screen and the dashboard.

pub mod commands;
pub mod dashboard;
pub mod login;
pub mod model;
pub mod theme;
pub mod ui;

use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use tracing::info;

use crate::config::Settings;
use crate::menu::Forest;

pub use model::{ModelUpdate, ShellModel, View};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run(settings: Settings, forest: Arc<Forest>) -> Result<()> {
    // ratatui::init handles raw mode + alternate screen
    let terminal = ratatui::init();
    let result = run_loop(terminal, ShellModel::new(settings, forest));
    ratatui::restore();
    result
}

fn run_loop(mut terminal: DefaultTerminal, mut model: ShellModel) -> Result<()> {
    info!(layout = ?model.settings().layout, "terminal shell started");
    let mut dirty = true;

    loop {
        if dirty {
            terminal
                .draw(|frame| ui::render(frame, &model))
                .context("draw frame")?;
            dirty = false;
        }

        if !event::poll(POLL_INTERVAL).context("poll terminal events")? {
            continue;
        }

        match event::read().context("read terminal event")? {
            Event::Key(key) => {
                let Some(cmd) = commands::decode(key, model.screen()) else {
                    continue;
                };
                let update = model.handle(cmd);
                if update.quit {
                    break;
                }
                dirty |= update.redraw;
            }
            Event::Resize(_, _) => dirty = true,
            _ => {}
        }
    }

    info!("terminal shell stopped");
    Ok(())
}
