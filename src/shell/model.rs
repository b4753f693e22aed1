use std::sync::Arc;

use tracing::info;

use crate::config::Settings;
use crate::menu::Forest;
use crate::session::{SessionGate, SessionState};
use crate::shell::commands::{Command, Screen};
use crate::shell::dashboard::Dashboard;
use crate::shell::login::LoginForm;

/// The view currently mounted. Always matches the session state.
#[derive(Debug)]
pub enum View {
    Login(LoginForm),
    Dashboard(Dashboard),
}

pub struct ShellModel {
    settings: Settings,
    forest: Arc<Forest>,
    session: SessionGate,
    view: View,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ModelUpdate {
    pub redraw: bool,
    pub quit: bool,
}

impl ShellModel {
    pub fn new(settings: Settings, forest: Arc<Forest>) -> Self {
        Self {
            settings,
            forest,
            session: SessionGate::new(),
            view: View::Login(LoginForm::new()),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn session(&self) -> SessionState {
        self.session.state()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn screen(&self) -> Screen {
        match self.view {
            View::Login(_) => Screen::Login,
            View::Dashboard(_) => Screen::Dashboard,
        }
    }

    pub fn handle(&mut self, cmd: Command) -> ModelUpdate {
        let redraw = ModelUpdate {
            redraw: true,
            ..Default::default()
        };

        match cmd {
            Command::Quit => {
                return ModelUpdate {
                    quit: true,
                    ..Default::default()
                }
            }
            Command::Submit => {
                self.on_login();
                return redraw;
            }
            Command::SignOut => {
                self.on_logout();
                return redraw;
            }
            _ => {}
        }

        match &mut self.view {
            View::Login(form) => match cmd {
                Command::Input(c) => form.push(c),
                Command::Backspace => form.backspace(),
                Command::NextField | Command::PrevField => form.next_field(),
                _ => return ModelUpdate::default(),
            },
            View::Dashboard(dash) => match cmd {
                Command::Up => dash.up(),
                Command::Down => dash.down(),
                Command::Activate => {
                    dash.activate();
                }
                _ => return ModelUpdate::default(),
            },
        }
        redraw
    }

    /// Submitting the sign-on form. Credentials are not checked.
    pub fn on_login(&mut self) {
        if let View::Login(form) = &self.view {
            info!(operator = %form.operator(), "sign on");
        }
        if self.session.login() {
            self.view = View::Dashboard(Dashboard::mount(self.forest.clone()));
        }
    }

    pub fn on_logout(&mut self) {
        if self.session.logout() {
            self.view = View::Login(LoginForm::new());
        }
    }
}
