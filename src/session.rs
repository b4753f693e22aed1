use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn,
}

/// Two-state login gate. There is no credential check: `login` always
/// succeeds and `logout` always signs out.
#[derive(Debug, Default)]
pub struct SessionGate {
    state: SessionState,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_logged_in(&self) -> bool {
        self.state == SessionState::LoggedIn
    }

    /// Returns true when the state changed.
    pub fn login(&mut self) -> bool {
        if self.is_logged_in() {
            return false;
        }
        self.state = SessionState::LoggedIn;
        info!("session opened");
        true
    }

    /// Returns true when the state changed.
    pub fn logout(&mut self) -> bool {
        if !self.is_logged_in() {
            return false;
        }
        self.state = SessionState::LoggedOut;
        info!("session closed");
        true
    }
}
