use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Which mounted view the key is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    // Dashboard
    Up,
    Down,
    Activate,
    SignOut,
    // Login form
    Input(char),
    Backspace,
    NextField,
    PrevField,
    Submit,
}

pub fn decode(key: KeyEvent, screen: Screen) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // AltGr arrives as CONTROL | ALT on Windows.
    if key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match screen {
        Screen::Login => login_command(key.code),
        Screen::Dashboard => dashboard_command(key.code),
    }
}

fn login_command(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Enter => Some(Command::Submit),
        KeyCode::Tab | KeyCode::Down => Some(Command::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(Command::PrevField),
        KeyCode::Backspace => Some(Command::Backspace),
        KeyCode::Char(c) if !c.is_control() => Some(Command::Input(c)),
        _ => None,
    }
}

fn dashboard_command(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Command::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Activate),
        KeyCode::Char('s') => Some(Command::SignOut),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
