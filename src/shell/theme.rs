use ratatui::style::{Color, Modifier, Style};

use crate::config::Layout;

const BRAND_YELLOW: Color = Color::Rgb(255, 209, 0);
const LAVENDER: Color = Color::Rgb(224, 222, 240);
const LAVENDER_DARK: Color = Color::Rgb(200, 197, 225);
const TAN: Color = Color::Rgb(236, 224, 196);
const SIDEBAR_BG: Color = Color::Rgb(24, 27, 36);
const SIDEBAR_ACCENT: Color = Color::Rgb(40, 44, 58);

/// Style tokens for one dashboard layout.
pub struct Theme {
    pub header: Style,
    pub banner: Style,
    pub nav: Style,
    pub nav_child: Style,
    pub nav_border: Style,
    pub cursor: Style,
    pub muted: Style,
    pub brand: Style,
    pub card: Style,
    pub card_title: Style,
    pub notice: Style,
    pub danger: Style,
    pub key_hint: Style,
    pub input: Style,
    pub input_focused: Style,
}

impl Theme {
    pub fn for_layout(layout: Layout) -> Self {
        match layout {
            Layout::Classic => Self::classic(),
            Layout::Sidebar => Self::sidebar(),
        }
    }

    fn classic() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Black)
                .bg(BRAND_YELLOW)
                .add_modifier(Modifier::BOLD),
            banner: Style::default().fg(Color::DarkGray).bg(LAVENDER_DARK),
            nav: Style::default().fg(Color::Black).bg(LAVENDER),
            nav_child: Style::default().fg(Color::Black).bg(Color::Rgb(255, 232, 128)),
            nav_border: Style::default().fg(Color::Gray),
            cursor: Style::default()
                .fg(Color::Black)
                .bg(BRAND_YELLOW)
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::DarkGray),
            brand: Style::default()
                .fg(Color::Black)
                .bg(BRAND_YELLOW)
                .add_modifier(Modifier::BOLD),
            card: Style::default().fg(Color::Black).bg(TAN),
            card_title: Style::default()
                .fg(Color::Black)
                .bg(TAN)
                .add_modifier(Modifier::BOLD),
            notice: Style::default().fg(Color::Red).bg(TAN),
            danger: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            key_hint: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            input: Style::default().fg(Color::Black).bg(Color::White),
            input_focused: Style::default()
                .fg(Color::Black)
                .bg(BRAND_YELLOW)
                .add_modifier(Modifier::BOLD),
        }
    }

    fn sidebar() -> Self {
        Self {
            header: Style::default()
                .fg(Color::White)
                .bg(SIDEBAR_BG)
                .add_modifier(Modifier::BOLD),
            banner: Style::default().fg(Color::Gray).bg(SIDEBAR_BG),
            nav: Style::default().fg(Color::White).bg(SIDEBAR_BG),
            nav_child: Style::default().fg(Color::Gray).bg(SIDEBAR_BG),
            nav_border: Style::default().fg(SIDEBAR_ACCENT),
            cursor: Style::default()
                .fg(Color::White)
                .bg(SIDEBAR_ACCENT)
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::DarkGray),
            brand: Style::default()
                .fg(Color::Black)
                .bg(BRAND_YELLOW)
                .add_modifier(Modifier::BOLD),
            card: Style::default().fg(Color::White),
            card_title: Style::default()
                .fg(BRAND_YELLOW)
                .add_modifier(Modifier::BOLD),
            notice: Style::default().fg(Color::LightRed),
            danger: Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
            key_hint: Style::default()
                .fg(BRAND_YELLOW)
                .add_modifier(Modifier::BOLD),
            input: Style::default().fg(Color::White).bg(SIDEBAR_ACCENT),
            input_focused: Style::default()
                .fg(Color::Black)
                .bg(BRAND_YELLOW)
                .add_modifier(Modifier::BOLD),
        }
    }
}
