use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout as Split, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::config::{Layout, Settings};
use crate::menu::{Chevron, Icon, Row, RowKind};
use crate::shell::dashboard::Dashboard;
use crate::shell::login::{Field, LoginForm};
use crate::shell::model::{ShellModel, View};
use crate::shell::theme::Theme;

const CLASSIC_NAV_WIDTH: u16 = 28;
const SIDEBAR_WIDTH: u16 = 34;

const NOTICE: &str = "The information contained herein is confidential and proprietary to The \
Hertz Corporation and may not be duplicated, disclosed to third parties, or used for any \
purpose not expressly authorized by it. Any unauthorized use, duplication or disclosure is \
prohibited by law.";

pub fn render(frame: &mut Frame, model: &ShellModel) {
    let settings = model.settings();
    let theme = Theme::for_layout(settings.layout);

    match model.view() {
        View::Login(form) => render_login(frame, form, settings, &theme),
        View::Dashboard(dash) => match settings.layout {
            Layout::Classic => render_classic(frame, dash, settings, &theme),
            Layout::Sidebar => render_sidebar(frame, dash, settings, &theme),
        },
    }
}

fn render_login(frame: &mut Frame, form: &LoginForm, settings: &Settings, theme: &Theme) {
    let area = centered(frame.area(), 56, 13);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.nav_border)
        .title(Line::styled(" Hertz DASH ", theme.brand))
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title, version, _, operator, password, _, footer] = Split::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner.inner(Margin::new(2, 0)));

    frame.render_widget(
        Paragraph::new("Counter Terminal Sign On").alignment(Alignment::Center),
        title,
    );
    frame.render_widget(
        Paragraph::new(format!("Version ID: {}", settings.version_id))
            .style(theme.muted)
            .alignment(Alignment::Center),
        version,
    );

    let field_style = |field: Field| {
        if form.focus() == field {
            theme.input_focused
        } else {
            theme.input
        }
    };
    render_field(frame, operator, "Operator ID", form.operator(), field_style(Field::Operator));
    render_field(frame, password, "Password", &form.masked_password(), field_style(Field::Password));

    frame.render_widget(
        Paragraph::new(hints(&[("Enter", "Sign on"), ("Tab", "Next field"), ("Esc", "Quit")], theme))
            .alignment(Alignment::Center),
        footer,
    );
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, style: Style) {
    let [label_area, value_area] =
        Split::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);
    frame.render_widget(Paragraph::new(label), label_area);
    frame.render_widget(Paragraph::new(format!(" {value}")).style(style), value_area);
}

fn render_classic(frame: &mut Frame, dash: &Dashboard, settings: &Settings, theme: &Theme) {
    let [header, banner, body, footer] = Split::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let [left, right] = Split::horizontal([Constraint::Min(0), Constraint::Length(18)]).areas(header);
    frame.render_widget(
        Paragraph::new(format!(
            " Hertz   Version ID: {}   Login Location / Counter: {} / {}",
            settings.version_id, settings.location, settings.counter
        ))
        .style(theme.header),
        left,
    );
    frame.render_widget(
        Paragraph::new("WELCOME TO DASH ")
            .style(theme.header)
            .alignment(Alignment::Right),
        right,
    );
    frame.render_widget(
        Paragraph::new(format!(" {}", settings.build_banner)).style(theme.banner),
        banner,
    );

    let [nav, main] =
        Split::horizontal([Constraint::Length(CLASSIC_NAV_WIDTH), Constraint::Min(0)]).areas(body);
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme.nav_border)
        .style(theme.nav);
    let nav_inner = block.inner(nav);
    frame.render_widget(block, nav);
    render_nav(frame, nav_inner, dash, NavStyle::classic(settings), theme);

    render_cards(frame, main, settings, theme);
    render_footer(frame, footer, theme);
}

fn render_sidebar(frame: &mut Frame, dash: &Dashboard, settings: &Settings, theme: &Theme) {
    let [side, main_col] =
        Split::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).areas(frame.area());

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme.nav_border)
        .style(theme.nav);
    let inner = block.inner(side);
    frame.render_widget(block, side);

    let [brand, user, label, nav, sign_out] = Split::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(" H ", theme.brand),
                Span::styled(" Hertz DASH", theme.header),
            ]),
            Line::styled(format!("     v{}", settings.version_id), theme.muted),
        ])
        .block(Block::default().borders(Borders::BOTTOM).border_style(theme.nav_border)),
        brand,
    );
    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(
                format!(" {} {}", Icon::Users.glyph(settings.ascii_icons), settings.location),
                theme.nav,
            ),
            Line::styled(format!("   Location: {}", settings.counter), theme.muted),
        ])
        .block(Block::default().borders(Borders::BOTTOM).border_style(theme.nav_border)),
        user,
    );
    frame.render_widget(Paragraph::new(" NAVIGATION").style(theme.muted), label);
    render_nav(frame, nav, dash, NavStyle::sidebar(settings), theme);

    let glyph = Icon::LogOut.glyph(settings.ascii_icons);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!(" {glyph} Sign Out "), theme.danger),
            Span::styled("(s)", theme.muted),
        ]))
        .block(Block::default().borders(Borders::TOP).border_style(theme.nav_border)),
        sign_out,
    );

    let [main, footer] = Split::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(main_col);
    render_cards(frame, main, settings, theme);
    render_footer(frame, footer, theme);
}

#[derive(Debug, Clone, Copy)]
struct NavStyle {
    chevron: Chevron,
    icons: bool,
    ascii: bool,
    child_indent: &'static str,
}

impl NavStyle {
    fn classic(settings: &Settings) -> Self {
        Self {
            chevron: settings.layout.chevron(),
            icons: false,
            ascii: settings.ascii_icons,
            child_indent: "  ",
        }
    }

    fn sidebar(settings: &Settings) -> Self {
        Self {
            chevron: settings.layout.chevron(),
            icons: true,
            ascii: settings.ascii_icons,
            child_indent: if settings.ascii_icons { "   | " } else { "   │ " },
        }
    }
}

fn render_nav(frame: &mut Frame, area: Rect, dash: &Dashboard, style: NavStyle, theme: &Theme) {
    let rows = dash.rows();
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| nav_item(row, area.width, style, theme))
        .collect();

    let list = List::new(items).highlight_style(theme.cursor);
    let mut state = ListState::default().with_selected(Some(dash.cursor()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn nav_item<'a>(row: &Row<'a>, width: u16, style: NavStyle, theme: &Theme) -> ListItem<'a> {
    let mut spans = Vec::new();
    spans.push(Span::raw(if row.depth() > 0 { style.child_indent } else { " " }));
    if style.icons {
        if let Some(icon) = row.icon {
            spans.push(Span::raw(format!("{} ", icon.glyph(style.ascii))));
        }
    }
    spans.push(Span::raw(row.label));

    if let RowKind::Expander { open } = row.kind {
        let used = Line::from(spans.clone()).width();
        let pad = usize::from(width).saturating_sub(used + 2).max(1);
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::raw(style.chevron.glyph(open, style.ascii)));
    }

    let line_style = if row.depth() > 0 { theme.nav_child } else { theme.nav };
    ListItem::new(Line::from(spans)).style(line_style)
}

fn render_cards(frame: &mut Frame, area: Rect, settings: &Settings, theme: &Theme) {
    let area = area.inner(Margin::new(2, 1));
    let [copyright, _, status] = Split::vertical([
        Constraint::Length(9),
        Constraint::Length(1),
        Constraint::Length(10),
    ])
    .areas(area);

    let card = || {
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.nav_border)
            .style(theme.card)
    };

    frame.render_widget(
        Paragraph::new(vec![
            Line::styled("Copyright (c) 2003 The Hertz Corporation", theme.card_title),
            Line::raw(""),
            Line::styled("All Rights Reserved (Unpublished)", theme.card_title),
            Line::raw(""),
            Line::styled(NOTICE, theme.notice),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(card()),
        copyright,
    );

    frame.render_widget(
        Paragraph::new(vec![
            Line::styled("Logon Successful", theme.card_title),
            Line::raw("Welcome to TAS"),
            Line::raw(""),
            Line::raw(format!(
                "Your Current Password will expire in {} days.",
                settings.password_expiry_days
            )),
            Line::raw("Please select an application from the Navigation Bar"),
            Line::raw(""),
            Line::from(vec![
                Span::styled("[ Logout ]", theme.key_hint),
                Span::styled(" press s", theme.muted),
            ]),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(card()),
        status,
    );
}

fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(hints(
            &[
                ("↑/↓", "Navigate"),
                ("Enter", "Open/Close"),
                ("s", "Sign out"),
                ("q", "Quit"),
            ],
            theme,
        ))
        .alignment(Alignment::Center),
        area,
    );
}

fn hints(pairs: &[(&str, &str)], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, action)) in pairs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!(" {key} "), theme.key_hint));
        spans.push(Span::styled(action.to_string(), theme.muted));
    }
    Line::from(spans)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Split::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Split::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
