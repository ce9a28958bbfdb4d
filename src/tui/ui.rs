use crate::sheet::filter::{group_by_category, keys_match};
use crate::sheet::models::Theme;
use crate::tui::app::{App, Focus};
use crate::tui::keyboard::{self, ROWS};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

/// Color set derived from the theme; mirrors the zinc dark/light pairing
/// of the reference design.
struct Palette {
    bg: Color,
    fg: Color,
    dim: Color,
    border: Color,
    chip: Color,
    active: Color,
    selected_bg: Color,
    selected_fg: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                bg: Color::Rgb(24, 24, 27),
                fg: Color::Rgb(244, 244, 245),
                dim: Color::Rgb(161, 161, 170),
                border: Color::Rgb(63, 63, 70),
                chip: Color::Rgb(39, 39, 42),
                active: Color::Rgb(37, 99, 235),
                selected_bg: Color::Rgb(63, 63, 70),
                selected_fg: Color::Rgb(250, 250, 250),
            },
            Theme::Light => Self {
                bg: Color::Rgb(250, 250, 250),
                fg: Color::Rgb(24, 24, 27),
                dim: Color::Rgb(113, 113, 122),
                border: Color::Rgb(212, 212, 216),
                chip: Color::Rgb(228, 228, 231),
                active: Color::Rgb(37, 99, 235),
                selected_bg: Color::Rgb(228, 228, 231),
                selected_fg: Color::Rgb(24, 24, 27),
            },
        }
    }

    fn block(&self, title: &str, focused: bool) -> Block<'static> {
        let border_style = if focused {
            Style::default().fg(self.active)
        } else {
            Style::default().fg(self.border)
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title.to_string())
    }
}

pub fn draw(frame: &mut Frame, app: &mut App) {
    let palette = Palette::for_theme(app.theme);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        frame.size(),
    );

    let (sidebar_area, main_area) = if app.sidebar_open {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(0)])
            .split(frame.size());
        (Some(chunks[0]), chunks[1])
    } else {
        (None, frame.size())
    };

    let keyboard_height = if app.keyboard_visible() { 8 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search bar
            Constraint::Length(keyboard_height),
            Constraint::Min(0),    // Shortcut list
            Constraint::Length(3), // Footer
        ])
        .split(main_area);

    if let Some(area) = sidebar_area {
        draw_sidebar(frame, area, app, &palette);
    }
    draw_header(frame, chunks[0], app, &palette);
    draw_search_bar(frame, chunks[1], app, &palette);
    if app.keyboard_visible() {
        draw_keyboard(frame, chunks[2], app, &palette);
    }
    draw_shortcut_list(frame, chunks[3], app, &palette);
    draw_footer(frame, chunks[4], app, &palette);

    if app.help_mode {
        draw_help_window(frame, &palette);
    }
}

fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let items: Vec<ListItem> = app
        .dataset
        .apps
        .iter()
        .map(|entry| {
            let (r, g, b) = entry.accent_rgb();
            let marker = if entry.id == app.current_app_id { "▸ " } else { "  " };
            let line = Line::from(vec![
                Span::styled(
                    format!("{}{} ", marker, entry.icon),
                    Style::default().fg(Color::Rgb(r, g, b)).add_modifier(Modifier::BOLD),
                ),
                Span::raw(entry.name.clone()),
            ]);
            ListItem::new(line)
        })
        .collect();

    let focused = app.focus == Focus::Sidebar;
    let list = List::new(items)
        .block(palette.block(" Applications ", focused))
        .highlight_style(
            Style::default()
                .bg(palette.selected_bg)
                .fg(palette.selected_fg)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    list_state.select(Some(app.sidebar_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let visible = app.visible_shortcuts().len();
    let mut spans = Vec::new();

    match app.current_app() {
        Some(data) => {
            let (r, g, b) = data.accent_rgb();
            spans.push(Span::styled(
                data.name.clone(),
                Style::default().fg(Color::Rgb(r, g, b)).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(" Cheat Sheet", Style::default().fg(palette.dim)));
        }
        None => {
            spans.push(Span::styled(
                format!("Unknown app '{}'", app.current_app_id),
                Style::default().fg(palette.dim),
            ));
        }
    }

    let summary = if app.favorites_only {
        format!("  {} saved", app.favorites.len())
    } else {
        format!("  {} shortcuts", visible)
    };
    spans.push(Span::styled(summary, Style::default().fg(palette.dim)));
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        format!("[{} Mode]", app.os.label()),
        Style::default().fg(palette.active),
    ));
    if app.favorites_only {
        spans.push(Span::styled(" [♥ Favorites]", Style::default().fg(Color::Red)));
    }
    if let Some(key) = &app.active_key {
        spans.push(Span::styled(
            format!(" [Key: {}]", keyboard::display_label(key, app.os)),
            Style::default().fg(palette.active),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(palette.block("", false));
    frame.render_widget(header, area);
}

fn draw_search_bar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let text = if app.search.search_mode {
        format!("{}█", app.search.query)
    } else if app.search.query.is_empty() {
        "Press / to search shortcuts".to_string()
    } else {
        app.search.query.clone()
    };

    let style = if app.search.search_mode || app.search.is_active() {
        Style::default().fg(palette.fg)
    } else {
        Style::default().fg(palette.dim)
    };

    let search = Paragraph::new(text)
        .style(style)
        .block(palette.block(" Search ", app.search.search_mode));
    frame.render_widget(search, area);
}

fn draw_keyboard(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let focused = app.focus == Focus::Keyboard;
    let mut lines = Vec::new();

    for (row_index, row) in ROWS.iter().enumerate() {
        let mut spans = Vec::new();
        for (col_index, key) in row.iter().enumerate() {
            let label = keyboard::display_label(key, app.os);
            let is_active = app
                .active_key
                .as_deref()
                .is_some_and(|active| keys_match(active, key));
            let under_cursor = focused
                && app.keyboard.cursor_row == row_index
                && app.keyboard.cursor_col == col_index;

            let mut style = if is_active {
                Style::default().bg(palette.active).fg(Color::White)
            } else {
                Style::default().bg(palette.chip).fg(palette.fg)
            };
            if under_cursor {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }

            spans.push(Span::styled(format!(" {} ", label), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let keyboard = Paragraph::new(lines).block(palette.block(" Keyboard (Enter toggles a key filter) ", focused));
    frame.render_widget(keyboard, area);
}

fn draw_shortcut_list(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let visible = app.visible_shortcuts();
    if visible.is_empty() {
        draw_no_results(frame, area, app, palette);
        return;
    }

    let mut items: Vec<ListItem> = Vec::new();
    let mut selected_row = None;
    let mut flat_index = 0usize;

    for (category, members) in group_by_category(&visible) {
        items.push(ListItem::new(Line::from(Span::styled(
            format!("{} ({} items)", category, members.len()),
            Style::default()
                .fg(palette.fg)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ))));

        for shortcut in members {
            if flat_index == app.grid_index {
                selected_row = Some(items.len());
            }

            let marker = if app.is_favorite(&shortcut.id) { "♥ " } else { "  " };
            let mut spans = vec![
                Span::styled(marker, Style::default().fg(Color::Red)),
                Span::raw(format!("{:32}", shortcut.action)),
            ];
            for key in shortcut.keys.for_os(app.os) {
                spans.push(Span::styled(
                    format!(" {} ", key),
                    Style::default().bg(palette.chip).fg(palette.fg),
                ));
                spans.push(Span::raw(" "));
            }
            if let Some(description) = &shortcut.description {
                spans.push(Span::styled(
                    format!("  {}", description),
                    Style::default().fg(palette.dim),
                ));
            }

            items.push(ListItem::new(Line::from(spans)));
            flat_index += 1;
        }
    }

    let focused = app.focus == Focus::Grid;
    let list = List::new(items)
        .block(palette.block(" Shortcuts ", focused))
        .highlight_style(
            Style::default()
                .bg(palette.selected_bg)
                .fg(palette.selected_fg)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    list_state.select(selected_row);
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_no_results(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No shortcuts found",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Try adjusting your search, filters, or OS setting.",
            Style::default().fg(palette.dim),
        )),
    ];
    if app.active_key.is_some() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press Esc to clear the keyboard filter",
            Style::default().fg(palette.active),
        )));
    }

    let message = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .block(palette.block(" Shortcuts ", app.focus == Focus::Grid));
    frame.render_widget(message, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let (text, style) = if let Some(status) = &app.status {
        (status.clone(), Style::default().fg(Color::Red))
    } else if app.search.search_mode {
        (
            "Type to filter | Enter: apply | Esc: cancel".to_string(),
            Style::default().fg(palette.dim),
        )
    } else {
        (
            "Tab: focus | ↑↓←→/hjkl: move | Enter: select | Space: ♥ | /: search | o: OS | f: favorites | t: theme | [ ]: app | ?: help | q: quit"
                .to_string(),
            Style::default().fg(palette.dim),
        )
    };

    let footer = Paragraph::new(text).style(style).block(palette.block("", false));
    frame.render_widget(footer, area);
}

fn draw_help_window(frame: &mut Frame, palette: &Palette) {
    let help_text = vec![
        "Cheat Sheet - Keyboard Commands",
        "",
        "NAVIGATION:",
        "  Tab               Cycle focus (sidebar / keyboard / shortcuts)",
        "  ↑↓←→ / hjkl       Move within the focused pane",
        "  [ / ]             Previous / next application",
        "  b                 Show/hide the application sidebar",
        "",
        "FILTERING:",
        "  /                 Search shortcuts by name, category, or key",
        "  Enter (keyboard)  Toggle the highlighted key as a filter",
        "  f                 Show only favorite shortcuts",
        "  Esc               Clear key filter, then search, then favorites",
        "",
        "OTHER:",
        "  Space / Enter     Mark the selected shortcut as a favorite",
        "  o                 Switch between macOS and Windows key labels",
        "  t                 Toggle dark/light theme",
        "  ?                 Show this help (press ? or Esc to close)",
        "  q / Ctrl+C        Quit",
        "",
        "Press ? or Esc to close this help window",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            palette
                .block(" Help - Keyboard Commands ", true)
                .style(Style::default().bg(palette.bg)),
        )
        .wrap(Wrap { trim: true });

    let area = centered_rect(70, 80, frame.size());
    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
