//! Rendering of the dashboard: tab sidebar, header, widget grid, footer.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::store::Store;
use crate::tui::app::{App, InputMode, PromptKind};
use crate::tui::grid;

/// Widest the tab sidebar gets.
const SIDEBAR_WIDTH: u16 = 22;

const HELP_TEXT: &str = "q quit  tab select  arrows move  shift+arrows resize  a add  d delete  \
                         R reset  t new tab  x close tab  n rename  [ ] switch tab";

/// Renders the full dashboard and records the terminal width on `app`.
pub fn render_dashboard<S: Store>(frame: &mut Frame, app: &mut App<S>) {
    let area = frame.area();
    app.terminal_width = area.width;

    let sidebar_width = SIDEBAR_WIDTH.min(area.width / 4);
    let [sidebar, main] =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)]).areas(area);
    let [header, grid_area, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(main);

    render_tabs(frame, app, sidebar);
    render_header(frame, app, header);
    render_grid(frame, app, grid_area);
    render_footer(frame, app, footer);
}

fn render_tabs<S: Store>(frame: &mut Frame, app: &App<S>, area: Rect) {
    if area.width == 0 {
        return;
    }
    let active = app.tabs.active_index();
    let items: Vec<ListItem> = app
        .tabs
        .tabs()
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let style = if Some(i) == active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(tab.name.clone(), style)))
        })
        .collect();
    frame.render_widget(List::new(items).block(Block::bordered().title(" Tabs ")), area);
}

fn render_header<S: Store>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let bp = app.breakpoint();
    let line = match app.tabs.active_tab() {
        Some(tab) => Line::from(vec![
            Span::styled(
                format!(" {} ", tab.name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "| {} ({} cols) | {} widgets",
                bp,
                bp.columns(),
                tab.widgets().len()
            )),
        ]),
        None => Line::from(format!(" | {} ({} cols)", bp, bp.columns())),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_grid<S: Store>(frame: &mut Frame, app: &mut App<S>, area: Rect) {
    if app.tabs.active_tab().is_none() {
        render_notice(frame, area, "No tabs. Press t to create one.");
        return;
    }
    let cells = app.resolved_cells();
    if cells.is_empty() {
        render_notice(frame, area, "Empty dashboard. Press a to add a widget.");
        return;
    }

    scroll_to_selected(app, &cells, area.height);

    let bp = app.breakpoint();
    let widgets = app.active_widgets();
    for (index, placement) in &cells {
        let Some(rect) = grid::cell_rect(placement, bp, area, app.scroll) else {
            continue;
        };
        let Some(widget) = widgets.get(*index) else {
            continue;
        };
        let border = if app.selected == Some(*index) {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_style(border)
            .title(Span::styled(
                format!(" {} ", widget.symbol),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        let body = vec![
            Line::from(Span::styled(
                widget.id.clone(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(format!(
                "x {} y {} w {} h {}",
                placement.x, placement.y, placement.w, placement.h
            )),
        ];
        frame.render_widget(Clear, rect);
        frame.render_widget(Paragraph::new(body).block(block), rect);
    }
}

/// Adjusts `app.scroll` so the selected widget is on screen.
fn scroll_to_selected<S: Store>(
    app: &mut App<S>,
    cells: &[(usize, crate::layout::Placement)],
    height: u16,
) {
    let Some(selected) = app.selected else {
        return;
    };
    let Some((_, placement)) = cells.iter().find(|(i, _)| *i == selected) else {
        return;
    };
    let (top, bottom) = grid::line_span(placement);
    let height = u32::from(height);
    let scroll = u32::from(app.scroll);
    let scroll = if top < scroll {
        top
    } else if bottom > scroll + height {
        top.min(bottom.saturating_sub(height))
    } else {
        scroll
    };
    app.scroll = u16::try_from(scroll).unwrap_or(u16::MAX);
}

fn render_notice(frame: &mut Frame, area: Rect, text: &str) {
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage(45),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);
    frame.render_widget(paragraph, middle);
}

fn render_footer<S: Store>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let line = match &app.mode {
        InputMode::Prompt(prompt) => {
            let label = match prompt.kind {
                PromptKind::AddWidget => "Symbol",
                PromptKind::RenameTab => "Tab name",
            };
            Line::from(vec![
                Span::styled(
                    format!(" {label}: "),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(prompt.input.clone()),
                Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
            ])
        }
        InputMode::Normal => match &app.status_message {
            Some((message, _)) => Line::from(Span::styled(
                format!(" {message}"),
                Style::default().fg(Color::Green),
            )),
            None => Line::from(Span::styled(
                format!(" {HELP_TEXT}"),
                Style::default().fg(Color::DarkGray),
            )),
        },
    };
    frame.render_widget(Paragraph::new(line), area);
}
