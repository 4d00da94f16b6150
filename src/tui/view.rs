// File: src/tui/view.rs
use crate::model::display::{EventDisplay, date_label, hour_label, weekday_label};
use crate::model::layout::STACK_OFFSET_PX;
use crate::model::{DayColumn, HourRange, PlacedEvent};
use crate::tui::state::AppState;

use chrono::Local;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Width of the hour-label column, in cells.
const LABEL_WIDTH: u16 = 10;
const GRID_LINE: Color = Color::DarkGray;

fn help_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(
                " EXPORTS ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Left/h:Previous  Right/l:Next"),
        ]),
        Line::from(vec![
            Span::styled(
                " RUNS ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" r:Next run  R:Previous run"),
        ]),
        Line::from(vec![
            Span::styled(
                " GLOBAL ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ?:Toggle Help  q/Esc:Quit"),
        ]),
    ]
}

fn grid_columns(area: Rect) -> Vec<Rect> {
    let mut constraints = vec![Constraint::Length(LABEL_WIDTH)];
    constraints.extend(std::iter::repeat_n(Constraint::Ratio(1, 7), 7));
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Rows from the top of a grid `height` rows tall for a percentage offset.
fn pct_to_rows(pct: f64, height: u16) -> u16 {
    ((pct / 100.0) * height as f64).round().max(0.0) as u16
}

/// Row offsets where each visible hour starts.
fn hour_rows(hours: HourRange, height: u16) -> Vec<(u32, u16)> {
    let n = hours.len().max(1) as f64;
    hours
        .hours()
        .enumerate()
        .map(|(i, h)| (h, pct_to_rows(i as f64 / n * 100.0, height)))
        .collect()
}

pub fn draw(f: &mut Frame, state: &AppState) {
    let week = state.week(Local::now().date_naive());
    let help = help_lines();

    let footer_height = if state.show_full_help {
        Constraint::Length(help.len() as u16 + 2)
    } else {
        Constraint::Length(3)
    };

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            footer_height,
        ])
        .split(f.area());

    draw_header(f, v_chunks[0], state);

    // --- Day headers ---
    let header_cols = grid_columns(v_chunks[1]);
    for (col, day) in header_cols.iter().skip(1).zip(&week.days) {
        let text = vec![
            Line::from(Span::styled(
                weekday_label(day.date),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                date_label(day.date),
                Style::default().fg(Color::Gray),
            )),
        ];
        let p = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(GRID_LINE)));
        f.render_widget(p, *col);
    }

    // --- Time grid ---
    let grid_cols = grid_columns(v_chunks[2]);
    draw_hour_labels(f, grid_cols[0], week.hours);
    for (col, day) in grid_cols.iter().skip(1).zip(&week.days) {
        draw_day(f, *col, day, week.hours);
    }

    // --- Footer ---
    let footer_area = v_chunks[3];
    f.render_widget(Clear, footer_area);
    let footer = if state.show_full_help {
        Paragraph::new(help).block(Block::default().borders(Borders::ALL).title(" Help "))
    } else {
        let style = if state.message.starts_with("Error") {
            Style::default().fg(Color::LightRed)
        } else {
            Style::default()
        };
        Paragraph::new(Line::from(vec![
            Span::styled(state.message.clone(), style),
            Span::styled("  (? for help)", Style::default().fg(Color::DarkGray)),
        ]))
        .block(Block::default().borders(Borders::ALL).title(" Status "))
    };
    f.render_widget(footer, footer_area);
}

fn draw_header(f: &mut Frame, area: Rect, state: &AppState) {
    let viewer = &state.viewer;
    let arrow = |enabled: bool, glyph: &'static str| {
        if enabled {
            Span::styled(glyph, Style::default().fg(Color::Yellow))
        } else {
            Span::styled(glyph, Style::default().fg(Color::DarkGray))
        }
    };

    let title = if state.loading {
        " Schedule Viewer (Loading...) "
    } else {
        " Schedule Viewer "
    };

    let line = Line::from(vec![
        Span::styled("Run ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.run_label().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  ({} runs)   ", viewer.runs.len())),
        arrow(viewer.can_go_previous(), "◀"),
        Span::raw(format!(" {} ", viewer.position_label())),
        arrow(viewer.can_go_next(), "▶"),
        Span::raw(format!("   {} events", viewer.events.len())),
    ]);

    let p = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(p, area);
}

fn draw_hour_labels(f: &mut Frame, area: Rect, hours: HourRange) {
    let mut lines = vec![Line::raw(""); area.height as usize];
    for (hour, row) in hour_rows(hours, area.height) {
        if let Some(slot) = lines.get_mut(row as usize) {
            *slot = Line::styled(
                format!("{} ", hour_label(hour)),
                Style::default().fg(Color::Gray),
            );
        }
    }
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Right), area);
}

fn draw_day(f: &mut Frame, area: Rect, day: &DayColumn, hours: HourRange) {
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(GRID_LINE));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Hour lines
    let rule = "┄".repeat(inner.width as usize);
    let mut lines = vec![Line::raw(""); inner.height as usize];
    for (_, row) in hour_rows(hours, inner.height) {
        if let Some(slot) = lines.get_mut(row as usize) {
            *slot = Line::styled(rule.clone(), Style::default().fg(GRID_LINE));
        }
    }
    f.render_widget(Paragraph::new(lines), inner);

    for placed in &day.events {
        if let Some(rect) = event_rect(inner, placed) {
            draw_event(f, rect, placed);
        }
    }
}

/// Where an event lands inside a day column, or `None` if it falls outside.
fn event_rect(inner: Rect, placed: &PlacedEvent) -> Option<Rect> {
    let p = &placed.placement;
    let y = inner.y + pct_to_rows(p.top_pct, inner.height);
    if y >= inner.bottom() {
        return None;
    }
    let height = pct_to_rows(p.height_pct, inner.height)
        .max(1)
        .min(inner.bottom() - y);

    let indent = (p.left_offset_px / STACK_OFFSET_PX) as u16;
    let width = inner.width.saturating_sub(indent);
    if width == 0 {
        return None;
    }
    Some(Rect {
        x: inner.x + indent,
        y,
        width,
        height,
    })
}

fn draw_event(f: &mut Frame, rect: Rect, placed: &PlacedEvent) {
    let (r, g, b) = placed.color.to_rgb8();
    let style = Style::default().bg(Color::Rgb(r, g, b)).fg(Color::White);
    let text = if rect.height < 2 {
        vec![Line::raw(placed.event.summary_line())]
    } else {
        vec![
            Line::from(Span::styled(
                placed.event.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::raw(placed.event.time_span()),
        ]
    };
    f.render_widget(Clear, rect);
    f.render_widget(Paragraph::new(text).style(style), rect);
}
