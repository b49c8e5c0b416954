// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! UI rendering for the TUI
//!
//! While the run is in progress the screen shows the check list with one
//! row per check. Once the run has completed and the collapse delay has
//! passed, the list gives way to a summary with the remediation action.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use super::app::App;
use crate::diagnostic::{AggregateStatus, CheckId, CheckStatus};
use crate::i18n::{check_text, Language, StringId};
use crate::utils;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(4), // Header
            Constraint::Min(0),    // Checks or summary
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    draw_title(frame, chunks[0]);
    draw_header(frame, chunks[1], app);

    match app.outcome() {
        Some(aggregate) => draw_summary(frame, chunks[2], app, aggregate),
        None => draw_checks(frame, chunks[2], app),
    }

    draw_footer(frame, chunks[3], app);
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let title = Paragraph::new(Line::from(vec![
        Span::styled("Rakko", Style::default().fg(Color::Gray)),
        Span::styled(
            "System",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(block);

    frame.render_widget(title, area);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let lang = app.lang;

    let (icon, color, header, subtitle) = match app.outcome() {
        Some(aggregate) => {
            let (icon, color) = match aggregate {
                AggregateStatus::Error => ("▲", Color::Red),
                AggregateStatus::Warning => ("▲", Color::Yellow),
                AggregateStatus::Success => ("✓", Color::Green),
            };
            let subtitle = aggregate
                .subtitle()
                .map(|id| lang.text(id).to_string())
                .unwrap_or_default();
            (icon, color, lang.text(aggregate.header()), subtitle)
        }
        None => (
            "▲",
            Color::DarkGray,
            lang.text(StringId::HeaderInitial),
            format!("{}{}", lang.text(StringId::SubChecking), app.dots()),
        ),
    };

    let lines = vec![
        Line::from(Span::styled(
            icon,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            header,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, Style::default().fg(Color::Gray))),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Draw the live check list
fn draw_checks(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .state
        .checks()
        .iter()
        .map(|item| {
            let text = check_text(item.id, item.status, app.lang);
            let kind = if item.id == CheckId::BrowserEnv {
                "▣"
            } else {
                "◎"
            };
            let color = status_tui_color(item.status);
            let label_style = match item.status {
                CheckStatus::Pending => Style::default().fg(Color::DarkGray),
                CheckStatus::Running => Style::default().add_modifier(Modifier::BOLD),
                _ => Style::default().fg(Color::Gray),
            };

            let mut lines = vec![Line::from(vec![
                Span::styled(format!(" {} ", kind), Style::default().fg(color)),
                Span::styled(text.label, label_style),
                Span::raw("  "),
                Span::styled(utils::status_symbol(item.status), Style::default().fg(color)),
            ])];
            if let Some(detail) = text.detail {
                lines.push(Line::from(Span::styled(
                    format!("    {}", detail),
                    Style::default().fg(color),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::NONE)
            .style(Style::default()),
    );
    frame.render_widget(list, area);
}

/// Draw the post-run summary
fn draw_summary(frame: &mut Frame, area: Rect, app: &App, aggregate: AggregateStatus) {
    let lang = app.lang;
    let mut lines: Vec<Line> = Vec::new();

    if aggregate == AggregateStatus::Error {
        for item in app.state.with_status(CheckStatus::Error) {
            if let Some(detail) = check_text(item.id, item.status, lang).detail {
                lines.push(Line::from(Span::styled(
                    format!(" ✗ {}", detail),
                    Style::default().fg(Color::Red),
                )));
            }
        }
        if let Some(browser) = app.state.browser().filter(|b| !b.is_modern) {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                format!(" {}: {}", lang.text(StringId::CurrBrowser), browser.summary()),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::raw(""));
        lines.push(button_line("Enter", lang.text(StringId::BtnReload)));
    } else {
        if aggregate == AggregateStatus::Warning {
            lines.push(Line::from(Span::styled(
                format!(" ▲ {}", lang.text(StringId::NoticeTitle)),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            let browser_name = app
                .state
                .browser()
                .map(|b| b.name.to_string())
                .unwrap_or_default();
            for item in app.state.with_status(CheckStatus::Warning) {
                if let Some(detail) = check_text(item.id, item.status, lang).detail {
                    lines.push(Line::from(Span::styled(
                        format!("   • {} ({})", detail, browser_name),
                        Style::default().fg(Color::Yellow),
                    )));
                }
            }
            lines.push(Line::raw(""));
        }

        let desc = if aggregate == AggregateStatus::Warning {
            StringId::NoticeWarnDesc
        } else {
            StringId::NoticeSuccessDesc
        };
        lines.push(Line::from(Span::styled(
            format!(" {}", lang.text(desc)),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::raw(""));
        lines.push(button_line("Enter", lang.text(StringId::BtnReconnect)));
        lines.push(Line::raw(""));

        if app.show_detail {
            lines.extend(detail_lines(app));
        } else {
            lines.push(Line::from(Span::styled(
                format!(" [d] {}", lang.text(StringId::BtnDetails)),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// System details panel
fn detail_lines(app: &App) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    let browser = app.state.browser();
    let name = browser
        .map(|b| format!("{} {}", b.name, b.version))
        .unwrap_or_default();
    let os = browser.map(|b| b.os.to_string()).unwrap_or_default();
    let raw = browser.map(|b| b.raw_identity.clone()).unwrap_or_default();

    vec![
        Line::from(vec![
            Span::styled(
                format!(" {}", app.lang.text(StringId::SysInfo)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("  [d] ✕", dim),
        ]),
        Line::from(format!(" Browser: {}", name)),
        Line::from(format!(" OS: {}", os)),
        Line::from(Span::styled(format!(" {}", raw), dim)),
    ]
}

fn button_line(key: &str, label: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" [{}] ", key),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            label.to_string(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Footer: session id, version, language toggles
fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let dim = Style::default().fg(Color::DarkGray);

    let mut spans = vec![
        Span::styled(format!(" ID: {}", app.session_id), dim),
        Span::styled(
            format!("  Rakko diagnostic {}", env!("CARGO_PKG_VERSION")),
            dim,
        ),
        Span::raw("   "),
    ];

    for (i, lang) in Language::all().iter().enumerate() {
        let style = if *lang == app.lang {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            dim
        };
        spans.push(Span::styled(
            format!(" {}:{} ", i + 1, lang.toggle_label()),
            style,
        ));
    }

    if let Some(err) = &app.run_error {
        spans.push(Span::styled(
            format!("  {}", err),
            Style::default().fg(Color::Red),
        ));
    } else {
        spans.push(Span::styled("  q: Quit", dim));
    }

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(footer, area);
}

/// Ratatui color for a check status, same palette as
/// [`utils::status_term_color`]
fn status_tui_color(status: CheckStatus) -> Color {
    match status {
        CheckStatus::Pending => Color::DarkGray,
        CheckStatus::Running => Color::White,
        CheckStatus::Success => Color::Green,
        CheckStatus::Error => Color::Red,
        CheckStatus::Warning => Color::Yellow,
    }
}
