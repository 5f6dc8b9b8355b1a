// Content panel rendering.
// Shows the panel of the SELECTED tab; moving focus alone changes
// nothing here until the switch is confirmed.

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, PanelKind};
use crate::state::ConsoleLevel;

/// Draw the content area for the selected tab.
pub fn draw_panel(frame: &mut Frame, app: &App, area: Rect) {
    match app.tabs.selected_handle() {
        Some(PanelKind::Overview) => draw_overview(frame, app, area),
        Some(PanelKind::Activity) => draw_activity(frame, app, area),
        Some(PanelKind::Settings) => draw_settings(frame, app, area),
        Some(PanelKind::Scratch) => draw_scratch(frame, app, area),
        None => draw_unresolved(frame, app, area),
    }
}

fn draw_overview(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Overview ");
    let label = Style::default().fg(Color::DarkGray);

    let lines = vec![
        Line::from("Roving-focus tab demo."),
        Line::from("Arrow keys move focus without switching tabs; Enter asks"),
        Line::from("for confirmation before the switch is committed."),
        Line::from(""),
        Line::from(vec![
            Span::styled("focus:        ", label),
            Span::raw(app.tabs.current_id().unwrap_or("none")),
        ]),
        Line::from(vec![
            Span::styled("selected:     ", label),
            Span::raw(app.tabs.selected_id().unwrap_or("none")),
        ]),
        Line::from(vec![
            Span::styled("last focused: ", label),
            Span::raw(app.tabs.past_id().unwrap_or("none")),
        ]),
        Line::from(vec![
            Span::styled("orientation:  ", label),
            Span::raw(app.tabs.orientation().display()),
        ]),
        Line::from(vec![
            Span::styled("wrap:         ", label),
            Span::raw(if app.tabs.wrap() { "on" } else { "off" }),
        ]),
        Line::from(vec![
            Span::styled("manual:       ", label),
            Span::raw(if app.tabs.is_manual() { "on" } else { "off" }),
        ]),
        Line::from(vec![
            Span::styled("tabs:         ", label),
            Span::raw(app.tabs.len().to_string()),
        ]),
    ];

    let text = Paragraph::new(lines).block(block);
    frame.render_widget(text, area);
}

fn draw_activity(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Activity ");

    if app.console.is_empty() {
        let text = Paragraph::new("No activity yet")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let visible = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = app
        .console
        .recent(visible)
        .map(|msg| {
            let (icon, color) = match msg.level {
                ConsoleLevel::Error => ("❌", Color::Red),
                ConsoleLevel::Warn => ("⚠️", Color::Yellow),
                ConsoleLevel::Info => ("ℹ️", Color::Cyan),
            };

            Line::from(vec![
                Span::raw(format!("{} ", icon)),
                Span::styled(
                    msg.timestamp.format("%H:%M:%S").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(" "),
                Span::styled(msg.message.clone(), Style::default().fg(color)),
            ])
        })
        .collect();

    let text = Paragraph::new(lines).block(block);
    frame.render_widget(text, area);
}

fn draw_settings(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Settings ");
    let label = Style::default().fg(Color::DarkGray);
    let config = &app.config;

    let lines = vec![
        Line::from("Effective configuration, read from config.json at startup."),
        Line::from(""),
        Line::from(vec![
            Span::styled("wrap:                   ", label),
            Span::raw(config.wrap.to_string()),
        ]),
        Line::from(vec![
            Span::styled("manual:                 ", label),
            Span::raw(config.manual.to_string()),
        ]),
        Line::from(vec![
            Span::styled("orientation:            ", label),
            Span::raw(config.orientation.display()),
        ]),
        Line::from(vec![
            Span::styled("initial_tab:            ", label),
            Span::raw(config.initial_tab.as_deref().unwrap_or("none")),
        ]),
        Line::from(vec![
            Span::styled("revert_focus_on_cancel: ", label),
            Span::raw(config.revert_focus_on_cancel.to_string()),
        ]),
        Line::from(vec![
            Span::styled("unregister_policy:      ", label),
            Span::raw(config.unregister_policy.display()),
        ]),
    ];

    let text = Paragraph::new(lines).block(block);
    frame.render_widget(text, area);
}

fn draw_scratch(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!(" {} ", app.tabs.selected_id().unwrap_or("Scratch"));
    let block = Block::default().borders(Borders::ALL).title(title);

    let text = Paragraph::new("Scratch tab. Press x while it is focused to close it.")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
    frame.render_widget(text, area);
}

/// Selection does not resolve to a registered tab: either nothing is
/// selected or the selected tab was closed under the keep policy.
fn draw_unresolved(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" No tab ");

    let message = match app.tabs.selected_id() {
        Some(id) => format!("Selection points at \"{id}\", which is no longer registered"),
        None => "No tab selected".to_string(),
    };

    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
    frame.render_widget(text, area);
}
