// Tab bar rendering.
// The committed selection is highlighted; the roving focus is
// underlined. The two differ while a switch is pending confirmation.

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, PanelKind};

/// Draw the tab bar at the top of the screen.
pub fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let current = app.tabs.current_id();
    let selected = app.tabs.selected_id();

    let tab_titles: Vec<Line> = app
        .tabs
        .stops()
        .iter()
        .map(|stop| {
            let title = match stop.handle() {
                PanelKind::Scratch => stop.id().to_string(),
                kind => kind.title().to_string(),
            };

            let is_selected = selected == Some(stop.id());
            let is_focused = current == Some(stop.id());

            let mut style = if is_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if is_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };
            if is_focused {
                style = style.add_modifier(Modifier::UNDERLINED);
            }

            Line::from(Span::styled(title, style))
        })
        .collect();

    // A dangling selection highlights nothing.
    let selected_index = selected.and_then(|id| {
        app.tabs
            .stops()
            .iter()
            .position(|stop| stop.id() == id)
    });

    let tabs_widget = Tabs::new(tab_titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" tabgate ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .select(selected_index)
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider(Span::raw(" │ "));

    frame.render_widget(tabs_widget, area);
}
