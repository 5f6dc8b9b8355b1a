// UI module for rendering the TUI.
// Layout: tab bar, content panel for the selected tab, status bar, and
// the confirm dialog overlay.

mod modal;
mod panel;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(1),    // Content panel
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);
    panel::draw_panel(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    // Confirm dialog (rendered last, on top of everything)
    if app.dialog.visible() {
        modal::draw_confirm_dialog(frame);
    }
}

/// Draw the status bar with keybinding hints and the pointer state.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hint = Style::default().fg(Color::DarkGray);

    let mut hints = if app.dialog.visible() {
        vec![
            Span::raw(" y/↵ "),
            Span::styled("Confirm", hint),
            Span::raw("  n/Esc "),
            Span::styled("Cancel", hint),
        ]
    } else {
        let arrows = if app.tabs.orientation().is_horizontal() {
            " ←→ "
        } else {
            " ↑↓ "
        };
        vec![
            Span::raw(arrows),
            Span::styled("Rove", hint),
            Span::raw("  ↵ "),
            Span::styled("Activate", hint),
            Span::raw("  o "),
            Span::styled("Axis", hint),
            Span::raw("  a "),
            Span::styled("Add", hint),
            Span::raw("  x "),
            Span::styled("Close", hint),
            Span::raw("  r "),
            Span::styled("Reset", hint),
            Span::raw("  q "),
            Span::styled("Quit", hint),
        ]
    };

    hints.push(Span::styled(
        format!(
            "  focus: {}  selected: {}",
            app.tabs.current_id().unwrap_or("-"),
            app.tabs.selected_id().unwrap_or("-")
        ),
        hint,
    ));

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}
