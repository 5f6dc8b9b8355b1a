// Modal UI components.
// The centered confirm dialog shown before a tab switch commits.

use ratatui::{prelude::*, widgets::*};

/// Draw the tab-switch confirm dialog on top of the current view.
pub fn draw_confirm_dialog(frame: &mut Frame) {
    let area = frame.area();

    // Create centered modal
    let modal_width = 48;
    let modal_height = 7;
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect::new(modal_x, modal_y, modal_width, modal_height);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Switch tab ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    let lines = vec![
        Line::from(""),
        Line::from("Are you sure you want to switch tabs?"),
        Line::from("Your changes will be saved first."),
        Line::from(""),
        Line::from(vec![
            Span::styled("y/Enter", Style::default().fg(Color::Yellow)),
            Span::styled(" = Yes  ", Style::default().fg(Color::DarkGray)),
            Span::styled("n/Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" = No ", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(dialog, modal_area);
}
