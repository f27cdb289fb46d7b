//! Add-form and delete-prompt popup rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::theme::{Colors, Styles};

/// Render the add-movie form as a centered popup.
pub fn render_add_form(f: &mut Frame, state: &AppState) {
    let Some(form) = &state.add_form else {
        return;
    };

    let height = form.fields.len() as u16 + 4;
    let area = centered_rect(56, height, f.area());
    f.render_widget(Clear, area);

    let mut lines: Vec<Line> = form
        .fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let active = i == form.current;
            let label_style = if active {
                Style::default().fg(Colors::SECONDARY)
            } else {
                Styles::hint()
            };
            let mut spans = vec![
                Span::styled(format!("{:>22}: ", field.label), label_style),
                Span::raw(field.value.clone()),
            ];
            if active {
                spans.push(Span::styled("_", Style::default().fg(Colors::SECONDARY)));
            }
            Line::from(spans)
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Enter: next field   Esc: cancel",
        Styles::hint(),
    )));

    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Colors::PRIMARY))
            .title(" Add a Movie "),
    );
    f.render_widget(popup, area);
}

/// Render the delete-by-title prompt as a centered popup.
pub fn render_delete_prompt(f: &mut Frame, state: &AppState) {
    let Some(prompt) = &state.delete_prompt else {
        return;
    };

    let area = centered_rect(56, 5, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{}: ", prompt.label),
                Style::default().fg(Colors::SECONDARY),
            ),
            Span::raw(prompt.value.clone()),
            Span::styled("_", Style::default().fg(Colors::SECONDARY)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Enter: delete   Esc: cancel",
            Styles::hint(),
        )),
    ];

    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Colors::ERROR))
            .title(" Delete a Movie "),
    );
    f.render_widget(popup, area);
}

/// Center a fixed-height popup horizontally at `percent_x` of the frame.
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
