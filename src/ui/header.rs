//! Banner and title rendering

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::Colors;

/// Renders the top banner and screen titles.
pub struct HeaderRenderer {
    banner_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    pub fn new() -> Self {
        Self {
            banner_lines: Self::create_banner(),
        }
    }

    pub fn render_header(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let header = Paragraph::new(self.banner_lines.clone())
            .block(Block::default().borders(Borders::NONE))
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    pub fn render_title(&self, f: &mut Frame, area: Rect, title: &str) {
        let title_widget = Paragraph::new(title)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Colors::PRIMARY));
        f.render_widget(title_widget, area);
    }

    fn create_banner() -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                "┌─┐┬┌┐┌┌─┐┌┬┐┬ ┬┬",
                Style::default().fg(Colors::PRIMARY),
            )),
            Line::from(Span::styled(
                "│  ││││├┤  │ │ ││",
                Style::default().fg(Colors::PRIMARY),
            )),
            Line::from(Span::styled(
                "└─┘┴┘└┘└─┘ ┴ └─┘┴",
                Style::default()
                    .fg(Colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
        ]
    }
}
