//! Ratings/revenue visualization
//!
//! Terminal rendition of the original dual-axis figure: a bar chart of
//! average ratings (fixed 0-10 axis) stacked above a line chart of box-office
//! revenue (axis scaled to the catalog's maximum), one x position per movie
//! in catalog order.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::Line,
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::catalog::Catalog;
use crate::theme::{Colors, Styles};

/// Widest title shown under a rating bar.
const BAR_LABEL_WIDTH: usize = 12;

pub fn render_chart(f: &mut Frame, catalog: &Catalog, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Title
            Constraint::Percentage(48), // Rating bars
            Constraint::Min(8),         // Revenue line
            Constraint::Length(1),      // Hint
        ])
        .split(area);

    let title = Paragraph::new("Movie Analysis: Average Ratings and Box Office Revenue")
        .style(Styles::title())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_rating_bars(f, catalog, chunks[1]);
    render_revenue_line(f, catalog, chunks[2]);

    let hint = Paragraph::new("Esc/q/Enter: back to menu")
        .style(Styles::hint())
        .alignment(Alignment::Center);
    f.render_widget(hint, chunks[3]);
}

fn render_rating_bars(f: &mut Frame, catalog: &Catalog, area: Rect) {
    // Ratings are 0-10 with one decimal; bars carry the value x10 so the
    // fixed axis maximum is 100.
    let bars: Vec<Bar> = catalog
        .movies()
        .iter()
        .map(|m| {
            Bar::default()
                .value((m.average_rating * 10.0).round() as u64)
                .text_value(format!("{:.1}", m.average_rating))
                .label(Line::from(truncate(&m.title, BAR_LABEL_WIDTH)))
                .style(Style::default().fg(Colors::RATING_BAR))
                .value_style(Style::default().fg(Color::Black).bg(Colors::RATING_BAR))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Average rating (0-10) "),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_LABEL_WIDTH as u16 + 1)
        .bar_gap(1)
        .max(100);
    f.render_widget(chart, area);
}

fn render_revenue_line(f: &mut Frame, catalog: &Catalog, area: Rect) {
    let movies = catalog.movies();
    let points: Vec<(f64, f64)> = movies
        .iter()
        .enumerate()
        .map(|(i, m)| (i as f64, m.box_office))
        .collect();

    let max_revenue = movies
        .iter()
        .map(|m| m.box_office)
        .fold(1.0_f64, f64::max);
    let y_max = (max_revenue * 1.1).ceil();
    let x_max = movies.len().saturating_sub(1).max(1) as f64;

    let datasets = vec![Dataset::default()
        .name("Box office (millions)")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Colors::REVENUE_LINE))
        .data(&points)];

    let x_labels: Vec<String> = match movies {
        [] => vec![],
        [only] => vec![truncate(&only.title, BAR_LABEL_WIDTH)],
        [first, .., last] => vec![
            truncate(&first.title, BAR_LABEL_WIDTH),
            truncate(&last.title, BAR_LABEL_WIDTH),
        ],
    };

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Box office revenue (millions) "),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Colors::FG_SECONDARY))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Colors::FG_SECONDARY))
                .bounds([0.0, y_max])
                .labels(vec![
                    "0".to_string(),
                    format!("{:.0}", y_max / 2.0),
                    format!("{y_max:.0}"),
                ]),
        );
    f.render_widget(chart, area);
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        s.chars().take(width.saturating_sub(1)).collect::<String>() + "…"
    }
}
