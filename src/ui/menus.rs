//! Main menu, catalog table and status bar rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table},
    Frame,
};
use strum::IntoEnumIterator;

use super::header::HeaderRenderer;
use crate::app::{AppState, MenuItem};
use crate::catalog::Catalog;
use crate::theme::{Colors, Styles};

/// Render the main screen: banner, menu, catalog table and status line.
pub fn render_main_screen(
    f: &mut Frame,
    state: &AppState,
    catalog: &Catalog,
    area: Rect,
    header: &HeaderRenderer,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Banner
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Menu + catalog table
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    header.render_header(f, chunks[0]);
    header.render_title(f, chunks[1], "Movie Analysis Tool");

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[2]);

    render_menu(f, state, body[0]);
    render_catalog_table(f, catalog, body[1]);
    render_status_bar(f, state, chunks[3]);
}

fn render_menu(f: &mut Frame, state: &AppState, area: Rect) {
    let items: Vec<ListItem> = MenuItem::iter()
        .enumerate()
        .map(|(index, item)| {
            let style = if index == state.menu_selection {
                Styles::selected()
            } else {
                Style::default()
            };
            ListItem::new(format!(" {}. {}", index + 1, item)).style(style)
        })
        .collect();

    let menu = List::new(items).block(Block::default().borders(Borders::ALL).title(" Menu "));
    f.render_widget(menu, area);
}

fn render_catalog_table(f: &mut Frame, catalog: &Catalog, area: Rect) {
    let header = Row::new(["Title", "Rating", "Box Office", "Year", "Genre"])
        .style(Styles::title());

    let rows: Vec<Row> = catalog
        .movies()
        .iter()
        .map(|m| {
            Row::new(vec![
                Cell::from(m.title.clone()),
                Cell::from(format!("{:.1}", m.average_rating)),
                Cell::from(format!("{:.1}M", m.box_office)),
                Cell::from(m.release_year.to_string()),
                Cell::from(m.genre.clone()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(40),
        Constraint::Percentage(12),
        Constraint::Percentage(18),
        Constraint::Percentage(12),
        Constraint::Percentage(18),
    ];

    let title = format!(" Catalog ({} movies) ", catalog.len());
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(table, area);
}

fn render_status_bar(f: &mut Frame, state: &AppState, area: Rect) {
    let status = Paragraph::new(state.status_message.as_str())
        .style(Style::default().fg(Colors::SECONDARY))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Status ")
                .title_bottom(" ↑/↓ or 1-4: select  Enter: run  q: quit "),
        );
    f.render_widget(status, area);
}
