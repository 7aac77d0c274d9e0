use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::ui::styles;
use crate::utils::truncate;

/// Render the breed list page - one catalogue page plus a pager line
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    render_breed_table(frame, app, chunks[0]);
    render_pager(frame, app, chunks[1]);
}

fn render_breed_table(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!(" Cat Breeds - Page {} ", app.breeds_page + 1);

    let block = Block::default()
        .title(title)
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    if let Some(ref error) = app.breeds_error {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(format!("  {}", error), styles::error_style())),
            Line::from(""),
            Line::from(Span::styled("  Press r to retry", styles::muted_style())),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    }

    if app.breeds.is_empty() {
        let message = if app.breeds_loading {
            "  Loading cat breeds..."
        } else {
            "  No breeds on this page"
        };
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(message, styles::muted_style())),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    }

    let header = Row::new([
        Cell::from("Name"),
        Cell::from("Origin"),
        Cell::from("Description"),
    ])
    .style(styles::title_style())
    .height(1);

    // Borders plus the fixed name/origin columns
    let desc_width = (area.width as usize).saturating_sub(42);

    let rows: Vec<Row> = app
        .breeds
        .iter()
        .enumerate()
        .map(|(i, breed)| {
            let style = if i == app.breed_selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };

            let origin = breed.origin.as_deref().unwrap_or("-");

            Row::new(vec![
                Cell::from(truncate(&breed.name, 20)),
                Cell::from(origin.to_string()),
                Cell::from(truncate(&breed.short_description(), desc_width)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(22), // Name
        Constraint::Length(16), // Origin
        Constraint::Fill(1),    // Description
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(styles::selected_style());

    let mut state = TableState::default();
    state.select(Some(app.breed_selection));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_pager(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(" ")];

    if app.breeds_page > 0 {
        spans.push(Span::styled("[p]", styles::help_key_style()));
        spans.push(Span::styled(" previous  ", styles::muted_style()));
    }
    if app.has_more {
        spans.push(Span::styled("[n]", styles::help_key_style()));
        spans.push(Span::styled(" next  ", styles::muted_style()));
    }
    if app.breeds_loading && !app.breeds.is_empty() {
        spans.push(Span::styled("loading...", styles::muted_style()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
