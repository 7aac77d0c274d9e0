use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::ui::styles;
use crate::utils::truncate;

/// Render the search page - query box on top, results below
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_query_box(frame, app, chunks[0]);
    render_results(frame, app, chunks[1]);
}

fn render_query_box(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(format!(" {}", app.search_query), styles::search_style()),
        Span::styled("▌", styles::search_style()),
    ]);

    let block = Block::default()
        .title(" Search breeds by name ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    if app.search_loading {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("  Searching...", styles::muted_style())),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    }

    if !app.searched {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Type a breed name and press Enter to search",
                styles::muted_style(),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    }

    if app.search_results.is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  No breeds found for \"{}\"", app.search_term),
                styles::muted_style(),
            )),
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

    let desc_width = (area.width as usize).saturating_sub(42);

    let rows: Vec<Row> = app
        .search_results
        .iter()
        .enumerate()
        .map(|(i, breed)| {
            let style = if i == app.search_selection {
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

    let title = format!(
        " {} result{} for \"{}\" ",
        app.search_results.len(),
        if app.search_results.len() == 1 { "" } else { "s" },
        app.search_term,
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(block.title(title).title_style(styles::muted_style()))
        .row_highlight_style(styles::selected_style());

    let mut state = TableState::default();
    state.select(Some(app.search_selection));

    frame.render_stateful_widget(table, area, &mut state);
}
