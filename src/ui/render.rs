use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, AppState, Route};

use super::pages;
use super::styles;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Nav bar
            Constraint::Min(10),   // Main content
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0]);
    render_nav_bar(frame, app, chunks[1]);
    render_page(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);

    // Render overlays
    if matches!(app.state, AppState::ShowingHelp) {
        render_help_overlay(frame, app);
    }

    if matches!(app.state, AppState::ConfirmingQuit) {
        render_quit_overlay(frame);
    }
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = "  Catwalk";
    let right = match app.current_user() {
        Some(user) => format!("{} | [?] Help", user.name),
        None => "[?] Help".to_string(),
    };

    let title_line = Line::from(vec![
        Span::styled(title, styles::title_style()),
        Span::raw(" ".repeat(
            area.width
                .saturating_sub(title.len() as u16 + right.len() as u16 + 4)
                as usize,
        )),
        Span::styled(right, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(title_line).block(block);
    frame.render_widget(paragraph, area);
}

fn render_nav_bar(frame: &mut Frame, app: &App, area: Rect) {
    let on_breeds = matches!(app.route, Route::Home | Route::Breed(_));

    // Signed-in sessions swap the account entries for the profile
    let mut items: Vec<(&str, bool)> = vec![
        ("[1] Breeds", on_breeds),
        ("[2] Search", app.route == Route::Search),
    ];
    if app.is_authenticated() {
        items.push(("[3] Profile", app.route == Route::Profile));
    } else {
        items.push(("[3] Sign In", app.route == Route::Login));
        items.push(("[4] Register", app.route == Route::Register));
    }

    let mut spans = vec![Span::raw(" ")];
    for (i, (label, selected)) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style()));
        }
        if *selected {
            spans.push(Span::styled(*label, styles::nav_style(true)));
        } else {
            spans.push(Span::styled(*label, styles::muted_style()));
        }
    }

    let line = Line::from(spans);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}

fn render_page(frame: &mut Frame, app: &App, area: Rect) {
    match app.route {
        Route::Home => pages::home::render(frame, app, area),
        Route::Breed(_) => pages::breed::render(frame, app, area),
        Route::Search => pages::search::render(frame, app, area),
        Route::Login => pages::login::render(frame, app, area),
        Route::Register => pages::register::render(frame, app, area),
        Route::Profile => pages::profile::render(frame, app, area),
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = "[?] help | [q]uit";

    let left_text = if let Some(ref msg) = app.status_message {
        format!(" {} ", msg)
    } else {
        let hint = match app.route {
            Route::Home => "j/k move | Enter open | n/p page | r reload",
            Route::Breed(_) => "j/k scroll | r reload | Esc back",
            Route::Search => "type to edit | Enter search | Esc clear",
            Route::Login | Route::Register => "Tab moves | Enter submits | Esc leaves",
            Route::Profile => "x sign out | Esc back",
        };
        format!(" {} ", hint)
    };

    let right_text = format!(" {} ", shortcuts);

    // Show the API base on the breed list so a misconfigured server is obvious
    let center_text = if matches!(app.route, Route::Home) {
        app.config.resolved_api_url()
    } else {
        String::new()
    };

    let width = area.width as usize;

    if center_text.is_empty() {
        // No center text - just left and right
        let padding_len = width
            .saturating_sub(left_text.len())
            .saturating_sub(right_text.len());
        let status_line = Line::from(vec![
            Span::styled(left_text, styles::muted_style()),
            Span::raw(" ".repeat(padding_len)),
            Span::styled(right_text, styles::muted_style()),
        ]);
        let paragraph = Paragraph::new(status_line).style(styles::status_bar_style());
        frame.render_widget(paragraph, area);
    } else {
        // With center text - center it absolutely, regardless of left/right content
        let center_start = (width.saturating_sub(center_text.len())) / 2;
        let left_pad = center_start.saturating_sub(left_text.len());
        let right_start = center_start + center_text.len();
        let right_pad = width
            .saturating_sub(right_start)
            .saturating_sub(right_text.len());

        let status_line = Line::from(vec![
            Span::styled(left_text, styles::muted_style()),
            Span::raw(" ".repeat(left_pad)),
            Span::styled(center_text, styles::muted_style()),
            Span::raw(" ".repeat(right_pad)),
            Span::styled(right_text, styles::muted_style()),
        ]);
        let paragraph = Paragraph::new(status_line).style(styles::status_bar_style());
        frame.render_widget(paragraph, area);
    }
}

fn render_help_overlay(frame: &mut Frame, _app: &App) {
    // Fixed size dialog matching the quit overlay
    let area = centered_rect_fixed(52, 25, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let version = env!("CARGO_PKG_VERSION");

    let help_text = vec![
        // ASCII Art Logo (centered for 52-width box, 50 interior)
        Line::from(Span::styled(
            "              ╔═╗╔═╗╔╦╗╦ ╦╔═╗╦  ╦╔═",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            "              ║  ╠═╣ ║ ║║║╠═╣║  ╠╩╗",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            "              ╚═╝╩ ╩ ╩ ╚╩╝╩ ╩╩═╝╩ ╩",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            format!("                  version {}", version),
            styles::muted_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Navigation", styles::highlight_style())),
        Line::from(vec![
            Span::styled("  1-4       ", styles::help_key_style()),
            Span::styled("Switch pages", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  j/k, ↑/↓  ", styles::help_key_style()),
            Span::styled("Move / scroll", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  PgUp/PgDn ", styles::help_key_style()),
            Span::styled("Jump by ten", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  Enter     ", styles::help_key_style()),
            Span::styled("Open the selected breed", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  Esc       ", styles::help_key_style()),
            Span::styled("Go back / close", styles::help_desc_style()),
        ]),
        Line::from(""),
        Line::from(Span::styled(" Breeds", styles::highlight_style())),
        Line::from(vec![
            Span::styled("  n/p       ", styles::help_key_style()),
            Span::styled("Next / previous page", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  r         ", styles::help_key_style()),
            Span::styled("Reload the current page", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  /         ", styles::help_key_style()),
            Span::styled("Jump to search", styles::help_desc_style()),
        ]),
        Line::from(""),
        Line::from(Span::styled(" Account", styles::highlight_style())),
        Line::from(vec![
            Span::styled("  3 / 4     ", styles::help_key_style()),
            Span::styled("Sign in or register", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  x         ", styles::help_key_style()),
            Span::styled("Sign out (profile page)", styles::help_desc_style()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("       Press ", styles::muted_style()),
            Span::styled("?", styles::help_key_style()),
            Span::styled(" or ", styles::muted_style()),
            Span::styled("Esc", styles::help_key_style()),
            Span::styled(" to close", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    let paragraph = Paragraph::new(help_text).block(block);

    frame.render_widget(paragraph, area);
}

fn render_quit_overlay(frame: &mut Frame) {
    // Fixed size dialog
    let area = centered_rect_fixed(46, 10, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "           ╔═╗╔═╗╔╦╗╦ ╦╔═╗╦  ╦╔═",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            "           ║  ╠═╣ ║ ║║║╠═╣║  ╠╩╗",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            "           ╚═╝╩ ╩ ╩ ╚╩╝╩ ╩╩═╝╩ ╩",
            styles::title_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "   Are you sure you want to quit?",
            styles::highlight_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("   Press ", styles::muted_style()),
            Span::styled("[Y]", styles::help_key_style()),
            Span::styled(" to quit, ", styles::muted_style()),
            Span::styled("[N]", styles::help_key_style()),
            Span::styled(" to cancel", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(paragraph, area);
}

/// Create a centered rectangle with fixed dimensions
pub(crate) fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
