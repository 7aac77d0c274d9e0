use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, LoginFocus};
use crate::ui::render::centered_rect_fixed;
use crate::ui::styles;

const FIELD_WIDTH: usize = 24;

/// Render the sign-in form as a centered box
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let height = if app.login_error.is_some() { 14 } else { 12 };
    let box_area = centered_rect_fixed(48, height, area);

    let mut lines = vec![];

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "    Welcome back",
        styles::title_style(),
    )));
    lines.push(Line::from(""));

    // Email field
    let email_focused = app.login_focus == LoginFocus::Email;
    let email_style = if email_focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    let email_display = format!("{:<width$}", app.login_email, width = FIELD_WIDTH);
    let cursor = if email_focused { "▌" } else { " " };
    lines.push(Line::from(vec![
        Span::raw("    "),
        Span::styled("Email:    [", styles::muted_style()),
        Span::styled(format!("{}{}", email_display, cursor), email_style),
        Span::styled("]", styles::muted_style()),
    ]));

    // Password field, masked
    let password_focused = app.login_focus == LoginFocus::Password;
    let password_style = if password_focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    let password_masked: String = "*".repeat(app.login_password.len().min(FIELD_WIDTH));
    let password_display = format!("{:<width$}", password_masked, width = FIELD_WIDTH);
    let cursor = if password_focused { "▌" } else { " " };
    lines.push(Line::from(vec![
        Span::raw("    "),
        Span::styled("Password: [", styles::muted_style()),
        Span::styled(format!("{}{}", password_display, cursor), password_style),
        Span::styled("]", styles::muted_style()),
    ]));

    lines.push(Line::from(""));

    // Submit button
    let submit_focused = app.login_focus == LoginFocus::Submit;
    let submit_style = if submit_focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    if submit_focused {
        lines.push(Line::from(vec![
            Span::raw("             ["),
            Span::styled(" ▶ Sign In ◀ ", submit_style),
            Span::raw("]"),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::raw("             ["),
            Span::styled("   Sign In   ", submit_style),
            Span::raw("]"),
        ]));
    }

    if let Some(ref error) = app.login_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("    {}", error),
            styles::error_style(),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "    No account? Esc, then 4 to register",
        styles::muted_style(),
    )));

    let block = Block::default()
        .title(" Sign In ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    frame.render_widget(Paragraph::new(lines).block(block), box_area);
}
