use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, RegisterFocus};
use crate::ui::render::centered_rect_fixed;
use crate::ui::styles;

const FIELD_WIDTH: usize = 24;

/// Render the account registration form as a centered box
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let height = if app.register_error.is_some() { 16 } else { 14 };
    let box_area = centered_rect_fixed(48, height, area);

    let mut lines = vec![];

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "    Create your account",
        styles::title_style(),
    )));
    lines.push(Line::from(""));

    lines.push(field_line(
        "Name:     ",
        &app.register_name,
        app.register_focus == RegisterFocus::Name,
        false,
    ));
    lines.push(field_line(
        "Email:    ",
        &app.register_email,
        app.register_focus == RegisterFocus::Email,
        false,
    ));
    lines.push(field_line(
        "Password: ",
        &app.register_password,
        app.register_focus == RegisterFocus::Password,
        true,
    ));
    lines.push(field_line(
        "Confirm:  ",
        &app.register_confirm,
        app.register_focus == RegisterFocus::Confirm,
        true,
    ));

    lines.push(Line::from(""));

    // Submit button
    let submit_focused = app.register_focus == RegisterFocus::Submit;
    let submit_style = if submit_focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    if submit_focused {
        lines.push(Line::from(vec![
            Span::raw("            ["),
            Span::styled(" ▶ Register ◀ ", submit_style),
            Span::raw("]"),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::raw("            ["),
            Span::styled("   Register   ", submit_style),
            Span::raw("]"),
        ]));
    }

    if let Some(ref error) = app.register_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("    {}", error),
            styles::error_style(),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "    Have an account? Esc, then 3 to sign in",
        styles::muted_style(),
    )));

    let block = Block::default()
        .title(" Register ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    frame.render_widget(Paragraph::new(lines).block(block), box_area);
}

fn field_line(label: &'static str, value: &str, focused: bool, masked: bool) -> Line<'static> {
    let style = if focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };

    let shown: String = if masked {
        "*".repeat(value.len().min(FIELD_WIDTH))
    } else {
        value.to_string()
    };
    let display = format!("{:<width$}", shown, width = FIELD_WIDTH);
    let cursor = if focused { "▌" } else { " " };

    Line::from(vec![
        Span::raw("    "),
        Span::styled(format!("{}[", label), styles::muted_style()),
        Span::styled(format!("{}{}", display, cursor), style),
        Span::styled("]", styles::muted_style()),
    ])
}
