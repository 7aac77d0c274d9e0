use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::render::centered_rect_fixed;
use crate::ui::styles;
use crate::utils::{initials, member_since};

/// Render the profile page for the signed-in account
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let box_area = centered_rect_fixed(48, 12, area);

    // The auth guard redirects before this page renders signed out, but a
    // session cleared mid-flight still needs something sensible on screen.
    let lines = match app.current_user() {
        Some(user) => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("    ({})", initials(&user.name)),
                styles::title_style(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("    "),
                Span::styled(user.name.clone(), styles::title_style()),
            ]),
            Line::from(vec![
                Span::raw("    "),
                Span::styled(user.email.clone(), styles::muted_style()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("    Member since: ", styles::muted_style()),
                Span::raw(member_since(app.session.login_timestamp())),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("    Press ", styles::muted_style()),
                Span::styled("x", styles::help_key_style()),
                Span::styled(" to sign out", styles::muted_style()),
            ]),
        ],
        None => vec![
            Line::from(""),
            Line::from(Span::styled("    Not signed in", styles::muted_style())),
            Line::from(""),
            Line::from(Span::styled(
                "    Press 3 to go to the sign-in page",
                styles::muted_style(),
            )),
        ],
    };

    let block = Block::default()
        .title(" Profile ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    frame.render_widget(Paragraph::new(lines).block(block), box_area);
}
