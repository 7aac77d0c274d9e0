use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::Breed;
use crate::ui::styles;
use crate::utils::rating_bar;

/// Render the breed detail page. Long content scrolls with j/k.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let title = match app.breed {
        Some(ref breed) => format!(" {} ", breed.name),
        None => " Breed ".to_string(),
    };

    let lines = if let Some(ref error) = app.breed_error {
        vec![
            Line::from(""),
            Line::from(Span::styled(format!("  {}", error), styles::error_style())),
            Line::from(""),
            Line::from(Span::styled(
                "  Press r to retry or Esc to go back",
                styles::muted_style(),
            )),
        ]
    } else if let Some(ref breed) = app.breed {
        breed_lines(app, breed)
    } else if app.breed_loading {
        vec![
            Line::from(""),
            Line::from(Span::styled("  Loading breed...", styles::muted_style())),
        ]
    } else {
        vec![
            Line::from(""),
            Line::from(Span::styled("  No breed selected", styles::muted_style())),
        ]
    };

    let block = Block::default()
        .title(title)
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));

    frame.render_widget(paragraph, area);
}

fn breed_lines(app: &App, breed: &Breed) -> Vec<Line<'static>> {
    let placeholder = "-";
    let mut lines = vec![];

    // Name header
    lines.push(Line::from(Span::styled(
        breed.name.clone(),
        styles::title_style(),
    )));
    lines.push(Line::from(""));

    let origin = match (breed.origin.as_deref(), breed.country_code.as_deref()) {
        (Some(origin), Some(code)) => format!("{} ({})", origin, code),
        (Some(origin), None) => origin.to_string(),
        _ => placeholder.to_string(),
    };
    lines.push(Line::from(vec![
        Span::styled("Origin:    ", styles::muted_style()),
        Span::raw(origin),
    ]));

    let life_span = breed
        .life_span
        .as_deref()
        .map(|span| format!("{} years", span))
        .unwrap_or_else(|| placeholder.to_string());
    lines.push(Line::from(vec![
        Span::styled("Life span: ", styles::muted_style()),
        Span::raw(life_span),
    ]));

    let weight = breed
        .weight
        .as_ref()
        .and_then(|w| match (w.imperial.as_deref(), w.metric.as_deref()) {
            (Some(lb), Some(kg)) => Some(format!("{} lb ({} kg)", lb, kg)),
            (Some(lb), None) => Some(format!("{} lb", lb)),
            (None, Some(kg)) => Some(format!("{} kg", kg)),
            (None, None) => None,
        })
        .unwrap_or_else(|| placeholder.to_string());
    lines.push(Line::from(vec![
        Span::styled("Weight:    ", styles::muted_style()),
        Span::raw(weight),
    ]));

    if let Some(ref alt) = breed.alt_names {
        if !alt.trim().is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Also:      ", styles::muted_style()),
                Span::raw(alt.clone()),
            ]));
        }
    }

    lines.push(Line::from(""));

    // Description section
    lines.push(Line::from(Span::styled(
        "Description",
        styles::highlight_style(),
    )));
    let description = breed
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or("No description available");
    lines.push(Line::from(Span::raw(description.to_string())));
    lines.push(Line::from(""));

    if let Some(ref temperament) = breed.temperament {
        lines.push(Line::from(Span::styled(
            "Temperament",
            styles::highlight_style(),
        )));
        lines.push(Line::from(Span::raw(temperament.clone())));
        lines.push(Line::from(""));
    }

    // Rating scales, 1 to 5 dots each
    let ratings = breed.ratings();
    if !ratings.is_empty() {
        lines.push(Line::from(Span::styled(
            "Characteristics",
            styles::highlight_style(),
        )));
        for (label, value) in ratings {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<18}", label), styles::muted_style()),
                Span::styled(rating_bar(value, 5), styles::highlight_style()),
                Span::styled(format!("  {}/5", value), styles::muted_style()),
            ]));
        }
        lines.push(Line::from(""));
    }

    let traits = breed.traits();
    if !traits.is_empty() {
        lines.push(Line::from(Span::styled("Traits", styles::highlight_style())));
        lines.push(Line::from(Span::raw(traits.join(", "))));
        lines.push(Line::from(""));
    }

    // Photos
    lines.push(Line::from(Span::styled("Photos", styles::highlight_style())));
    if app.breed_images.is_empty() {
        let message = if app.breed_loading {
            "Loading photos..."
        } else {
            "No photos available"
        };
        lines.push(Line::from(Span::styled(message, styles::muted_style())));
    } else {
        for url in app.breed_images.iter().take(4) {
            lines.push(Line::from(Span::raw(format!("  {}", url))));
        }
    }
    lines.push(Line::from(""));

    if let Some(ref url) = breed.wikipedia_url {
        lines.push(Line::from(vec![
            Span::styled("Wikipedia: ", styles::muted_style()),
            Span::raw(url.clone()),
        ]));
    }

    lines
}
