use crate::app::App;
use crate::models::Recipe;
use crate::ui::components::popup_area;
use crate::ui::theme::Theme;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};

/// Render the detail view of the open recipe as a floating popup
pub fn render_detail_popup(frame: &mut Frame, app: &App) {
    let Some(recipe) = app.detail_recipe() else {
        return;
    };

    let area = popup_area(frame.area(), 80, 34);
    Clear.render(area, frame.buffer_mut());

    let block = Block::bordered()
        .title(format!(" {} ", recipe.name))
        .title_alignment(Alignment::Center)
        .title_bottom(Line::from(" [↑↓] Scrollen │ [y] Zutaten kopieren │ [Esc] Schließen ").centered())
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::ACCENT).bg(Theme::BASE));

    Paragraph::new(detail_lines(recipe))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0))
        .render(area, frame.buffer_mut());
}

fn detail_lines(recipe: &Recipe) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    field(&mut lines, "Kategorie", Some(recipe.category.clone()));
    field(&mut lines, "Zubereitungszeit", recipe.prep_time.clone());
    field(&mut lines, "Kochzeit", recipe.cook_time.clone());
    let total = recipe.total_minutes();
    if total > 0 {
        field(&mut lines, "Gesamt", Some(format!("{total} min")));
    }
    field(&mut lines, "Beilage", recipe.carbohydrate_source.clone());
    field(&mut lines, "Land", recipe.country.clone());
    field(&mut lines, "Tage", recipe.days.map(|d| d.to_string()));
    if recipe.is_vegetarian() {
        lines.push(Line::from(Span::styled(
            "🌱 Vegetarisch",
            Style::default().fg(Theme::VEGETARIAN),
        )));
    }
    if recipe.is_group_friendly() {
        lines.push(Line::from(Span::styled(
            "👥 Gruppentauglich",
            Style::default().fg(Theme::SUCCESS),
        )));
    }

    heading(&mut lines, "Zutaten:");
    for ingredient in &recipe.ingredients {
        lines.push(Line::from(Span::styled(
            format!("  • {ingredient}"),
            Style::default().fg(Theme::TEXT),
        )));
    }

    if !recipe.instructions.is_empty() {
        heading(&mut lines, "Zubereitung:");
        for (i, step) in recipe.instructions.lines().iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}. ", i + 1), Style::default().fg(Theme::MUTED)),
                Span::styled(step.clone(), Style::default().fg(Theme::TEXT)),
            ]));
        }
    }

    if let Some(notes) = recipe.notes.as_ref().filter(|n| !n.is_empty()) {
        heading(&mut lines, "Notizen:");
        for note in notes {
            lines.push(Line::from(Span::styled(
                format!("  – {note}"),
                Style::default().fg(Theme::SUBTLE).italic(),
            )));
        }
    }

    if recipe.image.is_some() || recipe.youtube.is_some() {
        lines.push(Line::from(""));
        field(&mut lines, "Bild", recipe.image.clone());
        field(&mut lines, "Video", recipe.youtube.clone());
    }

    lines
}

fn field(lines: &mut Vec<Line<'static>>, label: &str, value: Option<String>) {
    if let Some(value) = value {
        lines.push(Line::from(vec![
            Span::styled(format!("{label}: "), Style::default().fg(Theme::SUBTLE).bold()),
            Span::styled(value, Style::default().fg(Theme::TEXT)),
        ]));
    }
}

fn heading(lines: &mut Vec<Line<'static>>, title: &str) {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(Theme::HEADING).bold(),
    )));
}
