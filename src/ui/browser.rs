//! Recipe Browser Page
//!
//! Filter bar on top, the filtered recipe cards in the middle, status and
//! shortcuts at the bottom. Renders whatever the controller's visible list
//! holds; it never filters on its own.

use crate::app::{App, InputMode};
use crate::filter::{TypeFilter, is_quick};
use crate::models::Recipe;
use crate::ui::components::render_bottom_bar;
use crate::ui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListItem, ListState, Paragraph, Widget},
};

pub fn render(frame: &mut Frame, app: &App) {
    let main_area = frame.area();

    let block = Block::bordered()
        .title(" recipebox ")
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::BORDER));

    let inner_area = block.inner(main_area);
    block.render(main_area, frame.buffer_mut());

    let chunks = Layout::vertical([
        Constraint::Length(3), // Search
        Constraint::Length(3), // Filter chips
        Constraint::Fill(1),   // Recipe list
        Constraint::Length(3), // Bottom bar
    ])
    .split(inner_area);

    render_search(frame, chunks[0], app);
    render_filters(frame, chunks[1], app);
    render_recipes(frame, chunks[2], app);
    render_bottom_bar(frame, chunks[3], app);
}

fn render_search(frame: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::Search;
    let text = if app.criteria.search.is_empty() && !editing {
        Span::styled(
            "Rezepte durchsuchen... [/]",
            Style::default().fg(Theme::MUTED).italic(),
        )
    } else {
        Span::styled(
            format!("{}{}", app.criteria.search, if editing { "▏" } else { "" }),
            Style::default().fg(Theme::TEXT),
        )
    };

    let border = if editing { Theme::ACCENT } else { Theme::BORDER };
    Paragraph::new(Line::from(vec![Span::raw("  "), text]))
        .block(
            Block::bordered()
                .title(" Suche ")
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(border)),
        )
        .render(area, frame.buffer_mut());
}

fn render_filters(frame: &mut Frame, area: Rect, app: &App) {
    let criteria = &app.criteria;
    let chips = vec![
        chip("t", "Typ", criteria.recipe_type.label().to_string(), criteria.recipe_type != TypeFilter::All),
        chip("c", "Kategorie", criteria.category.to_string(), !criteria.category.is_all()),
        chip("b", "Beilage", criteria.carbohydrate.to_string(), !criteria.carbohydrate.is_all()),
        chip("l", "Land", criteria.country.to_string(), !criteria.country.is_all()),
        chip("d", "Tage", criteria.days.to_string(), !criteria.days.is_all()),
        chip("s", "Schnell", on_off(criteria.quick), criteria.quick),
        chip("g", "Gruppe", on_off(criteria.group_friendly), criteria.group_friendly),
    ];

    Paragraph::new(Line::from(chips.into_iter().flatten().collect::<Vec<_>>()))
        .block(
            Block::bordered()
                .title(format!(" Filter ({} von {}) ", app.visible.len(), app.recipes().len()))
                .title_bottom(if criteria.is_default() { "" } else { " [r] Zurücksetzen " })
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::BORDER)),
        )
        .render(area, frame.buffer_mut());
}

fn chip(key: &str, label: &str, value: String, active: bool) -> Vec<Span<'static>> {
    let value_style = if active {
        Style::default().fg(Theme::BASE).bg(Theme::ACCENT)
    } else {
        Style::default().fg(Theme::SUBTLE)
    };
    vec![
        Span::styled(format!(" [{key}] "), Style::default().fg(Theme::MUTED)),
        Span::styled(format!("{label}: "), Style::default().fg(Theme::TEXT)),
        Span::styled(format!(" {value} "), value_style),
    ]
}

fn on_off(flag: bool) -> String {
    if flag { "an".to_string() } else { "aus".to_string() }
}

fn render_recipes(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::bordered()
        .title(" Rezepte ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::BORDER));

    if let Some(message) = app.empty_message() {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(message, Style::default().fg(Theme::ERROR).bold())),
        ];
        if let Some(reason) = app.load_error() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                reason.to_string(),
                Style::default().fg(Theme::MUTED),
            )));
        }
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, frame.buffer_mut());
        return;
    }

    let items: Vec<ListItem> = app.visible_recipes().into_iter().map(recipe_card).collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Theme::SURFACE)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("❯ ");

    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn recipe_card(recipe: &Recipe) -> ListItem<'static> {
    let mut title = vec![Span::styled(
        recipe.name.clone(),
        Style::default().fg(Theme::TEXT).bold(),
    )];
    match recipe.vegetarian {
        Some(true) => title.push(Span::styled(
            "  🌱 Vegetarisch",
            Style::default().fg(Theme::VEGETARIAN),
        )),
        Some(false) => title.push(Span::styled("  Fleisch", Style::default().fg(Theme::MEAT))),
        None => {}
    }
    if is_quick(recipe) {
        title.push(Span::styled("  ⚡", Style::default().fg(Theme::HEADING)));
    }

    let mut meta = vec![recipe.category.clone()];
    if let Some(prep) = &recipe.prep_time {
        meta.push(format!("⏱️ {prep}"));
    }
    if let Some(country) = &recipe.country {
        meta.push(country.clone());
    }
    if let Some(days) = recipe.days {
        meta.push(format!("{days} Tage"));
    }

    ListItem::new(vec![
        Line::from(title),
        Line::from(Span::styled(
            format!("  {}", meta.join(" · ")),
            Style::default().fg(Theme::SUBTLE),
        )),
    ])
}
