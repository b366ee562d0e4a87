//! UI Components and Layout Module
//!
//! Reusable pieces shared by the browser page and its popups.
//!
//! # Components
//!
//! - **Bottom Bar**: status message on the left, context shortcuts on the right
//! - **Help Popup**: full key reference
//! - **Popup Area**: centred rectangle clamped to the terminal size

use crate::app::{App, InputMode};
use crate::ui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};

/// Renders the bottom bar with the status message and keyboard shortcuts.
pub fn render_bottom_bar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(2)]).split(area);

    let status = if let Some(error) = &app.error_message {
        Span::styled(format!(" {error} "), Style::default().fg(Theme::ERROR))
    } else if let Some(success) = &app.success_message {
        Span::styled(format!(" {success} "), Style::default().fg(Theme::SUCCESS))
    } else {
        Span::styled(format!(" Quelle: {} ", app.source), Style::default().fg(Theme::SUBTLE))
    };

    Paragraph::new(Line::from(status))
        .alignment(Alignment::Left)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::BORDER)),
        )
        .render(chunks[0], frame.buffer_mut());

    Paragraph::new(context_shortcuts(app))
        .alignment(Alignment::Right)
        .style(Style::default().fg(Theme::MUTED))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::BORDER)),
        )
        .render(chunks[1], frame.buffer_mut());
}

fn context_shortcuts(app: &App) -> &'static str {
    match (&app.input_mode, app.detail.is_some()) {
        (InputMode::Search, _) => " Tippen zum Filtern │ [⏎/Esc] Fertig ",
        (InputMode::HelpMenu, _) => " Beliebige Taste schließt die Hilfe ",
        (InputMode::Normal, true) => " [↑↓] Scrollen │ [y] Kopieren │ [Esc] Zurück │ [q] Beenden ",
        (InputMode::Normal, false) => {
            " [↑↓] Auswahl │ [⏎] Details │ [/] Suche │ [r] Zurücksetzen │ [?] Hilfe │ [q] Beenden "
        }
    }
}

/// A centred rectangle of at most `width` x `height` inside `area`.
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

const HELP_KEYS: &[(&str, &str)] = &[
    ("/", "Suche (Name, Kategorie, Zutaten)"),
    ("t", "Typ: Alle → Vegetarisch → Fleisch"),
    ("c", "Kategorie wechseln"),
    ("b", "Beilage (Kohlenhydrate) wechseln"),
    ("l", "Land wechseln"),
    ("d", "Anzahl Tage wechseln"),
    ("s", "Nur schnelle Rezepte (≤ 45 min)"),
    ("g", "Nur gruppentaugliche Rezepte"),
    ("r", "Alle Filter zurücksetzen"),
    ("⏎", "Rezeptdetails öffnen"),
    ("y", "Zutaten in die Zwischenablage kopieren"),
    ("q", "Beenden"),
];

/// Renders the key reference popup.
pub fn render_help_popup(frame: &mut Frame) {
    let area = popup_area(frame.area(), 60, HELP_KEYS.len() as u16 + 4);
    Clear.render(area, frame.buffer_mut());

    let lines: Vec<Line> = HELP_KEYS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("  {key:>3}  "), Style::default().fg(Theme::HEADING).bold()),
                Span::styled(*action, Style::default().fg(Theme::TEXT)),
            ])
        })
        .collect();

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .title(" Hilfe ")
                .title_alignment(Alignment::Center)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::ACCENT).bg(Theme::BASE)),
        )
        .render(area, frame.buffer_mut());
}
