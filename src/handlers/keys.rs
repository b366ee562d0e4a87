//! Keyboard Input Handling Module
//!
//! Translates key presses into controller operations. Every filter key maps
//! to exactly one `App` method, which re-filters before returning.

use crate::app::{App, InputMode};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main keyboard event handler and dispatcher.
/// Returns true when the application should quit.
pub fn handle_key_events(key: KeyEvent, app: &mut App) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match app.input_mode {
        InputMode::Search => return handle_search_keys(key, app),
        InputMode::HelpMenu => {
            app.input_mode = InputMode::Normal;
            app.needs_redraw = true;
            return false;
        }
        InputMode::Normal => {}
    }

    if app.detail.is_some() {
        return handle_detail_keys(key, app);
    }

    handle_browser_keys(key, app)
}

/// Search input updates the criteria on every keystroke.
fn handle_search_keys(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            app.needs_redraw = true;
        }
        KeyCode::Backspace => {
            let mut text = app.criteria.search.clone();
            text.pop();
            app.set_search(text);
        }
        KeyCode::Char(c) => {
            let mut text = app.criteria.search.clone();
            text.push(c);
            app.set_search(text);
        }
        _ => {}
    }
    false
}

fn handle_detail_keys(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter => app.close_detail(),
        KeyCode::Down | KeyCode::Char('j') => {
            app.detail_scroll = app.detail_scroll.saturating_add(1);
            app.needs_redraw = true;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.detail_scroll = app.detail_scroll.saturating_sub(1);
            app.needs_redraw = true;
        }
        KeyCode::Char('y') => {
            if let Some(id) = app.detail {
                app.copy_ingredients(id);
            }
        }
        _ => {}
    }
    false
}

fn handle_browser_keys(key: KeyEvent, app: &mut App) -> bool {
    app.clear_messages();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Char('?') => app.input_mode = InputMode::HelpMenu,
        KeyCode::Char('/') => app.input_mode = InputMode::Search,
        KeyCode::Down | KeyCode::Char('j') => app.next_recipe(),
        KeyCode::Up | KeyCode::Char('k') => app.previous_recipe(),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char('y') => {
            if let Some(id) = app.selected_id() {
                app.copy_ingredients(id);
            }
        }
        KeyCode::Char('t') => app.cycle_type(),
        KeyCode::Char('c') => app.cycle_category(),
        KeyCode::Char('b') => app.cycle_carbohydrate(),
        KeyCode::Char('l') => app.cycle_country(),
        KeyCode::Char('d') => app.cycle_days(),
        KeyCode::Char('s') => app.toggle_quick(),
        KeyCode::Char('g') => app.toggle_group_friendly(),
        KeyCode::Char('r') => app.reset(),
        _ => {}
    }

    app.needs_redraw = true;
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TypeFilter;
    use crate::models::{RecipeSource, RecipeStore};

    fn app() -> App {
        let store = RecipeStore::from_json(
            r#"{"recipes":[
                {"id":1,"name":"Dal","category":"Curry","vegetarian":true,"ingredients":["Linsen"]},
                {"id":2,"name":"Bolognese","category":"Pasta","vegetarian":false,"ingredients":["Hack"]}
            ]}"#,
        );
        App::new(store, &RecipeSource::parse("recipes.json"))
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_key_events(KeyEvent::new(code, KeyModifiers::NONE), app)
    }

    #[test]
    fn typing_in_search_mode_filters_live() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Search);

        for c in "lins".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.visible, vec![1]);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.criteria.search, "lin");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.visible, vec![1]);
    }

    #[test]
    fn filter_keys_drive_the_controller() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.criteria.recipe_type, TypeFilter::Vegetarian);
        assert_eq!(app.visible, vec![1]);

        press(&mut app, KeyCode::Char('r'));
        assert!(app.criteria.is_default());
        assert_eq!(app.visible, vec![1, 2]);
    }

    #[test]
    fn enter_opens_and_esc_closes_detail() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.detail, Some(2));

        assert!(!press(&mut app, KeyCode::Esc));
        assert!(app.detail.is_none());
    }

    #[test]
    fn q_quits_outside_search() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.criteria.search, "q");

        press(&mut app, KeyCode::Esc);
        assert!(press(&mut app, KeyCode::Char('q')));
    }
}
