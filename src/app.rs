use crate::clipboard;
use crate::error::LoadError;
use crate::filter::{self, FilterCriteria, Selection, TypeFilter};
use crate::models::{Recipe, RecipeSource, RecipeStore};
use anyhow::Result;
use tracing::{debug, info, warn};

pub const LOAD_ERROR_MESSAGE: &str = "Fehler beim Laden der Rezepte.";
pub const NO_RESULTS_MESSAGE: &str = "Keine Rezepte gefunden.";

/// Outcome of the one load that happens at startup.
/// A failed load leaves the app with an empty collection and the error text;
/// there is no retry and no partial list.
#[derive(Debug)]
pub enum LoadState {
    Ready(RecipeStore),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Search,
    HelpMenu,
}

/// Main Application State Container
/// Owns the loaded collection, the single filter criteria value and the
/// currently visible ids. Every user action goes through one method here,
/// mutates exactly one criteria field and re-runs the filter before
/// returning, so the view is never out of date.
#[derive(Debug)]
pub struct App {
    pub load_state: LoadState,
    pub source: String,
    pub criteria: FilterCriteria,
    pub visible: Vec<u32>,
    pub selected: usize,
    pub detail: Option<u32>,
    pub detail_scroll: u16,
    pub input_mode: InputMode,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub needs_redraw: bool,
}

impl App {
    /// Creates the app from the result of the startup load.
    pub fn new(loaded: Result<RecipeStore, LoadError>, source: &RecipeSource) -> Self {
        let load_state = match loaded {
            Ok(store) => LoadState::Ready(store),
            Err(e) => {
                warn!(source = %source, error = %e, "Recipe collection unavailable");
                LoadState::Failed(e.to_string())
            }
        };

        let mut app = Self {
            load_state,
            source: source.to_string(),
            criteria: FilterCriteria::default(),
            visible: Vec::new(),
            selected: 0,
            detail: None,
            detail_scroll: 0,
            input_mode: InputMode::Normal,
            error_message: None,
            success_message: None,
            needs_redraw: true,
        };

        app.refilter();
        app
    }

    pub fn store(&self) -> Option<&RecipeStore> {
        match &self.load_state {
            LoadState::Ready(store) => Some(store),
            LoadState::Failed(_) => None,
        }
    }

    /// The full collection, empty when loading failed.
    pub fn recipes(&self) -> &[Recipe] {
        self.store().map(RecipeStore::recipes).unwrap_or(&[])
    }

    pub fn load_error(&self) -> Option<&str> {
        match &self.load_state {
            LoadState::Failed(reason) => Some(reason.as_str()),
            LoadState::Ready(_) => None,
        }
    }

    /// Re-runs the filter over the whole collection.
    pub fn refilter(&mut self) {
        let visible: Vec<u32> = filter::apply(&self.criteria, self.recipes())
            .iter()
            .map(|r| r.id)
            .collect();

        debug!(
            active = ?filter::active_dimensions(&self.criteria),
            visible = visible.len(),
            "Filtered recipes"
        );

        self.visible = visible;
        if self.visible.is_empty() {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(self.visible.len() - 1);
        }
        self.needs_redraw = true;
    }

    pub fn visible_recipes(&self) -> Vec<&Recipe> {
        let Some(store) = self.store() else {
            return Vec::new();
        };
        self.visible
            .iter()
            .filter_map(|id| store.find_by_id(*id))
            .collect()
    }

    /// Message for an empty list, if the list is empty.
    pub fn empty_message(&self) -> Option<&'static str> {
        if self.load_error().is_some() {
            Some(LOAD_ERROR_MESSAGE)
        } else if self.visible.is_empty() {
            Some(NO_RESULTS_MESSAGE)
        } else {
            None
        }
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.criteria.set_search(text);
        self.refilter();
    }

    pub fn set_type(&mut self, recipe_type: TypeFilter) {
        self.criteria.set_type(recipe_type);
        self.refilter();
    }

    pub fn set_category(&mut self, category: Selection<String>) {
        self.criteria.set_category(category);
        self.refilter();
    }

    pub fn set_carbohydrate(&mut self, carbohydrate: Selection<String>) {
        self.criteria.set_carbohydrate(carbohydrate);
        self.refilter();
    }

    pub fn set_country(&mut self, country: Selection<String>) {
        self.criteria.set_country(country);
        self.refilter();
    }

    pub fn set_days(&mut self, days: Selection<u32>) {
        self.criteria.set_days(days);
        self.refilter();
    }

    pub fn toggle_quick(&mut self) {
        self.criteria.toggle_quick();
        self.refilter();
    }

    pub fn toggle_group_friendly(&mut self) {
        self.criteria.toggle_group_friendly();
        self.refilter();
    }

    pub fn cycle_type(&mut self) {
        self.set_type(self.criteria.recipe_type.next());
    }

    pub fn cycle_category(&mut self) {
        let options = self.store().map(RecipeStore::categories).unwrap_or_default();
        self.set_category(self.criteria.category.cycle(&options));
    }

    pub fn cycle_carbohydrate(&mut self) {
        let options = self
            .store()
            .map(RecipeStore::carbohydrate_sources)
            .unwrap_or_default();
        self.set_carbohydrate(self.criteria.carbohydrate.cycle(&options));
    }

    pub fn cycle_country(&mut self) {
        let options = self.store().map(RecipeStore::countries).unwrap_or_default();
        self.set_country(self.criteria.country.cycle(&options));
    }

    pub fn cycle_days(&mut self) {
        let options = self.store().map(RecipeStore::day_counts).unwrap_or_default();
        self.set_days(self.criteria.days.cycle(&options));
    }

    /// Restores every filter to its default, clears the search input and
    /// closes the detail view.
    pub fn reset(&mut self) {
        self.criteria.reset();
        self.selected = 0;
        self.detail = None;
        self.detail_scroll = 0;
        self.input_mode = InputMode::Normal;
        self.clear_messages();
        info!("Filters reset");
        self.refilter();
    }

    pub fn next_recipe(&mut self) {
        if !self.visible.is_empty() {
            self.selected = (self.selected + 1) % self.visible.len();
            self.needs_redraw = true;
        }
    }

    pub fn previous_recipe(&mut self) {
        if !self.visible.is_empty() {
            self.selected = if self.selected > 0 {
                self.selected - 1
            } else {
                self.visible.len() - 1
            };
            self.needs_redraw = true;
        }
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.visible.get(self.selected).copied()
    }

    /// Opens the detail view for `id`. Unknown ids are ignored.
    pub fn select_recipe(&mut self, id: u32) {
        if self.store().and_then(|s| s.find_by_id(id)).is_none() {
            return;
        }
        self.detail = Some(id);
        self.detail_scroll = 0;
        self.needs_redraw = true;
    }

    pub fn open_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.select_recipe(id);
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
        self.detail_scroll = 0;
        self.needs_redraw = true;
    }

    pub fn detail_recipe(&self) -> Option<&Recipe> {
        self.detail
            .and_then(|id| self.store().and_then(|s| s.find_by_id(id)))
    }

    /// Copies the ingredients of `id` to the clipboard. Unknown ids are ignored.
    pub fn copy_ingredients(&mut self, id: u32) {
        self.copy_ingredients_with(id, clipboard::copy_text);
    }

    pub fn copy_ingredients_with(&mut self, id: u32, copy: impl FnOnce(&str) -> Result<()>) {
        let Some(recipe) = self.store().and_then(|s| s.find_by_id(id)) else {
            return;
        };
        let name = recipe.name.clone();
        let text = clipboard::ingredients_text(recipe);

        match copy(&text) {
            Ok(()) => {
                info!(id, "Copied ingredients to clipboard");
                self.set_success_message(format!("Zutaten von {name} kopiert"));
            }
            Err(e) => {
                warn!(id, error = %e, "Clipboard copy failed");
                self.set_error_message(e.to_string());
            }
        }
    }

    pub fn set_error_message(&mut self, message: String) {
        self.error_message = Some(message);
        self.success_message = None;
        self.needs_redraw = true;
    }

    pub fn set_success_message(&mut self, message: String) {
        self.success_message = Some(message);
        self.error_message = None;
        self.needs_redraw = true;
    }

    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    const DOCUMENT: &str = r#"{"recipes": [
        {"id": 10, "name": "Kartoffelsuppe", "category": "Suppe", "vegetarian": true,
         "ingredients": ["Kartoffeln", "Lauch"], "prepTime": "15 min", "cookTime": "25 min",
         "carbohydrateSource": "Kartoffeln", "country": "Deutschland"},
        {"id": 20, "name": "Rinderrouladen", "category": "Fleisch", "vegetarian": false,
         "ingredients": ["Rind", "Gurken"], "prepTime": "50 min", "cookTime": "2 Stunden",
         "days": 2, "groupFriendly": true, "country": "Deutschland"},
        {"id": 30, "name": "Risotto", "category": "Hauptgericht", "vegetarian": true,
         "ingredients": ["Arborioreis", "Parmesan"], "carbohydrateSource": "Reis",
         "country": "Italien", "groupFriendly": true}
    ]}"#;

    fn app() -> App {
        let source = RecipeSource::parse("recipes.json");
        App::new(RecipeStore::from_json(DOCUMENT), &source)
    }

    #[test]
    fn starts_with_full_collection() {
        let app = app();
        assert_eq!(app.visible, vec![10, 20, 30]);
        assert!(app.empty_message().is_none());
    }

    #[test]
    fn failed_load_shows_error_state() {
        let source = RecipeSource::parse("missing.json");
        let mut app = App::new(Err(LoadError::DuplicateId(1)), &source);
        assert!(app.visible.is_empty());
        assert_eq!(app.empty_message(), Some(LOAD_ERROR_MESSAGE));

        app.toggle_quick();
        app.cycle_category();
        assert!(app.visible.is_empty());
    }

    #[test]
    fn each_operation_refilters() {
        let mut app = app();
        app.set_search("reis");
        assert_eq!(app.visible, vec![30]);

        app.set_search("");
        app.set_type(TypeFilter::Meat);
        assert_eq!(app.visible, vec![20]);

        app.set_type(TypeFilter::All);
        app.set_country(Selection::Only("Deutschland".into()));
        app.toggle_group_friendly();
        assert_eq!(app.visible, vec![20]);

        app.toggle_group_friendly();
        app.toggle_quick();
        assert_eq!(app.visible, vec![10]);
    }

    #[test]
    fn no_match_reports_empty_message() {
        let mut app = app();
        app.set_days(Selection::Only(7));
        assert!(app.visible.is_empty());
        assert_eq!(app.empty_message(), Some(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn cycling_walks_store_enumerations() {
        let mut app = app();
        app.cycle_category();
        assert_eq!(app.criteria.category, Selection::Only("Suppe".into()));
        assert_eq!(app.visible, vec![10]);

        app.cycle_carbohydrate();
        assert_eq!(app.criteria.carbohydrate, Selection::Only("Kartoffeln".into()));

        app.cycle_days();
        assert_eq!(app.criteria.days, Selection::Only(2));
        assert!(app.visible.is_empty());
    }

    #[test]
    fn reset_restores_everything() {
        let mut app = app();
        app.set_search("suppe");
        app.toggle_quick();
        app.select_recipe(10);
        app.input_mode = InputMode::Search;

        app.reset();
        assert!(app.criteria.is_default());
        assert_eq!(app.visible, vec![10, 20, 30]);
        assert!(app.detail.is_none());
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn selecting_unknown_id_is_a_no_op() {
        let mut app = app();
        app.select_recipe(20);
        app.select_recipe(999);
        assert_eq!(app.detail, Some(20));
        assert_eq!(app.detail_recipe().map(|r| r.name.as_str()), Some("Rinderrouladen"));
    }

    #[test]
    fn cursor_stays_in_bounds_after_filtering() {
        let mut app = app();
        app.previous_recipe();
        assert_eq!(app.selected_id(), Some(30));

        app.set_search("suppe");
        assert_eq!(app.selected_id(), Some(10));
        app.next_recipe();
        assert_eq!(app.selected_id(), Some(10));
    }

    #[test]
    fn copy_ingredients_passes_lines_to_clipboard() {
        let mut app = app();
        let copied = RefCell::new(String::new());
        app.copy_ingredients_with(30, |text| {
            copied.replace(text.to_string());
            Ok(())
        });
        assert_eq!(copied.into_inner(), "Arborioreis\nParmesan");
        assert!(app.success_message.is_some());
    }

    #[test]
    fn copy_failure_becomes_error_message() {
        let mut app = app();
        app.copy_ingredients_with(10, |_| Err(anyhow::anyhow!("no clipboard")));
        assert_eq!(app.error_message.as_deref(), Some("no clipboard"));

        app.clear_messages();
        app.copy_ingredients_with(404, |_| panic!("must not copy unknown recipes"));
        assert!(app.error_message.is_none());
    }
}
