use crate::error::LoadError;
use crate::models::Recipe;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The canonical on-disk shape: `{ "recipes": [ ... ] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeDocument {
    pub recipes: Vec<Recipe>,
}

/// Where the recipe document comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeSource {
    File(PathBuf),
    Url(String),
}

impl RecipeSource {
    /// URLs are recognised by their scheme, anything else is a path.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            RecipeSource::Url(raw.to_string())
        } else {
            RecipeSource::File(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for RecipeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeSource::File(path) => write!(f, "{}", path.display()),
            RecipeSource::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Read-only recipe collection, loaded once per session.
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Loads the collection from a file or URL.
    pub async fn load(source: &RecipeSource) -> Result<Self, LoadError> {
        let content = match source {
            RecipeSource::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| LoadError::Read {
                        source_name: source.to_string(),
                        reason: e.to_string(),
                    })?
            }
            RecipeSource::Url(url) => fetch(url).await.map_err(|e| LoadError::Fetch {
                source_name: source.to_string(),
                reason: e.to_string(),
            })?,
        };

        let store = Self::from_json(&content).map_err(|e| match e {
            LoadError::LegacyShape(_) => LoadError::LegacyShape(source.to_string()),
            other => other,
        })?;
        info!(source = %source, recipes = store.len(), "Loaded recipe collection");
        Ok(store)
    }

    /// Parses a canonical recipe document.
    pub fn from_json(content: &str) -> Result<Self, LoadError> {
        match serde_json::from_str::<RecipeDocument>(content) {
            Ok(document) => Self::from_recipes(document.recipes),
            Err(e) => {
                if serde_json::from_str::<Vec<serde_json::Value>>(content).is_ok() {
                    return Err(LoadError::LegacyShape("document".to_string()));
                }
                Err(LoadError::Parse(e))
            }
        }
    }

    /// Builds a store, rejecting collections that reuse an id.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Result<Self, LoadError> {
        let mut seen = HashSet::new();
        for recipe in &recipes {
            if !seen.insert(recipe.id) {
                return Err(LoadError::DuplicateId(recipe.id));
            }
        }
        Ok(Self { recipes })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Recipe> {
        let found = self.recipes.iter().find(|r| r.id == id);
        if found.is_none() {
            debug!(id, "No recipe with this id");
        }
        found
    }

    /// Finds a recipe by name: exact (case-insensitive) match first, then partial.
    pub fn find_by_name(&self, name: &str) -> Option<&Recipe> {
        let name = name.to_lowercase();
        self.recipes
            .iter()
            .find(|r| r.name.to_lowercase() == name)
            .or_else(|| {
                self.recipes
                    .iter()
                    .find(|r| r.name.to_lowercase().contains(&name))
            })
    }

    /// Distinct categories in the order they first appear.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.recipes
            .iter()
            .filter(|r| seen.insert(r.category.as_str()))
            .map(|r| r.category.clone())
            .collect()
    }

    /// Distinct carbohydrate sources, sorted. Recipes without one are skipped.
    pub fn carbohydrate_sources(&self) -> Vec<String> {
        sorted_distinct(
            self.recipes
                .iter()
                .filter_map(|r| r.carbohydrate_source.clone()),
        )
    }

    /// Distinct countries, sorted. Recipes without one are skipped.
    pub fn countries(&self) -> Vec<String> {
        sorted_distinct(self.recipes.iter().filter_map(|r| r.country.clone()))
    }

    /// Distinct day counts, ascending.
    pub fn day_counts(&self) -> Vec<u32> {
        sorted_distinct(self.recipes.iter().filter_map(|r| r.days))
    }
}

fn sorted_distinct<T: Ord>(values: impl Iterator<Item = T>) -> Vec<T> {
    values.collect::<BTreeSet<_>>().into_iter().collect()
}

async fn fetch(url: &str) -> reqwest::Result<String> {
    reqwest::get(url).await?.error_for_status()?.text().await
}

/// Rewrites a bare recipe array (the earliest document format) into the
/// canonical `{ "recipes": [...] }` shape. Returns the number of recipes.
pub fn migrate_legacy_document(input: &Path, output: &Path) -> Result<usize> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let recipes: Vec<Recipe> =
        serde_json::from_str(&content).context("Input is not a bare recipe array")?;

    RecipeStore::from_recipes(recipes.clone())?;

    let document = RecipeDocument { recipes };
    let content =
        serde_json::to_string_pretty(&document).context("Failed to serialize recipe document")?;
    fs::write(output, content)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!(
        input = %input.display(),
        output = %output.display(),
        recipes = document.recipes.len(),
        "Migrated legacy recipe document"
    );
    Ok(document.recipes.len())
}
