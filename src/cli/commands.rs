use crate::clipboard;
use crate::filter::{self, FilterCriteria, is_quick};
use crate::models::{Recipe, RecipeStore, migrate_legacy_document};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Prints every recipe that passes the criteria, in collection order.
pub fn list_recipes(store: &RecipeStore, criteria: &FilterCriteria) {
    if store.is_empty() {
        println!("{}  Die Rezeptsammlung ist leer.", "┃".bright_magenta());
        return;
    }

    let results = filter::apply(criteria, store.recipes());

    if results.is_empty() {
        println!("{}  Keine Rezepte gefunden.", "┃".bright_magenta());
        return;
    }

    println!(
        "{}  {} von {} Rezepten",
        "┃".bright_magenta(),
        results.len().to_string().bright_yellow(),
        store.len()
    );
    println!("{}", "─".repeat(60).bright_magenta());

    for recipe in results {
        println!(
            "{}  {} {}",
            "┃".bright_magenta(),
            format!("#{:<4}", recipe.id).bright_black(),
            recipe.name.bright_white().bold()
        );
        println!("{}        {}", "┃".bright_magenta(), recipe_summary(recipe));
    }
}

/// One-line metadata summary shown under a recipe's name.
pub fn recipe_summary(recipe: &Recipe) -> String {
    let mut parts = vec![recipe.category.clone()];
    match recipe.vegetarian {
        Some(true) => parts.push("vegetarisch".to_string()),
        Some(false) => parts.push("Fleisch".to_string()),
        None => {}
    }
    let total = recipe.total_minutes();
    if total > 0 {
        parts.push(format!("{total} min"));
    }
    if is_quick(recipe) {
        parts.push("schnell".to_string());
    }
    if let Some(carbohydrate) = &recipe.carbohydrate_source {
        parts.push(carbohydrate.clone());
    }
    if let Some(country) = &recipe.country {
        parts.push(country.clone());
    }
    if let Some(days) = recipe.days {
        parts.push(format!("{days} Tage"));
    }
    if recipe.is_group_friendly() {
        parts.push("gruppentauglich".to_string());
    }
    parts.join(" · ")
}

/// Shows a recipe by ID, exact name or partial name.
pub fn show_recipe(store: &RecipeStore, id_or_name: &str) {
    let recipe = match id_or_name.parse::<u32>() {
        Ok(id) => store.find_by_id(id),
        Err(_) => store.find_by_name(id_or_name),
    };

    let Some(recipe) = recipe else {
        println!(
            "{}  No recipe found for: {}",
            "┃".bright_magenta(),
            id_or_name
        );
        println!("{}  Available recipes:", "┃".bright_magenta());
        println!("{}", "─".repeat(60).bright_magenta());
        for recipe in store.recipes().iter().take(10) {
            println!(
                "{}  {}. {}",
                "┃".bright_magenta(),
                recipe.id.to_string().yellow(),
                recipe.name.bright_white()
            );
        }
        if store.len() > 10 {
            println!("{}  ... and {} more", "┃".bright_magenta(), store.len() - 10);
        }
        return;
    };

    display_recipe(recipe);
}

fn display_recipe(recipe: &Recipe) {
    let bar = "┃".bright_magenta();

    println!("{}  {} {}", bar, "REZEPT".bright_green().bold(), recipe.name.bold());
    println!("{}", "─".repeat(60).bright_magenta());
    println!("{}  {}: {}", bar, "Kategorie".bright_blue(), recipe.category);
    if let Some(prep) = &recipe.prep_time {
        println!("{}  {}: {}", bar, "Zubereitungszeit".bright_yellow(), prep);
    }
    if let Some(cook) = &recipe.cook_time {
        println!("{}  {}: {}", bar, "Kochzeit".bright_yellow(), cook);
    }
    println!("{}  {}: {}", bar, "Details".bright_cyan(), recipe_summary(recipe));
    if let Some(image) = &recipe.image {
        println!("{}  {}: {}", bar, "Bild".bright_black(), image);
    }
    if let Some(youtube) = &recipe.youtube {
        println!("{}  {}: {}", bar, "Video".bright_black(), youtube);
    }
    println!("{}  {}: {}", bar, "ID".bright_black(), recipe.id);
    println!("{}", "─".repeat(60).bright_magenta());

    println!("{}  {}", bar, "Zutaten:".bright_yellow());
    for ingredient in &recipe.ingredients {
        println!("{}    • {}", bar, ingredient);
    }

    if !recipe.instructions.is_empty() {
        println!("{}  {}", bar, "Zubereitung:".bright_yellow());
        for (i, step) in recipe.instructions.lines().iter().enumerate() {
            println!("{}    {}. {}", bar, i + 1, step);
        }
    }

    if let Some(notes) = recipe.notes.as_ref().filter(|n| !n.is_empty()) {
        println!("{}  {}", bar, "Notizen:".bright_yellow());
        for note in notes {
            println!("{}    – {}", bar, note.italic());
        }
    }
}

/// Prints the values each selection filter can take.
pub fn show_facets(store: &RecipeStore) {
    print_facet("Kategorien", &store.categories());
    print_facet("Beilagen", &store.carbohydrate_sources());
    print_facet("Länder", &store.countries());
    let days: Vec<String> = store.day_counts().iter().map(u32::to_string).collect();
    print_facet("Tage", &days);
}

fn print_facet(title: &str, values: &[String]) {
    println!(
        "{}  {} ({})",
        "┃".bright_magenta(),
        title.bright_yellow().bold(),
        values.len()
    );
    for value in values {
        println!("{}    {}", "┃".bright_magenta(), value.bright_white());
    }
}

/// Copies a recipe's ingredients to the clipboard. Unknown ids do nothing.
pub fn copy_ingredients(store: &RecipeStore, id: u32) -> Result<()> {
    let Some(recipe) = store.find_by_id(id) else {
        println!("{}  No recipe with ID {}", "┃".bright_magenta(), id);
        return Ok(());
    };

    clipboard::copy_text(&clipboard::ingredients_text(recipe))?;
    println!(
        "{}  Copied {} ingredients of {}",
        "┃".bright_magenta(),
        recipe.ingredients.len().to_string().bright_yellow(),
        recipe.name.bright_white()
    );
    Ok(())
}

pub fn migrate(input: &Path, output: &Path) -> Result<()> {
    let count = migrate_legacy_document(input, output)?;
    println!(
        "{}  Migrated {} recipes to {}",
        "┃".bright_magenta(),
        count.to_string().bright_yellow(),
        output.display()
    );
    Ok(())
}
