//! CLI Module for recipebox
//! Lets users query the recipe collection straight from the terminal
//! without launching the TUI. Every command loads the collection once and
//! runs the same filter engine the TUI uses.

pub mod commands;

use crate::app::LOAD_ERROR_MESSAGE;
use crate::config::Config;
use crate::filter::{FilterCriteria, Selection};
use crate::models::RecipeStore;
use anyhow::{Context, anyhow};
use colored::Colorize;
use std::error::Error;
use std::path::Path;

/// Executes CLI commands based on the provided arguments
pub async fn execute_cli(args: &[String], config: &Config) -> Result<(), Box<dyn Error>> {
    if args.is_empty() {
        print_help();
        return Ok(());
    }

    match args[0].as_str() {
        "list" | "ls" => {
            let criteria = parse_filter_args(&args[1..])?;
            if let Some(store) = load_store(config).await {
                commands::list_recipes(&store, &criteria);
            }
        }
        "show" | "view" => {
            if args.len() < 2 {
                println!("{}  Error: Missing recipe name or ID", "┃".bright_magenta());
                println!("{}  Usage: recipebox show <ID|NAME>", "┃".bright_magenta());
                return Ok(());
            }
            if let Some(store) = load_store(config).await {
                commands::show_recipe(&store, &args[1..].join(" "));
            }
        }
        "facets" => {
            if let Some(store) = load_store(config).await {
                commands::show_facets(&store);
            }
        }
        "copy" => {
            let id = args
                .get(1)
                .ok_or_else(|| anyhow!("Usage: recipebox copy <ID>"))?
                .parse::<u32>()
                .context("Recipe ID must be a number")?;
            if let Some(store) = load_store(config).await {
                commands::copy_ingredients(&store, id)?;
            }
        }
        "migrate" => {
            if args.len() < 3 {
                println!("{}  Error: Missing input or output path", "┃".bright_magenta());
                println!(
                    "{}  Usage: recipebox migrate <INPUT> <OUTPUT>",
                    "┃".bright_magenta()
                );
                return Ok(());
            }
            commands::migrate(Path::new(&args[1]), Path::new(&args[2]))?;
        }
        "help" => {
            print_help();
        }
        _ => {
            println!("{}  Unknown command: {}", "┃".bright_magenta(), args[0]);

            print_help();
        }
    }

    Ok(())
}

/// Loads the collection, printing the error state instead of failing.
async fn load_store(config: &Config) -> Option<RecipeStore> {
    match RecipeStore::load(&config.recipe_source()).await {
        Ok(store) => Some(store),
        Err(e) => {
            println!("{}  {}", "┃".bright_magenta(), LOAD_ERROR_MESSAGE.bright_red());
            println!("{}  {}", "┃".bright_magenta(), e.to_string().bright_black());
            None
        }
    }
}

/// Removes `--source <PATH|URL>` from the argument list, wherever it appears.
pub fn take_source_flag(args: &[String]) -> anyhow::Result<(Option<String>, Vec<String>)> {
    let mut source = None;
    let mut rest = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == "--source" {
            let value = iter
                .next()
                .ok_or_else(|| anyhow!("--source needs a path or URL"))?;
            source = Some(value.clone());
        } else {
            rest.push(arg.clone());
        }
    }

    Ok((source, rest))
}

/// Builds filter criteria from `list` flags.
pub fn parse_filter_args(args: &[String]) -> anyhow::Result<FilterCriteria> {
    let mut criteria = FilterCriteria::default();
    let mut iter = args.iter();

    while let Some(flag) = iter.next() {
        let mut value = || {
            iter.next()
                .cloned()
                .ok_or_else(|| anyhow!("{flag} needs a value"))
        };

        match flag.as_str() {
            "--search" | "-s" => criteria.set_search(value()?),
            "--type" | "-t" => criteria.set_type(value()?.parse()?),
            "--category" | "-c" => criteria.set_category(value()?.parse()?),
            "--carbohydrate" | "-b" => criteria.set_carbohydrate(value()?.parse()?),
            "--country" | "-l" => criteria.set_country(value()?.parse()?),
            "--days" | "-d" => criteria.set_days(
                value()?
                    .parse::<Selection<u32>>()
                    .with_context(|| format!("{flag} expects a number or 'all'"))?,
            ),
            "--quick" | "-q" => criteria.toggle_quick(),
            "--group" | "-g" => criteria.toggle_group_friendly(),
            other => return Err(anyhow!("Unknown option for list: {other}")),
        }
    }

    Ok(criteria)
}

/// Prints the help message with available commands
fn print_help() {
    println!(
        "{}  {}",
        "┃".bright_magenta(),
        "RECIPEBOX CLI - RECIPE BROWSER".bold()
    );

    println!("{}  {}", "┃".bright_magenta(), "USAGE:".bright_yellow());
    println!(
        "{}  recipebox [--source PATH|URL] [COMMAND] [ARGS]",
        "┃".bright_magenta()
    );
    println!("{}  {}", "┃".bright_magenta(), "COMMANDS:".bright_yellow());

    let commands = [
        ("list, ls [FILTERS]", "List recipes matching the filters"),
        ("show, view <ID|NAME>", "Show one recipe (partial name works)"),
        ("facets", "List categories, carbohydrate sources, countries, days"),
        ("copy <ID>", "Copy a recipe's ingredients to the clipboard"),
        ("migrate <IN> <OUT>", "Wrap a bare recipe array as {\"recipes\": [...]}"),
        ("help", "Display this help message"),
    ];
    for (command, description) in commands {
        println!(
            "{}  {:<27} {}",
            "┃".bright_magenta(),
            command.bright_white(),
            description
        );
    }

    println!("{}  {}", "┃".bright_magenta(), "FILTERS:".bright_yellow());
    let filters = [
        ("--search, -s <TEXT>", "Name, category or ingredient contains TEXT"),
        ("--type, -t <TYPE>", "all | vegetarian | meat"),
        ("--category, -c <NAME>", "Exact category"),
        ("--carbohydrate, -b <NAME>", "Exact carbohydrate source"),
        ("--country, -l <NAME>", "Exact country"),
        ("--days, -d <N>", "Exact number of days"),
        ("--quick, -q", "Total time between 1 and 45 minutes"),
        ("--group, -g", "Group-friendly recipes only"),
    ];
    for (flag, description) in filters {
        println!(
            "{}  {:<27} {}",
            "┃".bright_magenta(),
            flag.bright_white(),
            description
        );
    }

    println!("{}  {}", "┃".bright_magenta(), "TIP:".bright_green());
    println!(
        "{}  Run with no arguments to launch the full TUI (Terminal User Interface) mode",
        "┃".bright_magenta()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TypeFilter;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn source_flag_is_extracted_anywhere() {
        let (source, rest) =
            take_source_flag(&args(&["list", "--source", "other.json", "--quick"])).unwrap();
        assert_eq!(source.as_deref(), Some("other.json"));
        assert_eq!(rest, args(&["list", "--quick"]));

        assert!(take_source_flag(&args(&["--source"])).is_err());
    }

    #[test]
    fn filter_flags_build_criteria() {
        let criteria = parse_filter_args(&args(&[
            "--type", "vegetarian", "--category", "Suppe", "--days", "2", "--quick", "-g",
            "-s", "reis",
        ]))
        .unwrap();

        assert_eq!(criteria.recipe_type, TypeFilter::Vegetarian);
        assert_eq!(criteria.category, Selection::Only("Suppe".into()));
        assert_eq!(criteria.days, Selection::Only(2));
        assert!(criteria.quick);
        assert!(criteria.group_friendly);
        assert_eq!(criteria.search, "reis");
        assert_eq!(criteria.country, Selection::All);
    }

    #[test]
    fn no_flags_is_default_criteria() {
        assert!(parse_filter_args(&[]).unwrap().is_default());
    }

    #[test]
    fn bad_flags_are_rejected() {
        assert!(parse_filter_args(&args(&["--days", "zwei"])).is_err());
        assert!(parse_filter_args(&args(&["--type", "fish"])).is_err());
        assert!(parse_filter_args(&args(&["--country"])).is_err());
        assert!(parse_filter_args(&args(&["--vegan"])).is_err());
    }
}
