use crate::filter::{FilterCriteria, TypeFilter};
use crate::models::Recipe;

/// Upper bound (inclusive) for a recipe to count as quick.
pub const QUICK_MAX_MINUTES: u32 = 45;

/// One filter axis: a name for logs, whether the criteria narrow it at all,
/// and the predicate that decides whether a recipe passes.
pub struct Dimension {
    pub name: &'static str,
    pub is_active: fn(&FilterCriteria) -> bool,
    pub admits: fn(&FilterCriteria, &Recipe) -> bool,
}

/// Every axis the engine knows about. A recipe is kept when all of them admit it.
pub const DIMENSIONS: &[Dimension] = &[
    Dimension {
        name: "search",
        is_active: |c| !c.search.is_empty(),
        admits: matches_search,
    },
    Dimension {
        name: "type",
        is_active: |c| c.recipe_type != TypeFilter::All,
        admits: |c, r| match c.recipe_type {
            TypeFilter::All => true,
            TypeFilter::Vegetarian => r.vegetarian == Some(true),
            TypeFilter::Meat => r.vegetarian == Some(false),
        },
    },
    Dimension {
        name: "category",
        is_active: |c| !c.category.is_all(),
        admits: |c, r| c.category.admits(Some(&r.category)),
    },
    Dimension {
        name: "carbohydrate",
        is_active: |c| !c.carbohydrate.is_all(),
        admits: |c, r| c.carbohydrate.admits(r.carbohydrate_source.as_ref()),
    },
    Dimension {
        name: "country",
        is_active: |c| !c.country.is_all(),
        admits: |c, r| c.country.admits(r.country.as_ref()),
    },
    Dimension {
        name: "days",
        is_active: |c| !c.days.is_all(),
        admits: |c, r| c.days.admits(r.days.as_ref()),
    },
    Dimension {
        name: "quick",
        is_active: |c| c.quick,
        admits: |c, r| !c.quick || is_quick(r),
    },
    Dimension {
        name: "group_friendly",
        is_active: |c| c.group_friendly,
        admits: |c, r| !c.group_friendly || r.is_group_friendly(),
    },
];

/// Returns the recipes that pass every dimension, in input order.
/// Inactive dimensions admit everything, so they are skipped up front.
pub fn apply<'a>(criteria: &FilterCriteria, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
    let active: Vec<&Dimension> = DIMENSIONS
        .iter()
        .filter(|d| (d.is_active)(criteria))
        .collect();

    recipes
        .iter()
        .filter(|recipe| active.iter().all(|d| (d.admits)(criteria, recipe)))
        .collect()
}

/// Names of the dimensions that currently narrow the result.
pub fn active_dimensions(criteria: &FilterCriteria) -> Vec<&'static str> {
    DIMENSIONS
        .iter()
        .filter(|d| (d.is_active)(criteria))
        .map(|d| d.name)
        .collect()
}

/// Case-insensitive substring match on name, category or any ingredient.
fn matches_search(criteria: &FilterCriteria, recipe: &Recipe) -> bool {
    if criteria.search.is_empty() {
        return true;
    }
    let query = criteria.search.to_lowercase();

    recipe.name.to_lowercase().contains(&query)
        || recipe.category.to_lowercase().contains(&query)
        || recipe
            .ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(&query))
}

/// Zero total time means the recipe carries no usable timing and is never quick.
pub fn is_quick(recipe: &Recipe) -> bool {
    let total = recipe.total_minutes();
    total > 0 && total <= QUICK_MAX_MINUTES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Selection;
    use crate::models::Instructions;

    fn recipe(id: u32, name: &str, category: &str, vegetarian: Option<bool>) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            category: category.to_string(),
            vegetarian,
            ingredients: Vec::new(),
            instructions: Instructions::default(),
            notes: None,
            image: None,
            youtube: None,
            prep_time: None,
            cook_time: None,
            carbohydrate_source: None,
            country: None,
            days: None,
            group_friendly: None,
        }
    }

    fn ids(result: &[&Recipe]) -> Vec<u32> {
        result.iter().map(|r| r.id).collect()
    }

    fn collection() -> Vec<Recipe> {
        let mut a = recipe(1, "Kürbissuppe", "Suppe", Some(true));
        a.prep_time = Some("10 min".into());
        a.cook_time = Some("35 min".into());
        a.ingredients = vec!["Hokkaido".into(), "Ingwer".into()];
        a.group_friendly = Some(true);

        let mut b = recipe(2, "Chili con Carne", "Fleisch", Some(false));
        b.days = Some(2);
        b.prep_time = Some("50 min".into());
        b.carbohydrate_source = Some("Reis".into());
        b.country = Some("Mexiko".into());
        b.group_friendly = Some(true);

        let mut c = recipe(3, "Minestrone", "Suppe", Some(true));
        c.country = Some("Italien".into());
        c.ingredients = vec!["Basmatireis".into(), "Zucchini".into()];

        let d = recipe(4, "Bowl", "Asiatisch", None);

        vec![a, b, c, d]
    }

    fn varied_criteria() -> Vec<FilterCriteria> {
        let mut all = vec![FilterCriteria::default()];

        let mut c = FilterCriteria::default();
        c.set_search("REIS");
        all.push(c);

        let mut c = FilterCriteria::default();
        c.set_type(TypeFilter::Meat);
        all.push(c);

        let mut c = FilterCriteria::default();
        c.set_type(TypeFilter::Vegetarian);
        c.set_category(Selection::Only("Suppe".into()));
        c.toggle_quick();
        all.push(c);

        let mut c = FilterCriteria::default();
        c.set_days(Selection::Only(2));
        c.toggle_group_friendly();
        all.push(c);

        let mut c = FilterCriteria::default();
        c.set_country(Selection::Only("Italien".into()));
        all.push(c);

        all
    }

    #[test]
    fn default_criteria_return_everything_in_order() {
        let recipes = collection();
        let result = apply(&FilterCriteria::default(), &recipes);
        assert_eq!(ids(&result), vec![1, 2, 3, 4]);
    }

    #[test]
    fn apply_is_idempotent() {
        let recipes = collection();
        for criteria in varied_criteria() {
            let once: Vec<Recipe> = apply(&criteria, &recipes).into_iter().cloned().collect();
            let twice = apply(&criteria, &once);
            assert_eq!(ids(&twice), once.iter().map(|r| r.id).collect::<Vec<_>>());
        }
    }

    #[test]
    fn output_is_an_ordered_subsequence() {
        let recipes = collection();
        for criteria in varied_criteria() {
            let result = ids(&apply(&criteria, &recipes));
            let mut input = recipes.iter().map(|r| r.id);
            assert!(result.iter().all(|id| input.any(|candidate| candidate == *id)));
        }
    }

    #[test]
    fn meat_excludes_missing_vegetarian_flag() {
        let recipes = collection();
        let mut criteria = FilterCriteria::default();

        criteria.set_type(TypeFilter::Meat);
        assert_eq!(ids(&apply(&criteria, &recipes)), vec![2]);

        criteria.set_type(TypeFilter::Vegetarian);
        assert_eq!(ids(&apply(&criteria, &recipes)), vec![1, 3]);
    }

    #[test]
    fn quick_needs_positive_total_within_limit() {
        let recipes = collection();
        let mut criteria = FilterCriteria::default();
        criteria.toggle_quick();

        // 10 + 35 = 45 is quick, 50 is not, no timing at all is not.
        assert_eq!(ids(&apply(&criteria, &recipes)), vec![1]);
    }

    #[test]
    fn search_is_case_insensitive_and_partial() {
        let recipes = collection();
        let mut criteria = FilterCriteria::default();

        criteria.set_search("reis");
        assert_eq!(ids(&apply(&criteria, &recipes)), vec![3]);

        criteria.set_search("SUPPE");
        assert_eq!(ids(&apply(&criteria, &recipes)), vec![1, 3]);

        criteria.set_search("chili");
        assert_eq!(ids(&apply(&criteria, &recipes)), vec![2]);
    }

    #[test]
    fn exact_dimensions_never_match_missing_fields() {
        let recipes = collection();
        let mut criteria = FilterCriteria::default();

        criteria.set_carbohydrate(Selection::Only("Reis".into()));
        assert_eq!(ids(&apply(&criteria, &recipes)), vec![2]);

        criteria.reset();
        criteria.set_days(Selection::Only(2));
        assert_eq!(ids(&apply(&criteria, &recipes)), vec![2]);

        criteria.reset();
        criteria.set_country(Selection::Only("Ital".into()));
        assert!(apply(&criteria, &recipes).is_empty());
    }

    #[test]
    fn toggles_combine_with_other_dimensions() {
        let recipes = collection();
        let mut criteria = FilterCriteria::default();
        criteria.toggle_group_friendly();
        assert_eq!(ids(&apply(&criteria, &recipes)), vec![1, 2]);

        criteria.set_type(TypeFilter::Meat);
        assert_eq!(ids(&apply(&criteria, &recipes)), vec![2]);

        criteria.toggle_quick();
        assert!(apply(&criteria, &recipes).is_empty());
    }

    #[test]
    fn reset_shows_the_full_collection_again() {
        let recipes = collection();
        let mut criteria = FilterCriteria::default();
        criteria.set_search("suppe");
        criteria.toggle_quick();
        assert_eq!(ids(&apply(&criteria, &recipes)), vec![1]);

        criteria.reset();
        assert_eq!(ids(&apply(&criteria, &recipes)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn vegetarian_soups_keep_their_order() {
        let a = recipe(1, "A", "Suppe", Some(true));
        let mut b = recipe(2, "B", "Fleisch", Some(false));
        b.days = Some(2);
        let mut c = recipe(3, "C", "Suppe", Some(true));
        c.country = Some("Italien".into());
        let recipes = vec![a, b, c];

        let mut criteria = FilterCriteria::default();
        criteria.set_type(TypeFilter::Vegetarian);
        criteria.set_category(Selection::Only("Suppe".into()));

        assert_eq!(ids(&apply(&criteria, &recipes)), vec![1, 3]);
    }

    #[test]
    fn active_dimensions_are_listed_in_table_order() {
        let mut criteria = FilterCriteria::default();
        assert!(active_dimensions(&criteria).is_empty());

        criteria.toggle_quick();
        criteria.set_country(Selection::Only("Italien".into()));
        assert_eq!(active_dimensions(&criteria), vec!["country", "quick"]);
    }

    #[test]
    fn inactive_dimensions_admit_every_recipe() {
        let recipes = collection();
        let criteria = FilterCriteria::default();
        for dimension in DIMENSIONS {
            assert!(!(dimension.is_active)(&criteria), "{} active", dimension.name);
            assert!(recipes.iter().all(|r| (dimension.admits)(&criteria, r)));
        }
    }
}
