use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static FIRST_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// A single dish as stored in the recipe document.
/// Keys are camelCase in JSON (`prepTime`, `carbohydrateSource`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vegetarian: Option<bool>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Instructions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrate_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_friendly: Option<bool>,
}

/// Preparation steps, either one block of prose or a list of steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Instructions {
    Text(String),
    Steps(Vec<String>),
}

impl Default for Instructions {
    fn default() -> Self {
        Instructions::Text(String::new())
    }
}

impl Instructions {
    /// Returns the instructions as display lines, one per step.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Instructions::Text(text) => text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
            Instructions::Steps(steps) => steps.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Instructions::Text(text) => text.trim().is_empty(),
            Instructions::Steps(steps) => steps.is_empty(),
        }
    }
}

impl Recipe {
    /// Prep plus cook minutes, read from the free-text time fields.
    /// Only the first number of each field counts, so "1 Stunde" is 1 and
    /// "20-30 min" is 20. A field without digits contributes nothing.
    pub fn total_minutes(&self) -> u32 {
        minutes_in(self.prep_time.as_deref()).saturating_add(minutes_in(self.cook_time.as_deref()))
    }

    pub fn is_vegetarian(&self) -> bool {
        self.vegetarian == Some(true)
    }

    pub fn is_group_friendly(&self) -> bool {
        self.group_friendly == Some(true)
    }
}

/// Extracts the first run of digits from a duration string.
pub fn minutes_in(text: Option<&str>) -> u32 {
    text.and_then(|t| FIRST_NUMBER.find(t))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timed(prep: Option<&str>, cook: Option<&str>) -> Recipe {
        Recipe {
            id: 1,
            name: "Linsensuppe".into(),
            category: "Suppe".into(),
            vegetarian: Some(true),
            ingredients: vec![],
            instructions: Instructions::default(),
            notes: None,
            image: None,
            youtube: None,
            prep_time: prep.map(String::from),
            cook_time: cook.map(String::from),
            carbohydrate_source: None,
            country: None,
            days: None,
            group_friendly: None,
        }
    }

    #[test]
    fn total_minutes_sums_prep_and_cook() {
        assert_eq!(timed(Some("10 min"), Some("35 min")).total_minutes(), 45);
        assert_eq!(timed(Some("50 min"), None).total_minutes(), 50);
        assert_eq!(timed(None, None).total_minutes(), 0);
    }

    #[test]
    fn only_first_number_is_read() {
        assert_eq!(minutes_in(Some("20-30 min")), 20);
        assert_eq!(minutes_in(Some("ca. 1 Stunde 15 min")), 1);
        assert_eq!(minutes_in(Some("über Nacht")), 0);
        assert_eq!(minutes_in(Some("99999999999999999999 min")), 0);
    }

    #[test]
    fn instructions_accept_text_and_steps() {
        let text: Recipe = serde_json::from_str(
            r#"{"id":1,"name":"A","category":"B","instructions":"Schneiden.\nKochen."}"#,
        )
        .unwrap();
        assert_eq!(text.instructions.lines(), vec!["Schneiden.", "Kochen."]);

        let steps: Recipe = serde_json::from_str(
            r#"{"id":2,"name":"A","category":"B","instructions":["Schneiden","Kochen"]}"#,
        )
        .unwrap();
        assert_eq!(
            steps.instructions,
            Instructions::Steps(vec!["Schneiden".into(), "Kochen".into()])
        );
    }

    #[test]
    fn camel_case_fields_are_read() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"id":3,"name":"Chili","category":"Fleisch","vegetarian":false,
                "prepTime":"15 min","cookTime":"1 Stunde","carbohydrateSource":"Reis",
                "groupFriendly":true,"days":2}"#,
        )
        .unwrap();
        assert_eq!(recipe.carbohydrate_source.as_deref(), Some("Reis"));
        assert_eq!(recipe.days, Some(2));
        assert!(recipe.is_group_friendly());
        assert!(!recipe.is_vegetarian());
        assert_eq!(recipe.total_minutes(), 16);
    }
}
