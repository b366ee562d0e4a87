use anyhow::{Result, anyhow};
use std::fmt;
use std::str::FromStr;

/// Vegetarian / meat axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Vegetarian,
    Meat,
}

impl TypeFilter {
    pub fn next(self) -> Self {
        match self {
            TypeFilter::All => TypeFilter::Vegetarian,
            TypeFilter::Vegetarian => TypeFilter::Meat,
            TypeFilter::Meat => TypeFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TypeFilter::All => "Alle",
            TypeFilter::Vegetarian => "Vegetarisch",
            TypeFilter::Meat => "Fleisch",
        }
    }
}

impl FromStr for TypeFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            "vegetarian" | "veggie" => Ok(TypeFilter::Vegetarian),
            "meat" => Ok(TypeFilter::Meat),
            other => Err(anyhow!(
                "Unknown type '{other}' (expected all, vegetarian or meat)"
            )),
        }
    }
}

/// An exact-match axis: either everything, or one specific value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    /// A missing field never satisfies `Only`.
    pub fn admits(&self, value: Option<&T>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => value == Some(wanted),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<T: Clone + PartialEq> Selection<T> {
    /// Steps to the next option in `All, options[0], options[1], ...` and
    /// wraps back to `All`. A stale value not in `options` goes to `All`.
    pub fn cycle(&self, options: &[T]) -> Self {
        let next = match self {
            Selection::All => options.first(),
            Selection::Only(current) => options
                .iter()
                .position(|o| o == current)
                .and_then(|i| options.get(i + 1)),
        };
        next.cloned().map_or(Selection::All, Selection::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "Alle"),
            Selection::Only(value) => write!(f, "{value}"),
        }
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

/// The user's current filter choices. `Default` is the unfiltered state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub recipe_type: TypeFilter,
    pub category: Selection<String>,
    pub carbohydrate: Selection<String>,
    pub country: Selection<String>,
    pub days: Selection<u32>,
    pub quick: bool,
    pub group_friendly: bool,
}

impl FilterCriteria {
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn set_type(&mut self, recipe_type: TypeFilter) {
        self.recipe_type = recipe_type;
    }

    pub fn set_category(&mut self, category: Selection<String>) {
        self.category = category;
    }

    pub fn set_carbohydrate(&mut self, carbohydrate: Selection<String>) {
        self.carbohydrate = carbohydrate;
    }

    pub fn set_country(&mut self, country: Selection<String>) {
        self.country = country;
    }

    pub fn set_days(&mut self, days: Selection<u32>) {
        self.days = days;
    }

    pub fn toggle_quick(&mut self) {
        self.quick = !self.quick;
    }

    pub fn toggle_group_friendly(&mut self) {
        self.group_friendly = !self.group_friendly;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
