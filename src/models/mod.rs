pub mod recipe;
pub mod store;

pub use recipe::{Instructions, Recipe};
pub use store::{RecipeSource, RecipeStore, migrate_legacy_document};
