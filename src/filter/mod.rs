//! Filter Engine
//!
//! Pure, order-preserving filtering of the recipe collection. The criteria
//! value is owned by the caller and passed in by reference; the engine keeps
//! no state between calls and recomputes derived fields (total time) on
//! every pass.

pub mod criteria;
pub mod engine;

pub use criteria::{FilterCriteria, Selection, TypeFilter};
pub use engine::{active_dimensions, apply, is_quick};
