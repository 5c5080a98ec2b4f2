//! Reusable UI components.

mod project_row;
mod rating_cell;

pub use project_row::ProjectRow;
pub use rating_cell::RatingCell;
