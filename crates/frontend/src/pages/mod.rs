//! Page components.

mod investment_form;
mod preference_form;
mod projects_table;

pub use investment_form::InvestmentForm;
pub use preference_form::PreferenceForm;
pub use projects_table::ProjectsTable;
