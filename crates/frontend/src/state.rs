//! Reducer wrapper around the shared dashboard state.

use core_types::Project;
use match_state::Dashboard;
use std::rc::Rc;
use yew::prelude::*;

/// Dashboard state held by the app root and handed to every page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub dashboard: Dashboard,
}

/// State transitions triggered by the pages.
pub enum DashboardAction {
    /// Raw text of the investment input box
    SetInvestmentInput(String),
    /// Result of the initial fetch
    InitialiseProjects(Vec<Project>),
    /// Result of a preference match
    SetProjects(Vec<Project>),
    ResetProjects,
    ToggleSort,
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut dashboard = self.dashboard.clone();

        match action {
            DashboardAction::SetInvestmentInput(raw) => dashboard.set_investment_input(&raw),
            DashboardAction::InitialiseProjects(list) => dashboard.initialize_projects(list),
            DashboardAction::SetProjects(list) => dashboard.replace_projects(list),
            DashboardAction::ResetProjects => dashboard.reset_projects(),
            DashboardAction::ToggleSort => {
                dashboard.toggle_sort();
            }
        }

        Rc::new(Self { dashboard })
    }
}

/// Handle passed down as a property.
pub type DashboardHandle = UseReducerHandle<DashboardState>;
