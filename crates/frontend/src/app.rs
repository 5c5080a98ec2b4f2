//! Main application component.

use yew::prelude::*;

use crate::pages::{InvestmentForm, PreferenceForm, ProjectsTable};
use crate::state::DashboardState;

/// Main application component. Owns the dashboard state and hands it to
/// the table and the two forms.
#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(DashboardState::default);

    html! {
        <main class="app-container">
            <div>
                <ProjectsTable state={state.clone()} />
                <PreferenceForm state={state.clone()} />
                <InvestmentForm state={state} />
            </div>
        </main>
    }
}
