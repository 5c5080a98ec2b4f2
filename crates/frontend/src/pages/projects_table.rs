//! Project table page component.

use match_state::MatchingGateway;
use match_state::present::{COLUMNS, YIELD_COLUMN};
use yew::prelude::*;

use crate::api::{BrowserGateway, log_error};
use crate::components::ProjectRow;
use crate::state::{DashboardAction, DashboardHandle};

/// Properties for ProjectsTable.
#[derive(Properties, PartialEq)]
pub struct ProjectsTableProps {
    pub state: DashboardHandle,
}

/// Project table; fetches the full project list once on mount.
#[function_component(ProjectsTable)]
pub fn projects_table(props: &ProjectsTableProps) -> Html {
    {
        let state = props.state.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match BrowserGateway::default().fetch_projects().await {
                    Ok(projects) => state.dispatch(DashboardAction::InitialiseProjects(projects)),
                    Err(e) => log_error(&format!("Error initialising projects: {e}")),
                }
            });
        });
    }

    let on_sort_click = {
        let state = props.state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(DashboardAction::ToggleSort))
    };

    let rows = props.state.dashboard.rows();

    html! {
        <table>
            <thead>
                <tr>
                    { for COLUMNS.iter().enumerate().map(|(index, title)| {
                        if index == YIELD_COLUMN {
                            html! {
                                <th onclick={on_sort_click.clone()} style="cursor: pointer;">
                                    { *title }
                                </th>
                            }
                        } else {
                            html! { <th>{ *title }</th> }
                        }
                    })}
                </tr>
            </thead>
            <tbody>
                { for rows.iter().enumerate().map(|(index, project)| {
                    html! { <ProjectRow key={index.to_string()} project={project.clone()} /> }
                })}
            </tbody>
        </table>
    }
}
