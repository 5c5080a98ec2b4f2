//! Project table row component.

use core_types::Project;
use match_state::present::{YIELD_COLUMN, row_cells};
use yew::prelude::*;

use crate::components::RatingCell;

/// Properties for ProjectRow component.
#[derive(Properties, PartialEq)]
pub struct ProjectRowProps {
    pub project: Project,
}

/// One project, rendered through the shared cell formatting.
#[function_component(ProjectRow)]
pub fn project_row(props: &ProjectRowProps) -> Html {
    let cells = row_cells(&props.project);

    html! {
        <tr>
            { for cells.into_iter().enumerate().map(|(index, cell)| {
                match cell.background {
                    Some(color) => html! { <RatingCell value={cell.text} color={color} /> },
                    None if index == YIELD_COLUMN => html! { <td class="yield-column">{ cell.text }</td> },
                    None => html! { <td>{ cell.text }</td> },
                }
            })}
        </tr>
    }
}
