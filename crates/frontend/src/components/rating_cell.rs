//! Table cell with a background colour.

use yew::prelude::*;

/// Properties for RatingCell component.
#[derive(Properties, PartialEq)]
pub struct RatingCellProps {
    pub value: String,
    pub color: &'static str,
}

/// Rating cell coloured by its value.
#[function_component(RatingCell)]
pub fn rating_cell(props: &RatingCellProps) -> Html {
    html! {
        <td style={format!("background-color: {}", props.color)}>{ &props.value }</td>
    }
}
