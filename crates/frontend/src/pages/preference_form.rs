//! Preference form page component.

use core_types::{Bound, ChoiceField, RangeField};
use match_state::{MatchingGateway, PreferenceCollector};
use yew::prelude::*;

use crate::api::{BrowserGateway, log_error};
use crate::state::{DashboardAction, DashboardHandle};

/// Properties for PreferenceForm.
#[derive(Properties, PartialEq)]
pub struct PreferenceFormProps {
    pub state: DashboardHandle,
}

type RangeInput = (&'static str, RangeField, Bound, Option<&'static str>);

/// Numeric range inputs shown by the form.
const RANGE_INPUTS: &[RangeInput] = &[
    ("Financial Returns Minimum:", RangeField::FinancialReturns, Bound::Min, Some("0.1")),
    ("Cost Min:", RangeField::CostEffectiveness, Bound::Min, Some("5")),
    ("Cost Max:", RangeField::CostEffectiveness, Bound::Max, Some("5")),
    ("Carbon Reduction Minimum:", RangeField::CarbonReductionPotential, Bound::Min, Some("1000")),
    ("Length Min:", RangeField::ProjectLifespan, Bound::Min, None),
    ("Length Max:", RangeField::ProjectLifespan, Bound::Max, None),
];

const DROPDOWNS: &[(&str, ChoiceField)] = &[
    ("Risk Profile:", ChoiceField::RiskProfile),
    ("Project Type:", ChoiceField::ProjectType),
    ("Environmental Impact:", ChoiceField::EnvironmentalImpact),
    ("Management Expertise:", ChoiceField::ManagementTeamExpertise),
    ("MRV Transparency:", ChoiceField::MrvTransparency),
];

/// Preference form. Submitting sends the collected preferences to the
/// matching service; resetting clears them and restores the fetched list.
#[function_component(PreferenceForm)]
pub fn preference_form(props: &PreferenceFormProps) -> Html {
    let preferences = use_state(PreferenceCollector::default);

    let on_submit = {
        let preferences = preferences.clone();
        let state = props.state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let criteria = preferences.submission();
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match BrowserGateway::default().match_projects(&criteria).await {
                    Ok(projects) => state.dispatch(DashboardAction::SetProjects(projects)),
                    Err(e) => log_error(&format!("Error submitting preferences: {e}")),
                }
            });
        })
    };

    let on_reset = {
        let preferences = preferences.clone();
        let state = props.state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut cleared = (*preferences).clone();
            cleared.clear();
            preferences.set(cleared);
            state.dispatch(DashboardAction::ResetProjects);
        })
    };

    let range_input = |&(label, field, bound, step): &RangeInput| {
        let value = preferences
            .preferences()
            .range(field)
            .and_then(|range| range.get(bound))
            .map(|v| v.to_string())
            .unwrap_or_default();
        let name = format!("{}.{}", field.key(), if bound == Bound::Min { "min" } else { "max" });
        let on_input = {
            let preferences = preferences.clone();
            Callback::from(move |e: InputEvent| {
                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                let mut next = (*preferences).clone();
                next.set_range_input(field, bound, &input.value());
                preferences.set(next);
            })
        };

        html! {
            <div class="form-field">
                <label>
                    { label }
                    <input type="number" step={step} name={name} value={value} oninput={on_input} />
                </label>
            </div>
        }
    };

    let dropdown = |&(label, field): &(&'static str, ChoiceField)| {
        let on_change = {
            let preferences = preferences.clone();
            Callback::from(move |e: Event| {
                let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                let mut next = (*preferences).clone();
                next.set_choice(field, select.value());
                preferences.set(next);
            })
        };

        html! {
            <div class="form-field">
                <label>
                    { label }
                    <select name={field.key()} onchange={on_change}>
                        { for field.options().iter().map(|option| html! {
                            <option key={*option} value={*option}>{ *option }</option>
                        })}
                    </select>
                </label>
            </div>
        }
    };

    html! {
        <div>
            <form class="form-container flex-form" onsubmit={on_submit}>
                <div class="form-column">
                    { for RANGE_INPUTS.iter().map(range_input) }
                </div>
                <div class="form-column">
                    { for DROPDOWNS.iter().map(dropdown) }
                </div>

                <button type="submit" class="submit-button">
                    {"Submit"}
                </button>
                <button type="reset" class="reset-button" onclick={on_reset}>
                    {"Reset"}
                </button>
            </form>
        </div>
    }
}
