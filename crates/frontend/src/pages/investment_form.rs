//! Investment amount input.

use yew::prelude::*;

use crate::state::{DashboardAction, DashboardHandle};

/// Properties for InvestmentForm.
#[derive(Properties, PartialEq)]
pub struct InvestmentFormProps {
    pub state: DashboardHandle,
}

/// Investment input; every keystroke updates the amount.
#[function_component(InvestmentForm)]
pub fn investment_form(props: &InvestmentFormProps) -> Html {
    let buffer = use_state(String::new);

    let on_input = {
        let buffer = buffer.clone();
        let state = props.state.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let raw = input.value();
            buffer.set(raw.clone());
            state.dispatch(DashboardAction::SetInvestmentInput(raw));
        })
    };

    html! {
        <div>
            <div class="form-container">
                <label>
                    {"Investment:"}
                    <input
                        type="number"
                        step="10000"
                        name="investment"
                        value={(*buffer).clone()}
                        oninput={on_input}
                    />
                </label>
            </div>
        </div>
    }
}
