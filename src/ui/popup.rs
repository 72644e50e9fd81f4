/// Popup UI for Predatory Detector extension

use crate::client::{load_settings, ChromeActiveTab, HttpPredictionClient};
use crate::lookup::run_lookup;
use crate::ui::components::VerdictView;
use crate::verdict::DisplayState;
use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
enum PopupState {
    Loading,
    Done(DisplayState),
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| PopupState::Loading);

    // One lookup per popup open
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let settings = load_settings().await;
                let client = HttpPredictionClient::new(settings);
                let display = run_lookup(&ChromeActiveTab, &client).await;
                state.set(PopupState::Done(display));
            });
            || ()
        });
    }

    match &*state {
        PopupState::Loading => html! {
            <div class="loading-text-center">
                <Spinner />
                <p class="loading-text">{"Analyzing journal..."}</p>
            </div>
        },
        PopupState::Done(display) => html! {
            <VerdictView state={display.clone()} />
        },
    }
}
