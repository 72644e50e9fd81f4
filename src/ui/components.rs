/// The three fixed verdict templates

use crate::verdict::{DisplayState, RedFlag};
use patternfly_yew::prelude::*;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VerdictViewProps {
    pub state: DisplayState,
}

/// Danger or Reliable card, or the error alert, for a terminal state
#[function_component(VerdictView)]
pub fn verdict_view(props: &VerdictViewProps) -> Html {
    let state = &props.state;

    let (card_class, title_class) = match state {
        DisplayState::Danger { .. } => ("verdict verdict-danger", "verdict-title danger-title"),
        DisplayState::Reliable { .. } => ("verdict verdict-reliable", "verdict-title reliable-title"),
        DisplayState::Error(_) => {
            return html! {
                <Alert r#type={AlertType::Danger} title={state.headline()} inline={true}>
                    <p class="error-text">{state.detail_line()}</p>
                </Alert>
            };
        }
    };

    html! {
        <div class={card_class}>
            <h2 class={title_class}>{state.headline()}</h2>
            <p>{"Risk: "}<b>{state.risk_label().unwrap_or_default()}</b></p>
            <hr />
            <small>{state.detail_line()}</small>
            <RedFlagList flags={state.red_flags().to_vec()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RedFlagListProps {
    flags: Vec<RedFlag>,
}

#[function_component(RedFlagList)]
fn red_flag_list(props: &RedFlagListProps) -> Html {
    if props.flags.is_empty() {
        return html! {};
    }

    html! {
        <ul class="red-flags">
            {for props.flags.iter().map(|flag| html! {
                <li class="red-flag">{"🔴 "}{flag.caption()}</li>
            })}
        </ul>
    }
}
