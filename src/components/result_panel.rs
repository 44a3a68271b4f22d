use yew::prelude::*;

use crate::state::{RequestOutcome, Verdict};

#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub outcome: RequestOutcome,
}

/// Always-visible probability readout. Shows the placeholder "0.0%" until
/// a prediction succeeds; the value is styled by its verdict, favorable
/// from 50 upward.
#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    let display = props.outcome.display_value().to_string();
    let verdict_class = match Verdict::of(&display) {
        Verdict::Favorable => "text-success bg-success/10",
        Verdict::Unfavorable => "text-error bg-error/10",
    };

    html! {
        <div class="mt-8 text-center">
            <p class="text-lg mb-2">{"Survival probability:"}</p>
            <div class={classes!(
                "text-3xl", "font-bold", "inline-block", "px-6", "py-2",
                "rounded-xl", "shadow-inner", verdict_class
            )}>
                {display}
            </div>
        </div>
    }
}
