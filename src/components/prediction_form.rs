use yew::prelude::*;

use crate::api_client::prediction::predict;
use crate::common::error::ErrorDisplay;
use crate::common::loading::Loading;
use crate::components::result_panel::ResultPanel;
use crate::state::{PassengerAttributes, RequestOutcome, SubmissionSeq};

/// The passenger form: owns the attribute record and the lifecycle of one
/// submission at a time. Each input writes one key into the record; submit
/// POSTs the record as-is, with no validation beyond what the inputs do.
#[function_component(PredictionForm)]
pub fn prediction_form() -> Html {
    let passenger = use_state(PassengerAttributes::new);
    let outcome = use_state(RequestOutcome::default);
    let form_ref = use_node_ref();
    let submission_seq = use_mut_ref(SubmissionSeq::new);

    let on_field_change = {
        let passenger = passenger.clone();
        let outcome = outcome.clone();
        Callback::from(move |(key, value): (&'static str, String)| {
            log::trace!("Field changed: {} = {:?}", key, value);
            let mut updated = (*passenger).clone();
            updated.set(key, value);
            passenger.set(updated);
            // Editing a field dismisses a previous failure
            if outcome.is_failed() {
                outcome.set(RequestOutcome::Idle);
            }
        })
    };

    let select_field = |key: &'static str| {
        let on_field_change = on_field_change.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<web_sys::HtmlSelectElement>().value();
            on_field_change.emit((key, value));
        })
    };

    let input_field = |key: &'static str| {
        let on_field_change = on_field_change.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<web_sys::HtmlInputElement>().value();
            on_field_change.emit((key, value));
        })
    };

    let on_submit = {
        let passenger = passenger.clone();
        let outcome = outcome.clone();
        let submission_seq = submission_seq.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let id = submission_seq.borrow_mut().begin();
            let record = (*passenger).clone();
            log::info!(
                "Submitting prediction request (submission {}, {} fields set)",
                id,
                record.len()
            );
            outcome.set(RequestOutcome::Loading);

            let outcome = outcome.clone();
            let submission_seq = submission_seq.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = predict(&record).await;

                if !submission_seq.borrow().is_current(id) {
                    log::debug!("Discarding stale response for submission {}", id);
                    return;
                }

                match result {
                    Ok(response) => {
                        outcome.set(RequestOutcome::Success(response.display_value()));
                    }
                    Err(message) => {
                        outcome.set(RequestOutcome::Failed(message));
                    }
                }
            });
        })
    };

    let on_reset = {
        let passenger = passenger.clone();
        let outcome = outcome.clone();
        let form_ref = form_ref.clone();
        let submission_seq = submission_seq.clone();

        Callback::from(move |_: MouseEvent| {
            log::debug!("Resetting form");
            // Any in-flight request becomes stale
            submission_seq.borrow_mut().invalidate();
            passenger.set(PassengerAttributes::new());
            outcome.set(RequestOutcome::Idle);
            if let Some(form) = form_ref.cast::<web_sys::HtmlFormElement>() {
                form.reset();
            }
        })
    };

    let is_loading = outcome.is_loading();

    html! {
        <div class="card bg-base-100 shadow-2xl w-full max-w-2xl">
            <div class="card-body">
                <h1 class="text-3xl font-bold text-center text-primary mb-6">
                    {"Titanic Survival Prediction 🚢"}
                </h1>

                <form ref={form_ref} onsubmit={on_submit} class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Passenger class (Pclass)"}</span></label>
                        <select class="select select-bordered w-full" onchange={select_field("Pclass")}>
                            <option value="">{"Select..."}</option>
                            <option value="1">{"First"}</option>
                            <option value="2">{"Second"}</option>
                            <option value="3">{"Third"}</option>
                        </select>
                    </div>

                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Sex"}</span></label>
                        <select class="select select-bordered w-full" onchange={select_field("Sex")}>
                            <option value="">{"Select..."}</option>
                            <option value="male">{"Male"}</option>
                            <option value="female">{"Female"}</option>
                        </select>
                    </div>

                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Age"}</span></label>
                        <input
                            type="number"
                            class="input input-bordered w-full"
                            placeholder="e.g. 28"
                            onchange={input_field("Age")}
                        />
                    </div>

                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Siblings / spouses aboard (SibSp)"}</span></label>
                        <input
                            type="number"
                            class="input input-bordered w-full"
                            placeholder="e.g. 1"
                            onchange={input_field("SibSp")}
                        />
                    </div>

                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Parents / children aboard (Parch)"}</span></label>
                        <input
                            type="number"
                            class="input input-bordered w-full"
                            placeholder="e.g. 0"
                            onchange={input_field("Parch")}
                        />
                    </div>

                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Fare"}</span></label>
                        <input
                            type="number"
                            class="input input-bordered w-full"
                            placeholder="e.g. 32.5"
                            onchange={input_field("Fare")}
                        />
                    </div>

                    <div class="form-control md:col-span-2">
                        <label class="label"><span class="label-text">{"Port of embarkation (Embarked)"}</span></label>
                        <select class="select select-bordered w-full" onchange={select_field("Embarked")}>
                            <option value="">{"Select..."}</option>
                            <option value="C">{"Cherbourg"}</option>
                            <option value="Q">{"Queenstown"}</option>
                            <option value="S">{"Southampton"}</option>
                        </select>
                    </div>

                    <div class="md:col-span-2 flex justify-center gap-4 mt-6">
                        <button type="submit" class="btn btn-primary" disabled={is_loading}>
                            {if is_loading { "Calculating..." } else { "Calculate probability" }}
                        </button>
                        <button type="button" class="btn" onclick={on_reset}>
                            {"Clear"}
                        </button>
                    </div>
                </form>

                {if let Some(message) = outcome.error() {
                    html! { <ErrorDisplay message={message.to_string()} /> }
                } else {
                    html! {}
                }}

                {if is_loading {
                    html! { <Loading text={"Asking the prediction service...".to_string()} /> }
                } else {
                    html! {}
                }}

                <ResultPanel outcome={(*outcome).clone()} />
            </div>
        </div>
    }
}
