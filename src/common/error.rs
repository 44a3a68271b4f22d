use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Alert shown beneath the form when a submission fails.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="mt-6 flex justify-center">
            <div class="alert alert-error max-w-lg">
                <i class="fas fa-exclamation-circle"></i>
                <span>{&props.message}</span>
            </div>
        </div>
    }
}
