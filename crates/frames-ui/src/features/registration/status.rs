//! Pending and rejected registration notices.

use crate::app::Route;
use crate::core::session::RegistrationState;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct StatusProps {
    pub state: String,
}

#[function_component(RegistrationStatusPage)]
pub(crate) fn registration_status_page(props: &StatusProps) -> Html {
    let state = RegistrationState::parse(&props.state).unwrap_or(RegistrationState::Pending);
    let (icon, tone) = match state {
        RegistrationState::Pending => ("fas fa-hourglass-half", "text-warning"),
        RegistrationState::Rejected => ("fas fa-circle-xmark", "text-error"),
    };
    html! {
        <div class="min-h-screen flex items-center justify-center bg-base-200 p-6">
            <div class="card w-full max-w-lg bg-base-100 shadow-xl">
                <div class="card-body items-center text-center gap-4">
                    <i class={classes!(icon, tone, "text-5xl")} aria-hidden="true"></i>
                    <h2 class="card-title">{state.title()}</h2>
                    <p>{state.message()}</p>
                    <Link<Route> to={Route::Landing} classes="btn btn-primary">{"Back to Login"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
