//! Sign-in form and role entry points.

use crate::app::Route;
use crate::app::api::use_api;
use crate::core::session::login_destination;
use crate::core::store::AppStore;
use frames_api_models::{LoginRequest, VerificationStatus};
use gloo::console;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

const LOGIN_FALLBACK: &str = "Something went wrong. Try again.";

fn input_value(event: &InputEvent) -> String {
    event.target_unchecked_into::<HtmlInputElement>().value()
}

#[function_component(LandingPage)]
pub(crate) fn landing_page() -> Html {
    let api = use_api();
    let navigator = use_navigator();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| email.set(input_value(&event)))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| password.set(input_value(&event)))
    };
    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *busy {
                return;
            }
            let request = LoginRequest {
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            let api = api.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let busy = busy.clone();
            busy.set(true);
            error.set(None);
            spawn_local(async move {
                match api.login(&request).await {
                    Ok(response) => {
                        let destination = login_destination(&response.user);
                        if response.user.verification_status == VerificationStatus::Verified {
                            let user = response.user;
                            Dispatch::<AppStore>::new().reduce_mut(move |store| {
                                store.session = Some(user);
                            });
                        }
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::from(destination));
                        }
                    }
                    Err(err) => {
                        console::warn!("login failed", err.to_string());
                        error.set(Some(err.user_message(LOGIN_FALLBACK)));
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen grid lg:grid-cols-2 bg-base-200">
            <section class="hidden lg:flex flex-col justify-center p-12 bg-primary text-primary-content">
                <h1 class="text-5xl font-bold tracking-wide">{"FRAMES"}</h1>
                <p class="mt-4 text-lg opacity-80">
                    {"Facial Recognition Attendance Monitoring and Evaluation System"}
                </p>
            </section>
            <section class="flex items-center justify-center p-6">
                <form class="card w-full max-w-md bg-base-100 shadow-xl" onsubmit={on_submit}>
                    <div class="card-body gap-3">
                        <h2 class="card-title">{"Sign in"}</h2>
                        if let Some(message) = &*error {
                            <div class="alert alert-error" role="alert">{message.clone()}</div>
                        }
                        <label class="form-control">
                            <span class="label-text">{"Email or TUPM ID"}</span>
                            <input class="input input-bordered" type="text" autocomplete="username"
                                value={(*email).clone()} oninput={on_email} required=true />
                        </label>
                        <label class="form-control">
                            <span class="label-text">{"Password"}</span>
                            <input class="input input-bordered" type="password" autocomplete="current-password"
                                value={(*password).clone()} oninput={on_password} required=true />
                        </label>
                        <button class="btn btn-primary" type="submit" disabled={*busy}>
                            if *busy { {"Signing in..."} } else { {"Sign in"} }
                        </button>
                        <div class="divider">{"New to FRAMES?"}</div>
                        <div class="flex gap-2">
                            <Link<Route> to={Route::Register { role: "student".into() }} classes="btn btn-outline flex-1">
                                {"Register as Student"}
                            </Link<Route>>
                            <Link<Route> to={Route::Register { role: "faculty".into() }} classes="btn btn-outline flex-1">
                                {"Register as Faculty"}
                            </Link<Route>>
                        </div>
                    </div>
                </form>
            </section>
        </div>
    }
}
