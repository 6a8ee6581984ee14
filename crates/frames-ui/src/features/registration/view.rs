//! Three-step registration wizard.

use crate::app::Route;
use crate::app::api::use_api;
use crate::core::session::RegistrationState;
use crate::core::wizard::{
    BackOutcome, Field, RegistrationRole, Wizard, WizardStep, registration_error_message,
};
use gloo::console;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RegisterProps {
    pub role: String,
}

const fn input_type(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        Field::Password | Field::ConfirmPassword => "password",
        _ => "text",
    }
}

#[function_component(RegisterPage)]
pub(crate) fn register_page(props: &RegisterProps) -> Html {
    let role = RegistrationRole::parse(&props.role);
    html! {
        <div class="min-h-screen flex items-center justify-center bg-base-200 p-6">
            if let Some(role) = role {
                <RegistrationWizard {role} />
            } else {
                <div class="card bg-base-100 shadow p-8 text-center gap-4">
                    <p class="text-error">{format!("Unknown registration type \"{}\".", props.role)}</p>
                    <Link<Route> to={Route::Landing} classes="btn btn-primary">{"Back to sign in"}</Link<Route>>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct WizardProps {
    role: RegistrationRole,
}

#[function_component(RegistrationWizard)]
fn registration_wizard(props: &WizardProps) -> Html {
    let api = use_api();
    let navigator = use_navigator();
    let role = props.role;
    let wizard = use_state(move || Wizard::new(role));
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_field = {
        let wizard = wizard.clone();
        Callback::from(move |(field, input): (Field, HtmlInputElement)| {
            let mut next = (*wizard).clone();
            if next.form.set(field, &input.value()) {
                wizard.set(next);
            } else {
                // The vdom value did not change, so restore the element directly.
                input.set_value(wizard.form.get(field));
            }
        })
    };
    let on_back = {
        let wizard = wizard.clone();
        let error = error.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            let mut next = (*wizard).clone();
            error.set(None);
            match next.back() {
                BackOutcome::Moved => wizard.set(next),
                BackOutcome::Exit => {
                    if let Some(navigator) = &navigator {
                        navigator.push(&Route::Landing);
                    }
                }
            }
        })
    };
    let on_submit = {
        let wizard = wizard.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *busy {
                return;
            }
            let mut next = (*wizard).clone();
            if next.step != WizardStep::Review {
                match next.next() {
                    Ok(()) => {
                        error.set(None);
                        wizard.set(next);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                return;
            }
            let request = match next.build_request() {
                Ok(request) => request,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            let api = api.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                match api.register(&request).await {
                    Ok(_) => {
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::RegistrationStatus {
                                state: RegistrationState::Pending.as_str().to_string(),
                            });
                        }
                    }
                    Err(err) => {
                        console::warn!("registration failed", err.to_string());
                        error.set(Some(registration_error_message(&err)));
                    }
                }
                busy.set(false);
            });
        })
    };

    let step = wizard.step;
    let heading = match role {
        RegistrationRole::Student => "Student Registration",
        RegistrationRole::Faculty => "Faculty Registration",
    };

    html! {
        <form class="card w-full max-w-2xl bg-base-100 shadow-xl" onsubmit={on_submit}>
            <div class="card-body gap-4">
                <h2 class="card-title">{heading}</h2>
                <ul class="steps w-full">
                    {for WizardStep::ALL.iter().map(|candidate| html! {
                        <li class={classes!("step", (candidate.number() <= step.number()).then_some("step-primary"))}>
                            {candidate.label()}
                        </li>
                    })}
                </ul>
                if let Some(message) = &*error {
                    <div class="alert alert-error" role="alert">{message.clone()}</div>
                }
                if step == WizardStep::Review {
                    {review_summary(&wizard)}
                }
                <div class="grid md:grid-cols-2 gap-3">
                    {for wizard.fields(step).iter().map(|field| {
                        let field = *field;
                        let required = wizard.required(step).contains(&field);
                        let on_field = on_field.clone();
                        let oninput = Callback::from(move |event: InputEvent| {
                            on_field.emit((field, event.target_unchecked_into::<HtmlInputElement>()));
                        });
                        html! {
                            <label class="form-control">
                                <span class="label-text">
                                    {field.label()}
                                    if required { <span class="text-error">{" *"}</span> }
                                </span>
                                <input class="input input-bordered" type={input_type(field)}
                                    maxlength={field.max_digits().map(|limit| limit.to_string())}
                                    value={wizard.form.get(field).to_string()} {oninput} />
                            </label>
                        }
                    })}
                </div>
                <div class="card-actions justify-between">
                    <button class="btn btn-ghost" type="button" onclick={on_back}>{"Back"}</button>
                    <button class="btn btn-primary" type="submit" disabled={*busy}>
                        if step == WizardStep::Review {
                            if *busy { {"Submitting..."} } else { {"Register"} }
                        } else {
                            {"Next"}
                        }
                    </button>
                </div>
            </div>
        </form>
    }
}

fn review_summary(wizard: &Wizard) -> Html {
    let form = &wizard.form;
    let rows = WizardStep::ALL[..2]
        .iter()
        .flat_map(|step| wizard.fields(*step).iter().copied())
        .filter(|field| !matches!(field, Field::TupmYear | Field::TupmSerial));
    html! {
        <dl class="grid grid-cols-2 gap-x-4 gap-y-1 text-sm bg-base-200 rounded-box p-4">
            <dt class="font-semibold">{"TUPM ID"}</dt>
            <dd>{form.tupm_id()}</dd>
            {for rows.map(|field| html! {
                <>
                    <dt class="font-semibold">{field.label()}</dt>
                    <dd>{if form.get(field).is_empty() { "-".to_string() } else { form.get(field).to_string() }}</dd>
                </>
            })}
        </dl>
    }
}
