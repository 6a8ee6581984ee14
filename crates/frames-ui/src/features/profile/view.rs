//! Account details, profile editing and password change.

use crate::app::api::use_api;
use crate::app::session::use_current_user;
use crate::components::toast::notify;
use crate::core::session::{avatar_url, display_name};
use crate::core::store::{AppStore, ToastKind};
use crate::features::profile::logic::{
    INCORRECT_PASSWORD, PasswordStep, ProfileForm, validate_new_password,
};
use frames_api_models::{PasswordChange, PasswordVerify, Role, UserResponse};
use gloo::console;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

fn input_value(event: &InputEvent) -> String {
    event.target_unchecked_into::<HtmlInputElement>().value()
}

#[function_component(ProfilePage)]
pub(crate) fn profile_page() -> Html {
    let api = use_api();
    let user = use_current_user();
    let editing = use_state(|| false);
    let form = use_state(ProfileForm::default);
    let password_open = use_state(|| false);
    let user_id = user.as_ref().map(|user| user.id);

    {
        let api = api.clone();
        use_effect_with_deps(
            move |user_id: &Option<i64>| {
                if let Some(id) = *user_id {
                    spawn_local(async move {
                        match api.fetch_user(id).await {
                            Ok(fresh) => Dispatch::<AppStore>::new().reduce_mut(move |store| {
                                store.session = Some(fresh);
                            }),
                            Err(err) => console::warn!("profile refresh failed", err.to_string()),
                        }
                    });
                }
                || ()
            },
            user_id,
        );
    }

    let Some(user) = user else {
        return html! {};
    };

    let field = |apply: fn(&mut ProfileForm, String)| {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let mut next = (*form).clone();
            apply(&mut next, input_value(&event));
            form.set(next);
        })
    };
    let on_edit = {
        let editing = editing.clone();
        let form = form.clone();
        let user = user.clone();
        Callback::from(move |_| {
            form.set(ProfileForm::from_user(&user));
            editing.set(true);
        })
    };
    let on_cancel = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(false))
    };
    let on_save = {
        let editing = editing.clone();
        let form = form.clone();
        let user = user.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(update) = form.diff(&user) else {
                editing.set(false);
                return;
            };
            let api = api.clone();
            let editing = editing.clone();
            let id = user.id;
            spawn_local(async move {
                match api.update_user(id, &update).await {
                    Ok(saved) => {
                        Dispatch::<AppStore>::new().reduce_mut(move |store| {
                            store.session = Some(saved);
                        });
                        notify(ToastKind::Success, "Profile Updated Successfully!");
                        editing.set(false);
                    }
                    Err(err) => {
                        console::error!("profile update failed", err.to_string());
                        notify(ToastKind::Error, err.user_message("Failed to update profile."));
                    }
                }
            });
        })
    };
    let on_password = {
        let password_open = password_open.clone();
        Callback::from(move |_| password_open.set(true))
    };
    let on_password_close = {
        let password_open = password_open.clone();
        Callback::from(move |()| password_open.set(false))
    };

    let name = display_name(Some(&user));
    let student = user.role == Role::Student;
    let current = (*form).clone();

    html! {
        <div class="grid lg:grid-cols-3 gap-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body items-center text-center">
                    <img class="w-24 h-24 rounded-full" src={avatar_url(&name)} alt={name.clone()} />
                    <h2 class="card-title">{name.clone()}</h2>
                    <span class="badge badge-primary">{user.role.label()}</span>
                    <p class="text-sm opacity-70">{user.tupm_id.clone()}</p>
                    <button class="btn btn-sm btn-outline mt-2" onclick={on_password}>
                        <i class="fas fa-key" aria-hidden="true"></i>{" Change Password"}
                    </button>
                </div>
            </div>
            <div class="card bg-base-100 shadow lg:col-span-2">
                if *editing {
                    <form class="card-body gap-3" onsubmit={on_save}>
                        <h3 class="card-title text-base">{"Edit Profile"}</h3>
                        <div class="grid md:grid-cols-3 gap-3">
                            {text_input("First Name", &current.first_name, field(|form, value| form.first_name = value))}
                            {text_input("Middle Name", &current.middle_name, field(|form, value| form.middle_name = value))}
                            {text_input("Last Name", &current.last_name, field(|form, value| form.last_name = value))}
                            if student {
                                {text_input("Year Level", &current.year_level, field(|form, value| form.year_level = value))}
                                {text_input("Section", &current.section, field(|form, value| form.section = value))}
                            }
                        </div>
                        <div class="card-actions justify-end">
                            <button class="btn btn-ghost" type="button" onclick={on_cancel}>{"Cancel"}</button>
                            <button class="btn btn-primary" type="submit">{"Save Changes"}</button>
                        </div>
                    </form>
                } else {
                    <div class="card-body">
                        <div class="flex justify-between items-center">
                            <h3 class="card-title text-base">{"Personal Information"}</h3>
                            <button class="btn btn-sm btn-ghost" onclick={on_edit}>
                                <i class="fas fa-pen" aria-hidden="true"></i>{" Edit"}
                            </button>
                        </div>
                        {details(&user)}
                    </div>
                }
            </div>
            if *password_open {
                <PasswordDialog user_id={user.id} on_close={on_password_close} />
            }
        </div>
    }
}

fn text_input(label: &'static str, value: &str, oninput: Callback<InputEvent>) -> Html {
    html! {
        <label class="form-control">
            <span class="label-text">{label}</span>
            <input class="input input-bordered input-sm" type="text" value={value.to_string()} {oninput} />
        </label>
    }
}

fn details(user: &UserResponse) -> Html {
    let rows = [
        ("Email", Some(user.email.clone())),
        ("Middle Name", user.middle_name.clone()),
        ("Department", user.department_name.clone()),
        ("Program", user.program_name.clone()),
        ("Year Level", user.year_level.clone()),
        ("Section", user.section.clone()),
        ("Verification", Some(user.verification_status.as_str().to_string())),
        (
            "Face Enrollment",
            Some(String::from(if user.face_registered {
                "Registered"
            } else {
                "Not registered"
            })),
        ),
    ];
    html! {
        <dl class="grid grid-cols-2 gap-x-4 gap-y-2">
            {for rows.into_iter().filter_map(|(label, value)| value.map(|value| html! {
                <>
                    <dt class="font-semibold">{label}</dt>
                    <dd>{value}</dd>
                </>
            }))}
        </dl>
    }
}

#[derive(Properties, PartialEq)]
struct PasswordDialogProps {
    user_id: i64,
    on_close: Callback<()>,
}

#[function_component(PasswordDialog)]
fn password_dialog(props: &PasswordDialogProps) -> Html {
    let api = use_api();
    let step = use_state(|| PasswordStep::Verify);
    let current = use_state(String::new);
    let fresh = use_state(String::new);
    let confirm = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let bind = |target: &UseStateHandle<String>| {
        let target = target.clone();
        Callback::from(move |event: InputEvent| target.set(input_value(&event)))
    };
    let user_id = props.user_id;
    let on_submit = {
        let step = step.clone();
        let current = current.clone();
        let fresh = fresh.clone();
        let confirm = confirm.clone();
        let error = error.clone();
        let busy = busy.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *busy {
                return;
            }
            let api = api.clone();
            let step_handle = step.clone();
            let error = error.clone();
            let busy = busy.clone();
            match *step {
                PasswordStep::Verify => {
                    let body = PasswordVerify {
                        user_id,
                        password: (*current).clone(),
                    };
                    busy.set(true);
                    spawn_local(async move {
                        match api.verify_password(&body).await {
                            Ok(_) => {
                                error.set(None);
                                step_handle.set(PasswordStep::Choose);
                            }
                            Err(err) => error.set(Some(err.user_message(INCORRECT_PASSWORD))),
                        }
                        busy.set(false);
                    });
                }
                PasswordStep::Choose => {
                    if let Err(rule) = validate_new_password(&fresh, &confirm) {
                        error.set(Some(rule.to_string()));
                        return;
                    }
                    let body = PasswordChange {
                        user_id,
                        new_password: (*fresh).clone(),
                    };
                    let on_close = on_close.clone();
                    busy.set(true);
                    spawn_local(async move {
                        match api.change_password(&body).await {
                            Ok(_) => {
                                notify(ToastKind::Success, "Password Changed Successfully!");
                                on_close.emit(());
                            }
                            Err(err) => {
                                error.set(Some(err.user_message("Failed to update password")));
                            }
                        }
                        busy.set(false);
                    });
                }
            }
        })
    };
    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <dialog class="modal modal-open" aria-label="Change password">
            <form class="modal-box flex flex-col gap-3" onsubmit={on_submit}>
                <h3 class="font-bold text-lg">{"Change Password"}</h3>
                if let Some(message) = &*error {
                    <div class="alert alert-error" role="alert">{message.clone()}</div>
                }
                if *step == PasswordStep::Verify {
                    <p class="text-sm opacity-70">{"Enter your current password to continue."}</p>
                    <input class="input input-bordered" type="password" placeholder="Current password"
                        autocomplete="current-password" value={(*current).clone()} oninput={bind(&current)} />
                } else {
                    <input class="input input-bordered" type="password" placeholder="New password"
                        autocomplete="new-password" value={(*fresh).clone()} oninput={bind(&fresh)} />
                    <input class="input input-bordered" type="password" placeholder="Confirm new password"
                        autocomplete="new-password" value={(*confirm).clone()} oninput={bind(&confirm)} />
                }
                <div class="modal-action">
                    <button class="btn btn-ghost" type="button" onclick={on_cancel}>{"Cancel"}</button>
                    <button class="btn btn-primary" type="submit" disabled={*busy}>
                        if *step == PasswordStep::Verify { {"Verify"} } else { {"Update Password"} }
                    </button>
                </div>
            </form>
        </dialog>
    }
}
