//! Account summary with the account's class timetable.

use crate::app::api::use_api;
use crate::core::session::avatar_url;
use frames_api_models::UserScheduleEntry;
use frames_report::UserListing;
use gloo::console;
use web_sys::AbortController;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct UserSummaryProps {
    pub user: UserListing,
    pub on_close: Callback<()>,
}

fn cell(value: Option<&String>) -> String {
    value.cloned().unwrap_or_else(|| "-".to_string())
}

#[function_component(UserSummaryModal)]
pub(crate) fn user_summary_modal(props: &UserSummaryProps) -> Html {
    let api = use_api();
    // `None` while loading; a failed fetch shows an empty timetable.
    let schedule = use_state(|| None::<Vec<UserScheduleEntry>>);

    {
        let schedule = schedule.clone();
        use_effect_with_deps(
            move |user_id: &i64| {
                let user_id = *user_id;
                schedule.set(None);
                let controller = AbortController::new().ok();
                let signal = controller.as_ref().map(AbortController::signal);
                spawn_local(async move {
                    match api.user_schedule(user_id, signal.as_ref()).await {
                        Ok(entries) => schedule.set(Some(entries)),
                        Err(err) if err.is_aborted() => {}
                        Err(err) => {
                            console::warn!("user schedule unavailable", err.to_string());
                            schedule.set(Some(Vec::new()));
                        }
                    }
                });
                move || {
                    if let Some(controller) = controller {
                        controller.abort();
                    }
                }
            },
            props.user.id,
        );
    }

    let user = &props.user;
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };
    let details = [
        ("fas fa-envelope", "Email", user.email.clone()),
        ("fas fa-building", "Department", user.department.clone()),
        ("fas fa-id-badge", "TUPM ID", user.tupm_id.clone()),
        ("fas fa-check-circle", "Verification", user.verification.as_str().to_string()),
        ("fas fa-camera", "Face Registration", user.face.label().to_string()),
    ];

    html! {
        <dialog class="modal modal-open" aria-label="User summary">
            <div class="modal-box max-w-4xl grid md:grid-cols-2 gap-6">
                <div class="flex flex-col gap-3">
                    <div class="flex items-center gap-3">
                        <img class="w-14 h-14 rounded-full" src={avatar_url(&user.name)} alt={user.name.clone()} />
                        <div>
                            <h3 class="font-bold text-lg">{user.name.clone()}</h3>
                            <span class="badge badge-outline">{user.role.clone()}</span>
                        </div>
                    </div>
                    <dl class="flex flex-col gap-2">
                        {for details.into_iter().map(|(icon, label, value)| html! {
                            <div class="flex gap-3 items-start">
                                <i class={classes!(icon, "mt-1", "opacity-60")} aria-hidden="true"></i>
                                <div>
                                    <dt class="text-xs opacity-60">{label}</dt>
                                    <dd>{value}</dd>
                                </div>
                            </div>
                        })}
                    </dl>
                </div>
                <div>
                    <h3 class="font-semibold mb-2">
                        <i class="fas fa-calendar-alt" aria-hidden="true"></i>{" Class Schedule"}
                    </h3>
                    {match &*schedule {
                        None => html! {
                            <div class="flex justify-center p-6">
                                <span class="loading loading-spinner" aria-label="Loading schedule"></span>
                            </div>
                        },
                        Some(entries) if entries.is_empty() => html! {
                            <p class="opacity-70 p-4 text-center">{"No schedule data available."}</p>
                        },
                        Some(entries) => html! {
                            <table class="table table-xs">
                                <thead>
                                    <tr><th>{"Subject"}</th><th>{"Section"}</th><th>{"Day"}</th><th>{"Time"}</th><th>{"Room"}</th></tr>
                                </thead>
                                <tbody>
                                    {for entries.iter().map(|entry| html! {
                                        <tr>
                                            <td class="font-semibold">{cell(entry.subject_code.as_ref())}</td>
                                            <td>{cell(entry.section.as_ref())}</td>
                                            <td>{cell(entry.day.as_ref())}</td>
                                            <td>{cell(entry.time.as_ref())}</td>
                                            <td><span class="badge badge-ghost">{cell(entry.room.as_ref())}</span></td>
                                        </tr>
                                    })}
                                </tbody>
                            </table>
                        },
                    }}
                </div>
                <div class="modal-action md:col-span-2">
                    <button class="btn" onclick={on_close}>{"Close"}</button>
                </div>
            </div>
        </dialog>
    }
}
