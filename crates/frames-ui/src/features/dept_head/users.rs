//! Directory and verification queue with account actions.

use crate::app::api::use_api;
use crate::components::atoms::{ExportMenu, SearchInput};
use crate::components::load::{Load, render_load};
use crate::components::toast::notify;
use crate::components::user_table::UserTable;
use crate::core::store::ToastKind;
use crate::features::dept_head::logic::{ROLE_OPTIONS, STATUS_OPTIONS, UserAction, UserTab};
use crate::features::dept_head::summary::UserSummaryModal;
use crate::services::api::ApiClient;
use crate::services::clock::now_local;
use crate::services::download::{ReportMode, export_report};
use frames_api_models::UserResponse;
use frames_report::rows::{user_directory_info, user_directory_rows};
use frames_report::{
    DirectoryFilter, ReportFormat, RoleFilter, UserListing, VerificationFilter, generated_label,
};
use gloo::console;
use gloo::dialogs;
use std::rc::Rc;
use web_sys::HtmlSelectElement;
use yew::platform::spawn_local;
use yew::prelude::*;

/// Account list plus a counter that re-triggers the fetch.
#[hook]
pub(crate) fn use_user_list() -> (UseStateHandle<Load<Vec<UserResponse>>>, Callback<()>) {
    let api = use_api();
    let users = use_state(|| Load::<Vec<UserResponse>>::Loading);
    let generation = use_state(|| 0_u32);
    {
        let users = users.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let result = api.verification_list().await;
                    users.set(Load::from_result(result, "Unable to load users."));
                });
                || ()
            },
            *generation,
        );
    }
    let refresh = Callback::from(move |()| generation.set(*generation + 1));
    (users, refresh)
}

/// Confirm, send and report one account action, then refresh the list.
pub(crate) fn run_user_action(
    api: Rc<ApiClient>,
    action: UserAction,
    user: &UserListing,
    refresh: Callback<()>,
) {
    if !dialogs::confirm(&action.prompt(&user.name)) {
        return;
    }
    let id = user.id;
    spawn_local(async move {
        let result = match action {
            UserAction::Approve => api.decide_verification(id, true).await,
            UserAction::Reject => api.decide_verification(id, false).await,
            UserAction::Delete => api.delete_user(id).await,
        };
        match result {
            Ok(response) => {
                notify(ToastKind::Success, response.message);
                refresh.emit(());
            }
            Err(err) => {
                console::error!("user action failed", err.to_string());
                notify(ToastKind::Error, err.user_message(action.failure()));
            }
        }
    });
}

/// Export the listed accounts as a directory report.
pub(crate) fn export_directory(users: &[&UserListing], format: ReportFormat, mode: ReportMode) {
    let now = now_local();
    let info = user_directory_info(now.format("%B %-d, %Y").to_string(), generated_label(now));
    match export_report(&info, &user_directory_rows(users), format, mode) {
        Ok(file_name) if mode == ReportMode::Download => {
            notify(ToastKind::Success, format!("Saved {file_name}"));
        }
        Ok(_) => {}
        Err(message) => notify(ToastKind::Error, message),
    }
}

fn select_value(event: &Event) -> String {
    event.target_unchecked_into::<HtmlSelectElement>().value()
}

#[function_component(UserManagementPage)]
pub(crate) fn user_management_page() -> Html {
    let api = use_api();
    let (users, refresh) = use_user_list();
    let tab = use_state(|| UserTab::Directory);
    let search = use_state(String::new);
    let role = use_state(|| ROLE_OPTIONS[0].to_string());
    let status = use_state(|| STATUS_OPTIONS[0].to_string());
    let selected = use_state(|| None::<UserListing>);

    let listings: Vec<UserListing> = users
        .ready()
        .map(|all| all.iter().map(UserListing::from).collect())
        .unwrap_or_default();
    let shown: Vec<UserListing> = match *tab {
        UserTab::Directory => DirectoryFilter {
            search: (*search).clone(),
            role: RoleFilter::parse(&role),
        }
        .apply(&listings),
        UserTab::Verification => VerificationFilter::new(&search, &role, &status).apply(&listings),
    }
    .into_iter()
    .cloned()
    .collect();

    let select_tab = |target: UserTab| {
        let tab = tab.clone();
        let refresh = refresh.clone();
        Callback::from(move |_| {
            tab.set(target);
            refresh.emit(());
        })
    };
    let on_search = {
        let search = search.clone();
        Callback::from(move |value: String| search.set(value))
    };
    let on_role = {
        let role = role.clone();
        Callback::from(move |event: Event| role.set(select_value(&event)))
    };
    let on_status = {
        let status = status.clone();
        Callback::from(move |event: Event| status.set(select_value(&event)))
    };
    let on_action = {
        let refresh = refresh.clone();
        Callback::from(move |(action, user): (UserAction, UserListing)| {
            run_user_action(api.clone(), action, &user, refresh.clone());
        })
    };
    let on_export = {
        let shown = shown.clone();
        Callback::from(move |(format, mode): (ReportFormat, ReportMode)| {
            let rows: Vec<&UserListing> = shown.iter().collect();
            export_directory(&rows, format, mode);
        })
    };
    let on_refresh = {
        let refresh = refresh.clone();
        Callback::from(move |_| refresh.emit(()))
    };
    let on_select = (*tab == UserTab::Directory).then(|| {
        let selected = selected.clone();
        Callback::from(move |user: UserListing| selected.set(Some(user)))
    });
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |()| selected.set(None))
    };

    html! {
        <div class="flex flex-col gap-4">
            <div role="tablist" class="tabs tabs-boxed w-fit">
                {for [UserTab::Directory, UserTab::Verification].into_iter().map(|candidate| html! {
                    <button role="tab" class={classes!("tab", (*tab == candidate).then_some("tab-active"))}
                        onclick={select_tab(candidate)}>
                        {candidate.label()}
                    </button>
                })}
            </div>
            <div class="flex flex-wrap gap-2 items-center">
                <SearchInput value={(*search).clone()} on_input={on_search} placeholder="Search name, email or department..." />
                <select class="select select-bordered select-sm" onchange={on_role} aria-label="Role">
                    {for ROLE_OPTIONS.iter().map(|option| html! {
                        <option value={*option} selected={*role == *option}>{*option}</option>
                    })}
                </select>
                if *tab == UserTab::Verification {
                    <select class="select select-bordered select-sm" onchange={on_status} aria-label="Status">
                        {for STATUS_OPTIONS.iter().map(|option| html! {
                            <option value={*option} selected={*status == *option}>{*option}</option>
                        })}
                    </select>
                }
                <button class="btn btn-sm btn-ghost" onclick={on_refresh} aria-label="Refresh">
                    <i class="fas fa-rotate" aria-hidden="true"></i>
                </button>
                <div class="ml-auto">
                    <ExportMenu {on_export} disabled={shown.is_empty()} />
                </div>
            </div>
            {render_load(&users, |_| html! {
                <UserTable users={shown.clone()} on_action={Some(on_action.clone())} on_select={on_select.clone()} />
            })}
            if let Some(user) = (*selected).clone() {
                <UserSummaryModal {user} {on_close} />
            }
        </div>
    }
}
