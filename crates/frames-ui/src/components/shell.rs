//! Signed-in layout: route gate, sidebar, header and notification bell.
//!
//! # Design
//! - Gating runs on every render; redirects happen in an effect so hooks stay unconditional.
//! - The bell polls on a fixed interval and aborts the in-flight request on teardown.

use crate::app::Route;
use crate::app::api::use_api;
use crate::core::config::NOTIFICATION_POLL_MS;
use crate::core::nav::{nav_items, page_title};
use crate::core::notifications::badge_label;
use crate::core::session::{Area, Gate, avatar_url, display_name, gate};
use crate::core::store::AppStore;
use frames_api_models::NotificationItem;
use gloo::console;
use gloo::dialogs;
use gloo::timers::callback::Interval;
use std::rc::Rc;
use web_sys::AbortController;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

const BELL_PREVIEW: usize = 5;
const UNVERIFIED_ALERT: &str =
    "Your account is not verified yet. Please wait for approval or contact the administrator.";

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub area: Area,
    pub children: Children,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let session = use_selector(|store: &AppStore| store.session.clone());
    let read_marks = use_selector(|store: &AppStore| store.read_marks.clone());
    let navigator = use_navigator();
    let location = use_location();
    let api = use_api();
    let nav_open = use_state(|| false);
    let bell_open = use_state(|| false);
    let notifications = use_state(Vec::<NotificationItem>::new);
    let verdict = gate((*session).as_ref(), props.area);
    let user_id = (*session).as_ref().map(|user| user.id);

    {
        let navigator = navigator.clone();
        use_effect_with_deps(
            move |verdict: &Gate| {
                match *verdict {
                    Gate::Allow => {}
                    Gate::Redirect(destination) => {
                        if let Some(navigator) = &navigator {
                            navigator.replace(&Route::from(destination));
                        }
                    }
                    Gate::SignOut => {
                        dialogs::alert(UNVERIFIED_ALERT);
                        Dispatch::<AppStore>::new().reduce_mut(AppStore::sign_out);
                        if let Some(navigator) = &navigator {
                            navigator.replace(&Route::Landing);
                        }
                    }
                }
                || ()
            },
            verdict,
        );
    }
    {
        let notifications = notifications.clone();
        use_effect_with_deps(
            move |user_id: &Option<i64>| {
                let controller = AbortController::new().ok();
                let mut interval = None;
                if let Some(id) = *user_id {
                    let signal = controller.as_ref().map(AbortController::signal);
                    let poll = Rc::new(move || {
                        let api = api.clone();
                        let notifications = notifications.clone();
                        let signal = signal.clone();
                        spawn_local(async move {
                            match api.fetch_notifications(id, signal.as_ref()).await {
                                Ok(items) => notifications.set(items),
                                Err(err) if err.is_aborted() => {}
                                Err(err) => {
                                    console::error!("notification poll failed", err.to_string());
                                }
                            }
                        });
                    });
                    poll();
                    interval = Some(Interval::new(NOTIFICATION_POLL_MS, move || poll()));
                }
                move || {
                    drop(interval);
                    if let Some(controller) = controller {
                        controller.abort();
                    }
                }
            },
            user_id,
        );
    }

    if verdict != Gate::Allow {
        return html! {};
    }
    let Some(user) = (*session).clone() else {
        return html! {};
    };

    let path = location
        .as_ref()
        .map(|location| location.path().to_string())
        .unwrap_or_default();
    let name = display_name(Some(&user));
    let unread = read_marks.unread_count(&notifications);

    let toggle_nav = {
        let nav_open = nav_open.clone();
        Callback::from(move |_| nav_open.set(!*nav_open))
    };
    let toggle_bell = {
        let bell_open = bell_open.clone();
        Callback::from(move |_| bell_open.set(!*bell_open))
    };
    let mark_all = {
        let notifications = notifications.clone();
        Callback::from(move |_| {
            let items = (*notifications).clone();
            Dispatch::<AppStore>::new().reduce_mut(|store| store.read_marks.mark_all(&items));
        })
    };
    let logout = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            Dispatch::<AppStore>::new().reduce_mut(AppStore::sign_out);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Landing);
            }
        })
    };

    html! {
        <div class="drawer lg:drawer-open">
            <input id="frames-nav" type="checkbox" class="drawer-toggle" checked={*nav_open} />
            <div class="drawer-content flex flex-col min-h-screen">
                <header class="navbar bg-base-100 shadow-sm gap-2">
                    <button class="btn btn-ghost lg:hidden" aria-label="Open navigation" onclick={toggle_nav.clone()}>
                        <i class="fas fa-bars" aria-hidden="true"></i>
                    </button>
                    <h1 class="flex-1 text-xl font-semibold">{page_title(&path)}</h1>
                    <div class="dropdown dropdown-end">
                        <button class="btn btn-ghost btn-circle indicator" aria-label="Notifications" onclick={toggle_bell}>
                            <i class="far fa-bell" aria-hidden="true"></i>
                            if let Some(label) = badge_label(unread) {
                                <span class="badge badge-sm badge-error indicator-item">{label}</span>
                            }
                        </button>
                        if *bell_open {
                            <div class="dropdown-content card card-compact w-80 bg-base-100 shadow z-40">
                                <div class="card-body">
                                    <div class="flex justify-between items-center">
                                        <strong>{"Notifications"}</strong>
                                        <button class="btn btn-link btn-xs" onclick={mark_all}>{"Mark all read"}</button>
                                    </div>
                                    if notifications.is_empty() {
                                        <p class="text-sm opacity-60">{"No notifications"}</p>
                                    }
                                    {for notifications.iter().take(BELL_PREVIEW).map(|item| bell_item(item, read_marks.is_read(item), navigator.clone()))}
                                    <Link<Route> to={Route::Notifications} classes="btn btn-sm btn-ghost">{"View all"}</Link<Route>>
                                </div>
                            </div>
                        }
                    </div>
                    <div class="flex items-center gap-2">
                        <img class="w-9 h-9 rounded-full" src={avatar_url(&name)} alt={name.clone()} />
                        <div class="hidden md:flex flex-col leading-tight">
                            <span class="font-medium">{name.clone()}</span>
                            <span class="text-xs opacity-60">{user.role.label()}</span>
                        </div>
                    </div>
                </header>
                <main class="p-4 lg:p-6 flex-1">
                    {for props.children.iter()}
                </main>
            </div>
            <div class="drawer-side z-30">
                <label for="frames-nav" class="drawer-overlay" onclick={toggle_nav}></label>
                <aside class="menu w-64 min-h-full bg-primary text-primary-content">
                    <div class="px-4 py-6">
                        <strong class="text-2xl tracking-wide">{"FRAMES"}</strong>
                        <p class="text-xs opacity-70">{"Facial Recognition Attendance"}</p>
                    </div>
                    <ul>
                        {for nav_items(props.area, user.role).into_iter().map(|item| {
                            let active = path == item.path;
                            html! {
                                <li>
                                    <Link<Route> to={Route::from_path(item.path)} classes={classes!(active.then_some("active"))}>
                                        <i class={item.icon} aria-hidden="true"></i>{item.label}
                                    </Link<Route>>
                                </li>
                            }
                        })}
                    </ul>
                    <div class="mt-auto p-4">
                        <button class="btn btn-outline btn-sm w-full" onclick={logout}>
                            <i class="fas fa-sign-out-alt" aria-hidden="true"></i>{" Logout"}
                        </button>
                    </div>
                </aside>
            </div>
        </div>
    }
}

fn bell_item(item: &NotificationItem, read: bool, navigator: Option<Navigator>) -> Html {
    let id = item.id.clone();
    let link = item.link.clone();
    let onclick = Callback::from(move |_| {
        let id = id.clone();
        Dispatch::<AppStore>::new().reduce_mut(move |store| store.read_marks.mark(&id));
        if let (Some(link), Some(navigator)) = (&link, &navigator) {
            navigator.push(&Route::from_path(link));
        }
    });
    html! {
        <button class={classes!("flex", "gap-2", "text-left", "p-2", "rounded", (!read).then_some("bg-base-200"))} {onclick}>
            <i class={item.icon.clone().unwrap_or_else(|| "fas fa-bell".to_string())} aria-hidden="true"></i>
            <span class="flex-1 text-sm">{item.text.clone()}</span>
            if let Some(time) = &item.time {
                <span class="text-xs opacity-60">{time.clone()}</span>
            }
        </button>
    }
}
