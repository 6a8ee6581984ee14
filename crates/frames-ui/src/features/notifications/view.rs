//! Every notification for the signed-in account.

use crate::app::Route;
use crate::app::api::use_api;
use crate::app::session::use_current_user;
use crate::components::atoms::EmptyState;
use crate::components::load::{Load, render_load};
use crate::core::store::AppStore;
use frames_api_models::NotificationItem;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(NotificationsPage)]
pub(crate) fn notifications_page() -> Html {
    let api = use_api();
    let user_id = use_current_user().map(|user| user.id);
    let read_marks = use_selector(|store: &AppStore| store.read_marks.clone());
    let navigator = use_navigator();
    let items = use_state(|| Load::<Vec<NotificationItem>>::Loading);

    {
        let items = items.clone();
        use_effect_with_deps(
            move |user_id: &Option<i64>| {
                if let Some(id) = *user_id {
                    spawn_local(async move {
                        let result = api.fetch_notifications(id, None).await;
                        items.set(Load::from_result(result, "Unable to load notifications."));
                    });
                }
                || ()
            },
            user_id,
        );
    }

    let on_mark_all = {
        let items = items.clone();
        Callback::from(move |_| {
            if let Some(list) = items.ready() {
                let list = list.clone();
                Dispatch::<AppStore>::new().reduce_mut(move |store| store.read_marks.mark_all(&list));
            }
        })
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex justify-between items-center">
                    <h3 class="card-title text-base">
                        {"All Notifications"}
                        if let Some(list) = items.ready() {
                            <span class="badge badge-primary">{format!("{} unread", read_marks.unread_count(list))}</span>
                        }
                    </h3>
                    <button class="btn btn-sm btn-ghost" onclick={on_mark_all}>{"Mark all as read"}</button>
                </div>
                {render_load(&items, |list| {
                    if list.is_empty() {
                        return html! { <EmptyState message="You're all caught up." icon="far fa-bell-slash" /> };
                    }
                    html! {
                        <ul class="divide-y divide-base-200">
                            {for list.iter().map(|item| {
                                let read = read_marks.is_read(item);
                                let id = item.id.clone();
                                let link = item.link.clone();
                                let navigator = navigator.clone();
                                let onclick = Callback::from(move |_| {
                                    let id = id.clone();
                                    Dispatch::<AppStore>::new().reduce_mut(move |store| store.read_marks.mark(&id));
                                    if let (Some(link), Some(navigator)) = (&link, &navigator) {
                                        navigator.push(&Route::from_path(link));
                                    }
                                });
                                html! {
                                    <li>
                                        <button class={classes!("w-full", "flex", "gap-3", "p-3", "text-left", (!read).then_some("bg-base-200"))} {onclick}>
                                            <i class={item.icon.clone().unwrap_or_else(|| "fas fa-bell".to_string())} aria-hidden="true"></i>
                                            <span class="flex-1">{item.text.clone()}</span>
                                            if let Some(time) = &item.time {
                                                <span class="text-xs opacity-60">{time.clone()}</span>
                                            }
                                            if !read {
                                                <span class="badge badge-xs badge-primary" aria-label="Unread"></span>
                                            }
                                        </button>
                                    </li>
                                }
                            })}
                        </ul>
                    }
                })}
            </div>
        </div>
    }
}
