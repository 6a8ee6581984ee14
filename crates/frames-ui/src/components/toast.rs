use crate::core::config::TOAST_TIMEOUT_MS;
use crate::core::store::{AppStore, Toast, ToastKind};
use gloo::timers::callback::Timeout;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

/// Queue a toast from anywhere in the app.
pub(crate) fn notify(kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    Dispatch::<AppStore>::new().reduce_mut(|store| {
        store.push_toast(kind, message);
    });
}

#[function_component(ToastHost)]
pub(crate) fn toast_host() -> Html {
    let toasts = use_selector(|store: &AppStore| store.toasts.clone());
    let on_dismiss = Callback::from(|id: u64| {
        Dispatch::<AppStore>::new().reduce_mut(|store| store.dismiss_toast(id));
    });
    {
        let on_dismiss = on_dismiss.clone();
        use_effect_with_deps(
            move |list: &std::rc::Rc<Vec<Toast>>| {
                let handles: Vec<Timeout> = list
                    .iter()
                    .map(|toast| {
                        let on_dismiss = on_dismiss.clone();
                        let id = toast.id;
                        Timeout::new(TOAST_TIMEOUT_MS, move || on_dismiss.emit(id))
                    })
                    .collect();
                move || drop(handles)
            },
            toasts.clone(),
        );
    }

    html! {
        <div class="toast toast-end toast-bottom z-50" aria-live="polite" aria-atomic="true">
            {for toasts.iter().map(|toast| render_toast(toast, on_dismiss.clone()))}
        </div>
    }
}

fn render_toast(toast: &Toast, on_dismiss: Callback<u64>) -> Html {
    let id = toast.id;
    let on_close = Callback::from(move |_| on_dismiss.emit(id));
    html! {
        <div class={classes!("alert", toast.kind.class())} role="status">
            <span>{toast.message.clone()}</span>
            <button class="btn btn-ghost btn-xs" aria-label="Dismiss" onclick={on_close}>{"✕"}</button>
        </div>
    }
}
