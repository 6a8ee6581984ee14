use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub message: AttrValue,
    #[prop_or(AttrValue::Static("fas fa-inbox"))]
    pub icon: AttrValue,
    /// Renders as an error banner instead of a neutral notice.
    #[prop_or_default]
    pub error: bool,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    let class = if props.error {
        "empty-state text-error"
    } else {
        "empty-state text-base-content/60"
    };
    html! {
        <div {class} role={if props.error { "alert" } else { "status" }}>
            <i class={props.icon.clone()} aria-hidden="true"></i>
            <p>{props.message.clone()}</p>
        </div>
    }
}
