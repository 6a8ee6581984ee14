use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct StatCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub icon: AttrValue,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
}

#[function_component(StatCard)]
pub(crate) fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat bg-base-100 rounded-box shadow">
            <div class="stat-figure text-primary">
                <i class={props.icon.clone()} aria-hidden="true"></i>
            </div>
            <div class="stat-title">{props.label.clone()}</div>
            <div class="stat-value">{props.value.clone()}</div>
            if let Some(hint) = &props.hint {
                <div class="stat-desc">{hint.clone()}</div>
            }
        </div>
    }
}
