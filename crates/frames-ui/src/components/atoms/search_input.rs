use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SearchInputProps {
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or(AttrValue::Static("Search..."))]
    pub placeholder: AttrValue,
}

#[function_component(SearchInput)]
pub(crate) fn search_input(props: &SearchInputProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_input.emit(input.value());
        })
    };
    html! {
        <label class="input input-bordered input-sm flex items-center gap-2">
            <i class="fas fa-search" aria-hidden="true"></i>
            <input
                type="search"
                class="grow"
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                aria-label={props.placeholder.clone()}
                {oninput}
            />
        </label>
    }
}
