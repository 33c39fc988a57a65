use crate::core::view_state::LoadState;
use yew::prelude::*;

/// Placeholder rendered while a view is not [`LoadState::Ready`].
pub(crate) fn load_status<T>(state: &LoadState<T>) -> Html {
    match state {
        LoadState::Loading => html! {
            <div class="status loading" role="status" aria-live="polite">{"Loading…"}</div>
        },
        LoadState::NotFound(name) => html! {
            <div class="status warn" role="alert">
                <strong>{"Not found"}</strong>
                <p>{format!("No configuration named '{name}'.")}</p>
            </div>
        },
        LoadState::Failed(message) => html! {
            <div class="status error" role="alert">
                <strong>{"Request failed"}</strong>
                <p>{message.clone()}</p>
            </div>
        },
        LoadState::Ready(_) => html! {},
    }
}

pub(crate) fn flag(value: bool) -> Html {
    html! {
        <span class={classes!("pill", if value { "ok" } else { "subtle" })}>
            {if value { "yes" } else { "no" }}
        </span>
    }
}
