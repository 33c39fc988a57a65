use crate::app::Route;
use crate::components::status::{flag, load_status};
use crate::core::draft::{Draft, SaveStatus};
use crate::core::service::ConfigurationService;
use crate::core::view_state::LoadState;
use confdeck_model::Property;
use gloo::console;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub(crate) struct ConfigurationDetailProps {
    pub config_name: String,
}

#[function_component(ConfigurationDetail)]
pub(crate) fn configuration_detail(props: &ConfigurationDetailProps) -> Html {
    let service = use_context::<ConfigurationService>();
    let state = use_state(LoadState::<Draft>::default);
    let save = use_state(|| SaveStatus::Idle);
    {
        let state = state.clone();
        let save = save.clone();
        let service = service.clone();
        use_effect_with_deps(
            move |name: &String| {
                state.set(LoadState::Loading);
                save.set(SaveStatus::Idle);
                let name = name.clone();
                match service {
                    Some(service) => yew::platform::spawn_local(async move {
                        let result = service.fetch_by_name(&name).await;
                        if let Err(err) = &result {
                            console::warn!("fetching configuration failed", name, err.describe());
                        }
                        state.set(LoadState::from_result(result.map(Draft::new)));
                    }),
                    None => state.set(LoadState::Failed(
                        "configuration service unavailable".to_string(),
                    )),
                }
                || ()
            },
            props.config_name.clone(),
        );
    }

    let on_value = {
        let state = state.clone();
        let save = save.clone();
        Callback::from(move |(key, value): (String, String)| {
            if !save.accepts_edits() {
                return;
            }
            let mut next = (*state).clone();
            if let LoadState::Ready(draft) = &mut next {
                draft.set_value(&key, value);
            }
            save.set(SaveStatus::Idle);
            state.set(next);
        })
    };

    let on_reset = {
        let state = state.clone();
        let save = save.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*state).clone();
            if let LoadState::Ready(draft) = &mut next {
                draft.reset();
            }
            save.set(SaveStatus::Idle);
            state.set(next);
        })
    };

    let on_save = {
        let state = state.clone();
        let save = save.clone();
        Callback::from(move |_: MouseEvent| {
            let (Some(service), Some(draft)) = (service.clone(), state.ready().cloned()) else {
                return;
            };
            save.set(SaveStatus::Saving);
            let state = state.clone();
            let save = save.clone();
            yew::platform::spawn_local(async move {
                match service.update(draft.to_update()).await {
                    Ok(stored) => {
                        let mut next = draft;
                        next.commit(stored);
                        state.set(LoadState::Ready(next));
                        save.set(SaveStatus::Saved);
                    }
                    Err(err) => {
                        console::error!("saving configuration failed", err.describe());
                        save.set(SaveStatus::Failed(err.describe()));
                    }
                }
            });
        })
    };

    let Some(draft) = state.ready() else {
        return html! {
            <section class="configuration-detail">
                {back_link()}
                {load_status(&*state)}
            </section>
        };
    };
    let config = draft.current();
    let editable = draft.editable();
    let dirty = draft.is_dirty();
    let busy = save.is_saving();

    html! {
        <section class="configuration-detail">
            {back_link()}
            <header>
                <h2>{config.name.clone()}</h2>
                <p class="mono muted">{config.uri.clone()}</p>
                <div class="flags">
                    <span>{"Loaded "}{flag(config.loaded)}</span>
                    <span>{"Storable "}{flag(config.storable)}</span>
                    <span>{"Updateable "}{flag(config.updateable)}</span>
                </div>
            </header>
            <table class="table">
                <thead>
                    <tr>
                        <th>{"Key"}</th>
                        <th>{"Value"}</th>
                        <th>{"Type"}</th>
                        <th>{"Description"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for config.properties.property.iter().map(|property| {
                        property_row(property, editable, busy, &on_value)
                    })}
                </tbody>
            </table>
            {if editable {
                html! {
                    <div class="actions">
                        <button class="ghost" disabled={!dirty || busy} onclick={on_reset}>{"Reset"}</button>
                        <button class="solid" disabled={!dirty || busy} onclick={on_save}>{"Save"}</button>
                        {save_status(&save)}
                    </div>
                }
            } else {
                html! { <p class="muted">{"This configuration is read-only."}</p> }
            }}
        </section>
    }
}

fn back_link() -> Html {
    html! {
        <Link<Route> to={Route::Configurations} classes={classes!("back")}>{"← Configurations"}</Link<Route>>
    }
}

fn property_row(
    property: &Property,
    editable: bool,
    busy: bool,
    on_value: &Callback<(String, String)>,
) -> Html {
    let value = if editable {
        let key = property.name.clone();
        let on_value = on_value.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_value.emit((key.clone(), input.value()));
        });
        html! { <input value={property.value.clone()} {oninput} disabled={busy} aria-label={property.name.clone()} /> }
    } else {
        html! { <span>{property.value.clone()}</span> }
    };

    html! {
        <tr key={property.name.clone()}>
            <td class="mono">{property.name.clone()}</td>
            <td>{value}</td>
            <td class="muted">{property.kind.clone()}</td>
            <td class="muted">{property.description.clone()}</td>
        </tr>
    }
}

fn save_status(status: &SaveStatus) -> Html {
    match status {
        SaveStatus::Idle => html! {},
        SaveStatus::Saving => html! { <span class="pill subtle">{"Saving…"}</span> },
        SaveStatus::Saved => html! { <span class="pill ok">{"Saved"}</span> },
        SaveStatus::Failed(message) => html! { <span class="pill error">{message.clone()}</span> },
    }
}
