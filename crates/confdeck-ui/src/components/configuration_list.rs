use crate::app::Route;
use crate::components::status::{flag, load_status};
use crate::core::service::ConfigurationService;
use crate::core::view_state::LoadState;
use confdeck_model::OrderedConfiguration;
use gloo::console;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(ConfigurationList)]
pub(crate) fn configuration_list() -> Html {
    let service = use_context::<ConfigurationService>();
    let state = use_state(LoadState::<Vec<OrderedConfiguration>>::default);
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                match service {
                    Some(service) => yew::platform::spawn_local(async move {
                        let result = service.fetch_all().await;
                        if let Err(err) = &result {
                            console::error!("fetching configurations failed", err.describe());
                        }
                        state.set(LoadState::from_result(result));
                    }),
                    None => state.set(LoadState::Failed(
                        "configuration service unavailable".to_string(),
                    )),
                }
                || ()
            },
            (),
        );
    }

    let Some(rows) = state.ready() else {
        return load_status(&*state);
    };

    html! {
        <section class="configurations">
            <h2>{"Configurations"}</h2>
            <table class="table">
                <thead>
                    <tr>
                        <th>{"#"}</th>
                        <th>{"Name"}</th>
                        <th>{"URI"}</th>
                        <th>{"Properties"}</th>
                        <th>{"Loaded"}</th>
                        <th>{"Storable"}</th>
                        <th>{"Updateable"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for rows.iter().map(row)}
                </tbody>
            </table>
        </section>
    }
}

fn row(entry: &OrderedConfiguration) -> Html {
    let config = &entry.configuration;
    html! {
        <tr key={config.name.clone()}>
            <td>{entry.order.to_string()}</td>
            <td>
                <Link<Route> to={Route::ConfigurationDetail { config_name: config.name.clone() }}>
                    {config.name.clone()}
                </Link<Route>>
            </td>
            <td class="mono">{config.uri.clone()}</td>
            <td>{config.property_count().to_string()}</td>
            <td>{flag(config.loaded)}</td>
            <td>{flag(config.storable)}</td>
            <td>{flag(config.updateable)}</td>
        </tr>
    }
}
