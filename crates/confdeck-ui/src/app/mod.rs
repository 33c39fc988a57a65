use crate::components::configuration_detail::ConfigurationDetail;
use crate::components::configuration_list::ConfigurationList;
use crate::components::shell::AppShell;
use crate::core::nav::NavMenu;
use crate::core::routing::{ROOT_PATH, View, resolve};
use crate::core::service::ConfigurationService;
use crate::services::api::HttpSource;
use gloo::console;
use preferences::{SourceKind, api_base_url, load_source};
pub(crate) use routes::Route;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

mod preferences;
mod routes;

#[function_component(ConfdeckApp)]
pub(crate) fn confdeck_app() -> Html {
    let service = use_memo(|_| build_service(), ());
    let menu = use_memo(|_| NavMenu::default(), ());

    html! {
        <ContextProvider<ConfigurationService> context={(*service).clone()}>
            <BrowserRouter>
                <Routed menu={(*menu).clone()} />
            </BrowserRouter>
        </ContextProvider<ConfigurationService>>
    }
}

#[derive(Properties, PartialEq)]
struct RoutedProps {
    menu: NavMenu,
}

/// Resolves the browser location and either redirects or renders the matching view.
///
/// Redirects replace the current history entry so Back never lands on a
/// path that immediately redirects again.
#[function_component(Routed)]
fn routed(props: &RoutedProps) -> Html {
    let location = use_location();
    let navigator = use_navigator();
    let path = location
        .as_ref()
        .map_or_else(|| ROOT_PATH.to_string(), |location| location.path().to_string());
    let resolution = resolve(&path);
    let redirect = resolution
        .redirected()
        .then(|| Route::from(resolution.view.clone()));

    use_effect_with_deps(
        move |target: &Option<Route>| {
            if let (Some(navigator), Some(target)) = (navigator, target) {
                console::debug!("redirecting", path, target.to_path());
                navigator.replace(target);
            }
            || ()
        },
        redirect.clone(),
    );

    if redirect.is_some() {
        return html! {};
    }

    let content = match resolution.view {
        View::List => html! { <ConfigurationList /> },
        View::Detail { config_name } => html! { <ConfigurationDetail {config_name} /> },
    };

    html! {
        <AppShell menu={props.menu.clone()} current_path={resolution.final_path}>
            {content}
        </AppShell>
    }
}

fn build_service() -> ConfigurationService {
    match load_source() {
        SourceKind::Http => {
            let base_url = api_base_url();
            console::info!("using REST configuration source", base_url.clone());
            ConfigurationService::new(Rc::new(HttpSource::new(base_url)))
        }
        SourceKind::Mock => ConfigurationService::mock(),
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<ConfdeckApp>::with_root(root).render();
    } else {
        yew::Renderer::<ConfdeckApp>::new().render();
    }
}
